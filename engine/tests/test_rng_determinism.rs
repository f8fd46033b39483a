//! Tests for the scoped deterministic RNG
//!
//! These pin down the behavioral contract: identical key tuples replay
//! identical draw sequences, distinct tuples diverge, and every draw
//! operation respects its range. The derivation regression constant at the
//! bottom must never change across reimplementations.

use fh_engine::RngFactory;

#[test]
fn test_same_keys_same_sequence_interleaved() {
    let factory = RngFactory::new(b"test-master-key".to_vec());

    let mut rng1 = factory.for_keys(&["game1", "turn1", "entity1"]);
    let mut rng2 = factory.for_keys(&["game1", "turn1", "entity1"]);

    for i in 0..1000 {
        assert_eq!(rng1.uint64(), rng2.uint64(), "uint64 diverged at {}", i);
        assert_eq!(rng1.intn(100), rng2.intn(100), "intn diverged at {}", i);
        assert_eq!(rng1.float64(), rng2.float64(), "float64 diverged at {}", i);
    }
}

#[test]
fn test_two_factories_same_master_key_agree() {
    let factory1 = RngFactory::new(b"test-master-key".to_vec());
    let factory2 = RngFactory::new(b"test-master-key".to_vec());

    let mut rng1 = factory1.for_keys(&["game1", "turn1", "entity1"]);
    let mut rng2 = factory2.for_keys(&["game1", "turn1", "entity1"]);

    for _ in 0..100 {
        assert_eq!(rng1.uint64(), rng2.uint64());
    }
}

#[test]
fn test_different_keys_different_first_draw() {
    let factory = RngFactory::new(b"test-master-key".to_vec());

    let mut rng1 = factory.for_keys(&["a", "b"]);
    let mut rng2 = factory.for_keys(&["a", "c"]);
    assert_ne!(rng1.uint64(), rng2.uint64());

    let mut rng1 = factory.for_keys(&["game1", "turn1", "entity1"]);
    let mut rng2 = factory.for_keys(&["game1", "turn1", "entity2"]);
    assert_ne!(rng1.uint64(), rng2.uint64());
}

#[test]
fn test_key_order_matters() {
    let factory = RngFactory::new(b"test-master-key".to_vec());

    let mut rng1 = factory.for_keys(&["turn1", "game1"]);
    let mut rng2 = factory.for_keys(&["game1", "turn1"]);
    assert_ne!(rng1.uint64(), rng2.uint64());
}

#[test]
fn test_different_master_keys_diverge() {
    let mut rng1 = RngFactory::new(b"master-a".to_vec()).for_keys(&["game1"]);
    let mut rng2 = RngFactory::new(b"master-b".to_vec()).for_keys(&["game1"]);
    assert_ne!(rng1.uint64(), rng2.uint64());
}

#[test]
fn test_intn_range() {
    let factory = RngFactory::new(b"test-master-key".to_vec());

    for n in [1i64, 2, 3, 7, 8, 100, 65536] {
        let scope = n.to_string();
        let mut rng = factory.for_keys(&["range", scope.as_str()]);
        for _ in 0..100_000 {
            let v = rng.intn(n);
            assert!((0..n).contains(&v), "intn({}) returned {}", n, v);
        }
    }
}

#[test]
fn test_intn_power_of_two_residues_reachable() {
    let factory = RngFactory::new(b"test-master-key".to_vec());
    let mut rng = factory.for_keys(&["pow2"]);

    let mut counts = [0u32; 8];
    for _ in 0..100_000 {
        counts[rng.intn(8) as usize] += 1;
    }
    for (residue, count) in counts.iter().enumerate() {
        // Expected ~12500 per residue; a residue drought this deep would
        // mean the mask path is broken.
        assert!(
            *count > 10_000,
            "residue {} badly underrepresented: {}",
            residue,
            count
        );
    }
}

#[test]
fn test_intn_non_power_of_two_residues_reachable() {
    let factory = RngFactory::new(b"test-master-key".to_vec());
    let mut rng = factory.for_keys(&["reject"]);

    let mut counts = [0u32; 100];
    for _ in 0..100_000 {
        counts[rng.intn(100) as usize] += 1;
    }
    for (residue, count) in counts.iter().enumerate() {
        assert!(*count > 0, "residue {} never drawn", residue);
    }
}

#[test]
fn test_intn_one_always_zero() {
    let factory = RngFactory::new(b"test-master-key".to_vec());
    let mut rng = factory.for_keys(&["one"]);
    for _ in 0..1000 {
        assert_eq!(rng.intn(1), 0);
    }
}

#[test]
fn test_float64_bounds() {
    let factory = RngFactory::new(b"test-master-key".to_vec());
    let mut rng = factory.for_keys(&["float"]);

    for _ in 0..100_000 {
        let v = rng.float64();
        assert!((0.0..1.0).contains(&v), "float64 out of range: {}", v);
    }
}

#[test]
#[should_panic(expected = "invalid argument to intn")]
fn test_intn_zero_panics() {
    let factory = RngFactory::new(b"test-master-key".to_vec());
    factory.for_keys(&["bad"]).intn(0);
}

#[test]
#[should_panic(expected = "invalid argument to intn")]
fn test_intn_negative_panics() {
    let factory = RngFactory::new(b"test-master-key".to_vec());
    factory.for_keys(&["bad"]).intn(-5);
}

#[test]
fn test_scoped_regression_fixture() {
    // Frozen values; any change here is behavioral drift, not an
    // improvement.
    let factory = RngFactory::new(b"test-master-key".to_vec());
    let mut rng = factory.for_keys(&["game1", "turn1", "entity1"]);

    assert_eq!(rng.uint64(), 17394723168540021667);
    assert_eq!(rng.uint64(), 2751015720305241994);
    assert_eq!(rng.uint64(), 1191624428536978989);
    assert_eq!(rng.uint64(), 13000159862140179917);
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// intn stays in range for arbitrary bounds and scope keys.
        #[test]
        fn prop_intn_in_range(n in 1i64..=1_000_000, key in "[a-z]{1,12}") {
            let factory = RngFactory::new(b"prop-master-key".to_vec());
            let mut rng = factory.for_keys(&["prop", key.as_str()]);
            for _ in 0..64 {
                let v = rng.intn(n);
                prop_assert!((0..n).contains(&v));
            }
        }

        /// float64 stays in [0, 1) for arbitrary scope keys.
        #[test]
        fn prop_float64_in_range(key in "[a-z]{1,12}") {
            let factory = RngFactory::new(b"prop-master-key".to_vec());
            let mut rng = factory.for_keys(&["prop", key.as_str()]);
            for _ in 0..64 {
                let v = rng.float64();
                prop_assert!((0.0..1.0).contains(&v));
            }
        }

        /// Derivation is a pure function of (master key, key tuple).
        #[test]
        fn prop_rederivation_replays(key in "[a-z]{1,12}") {
            let factory = RngFactory::new(b"prop-master-key".to_vec());
            let mut rng1 = factory.for_keys(&["prop", key.as_str()]);
            let mut rng2 = factory.for_keys(&["prop", key.as_str()]);
            for _ in 0..32 {
                prop_assert_eq!(rng1.uint64(), rng2.uint64());
            }
        }
    }
}
