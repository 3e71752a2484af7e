//! Concurrency tests
//!
//! The registry is immutable after construction and is shared by
//! reference across threads. Loom models run under `--cfg loom`.

mod common;

use settings_core::{Configuration, SettingsCodec};

// ============================================================================
// Loom-based Tests
// ============================================================================

#[cfg(loom)]
mod loom_tests {
    use super::*;
    use loom::sync::Arc;
    use loom::thread;
    use settings_core::catalog::standard_registry;

    #[test]
    fn concurrent_validation_and_encoding() {
        loom::model(|| {
            let registry = Arc::new(standard_registry().unwrap());

            let handles: Vec<_> = (0..2)
                .map(|i| {
                    let registry = Arc::clone(&registry);
                    thread::spawn(move || {
                        let bridge = if i == 0 { "open" } else { "stones" };
                        let config = Configuration::defaults(&registry).with("bridge", bridge);
                        registry.validate(&config, true).unwrap();
                        SettingsCodec::new(&registry).encode(&config)
                    })
                })
                .collect();

            let strings: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_ne!(strings[0], strings[1]);
        });
    }
}

// ============================================================================
// Regular concurrency tests (without loom)
// ============================================================================

#[cfg(not(loom))]
mod stress_concurrency {
    use super::common::*;
    use super::*;
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;

    #[test]
    fn stress_shared_registry_first_use() {
        let barrier = Arc::new(Barrier::new(16));
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    standard() as *const _ as usize
                })
            })
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn stress_concurrent_round_trips() {
        let registry = standard();
        let expected = SettingsCodec::new(registry).encode(&Configuration::defaults(registry));
        let matches = AtomicUsize::new(0);

        thread::scope(|scope| {
            for _ in 0..32 {
                scope.spawn(|| {
                    let codec = SettingsCodec::new(registry);
                    let config = codec.decode(&expected).unwrap();
                    registry.validate(&config, true).unwrap();
                    if codec.encode(&config) == expected {
                        matches.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });

        assert_eq!(matches.load(Ordering::SeqCst), 32);
    }

    #[test]
    fn stress_parallel_validation_matches_sequential() {
        let registry = standard();
        let configs: Vec<Configuration> = (0..200)
            .map(|i| Configuration::new().with("trials", (i % 10) as i64))
            .collect();

        let parallel: Vec<bool> = configs
            .par_iter()
            .map(|c| registry.validate(c, true).is_ok())
            .collect();
        let sequential: Vec<bool> = configs
            .iter()
            .map(|c| registry.validate(c, true).is_ok())
            .collect();

        assert_eq!(parallel, sequential);
        // trials only goes up to 6
        assert_eq!(parallel.iter().filter(|ok| **ok).count(), 140);
    }
}
