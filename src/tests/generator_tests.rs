//! Generator facade: worker selection and ID layout

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use crate::tests::test_utils::{assert_unique_ids, ManualClock, BASE};
    use crate::{ConfigError, IdGenerator, Method, Options};

    fn regression_options(method: Method) -> Options {
        Options::builder(12)
            .base_time(BASE)
            .min_seq(Options::RESERVED_SEQUENCES)
            .method(method)
            .build()
            .unwrap()
    }

    #[test]
    fn test_drift_method_uses_turn_back_band() {
        let clock = ManualClock::at_tick(100);
        let generator =
            IdGenerator::with_clock(regression_options(Method::Drift), clock.clone()).unwrap();

        generator.next_id();
        clock.set_tick(99);
        assert_eq!(generator.extract.decompose(generator.next_id()), (99, 12, 1));
    }

    #[test]
    fn test_simple_method_packs_regressed_tick() {
        let clock = ManualClock::at_tick(100);
        let generator =
            IdGenerator::with_clock(regression_options(Method::Simple), clock.clone()).unwrap();

        generator.next_id();
        clock.set_tick(99);
        assert_eq!(generator.extract.decompose(generator.next_id()), (99, 12, 5));
    }

    #[test]
    fn test_clock_before_base_time_rejected() {
        let clock = ManualClock::at_tick(-1);
        let options = Options::builder(1).base_time(BASE).build().unwrap();
        let err = IdGenerator::with_clock(options, clock).unwrap_err();
        assert_eq!(
            err,
            ConfigError::BaseTimeInFuture {
                base_time: BASE,
                now: BASE - 1,
            }
        );
    }

    #[test]
    fn test_ids_decompose_into_configured_fields() {
        let options = Options::builder(21)
            .worker_id_bits(5)
            .seq_bits(8)
            .build()
            .unwrap();
        let generator = IdGenerator::new(options).unwrap();
        let mut last_tick = 0;

        for i in 0..2_000 {
            let id = generator.next_id();
            let (tick, worker, sequence) = generator.extract.decompose(id);

            assert_eq!(worker, 21);
            assert_eq!(sequence, (id & 0xFF) as u32);
            assert_eq!(worker, ((id >> 8) & 0x1F) as u16);
            assert_eq!(tick, (id >> 13) as i64);
            assert!(tick >= last_tick, "tick went from {last_tick} to {tick}");
            last_tick = tick;

            if i % 500 == 0 {
                thread::sleep(Duration::from_millis(1));
            }
        }
    }

    #[test]
    fn test_datetime_close_to_now() {
        let generator = IdGenerator::new(Options::new(1).unwrap()).unwrap();
        let before = crate::time::unix_time_ms();
        let at = generator.extract.datetime(generator.next_id()).unwrap();

        // Drift may put the tick slightly ahead of the wall clock
        let offset = at.timestamp_millis() - before;
        assert!((0..1_000).contains(&offset), "offset {offset}ms");
    }

    #[test]
    fn test_default_options_survive_regression() {
        let clock = ManualClock::at_tick(99);
        let options = Options::builder(1).base_time(BASE).build().unwrap();
        let generator = IdGenerator::with_clock(options, clock.clone()).unwrap();

        let mut ids: Vec<u64> = (0..3).map(|_| generator.next_id()).collect();
        clock.set_tick(100);
        ids.push(generator.next_id());

        clock.set_tick(99);
        ids.extend((0..3).map(|_| generator.next_id()));
        clock.set_tick(101);
        ids.push(generator.next_id());

        assert_unique_ids(&ids, 8);
    }
}
