use bingo::{GameError, Letter, NumberPool, MAX_NUMBER};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn draws_never_repeat_and_exhaust(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut pool = NumberPool::new();
        let mut seen = [false; MAX_NUMBER as usize + 1];
        for _ in 0..MAX_NUMBER {
            let call = pool.draw(&mut rng).unwrap();
            prop_assert!(!seen[call.number as usize]);
            seen[call.number as usize] = true;
            prop_assert_eq!(Letter::of(call.number), Some(call.letter));
            prop_assert!(pool.has(call.number));
        }
        prop_assert!(pool.called().eq(1..=MAX_NUMBER));
        prop_assert_eq!(pool.draw(&mut rng), Err(GameError::PoolExhausted));
        prop_assert_eq!(pool.called_count(), MAX_NUMBER as usize);
    }

    #[test]
    fn partial_draws_count(seed in any::<u64>(), n in 0..MAX_NUMBER as usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut pool = NumberPool::new();
        for _ in 0..n {
            pool.draw(&mut rng).unwrap();
        }
        prop_assert_eq!(pool.called_count(), n);
        prop_assert_eq!(pool.remaining(), MAX_NUMBER as usize - n);
        prop_assert_eq!(pool.history().len(), n);
    }
}
