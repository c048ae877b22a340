//! Seedable pseudo-random number generator (xorshift64).
//! Backs the engine's `random_int` / `random_decimal` helpers.

#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        // Top 53 bits fill an f64 mantissa exactly.
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Whole number in `[min, max)`. Returns `min` for an empty range.
    pub fn range_int(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let span = max.abs_diff(min);
        min.wrapping_add((self.next_u64() % span) as i64)
    }

    /// Number in `[min, max]` rounded to one decimal place.
    pub fn range_decimal(&mut self, min: f64, max: f64) -> f64 {
        let v = self.next_f64() * (max - min) + min;
        (v * 10.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut rng1 = Rng::new(42);
        let mut rng2 = Rng::new(42);
        for _ in 0..10 {
            assert_eq!(rng1.range_int(0, 1000), rng2.range_int(0, 1000));
        }
    }

    #[test]
    fn rng_zero_seed_handled() {
        let mut rng = Rng::new(0);
        let _ = rng.range_int(0, 100);
    }

    #[test]
    fn int_range_bounds() {
        let mut rng = Rng::new(7);
        for _ in 0..1000 {
            let v = rng.range_int(-5, 5);
            assert!((-5..5).contains(&v), "out of range: {}", v);
        }
        assert_eq!(rng.range_int(3, 3), 3);
    }

    #[test]
    fn full_i64_range_does_not_overflow() {
        let mut rng = Rng::new(3);
        for _ in 0..100 {
            let v = rng.range_int(i64::MIN, i64::MAX);
            assert!(v < i64::MAX);
        }
        for _ in 0..100 {
            let v = rng.range_int(-1, i64::MAX);
            assert!((-1..i64::MAX).contains(&v));
        }
    }

    #[test]
    fn decimal_range_includes_max() {
        let mut rng = Rng::new(11);
        let draws: Vec<f64> = (0..2000).map(|_| rng.range_decimal(1.0, 2.0)).collect();
        assert!(draws.iter().all(|v| (1.0..=2.0).contains(v)));
        assert!(draws.iter().any(|v| *v == 2.0));
    }

    #[test]
    fn decimal_has_one_place() {
        let mut rng = Rng::new(99);
        for _ in 0..100 {
            let v = rng.range_decimal(1.0, 2.0);
            assert!((1.0..=2.0).contains(&v));
            assert!(((v * 10.0).round() - v * 10.0).abs() < 1e-9);
        }
    }
}
