//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Convert a usize to f64 while allowing precision loss in a single location.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usize_conversion_is_exact_for_small_values() {
        assert!((usize_to_f64(0) - 0.0).abs() < f64::EPSILON);
        assert!((usize_to_f64(10_000) - 10_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn usize_conversion_stays_finite_at_the_extreme() {
        assert!(usize_to_f64(usize::MAX).is_finite());
    }
}
