// File: crates/rasterplot-core/src/ranges.rs
// Summary: Evenly spaced value constructors used for ticks and for building sample data.

/// `steps` values from `start` to `end` inclusive.
/// One step yields just `start`; zero steps yields nothing.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => return Vec::new(),
        1 => return vec![start],
        _ => {}
    }
    let step = (end - start) / (steps as f64 - 1.0);
    let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
    // pin the last value so accumulated rounding never misses `end`
    out[steps - 1] = end;
    out
}

/// `len` values starting at `start`, `step` apart.
pub fn uniform(start: f64, step: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| start + i as f64 * step).collect()
}

/// Integers `min..max` (end exclusive) as floats; empty when `max <= min`.
pub fn int_range(min: i64, max: i64) -> Vec<f64> {
    (min..max).map(|i| i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_ends() {
        let v = linspace(-0.3, 1.7, 7);
        assert_eq!(v.len(), 7);
        assert_eq!(v[0], -0.3);
        assert_eq!(v[6], 1.7);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn linspace_short_lengths() {
        assert!(linspace(2.0, 5.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(2.0, 5.0, 2), vec![2.0, 5.0]);
    }

    #[test]
    fn uniform_and_int_range() {
        assert_eq!(uniform(1.0, 0.5, 3), vec![1.0, 1.5, 2.0]);
        assert!(uniform(0.0, 1.0, 0).is_empty());
        assert_eq!(int_range(-2, 1), vec![-2.0, -1.0, 0.0]);
        assert!(int_range(3, 3).is_empty());
    }
}
