//! Analog math helpers shared by sketches.

/// Linear interpolation between `start` and `end`.
#[inline]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}

/// Evenly spaced values over `[start, stop]`.
///
/// With `endpoint`, the last value equals `stop` and the step is
/// `(stop - start) / (num - 1)`. Without it, the step is
/// `(stop - start) / num` and the final value is dropped, yielding
/// `num - 1` entries.
pub fn linspace(start: f64, stop: f64, num: usize, endpoint: bool) -> Vec<f64> {
    if num == 0 {
        return Vec::new();
    }
    if num == 1 {
        return vec![start];
    }

    let divisor = if endpoint { num - 1 } else { num } as f64;
    let step = (stop - start) / divisor;
    let mut values: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
    if !endpoint {
        values.pop();
    }
    values
}

/// Map `value` from `[min1, max1]` into `[min2, max2]`, optionally clamped
/// to the output interval.
pub fn remap(value: f64, min1: f64, max1: f64, min2: f64, max2: f64, clamp: bool) -> f64 {
    let mapped = (value - min1) / (max1 - min1) * (max2 - min2) + min2;
    if clamp {
        mapped.max(min2).min(max2)
    } else {
        mapped
    }
}

/// Clamp to the unit interval.
#[inline]
pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Euclidean distance between two points.
#[inline]
pub fn dist(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}
