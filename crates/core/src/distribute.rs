use std::iter::FusedIterator;

/// Evenly spaced samples from `start` to `end`, both inclusive.
///
/// Yields exactly `n` values. When `n == 1` the only value is `end`, not
/// `start`; when `n == 0` nothing is yielded. A descending sequence is
/// produced when `start > end`.
///
/// ```
/// use colorlab_core::distribute;
///
/// let samples: Vec<f64> = distribute(0, 10, 6).collect();
/// assert_eq!(samples, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
/// ```
pub fn distribute(start: impl Into<f64>, end: impl Into<f64>, n: usize) -> Distribute {
    Distribute::new(start.into(), end.into(), n)
}

/// Iterator returned by [`distribute`].
///
/// Values are computed on demand and the iterator can only be consumed once.
#[derive(Debug, Clone)]
pub struct Distribute {
    start: f64,
    end: f64,
    step: f64,
    index: usize,
    len: usize,
}

impl Distribute {
    fn new(start: f64, end: f64, len: usize) -> Self {
        // n == 1 collapses onto `end`
        let (start, step) = match len {
            0 | 1 => (end, 0.0),
            _ => (start, (end - start) / (len - 1) as f64),
        };

        Self {
            start,
            end,
            step,
            index: 0,
            len,
        }
    }
}

impl Iterator for Distribute {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            return None;
        }

        let k = self.index;
        self.index += 1;

        // The last sample is pinned so rounding in k * step never misses `end`.
        if self.index == self.len {
            Some(self.end)
        } else {
            Some(self.start + k as f64 * self.step)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Distribute {}

impl FusedIterator for Distribute {}
