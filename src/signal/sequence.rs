use std::ops::RangeInclusive;
use serde::Serialize;
use crate::signal::SignalError;
/// Finite run of real samples anchored at an integer time index.
///
/// Sample `k` of the run sits at time index `start + k`. A signal always holds at least one
/// sample; the constructor rejects empty runs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Signal {
    start: i64,
    samples: Vec<f64>,
}
impl Signal {
    pub fn new(samples: Vec<f64>, start: i64) -> Result<Self, SignalError> {
        if samples.is_empty() {
            return Err(SignalError::DegenerateInput);
        }
        Ok(Self { start, samples })
    }
    /// Callers guarantee `samples` is non-empty.
    pub(crate) fn from_nonempty(samples: Vec<f64>, start: i64) -> Self {
        debug_assert!(!samples.is_empty());
        Self { start, samples }
    }
    pub fn start(&self) -> i64 {
        self.start
    }
    /// Time index of the last sample.
    pub fn end(&self) -> i64 {
        self.start + self.samples.len() as i64 - 1
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
    pub fn indices(&self) -> RangeInclusive<i64> {
        self.start..=self.end()
    }
    /// `(time index, value)` pairs in increasing time order.
    pub fn points(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.indices().zip(self.samples.iter().copied())
    }
    /// Value at time index `n`, zero outside the support.
    pub fn value_at(&self, n: i64) -> f64 {
        if n < self.start {
            return 0.0;
        }
        self.samples
            .get((n - self.start) as usize)
            .copied()
            .unwrap_or(0.0)
    }
    /// Samples laid onto `range`, zero where the signal has no support.
    pub fn zero_padded(&self, range: RangeInclusive<i64>) -> Vec<f64> {
        range.map(|n| self.value_at(n)).collect()
    }
    /// Copy moved right by `shift` indices with every sample multiplied by `factor`.
    pub fn scaled_shifted(&self, shift: i64, factor: f64) -> Signal {
        Signal {
            start: self.start + shift,
            samples: self.samples.iter().map(|v| factor * v).collect(),
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn empty_signal_is_degenerate() {
        let err = Signal::new(vec![], 3).unwrap_err();
        assert!(matches!(err, SignalError::DegenerateInput));
    }
    #[test]
    fn indices_follow_negative_start() {
        let s = Signal::new(vec![4.0, 5.0, 6.0], -2).unwrap();
        assert_eq!(s.end(), 0);
        assert_eq!(s.indices(), -2..=0);
        let pts: Vec<_> = s.points().collect();
        assert_eq!(pts, vec![(-2, 4.0), (-1, 5.0), (0, 6.0)]);
    }
    #[test]
    fn single_sample_has_equal_start_and_end() {
        let s = Signal::new(vec![7.0], 5).unwrap();
        assert_eq!(s.start(), s.end());
    }
    #[test]
    fn value_at_is_zero_outside_support() {
        let s = Signal::new(vec![1.0, 2.0], 1).unwrap();
        assert_eq!(s.value_at(0), 0.0);
        assert_eq!(s.value_at(1), 1.0);
        assert_eq!(s.value_at(2), 2.0);
        assert_eq!(s.value_at(3), 0.0);
        assert_eq!(s.zero_padded(-1..=4), vec![0.0, 0.0, 1.0, 2.0, 0.0, 0.0]);
    }
    #[test]
    fn scaled_shifted_moves_start_and_scales() {
        let h = Signal::new(vec![1.0, 2.0, 1.0], -1).unwrap();
        let moved = h.scaled_shifted(3, -2.0);
        assert_eq!(moved.start(), 2);
        assert_eq!(moved.samples(), &[-2.0, -4.0, -2.0]);
    }
}
