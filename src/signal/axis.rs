use std::ops::RangeInclusive;
use serde::Serialize;
use crate::signal::Signal;
/// Samples of empty margin left on each side of the stems.
pub const DEFAULT_PADDING: i64 = 2;
/// Integer tick range plus the x-limits shared by a family of plots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TimeAxis {
    pub first_tick: i64,
    pub last_tick: i64,
    pub xlim: (i64, i64),
}
impl TimeAxis {
    pub fn ticks(&self) -> RangeInclusive<i64> {
        self.first_tick..=self.last_tick
    }
    pub fn contains(&self, n: i64) -> bool {
        self.ticks().contains(&n)
    }
}
/// Time index span `(start_y, end_y)` of the full linear convolution of `x` and `h`.
pub fn convolution_span(x: &Signal, h: &Signal) -> (i64, i64) {
    let start = x.start() + h.start();
    let end = start + (x.len() + h.len()) as i64 - 2;
    (start, end)
}
/// Computes padded integer axes for single signals and for the combined x/h/y view.
#[derive(Clone, Copy, Debug)]
pub struct AxisPlanner {
    padding: i64,
}
impl Default for AxisPlanner {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
        }
    }
}
impl AxisPlanner {
    /// Ticks cover the signal's own support. The upper limit is measured from
    /// `start + len`, one past the last sample.
    pub fn single(&self, signal: &Signal) -> TimeAxis {
        let start = signal.start();
        TimeAxis {
            first_tick: start,
            last_tick: signal.end(),
            xlim: (
                start - self.padding,
                start + signal.len() as i64 + self.padding,
            ),
        }
    }
    /// Axis wide enough for `x`, `h` and their convolution at once.
    pub fn global(&self, x: &Signal, h: &Signal) -> TimeAxis {
        let (start_y, end_y) = convolution_span(x, h);
        let global_min = x.start().min(h.start()).min(start_y);
        let global_max = x.end().max(h.end()).max(end_y);
        TimeAxis {
            first_tick: global_min,
            last_tick: global_max,
            xlim: (global_min - self.padding, global_max + self.padding),
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    fn sig(samples: &[f64], start: i64) -> Signal {
        Signal::new(samples.to_vec(), start).unwrap()
    }
    #[test]
    fn single_axis_pads_two_samples() {
        let axis = AxisPlanner::default().single(&sig(&[1.0, 2.0, 1.0], 0));
        assert_eq!(axis.ticks(), 0..=2);
        assert_eq!(axis.xlim, (-2, 5));
        assert_eq!(axis.ticks().count(), 3);
    }
    #[test]
    fn single_axis_with_negative_start() {
        let axis = AxisPlanner::default().single(&sig(&[1.0, 1.0], -4));
        assert_eq!(axis.ticks(), -4..=-3);
        assert_eq!(axis.xlim, (-6, 0));
    }
    #[test]
    fn single_axis_for_one_sample() {
        let axis = AxisPlanner::default().single(&sig(&[3.0], 7));
        assert_eq!(axis.ticks(), 7..=7);
        assert_eq!(axis.xlim, (5, 10));
    }
    #[test]
    fn global_axis_spans_inputs_and_output() {
        let x = sig(&[1.0, 2.0, 1.0], -1);
        let h = sig(&[1.0, 1.0], 3);
        // y spans [2, 5]; x spans [-1, 1]; h spans [3, 4]
        let axis = AxisPlanner::default().global(&x, &h);
        assert_eq!(axis.ticks(), -1..=5);
        assert_eq!(axis.xlim, (-3, 7));
    }
    #[test]
    fn global_axis_when_output_reaches_further_left() {
        let x = sig(&[1.0], -3);
        let h = sig(&[1.0, 2.0], -2);
        // y starts at -5, left of both inputs
        let axis = AxisPlanner::default().global(&x, &h);
        assert_eq!(axis.ticks(), -5..=-1);
    }
    #[test]
    fn global_axis_bounds_are_tight() {
        let mut rng = StdRng::seed_from_u64(7);
        let planner = AxisPlanner::default();
        for _ in 0..200 {
            let x_len = rng.gen_range(1..6);
            let h_len = rng.gen_range(1..6);
            let x = Signal::new(vec![1.0; x_len], rng.gen_range(-8..=8)).unwrap();
            let h = Signal::new(vec![1.0; h_len], rng.gen_range(-8..=8)).unwrap();
            let (start_y, end_y) = convolution_span(&x, &h);
            let axis = planner.global(&x, &h);
            assert_eq!(axis.first_tick, x.start().min(h.start()).min(start_y));
            assert_eq!(axis.last_tick, x.end().max(h.end()).max(end_y));
            for n in x.indices().chain(h.indices()).chain(start_y..=end_y) {
                assert!(axis.contains(n));
            }
            assert_eq!(axis.xlim, (axis.first_tick - 2, axis.last_tick + 2));
        }
    }
}
