use std::collections::VecDeque;
use crate::drivers::ChartError;
/// Snapshot of the visible series, ready to hand to a renderer.
#[derive(Clone, Debug)]
pub struct ChartFrame {
    pub x_axis: Vec<f64>,
    pub labels: Vec<String>,
    pub samples: Vec<Vec<f64>>, // series x samples
}
impl ChartFrame {
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
/// Fixed-capacity sliding window of samples rendered as one chart line.
///
/// The window is always full: every push evicts the oldest sample.
#[derive(Clone, Debug)]
pub struct Series {
    samples: VecDeque<f64>,
    label: String,
    visible: bool,
    needs_redraw: bool,
}
impl Series {
    pub fn filled(
        label: impl Into<String>,
        capacity: usize,
        mut fill: impl FnMut() -> f64,
    ) -> Result<Self, ChartError> {
        if capacity == 0 {
            return Err(ChartError::InvalidSampleCount);
        }
        let samples = (0..capacity).map(|_| fill()).collect();
        Ok(Self {
            samples,
            label: label.into(),
            visible: true,
            needs_redraw: true,
        })
    }
    pub fn zeroed(label: impl Into<String>, capacity: usize) -> Result<Self, ChartError> {
        Self::filled(label, capacity, || 0.0)
    }
    pub fn label(&self) -> &str {
        &self.label
    }
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_visible(&self) -> bool {
        self.visible
    }
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.needs_redraw = true;
        }
    }
    #[cfg(test)]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }
    /// Returns the previous redraw flag and clears it.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.needs_redraw, false)
    }
    /// Drop the oldest sample and append `value`.
    pub fn shift_in(&mut self, value: f64) {
        self.samples.pop_front();
        self.samples.push_back(value);
        self.needs_redraw = true;
    }
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
    /// `[x, y]` pairs in the layout `egui_plot` expects.
    pub fn points(&self, x_axis: &[f64]) -> Vec<[f64; 2]> {
        x_axis.iter().zip(self.iter()).map(|(&x, y)| [x, y]).collect()
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn shift_in_keeps_capacity() {
        let mut series = Series::zeroed("line0", 4).unwrap();
        for i in 0..10 {
            series.shift_in(i as f64);
            assert_eq!(series.len(), 4);
        }
        assert_eq!(series.to_vec(), vec![6.0, 7.0, 8.0, 9.0]);
    }
    #[test]
    fn zero_capacity_is_rejected() {
        assert!(matches!(
            Series::zeroed("line0", 0),
            Err(ChartError::InvalidSampleCount)
        ));
    }
    #[test]
    fn visibility_change_flags_redraw_once() {
        let mut series = Series::zeroed("line0", 2).unwrap();
        assert!(series.take_redraw());
        series.set_visible(true);
        assert!(!series.needs_redraw());
        series.set_visible(false);
        assert!(series.take_redraw());
        assert!(!series.take_redraw());
    }
    #[test]
    fn points_pair_with_x_axis() {
        let mut series = Series::zeroed("line0", 3).unwrap();
        series.shift_in(0.5);
        let pts = series.points(&[0.0, 1.0, 2.0]);
        assert_eq!(pts, vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.5]]);
    }
}
