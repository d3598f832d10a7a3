// src/chart.rs
use log::{debug, info};

use crate::config::{AppConfig, InitialFill};
use crate::drivers::{ChartError, ChartFrame, SampleSource, Series, UniformSource};

/// Owns the rolling series and the run flag. Driven by `tick()` from the
/// scheduler and by commands from the window.
pub struct ChartSurface {
    series: Vec<Series>,
    x_axis: Vec<f64>,
    running: bool,
    source: Box<dyn SampleSource>,
}

impl ChartSurface {
    pub fn new(
        series_count: usize,
        sample_count: usize,
        fill: InitialFill,
        mut source: Box<dyn SampleSource>,
    ) -> Result<Self, ChartError> {
        if series_count == 0 {
            return Err(ChartError::InvalidSeriesCount);
        }
        let series = (0..series_count)
            .map(|idx| {
                let label = format!("line{idx}");
                match fill {
                    InitialFill::Random => {
                        Series::filled(label, sample_count, || source.next_sample(idx))
                    }
                    InitialFill::Zeros => Series::zeroed(label, sample_count),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        let x_axis = (0..sample_count).map(|i| i as f64).collect();
        Ok(Self {
            series,
            x_axis,
            running: false,
            source,
        })
    }

    pub fn from_config(cfg: &AppConfig) -> Result<Self, ChartError> {
        Self::new(
            cfg.series_count,
            cfg.sample_count,
            cfg.initial_fill,
            Box::new(UniformSource::new(cfg.seed)),
        )
    }

    pub fn start(&mut self) {
        if !self.running {
            info!("chart running");
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            info!("chart stopped");
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Tolerates a bad index: out-of-range requests are dropped.
    pub fn set_visible(&mut self, index: usize, visible: bool) {
        if let Err(err) = self.try_set_visible(index, visible) {
            debug!("ignoring visibility change: {err}");
        }
    }

    pub fn try_set_visible(&mut self, index: usize, visible: bool) -> Result<(), ChartError> {
        let count = self.series.len();
        let series = self
            .series
            .get_mut(index)
            .ok_or(ChartError::OutOfRange { index, count })?;
        series.set_visible(visible);
        Ok(())
    }

    /// One update step. While running, every series (hidden ones included)
    /// shifts in a fresh sample. Returns the indices of visible series.
    pub fn tick(&mut self) -> Vec<usize> {
        if self.running {
            for (idx, series) in self.series.iter_mut().enumerate() {
                series.shift_in(self.source.next_sample(idx));
            }
        }
        self.visible_indices()
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.series
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_visible())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Indices flagged for redraw since the last call; clears the flags.
    pub fn take_redraw(&mut self) -> Vec<usize> {
        self.series
            .iter_mut()
            .enumerate()
            .filter_map(|(idx, s)| s.take_redraw().then_some(idx))
            .collect()
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn sample_count(&self) -> usize {
        self.x_axis.len()
    }

    pub fn series(&self, index: usize) -> Option<&Series> {
        self.series.get(index)
    }

    pub fn x_axis(&self) -> &[f64] {
        &self.x_axis
    }

    pub fn frame(&self) -> ChartFrame {
        let visible = self.series.iter().filter(|s| s.is_visible());
        let (labels, samples) = visible
            .map(|s| (s.label().to_owned(), s.to_vec()))
            .unzip();
        ChartFrame {
            x_axis: self.x_axis.clone(),
            labels,
            samples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::ScriptedSource;

    fn zeroed(source: ScriptedSource) -> ChartSurface {
        ChartSurface::new(2, 4, InitialFill::Zeros, Box::new(source)).unwrap()
    }

    fn data(chart: &ChartSurface, idx: usize) -> Vec<f64> {
        chart.series(idx).unwrap().to_vec()
    }

    #[test]
    fn starts_stopped() {
        let chart = zeroed(ScriptedSource::default());
        assert!(!chart.is_running());
        assert_eq!(chart.x_axis(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn tick_appends_injected_samples() {
        let mut chart = zeroed(ScriptedSource::new(vec![vec![1.0], vec![0.5]]));
        chart.start();
        let visible = chart.tick();
        assert_eq!(visible, vec![0, 1]);
        assert_eq!(data(&chart, 0), vec![0.0, 0.0, 0.0, 1.0]);
        assert_eq!(data(&chart, 1), vec![0.0, 0.0, 0.0, 0.5]);
    }

    #[test]
    fn length_stays_fixed_across_ticks() {
        let mut chart =
            ChartSurface::new(2, 8, InitialFill::Random, Box::new(UniformSource::seeded(3)))
                .unwrap();
        chart.start();
        for _ in 0..100 {
            chart.tick();
            for idx in 0..chart.series_count() {
                assert_eq!(chart.series(idx).unwrap().len(), 8);
            }
        }
    }

    #[test]
    fn stopped_tick_leaves_buffers_alone() {
        let mut chart = zeroed(ScriptedSource::new(vec![vec![1.0, 2.0], vec![0.5, 0.6]]));
        chart.start();
        chart.tick();
        chart.stop();
        let before: Vec<_> = (0..2).map(|i| data(&chart, i)).collect();
        chart.tick();
        let after: Vec<_> = (0..2).map(|i| data(&chart, i)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut chart = zeroed(ScriptedSource::default());
        chart.stop();
        assert!(!chart.is_running());
        chart.start();
        chart.start();
        assert!(chart.is_running());
        chart.stop();
        chart.stop();
        assert!(!chart.is_running());
    }

    #[test]
    fn hidden_series_still_advances() {
        let mut chart = zeroed(ScriptedSource::new(vec![vec![1.0], vec![0.5]]));
        chart.set_visible(1, false);
        chart.start();
        let visible = chart.tick();
        assert_eq!(visible, vec![0]);
        assert_eq!(data(&chart, 1), vec![0.0, 0.0, 0.0, 0.5]);
    }

    #[test]
    fn out_of_range_visibility_is_ignored() {
        let mut chart = zeroed(ScriptedSource::default());
        chart.set_visible(0, false);
        chart.take_redraw();
        chart.set_visible(5, true);
        assert!(!chart.series(0).unwrap().is_visible());
        assert!(chart.series(1).unwrap().is_visible());
        assert!(chart.take_redraw().is_empty());
        assert_eq!(data(&chart, 0), vec![0.0; 4]);
        assert!(matches!(
            chart.try_set_visible(5, true),
            Err(ChartError::OutOfRange { index: 5, count: 2 })
        ));
    }

    #[test]
    fn tick_marks_every_series_for_redraw() {
        let mut chart = zeroed(ScriptedSource::default());
        chart.take_redraw();
        chart.tick();
        assert!(chart.take_redraw().is_empty());
        chart.start();
        chart.set_visible(0, false);
        chart.tick();
        assert_eq!(chart.take_redraw(), vec![0, 1]);
    }

    #[test]
    fn frame_holds_only_visible_series() {
        let mut chart = zeroed(ScriptedSource::new(vec![vec![1.0], vec![0.5]]));
        chart.start();
        chart.tick();
        chart.set_visible(0, false);
        let frame = chart.frame();
        assert_eq!(frame.labels, vec!["line1".to_owned()]);
        assert_eq!(frame.samples, vec![vec![0.0, 0.0, 0.0, 0.5]]);
        assert_eq!(frame.x_axis.len(), 4);
    }

    #[test]
    fn zero_series_is_rejected() {
        let result = ChartSurface::new(0, 4, InitialFill::Zeros, Box::new(ScriptedSource::default()));
        assert!(matches!(result, Err(ChartError::InvalidSeriesCount)));
    }

    #[test]
    fn random_fill_draws_from_source() {
        let source = ScriptedSource::new(vec![vec![0.1, 0.2], vec![0.3]]);
        let chart = ChartSurface::new(2, 2, InitialFill::Random, Box::new(source)).unwrap();
        assert_eq!(data(&chart, 0), vec![0.1, 0.2]);
        assert_eq!(data(&chart, 1), vec![0.3, 0.0]);
    }
}
