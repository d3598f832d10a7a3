#[cfg(test)]
use std::collections::VecDeque;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
/// Something that yields the next sample for a given series.
pub trait SampleSource {
    fn next_sample(&mut self, series: usize) -> f64;
}
/// Uniform samples in `[0, 1)`.
pub struct UniformSource {
    rng: StdRng,
}
impl UniformSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}
impl SampleSource for UniformSource {
    fn next_sample(&mut self, _series: usize) -> f64 {
        self.rng.gen::<f64>()
    }
}
/// In-memory source useful for tests and deterministic playback.
/// Yields 0.0 once a series' queue runs dry.
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedSource {
    queues: Vec<VecDeque<f64>>,
}
#[cfg(test)]
impl ScriptedSource {
    pub fn new(per_series: impl IntoIterator<Item = Vec<f64>>) -> Self {
        Self {
            queues: per_series.into_iter().map(VecDeque::from).collect(),
        }
    }
    pub fn push(&mut self, series: usize, value: f64) {
        if self.queues.len() <= series {
            self.queues.resize_with(series + 1, VecDeque::new);
        }
        self.queues[series].push_back(value);
    }
}
#[cfg(test)]
impl SampleSource for ScriptedSource {
    fn next_sample(&mut self, series: usize) -> f64 {
        self.queues
            .get_mut(series)
            .and_then(|q| q.pop_front())
            .unwrap_or(0.0)
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn uniform_samples_stay_in_unit_interval() {
        let mut source = UniformSource::seeded(7);
        for _ in 0..1000 {
            let v = source.next_sample(0);
            assert!((0.0..1.0).contains(&v));
        }
    }
    #[test]
    fn seeded_sources_repeat() {
        let mut a = UniformSource::seeded(42);
        let mut b = UniformSource::seeded(42);
        for _ in 0..16 {
            assert_eq!(a.next_sample(0), b.next_sample(1));
        }
    }
    #[test]
    fn scripted_source_drains_then_yields_zero() {
        let mut source = ScriptedSource::new(vec![vec![1.0], vec![0.5, 0.25]]);
        source.push(3, 9.0);
        assert_eq!(source.next_sample(0), 1.0);
        assert_eq!(source.next_sample(0), 0.0);
        assert_eq!(source.next_sample(1), 0.5);
        assert_eq!(source.next_sample(1), 0.25);
        assert_eq!(source.next_sample(2), 0.0);
        assert_eq!(source.next_sample(3), 9.0);
    }
}
