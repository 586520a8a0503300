use contracts::dashboards::d400_operations_overview::{Series, SeriesPoint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::shared::config::GeneratorConfig;

/// Source of the synthetic daily revenue series.
///
/// Implementations only choose values; `generate` fixes the shape
/// (`days` points labelled "Day 1".."Day N").
pub trait SeriesGenerator {
    /// Revenue for the next day of the series
    fn next_value(&mut self) -> u64;

    fn generate(&mut self, days: u32) -> Series {
        (1..=days)
            .map(|day| SeriesPoint::new(format!("Day {day}"), self.next_value()))
            .collect()
    }
}

/// Uniform random draws from a closed range, [15000, 35000] by default.
#[derive(Debug)]
pub struct RandomSeriesGenerator {
    min_value: u64,
    max_value: u64,
    rng: StdRng,
}

impl RandomSeriesGenerator {
    pub fn new(min_value: u64, max_value: u64) -> anyhow::Result<Self> {
        Self::with_rng(min_value, max_value, StdRng::from_entropy())
    }

    /// Reproducible generator for demos
    pub fn seeded(min_value: u64, max_value: u64, seed: u64) -> anyhow::Result<Self> {
        Self::with_rng(min_value, max_value, StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &GeneratorConfig) -> anyhow::Result<Self> {
        match config.seed {
            Some(seed) => Self::seeded(config.min_value, config.max_value, seed),
            None => Self::new(config.min_value, config.max_value),
        }
    }

    fn with_rng(min_value: u64, max_value: u64, rng: StdRng) -> anyhow::Result<Self> {
        if min_value > max_value {
            anyhow::bail!("invalid revenue range: {min_value} > {max_value}");
        }
        Ok(Self {
            min_value,
            max_value,
            rng,
        })
    }
}

impl Default for RandomSeriesGenerator {
    fn default() -> Self {
        let config = GeneratorConfig::default();
        Self {
            min_value: config.min_value,
            max_value: config.max_value,
            rng: StdRng::from_entropy(),
        }
    }
}

impl SeriesGenerator for RandomSeriesGenerator {
    fn next_value(&mut self) -> u64 {
        self.rng.gen_range(self.min_value..=self.max_value)
    }
}
