use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which terrain generator fills chunk volumes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplerKind {
    /// Thresholded continuous height field.
    Sine,
    /// Same field, quantized into per-column heights first.
    #[default]
    Heightmap,
    /// OpenSimplex2 column heights.
    Noise,
}

impl SamplerKind {
    pub const ALL: [SamplerKind; 3] = [SamplerKind::Sine, SamplerKind::Heightmap, SamplerKind::Noise];

    pub fn name(self) -> &'static str {
        match self {
            SamplerKind::Sine => "sine",
            SamplerKind::Heightmap => "heightmap",
            SamplerKind::Noise => "noise",
        }
    }
}

impl fmt::Display for SamplerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SamplerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SamplerKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown sampler '{}' (expected sine, heightmap or noise)", s))
    }
}

/// `[world]` section of the viewer config.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct WorldGenConfig {
    #[serde(default)]
    pub sampler: SamplerKind,
    #[serde(default = "default_seed")]
    pub seed: i32,
    #[serde(default = "default_border")]
    pub border: usize,
    #[serde(default)]
    pub noise: Noise,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            sampler: SamplerKind::default(),
            seed: default_seed(),
            border: default_border(),
            noise: Noise::default(),
        }
    }
}

fn default_seed() -> i32 {
    1337
}
fn default_border() -> usize {
    1
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Noise {
    #[serde(default = "default_noise_freq")]
    pub frequency: f32,
    #[serde(default = "default_min_y_ratio")]
    pub min_y_ratio: f32,
    #[serde(default = "default_max_y_ratio")]
    pub max_y_ratio: f32,
}
fn default_noise_freq() -> f32 {
    0.01
}
fn default_min_y_ratio() -> f32 {
    0.15
}
fn default_max_y_ratio() -> f32 {
    0.85
}
impl Default for Noise {
    fn default() -> Self {
        Self {
            frequency: default_noise_freq(),
            min_y_ratio: default_min_y_ratio(),
            max_y_ratio: default_max_y_ratio(),
        }
    }
}

// Flattened snapshot of the config handed to samplers
#[derive(Clone, Debug, PartialEq)]
pub struct WorldGenParams {
    pub sampler: SamplerKind,
    pub seed: i32,
    pub border: usize,
    pub noise_frequency: f32,
    pub min_y_ratio: f32,
    pub max_y_ratio: f32,
}

impl Default for WorldGenParams {
    fn default() -> Self {
        Self::from_config(&WorldGenConfig::default())
    }
}

impl WorldGenParams {
    pub fn from_config(cfg: &WorldGenConfig) -> Self {
        Self {
            sampler: cfg.sampler,
            seed: cfg.seed,
            border: cfg.border,
            noise_frequency: cfg.noise.frequency,
            min_y_ratio: cfg.noise.min_y_ratio,
            max_y_ratio: cfg.noise.max_y_ratio,
        }
    }
}
