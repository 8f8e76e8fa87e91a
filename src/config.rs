use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use voxview_geom::Vec3;
use voxview_runtime::CacheCapacities;
use voxview_world::{WorldGenConfig, WorldGenParams};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("cache.{0} must be at least 1")]
    ZeroCapacity(&'static str),
    #[error("world.border must be at least 1")]
    ZeroBorder,
    #[error("world.noise height ratios must satisfy 0 <= min ({min}) <= max ({max}) <= 1")]
    HeightRatios { min: f32, max: f32 },
}

/// Whole viewer config file.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ViewerConfig {
    #[serde(default)]
    pub world: WorldGenConfig,
    #[serde(default)]
    pub cache: Cache,
    #[serde(default)]
    pub view: View,
    #[serde(default)]
    pub flight: Flight,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Cache {
    #[serde(default = "default_mesh_capacity")]
    pub mesh_capacity: usize,
    #[serde(default = "default_volume_capacity")]
    pub volume_capacity: usize,
}
fn default_mesh_capacity() -> usize {
    50
}
fn default_volume_capacity() -> usize {
    64
}
impl Default for Cache {
    fn default() -> Self {
        Self {
            mesh_capacity: default_mesh_capacity(),
            volume_capacity: default_volume_capacity(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct View {
    #[serde(default = "default_radius")]
    pub radius: u32,
}
fn default_radius() -> u32 {
    2
}
impl Default for View {
    fn default() -> Self {
        Self {
            radius: default_radius(),
        }
    }
}

/// Scripted headless flight: constant speed and turn rate per frame.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Flight {
    #[serde(default = "default_frames")]
    pub frames: u32,
    #[serde(default = "default_speed")]
    pub speed: f32,
    #[serde(default = "default_strafe")]
    pub strafe: f32,
    /// Radians added to the horizontal angle each frame.
    #[serde(default = "default_turn_rate")]
    pub turn_rate: f32,
    #[serde(default = "default_start")]
    pub start: [f32; 3],
    #[serde(default = "default_fov_degrees")]
    pub fov_degrees: f32,
}
fn default_frames() -> u32 {
    600
}
fn default_speed() -> f32 {
    0.5
}
fn default_strafe() -> f32 {
    0.0
}
fn default_turn_rate() -> f32 {
    0.002
}
fn default_start() -> [f32; 3] {
    [0.0, 80.0, 0.0]
}
fn default_fov_degrees() -> f32 {
    60.0
}
impl Default for Flight {
    fn default() -> Self {
        Self {
            frames: default_frames(),
            speed: default_speed(),
            strafe: default_strafe(),
            turn_rate: default_turn_rate(),
            start: default_start(),
            fov_degrees: default_fov_degrees(),
        }
    }
}

impl Flight {
    pub fn start_position(&self) -> Vec3 {
        Vec3::new(self.start[0], self.start[1], self.start[2])
    }
}

impl ViewerConfig {
    pub fn from_toml_str(s: &str, path: &Path) -> Result<Self, ConfigError> {
        let cfg: ViewerConfig = toml::from_str(s).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.capacities()?;
        if self.world.border == 0 {
            return Err(ConfigError::ZeroBorder);
        }
        let (min, max) = (self.world.noise.min_y_ratio, self.world.noise.max_y_ratio);
        if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) || min > max {
            return Err(ConfigError::HeightRatios { min, max });
        }
        Ok(())
    }

    pub fn capacities(&self) -> Result<CacheCapacities, ConfigError> {
        Ok(CacheCapacities {
            meshes: NonZeroUsize::new(self.cache.mesh_capacity)
                .ok_or(ConfigError::ZeroCapacity("mesh_capacity"))?,
            volumes: NonZeroUsize::new(self.cache.volume_capacity)
                .ok_or(ConfigError::ZeroCapacity("volume_capacity"))?,
        })
    }

    pub fn worldgen_params(&self) -> WorldGenParams {
        WorldGenParams::from_config(&self.world)
    }
}

pub fn load_config_from_path(path: &Path) -> Result<ViewerConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ViewerConfig::from_toml_str(&s, path)
}
