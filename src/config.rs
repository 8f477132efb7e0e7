//! Runtime configuration, read from a TOML file next to the binary.
//!
//! Every field has a default, so a missing file or a partial one is fine.
//! Values that would make the simulation or the sampling loops misbehave are
//! rejected by [`Config::validate`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bezier::MIN_SAMPLE_STEP;
use crate::spring::SpringParams;
use crate::surface::{Rgba, Stroke};

pub const CONFIG_FILE_NAME: &str = "springbez.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("spring constants must satisfy 0 < stiffness < 1 and 0 <= damping < 1 (got stiffness {stiffness}, damping {damping})")]
    InvalidSpring { stiffness: f32, damping: f32 },

    #[error("{name} must be in [{min}, 1] (got {value})", min = MIN_SAMPLE_STEP)]
    InvalidStep { name: &'static str, value: f32 },

    #[error("tangent length must be finite and non-negative (got {0})")]
    InvalidTangentLength(f32),

    #[error("window must be at least 1x1 with a non-zero frame rate (got {width}x{height} @ {frame_rate})")]
    InvalidWindow { width: u32, height: u32, frame_rate: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Target frames per second.
    pub frame_rate: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Spring Bézier".to_string(),
            width: 880,
            height: 600,
            frame_rate: 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub curve_step: f32,
    pub tangent_step: f32,
    pub tangent_length: f32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            curve_step: 0.01,
            tangent_step: 0.15,
            tangent_length: 22.0,
        }
    }
}

/// Resting layout derived from the surface size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal distance of P0 and P3 from the surface edges.
    pub endpoint_margin: f32,
    /// Horizontal distance of the P1/P2 seeds from the surface center.
    pub handle_spread: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            endpoint_margin: 120.0,
            handle_spread: 180.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub background: Rgba,
    pub handle: Stroke,
    pub curve: Stroke,
    pub tangent: Stroke,
    pub fixed_point: Rgba,
    pub dynamic_point: Rgba,
    pub label: Rgba,
    pub point_radius: f32,
    pub label_offset: [f32; 2],
    pub labels: [String; 4],
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: Rgba::rgb(15, 23, 42),
            handle: Stroke::new(Rgba::rgba(148, 163, 184, 77), 1.0),
            curve: Stroke::new(Rgba::rgb(248, 250, 252), 2.5),
            tangent: Stroke::new(Rgba::rgb(56, 189, 248), 1.0),
            fixed_point: Rgba::rgb(34, 197, 94),
            dynamic_point: Rgba::rgb(234, 179, 8),
            label: Rgba::rgb(203, 213, 245),
            point_radius: 5.0,
            label_offset: [8.0, -8.0],
            labels: [
                "P₀ (fixed)".to_string(),
                "P₁".to_string(),
                "P₂".to_string(),
                "P₃ (fixed)".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub path: PathBuf,
    pub size: u16,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf"),
            size: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub spring: SpringParams,
    pub sampling: SamplingConfig,
    pub layout: LayoutConfig,
    pub style: StyleConfig,
    pub font: FontConfig,
}

impl Config {
    /// Loads and validates the file at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.spring.validate()?;
        check_step("curve_step", self.sampling.curve_step)?;
        check_step("tangent_step", self.sampling.tangent_step)?;
        let length = self.sampling.tangent_length;
        if !length.is_finite() || length < 0.0 {
            return Err(ConfigError::InvalidTangentLength(length));
        }
        let window = &self.window;
        if window.width == 0 || window.height == 0 || window.frame_rate == 0 {
            return Err(ConfigError::InvalidWindow {
                width: window.width,
                height: window.height,
                frame_rate: window.frame_rate,
            });
        }
        Ok(())
    }

    /// `springbez.toml` beside the running executable.
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("springbez"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME)
    }
}

fn check_step(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && (MIN_SAMPLE_STEP..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidStep { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.spring, SpringParams::new(0.06, 0.88));
        assert_eq!(config.sampling.curve_step, 0.01);
        assert_eq!(config.sampling.tangent_step, 0.15);
        assert_eq!(config.sampling.tangent_length, 22.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [spring]
            stiffness = 0.1

            [window]
            width = 1024
            "#,
        )
        .unwrap();
        assert_eq!(config.spring.stiffness, 0.1);
        assert_eq!(config.spring.damping, 0.88);
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn test_colors_default_to_opaque() {
        let config = Config::from_toml(
            r#"
            [style]
            fixed_point = { r = 1, g = 2, b = 3 }
            curve = { color = { r = 9, g = 9, b = 9, a = 128 }, width = 4.0 }
            "#,
        )
        .unwrap();
        assert_eq!(config.style.fixed_point, Rgba::rgb(1, 2, 3));
        assert_eq!(config.style.curve, Stroke::new(Rgba::rgba(9, 9, 9, 128), 4.0));
    }

    #[test]
    fn test_rejects_unstable_spring() {
        let mut config = Config::default();
        config.spring.damping = 1.2;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSpring { .. })));
    }

    #[test]
    fn test_rejects_bad_steps() {
        let mut config = Config::default();
        config.sampling.curve_step = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidStep { name: "curve_step", .. })
        ));

        let mut config = Config::default();
        config.sampling.tangent_step = f32::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidStep { name: "tangent_step", .. })
        ));

        let mut config = Config::default();
        config.sampling.curve_step = 1e-30;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidStep { name: "curve_step", .. })
        ));

        let mut config = Config::default();
        config.sampling.tangent_step = 1e-5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidStep { name: "tangent_step", .. })
        ));

        let mut config = Config::default();
        config.sampling.curve_step = MIN_SAMPLE_STEP;
        assert!(config.validate().is_ok());

        let mut config = Config::default();
        config.sampling.tangent_length = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTangentLength(_))));
    }

    #[test]
    fn test_rejects_empty_window() {
        let mut config = Config::default();
        config.window.height = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidWindow { .. })));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("springbez-does-not-exist.toml");
        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let path = std::env::temp_dir().join(format!("springbez-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[spring\nstiffness = ").unwrap();
        let result = Config::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_validates() {
        let path = std::env::temp_dir().join(format!("springbez-unstable-{}.toml", std::process::id()));
        std::fs::write(&path, "[spring]\nstiffness = 2.0\n").unwrap();
        let result = Config::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::InvalidSpring { .. })));
    }
}
