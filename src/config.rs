//! Renderer configuration.
//!
//! Width and height are optional: a missing value is read from the sink
//! every time it is needed, a present value stays fixed even when the
//! terminal is resized. Values are never rejected; negative or zero sizes
//! leave no usable columns or rows.
//!
//! ```toml
//! width = 80
//! height = 20
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Width used when neither the options nor the sink know the size.
pub const DEFAULT_WIDTH: usize = 80;
/// Height used when neither the options nor the sink know the size.
pub const DEFAULT_HEIGHT: usize = 20;

/// Construction options for [`crate::Renderer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
}

impl RendererOptions {
    /// Fixed-size options.
    pub fn fixed(width: i32, height: i32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Configured width in usable columns, if fixed.
    pub fn fixed_width(&self) -> Option<usize> {
        self.width.map(clamp_dimension)
    }

    /// Configured height in usable rows, if fixed.
    pub fn fixed_height(&self) -> Option<usize> {
        self.height.map(clamp_dimension)
    }

    /// Values from `other` take precedence where present.
    pub fn merge(self, other: RendererOptions) -> Self {
        Self {
            width: other.width.or(self.width),
            height: other.height.or(self.height),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// `<config dir>/termrender/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("termrender").join("config.toml"))
    }

    /// Load from [`default_path`](Self::default_path), or defaults if the file is absent.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(ConfigError::NoConfigDir) => return Ok(Self::default()),
            Err(e) => return Err(e),
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }
}

fn clamp_dimension(value: i32) -> usize {
    usize::try_from(value).unwrap_or(0)
}
