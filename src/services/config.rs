//! 配置服务：从 JSON 文件加载渲染设置

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ui::core::font::DEFAULT_FACE;

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(p, e) => write!(f, "Cannot read {}: {}", p.display(), e),
            ConfigError::Parse(e) => write!(f, "Invalid settings: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub typography: Typography,
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub raster: RasterSettings,
    #[serde(default)]
    pub theme: ThemeSettings,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Settings, ConfigError> {
        let data =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let settings = Self::from_json(&data)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn from_json(data: &str) -> Result<Settings, ConfigError> {
        let settings: Settings = serde_json::from_str(data)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Canvas and cell sizes must be finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("canvas.width", self.canvas.width),
            ("canvas.height", self.canvas.height),
            ("raster.cell_width", self.raster.cell_width),
            ("raster.cell_height", self.raster.cell_height),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

/// Font and line metrics used by the code view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub font_face: String,
    pub font_size: f64,
    pub line_height: f64,
    /// Column width used for measuring; the renderer itself draws with real advances.
    pub char_width: f64,
    pub tab_width: usize,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_face: DEFAULT_FACE.to_string(),
            font_size: 16.0,
            line_height: 24.0,
            char_width: 16.0,
            tab_width: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub spacing: f64,
    pub margin: f64,
    pub inner_spacing: f64,
    pub inner_margin: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            spacing: 10.0,
            margin: 10.0,
            inner_spacing: 10.0,
            inner_margin: 0.0,
        }
    }
}

/// Canvas pixels per terminal cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterSettings {
    pub cell_width: f64,
    pub cell_height: f64,
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self {
            cell_width: 9.6,
            cell_height: 24.0,
        }
    }
}

/// Optional `#rrggbb` overrides on top of the built-in scheme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ident: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
}

#[cfg(test)]
#[path = "../../tests/unit/services/config.rs"]
mod tests;
