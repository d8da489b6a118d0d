//! CLI settings management
//!
//! Default generation parameters that persist across runs. Settings are
//! stored in `{config_dir}/blobkit/settings.json` unless `--config` points
//! elsewhere.

use anyhow::{Context, Result, bail};
use blobkit_core::style::{BlobStyle, Color, FillType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Defaults applied when a flag is not given on the command line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Shape defaults
    /// Number of blob vertices
    pub edges: usize,
    /// 0 = spiky, 1 = round
    pub smoothness: f64,
    /// Radius of the ideal circle in blob space
    pub radius: f64,

    // Style defaults
    pub fill: FillType,
    /// Index into the preset palettes, used when no explicit colours are set
    pub palette: Option<usize>,
    pub color1: Color,
    pub color2: Color,
    /// Gradient direction in degrees
    pub gradient_angle: f64,

    // Grain defaults
    pub noise_intensity: f64,
    pub noise_opacity: f64,
    pub noise_size: u32,

    /// Directory relative output paths are resolved against
    pub output_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        let style = BlobStyle::default();
        Self {
            edges: 5,
            smoothness: 0.5,
            radius: 60.0,

            fill: style.fill,
            palette: None,
            color1: style.color1,
            color2: style.color2,
            gradient_angle: style.gradient_angle,

            noise_intensity: 1.0,
            noise_opacity: 0.05,
            noise_size: 1,

            output_dir: None,
        }
    }
}

impl Settings {
    /// Blob style described by these settings
    pub fn style(&self) -> BlobStyle {
        let base = self
            .palette
            .and_then(BlobStyle::palette)
            .unwrap_or_else(|| BlobStyle::default().with_colors(self.color1, self.color2));
        base.with_fill(self.fill)
            .with_gradient_angle(self.gradient_angle)
    }

    /// Resolve an output path against `output_dir`
    pub fn resolve_output(&self, path: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Get the default path to the settings file
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("blobkit").join("settings.json"))
}

/// Load settings, returning defaults if the file doesn't exist or is invalid
pub fn load_settings(path: Option<&Path>) -> Settings {
    let Some(path) = path.map(Path::to_path_buf).or_else(settings_path) else {
        return Settings::default();
    };

    if !path.exists() {
        return Settings::default();
    }

    match fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid settings in {}: {}", path.display(), e);
            Settings::default()
        }),
        Err(_) => Settings::default(),
    }
}

/// Save settings to disk
pub fn save_settings(settings: &Settings, path: Option<&Path>) -> Result<PathBuf> {
    let Some(path) = path.map(Path::to_path_buf).or_else(settings_path) else {
        bail!("Could not determine config directory");
    };

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    let json = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
    fs::write(&path, json).context("Failed to write settings file")?;
    Ok(path)
}
