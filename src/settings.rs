//! Import settings.
//!
//! Settings are stored as JSON in the platform config directory
//! (`<config_dir>/sheetcharter/settings.json`). Every field has a default, so
//! a partial file only overrides what it names.

use crate::constants::{
    DEFAULT_PREVIEW_ITEMS, MAX_FILE_SIZE_MB, MAX_IMPORT_ROWS, SETTINGS_DIR_NAME,
    SETTINGS_FILE_NAME,
};
use crate::data::DataResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// How double quotes in delimited text are treated
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteMode {
    /// A field wrapped in double quotes may contain the delimiter; `""` is a literal quote
    #[default]
    Quoted,
    /// Split on every delimiter, quotes are ordinary characters
    Literal,
}

/// How the worksheets of a workbook become a grid
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetMode {
    /// Concatenate every worksheet, in workbook order
    #[default]
    Flatten,
    /// Only import the first worksheet
    FirstSheet,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Files larger than this are rejected before parsing; unbounded when `None`
    pub max_file_size_mb: Option<usize>,
    /// Imports producing more rows than this are rejected; unbounded when `None`
    pub max_rows: Option<usize>,
    pub quote_mode: QuoteMode,
    pub sheet_mode: SheetMode,
    /// Number of values shown by column previews
    pub preview_items: usize,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            max_file_size_mb: None,
            max_rows: None,
            quote_mode: QuoteMode::default(),
            sheet_mode: SheetMode::default(),
            preview_items: DEFAULT_PREVIEW_ITEMS,
        }
    }
}

impl ImportSettings {
    /// Defaults plus the [`MAX_FILE_SIZE_MB`] and [`MAX_IMPORT_ROWS`] caps
    pub fn bounded() -> Self {
        Self {
            max_file_size_mb: Some(MAX_FILE_SIZE_MB),
            max_rows: Some(MAX_IMPORT_ROWS),
            ..Self::default()
        }
    }

    /// Default settings file location, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Load settings from the default location.
    ///
    /// Never fails: a missing file yields defaults, an unreadable or malformed
    /// one is logged and also yields defaults.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            debug!("No settings file at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings from {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> DataResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Write settings to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> DataResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
