use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_LIST_WINDOW: usize = 6;
pub const DEFAULT_STATUS_WINDOW: usize = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("`{field}` must be at least 1")]
    ZeroWidth { field: &'static str },
}

/// Sizing of the scrollable overlay lists.
///
/// - `list_window`: rows visible in the construction, unit plan and blessing lists.
/// - `status_window`: rows visible in the settlement status list of the standard overlay.
///
/// The status list only scrolls once the player owns more settlements than
/// [`OverlayConfig::status_scroll_threshold`], which follows `status_window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayConfig {
    pub list_window: usize,
    pub status_window: usize,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            list_window: DEFAULT_LIST_WINDOW,
            status_window: DEFAULT_STATUS_WINDOW,
        }
    }
}

impl OverlayConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(source.as_str())
    }

    /// Settlement count the status list must exceed before it scrolls.
    pub fn status_scroll_threshold(&self) -> usize {
        self.status_window.saturating_sub(1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.list_window == 0 {
            return Err(ConfigError::ZeroWidth {
                field: "list_window",
            });
        }
        if self.status_window == 0 {
            return Err(ConfigError::ZeroWidth {
                field: "status_window",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, OverlayConfig};

    #[test]
    fn empty_document_uses_defaults() {
        let config = OverlayConfig::from_yaml_str("{}").expect("config");
        assert_eq!(config, OverlayConfig::default());
        assert_eq!(config.list_window, 6);
        assert_eq!(config.status_window, 8);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = OverlayConfig::from_yaml_str("list_window: 4\n").expect("config");
        assert_eq!(config.list_window, 4);
        assert_eq!(config.status_window, 8);
    }

    #[test]
    fn scroll_threshold_follows_status_window() {
        assert_eq!(OverlayConfig::default().status_scroll_threshold(), 7);
        let narrow = OverlayConfig::from_yaml_str("status_window: 3\n").expect("config");
        assert_eq!(narrow.status_scroll_threshold(), 2);
        let err = OverlayConfig::from_yaml_str("status_scroll_threshold: 7\n")
            .expect_err("threshold is not configurable");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_width_is_rejected() {
        let err = OverlayConfig::from_yaml_str("status_window: 0\n").expect_err("must fail");
        assert!(matches!(
            err,
            ConfigError::ZeroWidth {
                field: "status_window"
            }
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = OverlayConfig::from_yaml_str("list_windw: 3\n").expect_err("must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = OverlayConfig::load("/definitely/not/here.yaml").expect_err("must fail");
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }
}
