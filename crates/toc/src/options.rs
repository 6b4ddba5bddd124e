//! Per-call options for the ToC renderers.
//!
//! Every option is resolved from, in order: the explicit value passed by the
//! caller, the matching `data-*` attribute on the mount element, the default.
//! Falsy explicit values (`false`, `0`, `""`) count as unset.

use serde::{Deserialize, Serialize};

pub const USE_NUMBER_KEY: &str = "use_number";
pub const BLOCK_TITLE_KEY: &str = "block_title";
pub const USE_TITLE_NAME_KEY: &str = "use_title_name";
pub const ROOT_TITLE_KEY: &str = "root_title";
pub const BAR_UNIT_SIZE_KEY: &str = "bar_unit_size";
pub const WING_LEFT_MARGIN_KEY: &str = "wing_left_margin";

pub const DEFAULT_BLOCK_TITLE: &str = "Titles";
pub const DEFAULT_ROOT_TITLE: &str = "Title";
pub const DEFAULT_BAR_UNIT_SIZE: u32 = 8;
pub const DEFAULT_WING_LEFT_MARGIN: u32 = 4;

/// Caller-supplied options for [`crate::TocBuilder::build_block`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockOptions {
    pub use_number: Option<bool>,
    pub block_title: Option<String>,
}

/// Fully resolved block settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockConfig {
    pub use_number: bool,
    pub block_title: String,
}

impl BlockOptions {
    /// Fills unset options from `data`, a `data-*` attribute lookup.
    pub fn resolve(&self, data: impl Fn(&str) -> Option<String>) -> BlockConfig {
        BlockConfig {
            use_number: truthy(self.use_number)
                .unwrap_or_else(|| data(USE_NUMBER_KEY).as_deref() == Some("true")),
            block_title: non_empty(self.block_title.clone())
                .or_else(|| non_empty(data(BLOCK_TITLE_KEY)))
                .unwrap_or_else(|| DEFAULT_BLOCK_TITLE.to_string()),
        }
    }
}

/// Caller-supplied options for [`crate::TocBuilder::build_wing`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WingOptions {
    pub use_number: Option<bool>,
    pub use_title_name: Option<bool>,
    pub root_title: Option<String>,
    pub bar_unit_size: Option<u32>,
    pub wing_left_margin: Option<u32>,
}

/// Fully resolved wing settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WingConfig {
    pub use_number: bool,
    /// Replaces the page title on the root cell; `None` keeps the real title.
    pub root_title: Option<String>,
    pub bar_unit_size: u32,
    pub wing_left_margin: u32,
}

impl Default for WingConfig {
    fn default() -> Self {
        WingOptions::default().resolve(|_| None)
    }
}

impl WingOptions {
    /// Fills unset options from `data`, a `data-*` attribute lookup.
    pub fn resolve(&self, data: impl Fn(&str) -> Option<String>) -> WingConfig {
        let use_title_name = truthy(self.use_title_name)
            .unwrap_or_else(|| data(USE_TITLE_NAME_KEY).as_deref() != Some("false"));

        let root_title = if use_title_name {
            None
        } else {
            Some(
                non_empty(self.root_title.clone())
                    .or_else(|| non_empty(data(ROOT_TITLE_KEY)))
                    .unwrap_or_else(|| DEFAULT_ROOT_TITLE.to_string()),
            )
        };

        WingConfig {
            use_number: truthy(self.use_number)
                .unwrap_or_else(|| data(USE_NUMBER_KEY).as_deref() == Some("true")),
            root_title,
            bar_unit_size: non_zero(self.bar_unit_size).unwrap_or_else(|| {
                pixels(BAR_UNIT_SIZE_KEY, data(BAR_UNIT_SIZE_KEY), DEFAULT_BAR_UNIT_SIZE)
            }),
            wing_left_margin: non_zero(self.wing_left_margin).unwrap_or_else(|| {
                pixels(
                    WING_LEFT_MARGIN_KEY,
                    data(WING_LEFT_MARGIN_KEY),
                    DEFAULT_WING_LEFT_MARGIN,
                )
            }),
        }
    }
}

fn truthy(flag: Option<bool>) -> Option<bool> {
    flag.filter(|on| *on)
}

fn non_zero(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v != 0)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parses a pixel count the way `parseInt` does: leading digits, trailing
/// garbage (`12px`) ignored.
fn parse_leading_int(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().ok()
}

fn pixels(key: &str, raw: Option<String>, default: u32) -> u32 {
    match raw.as_deref().filter(|v| !v.is_empty()) {
        None => default,
        Some(value) => parse_leading_int(value).unwrap_or_else(|| {
            log::warn!("data-{key}={value:?} is not a number, using {default}");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_block_defaults() {
        let config = BlockOptions::default().resolve(|_| None);
        assert_eq!(
            config,
            BlockConfig {
                use_number: false,
                block_title: "Titles".to_string()
            }
        );
    }

    #[test]
    fn test_block_reads_data_attributes() {
        let data = attrs(&[("use_number", "true"), ("block_title", "On this page")]);
        let config = BlockOptions::default().resolve(|k| data.get(k).cloned());
        assert!(config.use_number);
        assert_eq!(config.block_title, "On this page");
    }

    #[test]
    fn test_block_explicit_wins_over_data() {
        let data = attrs(&[("use_number", "false"), ("block_title", "From data")]);
        let options = BlockOptions {
            use_number: Some(true),
            block_title: Some("Explicit".to_string()),
        };
        let config = options.resolve(|k| data.get(k).cloned());
        assert!(config.use_number);
        assert_eq!(config.block_title, "Explicit");
    }

    #[test]
    fn test_block_falsy_explicit_values_are_unset() {
        let data = attrs(&[("use_number", "true")]);
        let options = BlockOptions {
            use_number: Some(false),
            block_title: Some(String::new()),
        };
        let config = options.resolve(|k| data.get(k).cloned());
        assert!(config.use_number);
        assert_eq!(config.block_title, "Titles");
    }

    #[test]
    fn test_block_empty_data_title_uses_default() {
        let data = attrs(&[("block_title", "")]);
        let config = BlockOptions::default().resolve(|k| data.get(k).cloned());
        assert_eq!(config.block_title, "Titles");
    }

    #[test]
    fn test_wing_defaults() {
        let config = WingConfig::default();
        assert!(!config.use_number);
        assert_eq!(config.root_title, None);
        assert_eq!(config.bar_unit_size, 8);
        assert_eq!(config.wing_left_margin, 4);
    }

    #[test]
    fn test_wing_root_title_only_without_title_name() {
        let data = attrs(&[("use_title_name", "false")]);
        let config = WingOptions::default().resolve(|k| data.get(k).cloned());
        assert_eq!(config.root_title.as_deref(), Some("Title"));

        let options = WingOptions {
            use_title_name: Some(true),
            root_title: Some("Ignored".to_string()),
            ..WingOptions::default()
        };
        assert_eq!(options.resolve(|_| None).root_title, None);

        let data = attrs(&[("use_title_name", "false"), ("root_title", "Contents")]);
        let config = WingOptions::default().resolve(|k| data.get(k).cloned());
        assert_eq!(config.root_title.as_deref(), Some("Contents"));
    }

    #[test]
    fn test_wing_falsy_explicit_values_are_unset() {
        let data = attrs(&[
            ("use_number", "true"),
            ("use_title_name", "false"),
            ("bar_unit_size", "6"),
        ]);
        let options = WingOptions {
            use_number: Some(false),
            use_title_name: Some(false),
            root_title: Some(String::new()),
            bar_unit_size: Some(0),
            wing_left_margin: Some(0),
        };
        let config = options.resolve(|k| data.get(k).cloned());
        assert!(config.use_number);
        assert_eq!(config.root_title.as_deref(), Some("Title"));
        assert_eq!(config.bar_unit_size, 6);
        assert_eq!(config.wing_left_margin, 4);
    }

    #[test]
    fn test_wing_false_title_name_alone_keeps_page_title() {
        let options = WingOptions {
            use_title_name: Some(false),
            ..WingOptions::default()
        };
        assert_eq!(options.resolve(|_| None).root_title, None);
    }

    #[test]
    fn test_wing_numeric_data_attributes() {
        let data = attrs(&[("bar_unit_size", "12px"), ("wing_left_margin", " 10")]);
        let config = WingOptions::default().resolve(|k| data.get(k).cloned());
        assert_eq!(config.bar_unit_size, 12);
        assert_eq!(config.wing_left_margin, 10);
    }

    #[test]
    fn test_wing_invalid_number_falls_back() {
        let data = attrs(&[("bar_unit_size", "wide")]);
        let config = WingOptions::default().resolve(|k| data.get(k).cloned());
        assert_eq!(config.bar_unit_size, 8);
    }

    #[test]
    fn test_options_deserialize_partially() {
        let options: WingOptions =
            serde_json::from_str(r#"{"use_number": true, "bar_unit_size": 6}"#).unwrap();
        assert_eq!(options.use_number, Some(true));
        assert_eq!(options.bar_unit_size, Some(6));
        assert_eq!(options.root_title, None);
    }
}
