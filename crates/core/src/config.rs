//! Site-level configuration of the widgets.

use crate::error::NavError;
use docnav_tags::{DEFAULT_INDEX_PATH, DEFAULT_MOUNT_ID};
use docnav_toc::{BlockOptions, PageLayout, WingOptions};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BLOCK_MOUNT_ID: &str = "tock";
pub const DEFAULT_WING_MOUNT_ID: &str = "tocw";

/// Everything the page-load drivers need. Every field has a default, so a
/// partial JSON object (or `{}`) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Deepest heading level in the outline; absent or zero means 4.
    pub max_level: Option<u8>,
    pub layout: PageLayout,

    pub enable_block: bool,
    pub block_mount_id: String,
    pub block: BlockOptions,

    pub enable_wing: bool,
    pub wing_mount_id: String,
    pub wing: WingOptions,

    pub enable_tags: bool,
    pub tag_mount_id: String,
    /// Location of the tag index, relative to `base_url` when that is set.
    pub tag_index_path: String,
    pub base_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            max_level: None,
            layout: PageLayout::default(),
            enable_block: true,
            block_mount_id: DEFAULT_BLOCK_MOUNT_ID.to_string(),
            block: BlockOptions::default(),
            enable_wing: true,
            wing_mount_id: DEFAULT_WING_MOUNT_ID.to_string(),
            wing: WingOptions::default(),
            enable_tags: true,
            tag_mount_id: DEFAULT_MOUNT_ID.to_string(),
            tag_index_path: DEFAULT_INDEX_PATH.to_string(),
            base_url: None,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, NavError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), NavError> {
        let ids = [
            ("block_mount_id", &self.block_mount_id),
            ("wing_mount_id", &self.wing_mount_id),
            ("tag_mount_id", &self.tag_mount_id),
            ("layout.content_id", &self.layout.content_id),
            ("layout.page_wrapper_id", &self.layout.page_wrapper_id),
        ];
        for (name, value) in ids {
            if value.trim().is_empty() {
                return Err(NavError::Config(format!("{name} must not be empty")));
            }
        }
        if self.tag_index_path.trim().is_empty() {
            return Err(NavError::Config("tag_index_path must not be empty".to_string()));
        }
        Ok(())
    }

    /// The URL the tag index is fetched from.
    pub fn tag_index_url(&self) -> String {
        match self.base_url.as_deref() {
            None | Some("") => self.tag_index_path.clone(),
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                self.tag_index_path.trim_start_matches('/')
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.block_mount_id, "tock");
        assert_eq!(config.wing_mount_id, "tocw");
        assert_eq!(config.tag_mount_id, "Tags");
        assert_eq!(config.tag_index_url(), "tag2posts.json");
    }

    #[test]
    fn test_nested_options() {
        let config = SiteConfig::from_json(
            r#"{
                "max_level": 3,
                "wing": {"use_title_name": false, "root_title": "Contents"},
                "block": {"use_number": true},
                "layout": {"content_id": "main-content"}
            }"#,
        )
        .unwrap();
        assert_eq!(config.max_level, Some(3));
        assert_eq!(config.wing.use_title_name, Some(false));
        assert_eq!(config.wing.root_title.as_deref(), Some("Contents"));
        assert_eq!(config.block.use_number, Some(true));
        assert_eq!(config.layout.content_id, "main-content");
        assert_eq!(config.layout.page_wrapper_id, "page-wrapper");
    }

    #[test]
    fn test_tag_index_url_joins_base() {
        let config = SiteConfig {
            base_url: Some("/book/".to_string()),
            ..SiteConfig::default()
        };
        assert_eq!(config.tag_index_url(), "/book/tag2posts.json");
    }

    #[test]
    fn test_rejects_empty_ids() {
        let result = SiteConfig::from_json(r#"{"wing_mount_id": " "}"#);
        assert!(matches!(result, Err(NavError::Config(_))));
    }

    #[test]
    fn test_rejects_wrong_types() {
        let result = SiteConfig::from_json(r#"{"max_level": "four"}"#);
        assert!(matches!(result, Err(NavError::Json(_))));
    }
}
