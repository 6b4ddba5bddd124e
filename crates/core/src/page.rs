//! Page-load drivers.
//!
//! Each widget degrades to a no-op on failure: the error is logged and the
//! rest of the page is left alone. Missing mount points are expected on most
//! pages and only logged at debug level.

use crate::config::SiteConfig;
use crate::error::NavError;
use docnav_tags::{TagCloud, TagError};
use docnav_toc::{TocBuilder, Wing};
use docnav_traits::Document;
use std::future::Future;

/// The ToC widgets mounted on a page.
#[derive(Debug)]
pub struct AttachedToc<D: Document> {
    pub toc: TocBuilder<D>,
    pub block: Option<D::Element>,
    pub wing: Option<Wing<D>>,
}

fn report(widget: &str, err: NavError) {
    if err.is_missing_mount() {
        log::debug!("{widget} skipped: {err}");
    } else {
        log::warn!("{widget} failed: {err}");
    }
}

/// Builds the outline and mounts the enabled ToC widgets.
pub fn attach_toc<D: Document>(doc: &D, config: &SiteConfig) -> AttachedToc<D> {
    let toc = TocBuilder::with_layout(doc.clone(), config.max_level, config.layout.clone());

    let block = if config.enable_block {
        toc.build_block(&config.block_mount_id, &config.block)
            .unwrap_or_else(|e| {
                report("ToC block", e.into());
                None
            })
    } else {
        None
    };

    let wing = if config.enable_wing {
        toc.build_wing(&config.wing_mount_id, &config.wing)
            .unwrap_or_else(|e| {
                report("ToC wing", e.into());
                None
            })
    } else {
        None
    };

    AttachedToc { toc, block, wing }
}

/// Fetches the tag index with `fetch` and renders it, if the page has a tag
/// cloud mount. Returns the number of tags rendered.
///
/// `fetch` receives the index URL and is not called at all when the mount is
/// missing. It runs once; there are no retries.
pub async fn attach_tag_cloud<D, F, Fut>(doc: &D, config: &SiteConfig, fetch: F) -> Option<usize>
where
    D: Document,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<String, TagError>>,
{
    if !config.enable_tags {
        return None;
    }

    let cloud = match TagCloud::locate(doc.clone(), &config.tag_mount_id) {
        Ok(cloud) => cloud,
        Err(e) => {
            report("Tag cloud", e.into());
            return None;
        }
    };

    let rendered = async {
        let json = fetch(config.tag_index_url()).await?;
        cloud.render_json(&json)
    }
    .await;

    match rendered {
        Ok(count) => Some(count),
        Err(e) => {
            report("Tag cloud", e.into());
            None
        }
    }
}
