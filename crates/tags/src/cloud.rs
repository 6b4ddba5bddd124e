//! Rendering of the tag index.
//!
//! ```text
//! div.cell-tag
//!   div.tag-name      {tag}
//!   a.tag-post        {title}, one per post
//! ```

use crate::error::TagError;
use crate::link::post_href;
use docnav_traits::Document;
use docnav_types::TagIndex;

pub const DEFAULT_MOUNT_ID: &str = "Tags";
pub const DEFAULT_INDEX_PATH: &str = "tag2posts.json";

pub const CELL_CLASS: &str = "cell-tag";
pub const NAME_CLASS: &str = "tag-name";
pub const POST_CLASS: &str = "tag-post";

pub fn parse_index(json: &str) -> Result<TagIndex, TagError> {
    Ok(serde_json::from_str(json)?)
}

/// A tag cloud bound to its mount element.
#[derive(Debug, Clone)]
pub struct TagCloud<D: Document> {
    doc: D,
    mount: D::Element,
}

impl<D: Document> TagCloud<D> {
    /// Finds the mount element. Pages without it get no tag cloud, so the
    /// index should not even be fetched.
    pub fn locate(doc: D, mount_id: &str) -> Result<Self, TagError> {
        let mount = doc
            .element_by_id(mount_id)
            .ok_or_else(|| TagError::MountNotFound(mount_id.to_string()))?;
        Ok(Self { doc, mount })
    }

    pub fn mount(&self) -> &D::Element {
        &self.mount
    }

    /// Appends one group per tag and returns how many were rendered.
    pub fn render(&self, index: &TagIndex) -> Result<usize, TagError> {
        let doc = &self.doc;
        for (tag, posts) in index.iter() {
            let cell = doc.create_element("div")?;
            doc.add_class(&cell, CELL_CLASS)?;

            let name = doc.create_element("div")?;
            doc.append_text(&name, tag)?;
            doc.add_class(&name, NAME_CLASS)?;
            doc.append_child(&cell, &name)?;

            for post in posts {
                let link = doc.create_element("a")?;
                doc.set_attribute(&link, "href", &post_href(&post.path))?;
                doc.append_text(&link, &post.title)?;
                doc.add_class(&link, POST_CLASS)?;
                doc.append_child(&cell, &link)?;
            }

            doc.append_child(&self.mount, &cell)?;
        }
        log::debug!("rendered {} tags", index.len());
        Ok(index.len())
    }

    /// Parses `json` and renders it.
    pub fn render_json(&self, json: &str) -> Result<usize, TagError> {
        self.render(&parse_index(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docnav_traits::HeadlessDocument;

    fn page() -> HeadlessDocument {
        let doc = HeadlessDocument::new();
        let mount = doc.append_element(&doc.body(), "div").unwrap();
        doc.set_attribute(&mount, "id", DEFAULT_MOUNT_ID).unwrap();
        doc
    }

    #[test]
    fn test_renders_single_tag() {
        let doc = page();
        let cloud = TagCloud::locate(doc.clone(), DEFAULT_MOUNT_ID).unwrap();
        let count = cloud
            .render_json(r#"{"rust": [["Intro","intro.md"]]}"#)
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(
            doc.to_html(cloud.mount()),
            concat!(
                r#"<div id="Tags">"#,
                r#"<div class="cell-tag"><div class="tag-name">rust</div>"#,
                r#"<a href="intro.html" class="tag-post">Intro</a></div>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_keeps_document_order_and_plain_paths() {
        let doc = page();
        let cloud = TagCloud::locate(doc.clone(), DEFAULT_MOUNT_ID).unwrap();
        cloud
            .render_json(r#"{"zig": [["About","about.html"]], "c": [["K&R","kr.md"], ["Ptr","ptr.md"]]}"#)
            .unwrap();

        let names: Vec<String> = doc
            .elements_by_class(NAME_CLASS)
            .iter()
            .map(|n| doc.text_content(n))
            .collect();
        assert_eq!(names, vec!["zig", "c"]);

        let hrefs: Vec<String> = doc
            .elements_by_class(POST_CLASS)
            .iter()
            .filter_map(|a| doc.attribute(a, "href"))
            .collect();
        assert_eq!(hrefs, vec!["about.html", "kr.html", "ptr.html"]);
    }

    #[test]
    fn test_missing_mount() {
        let doc = HeadlessDocument::new();
        let result = TagCloud::locate(doc, DEFAULT_MOUNT_ID);
        assert!(matches!(result, Err(TagError::MountNotFound(_))));
    }

    #[test]
    fn test_malformed_index_renders_nothing() {
        let doc = page();
        let cloud = TagCloud::locate(doc.clone(), DEFAULT_MOUNT_ID).unwrap();
        let result = cloud.render_json(r#"{"rust": "intro.md"}"#);
        assert!(matches!(result, Err(TagError::Json(_))));
        assert!(doc.children(cloud.mount()).is_empty());
    }
}
