//! Builds the page [`Outline`] from the heading elements of the content root.

use crate::error::TocError;
use docnav_traits::Document;
use docnav_types::{Anchor, Outline, OutlineBuilder, heading_level};

pub const DEFAULT_MAX_LEVEL: u8 = 4;

/// Data attribute (`data-outline-index`) linking a heading to its entry.
pub const OUTLINE_INDEX_KEY: &str = "outline-index";

/// Normalizes a requested maximum level: absent or zero means the default.
pub fn effective_max_level(max_level: Option<u8>) -> u8 {
    match max_level {
        None | Some(0) => DEFAULT_MAX_LEVEL,
        Some(level) => level.min(6),
    }
}

/// Scans the direct children of `root` and records every heading up to
/// `max_level`.
///
/// Each recorded heading is tagged with `data-outline-index` so the scroll
/// handler can map it back to its entry.
pub fn extract_outline<D: Document>(
    doc: &D,
    root: &D::Element,
    max_level: u8,
) -> Result<Outline, TocError> {
    let mut builder = OutlineBuilder::new();

    for part in doc.children(root) {
        let Some(level) = heading_level(&doc.tag_name(&part)) else {
            continue;
        };
        if level > max_level {
            continue;
        }

        doc.set_data(&part, OUTLINE_INDEX_KEY, &builder.len().to_string())?;

        let link = doc
            .first_element_child(&part)
            .filter(|child| doc.tag_name(child) == "a");
        let anchor = link
            .as_ref()
            .and_then(|a| doc.attribute(a, "href"))
            .and_then(|href| Anchor::from_href(&href))
            .or_else(|| doc.attribute(&part, "id").map(|id| Anchor::from_fragment(&id)))
            .unwrap_or_else(|| Anchor::from_fragment(""));
        let title = match &link {
            Some(a) => doc.text_content(a),
            None => doc.text_content(&part),
        };

        let entry = builder.push(level, anchor, title.trim());
        log::debug!(
            "outline entry {}: h{} {:?} -> {}",
            entry.index,
            entry.level,
            entry.title,
            entry.anchor
        );
    }

    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docnav_traits::HeadlessDocument;

    fn heading(doc: &HeadlessDocument, main: &docnav_traits::NodeId, tag: &str, slug: &str, text: &str) {
        let h = doc.append_element(main, tag).unwrap();
        doc.set_attribute(&h, "id", slug).unwrap();
        let a = doc.append_element(&h, "a").unwrap();
        doc.add_class(&a, "header").unwrap();
        doc.set_attribute(&a, "href", &format!("#{slug}")).unwrap();
        doc.append_text(&a, text).unwrap();
    }

    #[test]
    fn test_effective_max_level() {
        assert_eq!(effective_max_level(None), 4);
        assert_eq!(effective_max_level(Some(0)), 4);
        assert_eq!(effective_max_level(Some(2)), 2);
        assert_eq!(effective_max_level(Some(9)), 6);
    }

    #[test]
    fn test_extracts_headings_in_order() {
        let doc = HeadlessDocument::new();
        let main = doc.append_element(&doc.body(), "main").unwrap();
        heading(&doc, &main, "h1", "guide", "Guide");
        let p = doc.append_element(&main, "p").unwrap();
        doc.append_text(&p, "Some prose").unwrap();
        heading(&doc, &main, "h2", "install", "Install");
        heading(&doc, &main, "h5", "too-deep", "Too deep");
        heading(&doc, &main, "h3", "from-source", "From source");

        let outline = extract_outline(&doc, &main, 4).unwrap();
        let titles: Vec<&str> = outline.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Guide", "Install", "From source"]);
        assert_eq!(outline.get(1).unwrap().anchor.as_str(), "#install");
        assert_eq!(outline.cur_max_level(), 3);

        let tagged: Vec<Option<String>> = doc
            .children(&main)
            .iter()
            .map(|c| doc.data(c, OUTLINE_INDEX_KEY))
            .collect();
        assert_eq!(
            tagged,
            vec![
                Some("0".to_string()),
                None,
                Some("1".to_string()),
                None,
                Some("2".to_string())
            ]
        );
    }

    #[test]
    fn test_heading_without_link_uses_id() {
        let doc = HeadlessDocument::new();
        let main = doc.append_element(&doc.body(), "main").unwrap();
        let h = doc.append_element(&main, "h2").unwrap();
        doc.set_attribute(&h, "id", "plain").unwrap();
        doc.append_text(&h, " Plain heading ").unwrap();

        let outline = extract_outline(&doc, &main, 4).unwrap();
        let entry = outline.get(0).unwrap();
        assert_eq!(entry.anchor.as_str(), "#plain");
        assert_eq!(entry.title, "Plain heading");
    }

    #[test]
    fn test_nested_headings_are_ignored() {
        let doc = HeadlessDocument::new();
        let main = doc.append_element(&doc.body(), "main").unwrap();
        let section = doc.append_element(&main, "section").unwrap();
        heading(&doc, &section, "h2", "nested", "Nested");

        let outline = extract_outline(&doc, &main, 4).unwrap();
        assert!(outline.is_empty());
    }
}
