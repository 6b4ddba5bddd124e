mod common;

use common::{TestResult, init_logging};
use docnav::{Document, HeadlessDocument, TagCloud, TagError, post_href};

fn page_with_mount() -> Result<HeadlessDocument, docnav::DomError> {
    let doc = HeadlessDocument::new();
    let mount = doc.append_element(&doc.body(), "div")?;
    doc.set_attribute(&mount, "id", "Tags")?;
    Ok(doc)
}

#[test]
fn test_markdown_paths_become_html() {
    assert_eq!(post_href("intro.md"), "intro.html");
    assert_eq!(post_href("guide/setup.md"), "guide/setup.html");
    assert_eq!(post_href("about.html"), "about.html");
    assert_eq!(post_href("NOTES.MD"), "NOTES.MD");
    assert_eq!(post_href("md"), "md");
}

#[test]
fn test_cloud_markup() -> TestResult {
    init_logging();
    let doc = page_with_mount()?;

    let cloud = TagCloud::locate(doc.clone(), "Tags")?;
    let count = cloud.render_json(r#"{"rust": [["Intro", "intro.md"]]}"#)?;
    assert_eq!(count, 1);

    assert_eq!(
        doc.to_html(cloud.mount()),
        concat!(
            r#"<div id="Tags"><div class="cell-tag">"#,
            r#"<div class="tag-name">rust</div>"#,
            r#"<a href="intro.html" class="tag-post">Intro</a>"#,
            "</div></div>",
        )
    );
    Ok(())
}

#[test]
fn test_tags_keep_document_order() -> TestResult {
    let doc = page_with_mount()?;

    let cloud = TagCloud::locate(doc.clone(), "Tags")?;
    cloud.render_json(
        r#"{
            "zeta": [["Last", "z.md"]],
            "alpha": [["First", "a.md"], ["About", "about.html"]],
            "mid": []
        }"#,
    )?;

    let names: Vec<String> = doc
        .elements_by_class("tag-name")
        .iter()
        .map(|n| doc.text_content(n))
        .collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);

    let hrefs: Vec<Option<String>> = doc
        .elements_by_class("tag-post")
        .iter()
        .map(|a| doc.attribute(a, "href"))
        .collect();
    assert_eq!(
        hrefs,
        vec![
            Some("z.html".to_string()),
            Some("a.html".to_string()),
            Some("about.html".to_string()),
        ]
    );

    let groups = doc.elements_by_class("cell-tag");
    assert_eq!(groups.len(), 3);
    assert_eq!(doc.children(&groups[2]).len(), 1);
    Ok(())
}

#[test]
fn test_malformed_index_renders_nothing() -> TestResult {
    let doc = page_with_mount()?;
    let cloud = TagCloud::locate(doc.clone(), "Tags")?;

    for json in [r#"{"rust": "#, r#"["rust"]"#, r#"{"rust": [["only title"]]}"#] {
        let result = cloud.render_json(json);
        assert!(matches!(result, Err(TagError::Json(_))), "{json}");
    }
    assert!(doc.children(cloud.mount()).is_empty());
    Ok(())
}

#[test]
fn test_missing_mount() {
    let doc = HeadlessDocument::new();
    let result = TagCloud::locate(doc, "Tags");
    assert!(matches!(result, Err(TagError::MountNotFound(id)) if id == "Tags"));
}
