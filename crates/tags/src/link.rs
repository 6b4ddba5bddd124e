/// Link target for a post path: a trailing `.md` becomes `.html`.
///
/// Only the literal, case-sensitive suffix is rewritten; every other path,
/// including `notes.md.bak` or `README.MD`, is returned as-is.
pub fn post_href(path: &str) -> String {
    match path.strip_suffix(".md") {
        Some(stem) => format!("{stem}.html"),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_suffix_is_rewritten() {
        assert_eq!(post_href("intro.md"), "intro.html");
        assert_eq!(post_href("posts/2024/launch.md"), "posts/2024/launch.html");
    }

    #[test]
    fn test_other_paths_are_untouched() {
        assert_eq!(post_href("about.html"), "about.html");
        assert_eq!(post_href("notes.md.bak"), "notes.md.bak");
        assert_eq!(post_href("README.MD"), "README.MD");
        assert_eq!(post_href(""), "");
    }

    #[test]
    fn test_only_the_suffix_changes() {
        assert_eq!(post_href("a.md/b.md"), "a.md/b.html");
        assert_eq!(post_href(".md"), ".html");
    }
}
