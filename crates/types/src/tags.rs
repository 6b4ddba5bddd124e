//! The tag index consumed by the tag cloud: tag name to the posts carrying it.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A post referenced from the tag index, stored as `[title, path]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct PostRef {
    pub title: String,
    /// Source path of the post, usually ending in `.md`.
    pub path: String,
}

impl PostRef {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }
}

impl From<(String, String)> for PostRef {
    fn from((title, path): (String, String)) -> Self {
        Self { title, path }
    }
}

impl From<PostRef> for (String, String) {
    fn from(post: PostRef) -> Self {
        (post.title, post.path)
    }
}

/// Tag name to posts, in the key order of the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    tags: Vec<(String, Vec<PostRef>)>,
}

impl TagIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tag; a repeated name replaces the earlier posts in place.
    pub fn insert(&mut self, tag: impl Into<String>, posts: Vec<PostRef>) {
        let tag = tag.into();
        match self.tags.iter_mut().find(|(name, _)| *name == tag) {
            Some((_, existing)) => *existing = posts,
            None => self.tags.push((tag, posts)),
        }
    }

    pub fn get(&self, tag: &str) -> Option<&[PostRef]> {
        self.tags
            .iter()
            .find(|(name, _)| name == tag)
            .map(|(_, posts)| posts.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PostRef])> {
        self.tags
            .iter()
            .map(|(name, posts)| (name.as_str(), posts.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl FromIterator<(String, Vec<PostRef>)> for TagIndex {
    fn from_iter<I: IntoIterator<Item = (String, Vec<PostRef>)>>(iter: I) -> Self {
        let mut index = TagIndex::new();
        for (tag, posts) in iter {
            index.insert(tag, posts);
        }
        index
    }
}

struct TagIndexVisitor;

impl<'de> Visitor<'de> for TagIndexVisitor {
    type Value = TagIndex;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of tag names to [title, path] pairs")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut index = TagIndex {
            tags: Vec::with_capacity(map.size_hint().unwrap_or(0)),
        };
        while let Some((tag, posts)) = map.next_entry::<String, Vec<PostRef>>()? {
            index.insert(tag, posts);
        }
        Ok(index)
    }
}

impl<'de> Deserialize<'de> for TagIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TagIndexVisitor)
    }
}
