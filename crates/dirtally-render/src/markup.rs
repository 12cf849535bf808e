//! Small markup helpers.

use std::borrow::Cow;

/// Escape text for use in HTML content and quoted attributes.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Hash state naming a folder by the segments leading to it.
///
/// Segments are fed length-prefixed, so two different segment sequences
/// never share a key even when a name contains a separator.
#[derive(Clone)]
pub struct FolderKey {
    hasher: blake3::Hasher,
}

impl FolderKey {
    /// Key for the top level, seeded with `hint`.
    pub fn root(hint: &str) -> Self {
        let mut key = Self {
            hasher: blake3::Hasher::new(),
        };
        key.feed(hint);
        key
    }

    /// Key of the folder `name` directly below this one.
    pub fn child(&self, name: &str) -> Self {
        let mut key = self.clone();
        key.feed(name);
        key
    }

    /// Element id, safe inside attributes and script string literals.
    pub fn id(&self) -> String {
        format!("folder_{}", &self.hasher.finalize().to_hex()[..16])
    }

    fn feed(&mut self, segment: &str) {
        self.hasher.update(&(segment.len() as u64).to_le_bytes());
        self.hasher.update(segment.as_bytes());
    }
}

/// Element id of the folder reached through `segments` below `hint`.
pub fn folder_id<S: AsRef<str>>(hint: &str, segments: &[S]) -> String {
    segments
        .iter()
        .fold(FolderKey::root(hint), |key, segment| key.child(segment.as_ref()))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_is_borrowed() {
        assert!(matches!(escape_html("plain name.txt"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_special() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_folder_id_deterministic() {
        assert_eq!(folder_id("", &["A", "B"]), folder_id("", &["A", "B"]));
        assert_ne!(folder_id("", &["A", "B"]), folder_id("", &["B"]));
        assert_ne!(folder_id("", &["a_b", "c"]), folder_id("", &["a", "b_c"]));
        assert_ne!(folder_id("", &["X"]), folder_id("/share", &["X"]));
        assert_eq!(folder_id("", &["X"]).len(), "folder_".len() + 16);
    }

    #[test]
    fn test_separator_inside_name_is_distinct() {
        assert_ne!(folder_id("", &["A/B"]), folder_id("", &["A", "B"]));
        assert_ne!(folder_id("", &["A", "B/C"]), folder_id("", &["A/B", "C"]));
    }

    #[test]
    fn test_key_matches_folder_id() {
        let key = FolderKey::root("").child("A").child("B");
        assert_eq!(key.id(), folder_id("", &["A", "B"]));
    }
}
