//! Splitting raw path strings into segments.

use dirtally_core::{BuildConfig, SegmentError};

/// Splits path strings on a single separator character.
#[derive(Debug, Clone)]
pub struct PathSegmenter {
    separator: char,
    network_prefix: Option<String>,
}

impl PathSegmenter {
    /// Create a segmenter following the given configuration.
    pub fn new(config: &BuildConfig) -> Self {
        let network_prefix = config
            .strip_network_prefix
            .then(|| [config.separator; 2].iter().collect());
        Self {
            separator: config.separator,
            network_prefix,
        }
    }

    /// Separator this segmenter splits on.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Split `path` into its non-empty segments.
    ///
    /// A leading doubled separator (network root) is stripped first when
    /// enabled. A single leading or trailing separator is tolerated; any other
    /// empty segment makes the path malformed.
    pub fn segment<'a>(&self, path: &'a str) -> Result<Vec<&'a str>, SegmentError> {
        let mut rest = path;
        if let Some(prefix) = &self.network_prefix {
            rest = rest.strip_prefix(prefix.as_str()).unwrap_or(rest);
        }
        rest = rest.strip_prefix(self.separator).unwrap_or(rest);
        rest = rest.strip_suffix(self.separator).unwrap_or(rest);

        if rest.is_empty() {
            return Err(SegmentError::EmptyPath);
        }

        let segments: Vec<&str> = rest.split(self.separator).collect();
        if let Some(index) = segments.iter().position(|s| s.is_empty()) {
            return Err(SegmentError::EmptySegment { index });
        }
        Ok(segments)
    }
}

impl Default for PathSegmenter {
    fn default() -> Self {
        Self::new(&BuildConfig::default())
    }
}

/// Split a backslash-delimited path using the default configuration.
pub fn segment(path: &str) -> Result<Vec<&str>, SegmentError> {
    PathSegmenter::default().segment(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path() {
        assert_eq!(segment("A\\B\\C.txt").unwrap(), vec!["A", "B", "C.txt"]);
    }

    #[test]
    fn test_drive_letter() {
        assert_eq!(segment("C:\\Users\\x").unwrap(), vec!["C:", "Users", "x"]);
    }

    #[test]
    fn test_network_root_stripped() {
        assert_eq!(
            segment("\\\\Server\\Share\\file.txt").unwrap(),
            vec!["Server", "Share", "file.txt"]
        );
    }

    #[test]
    fn test_single_leading_and_trailing_separator() {
        assert_eq!(segment("\\A\\B\\").unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn test_interior_empty_segment() {
        assert_eq!(
            segment("A\\\\B"),
            Err(SegmentError::EmptySegment { index: 1 })
        );
        assert_eq!(
            segment("A\\B\\\\"),
            Err(SegmentError::EmptySegment { index: 2 })
        );
    }

    #[test]
    fn test_empty_paths() {
        assert_eq!(segment(""), Err(SegmentError::EmptyPath));
        assert_eq!(segment("\\"), Err(SegmentError::EmptyPath));
        assert_eq!(segment("\\\\"), Err(SegmentError::EmptyPath));
    }

    #[test]
    fn test_network_prefix_kept_when_disabled() {
        let config = BuildConfig::builder()
            .strip_network_prefix(false)
            .build()
            .unwrap();
        let segmenter = PathSegmenter::new(&config);
        assert_eq!(
            segmenter.segment("\\\\Server\\x"),
            Err(SegmentError::EmptySegment { index: 0 })
        );
    }

    #[test]
    fn test_custom_separator() {
        let segmenter = PathSegmenter::new(&BuildConfig::with_separator('/').unwrap());
        assert_eq!(segmenter.segment("/home/u/a").unwrap(), vec!["home", "u", "a"]);
        assert_eq!(segmenter.segment("a\\b").unwrap(), vec!["a\\b"]);
    }
}
