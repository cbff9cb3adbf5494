use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{DocumentError, Result};

/// Opening (`<svg`) or closing (`</svg`) tag; group 1 is set for closing tags.
#[allow(clippy::expect_used)]
static SVG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/)?svg[\s>/]").expect("invalid svg regex"));

#[allow(clippy::expect_used)]
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("invalid comment regex"));

#[allow(clippy::expect_used)]
static PATH_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<path(\s[^>]*)?>").expect("invalid path regex"));

#[allow(clippy::expect_used)]
static D_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)d\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("invalid d regex")
});

/// SVG markup from which the boundary path description is taken.
///
/// Only the first `<path>` inside the `<svg>` element is considered.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    markup: String,
}

impl SvgDocument {
    #[must_use]
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }

    /// Reads an SVG file.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Io` if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let markup = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = markup.len(), "loaded SVG document");
        Ok(Self { markup })
    }

    /// Returns the `d` attribute of the first path element inside `<svg>`.
    ///
    /// # Errors
    ///
    /// - `DocumentError::NoSvgElement` if the markup has no `<svg>` element
    /// - `DocumentError::NoPathElement` if no path with a `d` attribute follows it
    pub fn first_path_data(&self) -> Result<&str> {
        let comments: Vec<Range<usize>> = COMMENT
            .find_iter(&self.markup)
            .map(|m| m.range())
            .collect();
        let in_comment = |pos: usize| comments.iter().any(|c| c.contains(&pos));

        let (start, end) = self.svg_element_span(&in_comment)?;
        let body = &self.markup[start..end];

        let data = PATH_TAG
            .captures_iter(body)
            .filter(|tag| tag.get(0).is_some_and(|m| !in_comment(start + m.start())))
            .filter_map(|tag| tag.get(1))
            .find_map(|attrs| {
                D_ATTR
                    .captures(attrs.as_str())
                    .and_then(|c| c.get(1).or_else(|| c.get(2)))
            })
            .ok_or(DocumentError::NoPathElement)?;

        Ok(data.as_str())
    }

    /// Byte range of the first `<svg>` element, from its opening tag up to
    /// the matching `</svg>` (or the end of the markup if it is never closed).
    fn svg_element_span(&self, in_comment: &impl Fn(usize) -> bool) -> Result<(usize, usize)> {
        let mut start = None;
        let mut depth = 0usize;

        for tag in SVG_TAG.captures_iter(&self.markup) {
            let Some(m) = tag.get(0) else {
                continue;
            };
            if in_comment(m.start()) {
                continue;
            }
            if tag.get(1).is_none() {
                start.get_or_insert(m.start());
                depth += 1;
            } else if let Some(s) = start {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Ok((s, m.start()));
                }
            }
        }

        start
            .map(|s| (s, self.markup.len()))
            .ok_or_else(|| DocumentError::NoSvgElement.into())
    }
}
