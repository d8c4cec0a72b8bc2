use serde::Serialize;
use tracing::warn;

pub const FALLBACK_NOTICE: &str =
    "The response could not be split into sections; showing the full text.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rendered {
    Sectioned {
        sections: Vec<Section>,
        /// Segments past the last title.
        unmatched_segments: Vec<String>,
        /// Titles that got no segment.
        untitled: Vec<String>,
    },
    Unsectioned {
        text: String,
        notice: String,
    },
}

/// Pairs the `delimiter`-separated segments of `text` with `titles` by position.
pub fn section(text: &str, delimiter: &str, titles: &[&str]) -> Rendered {
    if delimiter.is_empty() || !text.contains(delimiter) {
        return Rendered::Unsectioned {
            text: text.trim().to_string(),
            notice: FALLBACK_NOTICE.to_string(),
        };
    }

    let mut segments = text.split(delimiter).map(|s| s.trim().to_string());
    let mut sections = Vec::with_capacity(titles.len());
    let mut untitled = Vec::new();
    for title in titles {
        match segments.next() {
            Some(body) => sections.push(Section {
                title: (*title).to_string(),
                body,
            }),
            None => untitled.push((*title).to_string()),
        }
    }
    let unmatched_segments: Vec<String> = segments.collect();

    if !unmatched_segments.is_empty() || !untitled.is_empty() {
        warn!(
            titles = titles.len(),
            extra_segments = unmatched_segments.len(),
            missing_segments = untitled.len(),
            "section count mismatch"
        );
    }

    Rendered::Sectioned {
        sections,
        unmatched_segments,
        untitled,
    }
}
