//! Section extraction: isolates the corridor's subsection of a bulletin.

use std::ops::Range;

use regex::Regex;
use serde::Serialize;

use crate::pack::CompiledRegion;
use crate::text::ceil_char_boundary;

/// Where the section was found inside the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionBounds {
    pub start: usize,
    pub end: usize,
    /// False when the anchor is missing and the whole document is used.
    pub anchor_found: bool,
}

impl SectionBounds {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Finds `[anchor, nearest terminator)` in a bulletin.
#[derive(Debug, Clone)]
pub struct SectionExtractor {
    start_anchor: Option<Regex>,
    terminators: Vec<Regex>,
    min_offset: usize,
}

impl SectionExtractor {
    pub fn new(region: &CompiledRegion, min_offset: usize) -> Self {
        Self {
            start_anchor: region.start_anchor.clone(),
            terminators: region.terminators.clone(),
            min_offset,
        }
    }

    /// Locate the section. Never fails: a missing anchor yields the whole text.
    pub fn locate(&self, document: &str) -> SectionBounds {
        let whole = SectionBounds {
            start: 0,
            end: document.len(),
            anchor_found: false,
        };
        let Some(anchor) = &self.start_anchor else {
            return whole;
        };
        let Some(found) = anchor.find(document) else {
            return whole;
        };

        let start = found.start();
        let search_from = ceil_char_boundary(document, start.saturating_add(self.min_offset));
        let end = self
            .terminators
            .iter()
            .filter_map(|t| t.find_at(document, search_from).map(|m| m.start()))
            .min()
            .unwrap_or(document.len());

        SectionBounds {
            start,
            end,
            anchor_found: true,
        }
    }

    /// The section text, always a substring of `document`.
    pub fn extract<'a>(&self, document: &'a str) -> &'a str {
        &document[self.locate(document).range()]
    }
}
