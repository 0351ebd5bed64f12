//! Text with a document style and character-style runs.
//!
//! Runs store only what differs from the document style, so changing the
//! document style changes every run that does not override it. A run's
//! effective style is `cascade([document, run])`.

use std::collections::BTreeSet;
use std::ops::Range;

use flair_style::{Merge, Selection, StyleMap, cascade};

use crate::logging::targets;

/// A byte range of text sharing one character style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRun {
    pub range: Range<usize>,
    /// The run's style relative to the document style.
    pub style: StyleMap,
}

/// A string carrying layered styles.
///
/// Runs are contiguous, ordered and cover the whole text. Adjacent runs
/// never have equal styles.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledText {
    text: String,
    document: StyleMap,
    runs: Vec<StyleRun>,
}

impl StyledText {
    /// Create unstyled text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let runs = vec![StyleRun {
            range: 0..text.len(),
            style: StyleMap::new(),
        }];
        Self {
            text,
            document: StyleMap::new(),
            runs,
        }
    }

    pub fn with_document_style(mut self, document: StyleMap) -> Self {
        self.document = document;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn document_style(&self) -> &StyleMap {
        &self.document
    }

    pub fn set_document_style(&mut self, document: StyleMap) {
        self.document = document;
    }

    pub fn runs(&self) -> &[StyleRun] {
        &self.runs
    }

    /// The effective styles of every run touched by `ranges`.
    ///
    /// An empty range is a caret and yields the style of the run it sits in,
    /// or of the last run when it sits at the end of the text. Each run is
    /// reported once, in text order. Invalid ranges are skipped.
    pub fn styles_in(&self, ranges: &[Range<usize>]) -> Vec<StyleMap> {
        self.touched_runs(ranges)
            .into_iter()
            .map(|index| self.effective(index))
            .collect()
    }

    /// Give every character in `ranges` the effective style `style`.
    ///
    /// The runs covered store `style` relative to the document style.
    pub fn set_style(&mut self, style: &StyleMap, ranges: &[Range<usize>]) {
        let relative = style.subtracting(&self.document);
        for range in ranges {
            if !self.is_valid(range) || range.is_empty() {
                tracing::debug!(target: targets::RUNS, ?range, "skipping range");
                continue;
            }
            for index in self.isolate(range) {
                self.runs[index].style = relative.clone();
            }
        }
        self.normalize_runs();
    }

    /// Merge `proposed` into the effective style of every character in `ranges`.
    ///
    /// This is what a [`Selection`] built by [`StyledText::selection`] should
    /// forward its merge requests to.
    pub fn merge_style(&mut self, proposed: &StyleMap, operation: Merge, ranges: &[Range<usize>]) {
        for range in ranges {
            if !self.is_valid(range) || range.is_empty() {
                tracing::debug!(target: targets::RUNS, ?range, "skipping range");
                continue;
            }
            for index in self.isolate(range) {
                let merged = self.effective(index).merge(proposed, operation);
                self.runs[index].style = merged.subtracting(&self.document);
            }
        }
        self.normalize_runs();
    }

    /// A selection over the effective styles in `ranges`.
    pub fn selection<F>(&self, ranges: &[Range<usize>], merge: F) -> Selection
    where
        F: Fn(StyleMap, Merge) + 'static,
    {
        Selection::new(self.styles_in(ranges), merge)
    }

    fn effective(&self, index: usize) -> StyleMap {
        cascade([&self.document, &self.runs[index].style])
    }

    fn is_valid(&self, range: &Range<usize>) -> bool {
        range.start <= range.end
            && self.text.is_char_boundary(range.start)
            && self.text.is_char_boundary(range.end)
    }

    fn touched_runs(&self, ranges: &[Range<usize>]) -> BTreeSet<usize> {
        let mut touched = BTreeSet::new();
        let last = self.runs.len().saturating_sub(1);

        for range in ranges {
            if !self.is_valid(range) {
                tracing::debug!(target: targets::RUNS, ?range, "skipping range");
                continue;
            }
            if range.is_empty() {
                let caret = self
                    .runs
                    .iter()
                    .position(|run| run.range.contains(&range.start))
                    .unwrap_or(last);
                touched.insert(caret);
                continue;
            }
            touched.extend(
                self.runs
                    .iter()
                    .enumerate()
                    .filter(|(_, run)| run.range.start < range.end && range.start < run.range.end)
                    .map(|(index, _)| index),
            );
        }

        touched
    }

    /// Split runs so `range` starts and ends on run boundaries.
    ///
    /// Returns the indices of the runs inside `range`.
    fn isolate(&mut self, range: &Range<usize>) -> Range<usize> {
        self.split_at(range.start);
        self.split_at(range.end);

        let first = self
            .runs
            .iter()
            .position(|run| run.range.start == range.start)
            .unwrap_or(self.runs.len());
        let end = self
            .runs
            .iter()
            .position(|run| run.range.end == range.end)
            .map_or(first, |index| index + 1);
        first..end
    }

    fn split_at(&mut self, offset: usize) {
        let Some(index) = self
            .runs
            .iter()
            .position(|run| run.range.start < offset && offset < run.range.end)
        else {
            return;
        };

        let tail = StyleRun {
            range: offset..self.runs[index].range.end,
            style: self.runs[index].style.clone(),
        };
        self.runs[index].range.end = offset;
        self.runs.insert(index + 1, tail);
    }

    fn normalize_runs(&mut self) {
        let mut merged: Vec<StyleRun> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            match merged.last_mut() {
                Some(previous) if previous.style == run.style => {
                    previous.range.end = run.range.end;
                }
                _ => merged.push(run),
            }
        }
        self.runs = merged;
    }
}
