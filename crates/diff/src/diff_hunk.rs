use derive_more::Display;
use log::debug;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edit::Edit;

/// Represents the kind of change a hunk carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiffHunkStatus {
    /// The hunk only inserts lines
    #[display(fmt = "Added")]
    Added,

    /// The hunk only deletes lines
    #[display(fmt = "Deleted")]
    Deleted,

    /// The hunk both deletes and inserts lines
    #[display(fmt = "Modified")]
    Modified,
}

/// Represents a range of lines in one version of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[display(fmt = "{},{}", start, count)]
pub struct DiffHunkRange {
    /// The starting line (1-based)
    pub start: usize,

    /// The number of lines
    pub count: usize,
}

impl DiffHunkRange {
    /// Create a new range from start and count
    pub fn new(start: usize, count: usize) -> Self {
        Self { start, count }
    }

    /// Get the end of the range (exclusive)
    pub fn end(&self) -> usize {
        self.start + self.count
    }

    /// Check if this range is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check if this range contains the given 1-based line
    pub fn contains(&self, line: usize) -> bool {
        line >= self.start && line < self.end()
    }
}

/// Represents a hunk of changes between two versions of text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffHunk {
    /// The kind of change in the hunk
    pub status: DiffHunkStatus,

    /// The entries of the edit script covered by the hunk
    pub window: Range<usize>,

    /// The lines of the old version covered by the hunk
    pub old_range: DiffHunkRange,

    /// The lines of the new version covered by the hunk
    pub new_range: DiffHunkRange,
}

impl DiffHunk {
    /// Build the hunk covering `window` of the edit script
    pub fn from_window(edits: &[Edit<'_>], window: Range<usize>) -> Self {
        let before = &edits[..window.start];
        let covered = &edits[window.clone()];

        let old_start = 1 + before.iter().filter(|e| e.in_old()).count();
        let new_start = 1 + before.iter().filter(|e| e.in_new()).count();
        let old_count = covered.iter().filter(|e| e.in_old()).count();
        let new_count = covered.iter().filter(|e| e.in_new()).count();

        let deletes = covered.iter().any(|e| matches!(e, Edit::Delete(_)));
        let inserts = covered.iter().any(|e| matches!(e, Edit::Insert(_)));
        let status = match (deletes, inserts) {
            (true, false) => DiffHunkStatus::Deleted,
            (false, true) => DiffHunkStatus::Added,
            _ => DiffHunkStatus::Modified,
        };

        Self {
            status,
            window,
            old_range: DiffHunkRange::new(old_start, old_count),
            new_range: DiffHunkRange::new(new_start, new_count),
        }
    }

    /// The `@@ -a,b +c,d @@` marker line, without terminator
    pub fn header(&self) -> String {
        format!("@@ -{} +{} @@", self.old_range, self.new_range)
    }

    /// The entries of `edits` inside this hunk
    pub fn lines<'e, 'a>(&self, edits: &'e [Edit<'a>]) -> &'e [Edit<'a>] {
        &edits[self.window.clone()]
    }

    /// Get the number of added lines in this hunk
    pub fn added_lines(&self, edits: &[Edit<'_>]) -> usize {
        self.lines(edits)
            .iter()
            .filter(|e| matches!(e, Edit::Insert(_)))
            .count()
    }

    /// Get the number of deleted lines in this hunk
    pub fn deleted_lines(&self, edits: &[Edit<'_>]) -> usize {
        self.lines(edits)
            .iter()
            .filter(|e| matches!(e, Edit::Delete(_)))
            .count()
    }

    /// Get the number of context lines in this hunk
    pub fn context_lines(&self, edits: &[Edit<'_>]) -> usize {
        self.lines(edits)
            .iter()
            .filter(|e| matches!(e, Edit::Keep(_)))
            .count()
    }
}

/// Group the changes of an edit script into hunks with `context` lines around them.
///
/// Each hunk opens up to `context` kept lines before its first change and ends
/// `context` kept lines after its last one. A run of more than `context` kept
/// lines closes the hunk unless the next hunk's leading context would overlap
/// it: changes fewer than `2 * context` kept lines apart share a hunk, and a gap
/// of exactly `2 * context` leaves two adjacent hunks. When both
/// documents end with a line separator the script ends by keeping their shared
/// empty tail; that entry marks the end of the text and is never part of a hunk.
pub fn group_hunks(edits: &[Edit<'_>], context: usize) -> Vec<DiffHunk> {
    let len = visible_len(edits);
    let max_gap = context.max(context.saturating_mul(2).saturating_sub(1));

    let mut hunks = Vec::new();
    let mut idx = 0;
    while idx < len {
        while idx < len && !edits[idx].is_change() {
            idx += 1;
        }
        if idx >= len {
            break;
        }

        let start = idx.saturating_sub(context);
        let mut last_change = idx;
        let mut run = 0;
        for (t, edit) in edits.iter().enumerate().take(len).skip(idx) {
            if edit.is_change() {
                last_change = t;
                run = 0;
            } else {
                run += 1;
                if run > max_gap {
                    break;
                }
            }
        }
        let end = last_change.saturating_add(1).saturating_add(context).min(len);

        let hunk = DiffHunk::from_window(edits, start..end);
        debug!(
            "Hunk {} covers edits {}..{} ({})",
            hunk.header(),
            start,
            end,
            hunk.status
        );
        hunks.push(hunk);
        idx = end;
    }

    hunks
}

/// Number of entries before the shared empty tail, if the script ends with one
pub(crate) fn visible_len(edits: &[Edit<'_>]) -> usize {
    match edits.last() {
        Some(Edit::Keep("")) => edits.len() - 1,
        _ => edits.len(),
    }
}

/// Render the unified diff text: two headers, then each hunk's marker and lines
pub fn render_unified(
    old_name: &str,
    new_name: &str,
    edits: &[Edit<'_>],
    hunks: &[DiffHunk],
) -> String {
    let mut result = String::new();
    result.push_str(&format!("--- {}\n", old_name));
    result.push_str(&format!("+++ {}\n", new_name));

    for hunk in hunks {
        result.push_str(&hunk.header());
        result.push('\n');
        for edit in hunk.lines(edits) {
            result.push(edit.marker());
            result.push_str(edit.line());
            result.push('\n');
        }
    }

    result
}
