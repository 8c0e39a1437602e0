use log::debug;

use crate::diff_hunk::{group_hunks, render_unified, visible_len, DiffHunk};
use crate::edit::Edit;
use crate::lcs::align;
use crate::lines::split_lines;
use crate::text_diff::DiffOptions;

/// Represents a diff between two buffers (text documents)
#[derive(Debug, Clone)]
pub struct BufferDiff<'a> {
    /// The edit script from the old text to the new text
    edits: Vec<Edit<'a>>,

    /// The hunks in this diff
    hunks: Vec<DiffHunk>,

    /// The number of lines in the old text
    old_line_count: usize,

    /// The number of lines in the new text
    new_line_count: usize,
}

/// An immutable, owned summary of a buffer diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferDiffSnapshot {
    /// The hunks in this diff
    pub hunks: Vec<DiffHunk>,

    /// The number of lines in the old text
    pub old_line_count: usize,

    /// The number of lines in the new text
    pub new_line_count: usize,

    added: usize,
    deleted: usize,
    unchanged: usize,
}

impl<'a> BufferDiff<'a> {
    /// Create a new buffer diff between two texts
    pub fn new(old_text: &'a str, new_text: &'a str, options: &DiffOptions) -> Self {
        let old_lines = split_lines(old_text);
        let new_lines = split_lines(new_text);

        let edits = align(&old_lines, &new_lines);
        let hunks = group_hunks(&edits, options.context_lines);
        debug!(
            "Diffed {} old lines against {} new lines: {} edits, {} hunks",
            old_lines.len(),
            new_lines.len(),
            edits.len(),
            hunks.len()
        );

        // The shared empty tail ends both texts without being a line of either
        let tail = edits.len() - visible_len(&edits);
        Self {
            edits,
            hunks,
            old_line_count: old_lines.len() - tail,
            new_line_count: new_lines.len() - tail,
        }
    }

    /// Render the diff in unified format with the given display names
    pub fn unified(&self, old_name: &str, new_name: &str) -> String {
        render_unified(old_name, new_name, &self.edits, &self.hunks)
    }

    /// Get a snapshot of the current diff
    pub fn snapshot(&self) -> BufferDiffSnapshot {
        let visible = &self.edits[..visible_len(&self.edits)];
        let count = |pred: fn(&Edit<'_>) -> bool| visible.iter().filter(|e| pred(e)).count();

        BufferDiffSnapshot {
            hunks: self.hunks.clone(),
            old_line_count: self.old_line_count,
            new_line_count: self.new_line_count,
            added: count(|e| matches!(e, Edit::Insert(_))),
            deleted: count(|e| matches!(e, Edit::Delete(_))),
            unchanged: count(|e| matches!(e, Edit::Keep(_))),
        }
    }

    /// Get the edit script
    pub fn edits(&self) -> &[Edit<'a>] {
        &self.edits
    }

    /// Get the hunks
    pub fn hunks(&self) -> &[DiffHunk] {
        &self.hunks
    }

    /// Get the number of hunks
    pub fn hunk_count(&self) -> usize {
        self.hunks.len()
    }

    /// Get a hunk by index
    pub fn hunk(&self, index: usize) -> Option<&DiffHunk> {
        self.hunks.get(index)
    }
}

impl BufferDiffSnapshot {
    /// Create a new empty diff snapshot
    pub fn empty() -> Self {
        Self {
            hunks: Vec::new(),
            old_line_count: 0,
            new_line_count: 0,
            added: 0,
            deleted: 0,
            unchanged: 0,
        }
    }

    /// Get the hunks
    pub fn hunks(&self) -> &[DiffHunk] {
        &self.hunks
    }

    /// Get the number of hunks
    pub fn hunk_count(&self) -> usize {
        self.hunks.len()
    }

    /// Check if the diff has any changes
    pub fn has_changes(&self) -> bool {
        self.added > 0 || self.deleted > 0
    }

    /// Get the number of added lines
    pub fn added_lines(&self) -> usize {
        self.added
    }

    /// Get the number of deleted lines
    pub fn deleted_lines(&self) -> usize {
        self.deleted
    }

    /// Get the number of unchanged lines
    pub fn unchanged_lines(&self) -> usize {
        self.unchanged
    }
}
