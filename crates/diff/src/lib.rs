// Line-level diff library
// This crate aligns two documents line by line and renders unified diffs

mod buffer_diff;
mod diff_hunk;
mod edit;
mod error;
mod lcs;
mod lines;
mod text_diff;

pub use buffer_diff::{BufferDiff, BufferDiffSnapshot};
pub use diff_hunk::{group_hunks, render_unified, DiffHunk, DiffHunkRange, DiffHunkStatus};
pub use edit::{new_lines, new_text, old_lines, old_text, Edit};
pub use error::{DiffError, Result};
pub use lcs::{align, LcsTable};
pub use lines::split_lines;
pub use text_diff::{compute_unified_diff, DiffOptions, TextDiff, DEFAULT_CONTEXT_LINES};
