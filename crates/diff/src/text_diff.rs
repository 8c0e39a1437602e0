use log::debug;

use crate::buffer_diff::BufferDiff;
use crate::error::{DiffError, Result};

/// Number of context lines used when the caller does not choose one
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// Options controlling how a diff is grouped into hunks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// Unchanged lines kept before and after each change
    pub context_lines: usize,
}

impl DiffOptions {
    /// Validate a caller-supplied context line count
    pub fn new(context_lines: i64) -> Result<Self> {
        if context_lines < 0 {
            return Err(DiffError::negative_context(context_lines));
        }
        // Counts past the address space cover every document anyway
        let context_lines = usize::try_from(context_lines).unwrap_or(usize::MAX);
        Ok(Self { context_lines })
    }
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
        }
    }
}

/// Wrapper around text diff operations
pub struct TextDiff;

impl TextDiff {
    /// Create a diff between two texts
    pub fn diff<'a>(old_text: &'a str, new_text: &'a str, options: &DiffOptions) -> BufferDiff<'a> {
        BufferDiff::new(old_text, new_text, options)
    }

    /// Generate a unified diff string labelled with the two display names
    pub fn unified_diff(
        old_name: &str,
        new_name: &str,
        old_text: &str,
        new_text: &str,
        options: &DiffOptions,
    ) -> String {
        Self::diff(old_text, new_text, options).unified(old_name, new_name)
    }
}

/// Compute the unified diff of two documents.
///
/// The names are used verbatim in the `---` and `+++` headers. A negative
/// `context_lines` is rejected with [`DiffError::InvalidArgument`] before any
/// work is done. Identical documents produce the two headers and nothing else.
///
/// ```
/// let diff = line_diff::compute_unified_diff("a.txt", "b.txt", "x\ny\n", "x\nz\n", 3).unwrap();
/// assert_eq!(diff, "--- a.txt\n+++ b.txt\n@@ -1,2 +1,2 @@\n x\n-y\n+z\n");
/// ```
pub fn compute_unified_diff(
    old_name: &str,
    new_name: &str,
    old_text: &str,
    new_text: &str,
    context_lines: i64,
) -> Result<String> {
    let options = DiffOptions::new(context_lines)?;
    debug!(
        "Diffing {} ({} bytes) against {} ({} bytes) with {} context lines",
        old_name,
        old_text.len(),
        new_name,
        new_text.len(),
        options.context_lines
    );
    Ok(TextDiff::unified_diff(
        old_name, new_name, old_text, new_text, &options,
    ))
}
