#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One step of an edit script turning the old document into the new one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Edit<'a> {
    /// The line exists in both documents
    Keep(&'a str),

    /// The line only exists in the old document
    Delete(&'a str),

    /// The line only exists in the new document
    Insert(&'a str),
}

impl<'a> Edit<'a> {
    /// The text of the line this step carries
    pub fn line(&self) -> &'a str {
        match *self {
            Edit::Keep(line) | Edit::Delete(line) | Edit::Insert(line) => line,
        }
    }

    /// Whether this step is a deletion or an insertion
    pub fn is_change(&self) -> bool {
        !matches!(self, Edit::Keep(_))
    }

    /// Whether this step consumes a line of the old document
    pub fn in_old(&self) -> bool {
        !matches!(self, Edit::Insert(_))
    }

    /// Whether this step consumes a line of the new document
    pub fn in_new(&self) -> bool {
        !matches!(self, Edit::Delete(_))
    }

    /// The unified diff prefix for this step
    pub fn marker(&self) -> char {
        match self {
            Edit::Keep(_) => ' ',
            Edit::Delete(_) => '-',
            Edit::Insert(_) => '+',
        }
    }
}

/// The old document's lines, in order
pub fn old_lines<'a>(edits: &[Edit<'a>]) -> Vec<&'a str> {
    edits.iter().filter(|e| e.in_old()).map(Edit::line).collect()
}

/// The new document's lines, in order
pub fn new_lines<'a>(edits: &[Edit<'a>]) -> Vec<&'a str> {
    edits.iter().filter(|e| e.in_new()).map(Edit::line).collect()
}

/// Rebuild the old document from an edit script
pub fn old_text(edits: &[Edit<'_>]) -> String {
    old_lines(edits).join("\n")
}

/// Rebuild the new document from an edit script
pub fn new_text(edits: &[Edit<'_>]) -> String {
    new_lines(edits).join("\n")
}
