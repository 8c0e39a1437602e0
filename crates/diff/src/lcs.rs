use log::trace;

use crate::edit::Edit;

/// Suffix table for the longest common subsequence of two sequences.
///
/// `get(i, j)` is the LCS length of `old[i..]` and `new[j..]`. The table is
/// stored as one flat buffer of `(n + 1) * (m + 1)` cells, row-major, so both
/// time and memory grow with the product of the two lengths. Inputs of more
/// than a few thousand lines each get slow and memory-heavy.
#[derive(Debug, Clone)]
pub struct LcsTable {
    cells: Vec<usize>,
    width: usize,
}

impl LcsTable {
    /// Fill the table bottom-up, from the last row and column towards (0, 0)
    pub fn build<T: PartialEq>(old: &[T], new: &[T]) -> Self {
        let n = old.len();
        let m = new.len();
        let width = m + 1;
        trace!("Building LCS table of {}x{} cells", n + 1, width);

        let mut cells = vec![0; (n + 1) * width];
        for i in (0..n).rev() {
            for j in (0..m).rev() {
                cells[i * width + j] = if old[i] == new[j] {
                    cells[(i + 1) * width + j + 1] + 1
                } else {
                    cells[(i + 1) * width + j].max(cells[i * width + j + 1])
                };
            }
        }

        Self { cells, width }
    }

    /// LCS length of the suffixes starting at `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j]
    }

    /// LCS length of the full sequences
    pub fn lcs_len(&self) -> usize {
        self.cells[0]
    }
}

/// Compute the minimal edit script from `old` to `new`.
///
/// Walks the LCS table forward from the start of both sequences. On a
/// mismatch where deleting and inserting leave the same LCS potential, the
/// deletion is emitted first. Output stability depends on that order.
pub fn align<'a>(old: &[&'a str], new: &[&'a str]) -> Vec<Edit<'a>> {
    let table = LcsTable::build(old, new);
    let (n, m) = (old.len(), new.len());
    let mut edits = Vec::with_capacity(n + m - table.lcs_len());

    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if old[i] == new[j] {
            edits.push(Edit::Keep(old[i]));
            i += 1;
            j += 1;
        } else if table.get(i + 1, j) >= table.get(i, j + 1) {
            edits.push(Edit::Delete(old[i]));
            i += 1;
        } else {
            edits.push(Edit::Insert(new[j]));
            j += 1;
        }
    }
    edits.extend(old[i..].iter().map(|&line| Edit::Delete(line)));
    edits.extend(new[j..].iter().map(|&line| Edit::Insert(line)));

    edits
}
