//! Edit operations and document splices.
//!
//! An edit script (`Vec<EditOp>`) describes how one snapshot becomes
//! another; a `Patch` is its position-addressed form, ready for the
//! applier. All lengths and offsets are UTF-16 code units.

/// One step of an edit script over two text snapshots.
///
/// Invariant: concatenating the `Equal`/`Delete` spans in order
/// reconstructs the old text, and the `Equal`/`Insert` spans the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Code units unchanged in both snapshots.
    Equal(usize),
    /// Code units removed from the old snapshot at the current position.
    Delete(usize),
    /// Text inserted into the new snapshot at the current position.
    Insert(String),
}

/// A single replace-range mutation addressed by absolute code-unit offsets
/// into the pre-mutation document. `from == to` means pure insertion; an
/// empty `insert` means pure deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub from: usize,
    pub to: usize,
    pub insert: String,
}

impl Splice {
    /// Replace `[from, to)` with `insert`.
    pub fn replace(from: usize, to: usize, insert: impl Into<String>) -> Self {
        Self {
            from,
            to,
            insert: insert.into(),
        }
    }

    /// Insert `text` at `at` without consuming anything.
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::replace(at, at, text)
    }

    /// Delete `[from, to)`.
    pub fn delete(from: usize, to: usize) -> Self {
        Self::replace(from, to, String::new())
    }
}

/// Non-overlapping splices addressed against one consistent snapshot.
pub type Patch = Vec<Splice>;

/// Convert an edit script into a patch addressed against the old snapshot.
///
/// `Equal` advances the cursor, `Delete` emits a splice and advances,
/// `Insert` emits a zero-width splice and stays put. An insert directly
/// after a delete is anchored at the delete's start, so a replacement
/// yields a delete-splice and an insert-splice sharing `from`; the
/// applier's descending `(from, to)` order runs the delete first.
pub fn splices(ops: &[EditOp]) -> Patch {
    let mut patch = Vec::new();
    let mut cursor = 0;
    let mut last_delete_from = None;

    for op in ops {
        match op {
            EditOp::Equal(len) => {
                cursor += len;
                last_delete_from = None;
            }
            EditOp::Delete(len) => {
                patch.push(Splice::delete(cursor, cursor + len));
                last_delete_from = Some(cursor);
                cursor += len;
            }
            EditOp::Insert(text) => {
                let at = last_delete_from.take().unwrap_or(cursor);
                patch.push(Splice::insert(at, text.clone()));
            }
        }
    }

    patch
}
