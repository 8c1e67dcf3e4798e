//! Document boundary.
//!
//! The engine needs exactly two things from a host document: the full
//! current content as one snapshot, and a replace-range primitive addressed
//! in code-unit offsets. Everything else (rendering, cursors, undo) belongs
//! to the host. The handle is borrowed per call and never retained.

use crate::apply::ApplyError;
use crate::text::{units_to_string, Text};

/// Minimal mutable-document interface the patch applier runs against.
///
/// Implementors own the content; the engine only borrows the handle for
/// the duration of a single compute-and-apply call.
pub trait Document {
    /// Current content length in UTF-16 code units.
    fn len_units(&self) -> usize;

    /// Snapshot the full current content.
    fn snapshot(&self) -> Text;

    /// Replace the code-unit range `[from, to)` with `insert`.
    ///
    /// Must reject out-of-bounds offsets rather than clamp them: a bad
    /// offset means the caller's patch was computed against a stale
    /// snapshot and clamping would corrupt content silently.
    fn replace(&mut self, from: usize, to: usize, insert: &str) -> Result<(), ApplyError>;
}

/// In-memory document backed by a code-unit vector.
///
/// Used by tests and by embedders that have no host editor to bind to.
#[derive(Debug, Clone, Default)]
pub struct StringDocument {
    units: Vec<u16>,
}

impl StringDocument {
    pub fn new(content: &str) -> Self {
        Self {
            units: content.encode_utf16().collect(),
        }
    }

    /// Current content decoded back to a `String`.
    pub fn content(&self) -> String {
        units_to_string(&self.units)
    }
}

impl Document for StringDocument {
    fn len_units(&self) -> usize {
        self.units.len()
    }

    fn snapshot(&self) -> Text {
        Text::new(&self.content())
    }

    fn replace(&mut self, from: usize, to: usize, insert: &str) -> Result<(), ApplyError> {
        if from > to || to > self.units.len() {
            return Err(ApplyError::OutOfRange {
                from,
                to,
                len: self.units.len(),
            });
        }
        let _ = self.units.splice(from..to, insert.encode_utf16());
        Ok(())
    }
}
