//! Patch application against a live document.
//!
//! Splices are applied from the highest offset to the lowest, so mutating
//! one region never shifts the offsets of splices still to come. All
//! offsets are validated against the document's current length before the
//! first mutation, making application all-or-nothing: an `OutOfRange`
//! failure leaves the document untouched.

use crate::document::Document;
use crate::edit::Splice;

/// Error applying a patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// A splice referenced offsets beyond the document's current bounds.
    /// This means the patch was computed against a stale snapshot; the
    /// caller must re-snapshot and recompute rather than retry.
    OutOfRange { from: usize, to: usize, len: usize },
}

impl std::fmt::Display for ApplyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplyError::OutOfRange { from, to, len } => write!(
                f,
                "splice [{from}, {to}) is out of range for document of length {len}"
            ),
        }
    }
}

impl std::error::Error for ApplyError {}

/// Apply `patch` to `doc` as one logical batch.
///
/// The splices must be non-overlapping and addressed against the
/// document's current content. They may arrive in any order; application
/// happens in descending `(from, to)` order, with ties keeping their
/// emission order (the sort is stable). An empty patch is a successful
/// no-op.
pub fn apply(doc: &mut dyn Document, patch: &[Splice]) -> Result<(), ApplyError> {
    if patch.is_empty() {
        return Ok(());
    }

    // Validate the whole batch first so a stale snapshot cannot leave the
    // document half-patched.
    let len = doc.len_units();
    for splice in patch {
        if splice.from > splice.to || splice.to > len {
            tracing::warn!(
                from = splice.from,
                to = splice.to,
                len,
                "rejecting patch with out-of-range splice"
            );
            return Err(ApplyError::OutOfRange {
                from: splice.from,
                to: splice.to,
                len,
            });
        }
    }

    let mut ordered: Vec<&Splice> = patch.iter().collect();
    ordered.sort_by(|a, b| b.from.cmp(&a.from).then(b.to.cmp(&a.to)));

    for splice in ordered {
        doc.replace(splice.from, splice.to, &splice.insert)?;
    }

    tracing::debug!(splices = patch.len(), "patch applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::StringDocument;

    #[test]
    fn test_empty_patch_is_noop() {
        let mut doc = StringDocument::new("abc");
        apply(&mut doc, &[]).unwrap();
        assert_eq!(doc.content(), "abc");
    }

    #[test]
    fn test_descending_application_preserves_offsets() {
        let mut doc = StringDocument::new("one two three");
        let patch = vec![Splice::replace(0, 3, "1"), Splice::replace(8, 13, "3")];
        apply(&mut doc, &patch).unwrap();
        assert_eq!(doc.content(), "1 two 3");
    }

    #[test]
    fn test_patch_order_does_not_matter() {
        let patch = vec![
            Splice::insert(0, ">"),
            Splice::delete(4, 5),
            Splice::replace(8, 9, "!"),
        ];
        let mut forward = StringDocument::new("abcdXefghi");
        let mut reversed = StringDocument::new("abcdXefghi");
        apply(&mut forward, &patch).unwrap();
        let mut patch_rev = patch.clone();
        patch_rev.reverse();
        apply(&mut reversed, &patch_rev).unwrap();
        assert_eq!(forward.content(), reversed.content());
        assert_eq!(forward.content(), ">abcdefg!i");
    }

    #[test]
    fn test_delete_before_insert_at_same_offset() {
        // A replacement emitted as a delete + insert pair sharing `from`:
        // the delete (larger `to`) must run first.
        let mut doc = StringDocument::new("abcdef");
        let patch = vec![Splice::delete(2, 3), Splice::insert(2, "XY")];
        apply(&mut doc, &patch).unwrap();
        assert_eq!(doc.content(), "abXYdef");
    }

    #[test]
    fn test_out_of_range_leaves_document_untouched() {
        let mut doc = StringDocument::new("abc");
        let patch = vec![Splice::replace(0, 1, "x"), Splice::replace(2, 9, "y")];
        let err = apply(&mut doc, &patch).unwrap_err();
        assert_eq!(
            err,
            ApplyError::OutOfRange {
                from: 2,
                to: 9,
                len: 3
            }
        );
        assert_eq!(doc.content(), "abc", "no splice may be applied");
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let mut doc = StringDocument::new("abc");
        let patch = vec![Splice {
            from: 2,
            to: 1,
            insert: String::new(),
        }];
        assert!(apply(&mut doc, &patch).is_err());
        assert_eq!(doc.content(), "abc");
    }
}
