//! Single-hunk diff that trims the longest common prefix and suffix.
//!
//! The change between the two snapshots is collapsed to one contiguous
//! replacement region. This is not minimal in edit-distance terms, but
//! formatter output tends to touch the buffer broadly, so a single splice
//! is usually the cheapest thing to hand the document model.

use crate::edit::Splice;
use crate::text::{common_affixes, Text};

/// Compare two snapshots and collapse the difference to one replacement.
///
/// Returns `None` when the snapshots are identical. The splice boundaries
/// are guaranteed to land on code-point boundaries in both snapshots.
pub fn diff(old: &Text, new: &Text) -> Option<Splice> {
    if old.units() == new.units() {
        return None;
    }

    let (prefix, suffix) = common_affixes(old.units(), new.units());
    Some(Splice::replace(
        prefix,
        old.len() - suffix,
        new.slice(prefix, new.len() - suffix),
    ))
}
