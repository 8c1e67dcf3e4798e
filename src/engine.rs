//! The compute-and-apply pipeline.
//!
//! Ties the diff strategies, the formatter boundary, and the patch applier
//! together: snapshot the document, obtain the new text, diff, apply. The
//! whole pipeline runs synchronously within one logical turn; the caller
//! must not mutate the document between the snapshot and the apply.

use crate::apply::{self, ApplyError};
use crate::document::Document;
use crate::edit::{splices, Patch};
use crate::format::{FormatError, FormatOptions, Formatter};
use crate::text::Text;
use crate::{anchor_diff, hunk_diff};

/// Interchangeable diff strategies behind one produce-a-patch contract.
///
/// The applier never learns which strategy produced its input, so callers
/// can pick single-hunk or multi-hunk behavior per invocation.
pub trait DiffStrategy {
    fn patch(&self, old: &Text, new: &Text) -> Patch;
}

/// Collapses the whole change into a single replacement region.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorDiff;

impl DiffStrategy for AnchorDiff {
    fn patch(&self, old: &Text, new: &Text) -> Patch {
        anchor_diff::diff(old, new).into_iter().collect()
    }
}

/// Emits one splice group per changed region, leaving unaffected spans
/// alone so cursors and selections outside the edits stay put.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiHunkDiff;

impl DiffStrategy for MultiHunkDiff {
    fn patch(&self, old: &Text, new: &Text) -> Patch {
        splices(&hunk_diff::diff(old, new))
    }
}

/// Errors from the compute-and-apply pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// The external formatter rejected the input. The document was not
    /// touched.
    Format(FormatError),
    /// A splice fell outside the document's current bounds.
    Apply(ApplyError),
}

impl std::fmt::Display for PatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatchError::Format(e) => write!(f, "{e}"),
            PatchError::Apply(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PatchError {}

impl From<FormatError> for PatchError {
    fn from(e: FormatError) -> Self {
        PatchError::Format(e)
    }
}

impl From<ApplyError> for PatchError {
    fn from(e: ApplyError) -> Self {
        PatchError::Apply(e)
    }
}

/// Snapshot `doc`, diff it against `new_text`, and apply the resulting
/// patch as one batch. Identical content is a successful no-op.
pub fn compute_and_apply_patch(
    doc: &mut dyn Document,
    new_text: &str,
    strategy: &dyn DiffStrategy,
) -> Result<(), PatchError> {
    let old = doc.snapshot();
    let new = Text::new(new_text);
    let patch = strategy.patch(&old, &new);
    if patch.is_empty() {
        tracing::debug!("document already matches target text");
        return Ok(());
    }
    tracing::debug!(splices = patch.len(), "computed patch");
    apply::apply(doc, &patch)?;
    Ok(())
}

/// Full reformat pipeline: snapshot, run the external formatter on the
/// snapshot, and patch the document with the result.
///
/// An empty document is a successful no-op without invoking the formatter,
/// and already-formatted content applies nothing. A `FormatError` leaves
/// the document untouched.
pub fn format_document(
    doc: &mut dyn Document,
    formatter: &dyn Formatter,
    options: &FormatOptions,
    strategy: &dyn DiffStrategy,
) -> Result<(), PatchError> {
    if doc.len_units() == 0 {
        tracing::debug!("nothing to format");
        return Ok(());
    }
    let old = doc.snapshot();
    let formatted = formatter.format(&old.to_string(), options)?;
    compute_and_apply_patch(doc, &formatted, strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::StringDocument;

    struct CollapseSpaces;

    impl Formatter for CollapseSpaces {
        fn format(&self, text: &str, _options: &FormatOptions) -> Result<String, FormatError> {
            let mut out = String::with_capacity(text.len());
            let mut in_run = false;
            for c in text.chars() {
                if c == ' ' {
                    if !in_run {
                        out.push(c);
                    }
                    in_run = true;
                } else {
                    in_run = false;
                    out.push(c);
                }
            }
            Ok(out)
        }
    }

    struct AlwaysFails;

    impl Formatter for AlwaysFails {
        fn format(&self, _text: &str, _options: &FormatOptions) -> Result<String, FormatError> {
            Err(FormatError::new("syntax error at 1:1"))
        }
    }

    #[test]
    fn test_compute_and_apply_anchor() {
        let mut doc = StringDocument::new("hello world");
        compute_and_apply_patch(&mut doc, "hello there", &AnchorDiff).unwrap();
        assert_eq!(doc.content(), "hello there");
    }

    #[test]
    fn test_compute_and_apply_multi_hunk() {
        let mut doc = StringDocument::new("aXbYc");
        compute_and_apply_patch(&mut doc, "aZbWc", &MultiHunkDiff).unwrap();
        assert_eq!(doc.content(), "aZbWc");
    }

    #[test]
    fn test_noop_when_equal() {
        let mut doc = StringDocument::new("same");
        compute_and_apply_patch(&mut doc, "same", &AnchorDiff).unwrap();
        compute_and_apply_patch(&mut doc, "same", &MultiHunkDiff).unwrap();
        assert_eq!(doc.content(), "same");
    }

    #[test]
    fn test_format_document_pipeline() {
        let mut doc = StringDocument::new("a  b   c");
        format_document(
            &mut doc,
            &CollapseSpaces,
            &FormatOptions::default(),
            &MultiHunkDiff,
        )
        .unwrap();
        assert_eq!(doc.content(), "a b c");
    }

    #[test]
    fn test_format_error_leaves_document_untouched() {
        let mut doc = StringDocument::new("a  b");
        let err = format_document(
            &mut doc,
            &AlwaysFails,
            &FormatOptions::default(),
            &AnchorDiff,
        )
        .unwrap_err();
        assert!(matches!(err, PatchError::Format(_)));
        assert_eq!(doc.content(), "a  b");
    }

    #[test]
    fn test_empty_document_skips_formatter() {
        // AlwaysFails would error if invoked; an empty document must not
        // reach it.
        let mut doc = StringDocument::new("");
        format_document(
            &mut doc,
            &AlwaysFails,
            &FormatOptions::default(),
            &AnchorDiff,
        )
        .unwrap();
        assert_eq!(doc.content(), "");
    }

    #[test]
    fn test_already_formatted_is_noop() {
        let mut doc = StringDocument::new("a b c");
        format_document(
            &mut doc,
            &CollapseSpaces,
            &FormatOptions::default(),
            &AnchorDiff,
        )
        .unwrap();
        assert_eq!(doc.content(), "a b c");
    }
}
