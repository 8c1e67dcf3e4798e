// Text patch engine library - exposes all core modules for testing

pub mod anchor_diff;
pub mod apply;
pub mod document;
pub mod edit;
pub mod engine;
pub mod format;
pub mod hunk_diff;
pub mod text;

pub use apply::ApplyError;
pub use document::{Document, StringDocument};
pub use edit::{EditOp, Patch, Splice};
pub use engine::{
    compute_and_apply_patch, format_document, AnchorDiff, DiffStrategy, MultiHunkDiff, PatchError,
};
pub use format::{FormatError, FormatOptions, Formatter};
pub use text::Text;
