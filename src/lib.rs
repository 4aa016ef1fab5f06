//! Dot-delimited field paths for addressing values inside hierarchical
//! documents.
//!
//! A [`FieldPath`] splits `a.b.c` into segments once, keeps byte offsets
//! into the original text instead of copying each segment, and layers
//! per-segment replacements on top without rewriting the rest of the path:
//!
//! ```
//! use fieldpath::FieldPath;
//!
//! let mut path = FieldPath::from("user.emails.$.verified");
//! assert_eq!(path.num_parts(), 4);
//!
//! path.set_part(2, "0");
//! assert_eq!(path.dotted_field(), "user.emails.0.verified");
//! assert!(FieldPath::from("user.emails").is_prefix_of(&path));
//! ```
//!
//! Segment boundaries are purely structural. Empty segments from leading,
//! trailing, or doubled delimiters are preserved verbatim, and positional
//! markers such as `$` are ordinary segment text with no special meaning.
//! What a path addresses inside a document is the caller's business.

mod error;
mod path;

pub use crate::error::Error;
pub use crate::path::FieldPath;
