/// Crate-level error type for checked field path access.
///
/// Out-of-range indexing is a caller bug, so the unprefixed accessors panic
/// with this error's message. The `try_` forms return it instead for callers
/// that take the index from untrusted input.
#[allow(clippy::error_impl_error, reason = "conventional crate-level error name")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A segment index at or beyond the parsed part count.
    #[error("part index {index} out of range for field path with {num_parts} part(s)")]
    PartIndexOutOfRange {
        /// The offending segment index.
        index: usize,
        /// Number of parts in the path at the time of access.
        num_parts: usize,
    },
}
