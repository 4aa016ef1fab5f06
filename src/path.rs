//! Dotted field path parsing, segment access, and selective replacement.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A dot-delimited field path such as `a.b.c`, addressing a value inside a
/// hierarchical document.
///
/// Parsing records byte offsets into the retained source text instead of
/// copying each segment, and [`FieldPath::set_part`] layers owned replacement
/// strings over individual segments without disturbing the rest of the path.
/// Segments not currently replaced are always read straight out of the
/// original text.
///
/// Segment boundaries are purely structural: nothing is validated, empty
/// segments from leading, trailing, or doubled delimiters are preserved, and
/// positional markers such as `$` are ordinary segment text.
#[derive(Clone, Debug)]
pub struct FieldPath {
    /// Byte offset range of each segment in `source`, in path order.
    bounds: Vec<Range<usize>>,
    /// Sparse overlay of owned replacement strings, keyed by segment index.
    replacements: HashMap<usize, String>,
    /// The dotted path text supplied to the most recent parse.
    source: String,
}

impl FieldPath {
    /// The full dotted form: all effective segments joined with `.`.
    ///
    /// Borrows the original text whenever no segment is replaced, so the
    /// round trip `parse(s)` then `dotted_field()` reproduces `s` without
    /// allocating. A path with zero parts renders as the empty string.
    pub fn dotted_field(&self) -> Cow<'_, str> {
        return self.dotted_field_from(0);
    }

    /// The dotted form of the segments from `start_part` (inclusive) to the
    /// end. `start_part >= num_parts()` yields the empty string; this is a
    /// defined edge case, not an error.
    pub fn dotted_field_from(&self, start_part: usize) -> Cow<'_, str> {
        let Some(first) = self.bounds.get(start_part) else {
            return Cow::Borrowed("");
        };

        // A replacement at or after `start_part` forces an owned join.
        // Replacements strictly before it leave the suffix text intact.
        let suffix_replaced = self.replacements.keys().any(|&index| return index >= start_part);
        if !suffix_replaced {
            return Cow::Borrowed(&self.source[first.start..]);
        }

        let mut joined = String::new();
        for index in start_part..self.bounds.len() {
            if index > start_part {
                joined.push('.');
            }
            joined.push_str(self.get_part(index));
        }
        return Cow::Owned(joined);
    }

    /// Whether the full dotted form equals `candidate` exactly.
    ///
    /// Replacement-free paths compare against the retained source without
    /// materializing an intermediate string.
    pub fn equals_dotted_field(&self, candidate: &str) -> bool {
        return self.dotted_field() == candidate;
    }

    /// The effective value of segment `index`: its replacement if one is
    /// installed, the original text slice otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_parts()`. Use [`FieldPath::try_get_part`] for
    /// indices that come from untrusted input.
    pub fn get_part(&self, index: usize) -> &str {
        return match self.try_get_part(index) {
            Err(e) => panic!("{e}"),
            Ok(part) => part,
        };
    }

    /// Whether the path has zero segments. True only before the first parse
    /// or after parsing the empty string.
    pub fn is_empty(&self) -> bool {
        return self.bounds.is_empty();
    }

    /// Whether every segment of this path equals the corresponding segment
    /// of `other`, with this path strictly shorter.
    ///
    /// The comparison is segment-wise over effective values, never a
    /// substring test on the dotted text. Equal-length paths are never
    /// prefixes of each other, and a zero-segment path is never a prefix of
    /// anything.
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        if self.bounds.is_empty() || self.bounds.len() >= other.bounds.len() {
            return false;
        }
        return self.parts().zip(other.parts()).all(|(ours, theirs)| return ours == theirs);
    }

    /// An empty path with zero segments. Accessors behave exactly as if the
    /// empty string had been parsed.
    pub fn new() -> Self {
        return Self {
            bounds: Vec::new(),
            replacements: HashMap::new(),
            source: String::new(),
        };
    }

    /// Number of segments in the path.
    pub fn num_parts(&self) -> usize {
        return self.bounds.len();
    }

    /// Number of distinct segment indices currently carrying a replacement.
    /// Replacing the same index repeatedly counts once; a fresh parse resets
    /// the count to zero.
    pub fn num_replaced(&self) -> usize {
        return self.replacements.len();
    }

    /// Split `path` on `.` and take it as the new source text, discarding
    /// all prior segments and replacements.
    ///
    /// The empty string is the sole input producing zero segments. Any other
    /// input produces delimiter-count + 1 segments, so `"."` parses as two
    /// empty segments and `".b."` as `""`, `"b"`, `""`. Segment text is not
    /// validated.
    pub fn parse(&mut self, path: &str) {
        self.bounds.clear();
        self.replacements.clear();
        self.source.clear();
        self.source.push_str(path);

        if path.is_empty() {
            return;
        }

        let mut start = 0;
        for (dot, _) in path.match_indices('.') {
            self.bounds.push(start..dot);
            start = dot + 1;
        }
        self.bounds.push(start..path.len());
    }

    /// Iterate the effective segment values in path order.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        return (0..self.bounds.len()).map(|index| return self.get_part(index));
    }

    /// Install `value` as the replacement for segment `index`, overwriting
    /// any previous replacement there.
    ///
    /// The source text and segment boundaries are untouched, so every other
    /// segment still reads from the original path.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_parts()`. Use [`FieldPath::try_set_part`] for
    /// indices that come from untrusted input.
    pub fn set_part(&mut self, index: usize, value: &str) {
        if let Err(e) = self.try_set_part(index, value) {
            panic!("{e}");
        }
    }

    /// Checked form of [`FieldPath::get_part`].
    ///
    /// # Errors
    ///
    /// Returns `Error::PartIndexOutOfRange` if `index >= num_parts()`.
    pub fn try_get_part(&self, index: usize) -> Result<&str, Error> {
        let Some(bounds) = self.bounds.get(index) else {
            return Err(Error::PartIndexOutOfRange {
                index,
                num_parts: self.bounds.len(),
            });
        };
        return match self.replacements.get(&index) {
            None => Ok(&self.source[bounds.clone()]),
            Some(replacement) => Ok(replacement.as_str()),
        };
    }

    /// Checked form of [`FieldPath::set_part`].
    ///
    /// # Errors
    ///
    /// Returns `Error::PartIndexOutOfRange` if `index >= num_parts()`.
    pub fn try_set_part(&mut self, index: usize, value: &str) -> Result<(), Error> {
        if index >= self.bounds.len() {
            return Err(Error::PartIndexOutOfRange {
                index,
                num_parts: self.bounds.len(),
            });
        }
        self.replacements.insert(index, value.to_string());
        return Ok(());
    }
}

impl Default for FieldPath {
    /// Same as [`FieldPath::new`].
    fn default() -> Self {
        return Self::new();
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    /// Deserialize from the dotted string form by parsing it.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        return Ok(Self::from(text.as_str()));
    }
}

impl fmt::Display for FieldPath {
    /// Render the dotted form, replacements included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(&self.dotted_field());
    }
}

impl Eq for FieldPath {}

impl From<&str> for FieldPath {
    /// Construct and parse in one step.
    fn from(path: &str) -> Self {
        let mut field_path = Self::new();
        field_path.parse(path);
        return field_path;
    }
}

impl Hash for FieldPath {
    /// Stream the effective segments so equal paths hash equally no matter
    /// how their replacements are laid out.
    fn hash<H: Hasher>(&self, state: &mut H) {
        for part in self.parts() {
            part.hash(state);
        }
    }
}

impl Ord for FieldPath {
    /// Lexicographic over effective segments, consistent with `PartialEq`.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        return self.parts().cmp(other.parts());
    }
}

impl PartialEq for FieldPath {
    /// Structural equality over effective segments, the same comparison the
    /// prefix relation uses. Two paths with identical effective segments are
    /// equal even if one reads them from replacements and the other from its
    /// source text.
    fn eq(&self, other: &Self) -> bool {
        return self.bounds.len() == other.bounds.len() && self.parts().eq(other.parts());
    }
}

impl PartialOrd for FieldPath {
    /// Delegate to `Ord` implementation.
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        return Some(self.cmp(other));
    }
}

impl Serialize for FieldPath {
    /// Serialize as the dotted string form, replacements included.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        return serializer.serialize_str(&self.dotted_field());
    }
}
