//! UTF-16 text snapshots and surrogate-boundary utilities.
//!
//! The host document model addresses content in UTF-16 code units, so every
//! offset in this crate is a code-unit offset. A `Text` holds one immutable
//! snapshot in that representation and knows how to slice it back into
//! `String`s. The free functions here are shared by both diff strategies to
//! keep edit boundaries off the middle of a surrogate pair.

/// Whether `unit` is the leading half of a surrogate pair.
pub fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

/// Whether `unit` is the trailing half of a surrogate pair.
pub fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Decode a code-unit slice back into a `String`.
///
/// Unpaired surrogates become U+FFFD. They cannot be produced by this
/// crate's own diffs (boundaries always land on code-point boundaries),
/// so the replacement only ever surfaces for malformed external input.
pub fn units_to_string(units: &[u16]) -> String {
    char::decode_utf16(units.iter().copied())
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Longest common prefix and suffix lengths of `a` and `b`, in code units,
/// adjusted so both boundaries land on code-point boundaries in either
/// sequence. The suffix is measured over the tails remaining after the
/// prefix, so the two never overlap.
pub fn common_affixes(a: &[u16], b: &[u16]) -> (usize, usize) {
    let min_len = a.len().min(b.len());
    let mut prefix = 0;
    while prefix < min_len && a[prefix] == b[prefix] {
        prefix += 1;
    }
    // Never leave the boundary between a high surrogate and its low half.
    while prefix > 0 && is_high_surrogate(a[prefix - 1]) {
        prefix -= 1;
    }

    let a_tail = &a[prefix..];
    let b_tail = &b[prefix..];
    let tail_min = a_tail.len().min(b_tail.len());
    let mut suffix = 0;
    while suffix < tail_min
        && a_tail[a_tail.len() - 1 - suffix] == b_tail[b_tail.len() - 1 - suffix]
    {
        suffix += 1;
    }
    while suffix > 0
        && (is_low_surrogate(a[a.len() - suffix]) || is_low_surrogate(b[b.len() - suffix]))
    {
        suffix -= 1;
    }

    (prefix, suffix)
}

/// Immutable snapshot of document content as a UTF-16 code-unit sequence.
///
/// Built from `&str`, so lone surrogates cannot enter through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    units: Vec<u16>,
}

impl Text {
    pub fn new(s: &str) -> Self {
        Self {
            units: s.encode_utf16().collect(),
        }
    }

    /// Length in code units (not code points).
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> &[u16] {
        self.units.as_slice()
    }

    /// Decode the code-unit range `[from, to)` into a `String`.
    pub fn slice(&self, from: usize, to: usize) -> String {
        units_to_string(&self.units[from..to])
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::new(s)
    }
}

impl std::fmt::Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&units_to_string(&self.units))
    }
}
