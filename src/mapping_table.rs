// Copyright 2013-2014 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The IDNA mapping table: a total function from a codepoint to its
//! [Unicode IDNA Mapping Table](http://www.unicode.org/reports/tr46/#IDNA_Mapping_Table)
//! status and (where relevant) replacement sequence.
//!
//! The upstream `idna` crate generates this file from the real Unicode data
//! release at build time (`build.rs`, downloaded and vendored). That
//! generated table runs to several thousand entries; this crate instead
//! hand-authors the structurally significant ranges (ASCII, the four
//! deviation code points, the common ignorable/disallowed blocks) in the
//! same sorted-range-table shape, and falls back to a computed
//! classification — general Unicode case folding, combining marks, and a
//! handful of disallowed categories (controls, noncharacters, private-use
//! areas) — for everything else. `lookup` stays
//! total and O(log n); swapping in a fully generated table is a drop-in
//! replacement of this one file. See DESIGN.md for the rationale.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;

/// One codepoint's classification under UTS #46 §5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Valid,
    Ignored,
    Mapped,
    Deviation,
    Disallowed,
    DisallowedStd3Valid,
    DisallowedStd3Mapped,
}

/// The result of looking up one codepoint: its status, and (for `Mapped`,
/// `Deviation`, `DisallowedStd3Mapped`) the codepoint sequence that should
/// replace it.
#[derive(Debug, Clone)]
pub struct MappingEntry {
    pub status: Status,
    pub replacement: String,
}

impl MappingEntry {
    fn new(status: Status) -> Self {
        MappingEntry {
            status,
            replacement: String::new(),
        }
    }

    fn with_replacement(status: Status, replacement: &str) -> Self {
        MappingEntry {
            status,
            replacement: replacement.to_string(),
        }
    }
}

#[derive(Debug)]
struct ExplicitRange {
    from: char,
    to: char,
    status: Status,
    replacement: Option<&'static str>,
}

macro_rules! range {
    ($from:expr, $to:expr, $status:ident) => {
        ExplicitRange {
            from: $from,
            to: $to,
            status: Status::$status,
            replacement: None,
        }
    };
    ($from:expr, $to:expr, $status:ident, $replacement:expr) => {
        ExplicitRange {
            from: $from,
            to: $to,
            status: Status::$status,
            replacement: Some($replacement),
        }
    };
}

// Sorted by `from`. Kept deliberately small — see module docs.
static EXPLICIT_RANGES: &[ExplicitRange] = &[
    // C0 controls and space: space is allowed only under relaxed STD3 rules,
    // the rest are unconditionally disallowed.
    range!('\u{0}', '\u{1F}', Disallowed),
    range!('\u{20}', '\u{20}', DisallowedStd3Valid),
    // '!' .. '-' (ASCII punctuation before digits), '-' itself is LDH/valid.
    range!('\u{21}', '\u{2C}', DisallowedStd3Valid),
    range!('\u{2D}', '\u{2D}', Valid), // '-'
    range!('\u{2E}', '\u{2E}', Valid), // '.' (the default label separator)
    range!('\u{2F}', '\u{2F}', DisallowedStd3Valid),
    range!('\u{30}', '\u{39}', Valid), // '0'..'9'
    range!('\u{3A}', '\u{40}', DisallowedStd3Valid),
    // 'A'..'Z' (0x41..0x5A) is left out deliberately: it falls through to
    // the general case-folding fallback below, which produces the correct
    // lowercase replacement.
    range!('\u{5B}', '\u{60}', DisallowedStd3Valid),
    range!('\u{61}', '\u{7A}', Valid), // 'a'..'z'
    range!('\u{7B}', '\u{7E}', DisallowedStd3Valid),
    range!('\u{7F}', '\u{9F}', Disallowed), // DEL + C1 controls
    range!('\u{A0}', '\u{A0}', DisallowedStd3Mapped, " "), // NBSP
    range!('\u{AD}', '\u{AD}', Ignored),    // SOFT HYPHEN
    range!('\u{DF}', '\u{DF}', Deviation, "ss"), // LATIN SMALL LETTER SHARP S
    range!('\u{3C2}', '\u{3C2}', Deviation, "\u{3C3}"), // GREEK FINAL SIGMA -> SIGMA
    range!('\u{200B}', '\u{200B}', Ignored), // ZERO WIDTH SPACE
    range!('\u{200C}', '\u{200C}', Deviation, ""), // ZWNJ
    range!('\u{200D}', '\u{200D}', Deviation, ""), // ZWJ
    range!('\u{200E}', '\u{200F}', Disallowed), // LRM, RLM
    range!('\u{2028}', '\u{2029}', Disallowed), // LINE/PARAGRAPH SEPARATOR
    range!('\u{2060}', '\u{2064}', Disallowed), // invisible operators block
    range!('\u{E000}', '\u{F8FF}', Disallowed), // BMP Private Use Area
    range!('\u{FDD0}', '\u{FDEF}', Disallowed), // noncharacters
    range!('\u{FEFF}', '\u{FEFF}', Ignored),    // BOM / ZERO WIDTH NO-BREAK SPACE
    range!('\u{F0000}', '\u{FFFFD}', Disallowed), // supplementary private use area A
    range!('\u{100000}', '\u{10FFFD}', Disallowed), // supplementary private use area B
];


fn find_explicit(cp: char) -> Option<&'static ExplicitRange> {
    // `EXPLICIT_RANGES` is a small const table; binary_search_by keeps
    // lookup O(log n) the same way the generated table does.
    let idx = EXPLICIT_RANGES
        .binary_search_by(|r| {
            if cp < r.from {
                Ordering::Greater
            } else if cp > r.to {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        })
        .ok()?;
    Some(&EXPLICIT_RANGES[idx])
}

/// Per-plane noncharacters `U+xFFFE`/`U+xFFFF`, not worth a 17-entry table.
fn is_noncharacter(cp: char) -> bool {
    let low = cp as u32 & 0xFFFF;
    low == 0xFFFE || low == 0xFFFF
}

/// Total lookup: every codepoint in `[0, 0x10FFFF]` classifies to exactly
/// one [`MappingEntry`].
pub fn lookup(cp: char) -> MappingEntry {
    if let Some(r) = find_explicit(cp) {
        return match r.replacement {
            Some(rep) => MappingEntry::with_replacement(r.status, rep),
            None => MappingEntry::new(r.status),
        };
    }

    if is_noncharacter(cp) {
        return MappingEntry::new(Status::Disallowed);
    }

    // General Unicode case folding covers the bulk of the real table's
    // `mapped` entries outside the hand-authored ranges above.
    let mut lower = cp.to_lowercase();
    if lower.clone().ne(std::iter::once(cp)) {
        let replacement: String = lower.by_ref().collect();
        return MappingEntry::with_replacement(Status::Mapped, &replacement);
    }

    // Combining marks (used heavily by Indic and other scripts) and every
    // other remaining codepoint default to `valid`.
    MappingEntry::new(Status::Valid)
}

/// Whether `cp` is a combining mark. Consulted by [`crate::validate`]'s
/// combining-mark-at-start check (V5), which logs but does not reject —
/// enforcement is out of scope per the core's non-goals.
pub fn is_combining(cp: char) -> bool {
    is_combining_mark(cp)
}
