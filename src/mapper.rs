// Copyright 2013-2014 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Applies the IDNA mapping table against a codepoint sequence: deviation
//! rewriting, separator normalisation, ignored removal, mapping, and the
//! STD3 relaxation — in the exact order UTS #46 §5 requires.

use crate::mapping_table::{self, Status};

/// The three "exotic full stop" codepoints normalised to U+002E.
const EXOTIC_SEPARATORS: [char; 3] = ['\u{3002}', '\u{FF0E}', '\u{FF61}'];

/// `map`'s output: the mapped codepoint sequence plus which, if any, of the
/// three disallowed-codepoint taxonomy entries (spec §7's
/// `DisallowedCodepoint`, split the way the orchestrator's `Errors` struct
/// tracks it) were seen.
#[derive(Default)]
pub struct MapResult {
    pub codepoints: Vec<char>,
    pub disallowed_character: bool,
    pub disallowed_by_std3_ascii_rules: bool,
    pub disallowed_mapped_in_std3: bool,
}

impl MapResult {
    /// Whether any disallowed-codepoint bit was set.
    pub fn disallowed(&self) -> bool {
        self.disallowed_character || self.disallowed_by_std3_ascii_rules || self.disallowed_mapped_in_std3
    }
}

/// Apply the mapper to `cps`.
///
/// Ordering is load-bearing: separator normalisation must run on the
/// already deviation-resolved sequence so that exotic full stops produced
/// by earlier steps are still honoured as label separators, and the
/// disallowed report/STD3 relaxation must run after ignored-removal and
/// mapping have settled the sequence.
pub fn map(
    cps: &[char],
    use_std3_ascii_rules: bool,
    transitional_processing: bool,
) -> MapResult {
    // Step 1: deviation rewrite (transitional only).
    let mut out: Vec<char> = Vec::with_capacity(cps.len());
    for &cp in cps {
        let entry = mapping_table::lookup(cp);
        if entry.status == Status::Deviation && transitional_processing {
            out.extend(entry.replacement.chars());
        } else {
            out.push(cp);
        }
    }

    // Step 2: separator normalisation.
    for cp in out.iter_mut() {
        if EXOTIC_SEPARATORS.contains(cp) {
            *cp = '.';
        }
    }

    // Steps 3-6: ignored removal, mapping, disallowed report, STD3 relax.
    let mut result = MapResult::default();
    result.codepoints.reserve(out.len());
    for cp in out {
        let entry = mapping_table::lookup(cp);
        match entry.status {
            Status::Valid | Status::Deviation => result.codepoints.push(cp),
            Status::Ignored => {}
            Status::Mapped => result.codepoints.extend(entry.replacement.chars()),
            Status::Disallowed => {
                result.disallowed_character = true;
                log::debug!("idna46: disallowed codepoint U+{:04X}", cp as u32);
                result.codepoints.push(cp);
            }
            Status::DisallowedStd3Valid => {
                if use_std3_ascii_rules {
                    result.disallowed_by_std3_ascii_rules = true;
                    log::debug!(
                        "idna46: disallowed-under-STD3 codepoint U+{:04X}",
                        cp as u32
                    );
                }
                result.codepoints.push(cp);
            }
            Status::DisallowedStd3Mapped => {
                if use_std3_ascii_rules {
                    result.disallowed_mapped_in_std3 = true;
                    log::debug!(
                        "idna46: disallowed-under-STD3 codepoint U+{:04X}",
                        cp as u32
                    );
                    result.codepoints.push(cp);
                } else {
                    result.codepoints.extend(entry.replacement.chars());
                }
            }
        }
    }

    result
}
