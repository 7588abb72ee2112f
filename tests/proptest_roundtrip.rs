//! Property-based round-trip tests, in the style of `sancane-precis`'s
//! `proptest_stringclass.rs`: generate inputs, assert invariants that must
//! hold for *every* generated value rather than a fixed example table.

use idna46::punycode;
use proptest::prelude::*;

/// ASCII labels: letters and digits only, never starting with the `xn--`
/// reserved prefix and never uppercase, matching Testable Property 1's
/// precondition.
fn ascii_label() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,30}"
}

#[cfg(test)]
mod punycode_properties {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig { cases: 2000, .. ProptestConfig::default() })]

        /// Property 1 (Round-trip, ASCII-closed): an all-ASCII label that
        /// would never be wrapped in `xn--` round-trips unchanged through
        /// `Config::encode_label`/`decode_label` at the crate-level entry
        /// points, since ASCII labels pass through both untouched.
        #[test]
        fn ascii_label_encode_decode_round_trips(label in ascii_label()) {
            let cps: Vec<char> = label.chars().collect();
            let encoded = idna46::label::encode_label(&cps).unwrap();
            prop_assert_eq!(&encoded, &label);
            let decoded = idna46::label::decode_label(&encoded).unwrap();
            prop_assert_eq!(decoded, label);
        }

        /// Property 2 (Round-trip, Unicode): any codepoint sequence that
        /// Punycode can encode decodes back to exactly the same sequence.
        /// This holds for every scalar value, not just a hand-picked
        /// sample, which is what makes it worth stating as a property
        /// rather than an example.
        #[test]
        fn punycode_round_trips_arbitrary_scalar_values(
            cps in proptest::collection::vec(proptest::char::any(), 0..40)
        ) {
            match punycode::encode(&cps) {
                Ok(encoded) => {
                    let decoded = punycode::decode(&encoded).unwrap();
                    prop_assert_eq!(decoded, cps);
                }
                Err(_) => {
                    // Overflow on adversarially long/high-codepoint input is
                    // an acceptable outcome; a wrong answer is not (Property 7).
                }
            }
        }

        /// Decoding is case-insensitive on the basic-digit alphabet: the
        /// same Punycode payload decodes identically regardless of case.
        #[test]
        fn decode_is_case_insensitive(cps in proptest::collection::vec(
            proptest::char::range('\u{80}', '\u{2FFFF}'), 1..15
        )) {
            if let Ok(encoded) = punycode::encode(&cps) {
                let upper = encoded.to_ascii_uppercase();
                let from_lower = punycode::decode(&encoded).unwrap();
                let from_upper = punycode::decode(&upper).unwrap();
                prop_assert_eq!(from_lower, from_upper);
            }
        }
    }
}

#[cfg(test)]
mod overflow_properties {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig { cases: 20, .. ProptestConfig::default() })]

        /// Property 7 (Overflow detection): Punycode never silently
        /// produces a result for input whose bounded state would exceed
        /// `maxInt`; it must fail, not wrap or truncate. A repeated single
        /// codepoint never exercises this path (every element matches `n`
        /// on the very first pass, so `handledCPCount` never grows before
        /// a jump), so this generates a run of `prefix_len` distinct,
        /// closely-spaced codepoints - cheap to process one at a time -
        /// followed by one codepoint out at U+10FFFF, the shape that
        /// actually drives `handledCPCount` up before the expensive jump.
        #[test]
        fn overflow_never_yields_a_silently_wrong_answer(
            prefix_len in 1500u32..2200,
        ) {
            let mut cps: Vec<char> = (1..=prefix_len).map(|i| char::from_u32(0x80 + i).unwrap()).collect();
            cps.push('\u{10FFFF}');
            let result = punycode::encode(&cps);
            if let Ok(encoded) = result {
                // If encoding somehow succeeds it must still decode back to
                // exactly the same input - no silent corruption either way.
                let decoded = punycode::decode(&encoded).unwrap();
                prop_assert_eq!(decoded, cps);
            }
        }
    }
}

#[cfg(test)]
mod idna_properties {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig { cases: 500, .. ProptestConfig::default() })]

        /// Splitting a domain on its delimiter and rejoining with the same
        /// separator is the identity for any ASCII label sequence, which
        /// pins down the splitter/joiner contract `to_ascii`/`to_unicode`
        /// both rely on.
        #[test]
        fn split_join_round_trips_ascii_domains(
            labels in proptest::collection::vec(ascii_label(), 1..5)
        ) {
            let domain = labels.join(".");
            let ascii = idna46::domain_to_ascii(&domain).unwrap();
            prop_assert_eq!(ascii, domain);
        }

        /// `to_ascii` is idempotent on domains that are already valid ACE:
        /// re-running it on its own output changes nothing.
        #[test]
        fn to_ascii_is_idempotent_on_its_own_output(
            labels in proptest::collection::vec(ascii_label(), 1..4)
        ) {
            let domain = labels.join(".");
            let once = idna46::domain_to_ascii(&domain).unwrap();
            let twice = idna46::domain_to_ascii(&once).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
