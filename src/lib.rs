// Copyright 2013-2014 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! IDNA ([*Unicode IDNA Compatibility Processing*, UTS #46](http://www.unicode.org/reports/tr46/))
//! and Punycode ([RFC 3492](http://tools.ietf.org/html/rfc3492)).
//!
//! The pipeline is split one module per stage: [`mapping_table`] (C1) is
//! consulted by [`mapper`] (C2), whose output is partitioned by
//! [`splitter`] (C3), checked by [`validate`] (C4), and Punycode-encoded or
//! -decoded per label by [`label`] (C6) on top of the self-contained
//! [`punycode`] codec (C5). [`Config`] is the orchestrator (C7): it wires
//! the stages together behind `to_ascii`/`to_unicode`.
//!
//! ```
//! assert_eq!(idna46::Config::default().to_ascii("mañana.com").unwrap(), "xn--maana-pta.com");
//! ```

pub mod label;
pub mod mapper;
pub mod mapping_table;
pub mod punycode;
pub mod splitter;
pub mod validate;

use std::error::Error as StdError;
use std::fmt;

/// Encodes a codepoint sequence to bytes. Defaults to UTF-8.
pub type Encoder = fn(&[char]) -> Vec<u8>;
/// Decodes a byte string to a codepoint sequence, or reports that it isn't
/// well-formed for this encoding. Defaults to UTF-8.
pub type Decoder = fn(&[u8]) -> Option<Vec<char>>;

fn utf8_encode(cps: &[char]) -> Vec<u8> {
    cps.iter().collect::<String>().into_bytes()
}

fn utf8_decode(bytes: &[u8]) -> Option<Vec<char>> {
    std::str::from_utf8(bytes).ok().map(|s| s.chars().collect())
}

/// Options accepted by [`Config::to_ascii`]/[`Config::to_unicode`].
///
/// Mirrors the upstream `idna` crate's `Config` builder; `with_delimiter`
/// and the `encoder`/`decoder` injection points are this crate's additions
/// for the spec's configurable separator and non-UTF-8 byte conventions.
#[derive(Clone, Copy)]
pub struct Config {
    use_std3_ascii_rules: bool,
    transitional_processing: bool,
    check_hyphens: bool,
    check_bidi: bool,
    check_joiners: bool,
    delimiter: char,
    encoder: Encoder,
    decoder: Decoder,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            use_std3_ascii_rules: true,
            transitional_processing: true,
            check_hyphens: true,
            check_bidi: false,
            check_joiners: false,
            delimiter: '.',
            encoder: utf8_encode,
            decoder: utf8_decode,
        }
    }
}

impl Config {
    #[inline]
    pub fn use_std3_ascii_rules(mut self, value: bool) -> Self {
        self.use_std3_ascii_rules = value;
        self
    }

    #[inline]
    pub fn transitional_processing(mut self, value: bool) -> Self {
        self.transitional_processing = value;
        self
    }

    #[inline]
    pub fn check_hyphens(mut self, value: bool) -> Self {
        self.check_hyphens = value;
        self
    }

    /// Accepted and stored; RFC 5893 §2 Bidi conformance is not enforced by
    /// this core (spec §1 non-goal). Layer it on top if you need it.
    #[inline]
    pub fn check_bidi(mut self, value: bool) -> Self {
        self.check_bidi = value;
        self
    }

    /// Accepted and stored; ContextJ conformance is not enforced by this
    /// core (spec §1 non-goal). Layer it on top if you need it.
    #[inline]
    pub fn check_joiners(mut self, value: bool) -> Self {
        self.check_joiners = value;
        self
    }

    /// Overrides the label separator codepoint, U+002E by default.
    #[inline]
    pub fn with_delimiter(mut self, value: char) -> Self {
        self.delimiter = value;
        self
    }

    /// Overrides the codepoint sequence to byte string encoder used by
    /// `to_ascii_bytes`/`to_unicode_bytes`. Default is UTF-8.
    #[inline]
    pub fn with_encoder(mut self, value: Encoder) -> Self {
        self.encoder = value;
        self
    }

    /// Overrides the byte string to codepoint sequence decoder used by
    /// `to_ascii_bytes`/`to_unicode_bytes`. Default is UTF-8.
    #[inline]
    pub fn with_decoder(mut self, value: Decoder) -> Self {
        self.decoder = value;
        self
    }

    pub fn is_check_bidi(&self) -> bool {
        self.check_bidi
    }

    pub fn is_check_joiners(&self) -> bool {
        self.check_joiners
    }

    /// [ToASCII](http://www.unicode.org/reports/tr46/#ToASCII): map, split,
    /// validate, then Punycode-encode each non-ASCII label.
    pub fn to_ascii(self, domain: &str) -> Result<String, Errors> {
        let cps: Vec<char> = domain.chars().collect();
        self.to_ascii_cps(&cps)
    }

    fn to_ascii_cps(self, cps: &[char]) -> Result<String, Errors> {
        let map_result = mapper::map(cps, self.use_std3_ascii_rules, self.transitional_processing);
        let mut errors = Errors {
            disallowed_character: map_result.disallowed_character,
            disallowed_by_std3_ascii_rules: map_result.disallowed_by_std3_ascii_rules,
            disallowed_mapped_in_std3: map_result.disallowed_mapped_in_std3,
            ..Errors::default()
        };

        let labels = splitter::split(&map_result.codepoints, self.delimiter);

        // Validate and encode each label independently. A label already
        // wearing the `xn--` prefix is decoded up front to confirm it is
        // really valid Punycode (and to run hyphen/dot validation against
        // its Unicode content) but is passed through unencoded — encoding
        // it again would double-encode a label that is already ACE.
        let mut encoded_labels: Vec<String> = Vec::with_capacity(labels.len());
        let mut valid = true;
        for label_cps in &labels {
            let label_str: String = label_cps.iter().collect();
            if label::has_punycode_prefix(&label_str) {
                match label::decode_label(&label_str) {
                    Ok(decoded) => {
                        let decoded_cps: Vec<char> = decoded.chars().collect();
                        if !validate::validate(std::slice::from_ref(&decoded_cps), self.check_hyphens) {
                            valid = false;
                        }
                        encoded_labels.push(label_str.to_ascii_lowercase());
                    }
                    Err(_) => {
                        errors.punycode = true;
                        encoded_labels.push(label_str);
                    }
                }
            } else {
                if !validate::validate(std::slice::from_ref(label_cps), self.check_hyphens) {
                    valid = false;
                }
                match label::encode_label(label_cps) {
                    Ok(encoded) => encoded_labels.push(encoded),
                    Err(_) => {
                        errors.punycode = true;
                        encoded_labels.push(label_str);
                    }
                }
            }
        }

        if !valid {
            errors.validity_criteria = true;
        }

        if errors.is_failure() {
            Err(errors)
        } else {
            Ok(encoded_labels.join("."))
        }
    }

    /// [ToUnicode](http://www.unicode.org/reports/tr46/#ToUnicode): split,
    /// then Punycode-decode each `xn--` label. No mapping or validation is
    /// performed — decoding is lossless over well-formed ACE input.
    pub fn to_unicode(self, domain: &str) -> (String, Result<(), Errors>) {
        let cps: Vec<char> = domain.chars().collect();
        let labels = splitter::split(&cps, self.delimiter);

        let mut errors = Errors::default();
        let mut out_labels: Vec<String> = Vec::with_capacity(labels.len());
        for label_cps in &labels {
            let label_str: String = label_cps.iter().collect();
            match label::decode_label(&label_str) {
                Ok(decoded) => out_labels.push(decoded),
                Err(_) => {
                    errors.punycode = true;
                    out_labels.push(label_str);
                }
            }
        }

        let result = if errors.is_failure() { Err(errors) } else { Ok(()) };
        (out_labels.join("."), result)
    }

    /// Byte-oriented `to_ascii`, using the configured [`Decoder`]/[`Encoder`]
    /// instead of assuming UTF-8 (spec §1's "UTF-8 ... assumed to exist as
    /// injectable functions" non-goal).
    pub fn to_ascii_bytes(self, domain: &[u8]) -> Result<Vec<u8>, Errors> {
        match (self.decoder)(domain) {
            Some(cps) => self.to_ascii_cps(&cps).map(|s| (self.encoder)(&s.chars().collect::<Vec<_>>())),
            // The decoder couldn't turn the bytes into codepoints at all;
            // folded into the `punycode` bit, the same home `NotBasic`/
            // `InvalidInput` get at this boundary (spec §7).
            None => Err(Errors { punycode: true, ..Errors::default() }),
        }
    }

    /// Byte-oriented `to_unicode`, using the configured [`Decoder`]/[`Encoder`].
    pub fn to_unicode_bytes(self, domain: &[u8]) -> (Vec<u8>, Result<(), Errors>) {
        match (self.decoder)(domain) {
            Some(cps) => {
                let s: String = cps.iter().collect();
                let (out, result) = self.to_unicode(&s);
                ((self.encoder)(&out.chars().collect::<Vec<_>>()), result)
            }
            None => (Vec::new(), Err(Errors { punycode: true, ..Errors::default() })),
        }
    }
}

/// Errors recorded during UTS #46 processing.
///
/// Sticky flags rather than an early-return enum, so a caller can inspect
/// *which* validity rules failed (spec §7's taxonomy, split across these
/// bits: `Overflow`/`NotBasic`/`InvalidInput` all fold into `punycode`,
/// `ValidationFailure` is `validity_criteria`, and `DisallowedCodepoint`
/// splits into the three `disallowed_*` bits below).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Errors {
    pub punycode: bool,
    pub validity_criteria: bool,
    pub disallowed_by_std3_ascii_rules: bool,
    pub disallowed_mapped_in_std3: bool,
    pub disallowed_character: bool,
}

impl Errors {
    fn is_failure(&self) -> bool {
        self.punycode
            || self.validity_criteria
            || self.disallowed_by_std3_ascii_rules
            || self.disallowed_mapped_in_std3
            || self.disallowed_character
    }
}

impl StdError for Errors {}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// `Config::default().to_ascii(domain)`.
pub fn domain_to_ascii(domain: &str) -> Result<String, Errors> {
    Config::default().to_ascii(domain)
}

/// `to_ascii` with `use_std3_ascii_rules` and `check_hyphens` both forced on,
/// matching the upstream crate's "strict" convenience entry point.
pub fn domain_to_ascii_strict(domain: &str) -> Result<String, Errors> {
    Config::default()
        .use_std3_ascii_rules(true)
        .check_hyphens(true)
        .to_ascii(domain)
}

/// `Config::default().to_unicode(domain)`.
pub fn domain_to_unicode(domain: &str) -> (String, Result<(), Errors>) {
    Config::default().to_unicode(domain)
}
