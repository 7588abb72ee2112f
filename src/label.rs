// Copyright 2013-2014 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Per-label conditional Punycode encode/decode: preserves already-ASCII
//! labels and handles the `xn--` prefix.

use crate::punycode;

const PUNYCODE_PREFIX: &str = "xn--";

/// Whether `label` case-insensitively starts with the `xn--` ACE prefix.
///
/// Checked on char boundaries rather than raw byte slicing: a label can
/// start with multi-byte UTF-8 characters, and slicing at a fixed byte
/// offset would panic if that offset fell inside one.
pub fn has_punycode_prefix(label: &str) -> bool {
    label.len() >= PUNYCODE_PREFIX.len()
        && label.is_char_boundary(PUNYCODE_PREFIX.len())
        && label[..PUNYCODE_PREFIX.len()].eq_ignore_ascii_case(PUNYCODE_PREFIX)
}

/// Encode one label to its ACE form.
///
/// `label` is already-mapped codepoints. If it is entirely ASCII it is
/// returned unchanged (it was never a candidate for Punycode); otherwise
/// it is Punycode-encoded and given the `xn--` prefix.
pub fn encode_label(label: &[char]) -> Result<String, punycode::Error> {
    if label.iter().all(|c| c.is_ascii()) {
        return Ok(label.iter().collect());
    }
    let encoded = punycode::encode(label)?;
    Ok(format!("{}{}", PUNYCODE_PREFIX, encoded))
}

/// Decode one ACE label back to Unicode.
///
/// Case-insensitive on the `xn--` prefix; the decoder lowercases the
/// payload before handing it to Punycode, since uppercase ACE digits are
/// legal input that decode to the same codepoints as their lowercase form.
/// Labels without the prefix are returned unchanged.
pub fn decode_label(label: &str) -> Result<String, punycode::Error> {
    if !has_punycode_prefix(label) {
        return Ok(label.to_string());
    }
    let rest = &label[PUNYCODE_PREFIX.len()..];
    punycode::decode_to_string(&rest.to_ascii_lowercase())
}
