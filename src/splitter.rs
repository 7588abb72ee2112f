// Copyright 2013-2014 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Splits a codepoint sequence into labels on a delimiter codepoint.
//!
//! This is the one piece of the IDNA pipeline that Punycode itself needs
//! (to know where one label ends and the next begins), so it lives at the
//! lowest layer rather than inside the mapper.

/// Partition `cps` into labels separated by `sep`.
///
/// `split(&[])` yields one empty label, and a trailing separator yields an
/// empty trailing label — both by construction of the left-to-right scan.
pub fn split(cps: &[char], sep: char) -> Vec<Vec<char>> {
    let mut labels = Vec::new();
    let mut current = Vec::new();
    for &cp in cps {
        if cp == sep {
            labels.push(std::mem::take(&mut current));
        } else {
            current.push(cp);
        }
    }
    labels.push(current);
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_one_empty_label() {
        assert_eq!(split(&[], '.'), vec![Vec::<char>::new()]);
    }

    #[test]
    fn trailing_separator_yields_empty_trailing_label() {
        let cps: Vec<char> = "a.".chars().collect();
        assert_eq!(
            split(&cps, '.'),
            vec![vec!['a'], Vec::new()]
        );
    }

    #[test]
    fn basic_split() {
        let cps: Vec<char> = "a.bc.d".chars().collect();
        assert_eq!(
            split(&cps, '.'),
            vec![vec!['a'], vec!['b', 'c'], vec!['d']]
        );
    }
}
