// font-diff/src/tokenizer.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Splits raw comparison input into the ordered display units to render.

/// One character or word selected for side-by-side comparison.
pub type DisplayUnit = String;

/// Splits `raw_input` into display units.
///
/// If the input contains at least one space, it is split on spaces with
/// empty segments dropped (word mode, which keeps ligature-prone sequences
/// like "fi" and whole words together). Otherwise it is split into
/// individual characters with whitespace characters dropped (character
/// mode). Punctuation is never stripped: `"a, b"` tokenizes to `"a,"` and
/// `"b"`.
///
/// The split is `char`-based. This is a heuristic, not grapheme-cluster
/// segmentation; combining sequences may come apart in character mode.
pub fn tokenize(raw_input: &str) -> Vec<DisplayUnit> {
    if raw_input.contains(' ') {
        raw_input
            .split(' ')
            .filter(|unit| !unit.is_empty())
            .map(str::to_owned)
            .collect()
    } else {
        raw_input
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| ch.to_string())
            .collect()
    }
}
