// font-diff/src/matching.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Determines the closest registered face matching a description per the
//! CSS Fonts Level 3 specification.

use crate::config::{Style, Weight};
use crate::error::SelectionError;

/// The two axes a registered face carries for selection purposes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FaceProperties {
    /// The face style.
    pub style: Style,
    /// The face weight.
    pub weight: Weight,
}

/// This follows CSS Fonts Level 3 § 5.2 [1], restricted to the style and
/// weight axes.
///
/// https://drafts.csswg.org/css-fonts-3/#font-style-matching
pub fn find_best_match(
    candidates: &[FaceProperties],
    query: &FaceProperties,
) -> Result<usize, SelectionError> {
    // Step 4.
    let mut matching_set: Vec<usize> = (0..candidates.len()).collect();
    if matching_set.is_empty() {
        return Err(SelectionError::NotFound);
    }

    // Step 4b (`font-style`). There is no oblique axis here, so the
    // preference order collapses to two entries.
    let style_preference = match query.style {
        Style::Italic => [Style::Italic, Style::Normal],
        Style::Normal => [Style::Normal, Style::Italic],
    };
    let matching_style = *style_preference
        .iter()
        .find(|&query_style| {
            matching_set
                .iter()
                .any(|&index| candidates[index].style == *query_style)
        })
        .unwrap();
    matching_set.retain(|&index| candidates[index].style == matching_style);

    // Step 4c (`font-weight`).
    //
    // CSS Fonts Level 3 doesn't say what to do if the weight is between 400
    // and 500 exclusive, so we just use 450 as the cutoff.
    let matching_weight = if matching_set
        .iter()
        .any(|&index| candidates[index].weight == query.weight)
    {
        query.weight
    } else if query.weight >= Weight(400)
        && query.weight < Weight(450)
        && matching_set
            .iter()
            .any(|&index| candidates[index].weight == Weight(500))
    {
        // Check 500 first.
        Weight(500)
    } else if query.weight >= Weight(450)
        && query.weight <= Weight(500)
        && matching_set
            .iter()
            .any(|&index| candidates[index].weight == Weight(400))
    {
        // Check 400 first.
        Weight(400)
    } else if query.weight <= Weight(500) {
        // Closest weight, first checking thinner values and then fatter ones.
        match matching_set
            .iter()
            .filter(|&&index| candidates[index].weight <= query.weight)
            .min_by_key(|&&index| query.weight.0 - candidates[index].weight.0)
        {
            Some(&matching_index) => candidates[matching_index].weight,
            None => {
                let matching_index = *matching_set
                    .iter()
                    .min_by_key(|&&index| candidates[index].weight.0 - query.weight.0)
                    .unwrap();
                candidates[matching_index].weight
            }
        }
    } else {
        // Closest weight, first checking fatter values and then thinner ones.
        match matching_set
            .iter()
            .filter(|&&index| candidates[index].weight >= query.weight)
            .min_by_key(|&&index| candidates[index].weight.0 - query.weight.0)
        {
            Some(&matching_index) => candidates[matching_index].weight,
            None => {
                let matching_index = *matching_set
                    .iter()
                    .min_by_key(|&&index| query.weight.0 - candidates[index].weight.0)
                    .unwrap();
                candidates[matching_index].weight
            }
        }
    };
    matching_set.retain(|&index| candidates[index].weight == matching_weight);

    // Step 4d concerns `font-size`; faces are unsized here, so we ignore it.

    // Return the result.
    matching_set
        .into_iter()
        .next()
        .ok_or(SelectionError::NotFound)
}
