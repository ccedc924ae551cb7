// font-diff/src/compositor.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Classifies every pixel of two rasterized units into only-A, only-B,
//! overlap, or neither.

use std::cmp;

use crate::canvas::AlphaBitmap;
use crate::color::{FONT_A_COLOR, FONT_B_COLOR, OVERLAP_COLOR};
use crate::error::CompositeError;

/// Alpha values at or below this threshold do not count as presence.
///
/// Set above the antialiasing fringe, which would otherwise register nearly
/// every pixel bordering an overlap zone as present in both inputs.
pub const ALPHA_THRESHOLD: u8 = 20;

/// Builds the classified diff of two ink-only rasterizations.
///
/// The classification is a strict partition, evaluated independently per
/// pixel: presence in both inputs renders the fixed overlap color at the
/// stronger of the two alphas; presence in exactly one renders that side's
/// role color at its own alpha; presence in neither stays fully transparent.
/// Colors are never averaged or blended.
///
/// Both inputs must share the same dimensions; otherwise the frame is
/// rejected with [`CompositeError::ShapeMismatch`].
pub fn composite(a: &AlphaBitmap, b: &AlphaBitmap) -> Result<AlphaBitmap, CompositeError> {
    if a.size != b.size {
        return Err(CompositeError::ShapeMismatch(a.size, b.size));
    }

    let mut output = AlphaBitmap::new(a.size);
    for index in 0..output.pixel_count() {
        let (alpha_a, alpha_b) = (a.alpha_at(index), b.alpha_at(index));
        let present_a = alpha_a > ALPHA_THRESHOLD;
        let present_b = alpha_b > ALPHA_THRESHOLD;
        if present_a && present_b {
            output.put_pixel(index, OVERLAP_COLOR, cmp::max(alpha_a, alpha_b));
        } else if present_a {
            output.put_pixel(index, FONT_A_COLOR, alpha_a);
        } else if present_b {
            output.put_pixel(index, FONT_B_COLOR, alpha_b);
        }
        // Neither: the output pixel is already transparent black.
    }
    Ok(output)
}
