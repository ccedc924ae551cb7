// font-diff/src/descriptor.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The font specification handed to a rasterization backend.

use std::fmt::{self, Display, Formatter};

use crate::config::{FontConfig, Style, Weight};
use crate::family_name::FamilyName;

/// The fraction of the canvas side used as the raster font size.
///
/// Chosen so glyphs fill most of the square without clipping ascenders or
/// descenders.
pub const FONT_SIZE_RATIO: f32 = 0.7;

/// Everything a backend needs to resolve and size a face for one
/// rasterization: style token, weight, raster font size, and family.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescriptor {
    /// The face style.
    pub style: Style,
    /// The face weight.
    pub weight: Weight,
    /// The raster font size, in pixels. Derived from the canvas side, not
    /// from the configuration's display size.
    pub px_size: f32,
    /// The family to resolve.
    pub family: FamilyName,
}

impl FontDescriptor {
    /// Builds the descriptor for rendering `config` on a square canvas of
    /// the given side length.
    ///
    /// The raster size is `canvas_size × FONT_SIZE_RATIO`, so the same
    /// configuration scales proportionally with the canvas.
    pub fn from_config(config: &FontConfig, canvas_size: u32) -> FontDescriptor {
        FontDescriptor {
            style: config.style,
            weight: config.weight,
            px_size: canvas_size as f32 * FONT_SIZE_RATIO,
            family: FamilyName::from_name(&config.family),
        }
    }
}

impl Display for FontDescriptor {
    /// The canonical string form understood by string-driven backends, e.g.
    /// `italic 700 84px "Fira Sans"`.
    ///
    /// Generic families appear unquoted, every other family quoted; see
    /// [`FamilyName`]'s `Display` implementation.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {}px {}",
            self.style, self.weight, self.px_size, self.family
        )
    }
}
