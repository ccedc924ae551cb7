// font-diff/src/frame.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Orchestrates one comparison row: two colorized views plus the classified
//! diff.

use log::debug;

use crate::backend::RasterBackend;
use crate::canvas::AlphaBitmap;
use crate::color::{FONT_A_COLOR, FONT_B_COLOR};
use crate::compositor;
use crate::config::FontConfig;
use crate::error::RenderError;
use crate::raster::{self, GlyphRasterizer};
use crate::tokenizer::DisplayUnit;

/// The side length of a thumbnail raster square, in pixels.
pub const CANVAS_SIZE: u32 = 120;

/// The multiplier applied to [`CANVAS_SIZE`] for the enlarged single-unit
/// view.
pub const ENLARGEMENT_FACTOR: u32 = 2;

/// The output scale of a comparison frame.
///
/// The scale is a pure parameter: both presets run the identical pipeline,
/// only the canvas side (and with it the raster font size) changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderScale {
    /// The fixed table-row thumbnail size.
    Thumbnail,
    /// The enlarged single-unit view.
    Enlarged,
}

impl RenderScale {
    /// The canvas side length this scale renders at.
    #[inline]
    pub fn canvas_size(self) -> u32 {
        match self {
            RenderScale::Thumbnail => CANVAS_SIZE,
            RenderScale::Enlarged => CANVAS_SIZE * ENLARGEMENT_FACTOR,
        }
    }
}

/// The three bitmaps produced for one display unit, tagged with the scale
/// they were rendered at.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonSet {
    /// The unit under font A, colorized with the font A role color.
    pub bitmap_a: AlphaBitmap,
    /// The classified diff of the two raw rasterizations.
    pub bitmap_diff: AlphaBitmap,
    /// The unit under font B, colorized with the font B role color.
    pub bitmap_b: AlphaBitmap,
    /// The scale the set was rendered at.
    pub scale: RenderScale,
}

/// Renders comparison rows: rasterize and colorize each side, then
/// composite the raw ink buffers.
pub struct ComparisonFrame<B>
where
    B: RasterBackend,
{
    rasterizer: GlyphRasterizer<B>,
}

impl<B> ComparisonFrame<B>
where
    B: RasterBackend,
{
    /// Creates a comparison renderer around the given backend.
    #[inline]
    pub fn new(backend: B) -> ComparisonFrame<B> {
        ComparisonFrame {
            rasterizer: GlyphRasterizer::new(backend),
        }
    }

    /// Returns a reference to the underlying rasterizer.
    #[inline]
    pub fn rasterizer(&self) -> &GlyphRasterizer<B> {
        &self.rasterizer
    }

    /// Renders one display unit under both configurations at the requested
    /// scale.
    ///
    /// Every invocation allocates fresh bitmaps and holds no state between
    /// calls; identical inputs against a stable backend yield byte-identical
    /// output. A unit that rasterizes to nothing under both fonts is valid
    /// and produces a fully transparent triple.
    pub fn render(
        &self,
        unit: &str,
        font_a: &FontConfig,
        font_b: &FontConfig,
        scale: RenderScale,
    ) -> Result<ComparisonSet, RenderError> {
        font_a.validate()?;
        font_b.validate()?;

        let canvas_size = scale.canvas_size();
        debug!("rendering {:?} on a {}px square", unit, canvas_size);

        let bitmap_a = raster::colorize(
            self.rasterizer.rasterize(unit, font_a, canvas_size),
            FONT_A_COLOR,
        );
        let bitmap_b = raster::colorize(
            self.rasterizer.rasterize(unit, font_b, canvas_size),
            FONT_B_COLOR,
        );

        // Ink-only rasterizations for classification; the colorized views
        // are never composited.
        let ink_a = self.rasterizer.rasterize(unit, font_a, canvas_size);
        let ink_b = self.rasterizer.rasterize(unit, font_b, canvas_size);
        let bitmap_diff = compositor::composite(&ink_a, &ink_b)?;

        Ok(ComparisonSet {
            bitmap_a,
            bitmap_diff,
            bitmap_b,
            scale,
        })
    }

    /// Renders a sequence of display units, yielding one result per unit in
    /// order.
    ///
    /// Units are rendered sequentially; a unit that fails carries its own
    /// error and neither blocks nor corrupts the remaining units.
    pub fn render_batch(
        &self,
        units: &[DisplayUnit],
        font_a: &FontConfig,
        font_b: &FontConfig,
        scale: RenderScale,
    ) -> Vec<Result<ComparisonSet, RenderError>> {
        units
            .iter()
            .map(|unit| self.render(unit, font_a, font_b, scale))
            .collect()
    }
}
