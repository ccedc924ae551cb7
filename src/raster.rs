// font-diff/src/raster.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rasterizes one display unit under one font configuration and colorizes
//! the result.

use log::debug;
use pathfinder_geometry::vector::Vector2F;

use crate::backend::RasterBackend;
use crate::canvas::{AlphaBitmap, BYTES_PER_PIXEL};
use crate::color::Color;
use crate::config::FontConfig;
use crate::descriptor::FontDescriptor;

/// Rasterizes display units through a backend.
pub struct GlyphRasterizer<B>
where
    B: RasterBackend,
{
    backend: B,
}

impl<B> GlyphRasterizer<B>
where
    B: RasterBackend,
{
    /// Creates a rasterizer around the given backend.
    #[inline]
    pub fn new(backend: B) -> GlyphRasterizer<B> {
        GlyphRasterizer { backend }
    }

    /// Returns a reference to the wrapped backend.
    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Renders `unit` onto a fresh square canvas of the given side length.
    ///
    /// The unit is drawn in plain black ink, centered both ways; only the
    /// alpha channel of the result carries meaning. A family the backend
    /// cannot resolve renders in the backend's fallback face, with no error.
    pub fn rasterize(&self, unit: &str, config: &FontConfig, canvas_size: u32) -> AlphaBitmap {
        let descriptor = FontDescriptor::from_config(config, canvas_size);
        debug!("rasterizing {:?} with `{}`", unit, descriptor);
        let mut canvas = AlphaBitmap::new(canvas_size);
        let center = Vector2F::new(canvas_size as f32 * 0.5, canvas_size as f32 * 0.5);
        self.backend.fill_text(&mut canvas, unit, &descriptor, center);
        canvas
    }
}

/// Rewrites the color channels of every pixel with nonzero alpha to `color`.
///
/// Alpha is preserved everywhere; fully transparent pixels are left
/// untouched. This produces the single-font colored view.
pub fn colorize(mut bitmap: AlphaBitmap, color: Color) -> AlphaBitmap {
    for pixel in bitmap.pixels.chunks_mut(BYTES_PER_PIXEL) {
        if pixel[3] > 0 {
            pixel[0] = color.r;
            pixel[1] = color.g;
            pixel[2] = color.b;
        }
    }
    bitmap
}
