// font-diff/src/backends/fontdue.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A rasterization backend over faces parsed by `fontdue`.

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use fontdue::Font;
use log::warn;
use pathfinder_geometry::vector::Vector2F;
use std::collections::HashMap;

use crate::backend::RasterBackend;
use crate::canvas::AlphaBitmap;
use crate::config::{Style, Weight};
use crate::descriptor::FontDescriptor;
use crate::matching::{self, FaceProperties};

/// A registered face: parsed font data plus the axes used for selection.
struct Face {
    properties: FaceProperties,
    font: Font,
}

/// A rasterization backend over faces parsed by `fontdue`.
///
/// The face registry is the readiness seam: registering a face under a
/// family name is the moment that family becomes resolvable. Rendering an
/// unregistered family is not an error; the fallback face is substituted
/// silently, so callers must register every family they intend to compare
/// before asking for pixels.
pub struct FontdueBackend {
    families: HashMap<String, Vec<Face>>,
    fallback: Font,
}

impl FontdueBackend {
    /// Creates a backend whose unresolvable families render in `fallback`.
    pub fn new(fallback: Font) -> FontdueBackend {
        FontdueBackend {
            families: HashMap::new(),
            fallback,
        }
    }

    /// Registers a face for `family`.
    ///
    /// Families are keyed ASCII case-insensitively, matching how font-spec
    /// parsers treat family identifiers. Generic keywords (e.g.
    /// "sans-serif") may be registered directly under their own token.
    /// Registering several faces under one family enables style and weight
    /// selection among them.
    pub fn register(&mut self, family: &str, style: Style, weight: Weight, font: Font) {
        self.families
            .entry(family.to_ascii_lowercase())
            .or_insert_with(Vec::new)
            .push(Face {
                properties: FaceProperties { style, weight },
                font,
            });
    }

    /// Returns true if at least one face is registered for `family`.
    pub fn is_registered(&self, family: &str) -> bool {
        self.families.contains_key(&family.to_ascii_lowercase())
    }

    fn resolve(&self, descriptor: &FontDescriptor) -> &Font {
        let query = FaceProperties {
            style: descriptor.style,
            weight: descriptor.weight,
        };
        match self.families.get(&descriptor.family.token().to_ascii_lowercase()) {
            Some(faces) => {
                let candidates: Vec<FaceProperties> =
                    faces.iter().map(|face| face.properties).collect();
                match matching::find_best_match(&candidates, &query) {
                    Ok(index) => &faces[index].font,
                    Err(_) => &self.fallback,
                }
            }
            None => {
                warn!(
                    "no face registered for family {}; substituting the fallback face",
                    descriptor.family
                );
                &self.fallback
            }
        }
    }
}

impl RasterBackend for FontdueBackend {
    fn fill_text(
        &self,
        canvas: &mut AlphaBitmap,
        text: &str,
        descriptor: &FontDescriptor,
        origin: Vector2F,
    ) {
        if text.is_empty() {
            return;
        }

        let font = self.resolve(descriptor);
        let px = descriptor.px_size;

        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, px, 0));

        // Ink extent of the run, for horizontal centering.
        let mut min_x = f32::MAX;
        let mut max_x = f32::MIN;
        for glyph in layout.glyphs() {
            if glyph.width == 0 {
                continue;
            }
            min_x = min_x.min(glyph.x);
            max_x = max_x.max(glyph.x + glyph.width as f32);
        }
        if min_x > max_x {
            // Whitespace-only input; nothing to draw.
            return;
        }

        // Middle-anchor the line box. The layout puts the line top at y = 0,
        // so shifting by half the ascent-to-descent span centers it.
        let (ascent, descent) = match font.horizontal_line_metrics(px) {
            Some(metrics) => (metrics.ascent, metrics.descent),
            None => (px * 0.8, px * -0.2),
        };
        let offset_x = origin.x() - (min_x + max_x) * 0.5;
        let offset_y = origin.y() - (ascent - descent) * 0.5;

        for glyph in layout.glyphs() {
            if glyph.width == 0 || glyph.height == 0 {
                continue;
            }
            let (metrics, coverage) = font.rasterize_indexed(glyph.key.glyph_index, glyph.key.px);
            let left = (glyph.x + offset_x).round() as i64;
            let top = (glyph.y + offset_y).round() as i64;
            blit_coverage(canvas, &coverage, metrics.width, metrics.height, left, top);
        }
    }
}

/// Max-combines a glyph coverage mask into the canvas alpha channel at
/// `(left, top)`, clipping to the canvas bounds. The ink stays black.
fn blit_coverage(
    canvas: &mut AlphaBitmap,
    coverage: &[u8],
    width: usize,
    height: usize,
    left: i64,
    top: i64,
) {
    let size = canvas.size as i64;
    for row in 0..height as i64 {
        let y = top + row;
        if y < 0 || y >= size {
            continue;
        }
        for column in 0..width as i64 {
            let x = left + column;
            if x < 0 || x >= size {
                continue;
            }
            let value = coverage[(row * width as i64 + column) as usize];
            if value > 0 {
                canvas.add_coverage(x as u32, y as u32, value);
            }
        }
    }
}
