// font-diff/src/test.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use pathfinder_geometry::vector::Vector2F;

use crate::backend::RasterBackend;
use crate::canvas::{AlphaBitmap, BYTES_PER_PIXEL};
use crate::color::{Color, FONT_A_COLOR, FONT_B_COLOR, OVERLAP_COLOR};
use crate::compositor::{self, ALPHA_THRESHOLD};
use crate::config::{FontConfig, Style, Weight};
use crate::descriptor::{FontDescriptor, FONT_SIZE_RATIO};
use crate::error::{CompositeError, ConfigError};
use crate::family_name::FamilyName;
use crate::raster::{self, GlyphRasterizer};
use crate::tokenizer;

/// A backend that stamps a solid square, one tenth of the weight on a side,
/// centered at the requested origin. Deterministic and font-file-free.
struct StencilBackend;

impl RasterBackend for StencilBackend {
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
        let side = i64::from(descriptor.weight.0 / 10);
        let left = origin.x() as i64 - side / 2;
        let top = origin.y() as i64 - side / 2;
        for y in top..top + side {
            for x in left..left + side {
                if x >= 0 && y >= 0 && x < i64::from(canvas.size) && y < i64::from(canvas.size) {
                    canvas.add_coverage(x as u32, y as u32, 0xff);
                }
            }
        }
    }
}

fn bitmap_with_alpha(size: u32, alphas: &[(u32, u32, u8)]) -> AlphaBitmap {
    let mut bitmap = AlphaBitmap::new(size);
    for &(x, y, alpha) in alphas {
        bitmap.add_coverage(x, y, alpha);
    }
    bitmap
}

fn pixel(bitmap: &AlphaBitmap, x: u32, y: u32) -> (u8, u8, u8, u8) {
    let offset = (y as usize * bitmap.size as usize + x as usize) * BYTES_PER_PIXEL;
    (
        bitmap.pixels[offset],
        bitmap.pixels[offset + 1],
        bitmap.pixels[offset + 2],
        bitmap.pixels[offset + 3],
    )
}

#[test]
pub fn tokenize_characters() {
    assert_eq!(tokenizer::tokenize("abc"), vec!["a", "b", "c"]);
}

#[test]
pub fn tokenize_words() {
    assert_eq!(tokenizer::tokenize("the quick"), vec!["the", "quick"]);
}

#[test]
pub fn tokenize_keeps_punctuation_in_word_mode() {
    assert_eq!(tokenizer::tokenize("a, b"), vec!["a,", "b"]);
}

#[test]
pub fn tokenize_drops_empty_segments() {
    assert_eq!(tokenizer::tokenize("  fi   fl "), vec!["fi", "fl"]);
}

#[test]
pub fn tokenize_drops_whitespace_characters_in_character_mode() {
    // No space present, so character mode applies and the tab is dropped.
    assert_eq!(tokenizer::tokenize("a\tb"), vec!["a", "b"]);
}

#[test]
pub fn tokenize_empty_input() {
    assert!(tokenizer::tokenize("").is_empty());
}

#[test]
pub fn generic_family_names_parse_case_insensitively() {
    assert_eq!(FamilyName::from_name("sans-serif"), FamilyName::SansSerif);
    assert_eq!(FamilyName::from_name("Serif"), FamilyName::Serif);
    assert_eq!(FamilyName::from_name("SYSTEM-UI"), FamilyName::SystemUi);
    assert_eq!(FamilyName::from_name("ui-monospace"), FamilyName::UiMonospace);
}

#[test]
pub fn named_families_keep_their_casing() {
    assert_eq!(
        FamilyName::from_name("Fira Sans"),
        FamilyName::Title("Fira Sans".to_string())
    );
}

#[test]
pub fn generic_families_format_unquoted() {
    assert_eq!(FamilyName::Monospace.to_string(), "monospace");
    assert!(FamilyName::Monospace.is_generic());
}

#[test]
pub fn named_families_format_quoted() {
    let family = FamilyName::from_name("Fira Sans");
    assert_eq!(family.to_string(), "\"Fira Sans\"");
    assert!(!family.is_generic());
}

#[test]
pub fn descriptor_string_for_a_named_family() {
    let mut config = FontConfig::new("Inter");
    config.weight(Weight::BOLD).style(Style::Italic);
    let descriptor = FontDescriptor::from_config(&config, 120);
    assert_eq!(descriptor.to_string(), "italic 700 84px \"Inter\"");
}

#[test]
pub fn descriptor_string_for_a_generic_family() {
    let config = FontConfig::new("sans-serif");
    let descriptor = FontDescriptor::from_config(&config, 240);
    assert_eq!(descriptor.to_string(), "normal 400 168px sans-serif");
}

#[test]
pub fn descriptor_raster_size_tracks_the_canvas() {
    let config = FontConfig::new("Inter");
    for &canvas_size in &[120u32, 240] {
        let descriptor = FontDescriptor::from_config(&config, canvas_size);
        assert_eq!(descriptor.px_size, canvas_size as f32 * FONT_SIZE_RATIO);
    }
}

#[test]
pub fn validate_accepts_a_plain_configuration() {
    assert!(FontConfig::new("Inter").validate().is_ok());
}

#[test]
pub fn validate_rejects_an_empty_family() {
    assert_eq!(
        FontConfig::new("").validate(),
        Err(ConfigError::EmptyFamily)
    );
}

#[test]
pub fn validate_rejects_out_of_range_weights() {
    let mut config = FontConfig::new("Inter");
    config.weight(Weight(50));
    assert_eq!(config.validate(), Err(ConfigError::InvalidWeight(50)));
    config.weight(Weight(950));
    assert_eq!(config.validate(), Err(ConfigError::InvalidWeight(950)));
}

#[test]
pub fn validate_rejects_non_positive_sizes() {
    let mut config = FontConfig::new("Inter");
    config.size(0.0);
    assert!(config.validate().is_err());
    config.size(-12.0);
    assert!(config.validate().is_err());
    config.size(f32::NAN);
    assert!(config.validate().is_err());
}

#[test]
pub fn new_bitmaps_are_blank() {
    let bitmap = AlphaBitmap::new(16);
    assert!(bitmap.is_blank());
    assert_eq!(bitmap.stride(), 64);
    assert_eq!(bitmap.pixel_count(), 256);
}

#[test]
pub fn coverage_combines_with_max() {
    let mut bitmap = AlphaBitmap::new(4);
    bitmap.add_coverage(1, 1, 80);
    bitmap.add_coverage(1, 1, 40);
    assert_eq!(pixel(&bitmap, 1, 1), (0, 0, 0, 80));
}

#[test]
pub fn colorize_rewrites_only_inked_pixels() {
    let bitmap = bitmap_with_alpha(4, &[(0, 0, 255), (2, 1, 9)]);
    let colored = raster::colorize(bitmap, Color::new(10, 20, 30));
    assert_eq!(pixel(&colored, 0, 0), (10, 20, 30, 255));
    assert_eq!(pixel(&colored, 2, 1), (10, 20, 30, 9));
    // A transparent pixel is left entirely untouched.
    assert_eq!(pixel(&colored, 3, 3), (0, 0, 0, 0));
}

#[test]
pub fn composite_classifies_the_threshold_boundary() {
    // Alpha exactly at the threshold is absent; one above is present.
    let a = bitmap_with_alpha(2, &[(0, 0, ALPHA_THRESHOLD), (1, 0, ALPHA_THRESHOLD + 1)]);
    let b = AlphaBitmap::new(2);
    let diff = compositor::composite(&a, &b).unwrap();
    assert_eq!(pixel(&diff, 0, 0), (0, 0, 0, 0));
    assert_eq!(
        pixel(&diff, 1, 0),
        (FONT_A_COLOR.r, FONT_A_COLOR.g, FONT_A_COLOR.b, ALPHA_THRESHOLD + 1)
    );
}

#[test]
pub fn composite_renders_overlap_with_the_stronger_alpha() {
    let a = bitmap_with_alpha(2, &[(0, 0, 200)]);
    let b = bitmap_with_alpha(2, &[(0, 0, 90)]);
    let diff = compositor::composite(&a, &b).unwrap();
    assert_eq!(
        pixel(&diff, 0, 0),
        (OVERLAP_COLOR.r, OVERLAP_COLOR.g, OVERLAP_COLOR.b, 200)
    );
}

#[test]
pub fn composite_reproduces_a_solid_square_in_the_role_color() {
    // A solid opaque 10×10 square against an empty partner must come back
    // in the role color at full alpha.
    let mut a = AlphaBitmap::new(16);
    for y in 3..13 {
        for x in 3..13 {
            a.add_coverage(x, y, 255);
        }
    }
    let b = AlphaBitmap::new(16);

    let diff = compositor::composite(&a, &b).unwrap();
    for y in 3..13 {
        for x in 3..13 {
            assert_eq!(
                pixel(&diff, x, y),
                (FONT_A_COLOR.r, FONT_A_COLOR.g, FONT_A_COLOR.b, 255)
            );
        }
    }

    let swapped = compositor::composite(&b, &a).unwrap();
    assert_eq!(
        pixel(&swapped, 5, 5),
        (FONT_B_COLOR.r, FONT_B_COLOR.g, FONT_B_COLOR.b, 255)
    );

    let both = compositor::composite(&a, &a).unwrap();
    assert_eq!(
        pixel(&both, 5, 5),
        (OVERLAP_COLOR.r, OVERLAP_COLOR.g, OVERLAP_COLOR.b, 255)
    );
}

#[test]
pub fn composite_of_two_blank_bitmaps_is_blank() {
    let diff = compositor::composite(&AlphaBitmap::new(8), &AlphaBitmap::new(8)).unwrap();
    assert!(diff.is_blank());
}

#[test]
pub fn composite_is_a_strict_partition() {
    let a = bitmap_with_alpha(3, &[(0, 0, 255), (1, 0, 255), (2, 2, 5)]);
    let b = bitmap_with_alpha(3, &[(1, 0, 128), (2, 0, 128)]);
    let diff = compositor::composite(&a, &b).unwrap();
    for index in 0..diff.pixel_count() {
        let (x, y) = (index as u32 % 3, index as u32 / 3);
        let (r, g, b_, alpha) = pixel(&diff, x, y);
        let role = (r, g, b_);
        // Every pixel belongs to exactly one class.
        let classes = [
            alpha > 0 && role == (OVERLAP_COLOR.r, OVERLAP_COLOR.g, OVERLAP_COLOR.b),
            alpha > 0 && role == (FONT_A_COLOR.r, FONT_A_COLOR.g, FONT_A_COLOR.b),
            alpha > 0 && role == (FONT_B_COLOR.r, FONT_B_COLOR.g, FONT_B_COLOR.b),
            alpha == 0 && role == (0, 0, 0),
        ];
        assert_eq!(classes.iter().filter(|&&held| held).count(), 1);
    }
}

#[test]
pub fn composite_rejects_mismatched_shapes() {
    let result = compositor::composite(&AlphaBitmap::new(120), &AlphaBitmap::new(240));
    assert_eq!(result.unwrap_err(), CompositeError::ShapeMismatch(120, 240));
}

#[test]
pub fn rasterize_centers_the_stencil() {
    let rasterizer = GlyphRasterizer::new(StencilBackend);
    let mut config = FontConfig::new("Inter");
    config.weight(Weight::NORMAL);
    let bitmap = rasterizer.rasterize("a", &config, 120);
    // A 40px square centered on a 120px canvas spans columns 40..80.
    assert_eq!(pixel(&bitmap, 60, 60).3, 0xff);
    assert_eq!(pixel(&bitmap, 40, 60).3, 0xff);
    assert_eq!(pixel(&bitmap, 39, 60).3, 0);
    assert_eq!(pixel(&bitmap, 79, 60).3, 0xff);
    assert_eq!(pixel(&bitmap, 80, 60).3, 0);
}

#[test]
pub fn rasterize_is_deterministic() {
    let rasterizer = GlyphRasterizer::new(StencilBackend);
    let config = FontConfig::new("Inter");
    let first = rasterizer.rasterize("a", &config, 120);
    let second = rasterizer.rasterize("a", &config, 120);
    assert_eq!(first, second);
}

#[test]
pub fn rasterize_of_an_empty_unit_is_blank() {
    let rasterizer = GlyphRasterizer::new(StencilBackend);
    let config = FontConfig::new("Inter");
    assert!(rasterizer.rasterize("", &config, 120).is_blank());
}
