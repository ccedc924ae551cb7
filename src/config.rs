// font-diff/src/config.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Caller-supplied font configuration: family, weight, size, and style.
//!
//! Weight and style follow their definitions in the CSS 3 Fonts
//! specification: https://drafts.csswg.org/css-fonts-3/

use std::fmt::{self, Display, Formatter};

use crate::error::ConfigError;

/// The display size a fresh configuration starts with, in points.
pub const DEFAULT_DISPLAY_SIZE: f32 = 48.0;

/// A complete font configuration for one side of a comparison.
///
/// Configurations are owned by the caller and passed by reference into the
/// engine; a render call never retains or mutates one. This object supports
/// a method chaining style for idiomatic initialization; e.g.
///
///     # use font_diff::config::{FontConfig, Weight};
///     let mut config = FontConfig::new("Inter");
///     config.weight(Weight::BOLD);
#[derive(Clone, Debug, PartialEq)]
pub struct FontConfig {
    /// The family name, as resolvable by the rasterization backend.
    pub family: String,
    /// The font weight, as defined in CSS.
    pub weight: Weight,
    /// The display size, in points.
    ///
    /// The raster core derives its own font size from the canvas side and
    /// ignores this value.
    pub size: f32,
    /// The font style.
    pub style: Style,
    /// Additional inter-glyph spacing, in points. Display-only; not used by
    /// the raster core.
    pub letter_spacing: f32,
}

impl FontConfig {
    /// Initializes a configuration for the given family with normal weight
    /// and style, the default display size, and no extra letter spacing.
    pub fn new<S>(family: S) -> FontConfig
    where
        S: Into<String>,
    {
        FontConfig {
            family: family.into(),
            weight: Weight::default(),
            size: DEFAULT_DISPLAY_SIZE,
            style: Style::default(),
            letter_spacing: 0.0,
        }
    }

    /// Sets the weight and returns this configuration for method chaining.
    #[inline]
    pub fn weight(&mut self, weight: Weight) -> &mut FontConfig {
        self.weight = weight;
        self
    }

    /// Sets the display size and returns this configuration for method
    /// chaining.
    #[inline]
    pub fn size(&mut self, size: f32) -> &mut FontConfig {
        self.size = size;
        self
    }

    /// Sets the style and returns this configuration for method chaining.
    #[inline]
    pub fn style(&mut self, style: Style) -> &mut FontConfig {
        self.style = style;
        self
    }

    /// Sets the letter spacing and returns this configuration for method
    /// chaining.
    #[inline]
    pub fn letter_spacing(&mut self, letter_spacing: f32) -> &mut FontConfig {
        self.letter_spacing = letter_spacing;
        self
    }

    /// Checks the boundary constraints: a non-empty family, a weight in the
    /// 100–900 range, and a positive finite size.
    ///
    /// This is the only validation the engine performs; whether the family
    /// is actually resolvable is the backend's concern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.family.is_empty() {
            return Err(ConfigError::EmptyFamily);
        }
        if self.weight.0 < Weight::THIN.0 || self.weight.0 > Weight::BLACK.0 {
            return Err(ConfigError::InvalidWeight(self.weight.0));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ConfigError::InvalidSize(self.size));
        }
        Ok(())
    }
}

/// Allows italic faces to be selected.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Style {
    /// A face that is neither italic nor obliqued.
    Normal,
    /// A form that is generally cursive in nature.
    Italic,
}

impl Default for Style {
    #[inline]
    fn default() -> Style {
        Style::Normal
    }
}

impl Display for Style {
    /// Formats as the style token of a backend font specification:
    /// `normal` or `italic`.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Style::Normal => f.write_str("normal"),
            Style::Italic => f.write_str("italic"),
        }
    }
}

/// The degree of blackness or stroke thickness of a font. This value ranges
/// from 100 to 900, with 400 as normal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(pub u16);

impl Default for Weight {
    #[inline]
    fn default() -> Weight {
        Weight::NORMAL
    }
}

impl Weight {
    /// Thin weight (100), the thinnest value.
    pub const THIN: Weight = Weight(100);
    /// Extra light weight (200).
    pub const EXTRA_LIGHT: Weight = Weight(200);
    /// Light weight (300).
    pub const LIGHT: Weight = Weight(300);
    /// Normal (400).
    pub const NORMAL: Weight = Weight(400);
    /// Medium weight (500, higher than normal).
    pub const MEDIUM: Weight = Weight(500);
    /// Semibold weight (600).
    pub const SEMIBOLD: Weight = Weight(600);
    /// Bold weight (700).
    pub const BOLD: Weight = Weight(700);
    /// Extra-bold weight (800).
    pub const EXTRA_BOLD: Weight = Weight(800);
    /// Black weight (900), the thickest value.
    pub const BLACK: Weight = Weight(900);
}

impl Display for Weight {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
