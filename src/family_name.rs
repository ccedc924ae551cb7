// font-diff/src/family_name.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A possible value for the family component of a font specification.

use std::fmt::{self, Display, Formatter};

/// A possible value for the family component of a font specification.
///
/// The generic variants are the fixed allow-list of keywords a backend
/// resolves by itself; these descriptions are taken from CSS Fonts Level 3
/// § 3.1: <https://drafts.csswg.org/css-fonts-3/#font-family-prop>.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FamilyName {
    /// A specific font family, specified by name: e.g. "Inter", "Fira Sans".
    Title(String),
    /// The default user-interface font of the platform.
    SystemUi,
    /// Serif fonts represent the formal text style for a script.
    Serif,
    /// Glyphs in sans-serif fonts, as the term is used in CSS, are generally
    /// low contrast and have plain stroke endings.
    SansSerif,
    /// The sole criterion of a monospace font is that all glyphs have the
    /// same fixed width.
    Monospace,
    /// Glyphs in cursive fonts generally use a more informal script style,
    /// looking more like handwriting than printed letterwork.
    Cursive,
    /// Fantasy fonts are primarily decorative or expressive fonts.
    Fantasy,
    /// The serif variant of the user-interface font.
    UiSerif,
    /// The sans-serif variant of the user-interface font.
    UiSansSerif,
    /// The monospace variant of the user-interface font.
    UiMonospace,
    /// The rounded variant of the user-interface font.
    UiRounded,
}

impl FamilyName {
    /// Parses a raw family identifier, mapping names on the generic
    /// allow-list to their keyword variants and everything else to a title.
    ///
    /// Keyword matching is ASCII case-insensitive, the way backend font-spec
    /// parsers treat the keywords; titles keep their original casing.
    pub fn from_name(name: &str) -> FamilyName {
        match &*name.to_ascii_lowercase() {
            "system-ui" => FamilyName::SystemUi,
            "serif" => FamilyName::Serif,
            "sans-serif" => FamilyName::SansSerif,
            "monospace" => FamilyName::Monospace,
            "cursive" => FamilyName::Cursive,
            "fantasy" => FamilyName::Fantasy,
            "ui-serif" => FamilyName::UiSerif,
            "ui-sans-serif" => FamilyName::UiSansSerif,
            "ui-monospace" => FamilyName::UiMonospace,
            "ui-rounded" => FamilyName::UiRounded,
            _ => FamilyName::Title(name.to_owned()),
        }
    }

    /// Returns true if this is one of the fixed generic families.
    #[inline]
    pub fn is_generic(&self) -> bool {
        match *self {
            FamilyName::Title(_) => false,
            _ => true,
        }
    }

    /// The unquoted token naming this family: the keyword for generic
    /// families, the raw name for titles.
    pub fn token(&self) -> &str {
        match *self {
            FamilyName::Title(ref name) => name,
            FamilyName::SystemUi => "system-ui",
            FamilyName::Serif => "serif",
            FamilyName::SansSerif => "sans-serif",
            FamilyName::Monospace => "monospace",
            FamilyName::Cursive => "cursive",
            FamilyName::Fantasy => "fantasy",
            FamilyName::UiSerif => "ui-serif",
            FamilyName::UiSansSerif => "ui-sans-serif",
            FamilyName::UiMonospace => "ui-monospace",
            FamilyName::UiRounded => "ui-rounded",
        }
    }
}

impl Display for FamilyName {
    /// Generic keywords are emitted unquoted; titles are quoted, since
    /// family identifiers may contain spaces or otherwise be ambiguous to a
    /// backend's font-spec parser.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            FamilyName::Title(ref name) => write!(f, "\"{}\"", name),
            _ => f.write_str(self.token()),
        }
    }
}
