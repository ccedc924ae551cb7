// font-diff/src/backend.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Provides a common interface to the capability that actually turns a font
//! specification and a string into pixel coverage.

use pathfinder_geometry::vector::Vector2F;

use crate::canvas::AlphaBitmap;
use crate::descriptor::FontDescriptor;

/// Provides a common interface to the capability that actually turns a font
/// specification and a string into pixel coverage.
///
/// Backends are passed to the engine explicitly; there is no process-wide
/// registry. The engine treats a backend as a black box: whatever shaping,
/// hinting, and antialiasing it applies is taken as-is.
pub trait RasterBackend {
    /// Renders `text` in solid black ink into `canvas`, horizontally
    /// centered and vertically middle-anchored at `origin`.
    ///
    /// The canvas arrives cleared (fully transparent); implementations only
    /// add ink coverage, and only the alpha channel of the result carries
    /// meaning downstream.
    ///
    /// A family the backend cannot resolve must be substituted with the
    /// backend's fallback face, silently: resolution failures never surface
    /// through this interface. Guaranteeing that a family is resolvable
    /// *before* rendering is the caller's responsibility.
    fn fill_text(
        &self,
        canvas: &mut AlphaBitmap,
        text: &str,
        descriptor: &FontDescriptor,
        origin: Vector2F,
    );
}
