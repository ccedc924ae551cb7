// font-diff/src/error.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Various types of errors that `font-diff` can return.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Reasons why a font configuration fails boundary validation.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The family name was empty.
    EmptyFamily,
    /// The weight was outside the 100–900 range.
    InvalidWeight(u16),
    /// The display size was not a positive finite number.
    InvalidSize(f32),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            ConfigError::EmptyFamily => f.write_str("empty family name"),
            ConfigError::InvalidWeight(weight) => {
                write!(f, "weight {} outside the 100-900 range", weight)
            }
            ConfigError::InvalidSize(size) => write!(f, "invalid display size {}", size),
        }
    }
}

impl Error for ConfigError {}

/// Reasons why the compositor might reject its inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositeError {
    /// The two input bitmaps had different dimensions. Carries both side
    /// lengths. The affected frame is abandoned; the inputs are never
    /// cropped or stretched to fit.
    ShapeMismatch(u32, u32),
}

impl Display for CompositeError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            CompositeError::ShapeMismatch(size_a, size_b) => {
                write!(f, "shape mismatch: {}px square vs. {}px square", size_a, size_b)
            }
        }
    }
}

impl Error for CompositeError {}

/// Reasons why a backend might fail to look up a registered face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionError {
    /// No face matching the given query was found.
    NotFound,
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            SelectionError::NotFound => f.write_str("no face found"),
        }
    }
}

impl Error for SelectionError {}

/// Reasons why rendering a single comparison frame can fail.
///
/// A failed frame never blocks or corrupts other frames in a batch.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderError {
    /// A font configuration failed boundary validation.
    Config(ConfigError),
    /// The compositor rejected its inputs.
    Composite(CompositeError),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            RenderError::Config(ref err) => write!(f, "invalid font configuration: {}", err),
            RenderError::Composite(ref err) => write!(f, "compositing failed: {}", err),
        }
    }
}

impl Error for RenderError {}

impl From<ConfigError> for RenderError {
    fn from(error: ConfigError) -> RenderError {
        RenderError::Config(error)
    }
}

impl From<CompositeError> for RenderError {
    fn from(error: CompositeError) -> RenderError {
        RenderError::Composite(error)
    }
}
