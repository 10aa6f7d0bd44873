// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI 256-color palette representation.
//!
//! This provides a good balance between color precision and terminal compatibility.
//! Each index (0-255) maps to a specific color in the palette.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use super::{Ansi16Value, CUBE_START_INDEX, GREY_FIRST_VALUE, GREY_START_INDEX,
            GREY_STEP_SIZE, RgbValue, color256_to_16, color256_to_rgb};
use crate::TransformColor;

/// Represents a color in the ANSI 256-color palette format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Serialize, Deserialize)]
pub struct AnsiValue {
    pub index: u8,
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self { index } }
}

impl From<RgbValue> for AnsiValue {
    fn from(value: RgbValue) -> Self { value.as_ansi() }
}

impl From<AnsiValue> for RgbValue {
    fn from(value: AnsiValue) -> Self { value.as_rgb() }
}

impl Display for AnsiValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "{}", self.index) }
}

impl TransformColor for AnsiValue {
    fn as_rgb(&self) -> RgbValue { RgbValue::from(color256_to_rgb(self.index)) }

    fn as_ansi(&self) -> AnsiValue { *self }

    fn as_ansi16(&self) -> Ansi16Value { Ansi16Value::new(color256_to_16(self.index)) }
}

impl AnsiValue {
    /// Create a new ANSI color value.
    #[must_use]
    pub const fn new(color: u8) -> Self { Self { index: color } }

    /// Check if this is a basic ANSI color (indices 0-15).
    ///
    /// Terminals are free to redefine these, so the RGB values in the palette table for
    /// this range are only the xterm defaults.
    #[must_use]
    pub const fn is_basic(&self) -> bool { self.index < CUBE_START_INDEX }

    /// Check if this color is part of the 6×6×6 color cube (indices 16-231).
    #[must_use]
    pub const fn is_cube(&self) -> bool {
        self.index >= CUBE_START_INDEX && self.index < GREY_START_INDEX
    }

    /// Check if this color is part of the 24 step grey ramp (indices 232-255).
    #[must_use]
    pub const fn is_grey(&self) -> bool { self.index >= GREY_START_INDEX }

    /// The `(red, green, blue)` quantization levels (each `0..=5`) of a cube color, or
    /// [`None`] if this is not a cube color.
    #[must_use]
    pub const fn cube_levels(&self) -> Option<(u8, u8, u8)> {
        if !self.is_cube() {
            return None;
        }
        let offset = self.index - CUBE_START_INDEX;
        Some((offset / 36, offset / 6 % 6, offset % 6))
    }

    /// The position (`0..=23`) of a grey in the grey ramp, or [`None`] if this is not a
    /// grey.
    #[must_use]
    pub const fn grey_step(&self) -> Option<u8> {
        if self.is_grey() {
            Some(self.index - GREY_START_INDEX)
        } else {
            None
        }
    }

    /// Channel value shared by all three channels of a grey, or [`None`] if this is not
    /// a grey.
    #[must_use]
    pub const fn grey_value(&self) -> Option<u8> {
        match self.grey_step() {
            Some(step) => Some(GREY_FIRST_VALUE + GREY_STEP_SIZE * step),
            None => None,
        }
    }
}
