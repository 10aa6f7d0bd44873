// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.
//!
//! This is the most precise color representation supported by modern terminals.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use super::{Ansi16Value, AnsiValue, color256_to_16, join_rgb, parse_hex_color, rgb_to_256,
            split_rgb};
use crate::{ColetteError, ColetteResult, TransformColor};

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Serialize, Deserialize)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

/// Unpack a `0xRRGGBB` value. Bits above the low 24 are ignored.
impl From<u32> for RgbValue {
    fn from(packed: u32) -> Self { split_rgb(packed).into() }
}

impl From<RgbValue> for u32 {
    fn from(value: RgbValue) -> Self { value.packed() }
}

impl From<RgbValue> for (u8, u8, u8) {
    fn from(value: RgbValue) -> Self { (value.red, value.green, value.blue) }
}

/// Formats as `#rrggbb`.
impl Display for RgbValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Packed `0xRRGGBB` form of this color.
    #[must_use]
    pub const fn packed(&self) -> u32 { join_rgb(self.red, self.green, self.blue) }

    /// Parse a `#RRGGBB` string (hex digits in either case). The whole input must be
    /// consumed.
    ///
    /// # Errors
    ///
    /// Returns [`ColetteError::InvalidHexColorFormat`] if the input is not exactly a
    /// valid hex color.
    pub fn try_from_hex_color(input: &str) -> ColetteResult<RgbValue> {
        match parse_hex_color(input) {
            Ok(("", color)) => Ok(color),
            _ => Err(ColetteError::InvalidHexColorFormat {
                input: input.to_string(),
            }),
        }
    }
}

impl TransformColor for RgbValue {
    fn as_rgb(&self) -> RgbValue { *self }

    fn as_ansi(&self) -> AnsiValue { AnsiValue::new(rgb_to_256(self.red, self.green, self.blue)) }

    fn as_ansi16(&self) -> Ansi16Value {
        Ansi16Value::new(color256_to_16(self.as_ansi().index))
    }
}
