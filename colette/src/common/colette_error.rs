// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The core conversions are total functions over `u8` / `u32` inputs and can't fail.
//! The only fallible surface of this crate is turning text (or deserialized data) into
//! colors, and that is what [`ColetteError`] describes.

/// Type alias for results produced when parsing text into colors.
pub type ColetteResult<T> = Result<T, ColetteError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ColetteError {
    #[error("`{input}` is not a valid hex color")]
    #[diagnostic(
        code(colette::parse::hex_color),
        help("Use the `#RRGGBB` format, eg: `#ff8000`")
    )]
    InvalidHexColorFormat { input: String },

    #[error("`{input}` is not a valid RGB triplet")]
    #[diagnostic(
        code(colette::parse::rgb_triplet),
        help("Use 3 comma separated channels in the range 0-255, eg: `255,128,0`")
    )]
    InvalidRgbTriplet { input: String },

    #[error("`{input}` is not a valid 256-color palette index")]
    #[diagnostic(
        code(colette::parse::palette_index),
        help("Palette indices are decimal numbers in the range 0-255")
    )]
    InvalidPaletteIndex { input: String },

    #[error("`{input}` is not a valid packed RGB value")]
    #[diagnostic(
        code(colette::parse::packed_rgb),
        help("Use a decimal number or `0x` prefixed hex, eg: `0xff8000`")
    )]
    InvalidPackedValue { input: String },

    #[error("{index} is not a valid 16-color palette index")]
    #[diagnostic(
        code(colette::range::ansi16_index),
        help("16-color palette indices are in the range 0-15")
    )]
    InvalidAnsi16Index { index: u8 },
}
