// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pack three 8-bit channels into a single `0xRRGGBB` integer and back.

use crate::{ColetteError, ColetteResult};

/// Join the red, green and blue channels into a packed `0xRRGGBB` value. Only the low
/// 24 bits of the result are ever set.
#[must_use]
pub const fn join_rgb(red: u8, green: u8, blue: u8) -> u32 {
    (red as u32) << 16 | (green as u32) << 8 | blue as u32
}

/// Split a packed `0xRRGGBB` value into its `(red, green, blue)` channels. Bits above
/// the low 24 are ignored.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn split_rgb(packed: u32) -> (u8, u8, u8) {
    (
        (packed >> 16 & 0xFF) as u8,
        (packed >> 8 & 0xFF) as u8,
        (packed & 0xFF) as u8,
    )
}

/// Parse a packed RGB value written either in decimal or as `0x` prefixed hex.
///
/// # Errors
///
/// Returns [`ColetteError::InvalidPackedValue`] if the input is neither (a sign is not
/// allowed), or doesn't fit in a `u32`.
pub fn try_parse_packed_rgb(input: &str) -> ColetteResult<u32> {
    let trimmed = input.trim();
    let (digits, radix) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (trimmed, 10),
    };

    // `from_str_radix` accepts a leading `+`, only plain digits are allowed here.
    let error = || ColetteError::InvalidPackedValue {
        input: input.to_string(),
    };
    if !digits.chars().all(|it| it.is_digit(radix)) {
        return Err(error());
    }
    u32::from_str_radix(digits, radix).map_err(|_| error())
}
