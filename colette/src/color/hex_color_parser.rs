// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbValue`]
//! struct. The hex color string must be in the format `#RRGGBB`, eg: `#FF0000` for
//! red. Hex digits can be in either case.

use nom::{IResult, Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::map_res};

use super::RgbValue;

/// Parse function that generates an [`RgbValue`] struct from a valid hex color string.
/// Any input following the 6 hex digits is returned as the remainder.
///
/// # Errors
///
/// Returns a [`nom::Err`] if the input doesn't start with `#` followed by 3 segments
/// of 2 hex digits each.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    let (input, _) = tag("#").parse(input)?;
    let (input, (red, green, blue)) =
        (parse_hex_seg, parse_hex_seg, parse_hex_seg).parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

/// Parse exactly 2 hex digits into a `u8`.
fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |it: char| it.is_ascii_hexdigit()), |it: &str| {
        u8::from_str_radix(it, 16)
    })
    .parse(input)
}
