// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core color types and conversions.
//!
//! This module provides:
//! - **Core operations**: [`rgb_to_256`], [`color256_to_rgb`], [`color256_to_16`],
//!   [`join_rgb`] and [`split_rgb`]
//! - **Primitive types**: [`RgbValue`] (24-bit truecolor), [`AnsiValue`] (256-color
//!   palette) and [`Ansi16Value`] (16-color palette)
//! - **Abstraction**: [`TransformColor`] trait for color representation conversion
//! - **Wrapper type**: [`Color`] which can be degraded to a target [`ColorDepth`]
//! - **Parsing**: [`parse_hex_color`] for `#RRGGBB` strings

// Attach.
mod ansi16_value;
mod ansi_value;
mod color_depth;
mod convert;
mod hex_color_parser;
mod pack;
mod palette;
mod rgb_value;
mod transform_color;

// Re-export.
pub use ansi16_value::*;
pub use ansi_value::*;
pub use color_depth::*;
pub use convert::*;
pub use hex_color_parser::*;
pub use pack::*;
pub use palette::*;
pub use rgb_value::*;
pub use transform_color::*;
