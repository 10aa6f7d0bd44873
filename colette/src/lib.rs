// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # colette
//!
//! Convert colors between the three representations that terminals understand:
//!
//! 1. 24-bit truecolor, an RGB triplet ([`RgbValue`]).
//! 2. The xterm 256-color palette, an index `0..=255` ([`AnsiValue`]).
//! 3. The legacy 16-color palette, an index `0..=15` ([`Ansi16Value`]).
//!
//! This lets code that renders truecolor output degrade gracefully on terminals that
//! only support fewer colors. Which palette to target is up to the caller, this crate
//! does not detect terminal capabilities.
//!
//! # The core operations
//!
//! | Function            | Conversion                                 |
//! |---------------------|--------------------------------------------|
//! | [`rgb_to_256`]      | RGB triplet -> nearest 256-color index     |
//! | [`color256_to_rgb`] | 256-color index -> packed RGB              |
//! | [`color256_to_16`]  | 256-color index -> 16-color index          |
//! | [`join_rgb`]        | `(r, g, b)` -> packed `0xRRGGBB`           |
//! | [`split_rgb`]       | packed `0xRRGGBB` -> `(r, g, b)`           |
//!
//! ```
//! use colette::{color256_to_16, color256_to_rgb, join_rgb, rgb_to_256};
//!
//! assert_eq!(rgb_to_256(255, 0, 0), 196);
//! assert_eq!(color256_to_rgb(196), join_rgb(255, 0, 0));
//! assert_eq!(color256_to_16(196), 9);
//! ```
//!
//! # Value types
//!
//! The same conversions are available on strongly typed values via the
//! [`TransformColor`] trait, and [`Color::degrade`] maps any color down to a chosen
//! [`ColorDepth`].
//!
//! ```
//! use colette::{AnsiValue, Color, ColorDepth, RgbValue, TransformColor};
//!
//! let rgb = RgbValue::try_from_hex_color("#5f00ff").unwrap();
//! assert_eq!(rgb.as_ansi(), AnsiValue::new(57));
//!
//! let color: Color = "255,128,0".parse().unwrap();
//! assert_eq!(color.degrade(ColorDepth::Ansi256), Color::Ansi256(AnsiValue::new(208)));
//! ```
//!
//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://github.com/tmux/tmux/blob/master/colour.c>

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod color;
pub mod common;
pub mod decl_macros;

// Re-export.
pub use color::*;
pub use common::*;
