// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Quantize an RGB triplet to the xterm 256-color palette.
//!
//! xterm provides a 6x6x6 color cube (16 - 231) and 24 greys (232 - 255). We map the
//! RGB color to the closest color in the cube, also work out the closest grey, and use
//! the nearest of the two.
//!
//! Note that xterm has much lower resolution for darker colors (they are not evenly
//! spread out), so the 6 levels are not evenly spread: `0x00`, `0x5f` (95), `0x87`
//! (135), `0xaf` (175), `0xd7` (215) and `0xff` (255). Greys are more evenly spread (8,
//! 18, 28 ... 238).

/// Channel value of each of the six cube quantization levels.
pub const CUBE_LEVELS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

/// First palette index of the 6x6x6 color cube.
pub const CUBE_START_INDEX: u8 = 16;

/// First palette index of the grey ramp.
pub const GREY_START_INDEX: u8 = 232;

/// Number of entries in the grey ramp.
pub const GREY_STEP_COUNT: u8 = 24;

/// Channel value of the darkest grey in the ramp. Every following step adds
/// [`GREY_STEP_SIZE`].
pub const GREY_FIRST_VALUE: u8 = 8;

pub const GREY_STEP_SIZE: u8 = 10;

/// Returns the index of the color in the xterm 256-color palette that is nearest to
/// the given RGB triplet.
///
/// Only two candidates are compared: the nearest cube color and the nearest grey. An
/// exact cube hit is returned right away. Otherwise the grey wins only when it is
/// strictly closer (squared Euclidean distance), so ties go to the cube.
///
/// The result is always in `16..=255`, the 16 base colors are never returned since
/// terminals are free to redefine them.
#[must_use]
pub fn rgb_to_256(red: u8, green: u8, blue: u8) -> u8 {
    // Map RGB to 6x6x6 cube.
    let (qr, qg, qb) = (
        color_to_6cube(red),
        color_to_6cube(green),
        color_to_6cube(blue),
    );
    let (cr, cg, cb) = (
        CUBE_LEVELS[usize::from(qr)],
        CUBE_LEVELS[usize::from(qg)],
        CUBE_LEVELS[usize::from(qb)],
    );
    let cube_index = cube_index(qr, qg, qb);

    // If we have hit the color exactly, return early.
    if (cr, cg, cb) == (red, green, blue) {
        return cube_index;
    }

    // Work out the closest grey (average of RGB).
    let grey_avg = (i32::from(red) + i32::from(green) + i32::from(blue)) / 3;
    let grey_idx = if grey_avg > 238 { 23 } else { (grey_avg - 3) / 10 };
    let grey = i32::from(GREY_FIRST_VALUE) + i32::from(GREY_STEP_SIZE) * grey_idx;

    // Is grey or 6x6x6 color closest?
    let input = (i32::from(red), i32::from(green), i32::from(blue));
    let grey_dist = dist_sq((grey, grey, grey), input);
    let cube_dist = dist_sq((i32::from(cr), i32::from(cg), i32::from(cb)), input);

    if grey_dist < cube_dist {
        // `grey_idx` is in `0..=23` for every `u8` input.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let grey_idx = grey_idx as u8;
        GREY_START_INDEX + grey_idx
    } else {
        cube_index
    }
}

/// Palette index of the cube entry with the given per-channel levels (each `0..=5`).
#[must_use]
pub const fn cube_index(qr: u8, qg: u8, qb: u8) -> u8 {
    CUBE_START_INDEX + 36 * qr + 6 * qg + qb
}

/// Quantization level (`0..=5`) of a single channel. Darker tones get coarser levels.
#[must_use]
pub const fn color_to_6cube(value: u8) -> u8 {
    match value {
        0..48 => 0,
        48..114 => 1,
        _ => (value - 35) / 40,
    }
}

fn dist_sq(lhs: (i32, i32, i32), rhs: (i32, i32, i32)) -> i32 {
    (lhs.0 - rhs.0).pow(2) + (lhs.1 - rhs.1).pow(2) + (lhs.2 - rhs.2).pow(2)
}
