// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Render the whole 256-color palette, either as a human readable table with colored
//! swatches, or as JSON.

use std::fmt::{Display, Formatter, Write as _};

use colette::{AnsiValue, RgbValue, TransformColor};
use crossterm::style::{Color as CrosstermColor, Stylize};
use miette::IntoDiagnostic;
use serde::Serialize;

/// One row of the palette report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub index: u8,
    /// `#rrggbb`.
    pub hex: String,
    pub rgb: RgbValue,
    pub ansi16: u8,
    pub region: PaletteRegion,
}

/// Which part of the palette an index belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteRegion {
    Basic,
    Cube,
    Grey,
}

impl Display for PaletteRegion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let it = match self {
            PaletteRegion::Basic => "basic",
            PaletteRegion::Cube => "cube",
            PaletteRegion::Grey => "grey",
        };
        f.write_str(it)
    }
}

impl From<AnsiValue> for PaletteEntry {
    fn from(ansi: AnsiValue) -> Self {
        let rgb = ansi.as_rgb();
        let region = if ansi.is_basic() {
            PaletteRegion::Basic
        } else if ansi.is_cube() {
            PaletteRegion::Cube
        } else {
            PaletteRegion::Grey
        };
        Self {
            index: ansi.index,
            hex: rgb.to_string(),
            rgb,
            ansi16: ansi.as_ansi16().index,
            region,
        }
    }
}

/// All 256 entries, in index order.
#[must_use]
pub fn palette_entries() -> Vec<PaletteEntry> {
    (0..=u8::MAX)
        .map(|index| PaletteEntry::from(AnsiValue::new(index)))
        .collect()
}

/// One line per entry: `index  #rrggbb  ansi16  region`, prefixed with a swatch painted
/// in that palette color when `use_color` is set.
#[must_use]
pub fn render_palette_text(entries: &[PaletteEntry], use_color: bool) -> String {
    let mut acc = String::new();
    for entry in entries {
        if use_color {
            let swatch = "    ".on(CrosstermColor::AnsiValue(entry.index));
            _ = write!(acc, "{swatch} ");
        }
        _ = writeln!(
            acc,
            "{:>3}  {}  {:>2}  {}",
            entry.index, entry.hex, entry.ansi16, entry.region
        );
    }
    acc
}

/// Pretty printed JSON array of all entries.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_palette_json(entries: &[PaletteEntry]) -> miette::Result<String> {
    serde_json::to_string_pretty(entries).into_diagnostic()
}
