// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result as FmtResult},
          str::FromStr};

use serde::{Deserialize, Serialize};
use strum_macros::{Display as StrumDisplay, EnumCount, EnumIter, EnumString};

use crate::{Ansi16Value, AnsiValue, ColetteError, RgbValue, TransformColor};

/// The color depth a caller wants to render with. Ordered from the fewest colors to the
/// most, so `ColorDepth::Ansi16 < ColorDepth::Truecolor`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    StrumDisplay,
    EnumString,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ColorDepth {
    Ansi16,
    Ansi256,
    Truecolor,
}

/// This is the "top-level" color type. It holds a color in any of the three
/// representations, and can be degraded to a lower [`ColorDepth`].
/// - The other color types are "lower-level" and are used to convert between different
///   color types.
/// - The [`TransformColor`] trait is used to convert between a "top-level" color type and
///   a "lower-level" color type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Rgb(RgbValue),
    Ansi256(AnsiValue),
    Ansi16(Ansi16Value),
}

mod color_impl_block {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Default for Color {
        fn default() -> Self { Color::Rgb((0, 0, 0).into()) }
    }

    impl From<RgbValue> for Color {
        fn from(rgb_value: RgbValue) -> Self { Color::Rgb(rgb_value) }
    }

    impl From<AnsiValue> for Color {
        fn from(ansi: AnsiValue) -> Self { Color::Ansi256(ansi) }
    }

    impl From<Ansi16Value> for Color {
        fn from(ansi16: Ansi16Value) -> Self { Color::Ansi16(ansi16) }
    }

    impl TransformColor for Color {
        fn as_rgb(&self) -> RgbValue {
            match self {
                Color::Rgb(rgb_value) => *rgb_value,
                Color::Ansi256(ansi_value) => ansi_value.as_rgb(),
                Color::Ansi16(ansi16_value) => ansi16_value.as_rgb(),
            }
        }

        fn as_ansi(&self) -> AnsiValue {
            match self {
                Color::Rgb(rgb_value) => rgb_value.as_ansi(),
                Color::Ansi256(ansi_value) => *ansi_value,
                Color::Ansi16(ansi16_value) => ansi16_value.as_ansi(),
            }
        }

        fn as_ansi16(&self) -> Ansi16Value {
            match self {
                Color::Rgb(rgb_value) => rgb_value.as_ansi16(),
                Color::Ansi256(ansi_value) => ansi_value.as_ansi16(),
                Color::Ansi16(ansi16_value) => *ansi16_value,
            }
        }
    }

    impl Color {
        /// The depth this color is currently expressed in.
        #[must_use]
        pub const fn depth(&self) -> ColorDepth {
            match self {
                Color::Rgb(_) => ColorDepth::Truecolor,
                Color::Ansi256(_) => ColorDepth::Ansi256,
                Color::Ansi16(_) => ColorDepth::Ansi16,
            }
        }

        /// Map this color to the given `target` depth. A color that is already at or
        /// below `target` is returned unchanged, so degrading never increases the
        /// depth.
        #[must_use]
        pub fn degrade(&self, target: ColorDepth) -> Color {
            match (target, self) {
                (ColorDepth::Truecolor, _)
                | (ColorDepth::Ansi256, Color::Ansi256(_) | Color::Ansi16(_)) => *self,
                (ColorDepth::Ansi256, Color::Rgb(rgb_value)) => {
                    Color::Ansi256(rgb_value.as_ansi())
                }
                (ColorDepth::Ansi16, _) => Color::Ansi16(self.as_ansi16()),
            }
        }
    }

    /// Displays RGB as `#rrggbb`, and palette colors as their index.
    impl Display for Color {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                Color::Rgb(rgb_value) => write!(f, "{rgb_value}"),
                Color::Ansi256(ansi_value) => write!(f, "{ansi_value}"),
                Color::Ansi16(ansi16_value) => write!(f, "{ansi16_value}"),
            }
        }
    }

    /// Accepts three textual forms:
    /// 1. `#rrggbb` -> [`Color::Rgb`].
    /// 2. `r,g,b` (decimal channels, whitespace around them is ignored) -> [`Color::Rgb`].
    /// 3. `n` (decimal `0..=255`) -> [`Color::Ansi256`].
    impl FromStr for Color {
        type Err = ColetteError;

        fn from_str(input: &str) -> Result<Self, Self::Err> {
            let trimmed = input.trim();

            if trimmed.starts_with('#') {
                return RgbValue::try_from_hex_color(trimmed).map(Color::Rgb);
            }

            if trimmed.contains(',') {
                return parse_rgb_triplet(trimmed).map(Color::Rgb).ok_or_else(|| {
                    ColetteError::InvalidRgbTriplet {
                        input: input.to_string(),
                    }
                });
            }

            trimmed
                .parse::<u8>()
                .map(|index| Color::Ansi256(AnsiValue::new(index)))
                .map_err(|_| ColetteError::InvalidPaletteIndex {
                    input: input.to_string(),
                })
        }
    }

    fn parse_rgb_triplet(input: &str) -> Option<RgbValue> {
        let mut channels = input.split(',').map(|it| it.trim().parse::<u8>());
        let red = channels.next()?.ok()?;
        let green = channels.next()?.ok()?;
        let blue = channels.next()?.ok()?;
        match channels.next() {
            Some(_) => None,
            None => Some(RgbValue::from_u8(red, green, blue)),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("#ff8000", Color::Rgb(RgbValue::from_u8(255, 128, 0)))]
    #[test_case("255,128,0", Color::Rgb(RgbValue::from_u8(255, 128, 0)))]
    #[test_case(" 1 , 2 , 3 ", Color::Rgb(RgbValue::from_u8(1, 2, 3)))]
    #[test_case("196", Color::Ansi256(AnsiValue::new(196)))]
    #[test_case("0", Color::Ansi256(AnsiValue::new(0)))]
    fn test_parse_color(input: &str, expected: Color) {
        assert_eq2!(input.parse::<Color>().unwrap(), expected);
    }

    #[test]
    fn test_parse_color_errors() {
        assert!(matches!(
            "#ff80".parse::<Color>(),
            Err(ColetteError::InvalidHexColorFormat { .. })
        ));
        assert!(matches!(
            "255,128".parse::<Color>(),
            Err(ColetteError::InvalidRgbTriplet { .. })
        ));
        assert!(matches!(
            "1,2,3,4".parse::<Color>(),
            Err(ColetteError::InvalidRgbTriplet { .. })
        ));
        assert!(matches!(
            "256,0,0".parse::<Color>(),
            Err(ColetteError::InvalidRgbTriplet { .. })
        ));
        assert!(matches!(
            "256".parse::<Color>(),
            Err(ColetteError::InvalidPaletteIndex { .. })
        ));
        assert!(matches!(
            "red".parse::<Color>(),
            Err(ColetteError::InvalidPaletteIndex { .. })
        ));
    }

    #[test]
    fn test_degrade_rgb() {
        let color = Color::Rgb(RgbValue::from_u8(255, 0, 0));
        assert_eq2!(color.degrade(ColorDepth::Truecolor), color);
        assert_eq2!(color.degrade(ColorDepth::Ansi256), Color::Ansi256(AnsiValue::new(196)));
        assert_eq2!(color.degrade(ColorDepth::Ansi16), Color::Ansi16(Ansi16Value::new(9)));
    }

    #[test]
    fn test_degrade_palette_colors() {
        let ansi = Color::Ansi256(AnsiValue::new(52));
        assert_eq2!(ansi.degrade(ColorDepth::Truecolor), ansi);
        assert_eq2!(ansi.degrade(ColorDepth::Ansi256), ansi);
        assert_eq2!(ansi.degrade(ColorDepth::Ansi16), Color::Ansi16(Ansi16Value::new(1)));

        let ansi16 = Color::Ansi16(Ansi16Value::new(12));
        assert_eq2!(ansi16.degrade(ColorDepth::Truecolor), ansi16);
        assert_eq2!(ansi16.degrade(ColorDepth::Ansi256), ansi16);
        assert_eq2!(ansi16.degrade(ColorDepth::Ansi16), ansi16);
    }

    #[test]
    fn test_degrade_never_increases_depth() {
        let colors = [
            Color::Rgb(RgbValue::from_u8(10, 200, 30)),
            Color::Ansi256(AnsiValue::new(244)),
            Color::Ansi16(Ansi16Value::new(3)),
        ];
        for color in colors {
            for target in ColorDepth::iter() {
                let degraded = color.degrade(target);
                assert_eq2!(degraded.depth(), color.depth().min(target));
            }
        }
    }

    #[test_case(Color::Rgb(RgbValue::from_u8(0, 0, 12)), ColorDepth::Truecolor, Color::Rgb(RgbValue::from_u8(0, 0, 12)) ; "rgb to truecolor")]
    #[test_case(Color::Rgb(RgbValue::from_u8(0, 0, 12)), ColorDepth::Ansi256, Color::Ansi256(AnsiValue::new(16)) ; "rgb to ansi256")]
    #[test_case(Color::Rgb(RgbValue::from_u8(0, 0, 12)), ColorDepth::Ansi16, Color::Ansi16(Ansi16Value::new(0)) ; "rgb to ansi16")]
    #[test_case(Color::Ansi256(AnsiValue::new(244)), ColorDepth::Truecolor, Color::Ansi256(AnsiValue::new(244)) ; "ansi256 to truecolor")]
    #[test_case(Color::Ansi256(AnsiValue::new(244)), ColorDepth::Ansi256, Color::Ansi256(AnsiValue::new(244)) ; "ansi256 to ansi256")]
    #[test_case(Color::Ansi256(AnsiValue::new(244)), ColorDepth::Ansi16, Color::Ansi16(Ansi16Value::new(7)) ; "ansi256 to ansi16")]
    #[test_case(Color::Ansi16(Ansi16Value::new(3)), ColorDepth::Truecolor, Color::Ansi16(Ansi16Value::new(3)) ; "ansi16 to truecolor")]
    #[test_case(Color::Ansi16(Ansi16Value::new(3)), ColorDepth::Ansi256, Color::Ansi16(Ansi16Value::new(3)) ; "ansi16 to ansi256")]
    #[test_case(Color::Ansi16(Ansi16Value::new(3)), ColorDepth::Ansi16, Color::Ansi16(Ansi16Value::new(3)) ; "ansi16 to ansi16")]
    fn test_degrade_every_depth_pair(color: Color, target: ColorDepth, expected: Color) {
        assert_eq2!(color.degrade(target), expected);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_ansi16() {
        let ok: Color = serde_json::from_str(r#"{"ansi16":{"index":9}}"#).unwrap();
        assert_eq2!(ok, Color::Ansi16(Ansi16Value::new(9)));
        assert!(serde_json::from_str::<Color>(r#"{"ansi16":{"index":200}}"#).is_err());
    }

    #[test]
    fn test_color_depth_strings() {
        assert_eq2!(ColorDepth::COUNT, 3);
        assert_eq2!(ColorDepth::Ansi256.to_string(), "ansi256");
        assert_eq2!("TrueColor".parse::<ColorDepth>().unwrap(), ColorDepth::Truecolor);
        assert!("ansi8".parse::<ColorDepth>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq2!(Color::Rgb(RgbValue::from_u8(255, 128, 0)).to_string(), "#ff8000");
        assert_eq2!(Color::Ansi256(AnsiValue::new(208)).to_string(), "208");
        assert_eq2!(Color::Ansi16(Ansi16Value::new(9)).to_string(), "9");
    }
}
