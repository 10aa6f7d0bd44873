// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Legacy 16-color ANSI palette representation.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use super::{AnsiValue, RgbValue, color256_to_rgb};
use crate::{ColetteError, TransformColor};

/// Represents a color in the legacy 16-color ANSI palette. Indices 0-7 are the normal
/// colors and 8-15 their bright forms.
///
/// Deserializing checks the range, so `{"index": 200}` is rejected.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "UncheckedAnsi16Value")]
pub struct Ansi16Value {
    pub index: u8,
}

/// Wire form of [`Ansi16Value`] before the range check.
#[derive(Debug, Deserialize)]
struct UncheckedAnsi16Value {
    index: u8,
}

impl TryFrom<u8> for Ansi16Value {
    type Error = ColetteError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if index <= 15 {
            Ok(Self { index })
        } else {
            Err(ColetteError::InvalidAnsi16Index { index })
        }
    }
}

impl TryFrom<UncheckedAnsi16Value> for Ansi16Value {
    type Error = ColetteError;

    fn try_from(unchecked: UncheckedAnsi16Value) -> Result<Self, Self::Error> {
        Self::try_from(unchecked.index)
    }
}

impl Ansi16Value {
    /// Create a new 16-color value. Only the low nibble of `index` is kept.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        debug_assert!(index <= 15, "Ansi16Value must be in 0..=15");
        Self { index: index & 0x0F }
    }

    /// Check if this is one of the bright colors (indices 8-15).
    #[must_use]
    pub const fn is_bright(&self) -> bool { self.index >= 8 }
}

impl Display for Ansi16Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "{}", self.index) }
}

/// The first 16 entries of the 256-color palette are the 16 base colors, so the
/// conversions go through the same table.
impl TransformColor for Ansi16Value {
    fn as_rgb(&self) -> RgbValue { RgbValue::from(color256_to_rgb(self.index)) }

    fn as_ansi(&self) -> AnsiValue { AnsiValue::new(self.index) }

    fn as_ansi16(&self) -> Ansi16Value { *self }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(0, RgbValue{red: 0, green: 0, blue: 0})]
    #[test_case(1, RgbValue{red: 128, green: 0, blue: 0})]
    #[test_case(7, RgbValue{red: 192, green: 192, blue: 192})]
    #[test_case(12, RgbValue{red: 0, green: 0, blue: 255})]
    #[test_case(15, RgbValue{red: 255, green: 255, blue: 255})]
    fn test_ansi16_as_rgb(index: u8, expected: RgbValue) {
        assert_eq2!(Ansi16Value::new(index).as_rgb(), expected);
    }

    #[test]
    fn test_as_ansi_keeps_the_index() {
        for index in 0..16 {
            let ansi16 = Ansi16Value::new(index);
            assert_eq2!(ansi16.as_ansi(), AnsiValue::new(index));
            assert_eq2!(ansi16.as_ansi().as_ansi16(), ansi16);
        }
    }

    #[test]
    fn test_try_from_u8() {
        assert_eq2!(Ansi16Value::try_from(15), Ok(Ansi16Value::new(15)));
        assert_eq2!(
            Ansi16Value::try_from(16),
            Err(ColetteError::InvalidAnsi16Index { index: 16 })
        );
    }

    #[test]
    fn test_deserialize_checks_range() {
        let ok: Ansi16Value = serde_json::from_str(r#"{"index":9}"#).unwrap();
        assert_eq2!(ok, Ansi16Value::new(9));

        let result = serde_json::from_str::<Ansi16Value>(r#"{"index":200}"#);
        let error = result.unwrap_err().to_string();
        assert!(error.contains("200"), "{error}");
    }

    #[test]
    fn test_serialize_keeps_struct_shape() {
        let json = serde_json::to_string(&Ansi16Value::new(12)).unwrap();
        assert_eq2!(json, r#"{"index":12}"#);
    }

    #[test]
    fn test_is_bright() {
        assert!(!Ansi16Value::new(0).is_bright());
        assert!(!Ansi16Value::new(7).is_bright());
        assert!(Ansi16Value::new(8).is_bright());
        assert!(Ansi16Value::new(15).is_bright());
    }
}
