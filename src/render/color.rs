// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Named plot colours and their sRGB values.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The colours the variants and configuration files refer to by name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NamedColor {
    Black,
    White,
    Gray,
    Purple,
    Blue,
    Green,
    Red,
    Orange,
}

impl NamedColor {
    /// sRGB components, matching the usual web/matplotlib colour names.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            NamedColor::Black => [0, 0, 0],
            NamedColor::White => [255, 255, 255],
            NamedColor::Gray => [128, 128, 128],
            NamedColor::Purple => [128, 0, 128],
            NamedColor::Blue => [0, 0, 255],
            NamedColor::Green => [0, 128, 0],
            NamedColor::Red => [255, 0, 0],
            NamedColor::Orange => [255, 165, 0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(NamedColor::from_str("purple").unwrap(), NamedColor::Purple);
        assert_eq!(NamedColor::from_str("Gray").unwrap(), NamedColor::Gray);
        assert!(NamedColor::from_str("chartreuse").is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&NamedColor::Orange).unwrap();
        assert_eq!(json, "\"orange\"");
        let back: NamedColor = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(back, NamedColor::Blue);
    }

    #[test]
    fn test_rgb() {
        assert_eq!(NamedColor::Purple.rgb(), [128, 0, 128]);
        assert_eq!(NamedColor::Gray.to_string(), "gray");
    }
}
