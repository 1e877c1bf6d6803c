//! Sheet styling
//!
//! Fonts and fill colors used for the header, label and data rows.

use crate::error::{IoError, Result};
use patchsheet_core::RowStyle;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder};
use serde::{Deserialize, Serialize};

/// Visual settings of the generated sheet, read from the `[style]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetStyle {
    /// Font used in every cell
    pub font_name: String,
    /// Font size in points
    pub font_size: f64,
    /// Fill of the header row and universe labels (#RRGGBB)
    pub label_color: String,
    /// Fill of alternating data rows (#RRGGBB)
    pub alternate_color: String,
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            font_name: "Helvetica".to_string(),
            font_size: 12.0,
            label_color: "#BDBDBD".to_string(),
            alternate_color: "#F1F1F1".to_string(),
        }
    }
}

/// Resolved cell formats, one per [`RowStyle`]
#[derive(Debug, Clone)]
pub(crate) struct RowFormats {
    label: Format,
    default: Format,
    alternate: Format,
}

impl RowFormats {
    pub(crate) fn get(&self, style: RowStyle) -> &Format {
        match style {
            RowStyle::Header | RowStyle::Label => &self.label,
            RowStyle::Default => &self.default,
            RowStyle::Alternate => &self.alternate,
        }
    }
}

impl SheetStyle {
    /// Build the cell formats, validating the configured colors
    pub(crate) fn formats(&self) -> Result<RowFormats> {
        let label_color = parse_hex_color(&self.label_color)?;
        let alternate_color = parse_hex_color(&self.alternate_color)?;

        let font = Format::new()
            .set_font_name(self.font_name.as_str())
            .set_font_size(self.font_size);

        let label = font
            .clone()
            .set_background_color(label_color)
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin);
        let default = font.set_border(FormatBorder::Hair);
        let alternate = default.clone().set_background_color(alternate_color);

        Ok(RowFormats {
            label,
            default,
            alternate,
        })
    }
}

fn parse_hex_color(hex: &str) -> Result<Color> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    // from_str_radix alone would accept a leading sign
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(IoError::InvalidColor(hex.to_string()));
    }
    u32::from_str_radix(digits, 16)
        .map(Color::RGB)
        .map_err(|_| IoError::InvalidColor(hex.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#BDBDBD").unwrap(), Color::RGB(0xBDBDBD));
        assert_eq!(parse_hex_color("f1f1f1").unwrap(), Color::RGB(0xF1F1F1));
        assert!(matches!(parse_hex_color("#FFF"), Err(IoError::InvalidColor(_))));
        assert!(matches!(parse_hex_color("#GGGGGG"), Err(IoError::InvalidColor(_))));
        assert!(matches!(parse_hex_color("+FFFFF"), Err(IoError::InvalidColor(_))));
        assert!(matches!(parse_hex_color("#-12345"), Err(IoError::InvalidColor(_))));
    }

    #[test]
    fn test_invalid_style_rejected() {
        let style = SheetStyle {
            alternate_color: "light grey".to_string(),
            ..SheetStyle::default()
        };
        assert!(style.formats().is_err());
        assert!(SheetStyle::default().formats().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let style: SheetStyle = toml::from_str("font_name = \"Arial\"").unwrap();
        assert_eq!(style.font_name, "Arial");
        assert_eq!(style.font_size, 12.0);
        assert_eq!(style.label_color, "#BDBDBD");
    }
}
