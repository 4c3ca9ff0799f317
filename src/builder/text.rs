use super::raster::RasterConfig;
use super::symbol::Symbol;
use crate::common::metadata::{MIDDLE_GUARD_WIDTH, SIDE_GUARD_WIDTH};

// Text layout
//------------------------------------------------------------------------------

/// Horizontal span reserved for one group of human readable digits, in pixels.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TextAnchor {
    pub x: u32,
    pub width: u32,
    pub text: String,
}

/// Where a text overlay should draw the digits. Glyphs themselves are drawn elsewhere.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TextLayout {
    pub leading: Option<TextAnchor>,
    pub left: TextAnchor,
    pub right: TextAnchor,
    // Top of the text band & its height
    pub top: u32,
    pub height: u32,
}

impl TextLayout {
    pub fn new(symbol: &Symbol, config: &RasterConfig) -> Self {
        let u = config.unit_width;
        let origin = config.borders.left;
        let half = symbol.format().half_width() as u32;
        let mid = symbol.middle_guard_offset() as u32;

        // Left text sits one unit clear of the side guard. Saturates for configs that
        // couldn't be rasterized anyway.
        let left_start = SIDE_GUARD_WIDTH as u32 + 1;
        let left = TextAnchor {
            x: origin.saturating_add(left_start.saturating_mul(u)),
            width: (mid - left_start).saturating_mul(u),
            text: digits_to_string(symbol.left_group()),
        };

        let right = TextAnchor {
            x: origin.saturating_add((mid + MIDDLE_GUARD_WIDTH as u32).saturating_mul(u)),
            width: half.saturating_mul(u),
            text: digits_to_string(symbol.right_group()),
        };

        let leading = symbol.leading_digit().map(|d| {
            let offset = LEADING_OFFSET_UNITS.saturating_mul(u).min(origin);
            TextAnchor { x: origin - offset, width: offset, text: d.to_string() }
        });

        Self {
            leading,
            left,
            right,
            top: config.borders.top.saturating_add(config.bar_height),
            height: config.text_height(),
        }
    }
}

fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}


// Global constants
//------------------------------------------------------------------------------

// Distance of the EAN-13 leading digit from the bars, in units
pub const LEADING_OFFSET_UNITS: u32 = 7;
