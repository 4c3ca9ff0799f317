use std::io::{self, Write};

use image::{GrayImage, Luma};
use tracing::trace;

use super::symbol::Symbol;
use crate::common::error::{EANError, EANResult};

// Raster config
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Borders {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Borders {
    pub const fn uniform(width: u32) -> Self {
        Self { top: width, right: width, bottom: width, left: width }
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct RasterConfig {
    pub unit_width: u32,
    pub bar_height: u32,
    pub notch_height: u32,
    pub borders: Borders,
    pub reserve_text: bool,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            unit_width: 1,
            bar_height: DEFAULT_BAR_HEIGHT,
            notch_height: 0,
            borders: Borders::uniform(0),
            reserve_text: false,
        }
    }
}

impl RasterConfig {
    pub fn unit_width(mut self, unit_width: u32) -> Self {
        self.unit_width = unit_width;
        self
    }

    pub fn bar_height(mut self, bar_height: u32) -> Self {
        self.bar_height = bar_height;
        self
    }

    pub fn notch_height(mut self, notch_height: u32) -> Self {
        self.notch_height = notch_height;
        self
    }

    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    pub fn reserve_text(mut self, reserve_text: bool) -> Self {
        self.reserve_text = reserve_text;
        self
    }

    /// Height of the band below the bars kept free for human readable digits. Saturates,
    /// [`RasterConfig::dimensions`] rejects configs where it would overflow.
    pub fn text_height(&self) -> u32 {
        self.checked_text_height().unwrap_or(u32::MAX)
    }

    fn checked_text_height(&self) -> Option<u32> {
        if self.reserve_text {
            TEXT_HEIGHT_UNITS.checked_mul(self.unit_width)
        } else {
            Some(0)
        }
    }

    /// Raster width & height for a symbol `symbol_width` units wide.
    pub fn dimensions(&self, symbol_width: usize) -> EANResult<(u32, u32)> {
        self.validate()?;

        let Self { unit_width: u, bar_height, notch_height, borders: b, .. } = *self;
        let text_height = self.checked_text_height().ok_or(EANError::RasterTooLarge)?;

        let w = u32::try_from(symbol_width)
            .ok()
            .and_then(|sw| sw.checked_mul(u))
            .and_then(|w| w.checked_add(b.left))
            .and_then(|w| w.checked_add(b.right));
        let h = bar_height
            .checked_add(notch_height.max(text_height))
            .and_then(|h| h.checked_add(b.top))
            .and_then(|h| h.checked_add(b.bottom));

        match (w, h) {
            (Some(w), Some(h)) if (w as u64) * (h as u64) <= MAX_RASTER_PIXELS => Ok((w, h)),
            _ => Err(EANError::RasterTooLarge),
        }
    }

    pub fn validate(&self) -> EANResult<()> {
        if self.unit_width == 0 {
            return Err(EANError::InvalidUnitWidth);
        }
        if self.bar_height == 0 {
            return Err(EANError::InvalidBarHeight);
        }
        Ok(())
    }
}

// Raster
//------------------------------------------------------------------------------

/// Row-major monochrome bitmap, one bit per pixel, rows padded to whole bytes. Set bits
/// are ink.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Raster {
    data: Vec<u8>,
    w: u32,
    h: u32,
    label: String,
}

impl Raster {
    fn new(w: u32, h: u32, label: String) -> Self {
        let data = vec![0; Self::row_bytes_for(w) * h as usize];
        Self { data, w, h, label }
    }

    fn row_bytes_for(w: u32) -> usize {
        (w as usize + 7) >> 3
    }

    pub fn width(&self) -> u32 {
        self.w
    }

    pub fn height(&self) -> u32 {
        self.h
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn row_bytes(&self) -> usize {
        Self::row_bytes_for(self.w)
    }

    pub fn row(&self, y: u32) -> &[u8] {
        debug_assert!(y < self.h, "Row out of bounds: Height {}, Row {y}", self.h);

        let rb = self.row_bytes();
        let start = y as usize * rb;
        &self.data[start..start + rb]
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        debug_assert!(x < self.w, "Column out of bounds: Width {}, Column {x}", self.w);

        (self.row(y)[x as usize >> 3] << (x & 7)) & 0b10000000 != 0
    }

    fn set(&mut self, x: u32, y: u32) {
        let index = y as usize * self.row_bytes() + (x as usize >> 3);
        self.data[index] |= 0b10000000 >> (x & 7);
    }

    pub fn count_ink(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let mut res = String::with_capacity(((self.w + 1) * self.h + 1) as usize);
        res.push('\n');
        for y in 0..self.h {
            for x in 0..self.w {
                res.push(if self.get(x, y) { '█' } else { '.' });
            }
            res.push('\n');
        }
        res
    }
}

// Serialization
//------------------------------------------------------------------------------

impl Raster {
    /// Plain (ASCII) portable bitmap.
    pub fn write_pbm<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "P1")?;
        writeln!(out, "# {}", self.label)?;
        writeln!(out, "{} {}", self.w, self.h)?;

        let mut line = String::with_capacity(self.w as usize + 1);
        for y in 0..self.h {
            line.clear();
            self.push_pbm_row(y, &mut line);
            out.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    pub fn to_pbm(&self) -> String {
        let mut res = String::with_capacity((self.w as usize + 1) * self.h as usize + 64);
        res.push_str(&format!("P1\n# {}\n{} {}\n", self.label, self.w, self.h));
        (0..self.h).for_each(|y| self.push_pbm_row(y, &mut res));
        res
    }

    fn push_pbm_row(&self, y: u32, out: &mut String) {
        out.extend((0..self.w).map(|x| if self.get(x, y) { '1' } else { '0' }));
        out.push('\n');
    }

    /// Grayscale image with ink at 0 and background at 255.
    pub fn to_image(&self) -> GrayImage {
        GrayImage::from_fn(self.w, self.h, |x, y| if self.get(x, y) { Luma([0]) } else { Luma([255]) })
    }
}

// Raster builder
//------------------------------------------------------------------------------

pub fn build_raster(symbol: &Symbol, config: &RasterConfig) -> EANResult<Raster> {
    let RasterConfig { unit_width: u, bar_height, notch_height, borders, .. } = *config;
    let bits = symbol.bits();

    // Every offset below stays within w & h
    let (w, h) = config.dimensions(bits.len())?;
    trace!(w, h, "Rasterizing {} symbol", symbol.format());

    let mut raster = Raster::new(w, h, format!("{} {}", symbol.format(), symbol.digits()));

    let bar_rows = borders.top..borders.top + bar_height;
    let notch_rows = bar_rows.end..bar_rows.end + notch_height;

    for (i, bit) in bits.iter().enumerate() {
        if !bit {
            continue;
        }
        let rows = if symbol.is_guard(i) { bar_rows.start..notch_rows.end } else { bar_rows.clone() };
        let x0 = borders.left + i as u32 * u;
        for y in rows {
            for x in x0..x0 + u {
                raster.set(x, y);
            }
        }
    }

    Ok(raster)
}


// Global constants
//------------------------------------------------------------------------------

pub const DEFAULT_BAR_HEIGHT: u32 = 40;

// Upper bound on width * height, 32 MiB of packed rows
pub const MAX_RASTER_PIXELS: u64 = 1 << 28;

// Text band height in units, applied when text is reserved
pub const TEXT_HEIGHT_UNITS: u32 = 8;
