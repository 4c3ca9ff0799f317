mod raster;
mod symbol;
mod text;

pub use raster::{
    build_raster, Borders, Raster, RasterConfig, DEFAULT_BAR_HEIGHT, MAX_RASTER_PIXELS,
    TEXT_HEIGHT_UNITS,
};
pub use symbol::{assemble, encode_left_side, encode_right_side, Symbol};
pub use text::{TextAnchor, TextLayout, LEADING_OFFSET_UNITS};

use image::GrayImage;
use tracing::{debug, warn};

use crate::common::{
    checksum::verify_checksum,
    digits::DigitString,
    error::{EANError, EANResult},
    metadata::SymbolFormat,
};

pub struct EANBuilder<'a> {
    data: &'a str,
    config: RasterConfig,
    ignore_checksum: bool,
}

impl<'a> EANBuilder<'a> {
    pub fn new(data: &'a str) -> Self {
        Self { data, config: RasterConfig::default(), ignore_checksum: false }
    }

    pub fn data(&mut self, data: &'a str) -> &mut Self {
        self.data = data;
        self
    }

    pub fn config(&mut self, config: RasterConfig) -> &mut Self {
        self.config = config;
        self
    }

    pub fn unit_width(&mut self, unit_width: u32) -> &mut Self {
        self.config.unit_width = unit_width;
        self
    }

    pub fn bar_height(&mut self, bar_height: u32) -> &mut Self {
        self.config.bar_height = bar_height;
        self
    }

    pub fn notch_height(&mut self, notch_height: u32) -> &mut Self {
        self.config.notch_height = notch_height;
        self
    }

    pub fn border(&mut self, width: u32) -> &mut Self {
        self.config.borders = Borders::uniform(width);
        self
    }

    pub fn borders(&mut self, top: u32, right: u32, bottom: u32, left: u32) -> &mut Self {
        self.config.borders = Borders { top, right, bottom, left };
        self
    }

    pub fn reserve_text(&mut self, reserve_text: bool) -> &mut Self {
        self.config.reserve_text = reserve_text;
        self
    }

    /// Encodes the digits as given even when the check digit is wrong.
    pub fn ignore_checksum(&mut self, ignore_checksum: bool) -> &mut Self {
        self.ignore_checksum = ignore_checksum;
        self
    }

    pub fn metadata(&self) -> String {
        let c = &self.config;
        format!(
            "{{ Data: {}, Unit width: {}, Bar height: {}, Notch height: {}, Text: {} }}",
            self.data, c.unit_width, c.bar_height, c.notch_height, c.reserve_text
        )
    }
}


impl EANBuilder<'_> {
    pub fn build(&self) -> EANResult<Barcode> {
        debug!("Generating barcode {}", self.metadata());

        let digits = DigitString::parse(self.data)?;
        let fmt = digits.format();
        debug!(%fmt, "Resolved format");

        match verify_checksum(&digits) {
            Ok(()) => debug!("Checksum verified"),
            Err(EANError::ChecksumMismatch { expected, .. }) if self.ignore_checksum => {
                warn!(%digits, expected, "Encoding with mismatched check digit");
            }
            Err(e) => return Err(e),
        }

        let symbol = assemble(&digits, fmt)?;
        debug!(width = symbol.width(), "Assembled symbol");

        let raster = build_raster(&symbol, &self.config)?;
        debug!(w = raster.width(), h = raster.height(), "Barcode generated");

        Ok(Barcode { symbol, raster, config: self.config })
    }
}

// Barcode
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Barcode {
    symbol: Symbol,
    raster: Raster,
    config: RasterConfig,
}

impl Barcode {
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn into_raster(self) -> Raster {
        self.raster
    }

    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    pub fn format(&self) -> SymbolFormat {
        self.symbol.format()
    }

    pub fn digits(&self) -> &DigitString {
        self.symbol.digits()
    }

    pub fn text_layout(&self) -> TextLayout {
        TextLayout::new(&self.symbol, &self.config)
    }

    pub fn to_pbm(&self) -> String {
        self.raster.to_pbm()
    }

    pub fn to_image(&self) -> GrayImage {
        self.raster.to_image()
    }
}

#[cfg(test)]
mod builder_tests {
    use test_case::test_case;

    use super::EANBuilder;
    use crate::common::{DigitString, EANError, SymbolFormat};

    #[test_case("4101450004474", SymbolFormat::EAN13, 95)]
    #[test_case("697929110035", SymbolFormat::UPCA, 95)]
    #[test_case("96385074", SymbolFormat::EAN8, 67)]
    fn test_builder(data: &str, fmt: SymbolFormat, width: u32) {
        let barcode = EANBuilder::new(data).unit_width(2).bar_height(20).build().unwrap();
        assert_eq!(barcode.format(), fmt);
        assert_eq!(barcode.digits().to_string(), data);
        assert_eq!(barcode.raster().width(), width * 2);
        assert_eq!(barcode.raster().height(), 20);
    }

    #[test]
    fn test_builder_checksum_mismatch() {
        let err = EANBuilder::new("1234567891234").build().unwrap_err();
        let corrected = DigitString::parse("1234567891231").unwrap();
        assert_eq!(err, EANError::ChecksumMismatch { expected: 1, corrected });

        let retry = err.corrected().unwrap().to_string();
        let barcode = EANBuilder::new(&retry).build().unwrap();
        assert_eq!(barcode.digits(), &corrected);
    }

    #[test]
    fn test_builder_ignore_checksum() {
        let barcode = EANBuilder::new("44444444").ignore_checksum(true).build().unwrap();
        assert_eq!(barcode.digits().to_string(), "44444444");
        assert_eq!(barcode.symbol().right_group(), &[4, 4, 4, 4]);
    }

    #[test_case("123ABC", EANError::InvalidCharacters)]
    #[test_case("12345", EANError::UnsupportedLength(5))]
    #[test_case("43518432135497", EANError::UnsupportedLength(14))]
    fn test_builder_invalid_input(data: &str, exp: EANError) {
        assert_eq!(EANBuilder::new(data).ignore_checksum(true).build(), Err(exp));
    }

    #[test]
    fn test_builder_invalid_config() {
        let res = EANBuilder::new("96385074").unit_width(0).build();
        assert_eq!(res, Err(EANError::InvalidUnitWidth));
    }

    #[test_case(0, u32::MAX, 0, 10)]
    #[test_case(u32::MAX, 0, 1, 0)]
    #[test_case(0, u32::MAX / 2, 0, u32::MAX / 2)]
    fn test_builder_huge_borders(top: u32, right: u32, bottom: u32, left: u32) {
        let res = EANBuilder::new("4101450004474").borders(top, right, bottom, left).build();
        assert_eq!(res, Err(EANError::RasterTooLarge));
    }

    #[test]
    fn test_builder_huge_unit_width_with_text() {
        let res = EANBuilder::new("4101450004474").unit_width(u32::MAX / 4).reserve_text(true).build();
        assert_eq!(res, Err(EANError::RasterTooLarge));
    }

    #[test]
    fn test_builder_text_layout() {
        let barcode = EANBuilder::new("4101450004474").border(10).reserve_text(true).build().unwrap();
        let layout = barcode.text_layout();
        assert_eq!(layout.leading.map(|a| a.text), Some("4".to_string()));
        assert_eq!(layout.top, 50);
        assert_eq!(layout.height, 8);
        assert_eq!(barcode.raster().height(), 40 + 8 + 20);
    }
}
