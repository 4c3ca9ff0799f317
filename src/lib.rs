//! # eanism
//!
//! A Rust library for encoding EAN-13, UPC-A and EAN-8 retail barcodes. Turns a digit string
//! into the bar pattern of its symbol and then into a monochrome raster, ready to be written as
//! a portable bitmap or handed to the `image` crate.
//!
//! ## Features
//!
//! - **Format Detection**: EAN-13, UPC-A and EAN-8 are told apart by digit count
//! - **Check Digit Validation**: Mod-10 check digit verification with a corrected candidate on mismatch
//! - **Bit Exact Encoding**: Odd/even parity left sets, right set & guard patterns
//! - **Rasterization**: Unit width, bar height, guard notches & per-edge borders
//!
//! ## Quick Start
//!
//! ### Simple Barcode Generation
//!
//! ```rust
//! use eanism::EANBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let barcode = EANBuilder::new("4101450004474").build()?;
//!
//! assert_eq!(barcode.raster().width(), 95);
//! let pbm = barcode.to_pbm();
//! assert!(pbm.starts_with("P1\n"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust,no_run
//! use eanism::EANBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let barcode = EANBuilder::new("96385074")
//!     .unit_width(3)         // Pixels per module - defaults to 1
//!     .bar_height(120)       // Pixels - defaults to 40
//!     .notch_height(15)      // Guard bars extend below the others - defaults to 0
//!     .borders(10, 20, 10, 20)
//!     .reserve_text(true)    // Keeps a band free for human readable digits
//!     .build()?;
//!
//! barcode.to_image().save("ean8.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Wrong Check Digits
//!
//! A wrong check digit is reported together with a corrected candidate. Whether to retry with
//! it, encode the digits anyway or give up is left to the caller.
//!
//! ```rust
//! use eanism::{EANBuilder, EANError};
//!
//! let err = EANBuilder::new("1234567891234").build().unwrap_err();
//! assert!(matches!(err, EANError::ChecksumMismatch { expected: 1, .. }));
//! assert_eq!(err.corrected().unwrap().to_string(), "1234567891231");
//!
//! // Encode the digits as given
//! let barcode = EANBuilder::new("1234567891234").ignore_checksum(true).build();
//! assert!(barcode.is_ok());
//! ```
//!
//! ## Symbol Layout
//!
//! Every symbol is `101` + left group + `01010` + right group + `101`, each digit taking 7
//! modules. The check digit is the last digit of the right group.
//!
//! - **EAN-13**: leading digit + 6 left + 6 right digits. The leading digit has no bars of its
//!   own, it selects the odd/even parity of the 6 left digits
//! - **UPC-A**: 6 left + 6 right digits, encoded as EAN-13 with an implicit leading 0
//! - **EAN-8**: 4 left + 4 right digits

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub mod common;

pub use builder::{Barcode, Borders, EANBuilder, Raster, RasterConfig, Symbol, TextLayout};
pub use common::checksum::{checksum_matches, correct_checksum, verify_checksum};
pub use common::codec::{encode_digit, EncodingSet};
pub use common::digits::{resolve_format, DigitString};
pub use common::error::{EANError, EANResult};
pub use common::metadata::SymbolFormat;
