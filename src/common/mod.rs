pub mod bit_utils;
pub mod checksum;
pub mod codec;
pub mod digits;
pub mod error;
pub mod metadata;

pub use bit_utils::*;
pub use checksum::*;
pub use codec::*;
pub use digits::*;
pub use error::*;
pub use metadata::*;
