use std::error::Error;
use std::fs::File;
use std::io::BufWriter;

use eanism::{EANBuilder, EANError};

fn main() -> Result<(), Box<dyn Error>> {
    let data = std::env::args().nth(1).unwrap_or_else(|| "4101450004474".to_string());

    let barcode = match EANBuilder::new(&data).unit_width(3).notch_height(15).border(12).build() {
        Ok(b) => b,
        Err(e @ EANError::ChecksumMismatch { .. }) => {
            // Report instead of asking for a corrected number
            println!("{e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("{} {}", barcode.format(), barcode.digits());
    println!("{}", barcode.symbol().bits());

    barcode.raster().write_pbm(BufWriter::new(File::create("barcode.pbm")?))?;
    barcode.to_image().save("barcode.png")?;

    println!("Barcode saved to: barcode.pbm, barcode.png");
    Ok(())
}
