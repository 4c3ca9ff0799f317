#[cfg(test)]
mod ean_proptests {

    use prop::string::string_regex;
    use proptest::prelude::*;

    use eanism::builder::{assemble, build_raster};
    use eanism::*;

    pub fn format_strategy() -> BoxedStrategy<SymbolFormat> {
        prop_oneof![Just(SymbolFormat::EAN13), Just(SymbolFormat::UPCA), Just(SymbolFormat::EAN8)]
            .boxed()
    }

    pub fn digits_strategy() -> impl Strategy<Value = (SymbolFormat, String)> {
        format_strategy().prop_flat_map(|fmt| {
            let pattern = format!("[0-9]{{{}}}", fmt.digit_count());
            string_regex(&pattern).unwrap().prop_map(move |data| (fmt, data))
        })
    }

    pub fn valid_digits_strategy() -> impl Strategy<Value = (SymbolFormat, DigitString)> {
        digits_strategy().prop_map(|(fmt, data)| {
            let digits = DigitString::parse(&data).unwrap();
            (fmt, correct_checksum(&digits))
        })
    }

    pub fn config_strategy() -> impl Strategy<Value = RasterConfig> {
        (1..5u32, 1..60u32, 0..20u32, (0..12u32, 0..12u32, 0..12u32, 0..12u32), any::<bool>())
            .prop_map(|(unit_width, bar_height, notch_height, (top, right, bottom, left), text)| {
                RasterConfig::default()
                    .unit_width(unit_width)
                    .bar_height(bar_height)
                    .notch_height(notch_height)
                    .borders(Borders { top, right, bottom, left })
                    .reserve_text(text)
            })
    }

    // Mostly small values with the occasional extreme one
    fn dimension_strategy() -> BoxedStrategy<u32> {
        prop_oneof![4 => 0..64u32, 1 => (u32::MAX - 64)..=u32::MAX, 1 => any::<u32>()].boxed()
    }

    pub fn extreme_config_strategy() -> impl Strategy<Value = RasterConfig> {
        let dim = dimension_strategy;
        ((dim(), dim(), dim()), (dim(), dim(), dim(), dim()), any::<bool>()).prop_map(
            |((unit_width, bar_height, notch_height), (top, right, bottom, left), text)| {
                RasterConfig::default()
                    .unit_width(unit_width)
                    .bar_height(bar_height)
                    .notch_height(notch_height)
                    .borders(Borders { top, right, bottom, left })
                    .reserve_text(text)
            },
        )
    }

    // Weights 1, 3, 1, ... from the left for EAN-13, 3, 1, 3, ... for the shorter formats
    fn forward_check_digit(data: &str) -> u8 {
        let payload = &data.as_bytes()[..data.len() - 1];
        let first_weight = if payload.len() % 2 == 0 { 1 } else { 3 };
        let sum: u32 = payload
            .iter()
            .enumerate()
            .map(|(i, b)| {
                let w = if i % 2 == 0 { first_weight } else { 4 - first_weight };
                (b - b'0') as u32 * w
            })
            .sum();
        ((10 - sum % 10) % 10) as u8
    }

    proptest! {
        #[test]
        fn proptest_resolve_format(params in digits_strategy()) {
            let (fmt, data) = params;
            prop_assert_eq!(resolve_format(&data), Ok(fmt));
        }

        #[test]
        fn proptest_resolve_format_rejects_letters(data in string_regex("[0-9]{0,6}[A-Za-z][0-9]{0,6}").unwrap()) {
            prop_assert_eq!(resolve_format(&data), Err(EANError::InvalidCharacters));
        }

        #[test]
        fn proptest_resolve_format_rejects_lengths(data in string_regex("[0-9]{0,20}").unwrap()) {
            prop_assume!(![8, 12, 13].contains(&data.len()));
            prop_assert_eq!(resolve_format(&data), Err(EANError::UnsupportedLength(data.len())));
        }

        #[test]
        fn proptest_checksum_matches(params in digits_strategy()) {
            let (_, data) = params;
            let digits = DigitString::parse(&data).unwrap();
            let exp = digits.check_digit() == forward_check_digit(&data);
            prop_assert_eq!(checksum_matches(&digits), exp);
        }

        #[test]
        fn proptest_correct_checksum(params in digits_strategy()) {
            let (_, data) = params;
            let digits = DigitString::parse(&data).unwrap();
            let corrected = correct_checksum(&digits);
            let corrected_str = corrected.to_string();

            prop_assert!(checksum_matches(&corrected));
            prop_assert_eq!(&corrected_str[..data.len() - 1], &data[..data.len() - 1]);
            if checksum_matches(&digits) {
                prop_assert_eq!(corrected, digits);
            }
        }

        #[test]
        fn proptest_assemble_layout(params in valid_digits_strategy()) {
            let (fmt, digits) = params;
            let symbol = assemble(&digits, fmt).unwrap();
            let bits = symbol.bits().to_string();
            let mid = 3 + 7 * fmt.left_count();

            prop_assert_eq!(bits.len(), 3 + 7 * fmt.left_count() + 5 + 7 * fmt.right_count() + 3);
            prop_assert!(bits.starts_with("101"));
            prop_assert!(bits.ends_with("101"));
            prop_assert_eq!(&bits[mid..mid + 5], "01010");
        }

        #[test]
        fn proptest_raster_dimensions(params in valid_digits_strategy(), config in config_strategy()) {
            let (fmt, digits) = params;
            let symbol = assemble(&digits, fmt).unwrap();
            let raster = build_raster(&symbol, &config).unwrap();
            let b = config.borders;

            let text_height = if config.reserve_text { 8 * config.unit_width } else { 0 };
            let exp_w = symbol.width() as u32 * config.unit_width + b.left + b.right;
            let exp_h = config.bar_height + config.notch_height.max(text_height) + b.top + b.bottom;
            prop_assert_eq!((raster.width(), raster.height()), (exp_w, exp_h));
        }

        #[test]
        fn proptest_raster_extreme_config(params in valid_digits_strategy(), config in extreme_config_strategy()) {
            let (fmt, digits) = params;
            let symbol = assemble(&digits, fmt).unwrap();
            match build_raster(&symbol, &config) {
                Ok(raster) => {
                    let pixels = raster.width() as u64 * raster.height() as u64;
                    prop_assert!(pixels <= builder::MAX_RASTER_PIXELS);
                    prop_assert_eq!(config.dimensions(symbol.width()), Ok((raster.width(), raster.height())));
                }
                Err(e) => prop_assert!(matches!(
                    e,
                    EANError::InvalidUnitWidth | EANError::InvalidBarHeight | EANError::RasterTooLarge
                )),
            }
            let _ = TextLayout::new(&symbol, &config);
        }

        #[test]
        fn proptest_deterministic(params in valid_digits_strategy(), config in config_strategy()) {
            let (_, digits) = params;
            let data = digits.to_string();
            let a = EANBuilder::new(&data).config(config).build().unwrap();
            let b = EANBuilder::new(&data).config(config).build().unwrap();
            prop_assert_eq!(a.to_pbm(), b.to_pbm());
        }
    }
}

#[cfg(test)]
mod ean_tests {
    use rayon::prelude::*;
    use test_case::test_case;

    use eanism::builder::{assemble, build_raster, encode_left_side, encode_right_side};
    use eanism::*;

    #[test_case("4101450004474", true)]
    #[test_case("0000000000000", true)]
    #[test_case("697929110035", true)]
    #[test_case("96385074", true)]
    #[test_case("1234567891234", false)]
    #[test_case("44444444", false)]
    #[test_case("458123648745", false)]
    fn test_checksum(data: &str, exp: bool) {
        let digits = DigitString::parse(data).unwrap();
        assert_eq!(checksum_matches(&digits), exp);
    }

    #[test]
    fn test_encode_digit() {
        let to_str = |bars: [bool; 7]| bars.iter().map(|&b| if b { '1' } else { '0' }).collect::<String>();
        assert_eq!(to_str(encode_digit(4, EncodingSet::Right)), "1011100");
        assert_eq!(to_str(encode_digit(4, EncodingSet::Left(0))), "0100011");
        assert_eq!(to_str(encode_digit(4, EncodingSet::Left(1))), "0011101");
    }

    #[test]
    fn test_left_and_right_sides() {
        assert_eq!(
            encode_left_side(4, &[1, 0, 1, 4, 5, 0]).to_string(),
            "001100101001110011001010001101110010100111"
        );
        assert_eq!(
            encode_right_side(&[0, 0, 4, 4, 7, 4]).to_string(),
            "111001011100101011100101110010001001011100"
        );
    }

    #[test]
    fn test_ean13_end_to_end() {
        let barcode = EANBuilder::new("4101450004474")
            .unit_width(2)
            .bar_height(50)
            .notch_height(10)
            .border(8)
            .reserve_text(true)
            .build()
            .unwrap();

        let raster = barcode.raster();
        assert_eq!(raster.width(), 95 * 2 + 16);
        assert_eq!(raster.height(), 50 + 16 + 16);

        // First bar row mirrors the symbol, each bit doubled
        let bits = barcode.symbol().bits();
        for (i, bit) in bits.iter().enumerate() {
            let x = 8 + 2 * i as u32;
            assert_eq!(raster.get(x, 8), bit);
            assert_eq!(raster.get(x + 1, 8), bit);
        }

        // Notch row keeps the middle guard, drops data bars
        let notch_y = 8 + 50;
        let mid_x = 8 + 2 * 46;
        assert!(raster.get(mid_x, notch_y));
        assert!(!raster.get(8 + 2 * 5, notch_y));
        assert!(raster.get(8 + 2 * 5, notch_y - 1));

        // Below the notch only the remaining text band
        assert!((0..raster.width()).all(|x| !raster.get(x, notch_y + 10)));
    }

    #[test]
    fn test_pbm_output() {
        let barcode = EANBuilder::new("0000000000000").bar_height(3).build().unwrap();
        let pbm = barcode.to_pbm();
        let mut lines = pbm.lines();
        assert_eq!(lines.next(), Some("P1"));
        assert_eq!(lines.next(), Some("# EAN-13 0000000000000"));
        assert_eq!(lines.next(), Some("95 3"));

        let exp_row = barcode.symbol().bits().to_string();
        let rows = lines.collect::<Vec<_>>();
        assert_eq!(rows, vec![exp_row.as_str(); 3]);
        assert!(pbm.ends_with('\n'));
    }

    #[test]
    fn test_write_pbm() {
        let barcode = EANBuilder::new("96385074").bar_height(2).build().unwrap();
        let mut out = Vec::new();
        barcode.raster().write_pbm(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), barcode.to_pbm());
    }

    #[test]
    fn test_checksum_mismatch_offers_correction() {
        let err = EANBuilder::new("458123648745").build().unwrap_err();
        let corrected = err.corrected().unwrap();
        assert_eq!(corrected.to_string(), "458123648744");
        assert!(checksum_matches(&corrected));
    }

    #[test]
    fn test_parallel_encoding_matches_sequential() {
        let data = (0..200u64)
            .map(|n| {
                let raw = format!("{:013}", n * 7_919_113);
                correct_checksum(&DigitString::parse(&raw).unwrap())
            })
            .collect::<Vec<_>>();
        let config = RasterConfig::default().unit_width(2).notch_height(5);

        let encode = |digits: &DigitString| {
            let symbol = assemble(digits, digits.format()).unwrap();
            build_raster(&symbol, &config).unwrap()
        };

        let sequential = data.iter().map(encode).collect::<Vec<_>>();
        let parallel = data.par_iter().map(encode).collect::<Vec<_>>();
        assert_eq!(sequential, parallel);
    }
}
