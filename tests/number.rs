use ocinum::*;

const VECTORS : &[(&str, &[u8])] = &[
    ("0", &[128]),
    ("1", &[193, 2]),
    ("10", &[193, 11]),
    ("100", &[194, 2]),
    ("1000", &[194, 11]),
    ("10000", &[195, 2]),
    ("123", &[194, 2, 24]),
    ("12.3", &[193, 13, 31]),
    ("1.23", &[193, 2, 24]),
    ("12345", &[195, 2, 24, 46]),
    ("1234.5", &[194, 13, 35, 51]),
    ("123.45", &[194, 2, 24, 46]),
    ("12.345", &[193, 13, 35, 51]),
    ("1.2345", &[193, 2, 24, 46]),
    ("0.12345", &[192, 13, 35, 51]),
    ("0.012345", &[192, 2, 24, 46]),
    ("-1", &[62, 100, 102]),
    ("12", &[193, 13]),
    ("20", &[193, 21]),
    ("-12", &[62, 89, 102]),
    ("-123", &[61, 100, 78, 102]),
    ("123456789012345678901234567890123456789", &[212, 2, 24, 46, 68, 90, 2, 24, 46, 68, 90, 2, 24, 46, 68, 90, 2, 24, 46, 68, 90]),
    ("-123456789012345678901234567890123456789", &[43, 100, 78, 56, 34, 12, 100, 78, 56, 34, 12, 100, 78, 56, 34, 12, 100, 78, 56, 34, 12]),
    ("-1000", &[61, 91, 102]),
    ("0.1", &[192, 11]),
    ("-0.1", &[63, 91, 102]),
    ("0.01", &[192, 2]),
    ("-0.01", &[63, 100, 102]),
    ("0.12", &[192, 13]),
    ("-0.12", &[63, 89, 102]),
    ("0.012", &[192, 2, 21]),
    ("-0.012", &[63, 100, 81, 102]),
    ("66000", &[195, 7, 61]),
    ("3999900", &[196, 4, 100, 100]),
    ("509090007050906000600", &[203, 6, 10, 10, 1, 8, 6, 10, 7, 1, 7]),
    ("600066000", &[197, 7, 1, 7, 61]),
    ("-11166232058078251449.063252477", &[53, 90, 85, 39, 69, 96, 21, 23, 76, 87, 52, 95, 69, 49, 54, 31, 102]),
    ("-9402004353104906.474368202171", &[55, 7, 99, 101, 58, 48, 91, 52, 95, 54, 58, 33, 81, 80, 30, 102]),
    ("-23452342342423423423423.1234567890123456", &[51, 99, 67, 49, 67, 78, 59, 59, 67, 78, 59, 67, 78, 89, 67, 45, 23, 11, 89, 67, 45]),
    ("99", &[193, 100]),
    ("-99", &[62, 2, 102]),
    ("0.99", &[192, 100]),
    ("9999999999999999999999999999999999999999", &[212, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100, 100]),
    ("-9999999999999999999999999999999999999999", &[43, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2]),
];

const GOOD : &[&str] = &[
    "9", "2000000000000000000", "536743164", "20000", "0", "200000000",
    "-9402004353104906.474368202171", "74", "2000000", "20", "200",
    "20000000000000000", "94", "435310490647436820217", "53", "2", "74",
    "2000000000000000000000000000000000", "-129", "1", "6 ", "907050906", "9\u{3000}",
    "66000", "142108547152020037174224853515625", " 2 ", "745580596923828125", "600",
    "6005000000000000000000000000000000000", "0 ", "3444089209850062616169452667236328125",
    "-102", "4 ", " 9 ", "6000000", "60705090600066000", "6000000000", "7810000000000000000",
    "-506210721134567", "-2", "390625",
    "5\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}",
    "90707050906050906", "6 ", " 4", "6058068096923806600", "9090906", " 0",
    "600055756156289135105907917022705078125", "9\u{3000}\u{3000}", "600596923806600",
    "-11166232058465661287307739257812547", "2 ", "60000000000000000000000000000000006",
    "0\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}", "39900",
    "7450580596923828125", "3390909062", "-11166232058078251449.063252477", "0.6", "390",
];

const BAD : &[&str] = &[
    "-", "", " ", "  ", "\u{3000}", r#"""""""#, "'\"", "5\"", r#"5""""""""""#, "-e", "-.-", "n", " o ", "o ", "<", "@", " @", "@ @",
    "Ă Ă Ă Ă Ă ", "ăăăă", "đľ0", "ÓşÓşÓş", ")It¸", "čy", "˙ ˝",
    "too few operands for _ormat ",
    "9u 536743164˙˙˙",
    "536743164˙˙˙",
    "054175252231364715157010273365424.-0xaC4bc3bBFEE733c17Cb23c7B4E9",
    "-0xbafD8aae3Df5b9Bef1530xCc8EBf357FEdaCfCF4CdeBEEbaE47fb5Bc691.-0xd-0534420.-8953",
    "0123456789abcdefghijklmnopqrstuvwxy@<M($Fz@",
    "1.2.3", "+1", "1e10", "1,000", "0x10", "∞", "NaN", "١٢", "12-",
];

#[test]
fn encode_vectors() -> Result<()> {
    let mut buf = Vec::new();
    for &(txt, bytes) in VECTORS {
        buf.clear();
        assert_eq!(encode(txt, &mut buf)?, bytes, "{}", txt);
        assert_eq!(Number::from_string(txt)?.as_bytes(), bytes, "{}", txt);
    }
    Ok(())
}

#[test]
fn decode_vectors() -> Result<()> {
    let mut buf = Vec::new();
    for &(txt, bytes) in VECTORS {
        buf.clear();
        assert_eq!(decode(bytes, &mut buf)?, txt.as_bytes(), "{:?}", bytes);
        assert_eq!(Number::from_bytes(bytes)?.to_string(), txt);
    }
    Ok(())
}

#[test]
fn set_str_overwrites() -> Result<()> {
    let mut num = Number::zero();
    for &(txt, bytes) in VECTORS {
        num.set_str(txt)?;
        assert_eq!(num.as_bytes(), bytes, "{}", txt);
    }
    Ok(())
}

#[test]
fn good_text() -> Result<()> {
    for &txt in GOOD {
        let num = Number::from_string(txt)?;
        let trimmed = txt.trim_matches(char::is_whitespace);
        assert_eq!(num.to_string(), trimmed, "{:?}", txt);
    }
    Ok(())
}

#[test]
fn bad_text() {
    let mut buf = Vec::new();
    for &txt in BAD {
        let res = encode(txt, &mut buf);
        assert!(matches!(res, Err(Error::Parse { .. })), "{:?} was accepted", txt);
        assert!(buf.is_empty());
        assert!(Number::from_string(txt).is_err());
    }
}

#[test]
fn decompose_round_trip() -> Result<()> {
    let cases = [
        "0", "1", "-2", "3.14", "-3.14", "1000", "3.456789", "0.01", "-0.09", "-0.89", "0.0000000001", "1.0000000002",
        "12345678901234567890123456789012345678",
        "120056789012005678901200567890100456780",
    ];
    for txt in cases {
        let num = Number::from_string(txt)?;
        let mut digits = Vec::with_capacity(40);
        let dec = decompose(num.as_bytes(), &mut digits)?;
        assert_eq!(dec.form, Form::Finite);
        assert_eq!(dec.negative, txt.starts_with('-'), "{}", txt);

        let mut buf = Vec::new();
        let bytes = compose(dec.form, dec.negative, dec.coefficient, dec.exponent, &mut buf)?;
        assert_eq!(bytes, num.as_bytes(), "{}", txt);
        assert_eq!(Number::compose(&dec)?.to_string(), txt);
    }
    Ok(())
}

#[test]
fn decompose_values() -> Result<()> {
    let mut buf = Vec::new();
    let num = Number::from_string("120056789012005678901200567890100456780")?;
    let dec = num.decompose(&mut buf);
    assert_eq!(dec.coefficient, &[1,2,0,0,5,6,7,8,9,0,1,2,0,0,5,6,7,8,9,0,1,2,0,0,5,6,7,8,9,0,1,0,0,4,5,6,7,8]);
    assert_eq!(dec.exponent, 1);

    buf.clear();
    let num = Number::from_string("1.0000000002")?;
    let dec = num.decompose(&mut buf);
    assert_eq!(dec.coefficient, &[1,0,0,0,0,0,0,0,0,0,2]);
    assert_eq!(dec.exponent, -10);
    Ok(())
}

#[test]
fn truncated_buffers() {
    let mut buf = Vec::new();
    for &(_, bytes) in VECTORS {
        if bytes.len() < 2 {
            continue;
        }
        for len in 0..bytes.len() {
            let part = &bytes[..len];
            // a shorter prefix of a positive number can itself be valid
            if let Ok(num) = Number::from_bytes(part) {
                assert!(len > 1 && part[0] > ZERO, "{:?}", part);
                buf.clear();
                assert_eq!(decode(part, &mut buf).unwrap(), num.to_string().as_bytes());
            } else {
                buf.clear();
                assert!(decode(part, &mut buf).is_err(), "{:?}", part);
                assert!(buf.is_empty());
            }
        }
    }
}

#[test]
fn garbage_buffers() {
    let cases : [&[u8]; 10] = [
        &[],
        &[0],
        &[255],
        &[128, 128],
        &[193, 0],
        &[193, 101],
        &[193, 2, 1],
        &[62, 102, 102],
        &[62, 101, 102],
        &[193, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2],
    ];
    let mut buf = Vec::new();
    for bytes in cases {
        assert!(matches!(decode(bytes, &mut buf), Err(Error::Decode { .. })), "{:?}", bytes);
        assert!(decompose(bytes, &mut buf).is_err());
        assert!(Number::try_from(bytes).is_err());
    }
    assert!(buf.is_empty());
}

#[test]
fn ordering_matches_values() -> Result<()> {
    let mut nums = VECTORS.iter().map(|(txt, _)| Number::from_string(txt)).collect::<Result<Vec<_>>>()?;
    nums.sort();
    nums.dedup();
    // the 40 digit extremes do not fit i128
    let mut ints : Vec<i128> = nums.iter().filter(|num| num.is_int()).filter_map(|num| num.to_int().ok()).collect();
    let sorted = ints.clone();
    ints.sort();
    assert_eq!(ints, sorted);
    assert_eq!(nums.first().map(|num| num.to_string()), Some("-9999999999999999999999999999999999999999".to_string()));
    assert_eq!(nums.last().map(|num| num.to_string()), Some("9999999999999999999999999999999999999999".to_string()));
    Ok(())
}
