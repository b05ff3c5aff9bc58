//! Packed number to decimal text

use super::Layout;
use crate::Result;

/**
    Decodes a packed number and appends its decimal text to the buffer.

    The text has a leading `-` for negative numbers, at least one digit before
    the decimal point and no trailing zeros after it. The decimal point is
    omitted for integers. Returns the appended text. Nothing is appended when
    the bytes are not a valid packed number.

    # Example
    ```
    let mut buf = Vec::new();
    let txt = ocinum::decode(&[63, 100, 81, 102], &mut buf)?;
    assert_eq!(txt, b"-0.012");
    # Ok::<(),ocinum::Error>(())
    ```
*/
pub fn decode<'b>(bytes: &[u8], buf: &'b mut Vec<u8>) -> Result<&'b [u8]> {
    let start = buf.len();
    match Layout::new(bytes)? {
        None => buf.push(b'0'),
        Some(layout) => write_text(&layout, buf),
    }
    tracing::trace!(?bytes, txt = %String::from_utf8_lossy(&buf[start..]), "decoded number");
    Ok( &buf[start..] )
}

pub(crate) fn write_text(layout: &Layout, buf: &mut Vec<u8>) {
    let mut digits = [0u8; super::MAX_DIGIT_PAIRS * 2];
    let mut len = 0;
    for digit in layout.digits() {
        digits[len] = digit;
        len += 1;
    }
    let mut point = layout.point();
    let mut digits = &digits[..len];
    // canonical mantissa has non-zero first and last pairs, so only one
    // digit can be an insignificant zero on either end
    if digits[0] == 0 {
        digits = &digits[1..];
        point -= 1;
    }
    if digits[digits.len() - 1] == 0 && digits.len() as i32 > point {
        digits = &digits[..digits.len() - 1];
    }

    if layout.negative {
        buf.push(b'-');
    }
    let ascii = |d: &u8| b'0' + d;
    if point <= 0 {
        buf.extend_from_slice(b"0.");
        buf.extend(std::iter::repeat(b'0').take(-point as usize));
        buf.extend(digits.iter().map(ascii));
    } else if point as usize >= digits.len() {
        buf.extend(digits.iter().map(ascii));
        buf.extend(std::iter::repeat(b'0').take(point as usize - digits.len()));
    } else {
        let (int, frac) = digits.split_at(point as usize);
        buf.extend(int.iter().map(ascii));
        buf.push(b'.');
        buf.extend(frac.iter().map(ascii));
    }
}
