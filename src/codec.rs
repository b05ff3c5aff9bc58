//! Oracle NUMBER packed decimal format.
//!
//! A number is stored as an exponent byte followed by up to 20 base-100 mantissa
//! digits (digit pairs):
//!
//! - `128` alone is zero
//! - positive numbers: exponent byte is `193 + e`, mantissa bytes are `pair + 1`
//! - negative numbers: exponent byte is `62 - e`, mantissa bytes are `101 - pair`,
//!   and unless the mantissa is full the number ends with `102`
//!
//! where `e` is the power of 100 of the most significant digit pair. The encoding
//! is canonical (no leading or trailing zero pairs), which makes the byte-wise
//! order of two encodings equal to the numeric order of their values.

mod parse;
pub(crate) mod print;
pub(crate) mod decompose;

pub use parse::{ encode, Parser, TrimSet };
pub use print::decode;
pub use decompose::{ compose, decompose, Decomposed, Form };

use crate::{ Result, err::{ Error, DecodeErrorKind, ParseErrorKind } };

/// Maximum number of bytes in a packed number (exponent byte and mantissa)
pub const MAX_LEN : usize = 21;
/// Maximum number of base-100 digits in the mantissa
pub const MAX_DIGIT_PAIRS : usize = 20;
/// Exponent byte of zero
pub const ZERO : u8 = 128;
/// Trailing byte of a negative number with a short mantissa
pub const NEG_TERMINATOR : u8 = 102;

const POS_EXP_BIAS : i32 = 193;
const NEG_EXP_BIAS : i32 = 62;
/// Exponent byte of the smallest negative magnitude. Negation maps an exponent
/// byte `b` to `255 - b`, so this mirrors the smallest positive byte `129`.
const MIN_NEG_EXP_BYTE : u8 = 126;

/// Validated view of a packed number.
pub(crate) struct Layout<'a> {
    pub negative: bool,
    /// Power of 100 of the first mantissa pair
    pub exp: i32,
    /// Encoded mantissa bytes, without the negative terminator
    pub mantissa: &'a [u8],
}

impl<'a> Layout<'a> {
    /// Returns `None` for zero
    pub fn new(bytes: &'a [u8]) -> Result<Option<Self>> {
        let (&exp_byte, rest) = bytes.split_first().ok_or_else(|| Error::decode(bytes, DecodeErrorKind::Empty))?;
        if bytes.len() > MAX_LEN {
            return Err( Error::decode(bytes, DecodeErrorKind::TooLong) );
        }
        if exp_byte == ZERO {
            return if rest.is_empty() {
                Ok( None )
            } else {
                Err( Error::decode(bytes, DecodeErrorKind::ZeroWithMantissa) )
            };
        }
        let negative = exp_byte < ZERO;
        if negative && exp_byte > MIN_NEG_EXP_BYTE {
            return Err( Error::decode(bytes, DecodeErrorKind::BadExponent(exp_byte)) );
        }
        let (exp, mantissa) = if negative {
            let mantissa = match rest.split_last() {
                Some((&NEG_TERMINATOR, mantissa)) => mantissa,
                _ if rest.len() == MAX_DIGIT_PAIRS => rest,
                _ if rest.is_empty() => return Err( Error::decode(bytes, DecodeErrorKind::MissingMantissa) ),
                _ => return Err( Error::decode(bytes, DecodeErrorKind::MissingTerminator) ),
            };
            (NEG_EXP_BIAS - exp_byte as i32, mantissa)
        } else {
            (exp_byte as i32 - POS_EXP_BIAS, rest)
        };
        if mantissa.is_empty() {
            return Err( Error::decode(bytes, DecodeErrorKind::MissingMantissa) );
        }
        let layout = Layout { negative, exp, mantissa };
        for (i, &byte) in mantissa.iter().enumerate() {
            if layout.pair(byte).is_none() {
                return Err( Error::decode(bytes, DecodeErrorKind::InvalidDigitByte { pos: i + 1, byte }) );
            }
        }
        if layout.pair_at(0) == 0 || layout.pair_at(mantissa.len() - 1) == 0 {
            return Err( Error::decode(bytes, DecodeErrorKind::NotCanonical) );
        }
        Ok( Some(layout) )
    }

    /// Returns layout of the bytes that have already been validated
    pub fn of_valid(bytes: &'a [u8]) -> Option<Self> {
        let (&exp_byte, rest) = bytes.split_first()?;
        if exp_byte == ZERO {
            None
        } else if exp_byte < ZERO {
            let mantissa = match rest.split_last() {
                Some((&NEG_TERMINATOR, mantissa)) => mantissa,
                _ => rest,
            };
            Some( Layout { negative: true, exp: NEG_EXP_BIAS - exp_byte as i32, mantissa } )
        } else {
            Some( Layout { negative: false, exp: exp_byte as i32 - POS_EXP_BIAS, mantissa: rest } )
        }
    }

    /// Decodes a mantissa byte into its 0..=99 digit pair
    fn pair(&self, byte: u8) -> Option<u8> {
        match (self.negative, byte) {
            (true, 2..=101) => Some(101 - byte),
            (false, 1..=100) => Some(byte - 1),
            _ => None,
        }
    }

    /// Digit pair at the index of a validated mantissa
    pub fn pair_at(&self, idx: usize) -> u8 {
        let byte = self.mantissa[idx];
        if self.negative { 101 - byte } else { byte - 1 }
    }

    /// Iterates over decimal digits of the mantissa, two per pair
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.mantissa.len()).flat_map(move |i| {
            let pair = self.pair_at(i);
            [pair / 10, pair % 10]
        })
    }

    /// Number of decimal digits before the decimal point when the mantissa digits
    /// are laid out as `0.d1d2...`. May be negative or exceed the digit count.
    pub fn point(&self) -> i32 {
        (self.exp + 1) * 2
    }
}

/// Packs significant decimal digits into the wire format.
///
/// The value is `0.d1d2d3... * 10^point`. `digits` must not have leading zeros,
/// trailing zeros are dropped. Empty digits pack as zero. Failures are reported as
/// the parse error kind, the caller knows the input to attach to it.
pub(crate) fn pack(negative: bool, digits: &[u8], point: i64, out: &mut [u8; MAX_LEN]) -> std::result::Result<usize, ParseErrorKind> {
    let end = digits.iter().rposition(|&d| d != 0).map_or(0, |pos| pos + 1);
    let digits = &digits[..end];
    if digits.is_empty() {
        out[0] = ZERO;
        return Ok( 1 );
    }
    // an odd point needs a zero in front of the first digit to align the pairs
    let pad = point.rem_euclid(2) as usize;
    let exp = (point + 1).div_euclid(2) - 1;
    let num_pairs = (digits.len() + pad + 1) / 2;
    if num_pairs > MAX_DIGIT_PAIRS {
        return Err( ParseErrorKind::TooManyDigits );
    }
    let exp_byte = if negative { NEG_EXP_BIAS as i64 - exp } else { POS_EXP_BIAS as i64 + exp };
    if exp > 62 {
        return Err( ParseErrorKind::Overflow );
    }
    if (negative && exp_byte > MIN_NEG_EXP_BYTE as i64) || (!negative && exp_byte <= ZERO as i64) {
        return Err( ParseErrorKind::Underflow );
    }
    out[0] = exp_byte as u8;

    let digit = |idx: usize| -> u8 {
        if idx < pad { 0 } else { digits.get(idx - pad).copied().unwrap_or(0) }
    };
    for i in 0..num_pairs {
        let pair = digit(i * 2) * 10 + digit(i * 2 + 1);
        out[i + 1] = if negative { 101 - pair } else { pair + 1 };
    }
    let mut len = num_pairs + 1;
    if negative && num_pairs < MAX_DIGIT_PAIRS {
        out[len] = NEG_TERMINATOR;
        len += 1;
    }
    Ok( len )
}
