//! Conversion between Oracle Numbers and `rust_decimal::Decimal`

use rust_decimal::Decimal;
use crate::{ Result, Form, err::Error };
use super::Number;

/// Decimal digits of `u128::MAX`
const MAX_MANTISSA_DIGITS : usize = 39;

impl TryFrom<&Number> for Decimal {
    type Error = Error;

    fn try_from(num: &Number) -> Result<Self> {
        let mut buf = Vec::with_capacity(MAX_MANTISSA_DIGITS + 1);
        let dec = num.decompose(&mut buf);
        let overflow = || Error::new("number cannot be represented as Decimal");
        let mut mantissa = 0i128;
        for &digit in dec.coefficient {
            mantissa = mantissa.checked_mul(10)
                .and_then(|val| val.checked_add(digit as i128))
                .ok_or_else(overflow)?;
        }
        let mut scale = 0u32;
        if dec.exponent > 0 {
            for _ in 0..dec.exponent {
                mantissa = mantissa.checked_mul(10).ok_or_else(overflow)?;
            }
        } else {
            scale = dec.exponent.unsigned_abs();
        }
        if dec.negative {
            mantissa = -mantissa;
        }
        Decimal::try_from_i128_with_scale(mantissa, scale).map_err(|err| Error::Interface(err.to_string()))
    }
}

impl TryFrom<Number> for Decimal {
    type Error = Error;

    fn try_from(num: Number) -> Result<Self> {
        Decimal::try_from(&num)
    }
}

impl TryFrom<Decimal> for Number {
    type Error = Error;

    fn try_from(val: Decimal) -> Result<Self> {
        let mantissa = val.mantissa();
        let mut digits = [0u8; MAX_MANTISSA_DIGITS];
        let mut idx = digits.len();
        let mut rest = mantissa.unsigned_abs();
        while rest != 0 {
            idx -= 1;
            digits[idx] = (rest % 10) as u8;
            rest /= 10;
        }
        Number::from_parts(Form::Finite, mantissa < 0, &digits[idx..], -(val.scale() as i32))
    }
}
