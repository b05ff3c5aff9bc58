//! Convertion between Oracle Numbers and Rust integers

use crate::{ Result, err::Error, codec::{ Layout, MAX_DIGIT_PAIRS } };
use super::Number;

fn u128_into_number(mut val: u128) -> Number {
    if val == 0 {
        return Number::zero();
    }
    let mut bytes = [0u8; MAX_DIGIT_PAIRS + 1];
    let mut idx = bytes.len();
    let mut exp = 192u8;
    while val != 0 {
        let digit = (val % 100) as u8;
        if digit > 0 || idx < bytes.len() {
            idx -= 1;
            bytes[idx] = digit + 1;
        }
        val /= 100;
        exp += 1;
    }
    idx -= 1;
    bytes[idx] = exp;
    Number::from_packed(&bytes[idx..])
}

fn i128_into_number(val: i128) -> Number {
    let num = u128_into_number(val.unsigned_abs());
    if val < 0 { num.neg() } else { num }
}

/// Returns the sign and the magnitude of the number rounded to an integer
fn magnitude(num: &Number) -> Result<(bool, u128)> {
    let layout = match Layout::of_valid(num.as_bytes()) {
        None => return Ok( (false, 0) ),
        Some(layout) => layout,
    };
    let num_pairs = layout.mantissa.len();
    let int_pairs = layout.exp + 1;
    let mut val = 0u128;
    for idx in 0..int_pairs.max(0) as usize {
        let digit = if idx < num_pairs { layout.pair_at(idx) } else { 0 };
        val = val.checked_mul(100)
            .and_then(|val| val.checked_add(digit as u128))
            .ok_or_else(|| Error::new("overflow"))?;
    }
    if int_pairs >= 0 && (int_pairs as usize) < num_pairs && layout.pair_at(int_pairs as usize) >= 50 {
        val = val.checked_add(1).ok_or_else(|| Error::new("overflow"))?;
    }
    Ok( (layout.negative, val) )
}

fn u128_from_number(num: &Number) -> Result<u128> {
    match magnitude(num)? {
        (true, _) => Err( Error::new("cannot convert negative number into an unsigned integer") ),
        (false, val) => Ok( val ),
    }
}

fn i128_from_number(num: &Number) -> Result<i128> {
    let (negative, val) = magnitude(num)?;
    if negative && val == 1u128 << 127 {
        Ok( i128::MIN )
    } else {
        let val = i128::try_from(val).map_err(|_| Error::new("overflow"))?;
        Ok( if negative { -val } else { val } )
    }
}

/// Trait for types that can be converted into `Number`
pub trait IntoNumber : Sized + Copy {
    fn into_number(self) -> Number;
}

impl IntoNumber for i128 {
    fn into_number(self) -> Number {
        i128_into_number(self)
    }
}

impl IntoNumber for u128 {
    fn into_number(self) -> Number {
        u128_into_number(self)
    }
}

macro_rules! impl_int_into_num {
    ($($t:ty),+ => $dt:ty) => {
        $(
            impl IntoNumber for $t {
                fn into_number(self) -> Number {
                    let val = self as $dt;
                    val.into_number()
                }
            }
        )+
    };
}

impl_int_into_num!(i8, i16, i32, i64, isize => i128);
impl_int_into_num!(u8, u16, u32, u64, usize => u128);

/// Trait for types that can be created from `Number`
pub trait FromNumber : Sized + Copy {
    fn from_number(num: &Number) -> Result<Self>;
}

impl FromNumber for i128 {
    fn from_number(num: &Number) -> Result<Self> {
        i128_from_number(num)
    }
}

impl FromNumber for u128 {
    fn from_number(num: &Number) -> Result<Self> {
        u128_from_number(num)
    }
}

macro_rules! impl_int_from_num {
    ($($t:ty),+ => $f:ident) => {
        $(
            impl FromNumber for $t {
                fn from_number(num: &Number) -> Result<Self> {
                    let val = $f(num)?;
                    <$t>::try_from(val).map_err(|_| Error::new("overflow"))
                }
            }
        )+
    };
}

impl_int_from_num!(i8, i16, i32, i64, isize => i128_from_number);
impl_int_from_num!(u8, u16, u32, u64, usize => u128_from_number);

/// Marker trait for integer numbers
pub trait Integer : IntoNumber + FromNumber {}

macro_rules! impl_int {
    ($($t:ty),+) => {
        $(
            impl Integer for $t {}
        )+
    };
}

impl_int!(i8, i16, i32, i64, i128, isize);
impl_int!(u8, u16, u32, u64, u128, usize);
