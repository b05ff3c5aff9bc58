//! Conversion between packed numbers and the (form, sign, coefficient, exponent)
//! representation used by arbitrary precision decimal libraries.

use super::{ pack, Layout, MAX_LEN };
use crate::{ Result, err::{ Error, ParseErrorKind } };

/// Kind of decimal value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Form {
    Finite = 0,
    Infinite = 1,
    NaN = 2,
}

/// Number as `(-1)^negative * coefficient * 10^exponent`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposed<'a> {
    pub form: Form,
    pub negative: bool,
    /// Decimal digits (0 to 9), most significant first
    pub coefficient: &'a [u8],
    pub exponent: i32,
}

/**
    Decomposes a packed number. The coefficient digits are appended to the buffer.

    The coefficient has neither leading nor trailing zeros, except for zero
    itself, which is decomposed into a single `0` digit with zero exponent.

    # Example
    ```
    use ocinum::Form;

    let mut buf = Vec::new();
    let dec = ocinum::decompose(&[63, 100, 81, 102], &mut buf)?;
    assert_eq!(dec.form, Form::Finite);
    assert!(dec.negative);
    assert_eq!(dec.coefficient, &[1, 2]);
    assert_eq!(dec.exponent, -3);
    # Ok::<(),ocinum::Error>(())
    ```
*/
pub fn decompose<'b>(bytes: &[u8], buf: &'b mut Vec<u8>) -> Result<Decomposed<'b>> {
    let layout = Layout::new(bytes)?;
    Ok( decompose_layout(layout.as_ref(), buf) )
}

pub(crate) fn decompose_layout<'b>(layout: Option<&Layout>, buf: &'b mut Vec<u8>) -> Decomposed<'b> {
    let start = buf.len();
    let (negative, exponent) = match layout {
        None => {
            buf.push(0);
            (false, 0)
        }
        Some(layout) => {
            buf.extend(layout.digits().skip_while(|&d| d == 0));
            let mut exponent = layout.point() - layout.mantissa.len() as i32 * 2;
            if buf.last() == Some(&0) {
                buf.pop();
                exponent += 1;
            }
            (layout.negative, exponent)
        }
    };
    Decomposed { form: Form::Finite, negative, coefficient: &buf[start..], exponent }
}

/**
    Composes a packed number from its decomposed representation and appends
    it to the buffer. Returns the appended bytes.

    The result is canonical: leading and trailing zeros of the coefficient
    are insignificant and an all-zero coefficient produces zero whatever the
    sign. Nothing is appended on error.

    # Example
    ```
    use ocinum::Form;

    let mut buf = Vec::new();
    let num = ocinum::compose(Form::Finite, false, &[0, 1, 2, 3, 0], -2, &mut buf)?;
    assert_eq!(num, &[193, 13, 31]);

    assert!(ocinum::compose(Form::NaN, false, &[], 0, &mut buf).is_err());
    # Ok::<(),ocinum::Error>(())
    ```
*/
pub fn compose<'b>(form: Form, negative: bool, coefficient: &[u8], exponent: i32, buf: &'b mut Vec<u8>) -> Result<&'b [u8]> {
    let mut bytes = [0u8; MAX_LEN];
    let len = compose_into(form, negative, coefficient, exponent, &mut bytes)?;
    let start = buf.len();
    buf.extend_from_slice(&bytes[..len]);
    Ok( &buf[start..] )
}

pub(crate) fn compose_into(form: Form, negative: bool, coefficient: &[u8], exponent: i32, out: &mut [u8; MAX_LEN]) -> Result<usize> {
    if form != Form::Finite {
        tracing::debug!(?form, "decimal form rejected");
        return Err( Error::UnsupportedForm(form) );
    }
    let fail = |kind| Error::parse(&decomposed_text(negative, coefficient, exponent), kind);
    if let Some(&digit) = coefficient.iter().find(|&&d| d > 9) {
        return Err( fail(ParseErrorKind::InvalidDigit(digit)) );
    }
    let lead = coefficient.iter().position(|&d| d != 0).unwrap_or(coefficient.len());
    let digits = &coefficient[lead..];
    let point = digits.len() as i64 + exponent as i64;
    pack(negative, digits, point, out).map_err(fail)
}

/// Scientific notation of the decomposed number for error messages
fn decomposed_text(negative: bool, coefficient: &[u8], exponent: i32) -> String {
    let sign = if negative { "-" } else { "" };
    let digits : String = coefficient.iter().map(|&d| if d < 10 { char::from(b'0' + d) } else { '?' }).collect();
    format!("{}{}E{}", sign, digits, exponent)
}
