//! Oracle NUMBER value: NUMBER, NUMERIC, INT, SHORTINT, REAL, DOUBLE PRECISION, FLOAT and DECIMAL.

mod convert;
#[cfg(feature="rust_decimal")]
#[cfg_attr(docsrs, doc(cfg(feature="rust_decimal")))]
mod decimal;
#[cfg(feature="serde")]
#[cfg_attr(docsrs, doc(cfg(feature="serde")))]
mod serialize;

pub use convert::{ Integer, IntoNumber, FromNumber };

use crate::{ Result, Parser, Form, Decomposed, err::{ Error, DecodeErrorKind }, codec::{ self, Layout, MAX_LEN, MAX_DIGIT_PAIRS, NEG_TERMINATOR, ZERO } };
use std::{ fmt, cmp::Ordering, hash::{ Hash, Hasher }, str::FromStr };

/// Size of the OCI number struct: length byte followed by the packed number
pub const OCI_NUMBER_SIZE : usize = MAX_LEN + 1;

/**
    Represents OTS types NUMBER, NUMERIC, INT, SHORTINT, REAL, DOUBLE PRECISION, FLOAT and DECIMAL.

    The number is stored exactly as OCI's `OCINumber`: the first byte is the length of the
    packed number that follows it.
*/
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Number {
    bytes: [u8; OCI_NUMBER_SIZE],
}

impl Number {
    /**
        Creates a new Number that is equal to zero.

        # Example
        ```
        use ocinum::Number;

        let num = Number::zero();

        assert!(num.is_zero());
        assert_eq!(num.as_bytes(), &[128]);
        ```
    */
    pub fn zero() -> Self {
        let mut bytes = [0u8; OCI_NUMBER_SIZE];
        bytes[0] = 1;
        bytes[1] = ZERO;
        Self { bytes }
    }

    /// Wraps packed bytes that are known to be valid
    pub(crate) fn from_packed(packed: &[u8]) -> Self {
        let mut bytes = [0u8; OCI_NUMBER_SIZE];
        bytes[0] = packed.len() as u8;
        bytes[1..=packed.len()].copy_from_slice(packed);
        Self { bytes }
    }

    /**
        Creates a new Number from the packed (wire format) bytes.

        # Example
        ```
        use ocinum::Number;

        let num = Number::from_bytes(&[61, 100, 78, 102])?;
        assert_eq!(num.to_string(), "-123");

        assert!(Number::from_bytes(&[61, 100, 78]).is_err());
        # Ok::<(),ocinum::Error>(())
        ```
    */
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Layout::new(bytes)?;
        Ok( Self::from_packed(bytes) )
    }

    /**
        Creates a new Number from the content of the OCI number struct, such as
        the one filled in by the native client library as an output variable.

        # Example
        ```
        use ocinum::Number;

        let mut oci = [0u8; 22];
        oci[..3].copy_from_slice(&[2, 193, 43]);
        let num = Number::from_oci_bytes(&oci)?;
        assert_eq!(num.to_string(), "42");
        # Ok::<(),ocinum::Error>(())
        ```
    */
    pub fn from_oci_bytes(oci: &[u8; OCI_NUMBER_SIZE]) -> Result<Self> {
        let len = oci[0] as usize;
        if len == 0 || len > MAX_LEN {
            return Err( Error::decode(oci, DecodeErrorKind::BadLength(oci[0])) );
        }
        Self::from_bytes(&oci[1..=len])
    }

    /**
        Creates a new Number from a string.

        Surrounding whitespace is ignored. Use `Parser` to parse with a different set
        of trimmed characters.

        # Example
        ```
        use ocinum::Number;

        let num = Number::from_string(" 6.62607004 ")?;
        assert_eq!(num.to_string(), "6.62607004");
        # Ok::<(),ocinum::Error>(())
        ```
    */
    pub fn from_string(txt: &str) -> Result<Self> {
        Parser::new().parse(txt)
    }

    /**
        Creates a new Number from an integer.

        # Example
        ```
        use ocinum::Number;

        let num = Number::from_int(42);

        assert!(num.is_int());
        assert_eq!(num.to_int::<i32>()?, 42);
        # Ok::<(),ocinum::Error>(())
        ```
    */
    pub fn from_int<T:Integer>(val: T) -> Self {
        val.into_number()
    }

    /**
        Creates a new Number from its decomposed representation.

        # Example
        ```
        use ocinum::{ Number, Form };

        let num = Number::from_parts(Form::Finite, true, &[3, 1, 4], -2)?;
        assert_eq!(num.to_string(), "-3.14");
        # Ok::<(),ocinum::Error>(())
        ```
    */
    pub fn from_parts(form: Form, negative: bool, coefficient: &[u8], exponent: i32) -> Result<Self> {
        let mut bytes = [0u8; MAX_LEN];
        let len = codec::decompose::compose_into(form, negative, coefficient, exponent, &mut bytes)?;
        Ok( Self::from_packed(&bytes[..len]) )
    }

    /// Creates a new Number from the decomposed number.
    pub fn compose(dec: &Decomposed) -> Result<Self> {
        Self::from_parts(dec.form, dec.negative, dec.coefficient, dec.exponent)
    }

    /**
        Replaces the value of this number with the one parsed from the text.
        The number is not changed if the text cannot be parsed.

        # Example
        ```
        use ocinum::Number;

        let mut num = Number::zero();
        num.set_str("1000")?;
        assert_eq!(num.as_bytes(), &[194, 11]);

        assert!(num.set_str("1,000").is_err());
        assert_eq!(num.as_bytes(), &[194, 11]);
        # Ok::<(),ocinum::Error>(())
        ```
    */
    pub fn set_str(&mut self, txt: &str) -> Result<()> {
        *self = Parser::new().parse(txt)?;
        Ok(())
    }

    /// Returns the packed (wire format) bytes of this number
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[1..=self.bytes[0] as usize]
    }

    /// Returns content of this number as the OCI number struct
    pub fn oci_bytes(&self) -> &[u8; OCI_NUMBER_SIZE] {
        &self.bytes
    }

    fn layout(&self) -> Option<Layout> {
        Layout::of_valid(self.as_bytes())
    }

    /**
        Decomposes this number into sign, coefficient digits and exponent.
        Digits are appended to the provided buffer.

        # Example
        ```
        use ocinum::{ Number, Form };

        let num = Number::from_string("-0.09")?;
        let mut buf = Vec::new();
        let dec = num.decompose(&mut buf);

        assert_eq!(dec.form, Form::Finite);
        assert!(dec.negative);
        assert_eq!(dec.coefficient, &[9]);
        assert_eq!(dec.exponent, -2);
        assert_eq!(Number::compose(&dec)?, num);
        # Ok::<(),ocinum::Error>(())
        ```
    */
    pub fn decompose<'b>(&self, buf: &'b mut Vec<u8>) -> Decomposed<'b> {
        codec::decompose::decompose_layout(self.layout().as_ref(), buf)
    }

    /**
        Converts this Number into an integer (u128, u64, u32, u16, u8, i128, i64, i32, i16, i8).
        The fractional part is rounded half away from zero.

        # Example
        ```
        use ocinum::Number;

        let num = Number::from_string("3.1415926535897932384626433832795028842")?;
        assert_eq!(num.to_int::<i32>()?, 3);

        let num = Number::from_string("-2.5")?;
        assert_eq!(num.to_int::<i64>()?, -3);
        assert!(num.to_int::<u64>().is_err());
        # Ok::<(),ocinum::Error>(())
        ```
    */
    pub fn to_int<T:Integer>(&self) -> Result<T> {
        <T>::from_number(self)
    }

    /// Tests if this number is equal to zero
    pub fn is_zero(&self) -> bool {
        self.bytes[1] == ZERO
    }

    /**
        Tests if this number is an integer

        # Example
        ```
        use ocinum::Number;

        assert!(Number::from_string("1200")?.is_int());
        assert!(Number::zero().is_int());
        assert!(!Number::from_string("12.5")?.is_int());
        assert!(!Number::from_string("-0.5")?.is_int());
        # Ok::<(),ocinum::Error>(())
        ```
    */
    pub fn is_int(&self) -> bool {
        match self.layout() {
            None => true,
            Some(layout) => {
                let point = layout.point();
                point > 0 && layout.digits().skip(point as usize).all(|d| d == 0)
            }
        }
    }

    /**
        Returns the sign of this number as `Ordering` relative to zero

        # Example
        ```
        use ocinum::Number;
        use std::cmp::Ordering;

        assert_eq!(Number::from_int(-7).sign(), Ordering::Less);
        assert_eq!(Number::zero().sign(), Ordering::Equal);
        assert_eq!(Number::from_int(7).sign(), Ordering::Greater);
        ```
    */
    pub fn sign(&self) -> Ordering {
        self.bytes[1].cmp(&ZERO)
    }

    /**
        Returns negated value of this number

        # Example
        ```
        use ocinum::Number;

        let num = Number::from_string("12.3")?;
        let neg = num.neg();

        assert_eq!(neg.as_bytes(), &[62, 89, 71, 102]);
        assert_eq!(neg.neg(), num);
        # Ok::<(),ocinum::Error>(())
        ```
    */
    pub fn neg(&self) -> Self {
        let layout = match self.layout() {
            None => return *self,
            Some(layout) => layout,
        };
        let mut bytes = [0u8; MAX_LEN];
        // 193 + e and 62 - e, as well as pair + 1 and 101 - pair, add up to constants
        bytes[0] = 255 - self.bytes[1];
        for (i, &byte) in layout.mantissa.iter().enumerate() {
            bytes[i + 1] = 102 - byte;
        }
        let mut len = layout.mantissa.len() + 1;
        if !layout.negative && layout.mantissa.len() < MAX_DIGIT_PAIRS {
            bytes[len] = NEG_TERMINATOR;
            len += 1;
        }
        Self::from_packed(&bytes[..len])
    }

    /// Returns the absolute value of this number
    pub fn abs(&self) -> Self {
        if self.sign() == Ordering::Less { self.neg() } else { *self }
    }

    /**
        Compares two numbers.

        Canonical packed numbers order the same way their values do, so this is
        a byte-wise comparison.

        # Example
        ```
        use ocinum::Number;
        use std::cmp::Ordering;

        let a = Number::from_string("-1")?;
        let b = Number::from_string("-1.01")?;

        assert_eq!(a.compare(&b), Ordering::Greater);
        assert!(b < Number::zero());
        # Ok::<(),ocinum::Error>(())
        ```
    */
    pub fn compare(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }

    /// Returns the size of the OCI number struct
    pub fn size(&self) -> usize {
        std::mem::size_of::<Number>()
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(txt: &str) -> Result<Self> {
        Self::from_string(txt)
    }
}

impl TryFrom<&[u8]> for Number {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut txt = Vec::with_capacity(48);
        match self.layout() {
            None => txt.push(b'0'),
            Some(layout) => codec::print::write_text(&layout, &mut txt),
        }
        // the printer only emits ASCII
        f.pad(&String::from_utf8_lossy(&txt))
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({})", self)
    }
}
