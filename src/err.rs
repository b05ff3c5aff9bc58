use crate::Form;
use std::io;
use thiserror::Error;

/// Represents possible errors returned from ocinum
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Text (or a decomposed triple) that cannot be encoded as a number
    #[error("cannot parse {input:?} as a number: {kind}")]
    Parse { input: String, kind: ParseErrorKind },
    /// Bytes that are not a valid packed number
    #[error("invalid packed number {bytes:?}: {kind}")]
    Decode { bytes: Vec<u8>, kind: DecodeErrorKind },
    /// Decimal form that the packed format cannot represent
    #[error("{0:?} decimal form has no packed number representation")]
    UnsupportedForm(Form),
    /// Valid number that cannot be converted into the requested type
    #[error("{0}")]
    Interface(String),
}

/// Reason why the text was rejected by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("empty input")]
    Empty,
    #[error("unexpected character {0:?}")]
    InvalidChar(char),
    #[error("sign is only allowed as the first character")]
    MisplacedSign,
    #[error("more than one decimal point")]
    MultiplePoints,
    #[error("no digits")]
    NoDigits,
    #[error("coefficient digit {0} is not a decimal digit")]
    InvalidDigit(u8),
    #[error("more than {} significant digit pairs", crate::MAX_DIGIT_PAIRS)]
    TooManyDigits,
    #[error("exponent is too large")]
    Overflow,
    #[error("exponent is too small")]
    Underflow,
}

/// Reason why the packed bytes were rejected by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    #[error("empty buffer")]
    Empty,
    #[error("longer than {} bytes", crate::MAX_LEN)]
    TooLong,
    #[error("length byte {0} does not match the buffer")]
    BadLength(u8),
    #[error("zero has no mantissa")]
    ZeroWithMantissa,
    #[error("missing mantissa")]
    MissingMantissa,
    #[error("mantissa byte {byte} at {pos} is out of range")]
    InvalidDigitByte { pos: usize, byte: u8 },
    #[error("exponent byte {0} is out of range")]
    BadExponent(u8),
    #[error("negative number is not terminated")]
    MissingTerminator,
    #[error("mantissa has a leading or trailing zero digit pair")]
    NotCanonical,
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

impl Error {
    pub(crate) fn new(msg: &str) -> Self {
        Error::Interface( msg.to_owned() )
    }

    pub(crate) fn parse(input: &str, kind: ParseErrorKind) -> Self {
        tracing::debug!(input, %kind, "number text rejected");
        Error::Parse { input: input.to_owned(), kind }
    }

    pub(crate) fn decode(bytes: &[u8], kind: DecodeErrorKind) -> Self {
        tracing::debug!(?bytes, %kind, "packed number rejected");
        Error::Decode { bytes: bytes.to_vec(), kind }
    }

    /// Returns the parse failure reason if this is a parse error
    pub fn parse_kind(&self) -> Option<ParseErrorKind> {
        match self {
            Error::Parse { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns the decode failure reason if this is a decode error
    pub fn decode_kind(&self) -> Option<DecodeErrorKind> {
        match self {
            Error::Decode { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
