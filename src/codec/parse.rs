//! Decimal text to packed number

use super::{ pack, MAX_LEN };
use crate::{ Result, err::{ Error, ParseErrorKind } };

/// Characters that are trimmed from both ends of the number text before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrimSet {
    /// ASCII whitespace only
    Ascii,
    /// Unicode `White_Space`, which includes the ideographic (U+3000) and
    /// other wide spaces that show up as padding in source data
    Unicode,
    /// Explicit list of characters
    Chars(Vec<char>),
}

impl Default for TrimSet {
    fn default() -> Self {
        TrimSet::Unicode
    }
}

impl TrimSet {
    /// Tests if the character is trimmed
    pub fn contains(&self, c: char) -> bool {
        match self {
            TrimSet::Ascii => c.is_ascii_whitespace(),
            TrimSet::Unicode => c.is_whitespace(),
            TrimSet::Chars(chars) => chars.contains(&c),
        }
    }

    /// Returns the text without the leading and trailing characters of this set
    pub fn trim<'a>(&self, txt: &'a str) -> &'a str {
        txt.trim_matches(|c| self.contains(c))
    }
}

/**
    Number text parser configuration.

    # Example
    ```
    use ocinum::{ Parser, TrimSet };

    let parser = Parser::with_trim(TrimSet::Ascii);
    let num = parser.parse(" -12.30 ")?;
    assert_eq!(num.as_bytes(), &[62, 89, 71, 102]);

    assert!(parser.parse("12\u{3000}").is_err());
    assert!(Parser::new().parse("12\u{3000}").is_ok());
    # Ok::<(),ocinum::Error>(())
    ```
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parser {
    trim: TrimSet,
}

/// Sign and digits of the number text
struct Parsed {
    negative: bool,
    /// All digits, integer part followed by the fraction
    digits: Vec<u8>,
    /// Number of integer part digits
    int_len: usize,
}

impl Parser {
    /// Returns a parser that trims Unicode whitespace
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a parser that trims the specified characters
    pub fn with_trim(trim: TrimSet) -> Self {
        Self { trim }
    }

    /// Returns the set of characters this parser trims
    pub fn trim_set(&self) -> &TrimSet {
        &self.trim
    }

    /// Parses the text into a number
    pub fn parse(&self, txt: &str) -> Result<crate::Number> {
        let mut bytes = [0u8; MAX_LEN];
        let len = self.pack(txt, &mut bytes)?;
        Ok( crate::Number::from_packed(&bytes[..len]) )
    }

    /**
        Encodes the text and appends the packed number to the buffer. Returns
        the appended bytes. Nothing is appended if the text cannot be parsed.
    */
    pub fn encode<'b>(&self, txt: &str, buf: &'b mut Vec<u8>) -> Result<&'b [u8]> {
        let mut bytes = [0u8; MAX_LEN];
        let len = self.pack(txt, &mut bytes)?;
        let start = buf.len();
        buf.extend_from_slice(&bytes[..len]);
        Ok( &buf[start..] )
    }

    pub(crate) fn pack(&self, txt: &str, out: &mut [u8; MAX_LEN]) -> Result<usize> {
        let body = self.trim.trim(txt);
        let parsed = scan(body).map_err(|kind| Error::parse(txt, kind))?;
        let lead = parsed.digits.iter().position(|&d| d != 0).unwrap_or(parsed.digits.len());
        let point = parsed.int_len as i64 - lead as i64;
        let len = pack(parsed.negative, &parsed.digits[lead..], point, out).map_err(|kind| Error::parse(txt, kind))?;
        tracing::trace!(txt, bytes = ?&out[..len], "encoded number");
        Ok( len )
    }
}

fn scan(body: &str) -> std::result::Result<Parsed, ParseErrorKind> {
    if body.is_empty() {
        return Err( ParseErrorKind::Empty );
    }
    let (negative, unsigned) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body),
    };
    let mut digits = Vec::with_capacity(unsigned.len());
    let mut int_len = None;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits.push(c as u8 - b'0'),
            '.' if int_len.is_none() => int_len = Some(digits.len()),
            '.' => return Err( ParseErrorKind::MultiplePoints ),
            '-' => return Err( ParseErrorKind::MisplacedSign ),
            _ => return Err( ParseErrorKind::InvalidChar(c) ),
        }
    }
    if digits.is_empty() {
        return Err( ParseErrorKind::NoDigits );
    }
    let int_len = int_len.unwrap_or(digits.len());
    Ok( Parsed { negative, digits, int_len } )
}

/**
    Encodes decimal text into a packed number appended to the buffer.

    Surrounding Unicode whitespace is ignored. Returns the appended bytes.
    Nothing is appended when the text is not a number.

    # Example
    ```
    let mut buf = Vec::new();
    let num = ocinum::encode("-123", &mut buf)?;
    assert_eq!(num, &[61, 100, 78, 102]);
    # Ok::<(),ocinum::Error>(())
    ```
*/
pub fn encode<'b>(txt: &str, buf: &'b mut Vec<u8>) -> Result<&'b [u8]> {
    Parser::new().encode(txt, buf)
}
