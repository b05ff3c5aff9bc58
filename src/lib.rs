#![cfg_attr(not(doctest), doc=include_str!("../README.md"))]

#![cfg_attr(docsrs, feature(doc_cfg))]

mod err;
mod codec;
mod number;

pub use err::{ Error, ParseErrorKind, DecodeErrorKind };
pub use codec::{ encode, decode, compose, decompose, Decomposed, Form, Parser, TrimSet, MAX_LEN, MAX_DIGIT_PAIRS, ZERO, NEG_TERMINATOR };
pub use number::{ Number, Integer, IntoNumber, FromNumber, OCI_NUMBER_SIZE };

pub type Result<T> = std::result::Result<T, Error>;
