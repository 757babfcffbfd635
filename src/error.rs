//! Library and application errors

use std::io;

use miette::Diagnostic;
use thiserror::Error;

use crate::convert::MAX_LINE_BYTES;

/// All possible errors returned by avrhex
#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Word address {0:#x} does not fit the record address field when doubled")]
    #[diagnostic(
        code(avrhex::address_overflow),
        help("Record byte addresses are 16 bits wide; keep word addresses below 0x8000")
    )]
    AddressOverflow(u32),

    #[error("Invalid address: {0}")]
    #[diagnostic(
        code(avrhex::invalid_address),
        help("Address directives take the form `!<hex>`, with the address in byte units")
    )]
    InvalidAddress(String),

    #[error("Invalid data: {0}")]
    #[diagnostic(
        code(avrhex::invalid_data),
        help("Data tokens are bare hexadecimal words of at most 16 bits, e.g. `ABCD`")
    )]
    InvalidData(String),

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error("Line too long: {0}")]
    #[diagnostic(
        code(avrhex::line_too_long),
        help("Input lines are limited to {} bytes before the line break", MAX_LINE_BYTES)
    )]
    LineTooLong(String),
}
