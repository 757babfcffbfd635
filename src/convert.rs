//! Drives a whole conversion: preamble, user data, End-Of-File record.

use std::io::{BufRead, Write};

use log::warn;

use crate::error::Error;
use crate::parser::{Token, Tokenizer};
use crate::preamble::{self, RESERVED_BYTE_RANGE};
use crate::record::{DataRecord, WordAddress, END_RECORD};

/// Longest input line the programmer's tooling will accept, terminator
/// excluded.
pub const MAX_LINE_BYTES: usize = 1023;

/// Converts a word listing into a HEX stream, writing records as it goes.
///
/// Output is never rolled back: on a fatal parse error whatever has been
/// written stands, and the stream simply ends without its End-Of-File record.
pub struct Converter<W: Write> {
    writer: W,
    cursor: WordAddress,
}

impl<W: Write> Converter<W> {
    pub fn new(writer: W) -> Self {
        Converter {
            writer,
            cursor: WordAddress::ORIGIN,
        }
    }

    /// Runs the conversion over `reader` until it is exhausted.
    pub fn convert<R: BufRead>(&mut self, mut reader: R) -> Result<(), Error> {
        preamble::write_preamble(&mut self.writer)?;

        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            if line.trim_end_matches(['\r', '\n']).len() >= MAX_LINE_BYTES {
                let context = line.chars().take(64).collect();
                return Err(Error::LineTooLong(context));
            }
            self.process_line(&line)?;
        }

        writeln!(self.writer, "{END_RECORD}")?;
        self.writer.flush()?;

        Ok(())
    }

    fn process_line(&mut self, line: &str) -> Result<(), Error> {
        for token in Tokenizer::new(line) {
            match token? {
                Token::SetAddress(bytes) => {
                    self.cursor = WordAddress::from_byte_address(bytes);
                }
                Token::Data(value) => self.emit(value)?,
            }
        }

        Ok(())
    }

    fn emit(&mut self, value: u16) -> Result<(), Error> {
        let record = DataRecord::new(self.cursor, value)?;
        if RESERVED_BYTE_RANGE.contains(&record.byte_address()) {
            warn!(
                "overwriting the serial transmit routine at {:#06X}",
                record.byte_address()
            );
        }
        writeln!(self.writer, "{record}")?;
        self.cursor = self.cursor.next();

        Ok(())
    }
}
