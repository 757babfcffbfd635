//! Token scanner for one line of a word listing.
//!
//! Tokens are separated by whitespace. `#` and `;` start a comment running to
//! the end of the line. A hex run ends at the first non-hex character and
//! scanning resumes there, so `12;note` yields one data word and `!1F!20`
//! two address directives.

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `!<hex>` directive carrying the new cursor position in byte units.
    SetAddress(u32),
    /// A bare hexadecimal word to emit at the cursor.
    Data(u16),
}

pub struct Tokenizer<'a> {
    rest: &'a str,
}

impl<'a> Tokenizer<'a> {
    pub fn new(line: &'a str) -> Self {
        Tokenizer { rest: line }
    }

    fn take_hex_run(&mut self) -> &'a str {
        let len = self
            .rest
            .as_bytes()
            .iter()
            .take_while(|byte| byte.is_ascii_hexdigit())
            .count();
        let (run, rest) = self.rest.split_at(len);
        self.rest = rest;
        run
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rest = self.rest.trim_start();

        // Diagnostics carry the rest of the line from the failing token on.
        let context = self.rest.trim_end();

        match self.rest.bytes().next() {
            None => None,
            Some(b'#') | Some(b';') => {
                self.rest = "";
                None
            }
            Some(b'!') => {
                self.rest = &self.rest[1..];
                match u32::from_str_radix(self.take_hex_run(), 16) {
                    Ok(bytes) => Some(Ok(Token::SetAddress(bytes))),
                    Err(_) => {
                        self.rest = "";
                        Some(Err(Error::InvalidAddress(context.to_owned())))
                    }
                }
            }
            Some(_) => match u16::from_str_radix(self.take_hex_run(), 16) {
                Ok(value) => Some(Ok(Token::Data(value))),
                Err(_) => {
                    self.rest = "";
                    Some(Err(Error::InvalidData(context.to_owned())))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<Result<Token, Error>> {
        Tokenizer::new(line).collect()
    }

    #[test]
    fn blank_and_comment_lines_yield_nothing() {
        assert!(tokens("").is_empty());
        assert!(tokens("   \t  \r\n").is_empty());
        assert!(tokens("; note\n").is_empty());
        assert!(tokens("# note\n").is_empty());
    }

    #[test]
    fn directive_and_data_on_one_line() {
        let scanned = tokens("!0400 ABCD\n");
        assert_eq!(scanned.len(), 2);
        assert!(matches!(&scanned[0], Ok(Token::SetAddress(0x0400))));
        assert!(matches!(&scanned[1], Ok(Token::Data(0xABCD))));
    }

    #[test]
    fn comment_stops_the_scan() {
        let scanned = tokens("1234 ; trailing note 5678\n");
        assert_eq!(scanned.len(), 1);
        assert!(matches!(&scanned[0], Ok(Token::Data(0x1234))));
    }

    #[test]
    fn hex_run_ends_at_first_non_hex_character() {
        let scanned = tokens("12;x\n");
        assert_eq!(scanned.len(), 1);
        assert!(matches!(&scanned[0], Ok(Token::Data(0x12))));

        let scanned = tokens("!1F!20\n");
        assert!(matches!(&scanned[0], Ok(Token::SetAddress(0x1F))));
        assert!(matches!(&scanned[1], Ok(Token::SetAddress(0x20))));
    }

    #[test]
    fn malformed_address_is_fatal() {
        let scanned = tokens("!zzzz\n");
        assert_eq!(scanned.len(), 1);
        assert!(matches!(&scanned[0], Err(Error::InvalidAddress(_))));
    }

    #[test]
    fn malformed_data_is_fatal() {
        let scanned = tokens("zzzz\n");
        assert_eq!(scanned.len(), 1);
        assert!(matches!(&scanned[0], Err(Error::InvalidData(_))));
    }

    #[test]
    fn data_wider_than_a_word_is_rejected() {
        let scanned = tokens("12345\n");
        assert_eq!(scanned.len(), 1);
        assert!(matches!(&scanned[0], Err(Error::InvalidData(_))));
    }

    #[test]
    fn error_context_names_the_failing_token() {
        match &tokens("1234 zz 5678\n")[1] {
            Err(Error::InvalidData(context)) => assert_eq!(context, "zz 5678"),
            other => panic!("expected InvalidData, got {other:?}"),
        }
    }
}
