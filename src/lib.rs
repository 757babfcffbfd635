//! Library for converting word-address/value listings into Intel-HEX images
//! for word-addressed AVR devices.
//!
//! Serial programmers tend to skip any flash block they believe is already
//! erased, so an image with gaps in its address range fails verification.
//! Every image produced here therefore starts with one non-0xFF filler word
//! per flash block, followed by the embedded serial-transmit routine, before
//! any user data. Filler records come first so later data can overwrite them.

pub mod convert;
pub mod error;
pub mod logging;
pub mod parser;
pub mod preamble;
pub mod record;

pub use convert::Converter;
pub use error::Error;
