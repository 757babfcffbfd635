//! The fixed records every stream starts with.
//!
//! The programmer firmware does not erase the chip itself, but the host tool
//! assumes it did: blocks it believes are all-0xFF are skipped while
//! programming yet still verified, so any gap in the address range fails
//! verification. Writing one word of 0x0000 into each block forces a real
//! write. The filler records come first in the stream so user data at the
//! same addresses simply overwrites them.
//!
//! The serial-transmit routine that follows is opaque device code: it is
//! replayed verbatim from a constant table and never interpreted.

use std::io::Write;
use std::ops::Range;

use crate::error::Error;
use crate::record::{DataRecord, WordAddress};

/// Size of one programmable flash block, in bytes.
const FLASH_BLOCK_BYTES: u32 = 0x80;

/// Number of blocks between the program-space origin and the transmit routine.
const FILLER_BLOCKS: u32 = 8;

/// Byte addresses occupied by the embedded transmit routine.
pub const RESERVED_BYTE_RANGE: Range<u16> = 0x0400..0x0464;

const TRANSMIT_ROUTINE_ORIGIN: WordAddress = WordAddress(0x0200);

/// The transmit routine, one instruction word per record, starting at
/// [`TRANSMIT_ROUTINE_ORIGIN`]. Prints a byte over the serial port; the
/// contents are a fixed device contract and must be preserved byte for byte.
const TRANSMIT_ROUTINE_WORDS: [u16; 51] = [
    0x930F, 0x9100, 0x00C1, 0xFD03, 0xC00F, 0xE000, 0x9300, 0x00C5, //
    0xE607, 0x9300, 0x00C4, 0xE008, 0x9300, 0x00C1, 0xE00E, 0x9300, //
    0x00C2, 0xE400, 0x9300, 0x00C6, 0x910F, 0x920F, 0x932F, 0x930F, //
    0x931F, 0xE028, 0x9000, 0x00C0, 0xFE05, 0xCFFC, 0xE118, 0x0F00, //
    0x1F11, 0x9310, 0x00C6, 0x952A, 0xF7A9, 0x9000, 0x00C0, 0xFE05, //
    0xCFFC, 0x2E00, 0xE00A, 0x9300, 0x00C6, 0x2D00, 0x911F, 0x910F, //
    0x912F, 0x900F, 0x9508,
];

/// Writes the filler records followed by the transmit routine.
///
/// Runs exactly once per stream, before any user data; the output is
/// identical on every invocation.
pub fn write_preamble<W: Write>(writer: &mut W) -> Result<(), Error> {
    for block in 0..FILLER_BLOCKS {
        let address = WordAddress::from_byte_address(block * FLASH_BLOCK_BYTES);
        writeln!(writer, "{}", DataRecord::new(address, 0x0000)?)?;
    }

    for (offset, &word) in TRANSMIT_ROUTINE_WORDS.iter().enumerate() {
        let address = WordAddress(TRANSMIT_ROUTINE_ORIGIN.0 + offset as u32);
        writeln!(writer, "{}", DataRecord::new(address, word)?)?;
    }

    Ok(())
}
