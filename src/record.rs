//! Intel-HEX record encoding for a word-addressed device.
//!
//! The device counts 16-bit words while the HEX format counts bytes, so every
//! word address is doubled on its way into a record's address field. Payloads
//! are written low byte first; this is the device's word layout in flash, not
//! the generic HEX convention, and is part of the wire contract.

use std::fmt::{self, Display, Formatter};

use crate::error::Error;

/// The fixed End-Of-File record terminating every stream.
pub const END_RECORD: &str = ":00000001FF";

const RECORD_TYPE_DATA: u8 = 0x00;
const PAYLOAD_LEN: u8 = 0x02;

/// An address counted in 16-bit words from the device's program-space origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WordAddress(pub u32);

impl WordAddress {
    /// The start of program space, where emission begins absent any directive.
    pub const ORIGIN: WordAddress = WordAddress(0);

    /// Converts a byte-unit address to word units, truncating any odd byte.
    pub fn from_byte_address(bytes: u32) -> WordAddress {
        WordAddress(bytes / 2)
    }

    /// The byte-unit address encoded into the record address field.
    ///
    /// Fails with [`Error::AddressOverflow`] when the doubled address no
    /// longer fits the field's 16 bits.
    pub fn byte_address(self) -> Result<u16, Error> {
        self.0
            .checked_mul(2)
            .and_then(|bytes| u16::try_from(bytes).ok())
            .ok_or(Error::AddressOverflow(self.0))
    }

    /// The address one word further along.
    pub fn next(self) -> WordAddress {
        WordAddress(self.0 + 1)
    }
}

/// A single Data record: one 16-bit word at a byte address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataRecord {
    address: u16,
    payload: [u8; 2],
}

impl DataRecord {
    pub fn new(address: WordAddress, value: u16) -> Result<Self, Error> {
        Ok(DataRecord {
            address: address.byte_address()?,
            payload: value.to_le_bytes(),
        })
    }

    /// The byte-unit address this record writes to.
    pub fn byte_address(&self) -> u16 {
        self.address
    }
}

impl Display for DataRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [addr_hi, addr_lo] = self.address.to_be_bytes();
        let [lo, hi] = self.payload;
        let checksum = checksum(&[PAYLOAD_LEN, addr_hi, addr_lo, RECORD_TYPE_DATA, lo, hi]);

        write!(
            f,
            ":{:02X}{:04X}{:02X}{:02X}{:02X}{:02X}",
            PAYLOAD_LEN, self.address, RECORD_TYPE_DATA, lo, hi, checksum
        )
    }
}

/// The byte making the unsigned sum of an entire record zero modulo 256.
fn checksum(bytes: &[u8]) -> u8 {
    bytes
        .iter()
        .fold(0u8, |sum, byte| sum.wrapping_add(*byte))
        .wrapping_neg()
}
