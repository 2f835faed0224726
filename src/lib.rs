#![doc = include_str ! ("../README.md")]
#![cfg_attr(not(target_arch = "x86_64"), no_std)]

mod crc;
pub mod error;
pub mod input;
pub mod platform;

extern crate alloc;

/// Generator polynomial used when the peer does not negotiate a different one.
pub const DEFAULT_POLYNOMIAL: u32 = 0x9B;

/// Checksum width in bits used by default, yielding a 256 entry table.
pub const DEFAULT_WIDTH: u32 = 8;

/// Widest checksum accepted by [`Crc::new`]. A 16-bit width already needs a 65536 entry table.
pub const MAX_WIDTH: u32 = 16;

/// Number of table entries rendered per row by [`Crc::table_dump`].
const TABLE_DUMP_COLUMNS: usize = 16;

pub use crc::{Crc, TableDump};
pub use error::Error;
pub use input::{Element, Input, ToElement};
pub use platform::Checksum;
