use crate::error::Error;
use crate::input::Input;
use crate::platform::Checksum;
use crate::{DEFAULT_POLYNOMIAL, DEFAULT_WIDTH, MAX_WIDTH, TABLE_DUMP_COLUMNS};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
#[cfg(feature = "defmt")]
use defmt::trace;

/// Table driven CRC engine. The lookup table is built once in [`Crc::new`] and never changes
/// afterwards, so a single instance can be shared between threads and used concurrently.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Crc {
    polynomial: u32,
    width: u32,
    table: Vec<u32>,
}

impl Crc {
    /// Creates an engine for the given generator polynomial and checksum width in bits.
    ///
    /// The polynomial is truncated to `width` bits. Widths of zero or above
    /// [`MAX_WIDTH`] are rejected with [`Error::InvalidWidth`].
    pub fn new(polynomial: u32, width: u32) -> Result<Crc, Error> {
        if width == 0 || width > MAX_WIDTH {
            return Err(Error::InvalidWidth(width));
        }

        Ok(Self::with_valid_width(polynomial, width))
    }

    fn with_valid_width(polynomial: u32, width: u32) -> Crc {
        let polynomial = polynomial & mask(width);
        let table = build_table(polynomial, width);

        #[cfg(feature = "defmt")]
        trace!(
            "new: polynomial={:#x} width={} entries={}",
            polynomial,
            width,
            table.len()
        );

        Self {
            polynomial,
            width,
            table,
        }
    }

    /// The generator polynomial, already truncated to the configured width.
    pub fn polynomial(&self) -> u32 {
        self.polynomial
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of table entries, always `2^width`.
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    /// Bit mask applied to every intermediate and final checksum value.
    pub fn mask(&self) -> u32 {
        mask(self.width)
    }

    pub fn table(&self) -> &[u32] {
        &self.table
    }

    /// Calculates the checksum over `input`.
    ///
    /// The input is normalized to bytes first, see [`crate::input`]. With `len == 0` every
    /// element is used, otherwise only the first `len` elements. Asking for more elements than
    /// the input has fails with [`Error::LengthOutOfRange`].
    ///
    /// Usage: `crc.calculate(&[0x31, 0x32, 0x33], 0)`, `crc.calculate("abc", 2)`
    pub fn calculate<I: Input + ?Sized>(&self, input: &I, len: usize) -> Result<u32, Error> {
        let bytes = input.normalize()?;
        let bytes = match len {
            0 => bytes.as_slice(),
            len => bytes.get(..len).ok_or(Error::LengthOutOfRange {
                len,
                available: bytes.len(),
            })?,
        };

        Ok(self.checksum(bytes))
    }

    /// Calculates the checksum over raw bytes. An empty slice yields 0.
    pub fn checksum(&self, data: &[u8]) -> u32 {
        let mask = self.mask();
        data.iter().fold(0, |crc, &byte| {
            self.table[((crc ^ u32::from(byte)) & mask) as usize]
        })
    }

    /// Renders the lookup table as rows of 16 space separated values like `0x0 0x9B 0xAD`,
    /// each row terminated by a newline.
    pub fn table_dump(&self) -> TableDump<'_> {
        TableDump(&self.table)
    }

    /// The output of [`Crc::table_dump`] as a string.
    pub fn dump_table(&self) -> String {
        self.table_dump().to_string()
    }

    /// Prints the output of [`Crc::table_dump`] to stdout.
    #[cfg(target_arch = "x86_64")]
    pub fn print_table(&self) {
        print!("{}", self.table_dump());
    }
}

impl Default for Crc {
    /// An engine with [`DEFAULT_POLYNOMIAL`] and [`DEFAULT_WIDTH`].
    fn default() -> Self {
        Self::with_valid_width(DEFAULT_POLYNOMIAL, DEFAULT_WIDTH)
    }
}

impl Checksum for Crc {
    fn checksum(&self, data: &[u8]) -> u32 {
        Crc::checksum(self, data)
    }
}

impl fmt::Debug for Crc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the table is derived from the configuration, printing 2^width entries is just noise
        f.debug_struct("Crc")
            .field("polynomial", &format_args!("{:#x}", self.polynomial))
            .field("width", &self.width)
            .field("table_len", &self.table.len())
            .finish()
    }
}

/// Display adapter returned by [`Crc::table_dump`].
pub struct TableDump<'a>(&'a [u32]);

impl fmt::Display for TableDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.chunks(TABLE_DUMP_COLUMNS) {
            for (column, value) in row.iter().enumerate() {
                if column > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "0x{value:X}")?;
            }
            f.write_str("\n")?;
        }

        Ok(())
    }
}

#[inline(always)]
const fn mask(width: u32) -> u32 {
    (1 << width) - 1
}

fn build_table(polynomial: u32, width: u32) -> Vec<u32> {
    let mask = mask(width);
    let top_bit = 1 << (width - 1);

    (0..=mask)
        .map(|index| {
            let mut crc = index;
            for _ in 0..width {
                crc = if crc & top_bit != 0 {
                    (crc << 1) ^ polynomial
                } else {
                    crc << 1
                };
                // higher bits never shift back down, so masking per step equals masking once
                crc &= mask;
            }
            crc
        })
        .collect()
}
