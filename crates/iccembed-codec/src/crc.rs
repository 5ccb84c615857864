//! CRC-32 as used by PNG (reflected, polynomial `0xEDB88320`).

const POLYNOMIAL: u32 = 0xedb8_8320;

/// Precomputed lookup table for byte-at-a-time CRC-32.
///
/// The table is built in a `const` context, so [`PNG_CRC_TABLE`] is fully initialized before any
/// code runs and is never mutated afterwards.
#[derive(Clone)]
pub struct CrcTable([u32; 256]);

impl std::fmt::Debug for CrcTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CrcTable")
            .field(&format_args!("0x{POLYNOMIAL:08x}"))
            .finish()
    }
}

impl CrcTable {
    pub const fn new() -> Self {
        let mut table = [0u32; 256];
        let mut n = 0usize;
        while n < 256 {
            let mut c = n as u32;
            let mut k = 0;
            while k < 8 {
                c = if c & 1 != 0 {
                    POLYNOMIAL ^ (c >> 1)
                } else {
                    c >> 1
                };
                k += 1;
            }
            table[n] = c;
            n += 1;
        }
        Self(table)
    }

    /// Advances a raw (non-inverted) CRC register over `data`.
    #[inline]
    fn advance(&self, mut register: u32, data: &[u8]) -> u32 {
        for &b in data {
            register = self.0[((register ^ b as u32) & 0xff) as usize] ^ (register >> 8);
        }
        register
    }

    /// Computes the checksum of a PNG chunk, covering its type tag followed by its data.
    pub fn checksum(&self, tag: [u8; 4], data: &[u8]) -> u32 {
        let mut hasher = Crc32::with_table(self);
        hasher.update(&tag);
        hasher.update(data);
        hasher.finalize()
    }
}

impl Default for CrcTable {
    fn default() -> Self {
        Self::new()
    }
}

pub static PNG_CRC_TABLE: CrcTable = CrcTable::new();

/// Incremental CRC-32 hasher.
#[derive(Debug, Clone)]
pub struct Crc32<'table> {
    table: &'table CrcTable,
    register: u32,
}

impl Crc32<'static> {
    pub fn new() -> Self {
        Self::with_table(&PNG_CRC_TABLE)
    }
}

impl Default for Crc32<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'table> Crc32<'table> {
    pub fn with_table(table: &'table CrcTable) -> Self {
        Self {
            table,
            register: 0xffff_ffff,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.register = self.table.advance(self.register, data);
    }

    pub fn finalize(&self) -> u32 {
        self.register ^ 0xffff_ffff
    }
}

/// Computes the PNG chunk CRC of `tag ++ data`, in on-disk (big-endian) byte order.
pub fn crc32(tag: [u8; 4], data: &[u8]) -> [u8; 4] {
    crate::be::encode_be32(PNG_CRC_TABLE.checksum(tag, data))
}
