//! The CRC-32 used by PNG (and zlib, gzip, etc).
//!
//! Reflected polynomial `0xEDB8_8320`, with the running value complemented
//! before and after each update. That makes it chainable: feeding the output
//! of one call back in as the `seed` of the next gives the same result as one
//! call over the concatenated bytes.

use super::ChunkTy;

const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
  let mut out = [0; 256];
  let mut n = 0;
  while n < 256 {
    let mut c = n as u32;
    let mut k = 0;
    while k < 8 {
      if (c & 1) != 0 {
        c = 0xEDB8_8320_u32 ^ (c >> 1);
      } else {
        c >>= 1;
      }
      //
      k += 1;
    }
    out[n] = c;
    //
    n += 1;
  }
  out
}

/// Updates a CRC-32 with more bytes.
///
/// Start a fresh checksum with a `seed` of 0.
#[inline]
#[must_use]
pub fn crc32(seed: u32, bytes: &[u8]) -> u32 {
  let mut crc = seed ^ u32::MAX;
  for &byte in bytes {
    let i = (crc ^ u32::from(byte)) as u8 as usize;
    crc = CRC_TABLE[i] ^ (crc >> 8);
  }
  crc ^ u32::MAX
}

/// The CRC that a chunk with this type and data should declare.
#[inline]
#[must_use]
pub fn png_crc(ty: ChunkTy, data: &[u8]) -> u32 {
  crc32(crc32(0, ty.as_bytes()), data)
}
