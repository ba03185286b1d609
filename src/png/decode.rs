use core::fmt::{Display, Formatter, Write};
use std::{fs::File, io::BufReader, io::Read, path::Path};

use tracing::debug;

use super::*;
use crate::options::DecodeOptions;

/// Every chunk type that gets decoded, plus a catch-all.
///
/// Built from a [`ChunkTy`]. Dispatch matches on this exhaustively, so adding
/// a kind means adding its decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
#[allow(missing_docs)]
pub enum ChunkKind {
  IHDR,
  PLTE,
  IDAT,
  IEND,
  tIME,
  pHYs,
  sRGB,
  gAMA,
  cHRM,
  iCCP,
  tEXt,
  zTXt,
  iTXt,
  bKGD,
  sBIT,
  tRNS,
  sPLT,
  hIST,
  oFFs,
  sCAL,
  pCAL,
  acTL,
  fcTL,
  Unknown,
}
impl From<ChunkTy> for ChunkKind {
  #[inline]
  fn from(ty: ChunkTy) -> Self {
    match ty {
      ChunkTy::IHDR => Self::IHDR,
      ChunkTy::PLTE => Self::PLTE,
      ChunkTy::IDAT => Self::IDAT,
      ChunkTy::IEND => Self::IEND,
      ChunkTy::tIME => Self::tIME,
      ChunkTy::pHYs => Self::pHYs,
      ChunkTy::sRGB => Self::sRGB,
      ChunkTy::gAMA => Self::gAMA,
      ChunkTy::cHRM => Self::cHRM,
      ChunkTy::iCCP => Self::iCCP,
      ChunkTy::tEXt => Self::tEXt,
      ChunkTy::zTXt => Self::zTXt,
      ChunkTy::iTXt => Self::iTXt,
      ChunkTy::bKGD => Self::bKGD,
      ChunkTy::sBIT => Self::sBIT,
      ChunkTy::tRNS => Self::tRNS,
      ChunkTy::sPLT => Self::sPLT,
      ChunkTy::hIST => Self::hIST,
      ChunkTy::oFFs => Self::oFFs,
      ChunkTy::sCAL => Self::sCAL,
      ChunkTy::pCAL => Self::pCAL,
      ChunkTy::acTL => Self::acTL,
      ChunkTy::fcTL => Self::fcTL,
      _ => Self::Unknown,
    }
  }
}

/// The decoded contents of a chunk.
#[derive(Debug, Clone, PartialEq)]
#[allow(nonstandard_style)]
#[allow(missing_docs)]
pub enum ChunkData {
  IHDR(IHDR),
  PLTE(PLTE),
  IDAT(IDAT),
  IEND,
  tIME(tIME),
  pHYs(pHYs),
  sRGB(sRGB),
  gAMA(gAMA),
  cHRM(cHRM),
  iCCP(iCCP),
  tEXt(tEXt),
  zTXt(zTXt),
  iTXt(iTXt),
  bKGD(bKGD),
  sBIT(sBIT),
  tRNS(tRNS),
  sPLT(sPLT),
  hIST(hIST),
  oFFs(oFFs),
  sCAL(sCAL),
  pCAL(pCAL),
  acTL(acTL),
  fcTL(fcTL),
  /// A chunk type this crate doesn't interpret.
  Unparsed,
}
impl Display for ChunkData {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::IHDR(x) => Display::fmt(x, f),
      Self::PLTE(x) => Display::fmt(x, f),
      Self::IDAT(x) => Display::fmt(x, f),
      Self::IEND => Ok(()),
      Self::tIME(x) => Display::fmt(x, f),
      Self::pHYs(x) => Display::fmt(x, f),
      Self::sRGB(x) => Display::fmt(x, f),
      Self::gAMA(x) => Display::fmt(x, f),
      Self::cHRM(x) => Display::fmt(x, f),
      Self::iCCP(x) => Display::fmt(x, f),
      Self::tEXt(x) => Display::fmt(x, f),
      Self::zTXt(x) => Display::fmt(x, f),
      Self::iTXt(x) => Display::fmt(x, f),
      Self::bKGD(x) => Display::fmt(x, f),
      Self::sBIT(x) => Display::fmt(x, f),
      Self::tRNS(x) => Display::fmt(x, f),
      Self::sPLT(x) => Display::fmt(x, f),
      Self::hIST(x) => Display::fmt(x, f),
      Self::oFFs(x) => Display::fmt(x, f),
      Self::sCAL(x) => Display::fmt(x, f),
      Self::pCAL(x) => Display::fmt(x, f),
      Self::acTL(x) => Display::fmt(x, f),
      Self::fcTL(x) => Display::fmt(x, f),
      Self::Unparsed => f.write_str("not decoded"),
    }
  }
}

/// Interprets a chunk's payload.
///
/// Chunks that depend on the pixel format read it from `state`, and the
/// header and palette chunks record themselves into it. On error nothing is
/// recorded.
pub fn decode_chunk(chunk: &RawChunk, state: &mut ImageState) -> PngResult<ChunkData> {
  let data = chunk.data();
  Ok(match ChunkKind::from(chunk.ty()) {
    ChunkKind::IHDR => ChunkData::IHDR(IHDR::decode(data, state)?),
    ChunkKind::PLTE => ChunkData::PLTE(PLTE::decode(data, state)?),
    ChunkKind::IDAT => ChunkData::IDAT(IDAT::from(data)),
    ChunkKind::IEND => ChunkData::IEND,
    ChunkKind::tIME => ChunkData::tIME(tIME::try_from(data)?),
    ChunkKind::pHYs => ChunkData::pHYs(pHYs::try_from(data)?),
    ChunkKind::sRGB => ChunkData::sRGB(sRGB::try_from(data)?),
    ChunkKind::gAMA => ChunkData::gAMA(gAMA::try_from(data)?),
    ChunkKind::cHRM => ChunkData::cHRM(cHRM::try_from(data)?),
    ChunkKind::iCCP => ChunkData::iCCP(iCCP::try_from(data)?),
    ChunkKind::tEXt => ChunkData::tEXt(tEXt::try_from(data)?),
    ChunkKind::zTXt => ChunkData::zTXt(zTXt::try_from(data)?),
    ChunkKind::iTXt => ChunkData::iTXt(iTXt::try_from(data)?),
    ChunkKind::bKGD => ChunkData::bKGD(bKGD::decode(data, state)?),
    ChunkKind::sBIT => ChunkData::sBIT(sBIT::decode(data, state)?),
    ChunkKind::tRNS => ChunkData::tRNS(tRNS::decode(data, state)?),
    ChunkKind::sPLT => ChunkData::sPLT(sPLT::try_from(data)?),
    ChunkKind::hIST => ChunkData::hIST(hIST::decode(data, state)?),
    ChunkKind::oFFs => ChunkData::oFFs(oFFs::try_from(data)?),
    ChunkKind::sCAL => ChunkData::sCAL(sCAL::try_from(data)?),
    ChunkKind::pCAL => ChunkData::pCAL(pCAL::try_from(data)?),
    ChunkKind::acTL => ChunkData::acTL(acTL::try_from(data)?),
    ChunkKind::fcTL => ChunkData::fcTL(fcTL::try_from(data)?),
    ChunkKind::Unknown => ChunkData::Unparsed,
  })
}

/// Reporting mode: reads a PNG and decodes each chunk as it arrives.
///
/// Each item is the report for one chunk. The first error ends the
/// iteration, and the reports that came before it stay valid.
///
/// ```no_run
/// use pnginfo::{png::Decoder, DecodeOptions};
/// # fn main() -> pnginfo::PngResult<()> {
/// for report in Decoder::open("image.png", DecodeOptions::default())? {
///   println!("{}", report?);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Decoder<R> {
  stream: ChunkStream<R>,
  state: ImageState,
  index: usize,
  failed: bool,
}
impl Decoder<BufReader<File>> {
  /// Opens a file for decoding.
  pub fn open(path: impl AsRef<Path>, options: DecodeOptions) -> PngResult<Self> {
    let file = File::open(path)?;
    Ok(Self::new(BufReader::new(file), options))
  }
}
impl<'b> Decoder<&'b [u8]> {
  #[inline]
  pub fn from_bytes(bytes: &'b [u8], options: DecodeOptions) -> Self {
    Self::new(bytes, options)
  }
}
impl<R: Read> Decoder<R> {
  #[inline]
  pub fn new(reader: R, options: DecodeOptions) -> Self {
    Self {
      stream: ChunkStream::new(reader, options),
      state: ImageState::new(),
      index: 0,
      failed: false,
    }
  }

  /// What's been learned about the image so far.
  #[inline]
  #[must_use]
  pub fn image_state(&self) -> &ImageState {
    &self.state
  }

  /// Reads and decodes the next chunk, `None` after `IEND`.
  pub fn next_report(&mut self) -> PngResult<Option<ChunkReport>> {
    if self.failed {
      return Ok(None);
    }
    let out = self.decode_next();
    if out.is_err() {
      self.failed = true;
    }
    out
  }

  fn decode_next(&mut self) -> PngResult<Option<ChunkReport>> {
    let chunk = match self.stream.next_chunk()? {
      Some(chunk) => chunk,
      None => return Ok(None),
    };
    let data = decode_chunk(&chunk, &mut self.state)?;
    self.index += 1;
    debug!(index = self.index, ty = %chunk.ty(), length = chunk.length(), "decoded chunk");
    Ok(Some(ChunkReport {
      index: self.index,
      ty: chunk.ty(),
      length: chunk.length(),
      offset: chunk.offset(),
      crc: chunk.declared_crc(),
      data,
    }))
  }
}
impl<R: Read> Iterator for Decoder<R> {
  type Item = PngResult<ChunkReport>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.next_report().transpose()
  }
}
impl<R: Read> core::iter::FusedIterator for Decoder<R> {}

pub(crate) fn check_length(ty: ChunkTy, expected: LengthRule, data: &[u8]) -> PngResult<()> {
  let actual = data.len() as u32;
  if expected.allows(actual) {
    Ok(())
  } else {
    Err(PngError::WrongChunkLength { ty, expected, actual })
  }
}

pub(crate) fn check_range(
  ty: ChunkTy, field: &'static str, value: impl Into<u32>, range: core::ops::RangeInclusive<u32>,
) -> PngResult<()> {
  let value = value.into();
  if range.contains(&value) {
    Ok(())
  } else {
    Err(PngError::ValueOutOfRange { ty, field, value })
  }
}

/// PNG's fixed point values, scaled by 100 000.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fixed5(pub u32);
impl Display for Fixed5 {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}.{:05}", self.0 / 100_000, self.0 % 100_000)
  }
}

/// Shows text with control characters escaped, so one field stays one line.
pub(crate) struct OneLine<'s>(pub &'s str);
impl Display for OneLine<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.chars() {
      if ch.is_control() {
        write!(f, "{}", ch.escape_default())?;
      } else {
        f.write_char(ch)?;
      }
    }
    Ok(())
  }
}

/// Writes a tab-indented table, `per_row` items to a line.
pub(crate) fn write_rows<T>(
  f: &mut Formatter<'_>, items: impl IntoIterator<Item = T>, per_row: usize,
  mut each: impl FnMut(&mut Formatter<'_>, usize, T) -> core::fmt::Result,
) -> core::fmt::Result {
  for (i, item) in items.into_iter().enumerate() {
    if i > 0 && i % per_row == 0 {
      f.write_char('\n')?;
    }
    f.write_char('\t')?;
    each(f, i, item)?;
  }
  Ok(())
}

/// Three samples, each shown with as many hex digits as the bit depth needs.
pub(crate) fn write_rgb_samples(
  f: &mut Formatter<'_>, [r, g, b]: [u16; 3], bit_depth: u8,
) -> core::fmt::Result {
  if bit_depth > 8 {
    write!(f, "{r:04x} {g:04x} {b:04x}")
  } else {
    write!(f, "{r:02x} {g:02x} {b:02x}")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_chunk_kind_from_ty() {
    assert_eq!(ChunkKind::from(ChunkTy::IHDR), ChunkKind::IHDR);
    assert_eq!(ChunkKind::from(ChunkTy::fcTL), ChunkKind::fcTL);
    assert_eq!(ChunkKind::from(ChunkTy(*b"fdAT")), ChunkKind::Unknown);
    // the tag is compared byte for byte, case included
    assert_eq!(ChunkKind::from(ChunkTy(*b"ihdr")), ChunkKind::Unknown);
  }

  #[test]
  fn test_unknown_chunks_are_not_errors() {
    let mut state = ImageState::new();
    let chunk = RawChunk::new(ChunkTy(*b"prVt"), vec![1, 2, 3]);
    assert_eq!(decode_chunk(&chunk, &mut state).unwrap(), ChunkData::Unparsed);
  }

  #[test]
  fn test_fixed5() {
    assert_eq!(Fixed5(45455).to_string(), "0.45455");
    assert_eq!(Fixed5(100_000).to_string(), "1.00000");
    assert_eq!(Fixed5(7).to_string(), "0.00007");
  }

  #[test]
  fn test_one_line() {
    assert_eq!(OneLine("a\nb\tc").to_string(), "a\\nb\\tc");
    assert_eq!(OneLine("café").to_string(), "café");
  }

  #[test]
  fn test_check_helpers() {
    assert!(check_length(ChunkTy::gAMA, LengthRule::Exactly(4), &[0; 4]).is_ok());
    assert!(matches!(
      check_length(ChunkTy::gAMA, LengthRule::Exactly(4), &[0; 5]),
      Err(PngError::WrongChunkLength { actual: 5, .. })
    ));
    assert!(check_range(ChunkTy::sRGB, "rendering intent", 3_u8, 0..=3).is_ok());
    assert!(matches!(
      check_range(ChunkTy::sRGB, "rendering intent", 4_u8, 0..=3),
      Err(PngError::ValueOutOfRange { value: 4, .. })
    ));
  }
}
