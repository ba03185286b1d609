use pnginfo::{
  png::{ChunkData, ChunkList, ChunkStream, ChunkTy, Decoder, RawChunk, StreamState, PNG_SIGNATURE},
  CrcPolicy, DecodeOptions, ErrorKind, PngError,
};
use walkdir::WalkDir;

fn png_stream(chunks: &[RawChunk]) -> Vec<u8> {
  let mut v = PNG_SIGNATURE.to_vec();
  for c in chunks {
    v.extend(c.to_bytes());
  }
  v
}

fn gray_image() -> Vec<RawChunk> {
  vec![
    RawChunk::new(ChunkTy::IHDR, vec![0, 0, 0, 4, 0, 0, 0, 3, 8, 0, 0, 0, 0]),
    RawChunk::new(ChunkTy::tIME, vec![0x07, 0xE6, 6, 15, 13, 45, 0]),
    RawChunk::new(ChunkTy::pHYs, vec![0, 0, 0x0B, 0x13, 0, 0, 0x0B, 0x13, 1]),
    RawChunk::new(ChunkTy::bKGD, vec![0, 0x80]),
    RawChunk::new(ChunkTy::IDAT, vec![0x78, 0x9C, 1, 2, 3]),
    RawChunk::new(ChunkTy::IEND, Vec::new()),
  ]
}

#[test]
fn test_readers_no_panics() {
  // iter ALL files in the test folder, even non-png files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    for _ in Decoder::from_bytes(&v, DecodeOptions::default()) {
      //
    }
    for _ in ChunkStream::new(v.as_slice(), ChunkList::default_options()) {
      //
    }
  }
  // even totally random data should never panic the readers!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    for _ in Decoder::from_bytes(&v, DecodeOptions::default()) {
      //
    }
  }
  // nor should random data after a real signature and header
  for _ in 0..50 {
    let mut v = png_stream(&gray_image()[..1]);
    v.extend(super::rand_bytes(256));
    for _ in Decoder::from_bytes(&v, DecodeOptions::default()) {
      //
    }
    for _ in ChunkStream::new(v.as_slice(), ChunkList::default_options()) {
      //
    }
  }
}

#[test]
fn test_decoder_reports_whole_image() {
  let bytes = png_stream(&gray_image());
  let reports: Vec<_> =
    Decoder::from_bytes(&bytes, DecodeOptions::default()).collect::<Result<_, _>>().unwrap();
  let tys: Vec<ChunkTy> = reports.iter().map(|r| r.ty).collect();
  assert_eq!(
    tys,
    [ChunkTy::IHDR, ChunkTy::tIME, ChunkTy::pHYs, ChunkTy::bKGD, ChunkTy::IDAT, ChunkTy::IEND]
  );
  assert_eq!(reports[1].data.to_string(), "Wednesday, 15 Jun 2022 - 01:45 PM");
  assert_eq!(
    reports[2].data.to_string(),
    "2835 (approx. 72 DPI) x 2835 (approx. 72 DPI) pixels per meter"
  );
  assert_eq!(reports[4].data.to_string(), "5 bytes of compressed image data");
  assert_eq!(reports[5].data, ChunkData::IEND);
  assert!(reports[5].to_string().contains("Data = no data"));
}

#[test]
fn test_chunk_list_skips_corrupt() {
  let mut bytes = png_stream(&gray_image());
  // second byte of the tIME data
  bytes[8 + 25 + 8 + 1] ^= 0xFF;
  let list = ChunkList::from_reader(bytes.as_slice(), ChunkList::default_options()).unwrap();
  assert_eq!(list.len(), 5);
  assert!(list.find(ChunkTy::tIME).is_none());
  assert!(list.iter().all(|c| c.declared_crc() == c.actual_crc()));

  let err = Decoder::from_bytes(&bytes, DecodeOptions::default())
    .find_map(Result::err)
    .unwrap();
  assert!(matches!(err, PngError::CrcMismatch { ty, .. } if ty == ChunkTy::tIME));
  assert_eq!(err.kind(), ErrorKind::Integrity);
}

#[test]
fn test_stream_limits() {
  let bytes = png_stream(&gray_image());
  let opts = DecodeOptions::default().with_max_chunks(Some(3));
  let mut stream = ChunkStream::new(bytes.as_slice(), opts);
  let results: Vec<_> = stream.by_ref().collect();
  assert_eq!(results.len(), 4);
  assert!(matches!(results[3], Err(PngError::ExcessiveChunkCount { .. })));
  assert_eq!(stream.state(), StreamState::Failed);

  let opts = DecodeOptions::default().with_max_chunks(None).with_crc_policy(CrcPolicy::Strict);
  let mut stream = ChunkStream::new(bytes.as_slice(), opts);
  assert_eq!(stream.by_ref().filter(Result::is_ok).count(), 6);
  assert_eq!(stream.state(), StreamState::Done);
}

#[test]
fn test_not_a_png() {
  let err =
    Decoder::from_bytes(b"GIF89a\0\0\0\0", DecodeOptions::default()).next().unwrap().unwrap_err();
  assert!(matches!(err, PngError::NotAPngFile));
  assert_eq!(err.kind(), ErrorKind::Format);
}
