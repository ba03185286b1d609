#![allow(non_camel_case_types)]

//! Holds all the tools for inspecting PNG data.
//!
//! * [Portable Network Graphics Specification (Third Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/png/
//!
//! The general format of a PNG is that the information is stored in "chunks".
//! After an 8 byte signature, each chunk is a record of:
//! * a big-endian `u32` length,
//! * a 4 byte type tag,
//! * that many bytes of data,
//! * a CRC-32 of the tag and data.
//!
//! The first chunk must be the header ([`IHDR`]) and the last must be the
//! end marker (`IEND`). Everything between is decoded by type, using what the
//! header and palette said about the image to check the other chunks.
//!
//! ## Reporting
//!
//! A [`Decoder`] reads a stream and gives a [`ChunkReport`] for each chunk as
//! soon as that chunk is read and checked. The first problem found ends the
//! decode.
//!
//! ```no_run
//! use pnginfo::{png::Decoder, DecodeOptions};
//! let png: &[u8] = unimplemented!("data from somewhere");
//! for report in Decoder::from_bytes(png, DecodeOptions::default()) {
//!   match report {
//!     Ok(report) => println!("{report}\n"),
//!     Err(e) => eprintln!("{e}"),
//!   }
//! }
//! ```
//!
//! ## Accumulating
//!
//! A [`ChunkList`] reads every chunk up front without looking inside any of
//! them, skipping over chunks that fail their CRC.
//!
//! ## Going Manual
//!
//! The [`ChunkStream`] gives each [`RawChunk`] after checking the record
//! structure and CRC. Pair it with an [`ImageState`] and [`decode_chunk`] to
//! do your own thing with the decoded data.

pub use crate::error::{ErrorKind, LengthRule, PngError, PngResult};

mod crc32;
pub use crc32::*;

mod cursor;
pub use cursor::*;

mod keyword;
pub use keyword::*;

mod raw_chunk;
pub use raw_chunk::*;

mod state;
pub use state::*;

mod stream;
pub use stream::*;

mod decode;
pub use decode::*;

mod report;
pub use report::*;

mod chunk_list;
pub use chunk_list::*;

// critical chunks

mod ihdr;
pub use ihdr::*;

mod plte;
pub use plte::*;

mod idat;
pub use idat::*;

// ancillary chunks

mod time;
pub use time::*;

mod phys;
pub use phys::*;

mod srgb;
pub use srgb::*;

mod gama;
pub use gama::*;

mod chrm;
pub use chrm::*;

mod iccp;
pub use iccp::*;

mod text;
pub use text::*;

mod ztxt;
pub use ztxt::*;

mod itxt;
pub use itxt::*;

mod bkgd;
pub use bkgd::*;

mod sbit;
pub use sbit::*;

mod trns;
pub use trns::*;

mod splt;
pub use splt::*;

mod hist;
pub use hist::*;

// extension chunks

mod offs;
pub use offs::*;

mod scal;
pub use scal::*;

mod pcal;
pub use pcal::*;

// APNG

mod actl;
pub use actl::*;

mod fctl;
pub use fctl::*;
