#![forbid(unsafe_code)]
#![cfg_attr(docs_rs, feature(doc_cfg))]
//#![warn(missing_docs)]

//! A crate for inspecting and validating the chunks of PNG files.
//!
//! Each chunk's record structure and CRC is checked, then its data is decoded
//! according to its type and checked against what earlier chunks said about
//! the image. Compressed data (image data, compressed text, ICC profiles) is
//! reported by size only.
//!
//! * [`png::Decoder`] reports each chunk as it's read.
//! * [`png::ChunkList`] collects the raw chunks of a file.
//!
//! The `pnginfo` binary prints the reports for one or more files.

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod error;
pub use error::*;

pub mod options;
pub use options::*;

pub mod png;
