use std::{
  io::{BufWriter, Write},
  path::{Path, PathBuf},
  process::ExitCode,
};

use clap::{ArgAction, Parser};
use pnginfo::{
  png::{ChunkList, Decoder},
  CrcPolicy, DecodeOptions, PngResult, DEFAULT_MAX_CHUNKS,
};
use tracing::Level;

/// Prints the chunks of PNG files, checking each one along the way.
#[derive(Parser, Debug)]
#[command(name = "pnginfo", version, about)]
struct Cli {
  /// More log output on stderr (repeat for more).
  #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
  verbose: u8,

  /// Only list each chunk's type, length, and CRC. Corrupt chunks are skipped.
  #[arg(long)]
  list: bool,

  /// Stop reading a file after this many chunks.
  #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_CHUNKS)]
  max_chunks: usize,

  /// Read any number of chunks.
  #[arg(long, conflicts_with = "max_chunks")]
  no_chunk_limit: bool,

  /// Drop chunks with a bad CRC instead of stopping.
  #[arg(long)]
  skip_corrupt: bool,

  #[arg(value_name = "FILE", required = true)]
  files: Vec<PathBuf>,
}
impl Cli {
  fn log_level(&self) -> Level {
    match self.verbose {
      0 => Level::WARN,
      1 => Level::INFO,
      2 => Level::DEBUG,
      _ => Level::TRACE,
    }
  }

  fn decode_options(&self) -> DecodeOptions {
    let max_chunks = if self.no_chunk_limit { None } else { Some(self.max_chunks) };
    let crc_policy =
      if self.skip_corrupt || self.list { CrcPolicy::SkipCorrupt } else { CrcPolicy::Strict };
    DecodeOptions::default().with_max_chunks(max_chunks).with_crc_policy(crc_policy)
  }
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(cli.log_level()).init();

  let options = cli.decode_options();
  let stdout = std::io::stdout();
  let mut out = BufWriter::new(stdout.lock());
  let mut status = ExitCode::SUCCESS;
  for (i, path) in cli.files.iter().enumerate() {
    if cli.files.len() > 1 {
      if i > 0 {
        let _ = writeln!(out);
      }
      let _ = writeln!(out, "{}:", path.display());
    }
    let result = if cli.list {
      list_file(&mut out, path, options)
    } else {
      report_file(&mut out, path, options)
    };
    if let Err(e) = result {
      let _ = out.flush();
      eprintln!("{}: {e}", path.display());
      status = ExitCode::FAILURE;
    }
  }
  let _ = out.flush();
  status
}

fn report_file(out: &mut impl Write, path: &Path, options: DecodeOptions) -> PngResult<()> {
  for (i, report) in Decoder::open(path, options)?.enumerate() {
    let report = report?;
    if i > 0 {
      writeln!(out)?;
    }
    writeln!(out, "{report}")?;
  }
  Ok(())
}

fn list_file(out: &mut impl Write, path: &Path, options: DecodeOptions) -> PngResult<()> {
  let list = ChunkList::open(path, options)?;
  for chunk in &list {
    writeln!(out, "{} ({}) ({:08x})", chunk.ty(), chunk.length(), chunk.declared_crc())?;
  }
  list.close();
  Ok(())
}
