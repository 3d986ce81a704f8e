use std::{
    collections::HashSet,
    io::{Seek, Write},
};

use anyhow::Context;
use flate2::{Compression, write::GzEncoder};

use crate::foundation::error::LayerstackResult;

/// Destination of batch output entries.
pub trait ArchiveSink {
    /// Append one file. Entries keep the order they are appended in.
    fn append(&mut self, name: &str, bytes: &[u8]) -> LayerstackResult<()>;
}

/// Deflate-compressed ZIP archive with reproducible headers.
///
/// Every entry has mode `0644` and the DOS epoch (1980-01-01 00:00) as its timestamp, so
/// identical entries give identical archives. This is the default batch container.
pub struct ZipArchive<W: Write + Seek> {
    writer: zip::ZipWriter<W>,
    options: zip::write::SimpleFileOptions,
}

impl<W: Write + Seek> ZipArchive<W> {
    /// Start an archive written to `writer`.
    pub fn new(writer: W) -> Self {
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default())
            .unix_permissions(0o644);
        Self {
            writer: zip::ZipWriter::new(writer),
            options,
        }
    }

    /// Write the central directory and return the writer.
    pub fn finish(self) -> LayerstackResult<W> {
        let writer = self.writer.finish().context("finish zip archive")?;
        Ok(writer)
    }
}

impl<W: Write + Seek> ArchiveSink for ZipArchive<W> {
    fn append(&mut self, name: &str, bytes: &[u8]) -> LayerstackResult<()> {
        self.writer
            .start_file(name, self.options)
            .with_context(|| format!("start '{name}' in archive"))?;
        self.writer
            .write_all(bytes)
            .with_context(|| format!("append '{name}' to archive"))?;
        Ok(())
    }
}

/// Gzip-compressed tar archive with reproducible headers.
///
/// Every entry has mode `0644`, uid/gid 0 and mtime 0, so identical entries give identical
/// archives.
pub struct TarGzArchive<W: Write> {
    builder: tar::Builder<GzEncoder<W>>,
}

impl<W: Write> TarGzArchive<W> {
    /// Start an archive written to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            builder: tar::Builder::new(GzEncoder::new(writer, Compression::default())),
        }
    }

    /// Write the tar trailer, flush compression and return the writer.
    pub fn finish(self) -> LayerstackResult<W> {
        let encoder = self.builder.into_inner().context("finish tar archive")?;
        let writer = encoder.finish().context("finish gzip stream")?;
        Ok(writer)
    }
}

impl<W: Write> ArchiveSink for TarGzArchive<W> {
    fn append(&mut self, name: &str, bytes: &[u8]) -> LayerstackResult<()> {
        let mut header = tar::Header::new_gnu();
        header.set_size(bytes.len() as u64);
        header.set_mode(0o644);
        header.set_uid(0);
        header.set_gid(0);
        header.set_mtime(0);
        self.builder
            .append_data(&mut header, name, bytes)
            .with_context(|| format!("append '{name}' to archive"))?;
        Ok(())
    }
}

/// Hands out entry names, suffixing repeats as `name_2.ext`, `name_3.ext`, ...
#[derive(Debug, Default)]
pub struct EntryNames {
    seen: HashSet<String>,
}

impl EntryNames {
    /// Unique name for `name` within this archive.
    pub fn claim(&mut self, name: &str) -> String {
        let mut candidate = name.to_string();
        let mut n = 1;
        while self.seen.contains(&candidate) {
            n += 1;
            candidate = suffixed(name, n);
        }
        self.seen.insert(candidate.clone());
        candidate
    }
}

fn suffixed(name: &str, n: usize) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}_{n}.{ext}"),
        _ => format!("{name}_{n}"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/archive.rs"]
mod tests;
