use anyhow::{Context, Result};
use csv::ReaderBuilder;
use glob::glob;
use std::{
    fs::File,
    io::{Cursor, Read},
    path::{Path, PathBuf},
};
use tracing::{debug, warn};
use zip::ZipArchive;

use crate::frame::RawTable;

/// Enumerate every `*.zip` directly under `input_dir`. Glob yields paths in
/// alphabetical order, so repeated runs see the archives in the same order.
pub fn scan_archives(input_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/*.zip", input_dir.as_ref().display());
    let mut archives = Vec::new();
    for entry in glob(&pattern).context("invalid glob pattern for archive scan")? {
        match entry {
            Ok(path) if path.is_file() => archives.push(path),
            Ok(_) => {}
            Err(e) => warn!("cannot read glob entry: {:?}", e),
        }
    }
    Ok(archives)
}

/// Open `zip_path`, find all `.csv` entries, and parse each into a
/// `RawTable` without extracting anything to disk.
///
/// Every matching entry is first buffered fully into memory, in archive
/// order, so the archive handle is released before parsing begins.
#[tracing::instrument(level = "info", skip(zip_path), fields(path = %zip_path.as_ref().display()))]
pub fn load_zip_tables<P: AsRef<Path>>(zip_path: P) -> Result<Vec<RawTable>> {
    let file = File::open(&zip_path)
        .with_context(|| format!("failed to open archive {:?}", zip_path.as_ref()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("failed to read archive {:?}", zip_path.as_ref()))?;

    let mut buffers: Vec<(String, Vec<u8>)> = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).with_context(|| {
            format!(
                "failed to access entry #{} in {:?}",
                i,
                zip_path.as_ref()
            )
        })?;
        let name = entry.name().to_string();

        if entry.is_file() && name.to_lowercase().ends_with(".csv") {
            let mut buf = Vec::with_capacity(entry.size() as usize);
            entry
                .read_to_end(&mut buf)
                .with_context(|| format!("failed to read {} into memory", name))?;
            buffers.push((name, buf));
        }
    }
    // drop the archive (and its file handle) now that we've buffered everything
    drop(archive);

    let mut tables = Vec::with_capacity(buffers.len());
    for (entry_name, data) in buffers {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // tolerate ragged rows; absent cells surface later
            .from_reader(Cursor::new(data));

        let headers: Vec<String> = rdr
            .headers()
            .with_context(|| format!("reading header row of {}", entry_name))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result
                .with_context(|| format!("CSV parse error in {} at record {}", entry_name, idx))?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        debug!(entry = %entry_name, rows = rows.len(), "parsed csv entry");
        tables.push(RawTable { headers, rows });
    }

    Ok(tables)
}
