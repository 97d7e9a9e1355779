//! Product export to JSON and CSV files.
//!
//! Every export goes through a temporary file in the destination directory
//! that is renamed over the destination only once fully written, so a failed
//! export never leaves a truncated file behind.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

/// Column labels of the CSV header row.
pub const CSV_HEADER: [&str; 3] = ["Name", "Price", "URL"];

/// Export failures.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported format: {0}. Use: json, csv")]
    UnsupportedFormat(String),

    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// File format for exported products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    /// Default file name for this format.
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "products.json",
            ExportFormat::Csv => "products.csv",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(ExportError::UnsupportedFormat(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Writes product lists to disk.
#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
    delimiter: u8,
}

impl Exporter {
    /// Creates an exporter writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>, delimiter: u8) -> Self {
        Self { output_dir: output_dir.into(), delimiter }
    }

    /// Default destination for `format`.
    pub fn destination(&self, format: ExportFormat) -> PathBuf {
        self.output_dir.join(format.file_name())
    }

    /// Parses a user-typed format token and exports to the default destination.
    pub fn export_token(&self, products: &[Product], token: &str) -> Result<PathBuf, ExportError> {
        let format: ExportFormat = token.parse()?;
        self.export(products, format, &self.destination(format))
    }

    /// Writes `products` to `destination` in `format`, replacing it atomically.
    pub fn export(
        &self,
        products: &[Product],
        format: ExportFormat,
        destination: &Path,
    ) -> Result<PathBuf, ExportError> {
        let written = write_atomically(destination, |file| {
            debug!("Staging {} export for {}", format, destination.display());
            match format {
                ExportFormat::Json => write_json(file, products),
                ExportFormat::Csv => write_csv(file, products, self.delimiter),
            }
        });
        written.map_err(|source| ExportError::WriteFailed {
            path: destination.to_path_buf(),
            source,
        })?;

        info!("Exported {} products to {}", products.len(), destination.display());
        Ok(destination.to_path_buf())
    }
}

/// Runs `write` against a staging file next to `destination`, then renames
/// it over `destination`. On any error `destination` is left untouched.
fn write_atomically<F>(destination: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut fs::File) -> io::Result<()>,
{
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // The temp file is deleted on drop unless persisted.
    let mut tmp = staging_file(dir, destination)?;
    write(tmp.as_file_mut())?;
    tmp.as_file().sync_all()?;
    tmp.persist(destination).map_err(|e| e.error)?;
    Ok(())
}

/// Creates the staging file with the mode the destination should end up with:
/// the existing file's permissions, or the usual `0o666 & !umask` for a new one.
fn staging_file(dir: &Path, destination: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(dir)?;

    match fs::metadata(destination) {
        Ok(meta) if meta.is_file() => tmp.as_file().set_permissions(meta.permissions())?,
        _ => {}
    }
    Ok(tmp)
}

fn write_json(file: &mut fs::File, products: &[Product]) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, products)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

fn write_csv(file: &mut fs::File, products: &[Product], delimiter: u8) -> io::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer.write_record(CSV_HEADER)?;
    for product in products {
        writer.write_record([&product.name, &product.price, &product.url])?;
    }
    writer.flush()
}
