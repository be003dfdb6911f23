use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, StringRecord};
use flate2::read::GzDecoder;
use glob::glob;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::filter::REQUIRED_COLUMNS;
use crate::RawRow;

/// All `.csv` and `.csv.gz` files under `directory`, sorted by path.
pub fn find_csv_files<P: AsRef<Path>>(directory: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for suffix in ["**/*.csv", "**/*.csv.gz"] {
        let pattern = directory.as_ref().join(suffix);
        let pattern_str = pattern.to_string_lossy();
        files.extend(glob(&pattern_str)?.filter_map(Result::ok));
    }
    files.sort();
    Ok(files)
}

/// Resolves the input argument into the list of files to read.
pub fn input_files<P: AsRef<Path>>(input: P) -> Result<Vec<PathBuf>> {
    let input = input.as_ref();
    if input.is_dir() {
        find_csv_files(input)
    } else if input.exists() {
        Ok(vec![input.to_path_buf()])
    } else {
        bail!("Input {} does not exist", input.display())
    }
}

fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let is_gzip = path.extension().is_some_and(|ext| ext == "gz");
    if is_gzip {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

fn check_required_columns(headers: &StringRecord, path: &Path) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            bail!("Missing required column '{}' in {}", column, path.display());
        }
    }
    Ok(())
}

/// Streams the rows of one export file. Fails up front if a required column
/// is absent; each row yields an error if the file is structurally broken.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<impl Iterator<Item = Result<RawRow>>> {
    let path = path.as_ref().to_path_buf();
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(open_input(&path)?);

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read header of {}", path.display()))?;
    check_required_columns(headers, &path)?;

    Ok(reader.into_deserialize::<RawRow>().map(move |row| {
        row.with_context(|| format!("Failed to read row from {}", path.display()))
    }))
}
