//! Readers for the tab-separated taxonomy archives.
//!
//! * [GbifBackbone] - an unpacked GBIF Backbone Taxonomy (`Taxon.tsv`, `VernacularName.tsv`)
//! * [DarwinCoreArchive] - an unpacked Wikipedia Darwin Core Archive (`taxon.txt`, `vernacularname.txt`)
//!
//! Both read header-row TSV files without quoting and stream records lazily.
//! Rows that cannot be decoded are skipped.

pub mod dwca;
pub mod gbif_backbone;

pub use dwca::DarwinCoreArchive;
pub use gbif_backbone::GbifBackbone;

use crate::error::{Result, TaxonomicaError};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Returns the path of a file that must exist inside an archive directory.
pub(crate) fn required_file(dir: &Path, name: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if path.is_file() {
        Ok(path)
    } else {
        Err(TaxonomicaError::MissingFile(path))
    }
}

/// Streams the rows of a TSV file as records of type `T`.
pub(crate) fn read_tsv<T>(path: &Path) -> Result<impl Iterator<Item = T> + use<T>>
where
    T: DeserializeOwned,
{
    let file = File::open(path)?;
    let reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .flexible(true)
        .has_headers(true)
        .from_reader(file);

    let source = path.display().to_string();
    Ok(reader
        .into_deserialize::<T>()
        .filter_map(move |row| match row {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::debug!(file = %source, %err, "skipping undecodable row");
                None
            }
        }))
}
