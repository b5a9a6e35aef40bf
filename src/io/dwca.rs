use crate::error::Result;
use crate::io::{read_tsv, required_file};
use crate::records::{VernacularName, WikipediaTaxon};
use std::path::{Path, PathBuf};

/// Core file of the archive.
pub const TAXON_FILE: &str = "taxon.txt";

/// Optional extension with common names.
pub const VERNACULAR_FILE: &str = "vernacularname.txt";

/// An unpacked Darwin Core Archive of Wikipedia species pages.
///
/// Columns are matched by their Darwin Core header names; `meta.xml` is not
/// consulted.
#[derive(Debug, Clone)]
pub struct DarwinCoreArchive {
    taxon_file: PathBuf,
    vernacular_file: PathBuf,
}

impl DarwinCoreArchive {
    /// Opens an archive directory.
    ///
    /// # Errors
    /// [MissingFile](crate::error::TaxonomicaError::MissingFile) if the
    /// directory has no `taxon.txt`.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        Ok(DarwinCoreArchive {
            taxon_file: required_file(dir, TAXON_FILE)?,
            vernacular_file: dir.join(VERNACULAR_FILE),
        })
    }

    /// Streams all taxon records, synonyms included.
    pub fn taxa(&self) -> Result<impl Iterator<Item = WikipediaTaxon> + use<>> {
        read_tsv(&self.taxon_file)
    }

    /// Streams the common names; empty if the archive has none.
    pub fn vernacular_names(&self) -> Result<Box<dyn Iterator<Item = VernacularName>>> {
        if !self.vernacular_file.is_file() {
            return Ok(Box::new(std::iter::empty()));
        }
        Ok(Box::new(read_tsv(&self.vernacular_file)?))
    }
}
