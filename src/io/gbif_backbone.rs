use crate::error::Result;
use crate::io::{read_tsv, required_file};
use crate::records::{GbifTaxon, VernacularName};
use std::path::{Path, PathBuf};

/// Core file of the Backbone.
pub const TAXON_FILE: &str = "Taxon.tsv";

/// Optional extension with common names.
pub const VERNACULAR_FILE: &str = "VernacularName.tsv";

/// An unpacked GBIF Backbone Taxonomy directory.
///
/// # Example
/// ```no_run
/// use taxonomica::gbif::build_tree;
/// use taxonomica::io::GbifBackbone;
///
/// let backbone = GbifBackbone::open("data/backbone")?;
/// let mut tree = build_tree(backbone.taxa(true)?);
/// tree.add_vernacular_names(backbone.vernacular_names()?);
/// # Ok::<(), taxonomica::error::TaxonomicaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GbifBackbone {
    taxon_file: PathBuf,
    vernacular_file: PathBuf,
}

impl GbifBackbone {
    /// Opens a Backbone directory.
    ///
    /// # Errors
    /// [MissingFile](crate::error::TaxonomicaError::MissingFile) if the
    /// directory has no `Taxon.tsv`.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        Ok(GbifBackbone {
            taxon_file: required_file(dir, TAXON_FILE)?,
            vernacular_file: dir.join(VERNACULAR_FILE),
        })
    }

    /// Streams the taxa, optionally only the accepted ones.
    pub fn taxa(&self, accepted_only: bool) -> Result<impl Iterator<Item = GbifTaxon> + use<>> {
        Ok(read_tsv::<GbifTaxon>(&self.taxon_file)?
            .filter(move |taxon| !accepted_only || taxon.is_accepted()))
    }

    /// Streams the common names; empty if the archive has none.
    pub fn vernacular_names(&self) -> Result<Box<dyn Iterator<Item = VernacularName>>> {
        if !self.vernacular_file.is_file() {
            return Ok(Box::new(std::iter::empty()));
        }
        Ok(Box::new(read_tsv(&self.vernacular_file)?))
    }
}
