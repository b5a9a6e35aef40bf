//! Flat input records consumed by the tree builders.
//!
//! Records mirror single rows of the source archives. Field names follow the
//! Darwin Core terms used as column headers, so the [io](crate::io) readers
//! can deserialize rows directly. Missing columns default to empty strings.

use serde::Deserialize;

/// Taxonomic status marking a record as an alternative name of another taxon.
pub const STATUS_SYNONYM: &str = "synonym";

/// Taxonomic status of accepted records.
pub const STATUS_ACCEPTED: &str = "accepted";

// =#========================================================================#=
// GBIF TAXON
// =#========================================================================#=
/// A row of the GBIF Backbone `Taxon.tsv`.
///
/// The Backbone links records explicitly via `parentNameUsageID` and also
/// carries denormalized hierarchy columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GbifTaxon {
    #[serde(rename = "taxonID")]
    pub id: String,
    #[serde(rename = "parentNameUsageID")]
    pub parent_id: String,
    /// For synonyms, the id of the accepted taxon
    #[serde(rename = "acceptedNameUsageID")]
    pub accepted_id: String,
    #[serde(rename = "scientificName")]
    pub scientific_name: String,
    /// Name without authorship
    #[serde(rename = "canonicalName")]
    pub canonical_name: String,
    #[serde(rename = "scientificNameAuthorship")]
    pub authorship: String,
    #[serde(rename = "taxonRank")]
    pub rank: String,
    /// `accepted`, `synonym`, `doubtful`, ...
    #[serde(rename = "taxonomicStatus")]
    pub taxonomic_status: String,
    pub kingdom: String,
    pub phylum: String,
    #[serde(rename = "class")]
    pub class_: String,
    pub order: String,
    pub family: String,
    pub genus: String,
}

impl GbifTaxon {
    /// Returns `true` for accepted taxa.
    pub fn is_accepted(&self) -> bool {
        self.taxonomic_status == STATUS_ACCEPTED
    }

    /// Returns `true` for synonyms.
    pub fn is_synonym(&self) -> bool {
        self.taxonomic_status == STATUS_SYNONYM
    }

    /// Canonical name if available, else the scientific name.
    pub fn display_name(&self) -> &str {
        if self.canonical_name.is_empty() {
            &self.scientific_name
        } else {
            &self.canonical_name
        }
    }
}

// =#========================================================================#=
// WIKIPEDIA TAXON
// =#========================================================================#=
/// A row of the core taxon file of the Wikipedia Darwin Core Archive.
///
/// There is no usable parent id; hierarchy is only hinted at by the free-text
/// `taxobox` and the sparse denormalized rank columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WikipediaTaxon {
    #[serde(alias = "taxonID")]
    pub id: String,
    /// URL of the Wikipedia article
    pub references: String,
    #[serde(rename = "scientificName")]
    pub scientific_name: String,
    #[serde(rename = "taxonRank")]
    pub rank: String,
    #[serde(rename = "taxonomicStatus")]
    pub taxonomic_status: String,
    pub kingdom: String,
    pub phylum: String,
    #[serde(rename = "class")]
    pub class_: String,
    pub order: String,
    pub family: String,
    pub genus: String,
    /// Raw taxobox, e.g. `{regnum=[[Animal]]ia, ordo=[[Carnivora]], ...}`
    pub taxobox: String,
}

impl WikipediaTaxon {
    /// Returns `true` for synonyms.
    pub fn is_synonym(&self) -> bool {
        self.taxonomic_status == STATUS_SYNONYM
    }
}

// =#========================================================================#=
// VERNACULAR NAME
// =#========================================================================#=
/// A common name for a taxon, in either archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VernacularName {
    #[serde(rename = "taxonID", alias = "id", alias = "coreid")]
    pub taxon_id: String,
    #[serde(rename = "vernacularName")]
    pub name: String,
    pub language: String,
}

impl VernacularName {
    /// Creates a vernacular name record.
    pub fn new(taxon_id: &str, name: &str, language: &str) -> Self {
        VernacularName {
            taxon_id: taxon_id.to_string(),
            name: name.to_string(),
            language: language.to_string(),
        }
    }
}
