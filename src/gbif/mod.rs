//! Tree construction from the GBIF Backbone Taxonomy.
//!
//! The Backbone has explicit parent-child relationships via
//! `parentNameUsageID`, so no inference is needed: [GbifTreeBuilder] creates
//! all nodes first and links them in a second pass. Broken links are
//! flattened to the top level rather than dropped.
//!
//! # Quick API
//! * [`build_tree`] - builds a tree from all given records with default settings
//!
//! # Full API
//! Configure a [GbifTreeBuilder] to filter to accepted taxa or to tune
//! progress reporting.

pub mod builder;

pub use builder::GbifTreeBuilder;

use crate::model::TaxonomyTree;
use crate::records::GbifTaxon;

/// Builds a [TaxonomyTree] from Backbone records using default settings.
///
/// # Example
/// ```
/// use taxonomica::gbif::build_tree;
/// use taxonomica::records::GbifTaxon;
///
/// let records = vec![
///     GbifTaxon { id: "1".into(), canonical_name: "Animalia".into(), rank: "kingdom".into(), ..Default::default() },
///     GbifTaxon { id: "2".into(), parent_id: "99".into(), canonical_name: "Chordata".into(), rank: "phylum".into(), ..Default::default() },
/// ];
/// let tree = build_tree(records);
/// // Parent "99" is unknown, so Chordata is attached directly to the root
/// assert_eq!(tree.root().num_children(), 2);
/// ```
pub fn build_tree<I>(records: I) -> TaxonomyTree
where
    I: IntoIterator<Item = GbifTaxon>,
{
    GbifTreeBuilder::new().build(records)
}
