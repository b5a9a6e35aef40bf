//! Tree construction from the Wikipedia Darwin Core Archive.
//!
//! Wikipedia records have no parent ids, so the classification has to be
//! inferred from taxoboxes, rank columns and binomial names. See
//! [WikipediaTreeBuilder] for the passes involved and [taxobox] for the
//! markup handling.
//!
//! # Quick API
//! * [`build_tree`] - builds a tree from all given records with default settings

pub mod builder;
pub mod taxobox;

pub use builder::WikipediaTreeBuilder;
pub use taxobox::Hierarchy;

use crate::model::TaxonomyTree;
use crate::records::WikipediaTaxon;

/// Builds a [TaxonomyTree] from Wikipedia records using default settings.
///
/// # Example
/// ```
/// use taxonomica::wikipedia::build_tree;
/// use taxonomica::records::WikipediaTaxon;
///
/// let records = vec![WikipediaTaxon {
///     id: "7".into(),
///     scientific_name: "Panthera leo".into(),
///     rank: "species".into(),
///     taxobox: "{regnum=Animalia, familia=[[Felidae]], genus=''[[Panthera]]''}".into(),
///     ..Default::default()
/// }];
/// let tree = build_tree(records);
/// let path: Vec<&str> = tree
///     .path_to_root(tree.find_by_id("7").unwrap().index())
///     .iter()
///     .map(|n| n.name())
///     .collect();
/// assert_eq!(path, ["Panthera leo", "Panthera", "Felidae", "Animalia", "Life"]);
/// ```
pub fn build_tree<I>(records: I) -> TaxonomyTree
where
    I: IntoIterator<Item = WikipediaTaxon>,
{
    WikipediaTreeBuilder::new().build(records)
}
