//! Node module for taxonomy tree representation.

use crate::model::rank::{Rank, priority_of};
use crate::model::tree::NodeIndex;
use std::collections::BTreeSet;
use std::fmt;

/// Rank label shown for the synthetic root.
pub const ROOT_RANK_LABEL: &str = "root";

// =#========================================================================#=
// TAXONOMY NODE
// =#========================================================================#=
/// Represents one taxon in a [TaxonomyTree](crate::model::TaxonomyTree).
///
/// Nodes are owned by the tree arena and reference each other only by
/// [NodeIndex]. Structural fields (`parent`, `children`) are only changed by
/// the tree builders; after construction a node is read-only.
///
/// # Invariants
/// - `index` is the position of this node in the arena
/// - `parent` is `None` only for the root of a finished tree
/// - `children` never contains this node or one of its ancestors
/// - `rank` is `None` for unranked taxa and for the root
#[derive(Debug, Clone, PartialEq)]
pub struct TaxonomyNode {
    /// Index of this node in the tree arena
    index: NodeIndex,
    /// Source-specific identifier, unique within a tree
    id: String,
    /// Canonical name used for display and lookups
    name: String,
    /// Rank, `None` if unranked
    rank: Option<Rank>,
    /// Index of the parent node
    parent: Option<NodeIndex>,
    /// Indices of the child nodes, in creation order
    children: BTreeSet<NodeIndex>,
    /// Common names, English first
    vernacular_names: Vec<String>,
    /// Full scientific name including authorship
    scientific_name: Option<String>,
    /// Wikipedia article for this taxon
    wikipedia_url: Option<String>,
    /// Source record ids that collapsed into this node
    taxon_ids: BTreeSet<String>,
}

impl TaxonomyNode {
    /// Creates a detached node without parent or children.
    ///
    /// # Arguments
    /// * `index` - The position of this node in the tree arena
    /// * `id` - Source-specific identifier
    /// * `name` - Canonical name
    /// * `rank` - Rank, `None` for unranked taxa
    pub(crate) fn new(index: NodeIndex, id: String, name: String, rank: Option<Rank>) -> Self {
        TaxonomyNode {
            index,
            id,
            name,
            rank,
            parent: None,
            children: BTreeSet::new(),
            vernacular_names: Vec::new(),
            scientific_name: None,
            wikipedia_url: None,
            taxon_ids: BTreeSet::new(),
        }
    }

    /// Returns the index of this node.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Returns the source-specific id of this node.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the canonical name of this node.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rank, `None` if unranked (or the root).
    pub fn rank(&self) -> Option<Rank> {
        self.rank
    }

    /// Returns the rank name, the empty string if unranked.
    pub fn rank_name(&self) -> &'static str {
        self.rank.map_or("", |r| r.as_str())
    }

    /// Returns the rank priority (lower is broader).
    pub fn rank_priority(&self) -> u32 {
        priority_of(self.rank)
    }

    /// Returns the index of the parent, `None` for the root.
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Returns `true` if this node has a parent set.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Returns the indices of the children of this node.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = NodeIndex> + '_ {
        self.children.iter().copied()
    }

    /// Returns the number of children.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the vernacular names, English names first.
    pub fn vernacular_names(&self) -> &[String] {
        &self.vernacular_names
    }

    /// Returns the full scientific name (with authorship), if known.
    pub fn scientific_name(&self) -> Option<&str> {
        self.scientific_name.as_deref()
    }

    /// Returns the Wikipedia article URL, if known.
    pub fn wikipedia_url(&self) -> Option<&str> {
        self.wikipedia_url.as_deref()
    }

    /// Returns the source record ids that were coalesced into this node.
    pub fn taxon_ids(&self) -> &BTreeSet<String> {
        &self.taxon_ids
    }

    // Construction only

    pub(crate) fn set_parent(&mut self, parent: NodeIndex) {
        self.parent = Some(parent);
    }

    pub(crate) fn add_child_index(&mut self, child: NodeIndex) {
        self.children.insert(child);
    }

    pub(crate) fn remove_child_index(&mut self, child: NodeIndex) -> bool {
        self.children.remove(&child)
    }

    pub(crate) fn set_scientific_name(&mut self, scientific_name: String) {
        self.scientific_name = Some(scientific_name);
    }

    /// Keeps the first non-empty URL.
    pub(crate) fn offer_wikipedia_url(&mut self, url: &str) {
        if self.wikipedia_url.is_none() && !url.is_empty() {
            self.wikipedia_url = Some(url.to_string());
        }
    }

    pub(crate) fn add_taxon_id(&mut self, taxon_id: String) {
        self.taxon_ids.insert(taxon_id);
    }

    pub(crate) fn push_vernacular_name(&mut self, name: String, preferred: bool) {
        if preferred {
            self.vernacular_names.insert(0, name);
        } else {
            self.vernacular_names.push(name);
        }
    }
}

impl fmt::Display for TaxonomyNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rank = match (self.parent, self.rank) {
            (None, None) => ROOT_RANK_LABEL,
            (_, rank) => rank.map_or("unranked", |r| r.as_str()),
        };
        write!(f, "{} ({}) [{} children]", self.name, rank, self.children.len())
    }
}
