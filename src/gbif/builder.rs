//! Two-pass tree construction from GBIF Backbone records.

use crate::model::rank::Rank;
use crate::model::tree::{NodeIndex, TaxonomyTree};
use crate::records::GbifTaxon;

/// Default number of records between progress events.
const DEFAULT_PROGRESS_INTERVAL: usize = 500_000;

// =#========================================================================#=
// GBIF TREE BUILDER
// =#========================================================================#=
/// Builder that constructs a [TaxonomyTree] from GBIF Backbone records.
///
/// Parent links are explicit in the Backbone, so construction takes two passes:
/// 1. **Node creation**: one node per record id, links are only recorded.
/// 2. **Linkage**: each recorded `(child, parent)` pair is attached. A parent
///    that is absent (e.g. filtered out) does not block membership; the child
///    is attached to the root instead. Nodes without any parent id end up
///    below the root as well.
///
/// Links that would close a cycle (including a record naming itself as its
/// parent) are treated like missing parents.
///
/// # Example
/// ```
/// use taxonomica::gbif::GbifTreeBuilder;
/// use taxonomica::records::GbifTaxon;
///
/// let records = vec![
///     GbifTaxon { id: "1".into(), canonical_name: "Animalia".into(), rank: "KINGDOM".into(), ..Default::default() },
///     GbifTaxon { id: "44".into(), parent_id: "1".into(), canonical_name: "Chordata".into(), rank: "PHYLUM".into(), ..Default::default() },
/// ];
/// let tree = GbifTreeBuilder::new().build(records);
/// let chordata = tree.find_by_id("44").unwrap();
/// assert_eq!(tree[chordata.parent().unwrap()].name(), "Animalia");
/// ```
#[derive(Debug, Clone)]
pub struct GbifTreeBuilder {
    accepted_only: bool,
    progress_interval: usize,
}

impl GbifTreeBuilder {
    /// Creates a builder that keeps every record it is given.
    pub fn new() -> Self {
        Self {
            accepted_only: false,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Only build nodes for records with taxonomic status `accepted`.
    pub fn with_accepted_only(mut self, accepted_only: bool) -> Self {
        self.accepted_only = accepted_only;
        self
    }

    /// Emit a progress event every `interval` records; `0` disables them.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Builds the tree from a stream of Backbone records.
    pub fn build<I>(&self, records: I) -> TaxonomyTree
    where
        I: IntoIterator<Item = GbifTaxon>,
    {
        let mut tree = TaxonomyTree::new();
        let pending_links = self.create_nodes(&mut tree, records);
        link_nodes(&mut tree, pending_links);
        tree
    }

    /// Pass 1: creates one node per record id, returns deferred links.
    fn create_nodes<I>(&self, tree: &mut TaxonomyTree, records: I) -> Vec<(NodeIndex, String)>
    where
        I: IntoIterator<Item = GbifTaxon>,
    {
        let mut pending_links = Vec::new();

        for record in records {
            if self.accepted_only && !record.is_accepted() {
                continue;
            }

            let stats = tree.stats_mut();
            stats.taxa_processed += 1;
            if record.is_accepted() {
                stats.accepted_taxa += 1;
            }
            let processed = stats.taxa_processed;
            if self.progress_interval > 0 && processed % self.progress_interval == 0 {
                tracing::debug!(processed, "processed GBIF taxa");
            }

            if record.id.is_empty() {
                tracing::debug!(name = %record.display_name(), "skipping GBIF taxon without id");
                continue;
            }
            if tree.index_of_id(&record.id).is_some() {
                tracing::debug!(id = %record.id, "coalescing duplicate GBIF taxon id");
                continue;
            }

            let name = record.display_name().to_string();
            let rank = Rank::from_name(&record.rank);
            let index = tree.add_node(record.id, name, rank);
            if !record.scientific_name.is_empty() {
                tree.node_mut(index).set_scientific_name(record.scientific_name);
            }
            tree.stats_mut().nodes_created += 1;

            if !record.parent_id.is_empty() {
                pending_links.push((index, record.parent_id));
            }
        }

        tracing::info!(nodes = tree.stats().nodes_created, "pass 1: created nodes");
        pending_links
    }
}

impl Default for GbifTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Pass 2: attaches children to parents, absorbing unresolvable links at root.
fn link_nodes(tree: &mut TaxonomyTree, pending_links: Vec<(NodeIndex, String)>) {
    let root = tree.root_index();
    let mut linked = 0;
    let mut absorbed = 0;

    for (child, parent_id) in pending_links {
        match tree.index_of_id(&parent_id) {
            Some(parent) if parent != root && !tree.is_ancestor_or_self(child, parent) => {
                tree.attach(child, parent);
                linked += 1;
            }
            _ => {
                tree.attach(child, root);
                absorbed += 1;
            }
        }
    }

    // Records without parent id
    let unlinked: Vec<NodeIndex> = tree
        .nodes()
        .iter()
        .filter(|n| n.index() != root && !n.has_parent())
        .map(|n| n.index())
        .collect();
    for index in unlinked {
        tree.attach(index, root);
    }

    let orphans = tree.root().num_children();
    let stats = tree.stats_mut();
    stats.nodes_linked = linked;
    stats.orphans = orphans;

    tracing::info!(linked, absorbed, orphans, "pass 2: linked nodes to parents");
}
