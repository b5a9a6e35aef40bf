//! Six-pass tree construction from Wikipedia taxon records.
//!
//! Wikipedia records carry no reliable parent id. Their classification is
//! only hinted at by taxoboxes and sparse rank columns, which differ between
//! articles, skip ranks without an article of their own, and tend to be
//! terser for species than for genera. No single pass resolves the tree, so
//! construction runs as a fixed pipeline:
//!
//! 1. **Collect**: keep non-synonym records with a name, together with their
//!    normalized rank and merged [Hierarchy].
//! 2. **Create self nodes**: one node per `(name, rank)`; records denoting the
//!    same taxon coalesce. New nodes start below the root.
//! 3. **Link via own hierarchy**: attach root-level nodes to the nearest
//!    broader rank of their own hierarchy that has a node.
//! 4. **Materialize implicit ancestors**: walk every hierarchy broadest first,
//!    creating missing nodes and pulling root-level nodes into the chain.
//! 5. **Species to genus**: attach root-level species to the genus named by
//!    the first word of their binomial.
//! 6. **Genus propagation**: attach root-level genera using the hierarchy
//!    their species declare above genus level.
//!
//! Every link goes from a broader to a strictly narrower rank, which keeps
//! the result acyclic. Nodes without any usable signal stay below the root.

use crate::model::Rank;
use crate::model::tree::{NodeIndex, ROOT_ID, TaxonomyTree};
use crate::records::WikipediaTaxon;
use crate::wikipedia::taxobox::{Hierarchy, hierarchy_for_record};
use std::collections::HashMap;

/// Default number of records between progress events.
const DEFAULT_PROGRESS_INTERVAL: usize = 50_000;

/// Passes 2 to 6, in the order they must run.
const LINKING_PASSES: [Pass; 5] = [
    Pass {
        name: "create self nodes",
        run: create_self_nodes,
    },
    Pass {
        name: "link via own hierarchy",
        run: link_via_own_hierarchy,
    },
    Pass {
        name: "materialize implicit ancestors",
        run: materialize_implicit_ancestors,
    },
    Pass {
        name: "link species to genera by name",
        run: link_species_to_genera,
    },
    Pass {
        name: "propagate species hierarchy to genera",
        run: propagate_hierarchy_to_genera,
    },
];

/// A record retained by the collect pass.
#[derive(Debug, Clone)]
struct CollectedTaxon {
    record_id: String,
    name: String,
    rank: Option<Rank>,
    hierarchy: Hierarchy,
    wikipedia_url: String,
    /// Node chosen for this record by pass 2
    node: Option<NodeIndex>,
}

/// State shared by all passes.
struct BuildState {
    tree: TaxonomyTree,
    taxa: Vec<CollectedTaxon>,
}

/// A named construction step; returns the number of nodes it created or linked.
struct Pass {
    name: &'static str,
    run: fn(&mut BuildState) -> usize,
}

// =#========================================================================#=
// WIKIPEDIA TREE BUILDER
// =#========================================================================#=
/// Builder that constructs a [TaxonomyTree] from Wikipedia taxon records.
///
/// Node identity is `(name, rank)`: records for the same taxon (e.g. via
/// redirects) collapse into one node whose
/// [taxon_ids](crate::model::TaxonomyNode::taxon_ids) collect all record
/// ids. Unrelated taxa sharing name and rank are merged as well.
///
/// # Example
/// ```
/// use taxonomica::wikipedia::WikipediaTreeBuilder;
/// use taxonomica::records::WikipediaTaxon;
///
/// let records = vec![
///     WikipediaTaxon { id: "1".into(), scientific_name: "Felis".into(), rank: "genus".into(), ..Default::default() },
///     WikipediaTaxon { id: "2".into(), scientific_name: "Felis catus".into(), rank: "species".into(), ..Default::default() },
/// ];
/// let tree = WikipediaTreeBuilder::new().build(records);
/// let cat = tree.find_by_id("2").unwrap();
/// assert_eq!(tree[cat.parent().unwrap()].name(), "Felis");
/// ```
#[derive(Debug, Clone)]
pub struct WikipediaTreeBuilder {
    progress_interval: usize,
}

impl WikipediaTreeBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Emit a progress event every `interval` records; `0` disables them.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Builds the tree from a stream of Wikipedia records.
    pub fn build<I>(&self, records: I) -> TaxonomyTree
    where
        I: IntoIterator<Item = WikipediaTaxon>,
    {
        let mut state = BuildState {
            tree: TaxonomyTree::new(),
            taxa: Vec::new(),
        };
        self.collect(&mut state, records);

        for (number, pass) in LINKING_PASSES.iter().enumerate() {
            let affected = (pass.run)(&mut state);
            tracing::info!(pass = number + 2, name = pass.name, affected, "finished pass");
        }

        let orphans = state.tree.root().num_children();
        state.tree.stats_mut().orphans = orphans;
        tracing::info!(orphans, "remaining direct children of root");

        state.tree
    }

    /// Pass 1: keeps usable records with their rank and merged hierarchy.
    fn collect<I>(&self, state: &mut BuildState, records: I)
    where
        I: IntoIterator<Item = WikipediaTaxon>,
    {
        for record in records {
            let stats = state.tree.stats_mut();
            stats.taxa_processed += 1;
            let processed = stats.taxa_processed;
            if self.progress_interval > 0 && processed % self.progress_interval == 0 {
                tracing::debug!(processed, "collected Wikipedia taxa");
            }

            if record.is_synonym() || record.scientific_name.is_empty() {
                continue;
            }

            let hierarchy = hierarchy_for_record(&record);
            if !hierarchy.is_empty() {
                state.tree.stats_mut().taxa_with_hierarchy += 1;
            }

            state.taxa.push(CollectedTaxon {
                rank: Rank::from_name(&record.rank),
                hierarchy,
                record_id: record.id,
                name: record.scientific_name,
                wikipedia_url: record.references,
                node: None,
            });
        }

        tracing::info!(pass = 1, collected = state.taxa.len(), "finished pass");
    }
}

impl Default for WikipediaTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Passes (private)
// ============================================================================
/// Pass 2: finds or creates the `(name, rank)` node of every ranked record.
///
/// Empty ids and the root's id are not registered; a node created from such
/// a record gets a synthesized id. The first record claiming an id keeps it.
fn create_self_nodes(state: &mut BuildState) -> usize {
    let BuildState { tree, taxa } = state;
    let root = tree.root_index();
    let mut created = 0;

    for taxon in taxa.iter_mut() {
        let Some(rank) = taxon.rank else {
            continue;
        };

        let usable_id = !taxon.record_id.is_empty() && taxon.record_id != ROOT_ID;
        if !usable_id {
            tracing::debug!(id = %taxon.record_id, name = %taxon.name, "ignoring unusable Wikipedia taxon id");
        }

        let index = match tree.index_of_name_and_rank(&taxon.name, rank) {
            Some(existing) => {
                if usable_id {
                    tree.register_id(taxon.record_id.clone(), existing);
                }
                existing
            }
            None => {
                let id = if usable_id {
                    taxon.record_id.clone()
                } else {
                    implicit_id(rank, &taxon.name)
                };
                let index = tree.add_node(id, taxon.name.clone(), Some(rank));
                tree.attach(index, root);
                created += 1;
                index
            }
        };
        taxon.node = Some(index);

        let node = tree.node_mut(index);
        if usable_id {
            node.add_taxon_id(taxon.record_id.clone());
        }
        node.offer_wikipedia_url(&taxon.wikipedia_url);
    }

    tree.stats_mut().nodes_created += created;
    created
}

/// Pass 3: attaches root-level nodes using their own record's hierarchy.
fn link_via_own_hierarchy(state: &mut BuildState) -> usize {
    let BuildState { tree, taxa } = state;
    let root = tree.root_index();
    let mut linked = 0;

    for taxon in taxa.iter() {
        let Some(index) = taxon.node else {
            continue;
        };
        let Some(rank) = tree[index].rank() else {
            continue;
        };
        if tree[index].parent() != Some(root) {
            continue;
        }

        if let Some(parent) = find_best_parent(tree, rank, &taxon.hierarchy) {
            tree.attach(index, parent);
            linked += 1;
        }
    }

    tree.stats_mut().nodes_linked += linked;
    linked
}

/// Pass 4: creates nodes for ranks that only appear inside hierarchies.
fn materialize_implicit_ancestors(state: &mut BuildState) -> usize {
    let BuildState { tree, taxa } = state;
    let root = tree.root_index();
    let mut implicit_created = 0;
    let mut linked = 0;

    for taxon in taxa.iter().filter(|t| !t.hierarchy.is_empty()) {
        let mut previous: Option<NodeIndex> = None;

        for (rank, name) in taxon.hierarchy.iter() {
            let index = match tree.index_of_name_and_rank(name, rank) {
                None => {
                    let index = tree.add_node(implicit_id(rank, name), name.to_string(), Some(rank));
                    tree.attach(index, previous.unwrap_or(root));
                    implicit_created += 1;
                    index
                }
                Some(existing) => {
                    if let Some(parent) = previous {
                        if tree[existing].parent() == Some(root) {
                            tree.attach(existing, parent);
                            linked += 1;
                        }
                    }
                    existing
                }
            };
            previous = Some(index);
        }
    }

    let stats = tree.stats_mut();
    stats.implicit_nodes_created += implicit_created;
    stats.nodes_linked += linked;
    implicit_created + linked
}

/// Pass 5: attaches root-level species to the genus of their binomial.
fn link_species_to_genera(state: &mut BuildState) -> usize {
    let tree = &mut state.tree;
    let mut linked = 0;

    for index in root_children_with_rank(tree, Rank::Species) {
        let Some(genus_name) = binomial_genus(tree[index].name()) else {
            continue;
        };
        let Some(genus) = tree.index_of_name_and_rank(genus_name, Rank::Genus) else {
            continue;
        };
        if tree[index].parent() != Some(genus) {
            tree.attach(index, genus);
            linked += 1;
        }
    }

    tree.stats_mut().nodes_linked += linked;
    linked
}

/// Pass 6: attaches root-level genera using hierarchy collected from their species.
fn propagate_hierarchy_to_genera(state: &mut BuildState) -> usize {
    let BuildState { tree, taxa } = state;

    let mut genus_hierarchy: HashMap<String, Hierarchy> = HashMap::new();
    for taxon in taxa.iter() {
        if taxon.rank != Some(Rank::Species) || taxon.hierarchy.is_empty() {
            continue;
        }
        let genus_name = match taxon.hierarchy.get(Rank::Genus) {
            Some(genus) => genus,
            None => match binomial_genus(&taxon.name) {
                Some(genus) => genus,
                None => continue,
            },
        };

        let entry = genus_hierarchy.entry(genus_name.to_string()).or_default();
        for (rank, name) in taxon.hierarchy.iter().filter(|(r, _)| *r < Rank::Genus) {
            entry.insert(rank, name.to_string());
        }
    }

    let mut linked = 0;
    for index in root_children_with_rank(tree, Rank::Genus) {
        let Some(hierarchy) = genus_hierarchy.get(tree[index].name()) else {
            continue;
        };
        if let Some(parent) = find_best_parent(tree, Rank::Genus, hierarchy) {
            tree.attach(index, parent);
            linked += 1;
        }
    }

    tree.stats_mut().nodes_linked += linked;
    linked
}

// ============================================================================
// Helpers (private)
// ============================================================================
/// Finds the nearest broader rank of `rank` that is named in `hierarchy` and
/// has a matching `(name, rank)` node.
///
/// The found node is not checked for a complete path itself.
fn find_best_parent(tree: &TaxonomyTree, rank: Rank, hierarchy: &Hierarchy) -> Option<NodeIndex> {
    if hierarchy.is_empty() {
        return None;
    }

    rank.broader_ranks().find_map(|broader| {
        hierarchy
            .get(broader)
            .and_then(|name| tree.index_of_name_and_rank(name, broader))
    })
}

/// Snapshot of the root's children with the given rank.
fn root_children_with_rank(tree: &TaxonomyTree, rank: Rank) -> Vec<NodeIndex> {
    tree.root()
        .children()
        .filter(|&child| tree[child].rank() == Some(rank))
        .collect()
}

/// First word of a binomial (`"Felis catus"` -> `"Felis"`), `None` for
/// single-word names.
fn binomial_genus(name: &str) -> Option<&str> {
    let mut words = name.split_whitespace();
    let genus = words.next()?;
    words.next().map(|_| genus)
}

/// Id of a node synthesized from hierarchy data.
fn implicit_id(rank: Rank, name: &str) -> String {
    format!("implicit:{rank}:{name}")
}
