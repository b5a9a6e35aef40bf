//! Provides the arena-backed taxonomy tree.
//!
//! Provides core data structures for representing a tree of life:
//! * [TaxonomyTree] - Main tree structure using the arena pattern, together
//!   with lookup indices by id, by name, and by `(name, rank)`
//! * [NodeIndex] as type used to index nodes in the tree
//! * [AncestorIter] and [DescendantIter] for traversal

use crate::model::build_stats::BuildStats;
use crate::model::node::TaxonomyNode;
use crate::model::rank::{Rank, required_major_ranks};
use crate::records::VernacularName;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Write;

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

/// Id of the synthetic root.
pub const ROOT_ID: &str = "0";

/// Name of the synthetic root.
pub const ROOT_NAME: &str = "Life";

/// Languages whose vernacular names are put first.
const PREFERRED_LANGUAGES: [&str; 3] = ["en", "eng", ""];

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A rooted tree of life represented using the arena pattern on
/// [TaxonomyNode].
///
/// Nodes are stored in a contiguous vector and referenced by [NodeIndex].
/// The root is a synthetic node (`id` [ROOT_ID], name [ROOT_NAME]) created
/// with the tree and always stored at index `0`.
///
/// # Structure
/// - Every node reaches the root by following parent references.
/// - Lookup indices map ids, names and `(name, rank)` keys to node indices.
///   Several ids can point to the same node when source records were
///   coalesced.
/// - Names are not unique: homonyms across kingdoms share a name.
///
/// # Construction
/// Trees are built once by [GbifTreeBuilder](crate::gbif::GbifTreeBuilder)
/// or [WikipediaTreeBuilder](crate::wikipedia::WikipediaTreeBuilder) and are
/// read-only afterwards, apart from attaching vernacular names via
/// [`TaxonomyTree::add_vernacular_names()`].
/// Test structural validity with [`TaxonomyTree::is_valid()`].
#[derive(Debug, Clone)]
pub struct TaxonomyTree {
    /// Nodes of this tree (arena pattern)
    nodes: Vec<TaxonomyNode>,

    /// Index of the root of this tree
    root_index: NodeIndex,

    /// Source id -> node
    by_id: HashMap<String, NodeIndex>,

    /// Name -> all nodes carrying it
    by_name: HashMap<String, Vec<NodeIndex>>,

    /// `(name, rank)` -> first node registered with that key
    by_name_rank: HashMap<(String, Rank), NodeIndex>,

    /// Counters from construction
    stats: BuildStats,
}

/// Depth statistics over the leaves of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DepthStats {
    pub min_depth: usize,
    pub max_depth: usize,
    pub avg_depth: f64,
    pub leaf_count: usize,
}

// ============================================================================
// New, Construction (pub(crate))
// ============================================================================
impl TaxonomyTree {
    /// Creates a tree that only contains the synthetic root.
    pub fn new() -> Self {
        let root = TaxonomyNode::new(0, ROOT_ID.to_string(), ROOT_NAME.to_string(), None);
        let mut by_id = HashMap::new();
        by_id.insert(ROOT_ID.to_string(), 0);

        TaxonomyTree {
            nodes: vec![root],
            root_index: 0,
            by_id,
            by_name: HashMap::new(),
            by_name_rank: HashMap::new(),
            stats: BuildStats::default(),
        }
    }

    /// Adds a detached node, assigning a unique index, which gets returned.
    ///
    /// The node is registered in the name and `(name, rank)` indices, and
    /// under `id` in the id index unless `id` is already taken.
    pub(crate) fn add_node(&mut self, id: String, name: String, rank: Option<Rank>) -> NodeIndex {
        let index = self.nodes.len();

        self.by_id.entry(id.clone()).or_insert(index);
        self.by_name.entry(name.clone()).or_default().push(index);
        if let Some(rank) = rank {
            self.by_name_rank.entry((name.clone(), rank)).or_insert(index);
        }

        self.nodes.push(TaxonomyNode::new(index, id, name, rank));
        index
    }

    /// Registers an additional id for an existing node, unless `id` is
    /// already taken.
    pub(crate) fn register_id(&mut self, id: String, index: NodeIndex) {
        self.by_id.entry(id).or_insert(index);
    }

    /// Attaches `child` below `parent`, detaching it from its previous parent.
    ///
    /// # Panics
    /// Panics (in debug builds) if `parent` is `child` itself or one of its
    /// descendants; callers are responsible for never closing a cycle.
    pub(crate) fn attach(&mut self, child: NodeIndex, parent: NodeIndex) {
        debug_assert!(
            !self.is_ancestor_or_self(child, parent),
            "attaching {child} below {parent} would close a cycle"
        );

        if let Some(old_parent) = self.nodes[child].parent() {
            self.nodes[old_parent].remove_child_index(child);
        }
        self.nodes[child].set_parent(parent);
        self.nodes[parent].add_child_index(child);
    }

    /// Returns whether `candidate` is `node` or lies on the (current) parent
    /// chain of `node`.
    pub(crate) fn is_ancestor_or_self(&self, candidate: NodeIndex, node: NodeIndex) -> bool {
        let mut current = Some(node);
        while let Some(index) = current {
            if index == candidate {
                return true;
            }
            current = self.nodes[index].parent();
        }
        false
    }

    pub(crate) fn node_mut(&mut self, index: NodeIndex) -> &mut TaxonomyNode {
        &mut self.nodes[index]
    }

    pub(crate) fn stats_mut(&mut self) -> &mut BuildStats {
        &mut self.stats
    }
}

impl Default for TaxonomyTree {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Getters / Accessors, Lookup (pub)
// ============================================================================
impl TaxonomyTree {
    /// Returns a reference to the root node.
    pub fn root(&self) -> &TaxonomyNode {
        &self[self.root_index]
    }

    /// Returns the index of the root.
    pub fn root_index(&self) -> NodeIndex {
        self.root_index
    }

    /// Returns whether the node at `index` is the root.
    pub fn is_root(&self, index: NodeIndex) -> bool {
        index == self.root_index
    }

    /// Returns a reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: NodeIndex) -> &TaxonomyNode {
        &self[index]
    }

    /// Returns the node at the given index, or `None` if out of bounds.
    pub fn get(&self, index: NodeIndex) -> Option<&TaxonomyNode> {
        self.nodes.get(index)
    }

    /// Returns the number of nodes in this tree, root included.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns all nodes in arena order.
    pub fn nodes(&self) -> &[TaxonomyNode] {
        &self.nodes
    }

    /// Returns the counters collected during construction.
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Finds a node by one of its source ids.
    pub fn find_by_id(&self, id: &str) -> Option<&TaxonomyNode> {
        self.by_id.get(id).map(|&index| &self[index])
    }

    /// Finds all nodes with the given name.
    ///
    /// # Arguments
    /// * `name` - The taxon name to search for
    /// * `case_sensitive` - If `false`, scans all names comparing lowercased forms
    ///
    /// # Returns
    /// All matching nodes, possibly none. Homonyms yield several.
    pub fn find_by_name(&self, name: &str, case_sensitive: bool) -> Vec<&TaxonomyNode> {
        if case_sensitive {
            return self
                .by_name
                .get(name)
                .map(|indices| indices.iter().map(|&i| &self[i]).collect())
                .unwrap_or_default();
        }

        let name_lower = name.to_lowercase();
        let mut matches: Vec<&TaxonomyNode> = self
            .by_name
            .iter()
            .filter(|(stored, _)| stored.to_lowercase() == name_lower)
            .flat_map(|(_, indices)| indices.iter().map(|&i| &self[i]))
            .collect();
        matches.sort_by_key(|node| node.index());
        matches
    }

    /// Finds the node registered for the given `(name, rank)` key.
    pub fn find_by_name_and_rank(&self, name: &str, rank: Rank) -> Option<&TaxonomyNode> {
        self.index_of_name_and_rank(name, rank).map(|i| &self[i])
    }

    pub(crate) fn index_of_name_and_rank(&self, name: &str, rank: Rank) -> Option<NodeIndex> {
        // Tuple key lookup needs an owned String
        self.by_name_rank.get(&(name.to_string(), rank)).copied()
    }

    pub(crate) fn index_of_id(&self, id: &str) -> Option<NodeIndex> {
        self.by_id.get(id).copied()
    }
}

// ============================================================================
// Paths and completeness (pub)
// ============================================================================
impl TaxonomyTree {
    /// Returns an iterator over the ancestors of a node, from its parent up
    /// to and including the root.
    pub fn ancestors(&self, index: NodeIndex) -> AncestorIter<'_> {
        AncestorIter {
            tree: self,
            next: self[index].parent(),
        }
    }

    /// Returns the path from a node to the root, starting with the node
    /// itself and ending with the root.
    pub fn path_to_root(&self, index: NodeIndex) -> Vec<&TaxonomyNode> {
        std::iter::once(&self[index]).chain(self.ancestors(index)).collect()
    }

    /// Returns the number of edges between a node and the root.
    pub fn depth(&self, index: NodeIndex) -> usize {
        self.ancestors(index).count()
    }

    /// Checks if the node has a complete taxonomic path.
    ///
    /// A path is complete if the ancestors of the node include every major
    /// rank that is required for the rank of the node (see
    /// [required_major_ranks]). The root is always complete, as is any node
    /// whose rank requires nothing above it (e.g. a kingdom).
    pub fn has_complete_path(&self, index: NodeIndex) -> bool {
        if self.is_root(index) {
            return true;
        }

        let required = required_major_ranks(self[index].rank());
        if required.is_empty() {
            return true;
        }

        let path_ranks: Vec<Rank> = self.ancestors(index).filter_map(|n| n.rank()).collect();
        required.iter().all(|rank| path_ranks.contains(rank))
    }

    /// Returns `(present, required)`: how many of the major ranks required
    /// for this node appear among its ancestors.
    pub fn path_completeness(&self, index: NodeIndex) -> (usize, usize) {
        if self.is_root(index) {
            return (0, 0);
        }

        let required = required_major_ranks(self[index].rank());
        let path_ranks: Vec<Rank> = self.ancestors(index).filter_map(|n| n.rank()).collect();
        let present = required.iter().filter(|rank| path_ranks.contains(rank)).count();
        (present, required.len())
    }

    /// Returns the children of a node that have a complete path, sorted by
    /// name, as offered for navigation.
    pub fn complete_children(&self, index: NodeIndex) -> Vec<&TaxonomyNode> {
        let mut children: Vec<&TaxonomyNode> = self[index]
            .children()
            .filter(|&child| self.has_complete_path(child))
            .map(|child| &self[child])
            .collect();
        children.sort_by(|a, b| a.name().cmp(b.name()));
        children
    }

    /// Returns all species with a complete path, which are the only valid
    /// targets of a guessing round.
    pub fn playable_species(&self) -> Vec<&TaxonomyNode> {
        self.nodes
            .iter()
            .filter(|n| n.rank() == Some(Rank::Species))
            .filter(|n| self.has_complete_path(n.index()))
            .collect()
    }

    /// Returns the direct children of the root that are not top-level ranks
    /// (domain, superkingdom or kingdom), i.e. nodes whose parent could not
    /// be resolved.
    pub fn orphans(&self) -> Vec<&TaxonomyNode> {
        self.root()
            .children()
            .map(|i| &self[i])
            .filter(|n| {
                !matches!(
                    n.rank(),
                    Some(Rank::Domain | Rank::Superkingdom | Rank::Kingdom)
                )
            })
            .collect()
    }
}

// ============================================================================
// Statistics, Vernacular names, Validation (pub)
// ============================================================================
impl TaxonomyTree {
    /// Returns the number of descendants of a node (excluding the node).
    pub fn count_descendants(&self, index: NodeIndex) -> usize {
        self.descendants(index).count()
    }

    /// Returns an iterator over all species-level descendants of a node.
    pub fn species_descendants(
        &self,
        index: NodeIndex,
    ) -> impl Iterator<Item = &TaxonomyNode> + '_ {
        self.descendants(index)
            .filter(|n| n.rank() == Some(Rank::Species))
    }

    /// Returns the number of nodes at each rank (root excluded); unranked
    /// nodes are counted under the empty string.
    pub fn rank_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for node in self.descendants(self.root_index) {
            *counts.entry(node.rank_name()).or_insert(0) += 1;
        }
        counts
    }

    /// Returns depth statistics over all leaves (nodes without children).
    pub fn depth_stats(&self) -> DepthStats {
        let depths: Vec<usize> = self
            .descendants(self.root_index)
            .filter(|n| n.is_leaf())
            .map(|n| self.depth(n.index()))
            .collect();

        if depths.is_empty() {
            return DepthStats::default();
        }

        DepthStats {
            min_depth: depths.iter().copied().min().unwrap_or(0),
            max_depth: depths.iter().copied().max().unwrap_or(0),
            avg_depth: depths.iter().sum::<usize>() as f64 / depths.len() as f64,
            leaf_count: depths.len(),
        }
    }

    /// Attaches vernacular names to the nodes their taxon ids resolve to.
    ///
    /// Names in a preferred language (English or unspecified) are put in
    /// front, all others appended. Records whose taxon id is not in the tree
    /// or whose name is empty have no effect.
    ///
    /// # Returns
    /// Number of names attached.
    pub fn add_vernacular_names<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = VernacularName>,
    {
        let mut count = 0;
        for record in records {
            if record.name.is_empty() {
                continue;
            }
            let Some(index) = self.index_of_id(&record.taxon_id) else {
                continue;
            };
            if self.is_root(index) {
                continue;
            }

            let preferred = PREFERRED_LANGUAGES.contains(&record.language.as_str());
            self.nodes[index].push_vernacular_name(record.name, preferred);
            count += 1;
        }

        tracing::info!(count, "attached vernacular names");
        count
    }

    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Root index is valid and the root has no parent
    /// - All node indices match their position in the arena
    /// - Every non-root node has a parent listing it as a child
    /// - Every child points back to its parent
    /// - Every node reaches the root by following parents (no cycles)
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        if self.root_index >= self.nodes.len() || self[self.root_index].has_parent() {
            return false;
        }

        for (index, node) in self.nodes.iter().enumerate() {
            if node.index() != index {
                return false;
            }

            for child in node.children() {
                if child >= self.nodes.len() || self.nodes[child].parent() != Some(index) {
                    return false;
                }
            }

            if index == self.root_index {
                continue;
            }

            match node.parent() {
                None => return false,
                Some(parent) => {
                    if parent >= self.nodes.len()
                        || !self.nodes[parent].children().any(|c| c == index)
                    {
                        return false;
                    }
                }
            }

            // Root must be reached in fewer steps than there are nodes
            let mut steps = 0;
            let mut current = index;
            while current != self.root_index {
                match self.nodes[current].parent() {
                    Some(parent) if steps < self.nodes.len() => {
                        current = parent;
                        steps += 1;
                    }
                    _ => return false,
                }
            }
        }

        true
    }
}

impl std::ops::Index<NodeIndex> for TaxonomyTree {
    type Output = TaxonomyNode;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

// ============================================================================
// Printing (pub)
// ============================================================================
impl TaxonomyTree {
    /// Formats the subtree below a node for debugging.
    ///
    /// # Arguments
    /// * `index` - Node to start from
    /// * `max_depth` - Number of levels printed below the start node
    /// * `max_children` - Children shown per node (sorted by name)
    ///
    /// # Example Output
    /// ```text
    /// Life (root) [2 children]
    /// ├── Animalia (kingdom) [1 children]
    /// │   └── Chordata (phylum) [1 children]
    /// └── Plantae (kingdom) [0 children]
    /// ```
    pub fn format_subtree(&self, index: NodeIndex, max_depth: usize, max_children: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self[index]);
        self.format_children(&mut out, index, "", max_depth, max_children);
        out
    }

    /// Helper function to recursively format the children of a node.
    fn format_children(
        &self,
        out: &mut String,
        index: NodeIndex,
        prefix: &str,
        depth_left: usize,
        max_children: usize,
    ) {
        if depth_left == 0 {
            return;
        }

        let mut children: Vec<&TaxonomyNode> = self[index].children().map(|c| &self[c]).collect();
        children.sort_by(|a, b| a.name().cmp(b.name()));
        let shown = children.len().min(max_children);

        for (i, child) in children.iter().take(shown).enumerate() {
            let is_last = i + 1 == shown;
            let connector = if is_last { "└── " } else { "├── " };
            let _ = writeln!(out, "{prefix}{connector}{child}");

            let new_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
            self.format_children(out, child.index(), &new_prefix, depth_left - 1, max_children);
        }

        if children.len() > shown {
            let _ = writeln!(out, "{prefix}    ... and {} more", children.len() - shown);
        }
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl TaxonomyTree {
    /// Returns an iterator over all descendants of a node in depth-first
    /// pre-order (parents before children), not including the node itself.
    ///
    /// The iterator only borrows the tree, so it can be created again at any
    /// time and always yields the same sequence.
    pub fn descendants(&self, index: NodeIndex) -> DescendantIter<'_> {
        DescendantIter::new(self, index)
    }
}

/// Iterator from a node's parent up to the root.
pub struct AncestorIter<'a> {
    tree: &'a TaxonomyTree,
    next: Option<NodeIndex>,
}

impl<'a> Iterator for AncestorIter<'a> {
    type Item = &'a TaxonomyNode;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        let node = &self.tree[index];
        self.next = node.parent();
        Some(node)
    }
}

/// Iterator for depth-first pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
pub struct DescendantIter<'a> {
    tree: &'a TaxonomyTree,
    stack: Vec<NodeIndex>,
}

impl<'a> DescendantIter<'a> {
    fn new(tree: &'a TaxonomyTree, start: NodeIndex) -> Self {
        // Push children in reverse, so the first child is processed first
        let stack = tree[start].children().rev().collect();
        DescendantIter { tree, stack }
    }
}

impl<'a> Iterator for DescendantIter<'a> {
    type Item = &'a TaxonomyNode;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree[index];
        self.stack.extend(node.children().rev());
        Some(node)
    }
}
