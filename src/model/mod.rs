/// Taxonomic rank vocabulary and priorities
pub mod rank;
/// Tree node carrying one taxon
pub mod node;
/// Arena-backed tree with lookup indices and queries
pub mod tree;
/// Diagnostic counters of a tree build
pub mod build_stats;

pub use build_stats::BuildStats;
pub use node::TaxonomyNode;
pub use rank::{MAJOR_RANKS, RANK_ORDER, Rank, UNKNOWN_RANK_PRIORITY};
pub use tree::{DepthStats, NodeIndex, TaxonomyTree};
