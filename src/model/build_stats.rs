//! Counters collected while building a [TaxonomyTree](crate::model::TaxonomyTree).

use std::fmt;

/// Diagnostic counters of a tree build.
///
/// Purely informational; no construction logic depends on them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Input records seen
    pub taxa_processed: usize,
    /// Records with taxonomic status `accepted`
    pub accepted_taxa: usize,
    /// Records that carried some hierarchy information (Wikipedia only)
    pub taxa_with_hierarchy: usize,
    /// Nodes created from input records
    pub nodes_created: usize,
    /// Nodes synthesized for ranks without their own record (Wikipedia only)
    pub implicit_nodes_created: usize,
    /// Nodes attached below a non-root parent
    pub nodes_linked: usize,
    /// Direct children of the root after construction, top-level ranks
    /// included (see [TaxonomyTree::orphans](crate::model::TaxonomyTree::orphans)
    /// for the narrower set)
    pub orphans: usize,
}

impl fmt::Display for BuildStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Build statistics:")?;
        writeln!(f, "  taxa processed:  {}", self.taxa_processed)?;
        writeln!(f, "  accepted taxa:   {}", self.accepted_taxa)?;
        writeln!(f, "  with hierarchy:  {}", self.taxa_with_hierarchy)?;
        writeln!(f, "  nodes created:   {}", self.nodes_created)?;
        writeln!(f, "  implicit nodes:  {}", self.implicit_nodes_created)?;
        writeln!(f, "  nodes linked:    {}", self.nodes_linked)?;
        write!(f, "  root children:   {}", self.orphans)
    }
}
