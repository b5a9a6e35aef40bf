//! Rank-aware redaction of taxonomic giveaways in free text.
//!
//! A round of the guessing game hides everything a description says about
//! the target taxon's classification. Terms are collected per rank into
//! [RedactionTerms], and a [Redactor] masks the terms of every rank the
//! player has not revealed yet.
//!
//! # Term expansion
//! For each taxon on the path (the root excluded) the following terms are
//! registered under the taxon's rank:
//! - the scientific name and each of its tokens longer than two characters,
//! - every vernacular name as is and lowercased, plus its long tokens in
//!   both forms,
//! - common English equivalents of well-known names (see
//!   [vernacular_equivalents]) and their long tokens.
//!
//! # Example
//! ```
//! use std::collections::BTreeMap;
//! use taxonomica::redaction::{Redactor, build_redaction_terms_manual};
//!
//! let hierarchy = BTreeMap::from([
//!     ("family".to_string(), "Felidae".to_string()),
//!     ("species".to_string(), "Felis catus".to_string()),
//! ]);
//! let vernacular = BTreeMap::from([("species".to_string(), vec!["domestic cat".to_string()])]);
//! let terms = build_redaction_terms_manual(&hierarchy, Some(&vernacular));
//!
//! let redactor = Redactor::new(terms);
//! assert_eq!(redactor.redact("Felis catus, the housecat."), "█████, the house█████.");
//! ```

pub mod redactor;
pub mod terms;
pub mod vernacular;

pub use redactor::{DEFAULT_MARKER, Redactor};
pub use terms::RedactionTerms;
pub use vernacular::vernacular_equivalents;

use crate::model::tree::{NodeIndex, TaxonomyTree};
use std::collections::BTreeMap;

/// Collects the redaction terms of a node and all of its ancestors.
///
/// Each taxon contributes under its own rank name; unranked taxa contribute
/// under `""`. The root contributes nothing.
///
/// # Panics
/// Panics if `index` is out of bounds.
pub fn build_redaction_terms_from_node(tree: &TaxonomyTree, index: NodeIndex) -> RedactionTerms {
    let mut terms = RedactionTerms::new();

    for node in tree.path_to_root(index) {
        if tree.is_root(node.index()) {
            continue;
        }

        let rank = node.rank_name();
        terms.add_scientific_name(rank, node.name());
        for vernacular in node.vernacular_names() {
            terms.add_vernacular_name(rank, vernacular);
        }
    }

    terms
}

/// Collects redaction terms from a hand-written classification.
///
/// # Arguments
/// * `hierarchy` - Rank name -> scientific name, e.g. `"family" -> "Felidae"`
/// * `vernacular_names` - Optional rank name -> common names
pub fn build_redaction_terms_manual(
    hierarchy: &BTreeMap<String, String>,
    vernacular_names: Option<&BTreeMap<String, Vec<String>>>,
) -> RedactionTerms {
    let mut terms = RedactionTerms::new();

    for (rank, name) in hierarchy {
        terms.add_scientific_name(rank, name);
    }

    for (rank, names) in vernacular_names.into_iter().flatten() {
        for name in names {
            terms.add_vernacular_name(rank, name);
        }
    }

    terms
}
