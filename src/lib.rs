//! Taxonomica builds a navigable tree of life from taxonomy archives and
//! redacts taxonomic giveaways from text.
//!
//! Core functionality provided:
//! - GBIF Backbone: two-pass construction from explicit parent links, with
//!   broken links absorbed below the root. See [crate::gbif].
//! - Wikipedia: six-pass construction that infers the classification from
//!   taxoboxes, rank columns and binomial names. See [crate::wikipedia].
//! - Tree model: [TaxonomyTree] stores [TaxonomyNode]s in an arena with
//!   lookups by id, name and `(name, rank)`, plus ancestor, descendant and
//!   path-completeness queries. See [crate::model].
//! - Redaction: per-rank term sets built from a node's path and a
//!   [Redactor](crate::redaction::Redactor) that masks every rank not yet
//!   revealed. See [crate::redaction].
//! - Readers for the unpacked archives in [crate::io].
//!
//! # Usage patterns
//! 1. Quick functions build trees with default settings:
//!    [`gbif::build_tree`] and [`wikipedia::build_tree`].
//! 2. Configure a [GbifTreeBuilder](crate::gbif::GbifTreeBuilder) or
//!    [WikipediaTreeBuilder](crate::wikipedia::WikipediaTreeBuilder) for
//!    filtering and progress reporting.
//!
//! ## Example
//! ```no_run
//! use taxonomica::io::GbifBackbone;
//! use taxonomica::model::Rank;
//! use taxonomica::redaction::{Redactor, build_redaction_terms_from_node};
//!
//! let backbone = GbifBackbone::open("data/backbone")?;
//! let mut tree = taxonomica::gbif::build_tree(backbone.taxa(true)?);
//! tree.add_vernacular_names(backbone.vernacular_names()?);
//!
//! let cat = tree.find_by_name_and_rank("Felis catus", Rank::Species).unwrap();
//! let mut redactor = Redactor::new(build_redaction_terms_from_node(&tree, cat.index()));
//! redactor.reveal_rank("kingdom");
//! println!("{}", redactor.redact("The domestic cat is a small carnivorous mammal."));
//! # Ok::<(), taxonomica::error::TaxonomicaError>(())
//! ```

pub mod error;
pub mod gbif;
pub mod io;
pub mod model;
pub mod records;
pub mod redaction;
pub mod wikipedia;

pub use crate::error::TaxonomicaError;
pub use crate::model::{Rank, TaxonomyNode, TaxonomyTree};
