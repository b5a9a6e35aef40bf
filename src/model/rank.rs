//! Taxonomic rank vocabulary.
//!
//! Provides [Rank], a closed, totally ordered vocabulary of taxonomic ranks
//! from broadest (`domain`) to narrowest (`form`), together with the
//! [MAJOR_RANKS] subsequence used to decide whether a path is complete.

use std::fmt;

/// Priority assigned to rank strings outside the vocabulary (and to the root).
pub const UNKNOWN_RANK_PRIORITY: u32 = 999;

// =#========================================================================#=
// RANK
// =#========================================================================#=
/// A taxonomic rank.
///
/// Variants are declared from broadest to narrowest, so the derived [Ord]
/// is the taxonomic order: `Rank::Kingdom < Rank::Phylum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Domain,
    Superkingdom,
    Kingdom,
    Subkingdom,
    Superphylum,
    Phylum,
    Subphylum,
    Infraphylum,
    Superclass,
    Class,
    Subclass,
    Infraclass,
    Superorder,
    Order,
    Suborder,
    Infraorder,
    Superfamily,
    Family,
    Subfamily,
    Tribe,
    Subtribe,
    Genus,
    Subgenus,
    Species,
    Subspecies,
    Variety,
    Form,
}

/// All ranks, broadest first.
pub const RANK_ORDER: [Rank; 27] = [
    Rank::Domain,
    Rank::Superkingdom,
    Rank::Kingdom,
    Rank::Subkingdom,
    Rank::Superphylum,
    Rank::Phylum,
    Rank::Subphylum,
    Rank::Infraphylum,
    Rank::Superclass,
    Rank::Class,
    Rank::Subclass,
    Rank::Infraclass,
    Rank::Superorder,
    Rank::Order,
    Rank::Suborder,
    Rank::Infraorder,
    Rank::Superfamily,
    Rank::Family,
    Rank::Subfamily,
    Rank::Tribe,
    Rank::Subtribe,
    Rank::Genus,
    Rank::Subgenus,
    Rank::Species,
    Rank::Subspecies,
    Rank::Variety,
    Rank::Form,
];

/// Ranks that anchor a complete path, broadest first.
///
/// All other ranks are intermediate: they appear in the tree but are never
/// required when checking completeness.
pub const MAJOR_RANKS: [Rank; 7] = [
    Rank::Kingdom,
    Rank::Phylum,
    Rank::Class,
    Rank::Order,
    Rank::Family,
    Rank::Genus,
    Rank::Species,
];

impl Rank {
    /// Parses a rank name, ignoring ASCII case and surrounding whitespace.
    ///
    /// Returns `None` for names outside the vocabulary (including `"root"`
    /// and the empty string).
    ///
    /// # Examples
    /// ```
    /// use taxonomica::model::Rank;
    ///
    /// assert_eq!(Rank::from_name("KINGDOM"), Some(Rank::Kingdom));
    /// assert_eq!(Rank::from_name(" genus "), Some(Rank::Genus));
    /// assert_eq!(Rank::from_name("clade"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Rank> {
        let name = name.trim();
        RANK_ORDER
            .iter()
            .copied()
            .find(|rank| rank.as_str().eq_ignore_ascii_case(name))
    }

    /// Returns the lowercase canonical name of this rank.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Domain => "domain",
            Rank::Superkingdom => "superkingdom",
            Rank::Kingdom => "kingdom",
            Rank::Subkingdom => "subkingdom",
            Rank::Superphylum => "superphylum",
            Rank::Phylum => "phylum",
            Rank::Subphylum => "subphylum",
            Rank::Infraphylum => "infraphylum",
            Rank::Superclass => "superclass",
            Rank::Class => "class",
            Rank::Subclass => "subclass",
            Rank::Infraclass => "infraclass",
            Rank::Superorder => "superorder",
            Rank::Order => "order",
            Rank::Suborder => "suborder",
            Rank::Infraorder => "infraorder",
            Rank::Superfamily => "superfamily",
            Rank::Family => "family",
            Rank::Subfamily => "subfamily",
            Rank::Tribe => "tribe",
            Rank::Subtribe => "subtribe",
            Rank::Genus => "genus",
            Rank::Subgenus => "subgenus",
            Rank::Species => "species",
            Rank::Subspecies => "subspecies",
            Rank::Variety => "variety",
            Rank::Form => "form",
        }
    }

    /// Position in [RANK_ORDER]; lower means broader.
    pub fn priority(&self) -> u32 {
        *self as u32
    }

    /// Returns whether this rank is one of the [MAJOR_RANKS].
    pub fn is_major(&self) -> bool {
        MAJOR_RANKS.contains(self)
    }

    /// Returns all ranks strictly broader than this one, nearest first.
    ///
    /// # Examples
    /// ```
    /// use taxonomica::model::Rank;
    ///
    /// let broader: Vec<_> = Rank::Subkingdom.broader_ranks().collect();
    /// assert_eq!(broader, vec![Rank::Kingdom, Rank::Superkingdom, Rank::Domain]);
    /// ```
    pub fn broader_ranks(&self) -> impl Iterator<Item = Rank> + use<> {
        RANK_ORDER[..self.priority() as usize].iter().rev().copied()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the priority of a rank given by name, [UNKNOWN_RANK_PRIORITY] if
/// the name is not a known rank.
///
/// # Examples
/// ```
/// use taxonomica::model::rank::{rank_priority, UNKNOWN_RANK_PRIORITY};
///
/// assert!(rank_priority("kingdom") < rank_priority("phylum"));
/// assert_eq!(rank_priority("root"), UNKNOWN_RANK_PRIORITY);
/// ```
pub fn rank_priority(rank: &str) -> u32 {
    Rank::from_name(rank).map_or(UNKNOWN_RANK_PRIORITY, |r| r.priority())
}

/// Priority of an optional rank, where `None` (unranked) is [UNKNOWN_RANK_PRIORITY].
pub fn priority_of(rank: Option<Rank>) -> u32 {
    rank.map_or(UNKNOWN_RANK_PRIORITY, |r| r.priority())
}

/// Returns the major ranks a node of the given rank needs among its ancestors
/// for its path to be complete.
///
/// - A major rank requires every major rank before it in [MAJOR_RANKS].
/// - Any other rank requires every major rank broader than itself.
/// - Unranked (`None`) sorts after every rank, so it requires all major ranks.
///
/// # Examples
/// ```
/// use taxonomica::model::Rank;
/// use taxonomica::model::rank::required_major_ranks;
///
/// assert!(required_major_ranks(Some(Rank::Kingdom)).is_empty());
/// assert_eq!(
///     required_major_ranks(Some(Rank::Subfamily)),
///     vec![Rank::Kingdom, Rank::Phylum, Rank::Class, Rank::Order, Rank::Family]
/// );
/// ```
pub fn required_major_ranks(rank: Option<Rank>) -> Vec<Rank> {
    match rank {
        Some(rank) if rank.is_major() => MAJOR_RANKS
            .iter()
            .copied()
            .take_while(|major| *major != rank)
            .collect(),
        _ => {
            let priority = priority_of(rank);
            MAJOR_RANKS
                .iter()
                .copied()
                .filter(|major| major.priority() < priority)
                .collect()
        }
    }
}
