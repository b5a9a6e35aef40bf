use crate::redaction::vernacular::vernacular_equivalents;
use std::collections::{BTreeMap, BTreeSet};

/// Tokens of at most this many characters are not registered on their own.
const MIN_TOKEN_CHARS: usize = 3;

// =#========================================================================#=
// REDACTION TERMS
// =#========================================================================#=
/// Strings to redact, grouped by the rank name they reveal.
///
/// Each rank holds a set of case-preserving terms; adding a term twice has no
/// effect. Unranked taxa contribute under the empty rank name `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedactionTerms {
    terms_by_rank: BTreeMap<String, BTreeSet<String>>,
}

impl RedactionTerms {
    /// Creates an empty term collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a term to redact at the given rank.
    pub fn add_term(&mut self, rank: &str, term: impl Into<String>) {
        self.terms_by_rank
            .entry(rank.to_string())
            .or_default()
            .insert(term.into());
    }

    /// Adds several terms to redact at the given rank.
    pub fn add_terms<I, S>(&mut self, rank: &str, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for term in terms {
            self.add_term(rank, term);
        }
    }

    /// Returns the terms registered at the given rank.
    pub fn terms_for_rank(&self, rank: &str) -> Option<&BTreeSet<String>> {
        self.terms_by_rank.get(rank)
    }

    /// Returns the union of the terms of all given ranks; unknown ranks are ignored.
    pub fn terms_for_ranks<'a, I>(&'a self, ranks: I) -> BTreeSet<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        ranks
            .into_iter()
            .filter_map(|rank| self.terms_by_rank.get(rank))
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// Returns the union of the terms of all ranks.
    pub fn all_terms(&self) -> BTreeSet<&str> {
        self.terms_by_rank
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// Iterates over the rank names that have terms.
    pub fn ranks(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms_by_rank.keys().map(String::as_str)
    }

    /// Returns `true` if no term has been added.
    pub fn is_empty(&self) -> bool {
        self.terms_by_rank.is_empty()
    }

    // ------------------------------------------------------------------------
    // Expansion rules (pub(crate))
    // ------------------------------------------------------------------------
    /// Registers a scientific name, its long tokens, and its vernacular
    /// equivalents from the static table.
    pub(crate) fn add_scientific_name(&mut self, rank: &str, name: &str) {
        self.add_term(rank, name);
        self.add_terms(rank, long_tokens(name));

        for equivalent in vernacular_equivalents(name) {
            self.add_term(rank, *equivalent);
            self.add_terms(rank, long_tokens(equivalent));
        }
    }

    /// Registers a vernacular name as is and lowercased, plus its long
    /// tokens in both forms.
    pub(crate) fn add_vernacular_name(&mut self, rank: &str, name: &str) {
        self.add_term(rank, name);
        self.add_term(rank, name.to_lowercase());
        for token in long_tokens(name) {
            self.add_term(rank, token);
            self.add_term(rank, token.to_lowercase());
        }
    }
}

/// Whitespace-separated tokens longer than two characters.
fn long_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
}
