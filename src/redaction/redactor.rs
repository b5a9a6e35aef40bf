use crate::redaction::terms::RedactionTerms;
use regex::{NoExpand, Regex, RegexBuilder};
use std::collections::BTreeSet;

/// Marker used in fixed-length mode.
pub const DEFAULT_MARKER: &str = "█████";

/// Glyph repeated in variable-length mode.
const MARKER_GLYPH: char = '█';

/// Terms with fewer characters are never redacted.
const MIN_TERM_CHARS: usize = 3;

// =#========================================================================#=
// REDACTOR
// =#========================================================================#=
/// Masks the terms of all ranks that have not been revealed yet.
///
/// Matching is case-insensitive and deliberately not bounded by word
/// boundaries: a hidden `"cat"` also masks the middle of `"housecat"` (and of
/// `"category"`). Longer terms are replaced first, so a hidden
/// `"domestic cat"` becomes one masked span rather than two.
///
/// One redactor holds the state of one game; ranks are revealed as they are
/// guessed. Patterns are rebuilt on each call from the current state.
///
/// # Example
/// ```
/// use taxonomica::redaction::{RedactionTerms, Redactor};
///
/// let mut terms = RedactionTerms::new();
/// terms.add_terms("family", ["Felidae", "feline"]);
/// terms.add_terms("species", ["domestic cat", "cat"]);
///
/// let mut redactor = Redactor::new(terms);
/// assert_eq!(redactor.redact("The domestic cat is a feline."), "The █████ is a █████.");
///
/// redactor.reveal_rank("family");
/// assert_eq!(redactor.redact("The domestic cat is a feline."), "The █████ is a feline.");
/// ```
#[derive(Debug, Clone)]
pub struct Redactor {
    terms: RedactionTerms,
    revealed_ranks: BTreeSet<String>,
    marker: String,
    use_variable_length: bool,
}

/// A compiled hidden term with its replacement.
struct Pattern {
    regex: Regex,
    marker: String,
}

impl Redactor {
    /// Creates a redactor with all ranks hidden, using [DEFAULT_MARKER].
    pub fn new(terms: RedactionTerms) -> Self {
        Self {
            terms,
            revealed_ranks: BTreeSet::new(),
            marker: DEFAULT_MARKER.to_string(),
            use_variable_length: false,
        }
    }

    /// Replaces matches with `marker` instead of [DEFAULT_MARKER].
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Replaces each match with as many block glyphs as the term has
    /// characters (at least three), ignoring the fixed marker.
    pub fn with_variable_length(mut self, use_variable_length: bool) -> Self {
        self.use_variable_length = use_variable_length;
        self
    }

    /// Returns the terms this redactor works with.
    pub fn terms(&self) -> &RedactionTerms {
        &self.terms
    }

    // ------------------------------------------------------------------------
    // Reveal state
    // ------------------------------------------------------------------------
    /// Marks a rank as revealed, so its terms stay visible.
    pub fn reveal_rank(&mut self, rank: &str) {
        self.revealed_ranks.insert(rank.to_string());
    }

    /// Marks a rank as hidden again.
    pub fn hide_rank(&mut self, rank: &str) {
        self.revealed_ranks.remove(rank);
    }

    /// Hides all ranks.
    pub fn reset(&mut self) {
        self.revealed_ranks.clear();
    }

    /// Reveals every rank that has terms.
    pub fn reveal_all(&mut self) {
        let ranks: Vec<String> = self.terms.ranks().map(str::to_string).collect();
        self.revealed_ranks.extend(ranks);
    }

    /// Returns whether the terms of `rank` are currently visible.
    pub fn is_revealed(&self, rank: &str) -> bool {
        self.revealed_ranks.contains(rank)
    }

    /// Returns the ranks revealed so far, including ranks without terms.
    pub fn revealed_ranks(&self) -> &BTreeSet<String> {
        &self.revealed_ranks
    }

    /// Returns the ranks that have terms and are not revealed.
    pub fn hidden_ranks(&self) -> BTreeSet<&str> {
        self.terms
            .ranks()
            .filter(|rank| !self.revealed_ranks.contains(*rank))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Redaction
    // ------------------------------------------------------------------------
    /// Returns `text` with every hidden term masked.
    pub fn redact(&self, text: &str) -> String {
        let mut result = text.to_string();
        for pattern in self.build_patterns() {
            result = pattern
                .regex
                .replace_all(&result, NoExpand(&pattern.marker))
                .into_owned();
        }
        result
    }

    /// Counts the matches of all hidden terms in `text`.
    ///
    /// Each term is matched against the unmodified text, so overlapping
    /// terms (`"domestic cat"` and `"cat"`) are both counted.
    pub fn count_redactions(&self, text: &str) -> usize {
        self.build_patterns()
            .iter()
            .map(|pattern| pattern.regex.find_iter(text).count())
            .sum()
    }

    /// Redacts `text` and truncates the result to `max_chars` characters,
    /// appending `"..."` if anything was cut.
    pub fn redaction_preview(&self, text: &str, max_chars: usize) -> String {
        let redacted = self.redact(text);
        match redacted.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &redacted[..cut]),
            None => redacted,
        }
    }

    /// Compiles the hidden terms, longest first.
    fn build_patterns(&self) -> Vec<Pattern> {
        let hidden = self.hidden_ranks();
        let mut terms: Vec<(usize, &str)> = self
            .terms
            .terms_for_ranks(hidden)
            .into_iter()
            .map(|term| (term.chars().count(), term))
            .filter(|(chars, _)| *chars >= MIN_TERM_CHARS)
            .collect();
        // Ties broken by term for a deterministic order
        terms.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));

        terms
            .into_iter()
            .filter_map(|(chars, term)| {
                let regex = RegexBuilder::new(&regex::escape(term))
                    .case_insensitive(true)
                    .build()
                    .map_err(|err| tracing::warn!(term, %err, "skipping uncompilable redaction term"))
                    .ok()?;
                let marker = if self.use_variable_length {
                    MARKER_GLYPH.to_string().repeat(chars)
                } else {
                    self.marker.clone()
                };
                Some(Pattern { regex, marker })
            })
            .collect()
    }
}
