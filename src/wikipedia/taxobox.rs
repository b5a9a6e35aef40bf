//! Taxobox parsing and wiki-markup cleaning.
//!
//! Wikipedia articles describe their classification in an informal
//! "taxobox": a brace-delimited list of `key=value` pairs whose keys mix
//! Latin (`regnum`, `ordo`), English (`kingdom`) and `unranked_` variants,
//! and whose values contain wiki markup. This module turns such a string
//! into a [Hierarchy] mapping canonical [Rank]s to clean names.

use crate::model::Rank;
use crate::records::WikipediaTaxon;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// A comma that starts a new `key=` field (commas inside values are kept).
static FIELD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*\w+=").expect("valid field separator regex"));

static REF_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<ref[^>]*>.*?</ref>").expect("valid ref regex"));
static REF_SELF_CLOSING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<ref[^>]*/>").expect("valid ref regex"));
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));
static WIKI_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^|\]]+\|)?([^\]]+)\]\]").expect("valid link regex"));
static QUOTE_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'{2,}").expect("valid quote regex"));
static BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[\]]").expect("valid bracket regex"));

const HTML_ENTITIES: [(&str, &str); 4] = [
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
];

// =#========================================================================#=
// HIERARCHY
// =#========================================================================#=
/// Classification of a taxon as `rank -> name`, iterated broadest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hierarchy {
    ranks: BTreeMap<Rank, String>,
}

impl Hierarchy {
    /// Creates an empty hierarchy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the name given for `rank`.
    pub fn get(&self, rank: Rank) -> Option<&str> {
        self.ranks.get(&rank).map(String::as_str)
    }

    /// Sets the name for `rank`, replacing an earlier one.
    pub fn insert(&mut self, rank: Rank, name: String) {
        self.ranks.insert(rank, name);
    }

    /// Sets the name for `rank` only if `name` is non-empty and the rank has
    /// no name yet.
    pub fn fill_gap(&mut self, rank: Rank, name: &str) {
        if !name.is_empty() {
            self.ranks.entry(rank).or_insert_with(|| name.to_string());
        }
    }

    /// Returns whether no rank is named.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Returns the number of named ranks.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Iterates over `(rank, name)` pairs, broadest rank first.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, &str)> + '_ {
        self.ranks.iter().map(|(rank, name)| (*rank, name.as_str()))
    }
}

impl FromIterator<(Rank, String)> for Hierarchy {
    fn from_iter<T: IntoIterator<Item = (Rank, String)>>(iter: T) -> Self {
        Hierarchy {
            ranks: iter.into_iter().collect(),
        }
    }
}

// =#========================================================================#=
// PARSING
// =#========================================================================#=
/// Splits a taxobox string into its `key=value` fields.
///
/// Surrounding braces are removed, the body is split on every comma that is
/// followed by a `key=` token, and keys and values are trimmed. Parts without
/// `=` are dropped. Fields are returned in textual order.
///
/// # Examples
/// ```
/// # use taxonomica::wikipedia::taxobox::parse_taxobox;
/// let fields = parse_taxobox("{regnum=Animalia, ordo=[[Carnivora]], name=Cat, dog and fox}");
/// assert_eq!(fields, vec![
///     ("regnum".to_string(), "Animalia".to_string()),
///     ("ordo".to_string(), "[[Carnivora]]".to_string()),
///     ("name".to_string(), "Cat, dog and fox".to_string()),
/// ]);
/// assert!(parse_taxobox("").is_empty());
/// ```
pub fn parse_taxobox(taxobox: &str) -> Vec<(String, String)> {
    let mut body = taxobox.trim();
    if body.is_empty() {
        return Vec::new();
    }
    if body.len() >= 2 && body.starts_with('{') && body.ends_with('}') {
        body = &body[1..body.len() - 1];
    }

    let mut parts = Vec::new();
    let mut start = 0;
    for separator in FIELD_SEPARATOR.find_iter(body) {
        parts.push(&body[start..separator.start()]);
        // Skip the comma, keep the key
        start = separator.start() + 1;
    }
    parts.push(&body[start..]);

    parts
        .into_iter()
        .filter_map(|part| part.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

/// Removes Wikipedia markup from a taxobox value.
///
/// Handles `<ref>` blocks and other HTML tags, `[[Link]]` and
/// `[[Page|Display]]` links, bold/italic quote markers, stray brackets, a
/// few HTML entities, and collapses whitespace.
///
/// # Examples
/// ```
/// # use taxonomica::wikipedia::taxobox::clean_wiki_markup;
/// assert_eq!(clean_wiki_markup("[[Animal]]ia"), "Animalia");
/// assert_eq!(clean_wiki_markup("[[Felidae|Cats]]"), "Cats");
/// assert_eq!(clean_wiki_markup("'''''Felis'''''"), "Felis");
/// assert_eq!(clean_wiki_markup("Carnivora<ref name=\"msw3\">Wozencraft, 2005</ref>"), "Carnivora");
/// assert_eq!(clean_wiki_markup("Lions&nbsp;&amp;  tigers"), "Lions & tigers");
/// ```
pub fn clean_wiki_markup(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = REF_BLOCK.replace_all(text, "");
    let text = REF_SELF_CLOSING.replace_all(&text, "");
    let text = HTML_TAG.replace_all(&text, "");
    let text = WIKI_LINK.replace_all(&text, "${2}");
    let text = QUOTE_MARKUP.replace_all(&text, "");
    let text = BRACKETS.replace_all(&text, "");

    let mut text = text.into_owned();
    for (entity, replacement) in HTML_ENTITIES {
        text = text.replace(entity, replacement);
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Maps a taxobox key (case-insensitive) to the canonical rank it names.
///
/// Latin keys (`regnum`, `classis`, `ordo`, ...), their `unranked_` variants
/// and plain English keys are recognized; all other keys yield `None`.
///
/// # Examples
/// ```
/// # use taxonomica::wikipedia::taxobox::taxobox_rank;
/// # use taxonomica::model::Rank;
/// assert_eq!(taxobox_rank("Classis"), Some(Rank::Class));
/// assert_eq!(taxobox_rank("unranked_ordo"), Some(Rank::Order));
/// assert_eq!(taxobox_rank("image_caption"), None);
/// ```
pub fn taxobox_rank(key: &str) -> Option<Rank> {
    let key = key.to_ascii_lowercase();
    let rank = match key.as_str() {
        "domain" => Rank::Domain,
        "superregnum" | "unranked_superregnum" => Rank::Superkingdom,
        "regnum" | "unranked_regnum" | "kingdom" => Rank::Kingdom,
        "subregnum" | "unranked_subregnum" => Rank::Subkingdom,
        "superphylum" | "unranked_superphylum" => Rank::Superphylum,
        "phylum" | "unranked_phylum" => Rank::Phylum,
        "subphylum" | "unranked_subphylum" => Rank::Subphylum,
        "infraphylum" => Rank::Infraphylum,
        "superclassis" | "unranked_superclassis" => Rank::Superclass,
        "classis" | "unranked_classis" | "class" => Rank::Class,
        "subclassis" | "unranked_subclassis" => Rank::Subclass,
        "infraclassis" => Rank::Infraclass,
        "superordo" | "unranked_superordo" => Rank::Superorder,
        "ordo" | "unranked_ordo" | "order" => Rank::Order,
        "subordo" | "unranked_subordo" => Rank::Suborder,
        "infraordo" => Rank::Infraorder,
        "superfamilia" | "unranked_superfamilia" => Rank::Superfamily,
        "familia" | "unranked_familia" | "family" => Rank::Family,
        "subfamilia" | "unranked_subfamilia" => Rank::Subfamily,
        "tribus" | "unranked_tribus" => Rank::Tribe,
        "subtribus" => Rank::Subtribe,
        "genus" | "unranked_genus" => Rank::Genus,
        "subgenus" => Rank::Subgenus,
        "species" => Rank::Species,
        "subspecies" => Rank::Subspecies,
        _ => return None,
    };
    Some(rank)
}

/// Extracts the classification declared by a taxobox.
///
/// Keys that do not name a rank are ignored, values are cleaned with
/// [clean_wiki_markup], and empty results are dropped. If a rank is named
/// by several keys, the last one wins.
///
/// # Examples
/// ```
/// # use taxonomica::wikipedia::taxobox::extract_hierarchy_from_taxobox;
/// # use taxonomica::model::Rank;
/// let hierarchy = extract_hierarchy_from_taxobox(
///     "{regnum=[[Animal]]ia, familia=[[Felidae]], image=Cat.jpg, genus=''[[Felis]]''}",
/// );
/// assert_eq!(hierarchy.len(), 3);
/// assert_eq!(hierarchy.get(Rank::Kingdom), Some("Animalia"));
/// assert_eq!(hierarchy.get(Rank::Genus), Some("Felis"));
/// ```
pub fn extract_hierarchy_from_taxobox(taxobox: &str) -> Hierarchy {
    let mut hierarchy = Hierarchy::new();

    for (key, value) in parse_taxobox(taxobox) {
        let Some(rank) = taxobox_rank(&key) else {
            continue;
        };
        let cleaned = clean_wiki_markup(&value);
        if !cleaned.is_empty() {
            hierarchy.insert(rank, cleaned);
        }
    }

    hierarchy
}

/// Builds the merged classification of a record.
///
/// The taxobox is authoritative; the record's denormalized rank columns
/// (kingdom to genus) only fill ranks the taxobox did not name.
pub fn hierarchy_for_record(record: &WikipediaTaxon) -> Hierarchy {
    let mut hierarchy = extract_hierarchy_from_taxobox(&record.taxobox);

    hierarchy.fill_gap(Rank::Kingdom, &record.kingdom);
    hierarchy.fill_gap(Rank::Phylum, &record.phylum);
    hierarchy.fill_gap(Rank::Class, &record.class_);
    hierarchy.fill_gap(Rank::Order, &record.order);
    hierarchy.fill_gap(Rank::Family, &record.family);
    hierarchy.fill_gap(Rank::Genus, &record.genus);

    hierarchy
}
