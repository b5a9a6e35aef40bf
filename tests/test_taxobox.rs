use taxonomica::model::Rank;
use taxonomica::records::WikipediaTaxon;
use taxonomica::wikipedia::taxobox::{
    clean_wiki_markup, extract_hierarchy_from_taxobox, hierarchy_for_record, parse_taxobox,
    taxobox_rank,
};

#[test]
fn test_parse_keeps_commas_inside_values() {
    let fields = parse_taxobox(
        "{name=Kea, status=EN, authority=Gould, 1856, image=Kea.jpg}",
    );
    let keys: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["name", "status", "authority", "image"]);
    assert_eq!(fields[2].1, "Gould, 1856");
}

#[test]
fn test_parse_without_braces_and_garbage() {
    let fields = parse_taxobox("genus=Nestor, just some text");
    assert_eq!(fields, vec![("genus".to_string(), "Nestor, just some text".to_string())]);

    assert!(parse_taxobox("{}").is_empty());
    assert!(parse_taxobox("   ").is_empty());
    assert!(parse_taxobox("{no fields here}").is_empty());
}

#[test]
fn test_clean_markup() {
    assert_eq!(clean_wiki_markup("[[Strigopidae|Strigopoidea]]"), "Strigopoidea");
    assert_eq!(clean_wiki_markup("''[[Nestor (bird)|Nestor]]''"), "Nestor");
    assert_eq!(clean_wiki_markup("[[Psittaciformes]]<ref name=x/>"), "Psittaciformes");
    assert_eq!(
        clean_wiki_markup("Aves<ref>{{cite web|title=Birds,\n parrots}}</ref> <small>(birds)</small>"),
        "Aves (birds)"
    );
    assert_eq!(clean_wiki_markup("[Nestor]"), "Nestor");
    assert_eq!(clean_wiki_markup(""), "");
}

#[test]
fn test_rank_keys() {
    assert_eq!(taxobox_rank("regnum"), Some(Rank::Kingdom));
    assert_eq!(taxobox_rank("kingdom"), Some(Rank::Kingdom));
    assert_eq!(taxobox_rank("superfamilia"), Some(Rank::Superfamily));
    assert_eq!(taxobox_rank("Tribus"), Some(Rank::Tribe));
    assert_eq!(taxobox_rank("unranked_classis"), Some(Rank::Class));
    assert_eq!(taxobox_rank("species"), Some(Rank::Species));
    assert_eq!(taxobox_rank("binomial"), None);
    assert_eq!(taxobox_rank("unranked_clade"), None);
}

#[test]
fn test_extract_hierarchy_of_kea() {
    let hierarchy = extract_hierarchy_from_taxobox(
        "{name=Kea, regnum=[[Animal]]ia, phylum=[[Chordate]], classis=[[Bird|Aves]], \
         ordo=[[Psittaciformes]], superfamilia=[[Strigopoidea]], familia=[[Nestoridae]], \
         genus=''[[Nestor (bird)|Nestor]]'', species='''''N. notabilis''''', \
         binomial=''Nestor notabilis'', binomial_authority=[[John Gould|Gould]], 1856}",
    );

    let ranks: Vec<(Rank, &str)> = hierarchy.iter().collect();
    assert_eq!(
        ranks,
        [
            (Rank::Kingdom, "Animalia"),
            (Rank::Phylum, "Chordate"),
            (Rank::Class, "Aves"),
            (Rank::Order, "Psittaciformes"),
            (Rank::Superfamily, "Strigopoidea"),
            (Rank::Family, "Nestoridae"),
            (Rank::Genus, "Nestor"),
            (Rank::Species, "N. notabilis"),
        ]
    );
}

#[test]
fn test_later_key_for_same_rank_wins() {
    let hierarchy = extract_hierarchy_from_taxobox("{regnum=Plantae, kingdom=Animalia, ordo=}");
    assert_eq!(hierarchy.get(Rank::Kingdom), Some("Animalia"));
    assert_eq!(hierarchy.get(Rank::Order), None);
    assert_eq!(hierarchy.len(), 1);
}

#[test]
fn test_taxobox_takes_precedence_over_columns() {
    let record = WikipediaTaxon {
        kingdom: "Plantae".to_string(),
        class_: "Aves".to_string(),
        genus: "Nestor".to_string(),
        taxobox: "{regnum=Animalia, ordo=Psittaciformes}".to_string(),
        ..Default::default()
    };

    let hierarchy = hierarchy_for_record(&record);
    assert_eq!(hierarchy.get(Rank::Kingdom), Some("Animalia"));
    assert_eq!(hierarchy.get(Rank::Class), Some("Aves"));
    assert_eq!(hierarchy.get(Rank::Order), Some("Psittaciformes"));
    assert_eq!(hierarchy.get(Rank::Genus), Some("Nestor"));
    assert_eq!(hierarchy.get(Rank::Phylum), None);
}
