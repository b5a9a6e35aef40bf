use std::fs;
use std::path::Path;
use taxonomica::TaxonomicaError;
use taxonomica::io::{DarwinCoreArchive, GbifBackbone};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, lines: &[&str]) {
    fs::write(dir.join(name), lines.join("\n") + "\n").unwrap();
}

#[test]
fn test_gbif_backbone_requires_taxon_file() {
    let dir = TempDir::new().unwrap();
    let err = GbifBackbone::open(dir.path()).unwrap_err();
    assert!(matches!(err, TaxonomicaError::MissingFile(path) if path.ends_with("Taxon.tsv")));
}

#[test]
fn test_gbif_backbone_reads_taxa() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "Taxon.tsv",
        &[
            "taxonID\tparentNameUsageID\tacceptedNameUsageID\tscientificName\tcanonicalName\ttaxonRank\ttaxonomicStatus\tkingdom",
            "1\t\t\tAnimalia\tAnimalia\tkingdom\taccepted\tAnimalia",
            "2435035\t2435022\t\tFelis catus Linnaeus, 1758\tFelis catus\tspecies\taccepted\tAnimalia",
            "7\t2435022\t2435035\tFelis domesticus Erxleben, 1777\tFelis domesticus\tspecies\tsynonym\tAnimalia",
            "8\t1\t\t\"Quoted\" name\tQuoted\tgenus\taccepted",
        ],
    );

    let backbone = GbifBackbone::open(dir.path()).unwrap();
    let all: Vec<_> = backbone.taxa(false).unwrap().collect();
    assert_eq!(all.len(), 4);
    assert_eq!(all[1].scientific_name, "Felis catus Linnaeus, 1758");
    assert_eq!(all[1].display_name(), "Felis catus");
    assert!(all[2].is_synonym());
    assert_eq!(all[2].accepted_id, "2435035");
    // No quoting, short rows are padded with defaults
    assert_eq!(all[3].scientific_name, "\"Quoted\" name");
    assert_eq!(all[3].kingdom, "");

    let accepted = backbone.taxa(true).unwrap().count();
    assert_eq!(accepted, 3);

    // Vernacular names are optional
    assert_eq!(backbone.vernacular_names().unwrap().count(), 0);
}

#[test]
fn test_gbif_backbone_vernacular_names() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Taxon.tsv", &["taxonID\tcanonicalName", "1\tAnimalia"]);
    write(
        dir.path(),
        "VernacularName.tsv",
        &[
            "taxonID\tvernacularName\tlanguage\tcountry",
            "1\tanimals\ten\t",
            "1\tTiere\tde\tDE",
        ],
    );

    let backbone = GbifBackbone::open(dir.path()).unwrap();
    let mut tree = taxonomica::gbif::build_tree(backbone.taxa(false).unwrap());
    let added = tree.add_vernacular_names(backbone.vernacular_names().unwrap());
    assert_eq!(added, 2);
    assert_eq!(tree.find_by_id("1").unwrap().vernacular_names(), ["animals", "Tiere"]);
}

#[test]
fn test_darwin_core_archive() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        DarwinCoreArchive::open(dir.path()),
        Err(TaxonomicaError::MissingFile(_))
    ));

    write(
        dir.path(),
        "taxon.txt",
        &[
            "id\treferences\tscientificName\ttaxonRank\tkingdom\tfamily\ttaxobox\ttaxonomicStatus",
            "Q1\thttps://species.wikimedia.org/wiki/Felis\tFelis\tgenus\tAnimalia\tFelidae\t{regnum=Animalia, familia=[[Felidae]], genus=''Felis''}\t",
            "Q2\t\tFelis catus\tspecies\t\t\t\t",
        ],
    );
    write(
        dir.path(),
        "vernacularname.txt",
        &["id\tvernacularName\tlanguage", "Q2\tdomestic cat\ten"],
    );

    let archive = DarwinCoreArchive::open(dir.path()).unwrap();
    let taxa: Vec<_> = archive.taxa().unwrap().collect();
    assert_eq!(taxa.len(), 2);
    assert_eq!(taxa[0].taxobox, "{regnum=Animalia, familia=[[Felidae]], genus=''Felis''}");
    assert_eq!(taxa[0].family, "Felidae");

    let mut tree = taxonomica::wikipedia::build_tree(taxa);
    tree.add_vernacular_names(archive.vernacular_names().unwrap());

    let cat = tree.find_by_id("Q2").unwrap();
    assert_eq!(cat.vernacular_names(), ["domestic cat"]);
    let path: Vec<&str> = tree.path_to_root(cat.index()).iter().map(|n| n.name()).collect();
    assert_eq!(path, ["Felis catus", "Felis", "Felidae", "Animalia", "Life"]);
    assert_eq!(
        tree.find_by_id("Q1").unwrap().wikipedia_url(),
        Some("https://species.wikimedia.org/wiki/Felis")
    );
}
