use taxonomica::model::Rank;
use taxonomica::records::{VernacularName, WikipediaTaxon};
use taxonomica::wikipedia::{WikipediaTreeBuilder, build_tree};

fn wiki(id: &str, name: &str, rank: &str, taxobox: &str) -> WikipediaTaxon {
    WikipediaTaxon {
        id: id.to_string(),
        scientific_name: name.to_string(),
        rank: rank.to_string(),
        taxobox: taxobox.to_string(),
        ..Default::default()
    }
}

fn names_to_root(tree: &taxonomica::TaxonomyTree, id: &str) -> Vec<String> {
    let node = tree.find_by_id(id).unwrap();
    tree.path_to_root(node.index())
        .iter()
        .map(|n| n.name().to_string())
        .collect()
}

#[test]
fn test_species_linked_to_genus_by_binomial() {
    let tree = build_tree(vec![
        wiki("1", "Felis", "genus", ""),
        wiki("2", "Felis catus", "species", ""),
    ]);

    assert_eq!(names_to_root(&tree, "2"), ["Felis catus", "Felis", "Life"]);
    assert_eq!(tree.stats().orphans, 1);
    assert!(tree.is_valid());
}

#[test]
fn test_same_name_and_rank_coalesce() {
    let tree = build_tree(vec![
        wiki("1", "Felis catus", "species", ""),
        WikipediaTaxon {
            references: "https://species.wikimedia.org/wiki/Felis_catus".to_string(),
            ..wiki("2", "Felis catus", "Species", "")
        },
        wiki("3", "Felis catus", "genus", ""),
    ]);

    assert_eq!(tree.num_nodes(), 3);
    let cat = tree.find_by_id("1").unwrap();
    assert_eq!(tree.find_by_id("2").unwrap().index(), cat.index());
    assert_eq!(cat.id(), "1");
    assert_eq!(
        cat.taxon_ids().iter().map(String::as_str).collect::<Vec<_>>(),
        ["1", "2"]
    );
    assert_eq!(
        cat.wikipedia_url(),
        Some("https://species.wikimedia.org/wiki/Felis_catus")
    );

    // Same name at another rank is a different taxon
    let genus = tree.find_by_id("3").unwrap();
    assert_ne!(genus.index(), cat.index());
    assert_eq!(tree.find_by_name("Felis catus", true).len(), 2);
}

#[test]
fn test_implicit_ancestors_from_taxobox() {
    let tree = build_tree(vec![wiki(
        "7",
        "Panthera leo",
        "species",
        "{regnum=[[Animal]]ia, phylum=[[Chordate|Chordata]], classis=[[Mammal]]ia, \
         ordo=[[Carnivora]], familia=[[Felidae]], genus=''[[Panthera]]''}",
    )]);

    assert_eq!(
        names_to_root(&tree, "7"),
        [
            "Panthera leo",
            "Panthera",
            "Felidae",
            "Carnivora",
            "Mammalia",
            "Chordata",
            "Animalia",
            "Life"
        ]
    );

    let stats = tree.stats();
    assert_eq!(stats.nodes_created, 1);
    assert_eq!(stats.implicit_nodes_created, 6);
    assert_eq!(stats.taxa_with_hierarchy, 1);
    assert_eq!(stats.orphans, 1);

    let genus = tree.find_by_id("implicit:genus:Panthera").unwrap();
    assert_eq!(genus.rank(), Some(Rank::Genus));

    let lion = tree.find_by_id("7").unwrap();
    assert!(tree.has_complete_path(lion.index()));
    let playable: Vec<&str> = tree.playable_species().iter().map(|n| n.name()).collect();
    assert_eq!(playable, ["Panthera leo"]);
    assert!(tree.orphans().is_empty());
}

#[test]
fn test_link_via_own_hierarchy() {
    let tree = build_tree(vec![
        wiki("10", "Felidae", "family", "{regnum=Animalia, familia=Felidae}"),
        wiki("11", "Panthera", "genus", "{familia=[[Felidae]]}"),
    ]);

    assert_eq!(names_to_root(&tree, "11"), ["Panthera", "Felidae", "Animalia", "Life"]);
    assert_eq!(tree.stats().implicit_nodes_created, 1);
    assert!(tree.is_valid());
}

#[test]
fn test_genus_linked_through_species_hierarchy() {
    let tree = build_tree(vec![
        wiki("1", "Puma", "genus", ""),
        wiki(
            "2",
            "Puma concolor",
            "species",
            "{regnum=Animalia, ordo=Carnivora, familia=Felidae}",
        ),
    ]);

    assert_eq!(
        names_to_root(&tree, "2"),
        ["Puma concolor", "Puma", "Felidae", "Carnivora", "Animalia", "Life"]
    );

    // Phylum and class are missing
    let cougar = tree.find_by_id("2").unwrap();
    assert!(!tree.has_complete_path(cougar.index()));
    assert_eq!(tree.path_completeness(cougar.index()), (4, 6));
}

#[test]
fn test_rank_columns_fill_hierarchy() {
    let tree = build_tree(vec![WikipediaTaxon {
        kingdom: "Animalia".to_string(),
        family: "Ursidae".to_string(),
        genus: "Ursus".to_string(),
        ..wiki("5", "Ursus arctos", "species", "{ordo=Carnivora}")
    }]);

    assert_eq!(
        names_to_root(&tree, "5"),
        ["Ursus arctos", "Ursus", "Ursidae", "Carnivora", "Animalia", "Life"]
    );
}

#[test]
fn test_synonyms_and_nameless_records_are_skipped() {
    let tree = build_tree(vec![
        WikipediaTaxon {
            taxonomic_status: "synonym".to_string(),
            ..wiki("1", "Felis domesticus", "species", "{genus=Felis}")
        },
        wiki("2", "", "genus", "{regnum=Animalia}"),
    ]);

    assert_eq!(tree.num_nodes(), 1);
    assert_eq!(tree.stats().taxa_processed, 2);
    assert_eq!(tree.stats().taxa_with_hierarchy, 0);
}

#[test]
fn test_unranked_record_only_contributes_hierarchy() {
    let tree = WikipediaTreeBuilder::new()
        .with_progress_interval(1)
        .build(vec![wiki("1", "Embryophyta", "clade", "{regnum=Plantae}")]);

    assert!(tree.find_by_id("1").is_none());
    let plantae = tree.find_by_name_and_rank("Plantae", Rank::Kingdom).unwrap();
    assert_eq!(plantae.parent(), Some(tree.root_index()));
    assert_eq!(tree.num_nodes(), 2);
}

#[test]
fn test_record_without_signal_stays_orphan() {
    let tree = build_tree(vec![
        wiki("1", "Animalia", "kingdom", ""),
        wiki("2", "Incertae", "family", ""),
        wiki("3", "Lonely species", "species", ""),
    ]);

    let orphans: Vec<&str> = tree.orphans().iter().map(|n| n.name()).collect();
    assert_eq!(orphans, ["Incertae", "Lonely species"]);
    assert_eq!(tree.stats().orphans, 3);
}

#[test]
fn test_every_edge_narrows_rank() {
    let tree = build_tree(vec![
        wiki("1", "Aves", "class", "{phylum=Chordata, classis=Aves}"),
        wiki("2", "Passeriformes", "order", "{classis=Aves, ordo=Passeriformes}"),
        wiki("3", "Corvus", "genus", "{ordo=Passeriformes, familia=Corvidae}"),
        wiki("4", "Corvus corax", "species", "{familia=Corvidae, genus=Corvus}"),
        wiki("5", "Corvus corone", "species", ""),
    ]);

    assert!(tree.is_valid());
    for node in tree.descendants(tree.root_index()) {
        let parent = &tree[node.parent().unwrap()];
        if let (Some(parent_rank), Some(rank)) = (parent.rank(), node.rank()) {
            assert!(parent_rank < rank, "{parent} above {node}");
        }
    }

    // Corvus was linked to its order in pass 3 and is not moved below the
    // family created later
    assert_eq!(
        names_to_root(&tree, "5"),
        ["Corvus corone", "Corvus", "Passeriformes", "Aves", "Chordata", "Life"]
    );
    let corvidae = tree.find_by_name_and_rank("Corvidae", Rank::Family).unwrap();
    assert!(corvidae.is_leaf());
}

// ============= Record ids =============

#[test]
fn test_records_without_id_link_by_name() {
    let tree = build_tree(vec![
        wiki("", "Felis", "genus", ""),
        wiki("", "Felis catus", "species", "{genus=Felis}"),
    ]);

    assert!(tree.is_valid());
    let cat = tree.find_by_name_and_rank("Felis catus", Rank::Species).unwrap();
    let path: Vec<&str> = tree.path_to_root(cat.index()).iter().map(|n| n.name()).collect();
    assert_eq!(path, ["Felis catus", "Felis", "Life"]);
    assert!(cat.taxon_ids().is_empty());
    assert!(tree.find_by_id("").is_none());
}

#[test]
fn test_shared_id_keeps_first_record() {
    let tree = build_tree(vec![
        wiki("7", "Felis", "genus", ""),
        wiki("7", "Felis catus", "species", "{genus=Felis}"),
    ]);

    assert!(tree.is_valid());
    assert_eq!(tree.find_by_id("7").unwrap().name(), "Felis");
    let cat = tree.find_by_name_and_rank("Felis catus", Rank::Species).unwrap();
    assert_eq!(tree[cat.parent().unwrap()].name(), "Felis");
}

#[test]
fn test_root_id_is_never_taken_over() {
    let mut tree = build_tree(vec![
        wiki("0", "Felis", "genus", ""),
        wiki("0", "Felis", "genus", ""),
    ]);

    assert_eq!(tree.find_by_id("0").unwrap().name(), "Life");
    let felis = tree.find_by_name_and_rank("Felis", Rank::Genus).unwrap();
    assert!(felis.taxon_ids().is_empty());

    let attached = tree.add_vernacular_names(vec![VernacularName::new("0", "cats", "en")]);
    assert_eq!(attached, 0);
    assert!(tree.root().vernacular_names().is_empty());
}
