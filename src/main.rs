use std::process::ExitCode;
use taxonomica::error::TaxonomicaError;
use taxonomica::io::{DarwinCoreArchive, GbifBackbone};
use taxonomica::model::{Rank, TaxonomyTree};
use taxonomica::redaction::{Redactor, build_redaction_terms_from_node};
use taxonomica::{gbif, wikipedia};

const USAGE: &str = "usage: taxonomica <gbif|wikipedia> <archive-dir> [species name]";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (source, dir) = match (args.first(), args.get(1)) {
        (Some(source), Some(dir)) => (source.as_str(), dir.as_str()),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let tree = match load_tree(source, dir) {
        Ok(Some(tree)) => tree,
        Ok(None) => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", tree.stats());
    println!("playable species: {}", tree.playable_species().len());
    print!("{}", tree.format_subtree(tree.root_index(), 2, 10));

    if let Some(species) = args.get(2) {
        show_species(&tree, species);
    }
    ExitCode::SUCCESS
}

/// Reads the archive and builds its tree; `None` for an unknown source.
fn load_tree(source: &str, dir: &str) -> Result<Option<TaxonomyTree>, TaxonomicaError> {
    let tree = match source {
        "gbif" => {
            let backbone = GbifBackbone::open(dir)?;
            let mut tree = gbif::build_tree(backbone.taxa(true)?);
            tree.add_vernacular_names(backbone.vernacular_names()?);
            tree
        }
        "wikipedia" => {
            let archive = DarwinCoreArchive::open(dir)?;
            let mut tree = wikipedia::build_tree(archive.taxa()?);
            tree.add_vernacular_names(archive.vernacular_names()?);
            tree
        }
        _ => return Ok(None),
    };
    Ok(Some(tree))
}

/// Prints the path of a species and a redacted sample sentence.
fn show_species(tree: &TaxonomyTree, name: &str) {
    let Some(node) = tree.find_by_name_and_rank(name, Rank::Species) else {
        println!("species '{name}' not found");
        return;
    };

    let (present, required) = tree.path_completeness(node.index());
    println!("\n{node}: {present}/{required} major ranks on path");
    for ancestor in tree.path_to_root(node.index()) {
        println!("  {ancestor}");
    }

    // Sample sentence naming the whole lineage and the common names
    let lineage: Vec<&str> = tree.ancestors(node.index()).map(|n| n.name()).collect();
    let mut sample = format!("{} belongs to {}.", node.name(), lineage.join(", "));
    if !node.vernacular_names().is_empty() {
        sample.push_str(&format!(" It is known as {}.", node.vernacular_names().join(", ")));
    }

    let mut redactor = Redactor::new(build_redaction_terms_from_node(tree, node.index()));
    println!("\n{}", redactor.redaction_preview(&sample, 300));
    redactor.reveal_rank(Rank::Kingdom.as_str());
    redactor.reveal_rank(Rank::Phylum.as_str());
    println!("{}", redactor.redaction_preview(&sample, 300));
}
