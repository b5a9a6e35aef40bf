//! Common English equivalents of well-known scientific names.

/// Returns common English words that give away the given scientific name
/// (e.g. `"Felidae"` -> `"feline"`, `"cat family"`); empty for names
/// without an entry.
///
/// Covers exemplary taxa from kingdom to family level. Matching is exact
/// and case-sensitive.
///
/// # Examples
/// ```
/// # use taxonomica::redaction::vernacular_equivalents;
/// assert!(vernacular_equivalents("Aves").contains(&"bird"));
/// assert!(vernacular_equivalents("Felis").is_empty());
/// ```
pub fn vernacular_equivalents(scientific_name: &str) -> &'static [&'static str] {
    match scientific_name {
        // Kingdoms
        "Animalia" => &["animal", "animals"],
        "Plantae" => &["plant", "plants"],
        "Fungi" => &["fungus", "fungi", "mushroom", "mushrooms"],
        "Bacteria" => &["bacterium", "bacteria"],
        "Archaea" => &["archaea", "archaeon"],
        "Chromista" => &["chromist", "chromists"],
        "Protozoa" => &["protozoan", "protozoans", "protozoa"],
        "Viruses" => &["virus", "viruses", "viral"],

        // Phyla
        "Chordata" => &["chordate", "chordates", "vertebrate", "vertebrates"],
        "Arthropoda" => &["arthropod", "arthropods"],
        "Mollusca" => &["mollusk", "mollusks", "mollusc", "molluscs"],
        "Annelida" => &["annelid", "annelids", "worm", "worms"],
        "Cnidaria" => &["cnidarian", "cnidarians"],
        "Echinodermata" => &["echinoderm", "echinoderms"],
        "Nematoda" => &["nematode", "nematodes", "roundworm", "roundworms"],
        "Platyhelminthes" => &["flatworm", "flatworms"],

        // Classes
        "Mammalia" => &["mammal", "mammals", "mammalian"],
        "Aves" => &["bird", "birds", "avian"],
        "Reptilia" => &["reptile", "reptiles", "reptilian"],
        "Amphibia" => &["amphibian", "amphibians"],
        "Actinopterygii" => &["fish", "fishes", "ray-finned fish"],
        "Chondrichthyes" => &["shark", "sharks", "ray", "rays", "cartilaginous fish"],
        "Insecta" => &["insect", "insects"],
        "Arachnida" => &["arachnid", "arachnids", "spider", "spiders"],
        "Crustacea" => &["crustacean", "crustaceans"],
        "Gastropoda" => &["snail", "snails", "slug", "slugs"],
        "Bivalvia" => &["bivalve", "bivalves", "clam", "clams", "mussel", "mussels"],

        // Orders
        "Carnivora" => &["carnivore", "carnivores", "carnivoran", "carnivorans"],
        "Primates" => &["primate", "primates"],
        "Rodentia" => &["rodent", "rodents"],
        "Chiroptera" => &["bat", "bats"],
        "Cetacea" => &["whale", "whales", "dolphin", "dolphins", "cetacean", "cetaceans"],
        "Artiodactyla" => &["ungulate", "ungulates", "even-toed ungulate"],
        "Perissodactyla" => &["odd-toed ungulate"],
        "Proboscidea" => &["elephant", "elephants"],
        "Lagomorpha" => &["rabbit", "rabbits", "hare", "hares"],
        "Squamata" => &["lizard", "lizards", "snake", "snakes"],
        "Testudines" => &["turtle", "turtles", "tortoise", "tortoises"],
        "Crocodilia" => &[
            "crocodile",
            "crocodiles",
            "alligator",
            "alligators",
            "crocodilian",
            "crocodilians",
        ],
        "Passeriformes" => &["songbird", "songbirds", "passerine", "passerines"],
        "Coleoptera" => &["beetle", "beetles"],
        "Lepidoptera" => &["butterfly", "butterflies", "moth", "moths"],
        "Hymenoptera" => &["ant", "ants", "bee", "bees", "wasp", "wasps"],
        "Diptera" => &["fly", "flies"],

        // Families
        "Felidae" => &["feline", "felines", "felid", "felids", "cat family"],
        "Canidae" => &["canine", "canines", "canid", "canids", "dog family"],
        "Ursidae" => &["bear", "bears", "ursid", "ursids"],
        "Hominidae" => &["great ape", "great apes", "hominid", "hominids"],
        "Bovidae" => &["bovid", "bovids"],
        "Equidae" => &["equid", "equids", "horse family"],
        "Cervidae" => &["deer", "cervid", "cervids"],
        "Elephantidae" => &["elephant", "elephants"],
        "Delphinidae" => &["dolphin", "dolphins"],
        "Accipitridae" => &["hawk", "hawks", "eagle", "eagles"],
        "Strigidae" => &["owl", "owls"],
        "Corvidae" => &["crow", "crows", "raven", "ravens", "corvid", "corvids"],

        _ => &[],
    }
}
