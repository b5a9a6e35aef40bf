use taxonomica::model::rank::{priority_of, rank_priority, required_major_ranks};
use taxonomica::model::{MAJOR_RANKS, RANK_ORDER, Rank, UNKNOWN_RANK_PRIORITY};

#[test]
fn test_rank_order_matches_priorities() {
    for pair in RANK_ORDER.windows(2) {
        assert!(pair[0] < pair[1]);
        assert!(pair[0].priority() < pair[1].priority());
    }
    assert_eq!(Rank::Domain.priority(), 0);
    assert_eq!(Rank::Form.priority(), 26);
}

#[test]
fn test_kingdom_before_species() {
    assert!(rank_priority("kingdom") < rank_priority("phylum"));
    assert!(rank_priority("phylum") < rank_priority("species"));
    assert!(rank_priority("Species") < rank_priority("subspecies"));
    assert_eq!(rank_priority("clade"), UNKNOWN_RANK_PRIORITY);
    assert_eq!(rank_priority(""), UNKNOWN_RANK_PRIORITY);
    assert_eq!(priority_of(None), UNKNOWN_RANK_PRIORITY);
}

#[test]
fn test_names_round_trip() {
    for rank in RANK_ORDER {
        assert_eq!(Rank::from_name(rank.as_str()), Some(rank));
        assert_eq!(rank.to_string(), rank.as_str());
    }
    assert_eq!(Rank::from_name("SUBFAMILY"), Some(Rank::Subfamily));
    assert_eq!(Rank::from_name("root"), None);
}

#[test]
fn test_major_ranks() {
    assert_eq!(MAJOR_RANKS.len(), 7);
    assert!(Rank::Order.is_major());
    assert!(!Rank::Superorder.is_major());
    assert!(MAJOR_RANKS.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_required_major_ranks() {
    assert!(required_major_ranks(Some(Rank::Domain)).is_empty());
    assert!(required_major_ranks(Some(Rank::Superkingdom)).is_empty());
    assert!(required_major_ranks(Some(Rank::Kingdom)).is_empty());
    assert_eq!(required_major_ranks(Some(Rank::Subkingdom)), [Rank::Kingdom]);
    assert_eq!(
        required_major_ranks(Some(Rank::Genus)),
        [Rank::Kingdom, Rank::Phylum, Rank::Class, Rank::Order, Rank::Family]
    );
    assert_eq!(required_major_ranks(Some(Rank::Species)).len(), 6);
    assert_eq!(required_major_ranks(Some(Rank::Variety)), MAJOR_RANKS);
    assert_eq!(required_major_ranks(None), MAJOR_RANKS);
}

#[test]
fn test_broader_ranks() {
    assert_eq!(Rank::Domain.broader_ranks().count(), 0);
    let broader: Vec<Rank> = Rank::Genus.broader_ranks().take(3).collect();
    assert_eq!(broader, [Rank::Subtribe, Rank::Tribe, Rank::Subfamily]);
    assert_eq!(Rank::Form.broader_ranks().last(), Some(Rank::Domain));
}
