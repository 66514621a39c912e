use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::fixtures::{approval_chain, diamond, init_nodes, links};
use crate::graph::is_tip;
use crate::tip_selection::{uniform_random, TipSelection};
use crate::types::NodeId;

#[test]
fn test_every_algorithm_returns_nothing_for_empty_graph() {
    let mut rng = StdRng::seed_from_u64(31);

    for algorithm in TipSelection::ALL {
        let tips = algorithm.select(&mut rng, &[], &[], 0.5);
        assert!(tips.is_empty(), "{} returned {:?}", algorithm, tips);
    }
}

#[test]
fn test_every_algorithm_picks_only_option_twice_in_two_chain() {
    let mut rng = StdRng::seed_from_u64(32);
    let (nodes, links) = approval_chain(2);

    for algorithm in TipSelection::ALL {
        let tips = algorithm.select(&mut rng, &nodes, &links, 0.5);
        assert_eq!(tips, vec![NodeId(1), NodeId(1)], "{}", algorithm);
    }
}

#[test]
fn test_every_algorithm_returns_two_tips_on_connected_graph() {
    let mut rng = StdRng::seed_from_u64(33);
    let nodes = init_nodes(4);
    let links = links(&[(1, 0), (2, 0), (3, 1)]);

    for algorithm in TipSelection::ALL {
        for _ in 0..20 {
            let tips = algorithm.select(&mut rng, &nodes, &links, 1.0);
            assert_eq!(tips.len(), 2, "{}", algorithm);
            assert!(tips.iter().all(|tip| is_tip(&links, *tip)), "{} picked a non-tip", algorithm);
        }
    }
}

#[test]
fn test_uniform_random_empty_in_two_clique() {
    let mut rng = StdRng::seed_from_u64(34);
    let nodes = init_nodes(2);
    let links = links(&[(0, 1), (1, 0)]);

    assert!(uniform_random(&mut rng, &nodes, &links).is_empty());
}

#[test]
fn test_uniform_random_reaches_disconnected_tips() {
    let mut rng = StdRng::seed_from_u64(35);
    let nodes = init_nodes(3);
    let links = links(&[(1, 0)]);
    let mut seen = std::collections::HashSet::new();

    for _ in 0..100 {
        seen.extend(uniform_random(&mut rng, &nodes, &links));
    }

    assert_eq!(seen, std::collections::HashSet::from([NodeId(1), NodeId(2)]));
}

#[test]
fn test_diamond_single_tip() {
    let mut rng = StdRng::seed_from_u64(36);
    let (nodes, links) = diamond();

    for algorithm in TipSelection::ALL {
        assert_eq!(algorithm.select(&mut rng, &nodes, &links, 0.5), vec![NodeId(3), NodeId(3)]);
    }
}

#[test]
fn test_names_round_trip() {
    for algorithm in TipSelection::ALL {
        assert_eq!(algorithm.to_string().parse::<TipSelection>(), Ok(algorithm));
    }
    assert_eq!("unWeightedMCMC".parse::<TipSelection>(), Ok(TipSelection::UnweightedMcmc));
    assert!("metropolis".parse::<TipSelection>().is_err());
}

#[test]
fn test_serde_names() {
    let json = serde_json::to_string(&TipSelection::WeightedMcmc).unwrap();
    assert_eq!(json, "\"weighted_mcmc\"");

    let parsed: TipSelection = serde_json::from_str("\"uniform_random\"").unwrap();
    assert_eq!(parsed, TipSelection::UniformRandom);
}
