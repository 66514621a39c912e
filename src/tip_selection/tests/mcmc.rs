use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::fixtures::{init_nodes, links};
use crate::tip_selection::{unweighted_mcmc, weighted_mcmc};
use crate::types::NodeId;

#[test]
fn test_mcmc_does_not_reach_disconnected_component() {
    let mut rng = StdRng::seed_from_u64(41);
    let nodes = init_nodes(2);

    assert_eq!(unweighted_mcmc(&mut rng, &nodes, &[]), vec![NodeId(0), NodeId(0)]);
    assert_eq!(weighted_mcmc(&mut rng, &nodes, &[], 0.5), vec![NodeId(0), NodeId(0)]);
}

#[test]
fn test_mcmc_stays_on_genesis_branch() {
    let mut rng = StdRng::seed_from_u64(42);
    let nodes = init_nodes(5);
    let links = links(&[(1, 0), (2, 1), (4, 3)]);

    for _ in 0..20 {
        assert_eq!(unweighted_mcmc(&mut rng, &nodes, &links), vec![NodeId(2), NodeId(2)]);
        assert_eq!(weighted_mcmc(&mut rng, &nodes, &links, 0.5), vec![NodeId(2), NodeId(2)]);
    }
}

#[test]
fn test_weighted_mcmc_prefers_heavy_branch() {
    // Genesis has two approvers: 1 starts a long chain, 2 is a lone tip
    let mut rng = StdRng::seed_from_u64(43);
    let nodes = init_nodes(12);
    let mut pairs = vec![(1, 0), (2, 0)];
    pairs.extend((3..12).map(|i| (i, if i == 3 { 1 } else { i - 1 })));
    let links = links(&pairs);

    let mut heavy = 0;
    for _ in 0..100 {
        heavy += weighted_mcmc(&mut rng, &nodes, &links, 5.0)
            .iter()
            .filter(|tip| **tip == NodeId(11))
            .count();
    }

    assert_eq!(heavy, 200);
}

#[test]
fn test_unweighted_mcmc_ignores_branch_weight() {
    let mut rng = StdRng::seed_from_u64(44);
    let nodes = init_nodes(12);
    let mut pairs = vec![(1, 0), (2, 0)];
    pairs.extend((3..12).map(|i| (i, if i == 3 { 1 } else { i - 1 })));
    let links = links(&pairs);

    let light = (0..1_000)
        .flat_map(|_| unweighted_mcmc(&mut rng, &nodes, &links))
        .filter(|tip| *tip == NodeId(2))
        .count();

    // Half of 2000 walks take the light branch
    assert!((850..1_150).contains(&light), "light branch chosen {} times", light);
}
