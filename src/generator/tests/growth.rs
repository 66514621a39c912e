use std::collections::HashSet;
use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::generator::{generate_tangle, GeneratorConfig, TangleGenerator};
use crate::tip_selection::TipSelection;
use crate::types::{NodeId, Tangle};

fn config(node_count: usize, tip_selection: TipSelection) -> GeneratorConfig {
    GeneratorConfig {
        node_count,
        tip_selection,
        ..Default::default()
    }
}

/// Checks the structural invariants every generated tangle must satisfy
fn assert_well_formed(tangle: &Tangle, h: f64) {
    let genesis = tangle.genesis().expect("genesis");
    assert_eq!(genesis.time, 0.0);
    assert_eq!(genesis.name, "0");

    for (i, node) in tangle.nodes.iter().enumerate() {
        assert_eq!(node.id, NodeId(i));
        assert_eq!(node.name, i.to_string());
    }
    for pair in tangle.nodes.windows(2) {
        assert!(pair[0].time <= pair[1].time);
    }

    let mut seen = HashSet::new();
    for link in &tangle.links {
        let source = tangle.node(link.source).unwrap();
        let target = tangle.node(link.target).unwrap();
        assert!(target.time < source.time - h, "link {} ignores latency", link);
        assert!(seen.insert((link.source, link.target)), "duplicate link {}", link);
    }
    assert!(tangle.links.iter().all(|link| link.source != NodeId(0)));
}

#[test]
fn test_generates_requested_node_count_for_every_algorithm() {
    for algorithm in TipSelection::ALL {
        let mut rng = StdRng::seed_from_u64(61);
        let tangle = generate_tangle(&config(60, algorithm), &mut rng).unwrap();

        assert_eq!(tangle.nodes.len(), 60, "{}", algorithm);
        assert_well_formed(&tangle, 1.0);
    }
}

#[test]
fn test_single_node_is_just_genesis() {
    let mut rng = StdRng::seed_from_u64(62);
    let tangle = generate_tangle(&config(1, TipSelection::UniformRandom), &mut rng).unwrap();

    assert_eq!(tangle.nodes.len(), 1);
    assert!(tangle.links.is_empty());
}

#[test]
fn test_every_arrival_approves_one_or_two_parents() {
    // The clock starts at h, so genesis is visible to every arrival
    let mut rng = StdRng::seed_from_u64(63);
    let tangle = generate_tangle(&config(80, TipSelection::UnweightedMcmc), &mut rng).unwrap();

    for node in tangle.nodes.iter().skip(1) {
        let parents = tangle.links.iter().filter(|link| link.source == node.id).count();
        assert!((1..=2).contains(&parents), "node {} has {} parents", node.id, parents);
    }
}

#[test]
fn test_same_seed_same_tangle() {
    let config = config(40, TipSelection::WeightedMcmc);

    let first = generate_tangle(&config, &mut StdRng::seed_from_u64(64)).unwrap();
    let second = generate_tangle(&config, &mut StdRng::seed_from_u64(64)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_zero_latency_sees_everything_older() {
    let mut rng = StdRng::seed_from_u64(65);
    let config = GeneratorConfig { h: 0.0, ..config(30, TipSelection::UniformRandom) };

    let tangle = generate_tangle(&config, &mut rng).unwrap();

    assert_well_formed(&tangle, 0.0);
    // Every arrival sees at least genesis and links once or twice
    assert!(tangle.links.len() >= 29);
}

#[test]
fn test_step_by_step_matches_generate() {
    let config = config(25, TipSelection::UniformRandom);
    let mut rng = StdRng::seed_from_u64(66);
    let mut generator = TangleGenerator::new(config.clone()).unwrap();

    assert_eq!(generator.tangle().nodes.len(), 1);
    assert_eq!(generator.clock(), config.h);

    let mut added = Vec::new();
    while let Some(id) = generator.step(&mut rng) {
        added.push(id);
        assert!(generator.clock() > config.h);
    }
    assert!(generator.is_complete());
    assert_eq!(generator.step(&mut rng), None);
    assert_eq!(added.len(), 24);
    assert_eq!(added.first(), Some(&NodeId(1)));

    let expected = generate_tangle(&config, &mut StdRng::seed_from_u64(66)).unwrap();
    assert_eq!(generator.finish(), expected);
}

#[test]
fn test_large_latency_leaves_early_arrivals_on_genesis() {
    // With h far above the mean gap, early arrivals only see genesis
    let mut rng = StdRng::seed_from_u64(67);
    let config = GeneratorConfig { h: 50.0, lambda: 1.0, ..config(10, TipSelection::UniformRandom) };

    let tangle = generate_tangle(&config, &mut rng).unwrap();

    for link in &tangle.links {
        assert_eq!(link.target, NodeId(0));
    }
}

#[test]
fn test_arrival_rate_controls_duration() {
    let slow = generate_tangle(
        &GeneratorConfig { lambda: 0.5, ..config(200, TipSelection::UniformRandom) },
        &mut StdRng::seed_from_u64(68),
    ).unwrap();
    let fast = generate_tangle(
        &GeneratorConfig { lambda: 20.0, ..config(200, TipSelection::UniformRandom) },
        &mut StdRng::seed_from_u64(68),
    ).unwrap();

    // Mean gap is 1/lambda on top of the initial offset h
    assert!(slow.duration() > fast.duration() * 5.0);
}
