use std::io::Write;
use std::path::PathBuf;

use bgpsimulator::as_graph::AsGraph;
use bgpsimulator::io;
use bgpsimulator::policy::Policy;

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("bgpsimulator-iotest-{}-{}", std::process::id(), name));
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn relationships_loader_builds_consistent_neighbor_sets() {
    let path = write_temp("rel.txt", "1|2|-1\n2|3|0\n");
    let mut graph = AsGraph::new();
    io::relationships::load(&mut graph, &path).unwrap();

    assert!(graph.nodes[&1].customers.contains(&2));
    assert!(graph.nodes[&2].providers.contains(&1));
    assert!(graph.nodes[&2].peers.contains(&3));
    assert!(graph.nodes[&3].peers.contains(&2));
    std::fs::remove_file(path).ok();
}

#[test]
fn relationships_loader_skips_malformed_lines() {
    let path = write_temp("rel-bad.txt", "not_a_number|2|-1\n1|2\n\n1|2|-1\n");
    let mut graph = AsGraph::new();
    io::relationships::load(&mut graph, &path).unwrap();

    assert_eq!(graph.nodes.len(), 2);
    assert!(graph.nodes[&1].customers.contains(&2));
    std::fs::remove_file(path).ok();
}

#[test]
fn relationships_loader_is_order_independent_across_files() {
    let a = write_temp("rel-a.txt", "1|2|-1\n");
    let b = write_temp("rel-b.txt", "2|3|0\n");

    let mut forward = AsGraph::new();
    io::relationships::load(&mut forward, &a).unwrap();
    io::relationships::load(&mut forward, &b).unwrap();

    let mut backward = AsGraph::new();
    io::relationships::load(&mut backward, &b).unwrap();
    io::relationships::load(&mut backward, &a).unwrap();

    assert_eq!(forward.nodes.len(), backward.nodes.len());
    assert_eq!(forward.nodes[&1].customers, backward.nodes[&1].customers);
    assert_eq!(forward.nodes[&2].peers, backward.nodes[&2].peers);

    std::fs::remove_file(a).ok();
    std::fs::remove_file(b).ok();
}

#[test]
fn rov_loader_replaces_policy_and_creates_missing_nodes() {
    let path = write_temp("rov.txt", "2\nnot_a_number\n\n3\n");
    let mut graph = AsGraph::new();
    io::rov::load(&mut graph, &path).unwrap();

    assert_eq!(graph.nodes.len(), 2);
    assert!(graph.nodes.contains_key(&2));
    assert!(graph.nodes.contains_key(&3));
    std::fs::remove_file(path).ok();
}

#[test]
fn seed_loader_seeds_origin_announcement() {
    let path = write_temp("seed.csv", "seed_asn,prefix,rov_invalid\n3,10.0.0.0/24,False\n");
    let mut graph = AsGraph::new();
    io::seed::load(&mut graph, &path).unwrap();
    graph.process_all_received();

    let node = &graph.nodes[&3];
    let best = node.policy.local_rib().get("10.0.0.0/24").unwrap();
    assert_eq!(best.as_path, vec![3]);
    assert_eq!(best.rel, bgpsimulator::shared::Relationship::Origin);
    assert!(!best.rov_invalid);

    std::fs::remove_file(path).ok();
}

#[test]
fn seed_loader_rov_invalid_flag_is_case_insensitive() {
    let path = write_temp("seed-rov.csv", "seed_asn,prefix,rov_invalid\n3,p,TRUE\n4,p,garbage\n");
    let mut graph = AsGraph::new();
    io::seed::load(&mut graph, &path).unwrap();
    graph.process_all_received();

    assert!(graph.nodes[&3].policy.local_rib().get("p").unwrap().rov_invalid);
    assert!(!graph.nodes[&4].policy.local_rib().get("p").unwrap().rov_invalid);

    std::fs::remove_file(path).ok();
}

#[test]
fn seed_loader_skips_malformed_row() {
    let path = write_temp(
        "seed-bad.csv",
        "seed_asn,prefix,rov_invalid\nnot_a_number,p,False\n3,p,False\n",
    );
    let mut graph = AsGraph::new();
    io::seed::load(&mut graph, &path).unwrap();
    graph.process_all_received();

    assert_eq!(graph.nodes.len(), 1);
    assert!(graph.nodes.contains_key(&3));

    std::fs::remove_file(path).ok();
}

#[test]
fn rib_writer_emits_sorted_quoted_csv() {
    let mut graph = AsGraph::new();
    graph.add_provider_customer_edge(1, 2);

    let ann_2 = bgpsimulator::Announcement::new(
        "10.0.0.0/24".to_string(),
        vec![2],
        2,
        bgpsimulator::shared::Relationship::Origin,
        false,
    );
    graph
        .get_or_create(2)
        .policy
        .receive("10.0.0.0/24".to_string(), ann_2, bgpsimulator::shared::Relationship::Origin);

    let ann_1 = bgpsimulator::Announcement::new(
        "9.0.0.0/24".to_string(),
        vec![1],
        1,
        bgpsimulator::shared::Relationship::Origin,
        false,
    );
    graph
        .get_or_create(1)
        .policy
        .receive("9.0.0.0/24".to_string(), ann_1, bgpsimulator::shared::Relationship::Origin);

    graph.process_all_received();

    let path = write_temp("rib.csv", "");
    io::rib_writer::write(&graph, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next().unwrap(), "asn,prefix,as_path");
    assert_eq!(lines.next().unwrap(), "1,9.0.0.0/24,\"(1,)\"");
    assert_eq!(lines.next().unwrap(), "2,10.0.0.0/24,\"(2,)\"");
    assert!(lines.next().is_none());

    std::fs::remove_file(path).ok();
}
