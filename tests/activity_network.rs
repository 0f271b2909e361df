//! End-to-end exercises: building a project schedule as an AOE network and
//! maintaining an undirected graph through edits.

use aonet::{Graph, GraphError};

/// A small project plan: tasks are events (vertices), activities are
/// weighted edges.  Built by label, queried by position, analyzed, edited,
/// re-analyzed.
#[test]
fn test_project_schedule_lifecycle() {
    let mut plan: Graph<&str, i64> = Graph::directed(16);
    for task in ["start", "frame", "wire", "plumb", "inspect", "finish"] {
        plan.insert_vertex(task).unwrap();
    }
    plan.insert_edge(&"start", &"frame", 4).unwrap();
    plan.insert_edge(&"frame", &"wire", 3).unwrap();
    plan.insert_edge(&"frame", &"plumb", 6).unwrap();
    plan.insert_edge(&"wire", &"inspect", 1).unwrap();
    plan.insert_edge(&"plumb", &"inspect", 1).unwrap();
    plan.insert_edge(&"inspect", &"finish", 2).unwrap();

    assert_eq!(plan.num_vertices(), 6);
    assert_eq!(plan.num_edges(), 6);

    // The precedence order is consistent.
    let order = plan.topological_sort().unwrap();
    assert_eq!(order.len(), 6);
    let rank = |task: &str| {
        let pos = plan.find_vertex(&task).unwrap();
        order.iter().position(|&p| p == pos).unwrap()
    };
    assert!(rank("start") < rank("frame"));
    assert!(rank("frame") < rank("plumb"));
    assert!(rank("inspect") < rank("finish"));

    // Plumbing dominates wiring, so the critical path runs through it.
    let schedule = plan.critical_path().unwrap();
    assert_eq!(schedule.length, 13);
    let pos = |task: &str| plan.find_vertex(&task).unwrap();
    assert_eq!(schedule.earliest[pos("inspect")], 11);
    let critical: Vec<(&str, &str)> = schedule
        .edges
        .iter()
        .map(|&(a, b)| (*plan.value(a).unwrap(), *plan.value(b).unwrap()))
        .collect();
    assert_eq!(
        critical,
        vec![
            ("start", "frame"),
            ("frame", "plumb"),
            ("plumb", "inspect"),
            ("inspect", "finish"),
        ]
    );
    // The wiring branch has slack.
    assert!(!critical.contains(&("frame", "wire")));

    // Cancelling the plumbing task reroutes the critical path through
    // wiring, and the analysis sees the compacted graph consistently.
    plan.remove_vertex(pos("plumb")).unwrap();
    assert_eq!(plan.num_vertices(), 5);
    assert_eq!(plan.num_edges(), 4);
    let schedule = plan.critical_path().unwrap();
    assert_eq!(schedule.length, 4 + 3 + 1 + 2);
    let critical: Vec<(&str, &str)> = schedule
        .edges
        .iter()
        .map(|&(a, b)| (*plan.value(a).unwrap(), *plan.value(b).unwrap()))
        .collect();
    assert!(critical.contains(&("frame", "wire")));

    // Traversal from the source still reaches every remaining task.
    let start = plan.find_vertex(&"start").unwrap();
    assert_eq!(plan.bfs_from(start).unwrap().count(), 5);
}

#[test]
fn test_undirected_network_edits() {
    let mut net: Graph<char, u32> = Graph::undirected(8);
    for site in ['a', 'b', 'c', 'd'] {
        net.insert_vertex(site).unwrap();
    }
    net.insert_edge(&'a', &'b', 10).unwrap();
    net.insert_edge(&'b', &'c', 20).unwrap();
    net.insert_edge(&'c', &'d', 30).unwrap();
    assert_eq!(net.num_edges(), 3);

    // Symmetric weights, both directions.
    for (x, y, w) in [('a', 'b', 10u32), ('b', 'c', 20), ('c', 'd', 30)] {
        let (px, py) = (net.find_vertex(&x).unwrap(), net.find_vertex(&y).unwrap());
        assert_eq!(net.weight(px, py), Ok(&w));
        assert_eq!(net.weight(py, px), Ok(&w));
    }

    // One connected component either way around.
    assert_eq!(net.dfs_forest().len(), 1);
    assert_eq!(net.bfs_forest().len(), 1);

    // Dropping the middle link splits the network.
    let b = net.find_vertex(&'b').unwrap();
    let c = net.find_vertex(&'c').unwrap();
    assert_eq!(net.remove_edge(b, c), Ok(20));
    assert_eq!(
        net.remove_edge(b, c),
        Err(GraphError::EdgeNotFound { from: b, to: c })
    );
    assert_eq!(net.num_edges(), 2);
    assert_eq!(net.dfs_forest().len(), 2);

    // Removing a site takes its remaining edge with it.
    net.remove_vertex(net.find_vertex(&'a').unwrap()).unwrap();
    assert_eq!(net.num_vertices(), 3);
    assert_eq!(net.num_edges(), 1);
    let survivors: Vec<char> = net.values().copied().collect();
    assert!(!survivors.contains(&'a'));
}

#[cfg(feature = "tracing")]
#[test]
fn test_tracing_init_is_idempotent() {
    aonet::tracing_support::init();
    aonet::tracing_support::init();
}
