use fanlink::graph::{Curve, Diagram, Link, LinkId, Node, Port, Routing, point, size, vector};
use fanlink::{is_parallel_eligible, resolve_group};
use serde_json::json;

fn diagram() -> Diagram {
    let mut d = Diagram::new();
    d.add_node(
        "a",
        Node::new(point(0.0, 0.0), size(40.0, 40.0)).with_port("out", Port::at(vector(20.0, 0.0))),
    );
    d.add_node("b", Node::new(point(200.0, 0.0), size(40.0, 40.0)));
    d
}

#[test]
fn lone_link_resolves_to_itself() {
    let mut d = diagram();
    let id = d.add_link(Link::new("a", "b")).unwrap();
    assert_eq!(resolve_group(&d, id), vec![id]);
}

#[test]
fn detached_link_resolves_to_itself() {
    let mut d = diagram();
    let id = d.add_link(Link::new("a", "b")).unwrap();
    d.add_link(Link::new("a", "b")).unwrap();
    d.remove_link(id);

    assert_eq!(resolve_group(&d, id), vec![id]);
}

#[test]
fn group_orders_by_parallel_index_first() {
    let mut d = diagram();
    let third = d.add_link(Link::new("a", "b").with_data(json!({ "parallelIndex": 2 }))).unwrap();
    let first = d
        .add_link(Link::new("a", "b").with_data(json!({ "parallelIndex": -1.5 })))
        .unwrap();
    let second = d.add_link(Link::new("a", "b").with_data(json!({ "parallelIndex": 0 }))).unwrap();

    assert_eq!(resolve_group(&d, third), vec![first, second, third]);
}

#[test]
fn ties_break_on_the_assigned_key() {
    let mut d = diagram();
    // Auto keys count down: -1, -2, -3.
    let l1 = d.add_link(Link::new("a", "b")).unwrap();
    let l2 = d.add_link(Link::new("a", "b")).unwrap();
    let l3 = d.add_link(Link::new("a", "b")).unwrap();
    assert_eq!(resolve_group(&d, l1), vec![l3, l2, l1]);

    let mut d = diagram();
    let c = d.add_link(Link::new("a", "b").with_data(json!({ "key": "c" }))).unwrap();
    let a = d.add_link(Link::new("a", "b").with_data(json!({ "key": "a" }))).unwrap();
    let b = d.add_link(Link::new("a", "b").with_data(json!({ "key": "b" }))).unwrap();
    assert_eq!(resolve_group(&d, c), vec![a, b, c]);
}

#[test]
fn every_member_resolves_the_same_order() {
    let mut d = diagram();
    let ids: Vec<LinkId> = (0..5)
        .map(|i| {
            d.add_link(Link::new("a", "b").with_data(json!({ "parallelIndex": (i * 3) % 5 })))
                .unwrap()
        })
        .collect();

    let expected = resolve_group(&d, ids[0]);
    assert_eq!(expected.len(), 5);
    for &id in &ids {
        assert_eq!(resolve_group(&d, id), expected);
    }
}

#[test]
fn reversed_links_and_other_ports_form_separate_groups() {
    let mut d = diagram();
    let ab = d.add_link(Link::new("a", "b")).unwrap();
    let ab2 = d.add_link(Link::new("a", "b")).unwrap();
    let ba = d.add_link(Link::new("b", "a")).unwrap();
    let from_port = d.add_link(Link::new("a", "b").with_ports("out", "")).unwrap();

    assert_eq!(resolve_group(&d, ab), vec![ab2, ab]);
    assert_eq!(resolve_group(&d, ba), vec![ba]);
    assert_eq!(resolve_group(&d, from_port), vec![from_port]);
}

#[test]
fn orthogonal_and_bezier_links_are_excluded() {
    let mut d = diagram();
    let plain = d.add_link(Link::new("a", "b")).unwrap();
    let ortho = d.add_link(Link::new("a", "b").with_routing(Routing::Orthogonal)).unwrap();
    let avoids = d.add_link(Link::new("a", "b").with_routing(Routing::AvoidsNodes)).unwrap();
    let bezier = d.add_link(Link::new("a", "b").with_curve(Curve::Bezier)).unwrap();

    assert_eq!(resolve_group(&d, plain), vec![plain]);
    for id in [ortho, avoids, bezier] {
        assert!(!is_parallel_eligible(d.link(id).unwrap()));
        assert!(!resolve_group(&d, id).contains(&id));
    }
}
