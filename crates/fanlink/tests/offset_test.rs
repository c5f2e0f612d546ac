use fanlink::graph::{Curve, Diagram, Link, LinkId, Node, Routing, point, size};
use fanlink::offset::offset_for_position;
use fanlink::{assign_offsets, compute_offset, resolve_group};
use serde_json::json;

fn diagram() -> Diagram {
    let mut d = Diagram::new();
    d.add_node("a", Node::new(point(0.0, 0.0), size(40.0, 40.0)));
    d.add_node("b", Node::new(point(200.0, 0.0), size(40.0, 40.0)));
    d.add_node("c", Node::new(point(0.0, 200.0), size(40.0, 40.0)));
    d
}

fn add_indexed(d: &mut Diagram, count: usize) -> Vec<LinkId> {
    (0..count)
        .map(|i| {
            d.add_link(Link::new("a", "b").with_data(json!({ "parallelIndex": i })))
                .unwrap()
        })
        .collect()
}

#[test]
fn offsets_are_centered_on_zero() {
    assert_eq!(offset_for_position(0, 3, 10.0), -10.0);
    assert_eq!(offset_for_position(1, 3, 10.0), 0.0);
    assert_eq!(offset_for_position(2, 3, 10.0), 10.0);

    let even: Vec<f64> = (0..4).map(|i| offset_for_position(i, 4, 10.0)).collect();
    assert_eq!(even, vec![-15.0, -5.0, 5.0, 15.0]);
}

#[test]
fn tiny_offsets_snap_to_zero() {
    assert_eq!(offset_for_position(0, 2, 0.019), 0.0);
    assert_eq!(offset_for_position(0, 2, 0.03), -0.015);
}

#[test]
fn three_indexed_links_get_minus_ten_zero_ten() {
    let mut d = diagram();
    let ids = add_indexed(&mut d, 3);
    let offsets: Vec<f64> = ids.iter().map(|&id| compute_offset(&d, id)).collect();
    assert_eq!(offsets, vec![-10.0, 0.0, 10.0]);
}

#[test]
fn offsets_follow_resolved_order_and_are_symmetric() {
    for k in 2..7 {
        let mut d = diagram();
        for _ in 0..k {
            d.add_link(Link::new("a", "b").with_parallel_spacing(6.0)).unwrap();
        }
        let ids = d.link_ids();
        let order = resolve_group(&d, ids[0]);
        let offsets: Vec<f64> = order.iter().map(|&id| compute_offset(&d, id)).collect();

        for (i, offset) in offsets.iter().enumerate() {
            let expected = 6.0 * (i as f64 - (k as f64 - 1.0) / 2.0);
            assert!((offset - expected).abs() < 1e-9);
        }
        let sum: f64 = offsets.iter().sum();
        assert!(sum.abs() < 1e-9);
        let zeros = offsets.iter().filter(|o| **o == 0.0).count();
        assert_eq!(zeros, usize::from(k % 2 == 1));
    }
}

#[test]
fn lone_link_keeps_its_baseline() {
    let mut d = diagram();
    let id = d.add_link(Link::new("a", "b")).unwrap();
    assert_eq!(compute_offset(&d, id), 0.0);
}

#[test]
fn zero_spacing_keeps_the_baseline() {
    let mut d = diagram();
    let ids = add_indexed(&mut d, 3);
    for &id in &ids {
        d.set_parallel_spacing(id, 0.0);
    }
    for &id in &ids {
        assert_eq!(compute_offset(&d, id), 0.0);
    }
}

#[test]
fn negative_spacing_disables_the_whole_group() {
    let mut d = diagram();
    let ids = add_indexed(&mut d, 3);
    for &id in &ids {
        d.set_parallel_spacing(id, -5.0);
        assert_eq!(d.link(id).unwrap().parallel_spacing(), 0.0);
    }
    for &id in &ids {
        assert_eq!(compute_offset(&d, id), 0.0);
    }
}

#[test]
fn explicit_curviness_wins() {
    let mut d = diagram();
    let ids = add_indexed(&mut d, 2);
    d.link_mut(ids[0]).unwrap().curviness = Some(30.0);

    assert_eq!(compute_offset(&d, ids[0]), 30.0);
    assert_eq!(compute_offset(&d, ids[1]), 5.0);
}

#[test]
fn orthogonal_and_bezier_links_never_get_a_parallel_offset() {
    let mut d = diagram();
    add_indexed(&mut d, 2);
    let ortho = d.add_link(Link::new("a", "b").with_routing(Routing::Orthogonal)).unwrap();
    let bezier = d.add_link(Link::new("a", "b").with_curve(Curve::Bezier)).unwrap();
    let curved_bezier = d
        .add_link(
            Link::new("a", "b")
                .with_curve(Curve::Bezier)
                .with_curviness(-8.0),
        )
        .unwrap();

    assert_eq!(compute_offset(&d, ortho), 0.0);
    assert_eq!(compute_offset(&d, bezier), 0.0);
    assert_eq!(compute_offset(&d, curved_bezier), -8.0);
}

#[test]
fn removed_link_falls_back_to_zero() {
    let mut d = diagram();
    let ids = add_indexed(&mut d, 3);
    d.remove_link(ids[1]);

    assert_eq!(compute_offset(&d, ids[1]), 0.0);
    assert_eq!(compute_offset(&d, ids[0]), -5.0);
    assert_eq!(compute_offset(&d, ids[2]), 5.0);
}

#[test]
fn batch_assignment_matches_independent_computation() {
    let mut d = diagram();
    add_indexed(&mut d, 4);
    d.add_link(Link::new("b", "a")).unwrap();
    d.add_link(Link::new("b", "a").with_parallel_spacing(3.0)).unwrap();
    d.add_link(Link::new("a", "c").with_curviness(12.0)).unwrap();
    d.add_link(Link::new("a", "c")).unwrap();
    d.add_link(Link::new("a", "b").with_routing(Routing::Orthogonal)).unwrap();
    let odd = d.add_link(Link::new("a", "b")).unwrap();
    d.set_parallel_spacing(odd, 25.0);

    let batch = assign_offsets(&d);
    assert_eq!(batch.len(), d.link_count());
    for id in d.link_ids() {
        assert_eq!(batch[&id], compute_offset(&d, id), "{id}");
    }
}
