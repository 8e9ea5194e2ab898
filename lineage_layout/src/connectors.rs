// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connector synthesis: parent/child edges and the curves that draw them.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use hashbrown::{HashMap, HashSet};
use kurbo::{CubicBez, Point};

use crate::layout::{Orientation, PositionedMember, TreeLayout};
use crate::member::MemberId;

/// A directed parent → child relation between two laid out members.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Parent end.
    pub from: MemberId,
    /// Child end.
    pub to: MemberId,
}

/// Derives the parent → child edges among `nodes`.
///
/// Edges declared through `children` come first, then any `parents`
/// declarations whose directed pair was not already seen. Edges with an
/// endpoint outside `nodes` are dropped. The output order follows first
/// declaration, so it is stable for a fixed input.
#[must_use]
pub fn build_edges(nodes: &[PositionedMember]) -> Vec<Edge> {
    let present: HashSet<&str> = nodes.iter().map(|n| n.id().as_str()).collect();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut edges = Vec::new();

    for node in nodes {
        let member = &node.member;
        for child in &member.children {
            push_edge(&present, &mut seen, &mut edges, &member.id, child);
        }
        for parent in &member.parents {
            push_edge(&present, &mut seen, &mut edges, parent, &member.id);
        }
    }
    edges
}

fn push_edge<'a>(
    present: &HashSet<&str>,
    seen: &mut HashSet<(&'a str, &'a str)>,
    edges: &mut Vec<Edge>,
    from: &'a MemberId,
    to: &'a MemberId,
) {
    // Dangling ends are expected for partial families.
    if !present.contains(from.as_str()) || !present.contains(to.as_str()) {
        return;
    }
    if seen.insert((from.as_str(), to.as_str())) {
        edges.push(Edge {
            from: from.clone(),
            to: to.clone(),
        });
    }
}

/// Styling inputs for [`connector_paths`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectorStyle {
    /// Side length of the square canvas the percent coordinates are scaled into.
    pub canvas_extent: f64,
    /// Generation whose connectors are drawn emphasized, if any.
    pub emphasis_generation: Option<i32>,
}

impl Default for ConnectorStyle {
    fn default() -> Self {
        Self {
            canvas_extent: 1000.0,
            emphasis_generation: None,
        }
    }
}

/// A drawable connector.
#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
    /// The relation this connector draws.
    pub edge: Edge,
    /// S-curve from parent to child in canvas units.
    pub path: CubicBez,
    /// Whether either end touches the emphasized generation.
    pub emphasis: bool,
}

impl Connector {
    /// Formats the curve as SVG path data (`M … C …`).
    #[must_use]
    pub fn svg_path(&self) -> String {
        let CubicBez { p0, p1, p2, p3 } = self.path;
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = write!(
            out,
            "M {} {} C {} {}, {} {}, {} {}",
            p0.x, p0.y, p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
        );
        out
    }
}

/// Builds connector curves for every edge in `layout`.
///
/// Control points sit at the midpoint of the generation axis so each curve
/// leaves the parent and enters the child perpendicular to the sibling row.
#[must_use]
pub fn connector_paths(layout: &TreeLayout, style: &ConnectorStyle) -> Vec<Connector> {
    let nodes = layout.nodes();
    let by_id: HashMap<&str, &PositionedMember> =
        nodes.iter().rev().map(|n| (n.id().as_str(), n)).collect();
    let scale = style.canvas_extent / 100.0;

    build_edges(nodes)
        .into_iter()
        .filter_map(|edge| {
            let from = by_id.get(edge.from.as_str())?;
            let to = by_id.get(edge.to.as_str())?;
            let start = (from.position.to_vec2() * scale).to_point();
            let end = (to.position.to_vec2() * scale).to_point();
            let path = lineage_curve(start, end, layout.orientation());
            let emphasis = style
                .emphasis_generation
                .is_some_and(|g| from.generation == g || to.generation == g);
            Some(Connector {
                edge,
                path,
                emphasis,
            })
        })
        .collect()
}

fn lineage_curve(start: Point, end: Point, orientation: Orientation) -> CubicBez {
    match orientation {
        Orientation::GenerationsDown => {
            let mid = (start.y + end.y) / 2.0;
            CubicBez::new(start, Point::new(start.x, mid), Point::new(end.x, mid), end)
        }
        Orientation::GenerationsAcross => {
            let mid = (start.x + end.x) / 2.0;
            CubicBez::new(start, Point::new(mid, start.y), Point::new(mid, end.y), end)
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::layout::{LayoutParams, layout};
    use crate::member::Member;

    #[test]
    fn both_sides_declaring_yield_one_edge() {
        let members = vec![
            Member::new("a", "A").with_children(["b"]),
            Member::new("b", "B").with_generation(1).with_parents(["a"]),
        ];
        let out = layout(&members, &LayoutParams::default());
        let edges = build_edges(out.nodes());
        assert_eq!(
            edges,
            vec![Edge {
                from: "a".into(),
                to: "b".into()
            }]
        );
    }

    #[test]
    fn parent_only_declaration_still_connects() {
        let members = vec![
            Member::new("a", "A"),
            Member::new("b", "B").with_generation(1).with_parents(["a"]),
        ];
        let out = layout(&members, &LayoutParams::default());
        let edges = build_edges(out.nodes());
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].from.as_str(), "a");
    }

    #[test]
    fn dangling_children_are_dropped() {
        let members = vec![Member::new("a", "A").with_children(["ghost"])];
        let out = layout(&members, &LayoutParams::default());
        assert!(build_edges(out.nodes()).is_empty());
        assert!(build_edges(&[]).is_empty());
    }

    #[test]
    fn curve_bends_at_generation_midpoint() {
        let members = vec![
            Member::new("p", "P").with_children(["c"]),
            Member::new("c", "C").with_generation(1),
        ];
        let out = layout(&members, &LayoutParams::default());
        let connectors = connector_paths(&out, &ConnectorStyle::default());
        assert_eq!(connectors.len(), 1);
        let path = connectors[0].path;
        assert_eq!(path.p0, Point::new(500.0, 100.0));
        assert_eq!(path.p3, Point::new(500.0, 900.0));
        assert_eq!(path.p1.y, 500.0);
        assert_eq!(path.p2.y, 500.0);
        assert_eq!(
            connectors[0].svg_path(),
            "M 500 100 C 500 500, 500 500, 500 900"
        );
        assert!(!connectors[0].emphasis);
    }

    #[test]
    fn control_points_stay_on_endpoint_columns() {
        let members = vec![
            Member::new("p", "P").with_children(["a", "b"]),
            Member::new("a", "A").with_generation(1),
            Member::new("b", "B").with_generation(1),
        ];
        let out = layout(&members, &LayoutParams::default());
        for connector in connector_paths(&out, &ConnectorStyle::default()) {
            let path = connector.path;
            assert_eq!(path.p1, Point::new(path.p0.x, 500.0));
            assert_eq!(path.p2, Point::new(path.p3.x, 500.0));
            assert_ne!(path.p0.x, path.p3.x);
        }
    }

    #[test]
    fn across_orientation_bends_horizontally() {
        let members = vec![
            Member::new("p", "P").with_children(["c"]),
            Member::new("c", "C").with_generation(1),
        ];
        let params = LayoutParams::default().with_orientation(Orientation::GenerationsAcross);
        let out = layout(&members, &params);
        let path = connector_paths(&out, &ConnectorStyle::default())[0].path;
        assert_eq!(path.p1.x, 500.0);
        assert_eq!(path.p2.x, 500.0);
        assert_eq!(path.p1.y, path.p0.y);
    }

    #[test]
    fn emphasis_follows_generation_of_interest() {
        let members = vec![
            Member::new("g", "G").with_generation(1).with_children(["k"]),
            Member::new("k", "K").with_generation(2),
            Member::new("h", "H").with_generation(0).with_children(["g"]),
        ];
        let out = layout(&members, &LayoutParams::default());
        let style = ConnectorStyle {
            emphasis_generation: Some(2),
            ..ConnectorStyle::default()
        };
        let connectors = connector_paths(&out, &style);
        assert_eq!(connectors.len(), 2);
        let g_to_k = connectors.iter().find(|c| c.edge.to.as_str() == "k").unwrap();
        let h_to_g = connectors.iter().find(|c| c.edge.to.as_str() == "g").unwrap();
        assert!(g_to_k.emphasis);
        assert!(!h_to_g.emphasis);
    }
}
