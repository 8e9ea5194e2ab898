// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generational layout: deterministic percent-space positions grouped by generation.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::cmp::Ordering;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};

use crate::member::{Member, MemberId};

/// Which screen axis generations advance along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Generations stack top to bottom; siblings spread horizontally.
    #[default]
    GenerationsDown,
    /// Generations advance left to right; siblings spread vertically.
    GenerationsAcross,
}

/// Ordering rule for members that share a generation.
///
/// All rules are total and stable, so the resulting layout depends only on
/// the member list and the parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Keep the order in which members were supplied.
    #[default]
    Declaration,
    /// Sort by display name, then by id.
    Name,
    /// Sort by id.
    Id,
}

/// Parameters for [`layout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    horizontal_margin: f64,
    vertical_margin: f64,
    orientation: Orientation,
    tie_break: TieBreak,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            horizontal_margin: 10.0,
            vertical_margin: 10.0,
            orientation: Orientation::default(),
            tie_break: TieBreak::default(),
        }
    }
}

impl LayoutParams {
    /// Largest margin accepted; anything at or past 50% leaves no usable range.
    const MAX_MARGIN: f64 = 49.0;

    /// Sets the horizontal and vertical margins in percent units.
    ///
    /// Values are clamped into `[0, 49]`; non-finite values reset to `0`.
    #[must_use]
    pub fn with_margins(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_margin = sanitize_margin(horizontal);
        self.vertical_margin = sanitize_margin(vertical);
        self
    }

    /// Sets the orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the tie-break rule within a generation.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Horizontal margin in percent units.
    #[must_use]
    pub fn horizontal_margin(&self) -> f64 {
        self.horizontal_margin
    }

    /// Vertical margin in percent units.
    #[must_use]
    pub fn vertical_margin(&self) -> f64 {
        self.vertical_margin
    }

    /// Layout orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Tie-break rule.
    #[must_use]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}

fn sanitize_margin(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, LayoutParams::MAX_MARGIN)
    } else {
        0.0
    }
}

/// Summary numbers describing a layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    /// Number of distinct generations present.
    pub generation_count: usize,
    /// Size of the largest generation.
    pub max_generation_size: usize,
    /// Horizontal margin used, in percent units.
    pub horizontal_margin: f64,
    /// Vertical margin used, in percent units.
    pub vertical_margin: f64,
}

impl LayoutMetrics {
    /// Percent-space extent left once margins are removed from both sides.
    #[must_use]
    pub fn usable_extent(&self) -> Size {
        Size::new(
            100.0 - 2.0 * self.horizontal_margin,
            100.0 - 2.0 * self.vertical_margin,
        )
    }
}

/// A [`Member`] with its computed position.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedMember {
    /// The source member.
    pub member: Member,
    /// Position in percent space, each coordinate in `[0, 100]`.
    pub position: Point,
    /// Generation with the default applied.
    pub generation: i32,
    /// Rank of this member's generation among all generations present.
    pub generation_index: usize,
    /// Rank within its generation.
    pub order_in_generation: usize,
}

impl PositionedMember {
    /// Shorthand for `self.member.id`.
    #[must_use]
    pub fn id(&self) -> &MemberId {
        &self.member.id
    }
}

/// Result of [`layout`].
#[derive(Clone, Debug)]
pub struct TreeLayout {
    nodes: Vec<PositionedMember>,
    metrics: LayoutMetrics,
    bounds: Option<Rect>,
    index: HashMap<MemberId, usize>,
    orientation: Orientation,
}

impl TreeLayout {
    /// Positioned members, in the order the members were supplied.
    #[must_use]
    pub fn nodes(&self) -> &[PositionedMember] {
        &self.nodes
    }

    /// Layout metrics.
    #[must_use]
    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    /// Orientation the layout was computed with.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Bounding rectangle of all positions in percent space.
    ///
    /// Returns `None` when there are no members. The rectangle may have zero
    /// width or height when every member shares a row or column.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Looks up a positioned member by id.
    ///
    /// If the input contained duplicate ids, the first occurrence wins.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PositionedMember> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Returns `true` if the layout has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Computes positions for `members`.
///
/// Members are bucketed by generation; generations are ranked ascending and
/// spread along the generation axis, while each generation is centered on
/// the span of the largest one. The result is a pure function of the inputs.
///
/// An empty slice produces an empty layout with zero counts.
#[must_use]
pub fn layout(members: &[Member], params: &LayoutParams) -> TreeLayout {
    let mut metrics = LayoutMetrics {
        generation_count: 0,
        max_generation_size: 0,
        horizontal_margin: params.horizontal_margin,
        vertical_margin: params.vertical_margin,
    };
    if members.is_empty() {
        return TreeLayout {
            nodes: Vec::new(),
            metrics,
            bounds: None,
            index: HashMap::new(),
            orientation: params.orientation,
        };
    }

    // BTreeMap keeps generations sorted ascending.
    let mut groups: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
    for (i, member) in members.iter().enumerate() {
        groups
            .entry(member.generation_or_default())
            .or_default()
            .push(i);
    }

    // Per-member (generation_index, order_in_generation, group_len).
    let mut placement = alloc::vec![(0_usize, 0_usize, 0_usize); members.len()];
    for (generation_index, group) in groups.values_mut().enumerate() {
        sort_group(group, members, params.tie_break);
        for (order, &i) in group.iter().enumerate() {
            placement[i] = (generation_index, order, group.len());
        }
    }

    metrics.generation_count = groups.len();
    metrics.max_generation_size = groups.values().map(Vec::len).max().unwrap_or(0);

    let max_size = metrics.max_generation_size as f64;
    let generation_count = metrics.generation_count;
    let row_denominator = generation_count.saturating_sub(1).max(1) as f64;
    let usable = metrics.usable_extent();

    let mut nodes = Vec::with_capacity(members.len());
    let mut index = HashMap::with_capacity(members.len());
    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);

    for (i, member) in members.iter().enumerate() {
        let (generation_index, order, group_len) = placement[i];

        let offset = (max_size - group_len as f64) / 2.0;
        let slot = (offset + order as f64 + 1.0) / (max_size + 1.0);
        let rank = if generation_count > 1 {
            generation_index as f64 / row_denominator
        } else {
            0.5
        };

        let (fx, fy) = match params.orientation {
            Orientation::GenerationsDown => (slot, rank),
            Orientation::GenerationsAcross => (rank, slot),
        };
        let position = Point::new(
            params.horizontal_margin + fx * usable.width,
            params.vertical_margin + fy * usable.height,
        );

        min.x = min.x.min(position.x);
        min.y = min.y.min(position.y);
        max.x = max.x.max(position.x);
        max.y = max.y.max(position.y);

        index.entry(member.id.clone()).or_insert(i);
        nodes.push(PositionedMember {
            member: member.clone(),
            position,
            generation: member.generation_or_default(),
            generation_index,
            order_in_generation: order,
        });
    }

    TreeLayout {
        nodes,
        metrics,
        bounds: Some(Rect::from_points(min, max)),
        index,
        orientation: params.orientation,
    }
}

fn sort_group(group: &mut [usize], members: &[Member], tie_break: TieBreak) {
    let cmp: fn(&Member, &Member) -> Ordering = match tie_break {
        TieBreak::Declaration => return,
        TieBreak::Name => |a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)),
        TieBreak::Id => |a, b| a.id.cmp(&b.id),
    };
    // Stable, so equal keys keep declaration order.
    group.sort_by(|&a, &b| cmp(&members[a], &members[b]));
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_input_yields_empty_layout() {
        let out = layout(&[], &LayoutParams::default());
        assert!(out.is_empty());
        assert_eq!(out.metrics().generation_count, 0);
        assert_eq!(out.metrics().max_generation_size, 0);
        assert_eq!(out.bounds(), None);
    }

    #[test]
    fn single_member_sits_in_the_middle() {
        let out = layout(&[Member::new("solo", "Solo")], &LayoutParams::default());
        let p = out.nodes()[0].position;
        assert!(approx(p.x, 50.0));
        assert!(approx(p.y, 50.0));
        assert_eq!(out.metrics().generation_count, 1);
        assert_eq!(out.metrics().max_generation_size, 1);
    }

    #[test]
    fn sparse_generation_is_centered_on_densest_span() {
        let members = vec![
            Member::new("g", "Grandparent").with_generation(0),
            Member::new("a", "A").with_generation(1),
            Member::new("b", "B").with_generation(1),
            Member::new("c", "C").with_generation(1),
        ];
        let out = layout(&members, &LayoutParams::default());
        // Densest row has three slots at 1/4, 2/4, 3/4 of 80% usable.
        assert!(approx(out.get("a").unwrap().position.x, 30.0));
        assert!(approx(out.get("b").unwrap().position.x, 50.0));
        assert!(approx(out.get("c").unwrap().position.x, 70.0));
        // The lone grandparent is offset by one slot and lands in the middle.
        assert!(approx(out.get("g").unwrap().position.x, 50.0));
        assert!(approx(out.get("g").unwrap().position.y, 10.0));
        assert!(approx(out.get("a").unwrap().position.y, 90.0));
    }

    #[test]
    fn generations_are_ranked_not_used_raw() {
        let members = vec![
            Member::new("late", "Late").with_generation(7),
            Member::new("early", "Early").with_generation(-2),
        ];
        let out = layout(&members, &LayoutParams::default());
        assert_eq!(out.get("early").unwrap().generation_index, 0);
        assert_eq!(out.get("late").unwrap().generation_index, 1);
        assert_eq!(out.get("late").unwrap().generation, 7);
        // Output keeps input order.
        assert_eq!(out.nodes()[0].id().as_str(), "late");
    }

    #[test]
    fn across_orientation_transposes_axes() {
        let members = vec![
            Member::new("p", "P").with_generation(0),
            Member::new("c", "C").with_generation(1),
        ];
        let params = LayoutParams::default().with_orientation(Orientation::GenerationsAcross);
        let out = layout(&members, &params);
        let p = out.get("p").unwrap().position;
        let c = out.get("c").unwrap().position;
        assert!(approx(p.x, 10.0));
        assert!(approx(c.x, 90.0));
        assert!(approx(p.y, 50.0));
        assert!(approx(c.y, 50.0));
        assert_eq!(out.orientation(), Orientation::GenerationsAcross);
    }

    #[test]
    fn tie_break_by_name_reorders_within_generation() {
        let members = vec![
            Member::new("z", "Zed"),
            Member::new("y", "Amy"),
            Member::new("x", "Amy"),
        ];
        let params = LayoutParams::default().with_tie_break(TieBreak::Name);
        let out = layout(&members, &params);
        assert_eq!(out.get("x").unwrap().order_in_generation, 0);
        assert_eq!(out.get("y").unwrap().order_in_generation, 1);
        assert_eq!(out.get("z").unwrap().order_in_generation, 2);

        let by_id = layout(&members, &LayoutParams::default().with_tie_break(TieBreak::Id));
        assert_eq!(by_id.get("x").unwrap().order_in_generation, 0);
        assert_eq!(by_id.get("z").unwrap().order_in_generation, 2);
    }

    #[test]
    fn margins_are_clamped() {
        let params = LayoutParams::default().with_margins(-4.0, f64::NAN);
        assert_eq!(params.horizontal_margin(), 0.0);
        assert_eq!(params.vertical_margin(), 0.0);
        let params = LayoutParams::default().with_margins(80.0, 12.0);
        assert_eq!(params.horizontal_margin(), 49.0);
        assert_eq!(params.vertical_margin(), 12.0);
    }

    #[test]
    fn bounds_cover_all_positions() {
        let members = vec![
            Member::new("a", "A").with_generation(0),
            Member::new("b", "B").with_generation(0),
            Member::new("c", "C").with_generation(1),
        ];
        let out = layout(&members, &LayoutParams::default());
        let bounds = out.bounds().unwrap();
        for node in out.nodes() {
            assert!(bounds.x0 <= node.position.x && node.position.x <= bounds.x1);
            assert!(bounds.y0 <= node.position.y && node.position.y <= bounds.y1);
        }
        assert!(approx(bounds.y0, 10.0));
        assert!(approx(bounds.y1, 90.0));
    }
}
