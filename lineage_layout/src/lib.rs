// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lineage Layout: generational family-tree layout and connector synthesis.
//!
//! This crate turns a list of people linked by parent/child relations into
//! geometry a renderer can paint:
//! - [`layout`] assigns every [`Member`] a position in a normalized
//!   percent space (`0..=100` on each axis), grouped by generation.
//! - [`build_edges`] derives a de-duplicated parent → child edge set.
//! - [`connector_paths`] turns those edges into cubic S-curves.
//!
//! It does **not** fetch data, render, or own any viewport. Pan and zoom over
//! the resulting layout live in `lineage_view`; input handling lives in
//! `lineage_canvas`.
//!
//! ## Minimal example
//!
//! ```rust
//! use lineage_layout::{ConnectorStyle, LayoutParams, Member, connector_paths, layout};
//!
//! let members = [
//!     Member::new("p1", "Evelyn").with_children(["c1", "c2"]),
//!     Member::new("c1", "Jordan").with_generation(1).with_parents(["p1"]),
//!     Member::new("c2", "Amelia").with_generation(1).with_parents(["p1"]),
//! ];
//!
//! let tree = layout(&members, &LayoutParams::default());
//! assert_eq!(tree.metrics().generation_count, 2);
//!
//! // The parent sits on the midline; the children straddle it.
//! let p1 = tree.get("p1").unwrap().position;
//! let c1 = tree.get("c1").unwrap().position;
//! let c2 = tree.get("c2").unwrap().position;
//! assert_eq!(p1.x, 50.0);
//! assert!((c1.x + c2.x - 100.0).abs() < 1e-9);
//!
//! // Both sides declare the relation, but each edge is drawn once.
//! let connectors = connector_paths(&tree, &ConnectorStyle::default());
//! assert_eq!(connectors.len(), 2);
//! ```
//!
//! ## Robustness
//!
//! Layout never fails. Missing generations default to `0`, relations that
//! point outside the member set produce no edge, and an empty member list
//! produces an empty layout. [`validate_members`] is available for callers
//! that want to report duplicate ids or self relations at their boundary.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod connectors;
mod layout;
mod member;

pub use connectors::{Connector, ConnectorStyle, Edge, build_edges, connector_paths};
pub use layout::{
    LayoutMetrics, LayoutParams, Orientation, PositionedMember, TieBreak, TreeLayout, layout,
};
pub use member::{Member, MemberId, MemberSetError, Relations, validate_members};
