// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamp behavior applied by [`crate::ViewConstraints::constrain`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Only the zoom limits apply; the content may be panned anywhere.
    None,
    /// Keep the laid out content inside the container, inset by padding.
    ///
    /// While the scaled content fits inside the padded container, the pan is
    /// clamped so no node can be dragged past the padding. Once it no longer
    /// fits, the allowed interval inverts and the pan resolves to its
    /// midpoint, centering the content on that axis.
    #[default]
    ContainPadded,
}
