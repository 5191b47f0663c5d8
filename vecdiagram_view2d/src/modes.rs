// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamp behavior applied to the pan origin after every mutation.
///
/// Shared by [`crate::ViewTransform::pan`], [`crate::ViewTransform::zoom_by`]
/// and the explicit origin setters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OriginClamp {
    /// Do not clamp; the origin may be panned anywhere.
    #[default]
    Free,
    /// Keep each origin component inside `[0, viewport extent]`.
    ///
    /// With this mode the diagram origin can never be dragged off the
    /// viewport. Note that zooming about a focal point may then move the
    /// focal point when the clamp engages.
    Viewport,
}
