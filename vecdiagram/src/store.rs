// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The named vector collection.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::OnceCell;
use core::fmt;

use hashbrown::HashMap;
use peniko::Color;
use peniko::color::palette::css;
use vecdiagram_canvas::{Paint, PaintStyle};

/// Immutable drawing style of one vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VectorStyle {
    /// Color of the circle, line, arrowhead, and label.
    pub stroke_color: Color,
    /// Line width in logical units.
    pub stroke_width: f64,
    /// Label text size in logical units.
    pub text_size: f64,
}

impl Default for VectorStyle {
    fn default() -> Self {
        Self {
            stroke_color: css::BLACK,
            stroke_width: 4.0,
            text_size: 30.0,
        }
    }
}

impl VectorStyle {
    /// Creates a style.
    #[must_use]
    pub fn new(stroke_color: Color, stroke_width: f64, text_size: f64) -> Self {
        Self {
            stroke_color,
            stroke_width,
            text_size,
        }
    }

    /// Paint for this style with the given paint style.
    #[must_use]
    pub fn paint(&self, style: PaintStyle) -> Paint {
        Paint {
            color: self.stroke_color,
            stroke_width: self.stroke_width,
            style,
            dash: None,
            text_size: self.text_size,
        }
    }
}

/// A named polar ray.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorRecord {
    /// Unique key.
    pub label: String,
    /// Direction in screen radians (y grows downward).
    pub angle_radians: f64,
    /// Length in logical units.
    pub length: u32,
    /// Drawing style.
    pub style: VectorStyle,
}

/// Rejected [`VectorStore::upsert`] input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidVectorError {
    /// The length was negative.
    NegativeLength {
        /// Label of the rejected vector.
        label: String,
        /// The rejected length.
        length: i32,
    },
    /// The angle was NaN or infinite.
    NonFiniteAngle {
        /// Label of the rejected vector.
        label: String,
    },
}

impl fmt::Display for InvalidVectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeLength { label, length } => {
                write!(f, "vector {label:?} has negative length {length}")
            }
            Self::NonFiniteAngle { label } => {
                write!(f, "vector {label:?} has a non-finite angle")
            }
        }
    }
}

impl core::error::Error for InvalidVectorError {}

/// Label-keyed vector collection.
///
/// Labels are unique: inserting an existing label replaces the old record.
/// Iteration order carries no meaning; [`VectorStore::list`] sorts by label
/// so repeated renders of the same state paint in the same order.
#[derive(Clone, Debug, Default)]
pub struct VectorStore {
    vectors: HashMap<String, VectorRecord>,
    snapshot: OnceCell<Arc<[VectorRecord]>>,
    revision: u64,
}

impl VectorStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the vector stored under `label`.
    ///
    /// Fails without touching the store when `length` is negative or the
    /// angle is not finite.
    pub fn upsert(
        &mut self,
        label: impl Into<String>,
        angle_radians: f64,
        length: i32,
        style: VectorStyle,
    ) -> Result<(), InvalidVectorError> {
        let label = label.into();
        let Ok(stored_length) = u32::try_from(length) else {
            return Err(InvalidVectorError::NegativeLength { label, length });
        };
        if !angle_radians.is_finite() {
            return Err(InvalidVectorError::NonFiniteAngle { label });
        }

        tracing::debug!(label = %label, angle_radians, length, "upsert vector");
        let record = VectorRecord {
            label: label.clone(),
            angle_radians,
            length: stored_length,
            style,
        };
        self.vectors.insert(label, record);
        self.touch();
        Ok(())
    }

    /// Removes the vector stored under `label`.
    ///
    /// Returns `false` (and changes nothing) when no such vector exists.
    pub fn remove(&mut self, label: &str) -> bool {
        if self.vectors.remove(label).is_none() {
            return false;
        }
        tracing::debug!(label, "removed vector");
        self.touch();
        true
    }

    /// Removes every vector.
    pub fn clear(&mut self) {
        if self.vectors.is_empty() {
            return;
        }
        self.vectors.clear();
        self.touch();
    }

    /// Returns the vector stored under `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&VectorRecord> {
        self.vectors.get(label)
    }

    /// Number of stored vectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Returns `true` if no vectors are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Snapshot of the current records.
    ///
    /// The snapshot is built on first use after a mutation and shared by
    /// later calls. Iterating it again yields the same records even if the
    /// store has changed since.
    #[must_use]
    pub fn list(&self) -> VectorList {
        let records = self.snapshot.get_or_init(|| {
            let mut records: Vec<VectorRecord> = self.vectors.values().cloned().collect();
            records.sort_by(|a, b| a.label.cmp(&b.label));
            records.into()
        });
        VectorList {
            records: Arc::clone(records),
        }
    }

    /// Monotonic counter bumped by every successful mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.snapshot = OnceCell::new();
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Point-in-time view of a [`VectorStore`], sorted by label.
#[derive(Clone, Debug)]
pub struct VectorList {
    records: Arc<[VectorRecord]>,
}

impl VectorList {
    /// Iterates the snapshot. May be called any number of times.
    pub fn iter(&self) -> core::slice::Iter<'_, VectorRecord> {
        self.records.iter()
    }

    /// Number of records in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[VectorRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a VectorList {
    type Item = &'a VectorRecord;
    type IntoIter = core::slice::Iter<'a, VectorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
