// Copyright 2025 the Vecdiagram Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers shared by the vecdiagram demos.

pub mod svg_canvas;
