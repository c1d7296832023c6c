// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use log::{debug, warn};
use thiserror::Error;

use crate::kernel::{F64Kernel, Kernel2};
use crate::mesh::flags::{RingShape, SweepAxis};
use crate::mesh::node::VertexId;
use crate::mesh::ring::Ring;

pub mod boundary;
mod fan;
mod monotone;

pub use boundary::{BoundaryEdgeNode, classify_and_order_boundary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// The ring was handed over without being convex or monotone; it has to
    /// be decomposed into monotone pieces first.
    #[error("ring is neither convex nor monotone")]
    NotTriangulable,
}

/// Triangulates `ring` into CCW triples of vertex ids using `f64` orientation tests.
pub fn triangulate_ring(ring: &Ring) -> Result<Vec<VertexId>, TriangulationError> {
    triangulate_ring_with::<F64Kernel>(ring)
}

/// Same as [`triangulate_ring`], with the orientation primitive supplied by `K`.
///
/// Convex rings without intermediate axis nodes are fanned from the first
/// vertex; monotone rings go through the stack sweep. Every emitted triple
/// winds counter-clockwise in real coordinates. Nothing is emitted on error.
pub fn triangulate_ring_with<K: Kernel2>(ring: &Ring) -> Result<Vec<VertexId>, TriangulationError> {
    let count = ring.node_count();
    let mut indices = Vec::with_capacity(3 * count.saturating_sub(2));

    let shape = ring.shape();
    match shape {
        RingShape::ConvexSimple => fan::triangulate_convex::<K>(ring, &mut indices),
        RingShape::ConvexWithAxisNodes { axis } => {
            monotone::triangulate_monotone::<K>(ring, axis, &mut indices)
        }
        RingShape::MonotoneX => monotone::triangulate_monotone::<K>(ring, SweepAxis::X, &mut indices),
        RingShape::MonotoneY => monotone::triangulate_monotone::<K>(ring, SweepAxis::Y, &mut indices),
        RingShape::Irregular => {
            warn!(
                "refusing to triangulate ring of {count} nodes with flags {:?}",
                ring.flags()
            );
            return Err(TriangulationError::NotTriangulable);
        }
    }

    debug!(
        "{shape:?} ring of {count} nodes -> {} triangles",
        indices.len() / 3
    );
    Ok(indices)
}
