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

#![allow(dead_code)]

use std::collections::HashSet;

use ringtri::kernel::orient2d;
use ringtri::{Ring, VertexId};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn ring(nodes: &[(VertexId, f64, f64)]) -> Ring {
    Ring::builder()
        .nodes(nodes.iter().copied())
        .build()
        .expect("valid ring")
}

/// Sum of the (signed) areas of the emitted triangles.
pub fn triangles_area(ring: &Ring, indices: &[VertexId]) -> f64 {
    indices
        .chunks(3)
        .map(|t| {
            let p = |id| ring.position_of(id).expect("id from the ring");
            0.5 * orient2d(p(t[0]), p(t[1]), p(t[2]))
        })
        .sum()
}

/// Checks the invariants every triangulation has to satisfy: whole triples,
/// distinct ids taken from the ring, strictly CCW winding and full coverage
/// of the polygon area.
pub fn assert_valid_triangulation(ring: &Ring, indices: &[VertexId]) {
    assert_eq!(indices.len() % 3, 0, "dangling indices: {indices:?}");
    assert!(indices.len() / 3 <= ring.node_count() - 2);

    let ids: HashSet<VertexId> = ring.nodes().iter().map(|n| n.id).collect();
    for t in indices.chunks(3) {
        assert!(t.iter().all(|id| ids.contains(id)), "unknown id in {t:?}");
        assert!(t[0] != t[1] && t[1] != t[2] && t[0] != t[2], "repeated id in {t:?}");

        let p = |id| ring.position_of(id).unwrap();
        let det = orient2d(p(t[0]), p(t[1]), p(t[2]));
        assert!(det > 0.0, "triangle {t:?} is not CCW (det = {det})");
    }

    let expected = ring.signed_area();
    let covered = triangles_area(ring, indices);
    assert!(
        (covered - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "triangles cover {covered}, polygon area is {expected}"
    );
}
