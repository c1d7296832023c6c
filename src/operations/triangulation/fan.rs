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

use std::cmp::Ordering;

use log::trace;

use crate::kernel::Kernel2;
use crate::mesh::node::VertexId;
use crate::mesh::ring::Ring;

/// Fans a convex ring around the start of its first edge.
///
/// Collinear candidates have no area and are skipped.
pub(crate) fn triangulate_convex<K: Kernel2>(ring: &Ring, out: &mut Vec<VertexId>) {
    let first = ring.first_edge();
    let root = ring.start_node(first);
    let last = ring.half_edge(first).prev;

    let mut he = ring.half_edge(first).next;
    while he != last {
        let (start, end) = (ring.start_node(he), ring.end_node(he));
        match K::orientation(&root.position, &start.position, &end.position) {
            Ordering::Greater => out.extend([root.id, start.id, end.id]),
            Ordering::Less => out.extend([root.id, end.id, start.id]),
            Ordering::Equal => trace!(
                "skipping collinear fan triangle ({}, {}, {})",
                root.id, start.id, end.id
            ),
        }
        he = ring.half_edge(he).next;
    }
}
