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

use crate::geometry::Point2;
use crate::kernel::Kernel2;
use crate::mesh::flags::SweepAxis;
use crate::mesh::node::VertexId;
use crate::mesh::ring::Ring;
use crate::operations::triangulation::boundary::{BoundaryEdgeNode, classify_and_order_boundary};

#[inline]
fn signum(o: Ordering) -> f64 {
    match o {
        Ordering::Less => -1.0,
        Ordering::Equal => 0.0,
        Ordering::Greater => 1.0,
    }
}

#[inline]
fn real_position<'r>(ring: &'r Ring, v: &BoundaryEdgeNode) -> &'r Point2 {
    &ring.node(v.node).position
}

#[inline]
fn emit(out: &mut Vec<VertexId>, first: VertexId, previous: VertexId, current: VertexId, ccw: bool) {
    if ccw {
        out.extend([first, previous, current]);
    } else {
        out.extend([first, current, previous]);
    }
    trace!("emitted triangle {:?}", &out[out.len() - 3..]);
}

/// Stack sweep over a monotone ring.
///
/// Nodes are visited in sweep order. Popped stack entries are plain copies,
/// so `previous`/`first`/`last` never alias the stack.
pub(crate) fn triangulate_monotone<K: Kernel2>(
    ring: &Ring,
    axis: SweepAxis,
    out: &mut Vec<VertexId>,
) {
    let det_sign = axis.det_sign();
    let sorted = classify_and_order_boundary(ring, axis.major_index());
    if sorted.len() < 3 {
        return;
    }

    let id = |v: &BoundaryEdgeNode| ring.node(v.node).id;

    let mut stack: Vec<BoundaryEdgeNode> = Vec::with_capacity(sorted.len());
    stack.push(sorted[0]);
    stack.push(sorted[1]);

    for &current in &sorted[2..] {
        let Some(top) = stack.pop() else {
            break;
        };

        if top.is_on_max_side == current.is_on_max_side {
            let side = if current.is_on_max_side { -1.0 } else { 1.0 };
            let det_mod = side * det_sign;

            let mut previous = top;
            while let Some(&first) = stack.last() {
                let det = K::orientation(
                    real_position(ring, &first),
                    real_position(ring, &previous),
                    real_position(ring, &current),
                );
                // reflex or collinear: not an ear yet
                if signum(det) * det_mod >= 0.0 {
                    break;
                }
                stack.pop();
                emit(
                    out,
                    id(&first),
                    id(&previous),
                    id(&current),
                    det == Ordering::Greater,
                );
                previous = first;
            }
            stack.push(previous);
            stack.push(current);
        } else {
            let last = top;
            let mut previous = last;

            // every diagonal starts at `current`, so one winding serves the whole fan
            let ccw = stack.last().is_some_and(|first| {
                K::orientation(
                    real_position(ring, first),
                    real_position(ring, &previous),
                    real_position(ring, &current),
                ) == Ordering::Greater
            });
            while let Some(first) = stack.pop() {
                emit(out, id(&first), id(&previous), id(&current), ccw);
                previous = first;
            }
            stack.push(last);
            stack.push(current);
        }
    }
}
