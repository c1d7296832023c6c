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

use crate::mesh::ring::Ring;

/// A ring node annotated with its place in the monotone sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryEdgeNode {
    pub node: usize,        // index into the ring's nodes
    pub grid: [i64; 2],     // copy of the node's grid position
    pub major_index: usize, // 0: sweep along X, 1: sweep along Y
    pub is_on_max_side: bool,
    pub sequence: usize, // orders level nodes on the same chain
}

impl BoundaryEdgeNode {
    fn new(node: usize, grid: [i64; 2], major_index: usize) -> Self {
        Self {
            node,
            grid,
            major_index,
            is_on_max_side: false,
            sequence: 0,
        }
    }

    /// Sweep order: major coordinate first; level nodes compare by the minor
    /// coordinate across chains and by sequence within a chain.
    pub fn sweep_cmp(&self, other: &Self) -> Ordering {
        let major = self.major_index;
        let minor = 1 - major;
        self.grid[major].cmp(&other.grid[major]).then_with(|| {
            if self.is_on_max_side != other.is_on_max_side {
                self.grid[minor].cmp(&other.grid[minor])
            } else {
                self.sequence.cmp(&other.sequence)
            }
        })
    }
}

/// Splits a monotone ring into its two chains and returns every node in
/// ascending sweep order along `major_index`.
///
/// The ring must be monotone along that axis; this is not checked.
pub fn classify_and_order_boundary(ring: &Ring, major_index: usize) -> Vec<BoundaryEdgeNode> {
    let minor_index = 1 - major_index;
    let mut nodes: Vec<BoundaryEdgeNode> = Vec::with_capacity(ring.node_count());
    let (mut min_index, mut max_index) = (0, 0);

    let first = ring.first_edge();
    let mut he = first;
    loop {
        let edge = ring.half_edge(he);
        let grid = ring.node(edge.start).grid;

        if let (Some(lo), Some(hi)) = (nodes.get(min_index), nodes.get(max_index)) {
            let (lo, hi) = (lo.grid, hi.grid);
            if grid[major_index] < lo[major_index]
                || (grid[major_index] == lo[major_index] && grid[minor_index] < lo[minor_index])
            {
                min_index = nodes.len();
            }
            if grid[major_index] > hi[major_index]
                || (grid[major_index] == hi[major_index] && grid[minor_index] > hi[minor_index])
            {
                max_index = nodes.len();
            }
        }
        nodes.push(BoundaryEdgeNode::new(edge.start, grid, major_index));

        he = edge.next;
        if he == first {
            break;
        }
    }

    let count = nodes.len();
    // which chain counts as the max side flips with the sweep axis
    let first_side = major_index != 0;

    let mut sequence = 0;
    let mut i = min_index;
    loop {
        nodes[i].sequence = sequence;
        nodes[i].is_on_max_side = first_side;
        sequence += 1;
        if i == max_index {
            break;
        }
        i = (i + 1) % count;
    }

    // the second chain is walked from max back to min, so count down
    let mut sequence = count + 1 - sequence;
    let mut i = (max_index + 1) % count;
    while i != min_index {
        nodes[i].sequence = sequence;
        nodes[i].is_on_max_side = !first_side;
        sequence -= 1;
        i = (i + 1) % count;
    }

    nodes.sort_by(BoundaryEdgeNode::sweep_cmp);
    nodes
}
