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
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::debug;
use thiserror::Error;

use crate::geometry::Point2;
use crate::kernel::orientation::signed_area;
use crate::mesh::classify::{area_orientation, classify, is_axis_monotone};
use crate::mesh::flags::{RingFlags, RingShape};
use crate::mesh::grid::GridConfig;
use crate::mesh::half_edge::HalfEdge;
use crate::mesh::node::{Node, VertexId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RingError {
    #[error("a ring needs at least 3 nodes, got {0}")]
    TooFewNodes(usize),
    #[error("vertex id {0} appears more than once in the ring")]
    DuplicateId(VertexId),
    #[error("vertex {id} does not fit on the snapping grid")]
    GridOverflow { id: VertexId },
    #[error("grid cell size must be finite and positive, got {0}")]
    InvalidCellSize(f64),
}

/// One closed boundary loop: an arena of nodes and the half-edges linking them.
///
/// Node `i` is the start of half-edge `i`, and the boundary always runs with
/// the face on its left (non-negative signed area on the grid).
#[derive(Debug, Clone)]
pub struct Ring {
    nodes: Vec<Node>,
    half_edges: Vec<HalfEdge>,
    first_edge: usize,
    flags: RingFlags,
    x_monotone: bool,
    y_monotone: bool,
    id_to_node: HashMap<VertexId, usize>,
}

impl Ring {
    pub fn builder() -> RingBuilder {
        RingBuilder::new()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn flags(&self) -> RingFlags {
        self.flags
    }

    pub fn shape(&self) -> RingShape {
        RingShape::from_flags(self.flags, self.x_monotone)
    }

    pub fn first_edge(&self) -> usize {
        self.first_edge
    }

    pub fn half_edge(&self, he: usize) -> &HalfEdge {
        &self.half_edges[he]
    }

    pub fn node(&self, n: usize) -> &Node {
        &self.nodes[n]
    }

    /// Nodes in boundary order, starting at the first edge's start node.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn start_node(&self, he: usize) -> &Node {
        &self.nodes[self.half_edges[he].start]
    }

    pub fn end_node(&self, he: usize) -> &Node {
        &self.nodes[self.half_edges[he].end]
    }

    pub fn start_id(&self, he: usize) -> VertexId {
        self.start_node(he).id
    }

    pub fn end_id(&self, he: usize) -> VertexId {
        self.end_node(he).id
    }

    pub fn is_x_monotone(&self) -> bool {
        self.x_monotone
    }

    pub fn is_y_monotone(&self) -> bool {
        self.y_monotone
    }

    /// Index of the node carrying `id`.
    pub fn node_index(&self, id: VertexId) -> Option<usize> {
        self.id_to_node.get(&id).copied()
    }

    pub fn position_of(&self, id: VertexId) -> Option<&Point2> {
        self.node_index(id).map(|n| &self.nodes[n].position)
    }

    /// Half-edges from the first edge around until the walk returns to it.
    pub fn edges(&self) -> RingEdges<'_> {
        RingEdges {
            ring: self,
            current: Some(self.first_edge),
        }
    }

    /// Shoelace area over the real positions.
    pub fn signed_area(&self) -> f64 {
        signed_area(self.nodes.iter().map(|n| &n.position))
    }
}

pub struct RingEdges<'a> {
    ring: &'a Ring,
    current: Option<usize>,
}

impl<'a> Iterator for RingEdges<'a> {
    type Item = &'a HalfEdge;

    fn next(&mut self) -> Option<&'a HalfEdge> {
        let he = self.current?;
        let edge = &self.ring.half_edges[he];
        self.current = (edge.next != self.ring.first_edge).then_some(edge.next);
        Some(edge)
    }
}

/// Collects boundary vertices and produces a linked, classified [`Ring`].
#[derive(Debug, Clone, Default)]
pub struct RingBuilder {
    grid: GridConfig,
    nodes: Vec<(VertexId, Point2)>,
    flags: Option<RingFlags>,
}

impl RingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    pub fn node(mut self, id: VertexId, x: f64, y: f64) -> Self {
        self.nodes.push((id, Point2::new(x, y)));
        self
    }

    pub fn nodes<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, f64, f64)>,
    {
        self.nodes
            .extend(nodes.into_iter().map(|(id, x, y)| (id, Point2::new(x, y))));
        self
    }

    /// Uses `flags` instead of classifying the ring. The X/Y monotone
    /// predicate is still derived from the geometry.
    pub fn flags(mut self, flags: RingFlags) -> Self {
        self.flags = Some(flags);
        self
    }

    pub fn build(self) -> Result<Ring, RingError> {
        self.grid.validate()?;
        let count = self.nodes.len();
        if count < 3 {
            return Err(RingError::TooFewNodes(count));
        }

        let mut nodes = Vec::with_capacity(count);
        for (id, position) in self.nodes {
            let grid = self
                .grid
                .snap(&position)
                .ok_or(RingError::GridOverflow { id })?;
            nodes.push(Node { id, grid, position });
        }

        let mut grid: Vec<[i64; 2]> = nodes.iter().map(|n| n.grid).collect();
        if area_orientation(&grid) == Ordering::Less {
            // keep the first node first, walk the rest the other way round
            nodes[1..].reverse();
            grid[1..].reverse();
        }

        let mut id_to_node = HashMap::with_capacity(count);
        for (i, node) in nodes.iter().enumerate() {
            match id_to_node.entry(node.id) {
                Entry::Occupied(_) => return Err(RingError::DuplicateId(node.id)),
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
            }
        }

        let half_edges = (0..count)
            .map(|i| {
                let mut he = HalfEdge::new(i, (i + 1) % count);
                he.next = (i + 1) % count;
                he.prev = (i + count - 1) % count;
                he
            })
            .collect();

        let (classified, x_monotone) = classify(&grid);
        let y_monotone = is_axis_monotone(&grid, 1);
        let flags = self.flags.unwrap_or(classified);
        debug!("built ring of {count} nodes, flags {flags:?}, x-monotone {x_monotone}");

        Ok(Ring {
            nodes,
            half_edges,
            first_edge: 0,
            flags,
            x_monotone,
            y_monotone,
            id_to_node,
        })
    }
}
