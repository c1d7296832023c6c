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

use std::io::{self, Write};

use crate::mesh::node::VertexId;
use crate::mesh::ring::Ring;

/// Writes the ring's nodes (z = 0) and the triangles in `indices` as
/// Wavefront OBJ. Faces refer to nodes in boundary order.
pub fn write_obj<W: Write>(ring: &Ring, indices: &[VertexId], out: W) -> io::Result<()> {
    let mut out = io::BufWriter::new(out);

    // 1) write vertices
    for node in ring.nodes() {
        writeln!(out, "v {:?} {:?} 0.0", node.position.x, node.position.y)?;
    }

    // 2) write faces (1-based indices)
    for tri in indices.chunks(3) {
        let [a, b, c] = tri else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "index list length is not a multiple of 3",
            ));
        };
        let mut face = [0usize; 3];
        for (slot, &id) in face.iter_mut().zip([a, b, c]) {
            *slot = ring.node_index(id).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("vertex id {id} is not part of the ring"),
                )
            })? + 1;
        }
        writeln!(out, "f {} {} {}", face[0], face[1], face[2])?;
    }

    out.flush()
}
