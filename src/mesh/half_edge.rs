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

/// Directed boundary edge of a ring. All references are indices into the
/// owning [`Ring`](crate::mesh::ring::Ring)'s arenas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HalfEdge {
    pub start: usize, // node the edge leaves
    pub end: usize,   // node the edge arrives at
    pub next: usize,
    pub prev: usize,
}

impl HalfEdge {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            next: usize::MAX,
            prev: usize::MAX,
        }
    }

    pub fn start_node(&self) -> usize {
        self.start
    }

    pub fn end_node(&self) -> usize {
        self.end
    }

    pub fn next(&self) -> usize {
        self.next
    }

    pub fn previous(&self) -> usize {
        self.prev
    }
}
