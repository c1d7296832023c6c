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

mod common;

use ringtri::classify_and_order_boundary;
use ringtri::operations::triangulation::BoundaryEdgeNode;

use common::ring;

fn ids(r: &ringtri::Ring, order: &[BoundaryEdgeNode]) -> Vec<usize> {
    order.iter().map(|b| r.node(b.node).id).collect()
}

#[test]
fn test_square_along_y() {
    let r = ring(&[(0, 0.0, 0.0), (1, 1.0, 0.0), (2, 1.0, 1.0), (3, 0.0, 1.0)]);
    let order = classify_and_order_boundary(&r, 1);

    // level nodes on different chains fall back to x
    assert_eq!(ids(&r, &order), vec![0, 1, 3, 2]);
    let sides: Vec<bool> = order.iter().map(|b| b.is_on_max_side).collect();
    assert_eq!(sides, vec![true, true, false, true]);
    let sequences: Vec<usize> = order.iter().map(|b| b.sequence).collect();
    assert_eq!(sequences, vec![0, 1, 2, 2]);
    assert!(order.iter().all(|b| b.major_index == 1));
}

#[test]
fn test_square_along_x_flips_sides() {
    let r = ring(&[(0, 0.0, 0.0), (1, 1.0, 0.0), (2, 1.0, 1.0), (3, 0.0, 1.0)]);
    let order = classify_and_order_boundary(&r, 0);

    assert_eq!(ids(&r, &order), vec![0, 3, 1, 2]);
    let sides: Vec<bool> = order.iter().map(|b| b.is_on_max_side).collect();
    assert_eq!(sides, vec![false, true, false, false]);
}

#[test]
fn test_second_chain_counts_down() {
    // top edge runs right to left through an intermediate node
    let r = ring(&[
        (0, 0.0, 0.0),
        (1, 2.0, 0.0),
        (2, 2.0, 2.0),
        (3, 1.0, 2.0),
        (4, 0.0, 2.0),
    ]);
    let order = classify_and_order_boundary(&r, 1);

    assert_eq!(ids(&r, &order), vec![0, 1, 4, 3, 2]);
    let by_id = |id: usize| order.iter().find(|b| r.node(b.node).id == id).unwrap();
    // first chain 0 -> 1 -> 2, second chain 3 -> 4 counting down from 5 + 1 - 3
    assert_eq!(by_id(2).sequence, 2);
    assert_eq!(by_id(3).sequence, 3);
    assert_eq!(by_id(4).sequence, 2);
    assert!(!by_id(3).is_on_max_side && !by_id(4).is_on_max_side);
}

#[test]
fn test_hexagon_sweep_order() {
    let r = ring(&[
        (0, 1.0, 0.0),
        (1, 3.0, 1.0),
        (2, 2.0, 2.0),
        (3, 3.0, 3.0),
        (4, 1.0, 4.0),
        (5, 0.0, 2.0),
    ]);
    let order = classify_and_order_boundary(&r, 1);

    assert_eq!(ids(&r, &order), vec![0, 1, 5, 2, 3, 4]);
    assert!(order.windows(2).all(|w| w[0].grid[1] <= w[1].grid[1]));
}

#[test]
fn test_extremum_ties_use_minor_axis() {
    // both the lowest and the highest x are shared by two nodes
    let r = ring(&[
        (0, 0.0, 1.0),
        (1, 0.0, 0.0),
        (2, 3.0, 0.0),
        (3, 3.0, 1.0),
    ]);
    let order = classify_and_order_boundary(&r, 0);

    // min is (0, 0) (smaller y), max is (3, 1) (larger y)
    let first = order.first().unwrap();
    let last = order.last().unwrap();
    assert_eq!(r.node(first.node).id, 1);
    assert_eq!(r.node(last.node).id, 3);
    assert_eq!(first.sequence, 0);
    assert_eq!(ids(&r, &order), vec![1, 0, 2, 3]);
}
