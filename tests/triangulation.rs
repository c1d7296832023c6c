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

use ringtri::kernel::RationalKernel;
use ringtri::{Ring, RingFlags, RingShape, TriangulationError, triangulate_ring, triangulate_ring_with};

use common::{assert_valid_triangulation, init_logging, ring, triangles_area};

#[test]
fn test_unit_square_fan() {
    init_logging();
    let r = ring(&[(0, 0.0, 0.0), (1, 1.0, 0.0), (2, 1.0, 1.0), (3, 0.0, 1.0)]);
    let tris = triangulate_ring(&r).unwrap();

    assert_eq!(tris, vec![0, 1, 2, 0, 2, 3]);
    assert_eq!(triangles_area(&r, &tris), 1.0);
}

#[test]
fn test_clockwise_square_fan() {
    let r = ring(&[(0, 0.0, 0.0), (3, 0.0, 1.0), (2, 1.0, 1.0), (1, 1.0, 0.0)]);
    let tris = triangulate_ring(&r).unwrap();

    assert_eq!(tris, vec![0, 1, 2, 0, 2, 3]);
}

#[test]
fn test_triangle() {
    let r = ring(&[(10, 0.0, 0.0), (11, 4.0, 0.0), (12, 0.0, 3.0)]);
    let tris = triangulate_ring(&r).unwrap();

    assert_eq!(tris, vec![10, 11, 12]);
    assert_valid_triangulation(&r, &tris);
}

#[test]
fn test_fan_skips_collinear_triple() {
    init_logging();
    // flagged convex by the caller even though (0, 1, 2) lie on one line
    let r = Ring::builder()
        .nodes([(0, 0.0, 0.0), (1, 1.0, 0.0), (2, 2.0, 0.0), (3, 1.0, 1.0)])
        .flags(RingFlags::IS_CONVEX)
        .build()
        .unwrap();
    assert_eq!(r.shape(), RingShape::ConvexSimple);

    let tris = triangulate_ring(&r).unwrap();
    assert_eq!(tris, vec![0, 2, 3]);
    assert_valid_triangulation(&r, &tris);
}

#[test]
fn test_axis_nodes_take_the_sweep() {
    let r = ring(&[(0, 0.0, 0.0), (1, 1.0, 0.0), (2, 2.0, 0.0), (3, 1.0, 1.0)]);
    let tris = triangulate_ring(&r).unwrap();

    assert_eq!(tris, vec![0, 1, 3, 1, 2, 3]);
    assert_valid_triangulation(&r, &tris);
}

#[test]
fn test_convex_fan_counts() {
    // regular octagon
    let nodes: Vec<(usize, f64, f64)> = (0..8)
        .map(|i| {
            let a = i as f64 * std::f64::consts::FRAC_PI_4;
            (i, 3.0 * a.cos(), 3.0 * a.sin())
        })
        .collect();
    let r = ring(&nodes);
    assert_eq!(r.shape(), RingShape::ConvexSimple);

    let tris = triangulate_ring(&r).unwrap();
    assert_eq!(tris.len(), 3 * 6);
    assert!(tris.chunks(3).all(|t| t[0] == 0));
    assert_valid_triangulation(&r, &tris);
}

#[test]
fn test_y_monotone_hexagon() {
    init_logging();
    let r = ring(&[
        (0, 1.0, 0.0),
        (1, 3.0, 1.0),
        (2, 2.0, 2.0),
        (3, 3.0, 3.0),
        (4, 1.0, 4.0),
        (5, 0.0, 2.0),
    ]);
    assert_eq!(r.shape(), RingShape::MonotoneY);

    let tris = triangulate_ring(&r).unwrap();
    assert_eq!(tris, vec![0, 1, 5, 1, 2, 5, 5, 2, 3, 5, 3, 4]);
    assert_valid_triangulation(&r, &tris);
    assert_eq!(triangles_area(&r, &tris), 7.0);
}

#[test]
fn test_x_monotone_with_reflex_chain() {
    init_logging();
    // node 1 is reflex, so node 2 cannot clip it and both stay stacked
    let r = ring(&[
        (0, 0.0, 3.0),
        (1, 2.0, 2.0),
        (2, 3.0, 0.0),
        (3, 5.0, 1.0),
        (4, 6.0, 4.0),
        (5, 4.0, 5.0),
    ]);
    assert_eq!(r.shape(), RingShape::MonotoneX);

    let tris = triangulate_ring(&r).unwrap();
    assert_eq!(tris, vec![1, 2, 5, 0, 1, 5, 2, 3, 5, 5, 3, 4]);
    assert_valid_triangulation(&r, &tris);
    assert_eq!(triangles_area(&r, &tris), 15.5);
}

#[test]
fn test_x_monotone_with_bump() {
    let r = ring(&[
        (0, 0.0, 2.0),
        (1, 2.0, 0.0),
        (2, 3.0, 1.0),
        (3, 4.0, 0.0),
        (4, 6.0, 2.0),
        (5, 3.0, 4.0),
    ]);
    assert_eq!(r.shape(), RingShape::MonotoneX);

    let tris = triangulate_ring(&r).unwrap();
    assert_eq!(tris.len(), 3 * 4);
    assert_valid_triangulation(&r, &tris);
    assert_eq!(triangles_area(&r, &tris), 13.0);
}

#[test]
fn test_collinear_chain_defers_to_the_other_side() {
    // nodes 1..3 lie on the bottom edge; the ear loop stops on them and the
    // apex later fans them off without zero-area triangles
    let r = ring(&[
        (0, 0.0, 0.0),
        (1, 1.0, 0.0),
        (2, 2.0, 0.0),
        (3, 3.0, 0.0),
        (4, 4.0, 0.0),
        (5, 2.0, 3.0),
    ]);
    assert_eq!(
        r.shape(),
        RingShape::ConvexWithAxisNodes {
            axis: ringtri::mesh::SweepAxis::X
        }
    );

    let tris = triangulate_ring(&r).unwrap();
    assert_eq!(tris.len(), 3 * 4);
    assert_valid_triangulation(&r, &tris);
    assert_eq!(triangles_area(&r, &tris), 6.0);
}

#[test]
fn test_rectangle_with_bottom_axis_nodes() {
    let r = ring(&[
        (0, 0.0, 0.0),
        (1, 1.0, 0.0),
        (2, 2.0, 0.0),
        (3, 3.0, 0.0),
        (4, 3.0, 1.0),
        (5, 0.0, 1.0),
    ]);
    let tris = triangulate_ring(&r).unwrap();

    assert_eq!(tris, vec![0, 1, 5, 5, 1, 2, 5, 2, 3, 5, 3, 4]);
    assert_valid_triangulation(&r, &tris);
}

#[test]
fn test_vertical_edge_behind_sweep_order_uses_the_y_sweep() {
    init_logging();
    // x steps back from 2 to 1 and then climbs the vertical edge 3 -> 4,
    // so the ring is only monotone along y
    let r = ring(&[
        (0, 0.0, -1.0),
        (1, 1.0, 1.0),
        (2, 2.0, 1.0),
        (3, 1.0, 2.0),
        (4, 1.0, 3.0),
        (5, 0.0, 4.0),
        (6, -1.0, 1.0),
    ]);
    assert!(!r.is_x_monotone());
    assert_eq!(r.shape(), RingShape::MonotoneY);

    let tris = triangulate_ring(&r).unwrap();
    assert_eq!(tris, vec![0, 1, 6, 1, 2, 3, 6, 1, 3, 6, 3, 4, 6, 4, 5]);
    assert_valid_triangulation(&r, &tris);
    assert_eq!(triangles_area(&r, &tris), 6.5);
}

#[test]
fn test_level_run_against_sweep_order_is_rejected() {
    // the left chain walks y = 2 from x = -3 to x = -1 on its way down
    let r = ring(&[
        (0, 0.0, -1.0),
        (1, 3.0, 1.0),
        (2, 3.0, 2.0),
        (3, 4.0, 2.0),
        (4, 0.0, 3.0),
        (5, -3.0, 2.0),
        (6, -2.0, 2.0),
        (7, -1.0, 2.0),
        (8, -3.0, 1.0),
    ]);
    assert!(!r.flags().contains(RingFlags::IS_MONOTONE));
    assert_eq!(r.shape(), RingShape::Irregular);
    assert_eq!(
        triangulate_ring(&r),
        Err(TriangulationError::NotTriangulable)
    );
}

#[test]
fn test_far_coordinates_on_default_grid() {
    // grid cells around 5e18, where differences no longer fit an i64
    let r = ring(&[(0, -5e12, 0.0), (2, 0.0, 5e12), (1, 5e12, 0.0)]);
    assert_eq!(r.shape(), RingShape::ConvexSimple);

    let tris = triangulate_ring(&r).unwrap();
    assert_eq!(tris, vec![0, 1, 2]);
    assert_valid_triangulation(&r, &tris);
}

#[test]
fn test_irregular_ring_is_rejected() {
    init_logging();
    let r = ring(&[
        (0, 0.0, 0.0),
        (1, 6.0, 0.0),
        (2, 6.0, 2.0),
        (3, 2.0, 2.0),
        (4, 2.0, 4.0),
        (5, 6.0, 4.0),
        (6, 6.0, 6.0),
        (7, 4.0, 6.0),
        (8, 4.0, 5.0),
        (9, 3.0, 5.0),
        (10, 3.0, 6.0),
        (11, 0.0, 6.0),
    ]);
    assert_eq!(
        triangulate_ring(&r),
        Err(TriangulationError::NotTriangulable)
    );
}

#[test]
fn test_unflagged_ring_is_rejected() {
    let r = Ring::builder()
        .nodes([(0, 0.0, 0.0), (1, 1.0, 0.0), (2, 1.0, 1.0), (3, 0.0, 1.0)])
        .flags(RingFlags::HAS_INTERMEDIATE_HORZ)
        .build()
        .unwrap();
    let err = triangulate_ring(&r).unwrap_err();

    assert_eq!(err, TriangulationError::NotTriangulable);
    assert_eq!(err.to_string(), "ring is neither convex nor monotone");
}

#[test]
fn test_exact_kernel_matches_on_fixtures() {
    let fixtures = [
        ring(&[(0, 0.0, 0.0), (1, 1.0, 0.0), (2, 1.0, 1.0), (3, 0.0, 1.0)]),
        ring(&[
            (0, 1.0, 0.0),
            (1, 3.0, 1.0),
            (2, 2.0, 2.0),
            (3, 3.0, 3.0),
            (4, 1.0, 4.0),
            (5, 0.0, 2.0),
        ]),
        ring(&[
            (0, 0.0, 3.0),
            (1, 2.0, 2.0),
            (2, 3.0, 0.0),
            (3, 5.0, 1.0),
            (4, 6.0, 4.0),
            (5, 4.0, 5.0),
        ]),
    ];
    for r in &fixtures {
        assert_eq!(
            triangulate_ring_with::<RationalKernel>(r).unwrap(),
            triangulate_ring(r).unwrap()
        );
    }
}
