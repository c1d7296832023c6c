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

//! Flag classification of a ring from its grid positions.
//!
//! All predicates assume the ring has already been oriented with its face on
//! the left (positive signed area). Grid coordinates may span the whole `i64`
//! range, so differences are taken in `i128` and products that do not fit
//! fall back to `rug::Integer`.

use std::cmp::Ordering;

use rug::Integer;

use crate::mesh::flags::RingFlags;

/// Sign of `lhs_a * lhs_b - rhs_a * rhs_b`, exact for any `i128` inputs.
fn cmp_products(lhs_a: i128, lhs_b: i128, rhs_a: i128, rhs_b: i128) -> Ordering {
    match (lhs_a.checked_mul(lhs_b), rhs_a.checked_mul(rhs_b)) {
        (Some(l), Some(r)) => l.cmp(&r),
        _ => (Integer::from(lhs_a) * Integer::from(lhs_b))
            .cmp(&(Integer::from(rhs_a) * Integer::from(rhs_b))),
    }
}

/// Turn direction at `a` when walking `o -> a -> b`: `Greater` for a left turn.
fn turn(o: &[i64; 2], a: &[i64; 2], b: &[i64; 2]) -> Ordering {
    let d = |p: &[i64; 2], i: usize| p[i] as i128 - o[i] as i128;
    cmp_products(d(a, 0), d(b, 1), d(a, 1), d(b, 0))
}

/// Sign of the polygon's signed area, `Greater` when counter-clockwise.
pub fn area_orientation(grid: &[[i64; 2]]) -> Ordering {
    let n = grid.len();
    let edge = |i: usize| (&grid[i], &grid[(i + 1) % n]);

    // i64 * i64 always fits an i128; only the sums can overflow
    let fast = (0..n).try_fold(0i128, |acc, i| {
        let (p, q) = edge(i);
        let term = (p[0] as i128 * q[1] as i128).checked_sub(q[0] as i128 * p[1] as i128)?;
        acc.checked_add(term)
    });
    if let Some(twice_area) = fast {
        return twice_area.cmp(&0);
    }

    let mut twice_area = Integer::new();
    for i in 0..n {
        let (p, q) = edge(i);
        twice_area += Integer::from(p[0]) * q[1];
        twice_area -= Integer::from(q[0]) * p[1];
    }
    twice_area.cmp0()
}

/// Position of `p` in sweep order along `axis`: level nodes are ordered by the
/// other coordinate.
#[inline]
fn sweep_key(p: &[i64; 2], axis: usize) -> (i64, i64) {
    (p[axis], p[1 - axis])
}

/// True when walking the ring, the sweep key along `axis` changes direction
/// at most twice (once at the minimum, once at the maximum). Steps
/// perpendicular to the axis count by their direction along the other axis;
/// only repeated points are ignored.
pub fn is_axis_monotone(grid: &[[i64; 2]], axis: usize) -> bool {
    let n = grid.len();
    let steps: Vec<Ordering> = (0..n)
        .map(|i| sweep_key(&grid[(i + 1) % n], axis).cmp(&sweep_key(&grid[i], axis)))
        .filter(|&s| s != Ordering::Equal)
        .collect();
    if steps.is_empty() {
        return false;
    }

    let turns = (0..steps.len())
        .filter(|&i| steps[i] != steps[(i + 1) % steps.len()])
        .count();
    turns <= 2
}

/// No right turns, at least one left turn, and a single winding.
pub fn is_convex(grid: &[[i64; 2]]) -> bool {
    let n = grid.len();
    let mut any_left = false;
    for i in 0..n {
        match turn(&grid[(i + n - 1) % n], &grid[i], &grid[(i + 1) % n]) {
            Ordering::Less => return false,
            Ordering::Greater => any_left = true,
            Ordering::Equal => {}
        }
    }
    any_left && is_axis_monotone(grid, 0)
}

/// Some node sits in the middle of a run that is constant along `axis`
/// (axis 1: horizontal run, axis 0: vertical run).
pub fn has_intermediate_nodes(grid: &[[i64; 2]], axis: usize) -> bool {
    let n = grid.len();
    (0..n).any(|i| {
        let v = grid[i][axis];
        grid[(i + n - 1) % n][axis] == v && grid[(i + 1) % n][axis] == v
    })
}

/// Computes the ring flags and whether the ring is X-monotone.
pub fn classify(grid: &[[i64; 2]]) -> (RingFlags, bool) {
    let x_monotone = is_axis_monotone(grid, 0);
    let y_monotone = is_axis_monotone(grid, 1);

    let mut flags = RingFlags::empty();
    flags.set(RingFlags::IS_CONVEX, is_convex(grid));
    flags.set(RingFlags::IS_MONOTONE, x_monotone || y_monotone);
    flags.set(
        RingFlags::HAS_INTERMEDIATE_HORZ,
        has_intermediate_nodes(grid, 1),
    );
    flags.set(
        RingFlags::HAS_INTERMEDIATE_VERT,
        has_intermediate_nodes(grid, 0),
    );
    (flags, x_monotone)
}
