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

use crate::geometry::Point2;

/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
///
/// The magnitude is twice the area of the triangle. No tolerance is applied.
pub fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b - a).cross(&(c - a))
}

/// Shoelace area of a closed polygon, positive when the vertices run counter-clockwise.
pub fn signed_area<'a, I>(points: I) -> f64
where
    I: IntoIterator<Item = &'a Point2>,
    I::IntoIter: Clone,
{
    let iter = points.into_iter();
    let Some(first) = iter.clone().next() else {
        return 0.0;
    };

    let mut twice_area = 0.0;
    let mut prev = first;
    for p in iter.skip(1) {
        twice_area += prev.as_vector().cross(&p.as_vector());
        prev = p;
    }
    twice_area += prev.as_vector().cross(&first.as_vector());
    0.5 * twice_area
}
