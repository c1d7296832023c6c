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
use std::fmt::Debug;

use crate::geometry::Point2;

/// Orientation primitive used by the triangulators.
///
/// Implementations only differ in the number type the determinant is
/// evaluated in; the inputs are always the real `f64` positions of the ring.
pub trait Kernel2 {
    type FT: PartialOrd + Debug;

    // Signed doubled area of (a, b, c): CCW>0, CW<0, 0 if collinear
    fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> Self::FT;

    fn zero() -> Self::FT;

    /// Sign of [`Kernel2::orient2d`]. An unordered value (NaN) counts as collinear.
    fn orientation(a: &Point2, b: &Point2, c: &Point2) -> Ordering {
        Self::orient2d(a, b, c)
            .partial_cmp(&Self::zero())
            .unwrap_or(Ordering::Equal)
    }
}
