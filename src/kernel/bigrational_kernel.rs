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

use rug::Rational;

use crate::geometry::Point2;
use crate::kernel::kernel::Kernel2;

/// Kernel using rug::Rational (arbitrary-precision rationals backed by GMP)
///
/// Every finite `f64` is a dyadic rational, so the determinant is evaluated
/// without rounding and its sign is always the true one.
pub struct RationalKernel;

fn exact(v: f64) -> Rational {
    // non-finite coordinates collapse to zero
    Rational::from_f64(v).unwrap_or_default()
}

impl Kernel2 for RationalKernel {
    type FT = Rational;

    fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> Rational {
        let (ax, ay) = (exact(a.x), exact(a.y));
        let dx1 = Rational::from(&exact(b.x) - &ax);
        let dy1 = Rational::from(&exact(b.y) - &ay);
        let dx2 = Rational::from(&exact(c.x) - &ax);
        let dy2 = Rational::from(&exact(c.y) - &ay);
        Rational::from(&dx1 * &dy2) - Rational::from(&dy1 * &dx2)
    }

    fn zero() -> Rational {
        Rational::new()
    }
}
