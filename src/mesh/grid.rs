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

use num_traits::ToPrimitive;

use crate::geometry::Point2;
use crate::mesh::ring::RingError;

/// Snapping grid used to derive the integer positions rings are classified on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub cell_size: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cell_size: 1e-6 }
    }
}

impl GridConfig {
    pub fn new(cell_size: f64) -> Result<Self, RingError> {
        let grid = Self { cell_size };
        grid.validate()?;
        Ok(grid)
    }

    pub fn validate(&self) -> Result<(), RingError> {
        if self.cell_size.is_finite() && self.cell_size > 0.0 {
            Ok(())
        } else {
            Err(RingError::InvalidCellSize(self.cell_size))
        }
    }

    /// Rounds `pos` to the nearest grid cell. `None` when the cell index does
    /// not fit an `i64` (or the coordinate is not finite).
    pub fn snap(&self, pos: &Point2) -> Option<[i64; 2]> {
        let inv = 1.0 / self.cell_size;
        let x = (pos.x * inv).round().to_i64()?;
        let y = (pos.y * inv).round().to_i64()?;
        Some([x, y])
    }
}
