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

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Classification bits attached to a ring.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RingFlags(u8);

impl RingFlags {
    pub const IS_CONVEX: RingFlags = RingFlags(1 << 0);
    pub const IS_MONOTONE: RingFlags = RingFlags(1 << 1);
    pub const HAS_INTERMEDIATE_HORZ: RingFlags = RingFlags(1 << 2);
    pub const HAS_INTERMEDIATE_VERT: RingFlags = RingFlags(1 << 3);

    pub const fn empty() -> Self {
        RingFlags(0)
    }

    pub const fn contains(&self, other: RingFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(&self, other: RingFlags) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: RingFlags) {
        self.0 |= other.0;
    }

    pub fn set(&mut self, other: RingFlags, value: bool) {
        if value {
            self.0 |= other.0;
        } else {
            self.0 &= !other.0;
        }
    }
}

impl BitOr for RingFlags {
    type Output = RingFlags;
    fn bitor(self, rhs: RingFlags) -> RingFlags {
        RingFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for RingFlags {
    fn bitor_assign(&mut self, rhs: RingFlags) {
        self.insert(rhs);
    }
}

impl fmt::Debug for RingFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(RingFlags, &str); 4] = [
            (RingFlags::IS_CONVEX, "IS_CONVEX"),
            (RingFlags::IS_MONOTONE, "IS_MONOTONE"),
            (RingFlags::HAS_INTERMEDIATE_HORZ, "HAS_INTERMEDIATE_HORZ"),
            (RingFlags::HAS_INTERMEDIATE_VERT, "HAS_INTERMEDIATE_VERT"),
        ];
        let mut set = f.debug_set();
        for (flag, name) in NAMES {
            if self.contains(flag) {
                set.entry(&format_args!("{name}"));
            }
        }
        set.finish()
    }
}

/// Axis the monotone sweep advances along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SweepAxis {
    X,
    Y,
}

impl SweepAxis {
    pub fn major_index(self) -> usize {
        match self {
            SweepAxis::X => 0,
            SweepAxis::Y => 1,
        }
    }

    /// Multiplier applied to ear determinants; sweeping along X mirrors which
    /// chain lies on the left of the sweep direction.
    pub fn det_sign(self) -> f64 {
        match self {
            SweepAxis::X => -1.0,
            SweepAxis::Y => 1.0,
        }
    }
}

/// Closed set of ring shapes the triangulator distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingShape {
    /// Convex and free of intermediate axis-aligned nodes: fan triangulation.
    ConvexSimple,
    /// Convex, but with nodes in the middle of horizontal or vertical runs.
    ConvexWithAxisNodes { axis: SweepAxis },
    MonotoneX,
    MonotoneY,
    Irregular,
}

impl RingShape {
    /// Collapses the flag bits (plus the X/Y monotone predicate) into a shape.
    ///
    /// A convex ring carrying axis nodes is only routed to the sweep when it
    /// is also flagged monotone.
    pub fn from_flags(flags: RingFlags, x_monotone: bool) -> RingShape {
        let axis_nodes = flags
            .intersects(RingFlags::HAS_INTERMEDIATE_HORZ | RingFlags::HAS_INTERMEDIATE_VERT);
        let axis = if x_monotone { SweepAxis::X } else { SweepAxis::Y };

        if flags.contains(RingFlags::IS_CONVEX) && !axis_nodes {
            RingShape::ConvexSimple
        } else if !flags.contains(RingFlags::IS_MONOTONE) {
            RingShape::Irregular
        } else if flags.contains(RingFlags::IS_CONVEX) {
            RingShape::ConvexWithAxisNodes { axis }
        } else {
            match axis {
                SweepAxis::X => RingShape::MonotoneX,
                SweepAxis::Y => RingShape::MonotoneY,
            }
        }
    }
}
