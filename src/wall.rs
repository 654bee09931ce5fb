//! Field wall classification
//!
//! Every correction needs to know which of the four field walls a sensor is
//! looking at. That decision depends only on the world heading the sensor
//! points in, so it lives here as one pure function shared by all correctors.
//!
//! # Example
//! ```
//! use distance_reset::{Axis, Wall};
//!
//! let contact = Wall::classify(180.0);
//! assert_eq!(contact.wall, Wall::Bottom);
//! assert_eq!(contact.axis, Axis::Y);
//! assert_eq!(contact.sign, -1.0);
//! ```

use crate::math::HeadingExt;
use crate::types::Axis;

/// One of the four walls of a square field centred at the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    /// `y = +field_half`
    Top,
    /// `x = +field_half`
    Right,
    /// `y = -field_half`
    Bottom,
    /// `x = -field_half`
    Left,
}

/// Everything a corrector needs to know about the wall a sensor faces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallContact {
    pub wall: Wall,
    /// Pose axis the wall constrains
    pub axis: Axis,
    /// `+1.0` for walls on the positive side of the field, `-1.0` otherwise
    pub sign: f64,
    /// Heading of a robot whose back is square to this wall
    pub perpendicular_heading: f64,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::Top, Wall::Right, Wall::Bottom, Wall::Left];

    /// Classify the wall an effective heading points at
    ///
    /// The heading is wrapped to `[0, 360)` first. Seams at 45°, 135° and
    /// 225° belong to the wall counter-clockwise of them; 315° belongs to
    /// [`Wall::Top`].
    ///
    /// | Effective heading      | Wall   |
    /// |------------------------|--------|
    /// | `[315, 360) ∪ [0, 45]` | Top    |
    /// | `(45, 135]`            | Right  |
    /// | `(135, 225]`           | Bottom |
    /// | `(225, 315)`           | Left   |
    pub fn classify(effective_heading: f64) -> WallContact {
        Self::from_heading(effective_heading).contact()
    }

    /// Wall an effective heading points at, without the contact metadata
    pub fn from_heading(effective_heading: f64) -> Wall {
        let heading = effective_heading.wrap_degrees();

        if heading >= 315.0 || heading <= 45.0 {
            Wall::Top
        } else if heading <= 135.0 {
            Wall::Right
        } else if heading <= 225.0 {
            Wall::Bottom
        } else {
            Wall::Left
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Wall::Top | Wall::Bottom => Axis::Y,
            Wall::Right | Wall::Left => Axis::X,
        }
    }

    pub const fn sign(self) -> f64 {
        match self {
            Wall::Top | Wall::Right => 1.0,
            Wall::Bottom | Wall::Left => -1.0,
        }
    }

    /// Heading a robot reports when its back face is square to this wall
    pub const fn perpendicular_heading(self) -> f64 {
        match self {
            Wall::Top => 180.0,
            Wall::Right => 270.0,
            Wall::Bottom => 0.0,
            Wall::Left => 90.0,
        }
    }

    /// Signed field coordinate of a point `distance` away from this wall
    pub fn coordinate_at(self, field_half: f64, distance: f64) -> f64 {
        self.sign() * (field_half - distance)
    }

    pub const fn contact(self) -> WallContact {
        WallContact {
            wall: self,
            axis: self.axis(),
            sign: self.sign(),
            perpendicular_heading: self.perpendicular_heading(),
        }
    }
}
