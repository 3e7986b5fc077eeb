//! Arena geometry: 2-D vectors, facing direction, and the bounded arena.
//!
//! Coordinates are screen-style: `x` grows to the right, `y` grows downward,
//! and an agent's position is the top-left anchor of its sprite.  `f32`
//! matches what the rendering collaborator consumes.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A 2-D vector used for positions, velocities, and displacements.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector of length `magnitude` pointing along `angle` (radians).
    #[inline]
    pub fn from_angle(angle: f32, magnitude: f32) -> Self {
        Self::new(angle.cos() * magnitude, angle.sin() * magnitude)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Angle of `self` in radians, `atan2(y, x)`.  Zero for the zero vector.
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── Facing ────────────────────────────────────────────────────────────────────

/// Which way the sprite is mirrored.  Reported to rendering, never read back.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing implied by a horizontal velocity, or `None` when `vx == 0`.
    #[inline]
    pub fn from_vx(vx: f32) -> Option<Facing> {
        if vx > 0.0 {
            Some(Facing::Right)
        } else if vx < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }

    #[inline]
    pub fn flipped(self) -> Facing {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// `+1` for right, `-1` for left: the sprite's `scaleX`.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Facing::Left => -1,
            Facing::Right => 1,
        }
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Facing::Left => "left",
            Facing::Right => "right",
        };
        f.write_str(s)
    }
}

// ── Arena ─────────────────────────────────────────────────────────────────────

/// The bounded rectangle agents live in, as reported by the host on resize.
///
/// Construction clamps non-finite or negative dimensions to zero so that a
/// collapsed window degrades to a zero-area arena instead of inverted bounds.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: non_negative(width),
            height: non_negative(height),
        }
    }

    /// Largest valid anchor position for a sprite of edge `size`.
    ///
    /// Each axis is `max(0, extent - size)`: an arena smaller than the sprite
    /// pins the agent to the origin on that axis.
    #[inline]
    pub fn max_position(self, size: f32) -> Vec2 {
        let size = non_negative(size);
        Vec2::new(
            (self.width - size).max(0.0),
            (self.height - size).max(0.0),
        )
    }

    /// Clamp `pos` into `[0, max_position(size)]` on both axes.
    ///
    /// Non-finite coordinates collapse to zero.
    pub fn clamp(self, pos: Vec2, size: f32) -> Vec2 {
        let max = self.max_position(size);
        Vec2::new(clamp_axis(pos.x, max.x), clamp_axis(pos.y, max.y))
    }

    /// `true` if `pos` already lies inside the valid anchor range.
    pub fn contains(self, pos: Vec2, size: f32) -> bool {
        let max = self.max_position(size);
        (0.0..=max.x).contains(&pos.x) && (0.0..=max.y).contains(&pos.y)
    }

    /// Horizontal position as a fraction of the arena width.
    ///
    /// Returns `0.0` for a zero-width arena.
    pub fn normalized_x(self, x: f32) -> f32 {
        if self.width > 0.0 { x / self.width } else { 0.0 }
    }
}

#[inline]
fn non_negative(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[inline]
fn clamp_axis(v: f32, max: f32) -> f32 {
    if v.is_finite() { v.clamp(0.0, max) } else { 0.0 }
}
