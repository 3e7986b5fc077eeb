//! Per-agent kinematic state.

use rk_core::{Arena, Facing, Vec2};

/// Position, velocity, and facing of one agent.
///
/// `position` is the sprite's top-left anchor.  `facing` is derived from
/// velocity most of the time but is stored, because walls, idle flipping,
/// and collisions all set it explicitly.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Kinematics {
    pub position: Vec2,
    pub velocity: Vec2,
    pub facing: Facing,
}

impl Kinematics {
    /// A stationary body at `position`, facing right.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            facing: Facing::Right,
        }
    }

    /// Replace the velocity and face along it.  Facing is unchanged when the
    /// new velocity has no horizontal component.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
        self.face_velocity();
    }

    /// Re-derive facing from the sign of `vx`; keep it when `vx == 0`.
    #[inline]
    pub fn face_velocity(&mut self) {
        if let Some(facing) = Facing::from_vx(self.velocity.x) {
            self.facing = facing;
        }
    }

    #[inline]
    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    /// Pull the position back inside the arena without touching velocity.
    #[inline]
    pub fn clamp_into(&mut self, arena: Arena, size: f32) {
        self.position = arena.clamp(self.position, size);
    }
}
