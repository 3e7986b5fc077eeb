//! Movement integration and idle direction flipping.

use rk_core::{Arena, Facing};

use crate::Kinematics;

/// Which axes reflected during one integration step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Bounce {
    pub x: bool,
    pub y: bool,
}

impl Bounce {
    #[inline]
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// Advance `kin` by one tick of velocity and reflect off the arena walls.
///
/// The valid anchor range is `[0, max(0, extent - size)]` per axis.  An axis
/// that leaves it is clamped back and its velocity component negated; the
/// other axis is untouched.  An X reflection also sets facing (right off the
/// left wall, left off the right wall) so the turn is always visible, even
/// when `vx` was tiny.
pub fn integrate(kin: &mut Kinematics, arena: Arena, size: f32) -> Bounce {
    kin.position += kin.velocity;

    let max = arena.max_position(size);
    let mut bounce = Bounce::default();

    if kin.position.x < 0.0 {
        kin.position.x = 0.0;
        kin.velocity.x = -kin.velocity.x;
        kin.facing = Facing::Right;
        bounce.x = true;
    } else if kin.position.x > max.x {
        kin.position.x = max.x;
        kin.velocity.x = -kin.velocity.x;
        kin.facing = Facing::Left;
        bounce.x = true;
    }

    if kin.position.y < 0.0 {
        kin.position.y = 0.0;
        kin.velocity.y = -kin.velocity.y;
        bounce.y = true;
    } else if kin.position.y > max.y {
        kin.position.y = max.y;
        kin.velocity.y = -kin.velocity.y;
        bounce.y = true;
    }

    // NaN velocity would slip past every comparison above.
    if !kin.position.is_finite() {
        kin.position = arena.clamp(kin.position, size);
    }

    bounce
}

/// Toggle `facing` once per `interval_ms` spent resting.
///
/// `phase` is the number of whole intervals already accounted for; it must be
/// reset to zero whenever the resting state (re)starts.  If several intervals
/// elapsed since the last call (a stalled frame), facing still toggles only
/// once.  Returns `true` if facing changed.
pub fn idle_flip(facing: &mut Facing, phase: &mut u64, elapsed_ms: u64, interval_ms: u64) -> bool {
    let step = elapsed_ms / interval_ms.max(1);
    if step == *phase {
        return false;
    }
    *phase = step;
    *facing = facing.flipped();
    true
}
