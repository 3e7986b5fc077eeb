//! Pairwise collision resolution.
//!
//! Two bodies whose anchors are closer than the collision radius `R` are
//! pushed apart along the line joining them, each by half the overlap, so
//! their distance becomes exactly `R`.
//!
//! Velocity response is informal: a moving body that takes part
//! in a contact has *both* velocity components negated (a full reversal, not a
//! reflection about the contact normal) and re-faces along the new `vx`.
//! Resting bodies are displaced but keep zero velocity.  Held bodies are out
//! of the physics entirely.
//!
//! # Ordering
//!
//! [`resolve_collisions`] takes one snapshot of all positions, computes every
//! pair's push from that snapshot, then applies the sums.  The result does
//! not depend on the order of the slice.

use rk_behavior::AgentState;
use rk_core::Vec2;

use crate::Kinematics;

/// How a body takes part in collision resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BodyRole {
    /// Walking or running: pushed, and bounces back.
    Mover,
    /// Idle or contemplating: pushed, never launched.
    Resting,
    /// Under pointer control: ignored.
    Held,
}

impl From<AgentState> for BodyRole {
    fn from(state: AgentState) -> Self {
        match state {
            AgentState::Walk | AgentState::Run => BodyRole::Mover,
            AgentState::Idle | AgentState::Contemplating => BodyRole::Resting,
            AgentState::Dragging => BodyRole::Held,
        }
    }
}

/// Anything the resolver can push around.
pub trait Collider {
    fn role(&self) -> BodyRole;
    fn kinematics(&self) -> &Kinematics;
    fn kinematics_mut(&mut self) -> &mut Kinematics;
}

/// One resolved contact, reported for observers and tests.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    /// Slice indices of the two bodies, `first < second`.
    pub first: usize,
    pub second: usize,
    /// Displacement applied to `second`; `first` received the negation.
    pub push: Vec2,
    /// Distance before resolution.
    pub distance: f32,
}

/// Half-overlap push for two anchors `radius` apart or closer.
///
/// Returns the displacement to add to `b` (and subtract from `a`), or `None`
/// when they don't overlap.  Coincident anchors separate along +x.
pub fn separation(a: Vec2, b: Vec2, radius: f32) -> Option<Vec2> {
    let delta = b - a;
    let distance = delta.length();
    if distance.is_nan() || distance >= radius {
        return None;
    }
    let overlap = radius - distance;
    Some(Vec2::from_angle(delta.angle(), overlap / 2.0))
}

/// Resolve every overlapping pair in `bodies` at collision radius `radius`.
///
/// A pair is considered when neither body is [`BodyRole::Held`] and at least
/// one is a [`BodyRole::Mover`]; two resting bodies may overlap undisturbed.
/// A mover whose velocity reverses an odd number of times this tick ends up
/// reversed, an even number leaves it as it was.  Returns the contacts found.
pub fn resolve_collisions<C: Collider>(bodies: &mut [C], radius: f32) -> Vec<Contact> {
    let snapshot: Vec<(Vec2, BodyRole)> = bodies
        .iter()
        .map(|b| (b.kinematics().position, b.role()))
        .collect();

    let mut shifts = vec![Vec2::ZERO; bodies.len()];
    let mut reversals = vec![0u32; bodies.len()];
    let mut contacts = Vec::new();

    for (i, &(pos_a, role_a)) in snapshot.iter().enumerate() {
        if role_a == BodyRole::Held {
            continue;
        }
        for (j, &(pos_b, role_b)) in snapshot.iter().enumerate().skip(i + 1) {
            if role_b == BodyRole::Held {
                continue;
            }
            if role_a != BodyRole::Mover && role_b != BodyRole::Mover {
                continue;
            }
            let Some(push) = separation(pos_a, pos_b, radius) else {
                continue;
            };

            shifts[i] -= push;
            shifts[j] += push;
            reversals[i] += 1;
            reversals[j] += 1;
            contacts.push(Contact {
                first:    i,
                second:   j,
                push,
                distance: pos_a.distance(pos_b),
            });
        }
    }

    for (i, body) in bodies.iter_mut().enumerate() {
        let role = snapshot[i].1;
        let kin = body.kinematics_mut();
        kin.position += shifts[i];
        if role == BodyRole::Mover && reversals[i] > 0 {
            if reversals[i] % 2 == 1 {
                kin.velocity = -kin.velocity;
            }
            kin.face_velocity();
        }
    }

    contacts
}
