//! Collision detection pass

use crate::ecs::{ComponentKind, Entity, Mask, World};

const COLLISION_MASK: Mask = Mask::of(&[
    ComponentKind::Position,
    ComponentKind::Scale,
    ComponentKind::Collision,
]);

/// Two entities count as colliding within this center distance.
pub const COLLISION_RADIUS: f32 = 0.1;

/// One detected overlap. Reported once per unordered pair, `first` always
/// the lower slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    pub first: Entity,
    pub second: Entity,
}

/// Pairwise collision detection over collision-tagged entities.
///
/// Detection only: pairs are reported, never resolved. The scan is the full
/// O(n²) pairing, which holds up because the tagged population stays small.
/// Candidate and pair buffers are reused across frames.
pub struct CollisionSystem {
    candidates: Vec<Entity>,
    pairs: Vec<CollisionPair>,
}

impl CollisionSystem {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            pairs: Vec::new(),
        }
    }

    /// Rebuild this frame's pair list.
    pub fn run(&mut self, world: &World) {
        self.candidates.clear();
        self.pairs.clear();
        self.candidates.extend(world.matching(COLLISION_MASK));

        for (slot, &first) in self.candidates.iter().enumerate() {
            let Some(a) = world.position(first) else {
                continue;
            };
            for &second in &self.candidates[slot + 1..] {
                let Some(b) = world.position(second) else {
                    continue;
                };
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                if dx * dx + dy * dy <= COLLISION_RADIUS * COLLISION_RADIUS {
                    self.pairs.push(CollisionPair { first, second });
                }
            }
        }
    }

    /// Pairs found by the most recent `run`.
    pub fn pairs(&self) -> &[CollisionPair] {
        &self.pairs
    }
}

impl Default for CollisionSystem {
    fn default() -> Self {
        Self::new()
    }
}
