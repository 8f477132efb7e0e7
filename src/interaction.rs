use crate::vector::Vec2;

/// Where P1 and P2 are being pulled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringTargets {
    pub p1: Vec2,
    pub p2: Vec2,
}

/// Maps a pointer sample to the two spring targets.
///
/// P1 chases the midpoint between P0 and the pointer, P2 the midpoint
/// between P3 and the pointer. Only the latest sample matters.
pub fn map_pointer(p0: Vec2, p3: Vec2, pointer: Vec2) -> SpringTargets {
    SpringTargets {
        p1: p0.midpoint(pointer),
        p2: p3.midpoint(pointer),
    }
}
