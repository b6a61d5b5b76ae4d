use rand::seq::IndexedRandom;

/// One of the three doors, numbered 1 through 3.
///
/// Doors are positions, not contents; what a door hides lives in
/// [`Arrangement`]. The numbering follows the classic problem statement,
/// so conversions to and from `u8` use 1-based values.
///
/// [`Arrangement`]: super::arrangement::Arrangement
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Door {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Door {
    /// All three doors in numeric order.
    pub const fn all() -> [Door; 3] {
        [Door::One, Door::Two, Door::Three]
    }
    /// Uniformly random door, 1/3 each.
    pub fn random<R: rand::Rng>(rng: &mut R) -> Door {
        *Self::all()
            .choose(rng)
            .expect("three doors to choose from")
    }
    /// The two doors distinct from this one, in numeric order.
    pub fn others(&self) -> [Door; 2] {
        match self {
            Door::One => [Door::Two, Door::Three],
            Door::Two => [Door::One, Door::Three],
            Door::Three => [Door::One, Door::Two],
        }
    }
}

/// u8 isomorphism
impl From<u8> for Door {
    fn from(n: u8) -> Door {
        match n {
            1 => Door::One,
            2 => Door::Two,
            3 => Door::Three,
            _ => unreachable!("invalid door"),
        }
    }
}
impl From<Door> for u8 {
    fn from(d: Door) -> u8 {
        d as u8
    }
}

impl std::fmt::Display for Door {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}
