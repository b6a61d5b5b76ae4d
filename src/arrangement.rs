use super::door::Door;
use super::label::Label;
use rand::seq::SliceRandom;

/// The hidden mapping of car and goats to the three doors for one round.
///
/// Backed by a `[Label; 3]` indexed by [`Door`]. Exactly one slot holds
/// [`Label::Car`]; the other two hold [`Label::Goat`]. An arrangement is
/// generated fresh per round and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrangement([Label; 3]);

impl Arrangement {
    /// Shuffles {car, goat, goat} uniformly over the three doors.
    ///
    /// Each of the six orderings of the underlying multiset is equally
    /// likely, collapsing to 1/3 for each car position.
    pub fn random<R: rand::Rng>(rng: &mut R) -> Self {
        let mut labels = [Label::Car, Label::Goat, Label::Goat];
        labels.shuffle(rng);
        Self(labels)
    }
    /// Label behind the given door.
    pub fn label(&self, door: Door) -> Label {
        self.0[door as usize - 1]
    }
    /// The door hiding the car.
    pub fn car(&self) -> Door {
        Door::all()
            .into_iter()
            .find(|d| self.label(*d) == Label::Car)
            .expect("exactly one car behind the three doors")
    }
}

impl From<[Label; 3]> for Arrangement {
    fn from(labels: [Label; 3]) -> Self {
        debug_assert!(labels.iter().filter(|l| **l == Label::Car).count() == 1);
        Self(labels)
    }
}

impl std::fmt::Display for Arrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{} {} {}]", self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn single_car() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..1_000 {
            let arrangement = Arrangement::random(rng);
            let cars = Door::all()
                .into_iter()
                .filter(|d| arrangement.label(*d) == Label::Car)
                .count();
            assert!(cars == 1);
        }
    }

    #[test]
    fn car_accessor_agrees_with_labels() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..1_000 {
            let arrangement = Arrangement::random(rng);
            assert!(arrangement.label(arrangement.car()) == Label::Car);
        }
    }

    #[test]
    fn uniform_car_position() {
        const N: usize = 10_000;
        let ref mut rng = SmallRng::seed_from_u64(2);
        let mut counts = [0usize; 3];
        for _ in 0..N {
            counts[Arrangement::random(rng).car() as usize - 1] += 1;
        }
        for count in counts {
            let frequency = count as f64 / N as f64;
            assert!((frequency - 1. / 3.).abs() < 0.03);
        }
    }
}
