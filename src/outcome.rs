use super::arrangement::Arrangement;
use super::door::Door;
use super::label::Label;

/// Whether the contestant's final door hid the car.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    /// Both outcomes in canonical order.
    pub const fn all() -> [Outcome; 2] {
        [Outcome::Win, Outcome::Lose]
    }
}

/// Judged from a final pick against the arrangement.
impl From<(Door, &Arrangement)> for Outcome {
    fn from((choice, arrangement): (Door, &Arrangement)) -> Self {
        match arrangement.label(choice) {
            Label::Car => Outcome::Win,
            Label::Goat => Outcome::Lose,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Lose => write!(f, "lose"),
        }
    }
}
