/// What a door hides: the car or a goat.
///
/// Exactly one door per [`Arrangement`] hides the car; the other two
/// hide goats.
///
/// [`Arrangement`]: super::arrangement::Arrangement
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Label {
    Car,
    Goat,
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Label::Car => write!(f, "car"),
            Label::Goat => write!(f, "goat"),
        }
    }
}
