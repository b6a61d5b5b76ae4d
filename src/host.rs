use super::arrangement::Arrangement;
use super::door::Door;
use super::label::Label;
use rand::seq::IndexedRandom;

/// The host, who always opens a goat door the contestant did not pick.
///
/// When the pick hides the car both unpicked doors hide goats and the
/// host chooses between them uniformly. When the pick hides a goat the
/// remaining goat door is unique and the reveal is forced.
pub struct Host;

impl Host {
    /// Opens a goat door that is not the contestant's pick.
    ///
    /// The returned door is never `pick` and never the car door.
    pub fn open<R: rand::Rng>(arrangement: &Arrangement, pick: Door, rng: &mut R) -> Door {
        let goats = pick
            .others()
            .into_iter()
            .filter(|d| arrangement.label(*d) == Label::Goat)
            .collect::<Vec<Door>>();
        *goats
            .choose(rng)
            .expect("at least one goat behind the unpicked doors")
    }
}
