use super::arrangement::Arrangement;
use super::door::Door;
use super::host::Host;
use super::outcome::Outcome;
use super::strategy::Strategy;

/// One strategy's result for a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RoundResult {
    pub strategy: Strategy,
    pub outcome: Outcome,
}

/// One complete round: the arrangement, the contestant's initial pick,
/// and the door the host opened.
///
/// Both strategies are scored against this single draw of randomness,
/// so a round yields a paired comparison rather than two independent
/// samples. Stay's final door is always the pick and Switch's never is,
/// so the two final doors differ within any round.
#[derive(Debug, Clone, Copy)]
pub struct Round {
    arrangement: Arrangement,
    pick: Door,
    opened: Door,
}

impl Round {
    /// Draws a fresh round: arrangement, then pick, then host reveal.
    pub fn random<R: rand::Rng>(rng: &mut R) -> Self {
        let arrangement = Arrangement::random(rng);
        let pick = Door::random(rng);
        let opened = Host::open(&arrangement, pick, rng);
        Self {
            arrangement,
            pick,
            opened,
        }
    }
    /// Resolves and judges one strategy against this round.
    pub fn result(&self, strategy: Strategy) -> RoundResult {
        let choice = strategy.resolve(self.pick, self.opened);
        RoundResult {
            strategy,
            outcome: Outcome::from((choice, &self.arrangement)),
        }
    }
    /// Plays one round and scores both strategies, stay first.
    pub fn play<R: rand::Rng>(rng: &mut R) -> [RoundResult; 2] {
        let round = Self::random(rng);
        [round.result(Strategy::Stay), round.result(Strategy::Switch)]
    }

    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }
    pub fn pick(&self) -> Door {
        self.pick
    }
    pub fn opened(&self) -> Door {
        self.opened
    }
}
