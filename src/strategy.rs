use super::door::Door;

/// The contestant's decision after the host's reveal.
///
/// - `Stay` — keep the initial pick
/// - `Switch` — take the remaining closed door
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Strategy {
    Stay,
    Switch,
}

impl Strategy {
    /// Both strategies in canonical order.
    pub const fn all() -> [Strategy; 2] {
        [Strategy::Stay, Strategy::Switch]
    }
    /// Final door under this strategy.
    ///
    /// Staying keeps `pick`. Switching takes the unique door that is
    /// neither `pick` nor `opened`, well-defined since `opened != pick`.
    pub fn resolve(&self, pick: Door, opened: Door) -> Door {
        match self {
            Strategy::Stay => pick,
            Strategy::Switch => Door::all()
                .into_iter()
                .find(|d| *d != pick && *d != opened)
                .expect("three distinct doors leave one closed"),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Strategy::Stay => write!(f, "stay"),
            Strategy::Switch => write!(f, "switch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staying_keeps_pick() {
        for pick in Door::all() {
            for opened in pick.others() {
                assert!(Strategy::Stay.resolve(pick, opened) == pick);
            }
        }
    }

    #[test]
    fn switching_takes_third_door() {
        for pick in Door::all() {
            for opened in pick.others() {
                let switched = Strategy::Switch.resolve(pick, opened);
                assert!(switched != pick);
                assert!(switched != opened);
            }
        }
    }
}
