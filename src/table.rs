use super::outcome::Outcome;
use super::results::ResultSet;
use super::strategy::Strategy;
use crate::Probability;

/// Win/lose proportions per strategy, derived from a [`ResultSet`].
///
/// Rows are strategies, columns are outcomes. Each cell is the share of
/// that strategy's rounds ending in that outcome, rounded to two
/// decimals, so rows sum to 1.0 up to rounding. Derived on demand and
/// never fed back into the raw records.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Table(Vec<(Strategy, Outcome, Probability)>);

impl Table {
    /// Proportion for one (strategy, outcome) cell.
    pub fn proportion(&self, strategy: Strategy, outcome: Outcome) -> Probability {
        self.0
            .iter()
            .find(|(s, o, _)| *s == strategy && *o == outcome)
            .map(|(_, _, p)| *p)
            .unwrap_or_default()
    }
}

impl From<&ResultSet> for Table {
    fn from(results: &ResultSet) -> Self {
        Self(
            Strategy::all()
                .into_iter()
                .flat_map(|strategy| {
                    let rounds = results.rounds(strategy).max(1) as Probability;
                    Outcome::all().into_iter().map(move |outcome| {
                        let share = results.count(strategy, outcome) as Probability / rounds;
                        (strategy, outcome, (share * 100.).round() / 100.)
                    })
                })
                .collect(),
        )
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<8}", "")?;
        for outcome in Outcome::all() {
            write!(f, "{:>8}", outcome.to_string())?;
        }
        for strategy in Strategy::all() {
            write!(f, "\n{:<8}", strategy.to_string())?;
            for outcome in Outcome::all() {
                write!(f, "{:>8.2}", self.proportion(strategy, outcome))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::RoundResult;

    fn record(strategy: Strategy, outcome: Outcome) -> RoundResult {
        RoundResult { strategy, outcome }
    }

    #[test]
    fn proportions_match_counts() {
        let results = ResultSet::from(vec![
            record(Strategy::Stay, Outcome::Win),
            record(Strategy::Switch, Outcome::Lose),
            record(Strategy::Stay, Outcome::Lose),
            record(Strategy::Switch, Outcome::Win),
            record(Strategy::Stay, Outcome::Lose),
            record(Strategy::Switch, Outcome::Win),
            record(Strategy::Stay, Outcome::Lose),
            record(Strategy::Switch, Outcome::Win),
        ]);
        let table = Table::from(&results);
        assert!(table.proportion(Strategy::Stay, Outcome::Win) == 0.25);
        assert!(table.proportion(Strategy::Stay, Outcome::Lose) == 0.75);
        assert!(table.proportion(Strategy::Switch, Outcome::Win) == 0.75);
        assert!(table.proportion(Strategy::Switch, Outcome::Lose) == 0.25);
    }

    #[test]
    fn rows_sum_to_one() {
        let results = ResultSet::from(vec![
            record(Strategy::Stay, Outcome::Win),
            record(Strategy::Switch, Outcome::Win),
            record(Strategy::Stay, Outcome::Lose),
            record(Strategy::Switch, Outcome::Lose),
            record(Strategy::Stay, Outcome::Lose),
            record(Strategy::Switch, Outcome::Win),
        ]);
        let table = Table::from(&results);
        for strategy in Strategy::all() {
            let row = Outcome::all()
                .into_iter()
                .map(|o| table.proportion(strategy, o))
                .sum::<Probability>();
            assert!((row - 1.).abs() < 0.011);
        }
    }

    #[test]
    fn renders_rows_by_strategy() {
        let results = ResultSet::from(vec![
            record(Strategy::Stay, Outcome::Lose),
            record(Strategy::Switch, Outcome::Win),
        ]);
        let rendered = Table::from(&results).to_string();
        let mut lines = rendered.lines();
        assert!(lines.next().expect("header").contains("win"));
        assert!(lines.next().expect("stay row").starts_with("stay"));
        assert!(lines.next().expect("switch row").starts_with("switch"));
    }
}
