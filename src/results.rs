use super::outcome::Outcome;
use super::round::RoundResult;
use super::strategy::Strategy;

/// The ordered record of every strategy result across a batch.
///
/// Holds exactly two records per round, appended in call order with
/// stay before switch. Records keep their raw labels; proportions and
/// rounding belong to [`Table`].
///
/// Uses a `Vec` rather than a map keyed by round: aggregation only ever
/// iterates, and order is part of the contract.
///
/// [`Table`]: super::table::Table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ResultSet(Vec<RoundResult>);

impl ResultSet {
    /// All records in append order.
    pub fn records(&self) -> &[RoundResult] {
        &self.0
    }
    /// Number of records (twice the number of rounds).
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Number of rounds a strategy was scored on.
    pub fn rounds(&self, strategy: Strategy) -> usize {
        self.0.iter().filter(|r| r.strategy == strategy).count()
    }
    /// Number of rounds a strategy ended with the given outcome.
    pub fn count(&self, strategy: Strategy, outcome: Outcome) -> usize {
        self.0
            .iter()
            .filter(|r| r.strategy == strategy)
            .filter(|r| r.outcome == outcome)
            .count()
    }
}

impl From<Vec<RoundResult>> for ResultSet {
    fn from(records: Vec<RoundResult>) -> Self {
        Self(records)
    }
}
impl From<ResultSet> for Vec<RoundResult> {
    fn from(results: ResultSet) -> Self {
        results.0
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a RoundResult;
    type IntoIter = std::slice::Iter<'a, RoundResult>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
