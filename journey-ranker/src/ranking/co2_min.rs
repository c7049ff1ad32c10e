//! The "co2" ranking strategy.
//!
//! Selectable by name but not yet implemented: journeys are returned in
//! their input order with no score assigned.

use crate::domain::Journey;

use super::strategy::RankingStrategy;
use super::RankError;

/// CO2-minimising strategy placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Co2Min;

impl Co2Min {
    /// Registered name.
    pub const NAME: &'static str = "co2";
}

impl RankingStrategy for Co2Min {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    // TODO: rank by estimated emissions once journeys carry transport modes.
    fn rank(&self, journeys: Vec<Journey>) -> Result<Vec<Journey>, RankError> {
        Ok(journeys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_returns_empty() {
        assert!(Co2Min.rank(vec![]).unwrap().is_empty());
    }

    #[test]
    fn passes_journeys_through_untouched() {
        let mut scored = Journey::from_ids([4, 5]);
        scored.desirability = 2.5;
        let journeys = vec![Journey::from_ids([1, 2, 3]), scored, Journey::new(vec![])];

        let ranked = Co2Min.rank(journeys.clone()).unwrap();

        assert_eq!(ranked, journeys);
    }
}
