use serde::{Deserialize, Serialize};

/// A savings goal with a funding target and the amount reserved so far.
///
/// `current` may exceed `target`; over-funding is allowed and only the
/// display percentage is clamped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: u64,
    pub name: String,
    pub target: f64,
    pub current: f64,
}

impl Goal {
    /// Funding progress as a percentage, clamped to 100 for display.
    pub fn percent_complete(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.current / self.target * 100.0).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_complete_clamps_overfunded_goals() {
        let goal = Goal {
            id: 1,
            name: "Trip".into(),
            target: 1000.0,
            current: 1500.0,
        };
        assert_eq!(goal.percent_complete(), 100.0);
    }

    #[test]
    fn percent_complete_reports_partial_progress() {
        let goal = Goal {
            id: 1,
            name: "Trip".into(),
            target: 1000.0,
            current: 250.0,
        };
        assert_eq!(goal.percent_complete(), 25.0);
    }
}
