//! Short explanations attached to a score.

use stint_core::ScoringFactors;

/// One explanation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// Familiarity of at least 50.
    Experienced,
    /// Some familiarity, below 50.
    SomewhatFamiliar,
    /// No familiarity at all.
    NewCombination,
    /// Safety of at least 70.
    LowIncidentRate,
    /// Safety below 50.
    HigherIncidentRisk,
    /// Performance of at least 60.
    PositionGainPotential,
    /// Performance below 40.
    ChallengingField,
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Experienced => "Driver has experience with this series and track",
            Self::SomewhatFamiliar => "Driver has some familiarity with this series or track",
            Self::NewCombination => "A new combination for this driver",
            Self::LowIncidentRate => "A low incident rate expected",
            Self::HigherIncidentRisk => "A higher incident risk than usual",
            Self::PositionGainPotential => "Shows good position gain potential",
            Self::ChallengingField => "Expect a challenging field",
        })
    }
}

/// Explanations in fixed order: familiarity, then safety, then performance.
///
/// The familiarity line is always present; the others only when the factor
/// sits outside its neutral band.
#[must_use]
pub fn reasons(factors: &ScoringFactors) -> Vec<Reason> {
    let familiarity = match factors.familiarity {
        50.. => Reason::Experienced,
        1..=49 => Reason::SomewhatFamiliar,
        0 => Reason::NewCombination,
    };
    let safety = match factors.safety {
        70.. => Some(Reason::LowIncidentRate),
        0..=49 => Some(Reason::HigherIncidentRisk),
        50..=69 => None,
    };
    let performance = match factors.performance {
        60.. => Some(Reason::PositionGainPotential),
        0..=39 => Some(Reason::ChallengingField),
        40..=59 => None,
    };
    std::iter::once(familiarity)
        .chain(safety)
        .chain(performance)
        .collect()
}

/// Explanations rendered as display strings.
#[must_use]
pub fn reasoning(factors: &ScoringFactors) -> Vec<String> {
    reasons(factors).iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn factors(familiarity: u8, safety: u8, performance: u8) -> ScoringFactors {
        ScoringFactors {
            familiarity,
            safety,
            performance,
            ..ScoringFactors::uniform(50)
        }
    }

    #[rstest]
    #[case(80, 91, 70, vec![Reason::Experienced, Reason::LowIncidentRate, Reason::PositionGainPotential])]
    #[case(20, 60, 50, vec![Reason::SomewhatFamiliar])]
    #[case(0, 40, 30, vec![Reason::NewCombination, Reason::HigherIncidentRisk, Reason::ChallengingField])]
    #[case(50, 69, 60, vec![Reason::Experienced, Reason::PositionGainPotential])]
    #[case(1, 70, 39, vec![Reason::SomewhatFamiliar, Reason::LowIncidentRate, Reason::ChallengingField])]
    fn reasons_follow_fixed_order(
        #[case] familiarity: u8,
        #[case] safety: u8,
        #[case] performance: u8,
        #[case] expected: Vec<Reason>,
    ) {
        assert_eq!(reasons(&factors(familiarity, safety, performance)), expected);
    }

    #[test]
    fn rendered_lines_carry_key_phrases() {
        let lines = reasoning(&factors(0, 20, 10));
        assert!(lines[0].contains("new combination"));
        assert!(lines[1].contains("higher incident risk"));
        assert!(lines[2].contains("challenging field"));

        let lines = reasoning(&factors(90, 90, 90));
        assert!(lines[0].contains("has experience"));
        assert!(lines[1].contains("low incident rate expected"));
        assert!(lines[2].contains("good position gain potential"));

        let lines = reasoning(&factors(10, 60, 50));
        assert!(lines[0].contains("some familiarity"));
    }
}
