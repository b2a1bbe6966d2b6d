use crate::category::{Category, RiskLevel};
use crate::error::InputConversionError;
use crate::profile::SleepProfile;
use crate::thresholds::Thresholds;
use crate::vote::majority;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    SleepStress,
    BmiSnoring,
    SleepBmiSnoring,
}

impl Rule {
    /// Voting order. Ties go to the earliest rule.
    pub const ORDER: [Rule; 3] = [Rule::SleepStress, Rule::BmiSnoring, Rule::SleepBmiSnoring];
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Assessment {
    pub votes: [Category; 3],
    pub category: Category,
    pub label: &'static str,
    pub risk_level: RiskLevel,
    pub recommendations: &'static [&'static str],
}

impl Assessment {
    pub fn from_votes(votes: [Category; 3]) -> Self {
        let category = majority(&votes).unwrap_or_default();
        Self {
            votes,
            category,
            label: category.label(),
            risk_level: category.risk_level(),
            recommendations: category.recommendations(),
        }
    }
}

/// Stateless three-rule screener. Holds only its comparison constants.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RiskClassifier {
    thresholds: Thresholds,
}

impl RiskClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn sleep_stress(&self, sleep: f64, stress: f64) -> Category {
        let t = &self.thresholds;
        if sleep < t.insomnia_sleep_below && stress > t.insomnia_stress_above {
            return Category::Insomnia;
        }
        Category::Healthy
    }

    pub fn bmi_snoring(&self, bmi: f64, snoring: f64) -> Category {
        let t = &self.thresholds;
        if bmi >= t.apnea_bmi_min && snoring >= t.apnea_snoring_min {
            return Category::Apnea;
        }
        Category::Healthy
    }

    pub fn sleep_bmi_snoring(&self, sleep: f64, bmi: f64, snoring: f64) -> Category {
        let t = &self.thresholds;
        if sleep < t.deprivation_sleep_below {
            Category::Insomnia
        } else if bmi == t.severe_bmi && snoring == t.severe_snoring {
            Category::Apnea
        } else {
            Category::Healthy
        }
    }

    pub fn evaluate(&self, rule: Rule, profile: &SleepProfile) -> Category {
        match rule {
            Rule::SleepStress => self.sleep_stress(profile.sleep, profile.stress),
            Rule::BmiSnoring => self.bmi_snoring(profile.bmi, profile.snoring),
            Rule::SleepBmiSnoring => {
                self.sleep_bmi_snoring(profile.sleep, profile.bmi, profile.snoring)
            }
        }
    }

    /// Rule outputs in `Rule::ORDER`.
    pub fn votes(&self, profile: &SleepProfile) -> [Category; 3] {
        Rule::ORDER.map(|rule| {
            let vote = self.evaluate(rule, profile);
            debug!(?rule, ?vote, "rule vote");
            vote
        })
    }

    pub fn assess(&self, profile: &SleepProfile) -> Assessment {
        let assessment = Assessment::from_votes(self.votes(profile));
        debug!(category = ?assessment.category, votes = ?assessment.votes, "resolved");
        assessment
    }

    pub fn assess_fields<S: AsRef<str>>(
        &self,
        fields: &[S],
    ) -> Result<(SleepProfile, Assessment), InputConversionError> {
        let profile = SleepProfile::parse(fields)?;
        let assessment = self.assess(&profile);
        Ok((profile, assessment))
    }

    /// Label for raw positional fields. Any conversion failure reads as
    /// the healthy label.
    pub fn label_for_fields<S: AsRef<str>>(&self, fields: &[S]) -> &'static str {
        match self.assess_fields(fields) {
            Ok((_, assessment)) => assessment.label,
            Err(err) => {
                debug!(error = %err, "falling back to default label");
                Category::default().label()
            }
        }
    }
}
