use crate::category::{Category, RiskLevel};
use crate::classifier::Assessment;
use crate::profile::SleepProfile;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub id: Uuid,
    pub date: String,
    pub inputs: Option<SleepProfile>,
    pub votes: Option<[Category; 3]>,
    pub category: Category,
    pub label: &'static str,
    pub risk_level: RiskLevel,
    pub recommendations: &'static [&'static str],
}

impl Report {
    pub fn new(profile: SleepProfile, assessment: Assessment) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: today(),
            inputs: Some(profile),
            votes: Some(assessment.votes),
            category: assessment.category,
            label: assessment.label,
            risk_level: assessment.risk_level,
            recommendations: assessment.recommendations,
        }
    }

    /// Report for input that never reached the rules.
    pub fn fallback() -> Self {
        let category = Category::default();
        Self {
            id: Uuid::new_v4(),
            date: today(),
            inputs: None,
            votes: None,
            category,
            label: category.label(),
            risk_level: category.risk_level(),
            recommendations: category.recommendations(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
