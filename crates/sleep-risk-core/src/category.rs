use serde::{Deserialize, Serialize};

pub const HEALTHY_LABEL: &str = "Healthy Sleep Pattern";
pub const INSOMNIA_LABEL: &str = "High Risk: Insomnia Indicators";
pub const APNEA_LABEL: &str = "High Risk: Possible Sleep Apnea";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Category {
    #[default]
    Healthy = 0,
    Insomnia = 1,
    Apnea = 2,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Healthy, Category::Insomnia, Category::Apnea];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Category::Healthy),
            1 => Some(Category::Insomnia),
            2 => Some(Category::Apnea),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Healthy => HEALTHY_LABEL,
            Category::Insomnia => INSOMNIA_LABEL,
            Category::Apnea => APNEA_LABEL,
        }
    }

    pub fn risk_level(self) -> RiskLevel {
        match self {
            Category::Healthy => RiskLevel::Low,
            Category::Insomnia | Category::Apnea => RiskLevel::High,
        }
    }

    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            Category::Healthy => &[
                "Maintain your current routine.",
                "Keep a consistent sleep schedule.",
            ],
            Category::Insomnia => &[
                "Practice relaxation techniques.",
                "Reduce evening stress.",
                "Limit caffeine intake.",
            ],
            Category::Apnea => &[
                "Consult a specialist for CPAP therapy.",
                "Avoid sleeping on your back.",
                "Weight management is advised.",
            ],
        }
    }
}

/// Label for a raw category code. Unknown codes read as healthy.
pub fn label_for_code(code: i64) -> &'static str {
    Category::from_code(code)
        .map(Category::label)
        .unwrap_or(HEALTHY_LABEL)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    High,
}
