use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResult {
    pub question: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeBand {
    #[serde(rename = "Not Achieved")]
    NotAchieved,
    Achieved,
    Merit,
    Excellence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeResult {
    pub grade_band: GradeBand,
    pub score: u8,
    pub feedback: String,
    pub improved_answer: String,
}

impl GradeBand {
    pub const ALL: [GradeBand; 4] = [
        GradeBand::NotAchieved,
        GradeBand::Achieved,
        GradeBand::Merit,
        GradeBand::Excellence,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GradeBand::NotAchieved => "Not Achieved",
            GradeBand::Achieved => "Achieved",
            GradeBand::Merit => "Merit",
            GradeBand::Excellence => "Excellence",
        }
    }

    /// Case- and spacing-insensitive lookup, so "not achieved" and
    /// "NotAchieved" both resolve.
    pub fn parse(label: &str) -> Option<Self> {
        let wanted: String = label
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        Self::ALL.into_iter().find(|band| {
            band.as_str().replace(' ', "").to_lowercase() == wanted
        })
    }
}

impl fmt::Display for GradeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_band_parse_variants() {
        assert_eq!(GradeBand::parse("Merit"), Some(GradeBand::Merit));
        assert_eq!(GradeBand::parse("not achieved"), Some(GradeBand::NotAchieved));
        assert_eq!(GradeBand::parse("Not_Achieved"), Some(GradeBand::NotAchieved));
        assert_eq!(GradeBand::parse(" EXCELLENCE "), Some(GradeBand::Excellence));
        assert_eq!(GradeBand::parse("Distinction"), None);
        assert_eq!(GradeBand::parse(""), None);
    }

    #[test]
    fn test_grade_result_wire_shape() {
        let result = GradeResult {
            grade_band: GradeBand::NotAchieved,
            score: 1,
            feedback: "Mention electrons.".to_string(),
            improved_answer: String::new(),
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "grade_band": "Not Achieved",
                "score": 1,
                "feedback": "Mention electrons.",
                "improved_answer": ""
            })
        );
    }
}
