use serde::{Deserialize, Serialize};
use std::fmt;

/// 使用者在表單上輸入的資料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    pub name: String,
    pub birth_date: String,
}

impl FormInput {
    pub fn new(name: impl Into<String>, birth_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birth_date: birth_date.into(),
        }
    }
}

/// A single reduced digit in `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct NumerologyScore(u8);

impl NumerologyScore {
    pub fn new(value: u8) -> Option<Self> {
        (1..=9).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for NumerologyScore {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("score {} is outside 1..=9", value))
    }
}

impl From<NumerologyScore> for u8 {
    fn from(score: NumerologyScore) -> Self {
        score.0
    }
}

impl fmt::Display for NumerologyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumberKind {
    LifePath,
    Expression,
    SoulUrge,
    Personality,
}

impl NumberKind {
    pub const ALL: [NumberKind; 4] = [
        NumberKind::LifePath,
        NumberKind::Expression,
        NumberKind::SoulUrge,
        NumberKind::Personality,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NumberKind::LifePath => "Life Path",
            NumberKind::Expression => "Expression",
            NumberKind::SoulUrge => "Soul Urge",
            NumberKind::Personality => "Personality",
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            NumberKind::LifePath => "life path",
            NumberKind::Expression => "expression",
            NumberKind::SoulUrge => "soul urge",
            NumberKind::Personality => "personality",
        };
        f.write_str(text)
    }
}

/// Computed numerology report. Field names serialize in camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub name: String,
    pub birth_date: String,
    pub life_path_number: NumerologyScore,
    pub expression_number: NumerologyScore,
    pub soul_urge_number: NumerologyScore,
    pub personality_number: NumerologyScore,
    pub life_path_description: String,
    pub expression_description: String,
    pub soul_urge_description: String,
    pub personality_description: String,
}

impl Report {
    pub fn score(&self, kind: NumberKind) -> NumerologyScore {
        match kind {
            NumberKind::LifePath => self.life_path_number,
            NumberKind::Expression => self.expression_number,
            NumberKind::SoulUrge => self.soul_urge_number,
            NumberKind::Personality => self.personality_number,
        }
    }

    pub fn description(&self, kind: NumberKind) -> &str {
        match kind {
            NumberKind::LifePath => &self.life_path_description,
            NumberKind::Expression => &self.expression_description,
            NumberKind::SoulUrge => &self.soul_urge_description,
            NumberKind::Personality => &self.personality_description,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Numerology report for {} (born {})", self.name, self.birth_date)?;
        for kind in NumberKind::ALL {
            writeln!(f)?;
            writeln!(f, "{} Number: {}", kind.label(), self.score(kind))?;
            writeln!(f, "  {}", self.description(kind))?;
        }
        Ok(())
    }
}

/// 批次輸入中的一列，row 從 1 開始 (不含標題列)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    pub row: usize,
    pub input: FormInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowFailure {
    pub row: usize,
    pub name: String,
    pub birth_date: String,
    pub error: String,
}

#[derive(Debug, Clone)]
pub struct BatchResult {
    pub reports: Vec<Report>,
    pub failures: Vec<RowFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bounds() {
        assert!(NumerologyScore::new(0).is_none());
        assert!(NumerologyScore::new(10).is_none());
        assert_eq!(NumerologyScore::new(9).map(NumerologyScore::get), Some(9));
    }

    #[test]
    fn test_score_deserialization_rejects_zero() {
        assert!(serde_json::from_str::<NumerologyScore>("0").is_err());
        assert_eq!(
            serde_json::from_str::<NumerologyScore>("7").unwrap().get(),
            7
        );
    }
}
