/*
 * Responsibility
 * - 固定されたカテゴリ集合 (closed enum)
 * - wire 上の表記 ("Medical Education" など) との相互変換
 */
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "Medical Education")]
    MedicalEducation,
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    #[serde(rename = "Metabolic Health")]
    MetabolicHealth,
    #[serde(rename = "PCOS")]
    Pcos,
    #[serde(rename = "Diabetes")]
    Diabetes,
    #[serde(rename = "Thyroid")]
    Thyroid,
    #[serde(rename = "Nutrition")]
    Nutrition,
    #[serde(rename = "Lifestyle")]
    Lifestyle,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Every category, in the order the editor offers them.
    pub const ALL: [Category; 8] = [
        Category::MedicalEducation,
        Category::WeightLoss,
        Category::MetabolicHealth,
        Category::Pcos,
        Category::Diabetes,
        Category::Thyroid,
        Category::Nutrition,
        Category::Lifestyle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MedicalEducation => "Medical Education",
            Category::WeightLoss => "Weight Loss",
            Category::MetabolicHealth => "Metabolic Health",
            Category::Pcos => "PCOS",
            Category::Diabetes => "Diabetes",
            Category::Thyroid => "Thyroid",
            Category::Nutrition => "Nutrition",
            Category::Lifestyle => "Lifestyle",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
