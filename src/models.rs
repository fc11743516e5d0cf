use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub credit_hours: f64,
    pub marks: f64,
}

impl Subject {
    pub fn new(credit_hours: f64, marks: f64) -> Self {
        Subject { credit_hours, marks }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "D+")]
    DPlus,
    D,
    F,
}

impl LetterGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::DPlus => "D+",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }

    pub fn band(&self) -> GradeBand {
        match self {
            LetterGrade::APlus | LetterGrade::A => GradeBand::Excellent,
            LetterGrade::BPlus | LetterGrade::B => GradeBand::Good,
            LetterGrade::CPlus | LetterGrade::C => GradeBand::Satisfactory,
            LetterGrade::DPlus | LetterGrade::D => GradeBand::Pass,
            LetterGrade::F => GradeBand::Fail,
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Adjacent letters share a band, the results table colours rows by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeBand {
    Excellent,
    Good,
    Satisfactory,
    Pass,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeLookup {
    pub grade_point: f64,
    pub letter_grade: LetterGrade,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GradeDetail {
    pub credit_hours: f64,
    pub marks: f64,
    #[serde(rename = "grade")]
    pub letter_grade: LetterGrade,
    #[serde(rename = "gp")]
    pub grade_point: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CgpaResult {
    pub cgpa: f64,
    pub total_credit_hours: f64,
    pub grade_details: Vec<GradeDetail>,
}
