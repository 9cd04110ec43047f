use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{MAX_GRADE, MIN_GRADE};

/// Per-grade numeric policy used by the arithmetic grade checks.
///
/// The table is configuration rather than policy: curriculum documents do
/// not agree on every ceiling (grade-2 multiplication in particular), so
/// deployments override individual grades in `quizqc.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CurriculumConfig {
    pub grades: Vec<GradeRule>,
}

/// Numeric policy for one grade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GradeRule {
    pub grade: u8,
    /// Largest operand or result magnitude considered grade-appropriate.
    pub number_max: u64,
    #[serde(default = "enabled")]
    pub multiplication: bool,
    #[serde(default = "enabled")]
    pub division: bool,
    /// Largest factor allowed in a multiplication.
    #[serde(default)]
    pub max_factor: Option<u64>,
    /// Largest divisor allowed in a division.
    #[serde(default)]
    pub max_divisor: Option<u64>,
}

fn enabled() -> bool {
    true
}

impl Default for CurriculumConfig {
    fn default() -> Self {
        let grades = (MIN_GRADE..=MAX_GRADE)
            .map(|grade| {
                let i = usize::from(grade - MIN_GRADE);
                GradeRule {
                    grade,
                    number_max: defaults::DEFAULT_GRADE_NUMBER_MAX[i],
                    multiplication: grade >= defaults::DEFAULT_MULTIPLICATION_FROM_GRADE,
                    division: grade >= defaults::DEFAULT_DIVISION_FROM_GRADE,
                    max_factor: defaults::DEFAULT_GRADE_MAX_FACTOR[i],
                    max_divisor: defaults::DEFAULT_GRADE_MAX_DIVISOR[i],
                }
            })
            .collect();
        Self { grades }
    }
}

impl CurriculumConfig {
    pub fn rule_for(&self, grade: u8) -> Option<&GradeRule> {
        self.grades.iter().find(|r| r.grade == grade)
    }

    /// Replace rules grade by grade with those present in `other`.
    pub fn merge(&mut self, other: &CurriculumConfig) {
        for rule in &other.grades {
            match self.grades.iter_mut().find(|r| r.grade == rule.grade) {
                Some(existing) => *existing = rule.clone(),
                None => self.grades.push(rule.clone()),
            }
        }
        self.grades.sort_by_key(|r| r.grade);
    }
}
