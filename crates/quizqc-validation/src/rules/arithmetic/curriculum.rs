//! Grade-appropriateness of an extracted expression. All findings are Warnings.

use quizqc_core::config::GradeRule;
use quizqc_core::models::{Finding, RuleId};

use super::extract::{Expression, Operation};

pub const GRADE_CEILING: &str = "ARITH_GRADE_CEILING";
pub const OPERATION_NOT_IN_GRADE: &str = "ARITH_OPERATION_NOT_IN_GRADE";
pub const FACTOR_TOO_LARGE: &str = "ARITH_FACTOR_TOO_LARGE";
pub const DIVISOR_TOO_LARGE: &str = "ARITH_DIVISOR_TOO_LARGE";

/// Check operands and result against one grade's policy.
pub fn check(expression: &Expression, result: Option<f64>, rule: &GradeRule) -> Vec<Finding> {
    let mut findings = Vec::new();
    let warn = |code: &str, message: String| {
        Finding::warning(RuleId::Arithmetic, code, message).with_field("prompt")
    };

    let allowed = match expression.op {
        Operation::Multiply => rule.multiplication,
        Operation::Divide => rule.division,
        Operation::Add | Operation::Subtract => true,
    };
    if !allowed {
        findings.push(warn(
            OPERATION_NOT_IN_GRADE,
            format!("{} is not taught in grade {}", expression.op, rule.grade),
        ));
    }

    let largest = [Some(expression.left), Some(expression.right), result]
        .into_iter()
        .flatten()
        .map(f64::abs)
        .fold(0.0_f64, f64::max);
    if largest > rule.number_max as f64 {
        findings.push(warn(
            GRADE_CEILING,
            format!(
                "{largest} exceeds the grade {} number range of {}",
                rule.grade, rule.number_max
            ),
        ));
    }

    match (expression.op, rule.max_factor, rule.max_divisor) {
        (Operation::Multiply, Some(max), _) if allowed => {
            let factor = expression.left.max(expression.right);
            if factor > max as f64 {
                findings.push(warn(
                    FACTOR_TOO_LARGE,
                    format!("factor {factor} exceeds grade {} maximum of {max}", rule.grade),
                ));
            }
        }
        (Operation::Divide, _, Some(max)) if allowed => {
            if expression.right > max as f64 {
                findings.push(warn(
                    DIVISOR_TOO_LARGE,
                    format!(
                        "divisor {} exceeds grade {} maximum of {max}",
                        expression.right, rule.grade
                    ),
                ));
            }
        }
        _ => {}
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::arithmetic::extract::extract;
    use quizqc_core::config::CurriculumConfig;
    use quizqc_core::models::Language;

    fn codes(text: &str, grade: u8) -> Vec<String> {
        let curriculum = CurriculumConfig::default();
        let rule = curriculum.rule_for(grade).unwrap();
        let e = extract(text, Language::German).unwrap();
        check(&e, e.evaluate(), rule)
            .into_iter()
            .map(|f| f.code)
            .collect()
    }

    #[test]
    fn within_grade_one_range() {
        assert!(codes("12 - 5", 1).is_empty());
        assert!(codes("15 + 5", 1).is_empty());
    }

    #[test]
    fn result_above_ceiling() {
        assert_eq!(codes("15 + 8", 1), vec![GRADE_CEILING]);
        assert!(codes("15 + 8", 2).is_empty());
    }

    #[test]
    fn multiplication_not_in_grade_one() {
        assert_eq!(codes("3 × 4", 1), vec![OPERATION_NOT_IN_GRADE]);
    }

    #[test]
    fn grade_two_factor_limit() {
        assert!(codes("5 × 4", 2).is_empty());
        assert_eq!(codes("9 × 3", 2), vec![FACTOR_TOO_LARGE]);
        assert!(codes("9 × 3", 3).is_empty());
    }

    #[test]
    fn divisor_limit() {
        assert_eq!(codes("48 ÷ 12", 3), vec![DIVISOR_TOO_LARGE]);
        assert!(codes("48 ÷ 12", 4).is_empty());
    }
}
