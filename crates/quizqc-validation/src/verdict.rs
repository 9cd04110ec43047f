//! Verdict resolver: reduce findings to a status and a 0..=100 score.
//!
//! - any Critical: `QcFailed`, `100 - critical_penalty * criticals`, floor 0
//! - else any Warning: `Flagged`, `100 - warning_penalty * warnings`, floor `warning_floor`
//! - else: `QcPassed`, 100
//!
//! Info findings never affect the verdict.

use quizqc_core::config::ScoringConfig;
use quizqc_core::constants::MAX_SCORE;
use quizqc_core::models::{Finding, QcStatus, Severity, Verdict};

pub fn resolve(findings: &[Finding], scoring: &ScoringConfig) -> Verdict {
    let count = |severity: Severity| findings.iter().filter(|f| f.severity == severity).count();
    let criticals = count(Severity::Critical);
    let warnings = count(Severity::Warning);

    if criticals > 0 {
        Verdict {
            status: QcStatus::QcFailed,
            score: deduct(criticals, scoring.effective_critical_penalty(), 0),
        }
    } else if warnings > 0 {
        Verdict {
            status: QcStatus::Flagged,
            score: deduct(
                warnings,
                scoring.effective_warning_penalty(),
                scoring.effective_warning_floor(),
            ),
        }
    } else {
        Verdict {
            status: QcStatus::QcPassed,
            score: MAX_SCORE,
        }
    }
}

fn deduct(count: usize, penalty: u8, floor: u8) -> u8 {
    let penalty_total = count.saturating_mul(usize::from(penalty));
    let score = usize::from(MAX_SCORE).saturating_sub(penalty_total);
    score.max(usize::from(floor)).min(usize::from(MAX_SCORE)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizqc_core::models::RuleId;

    fn findings(criticals: usize, warnings: usize, infos: usize) -> Vec<Finding> {
        let mut out = Vec::new();
        for i in 0..criticals {
            out.push(Finding::critical(RuleId::Structural, format!("C{i}"), "c"));
        }
        for i in 0..warnings {
            out.push(Finding::warning(RuleId::Locale, format!("W{i}"), "w"));
        }
        for i in 0..infos {
            out.push(Finding::info(RuleId::Arithmetic, format!("I{i}"), "i"));
        }
        out
    }

    fn verdict(c: usize, w: usize, i: usize) -> (QcStatus, u8) {
        let v = resolve(&findings(c, w, i), &ScoringConfig::default());
        (v.status, v.score)
    }

    #[test]
    fn clean_record_passes_with_full_score() {
        assert_eq!(verdict(0, 0, 0), (QcStatus::QcPassed, 100));
    }

    #[test]
    fn info_never_affects_verdict() {
        assert_eq!(verdict(0, 0, 5), (QcStatus::QcPassed, 100));
    }

    #[test]
    fn warnings_flag_with_floor() {
        assert_eq!(verdict(0, 1, 0), (QcStatus::Flagged, 90));
        assert_eq!(verdict(0, 3, 0), (QcStatus::Flagged, 70));
        assert_eq!(verdict(0, 9, 0), (QcStatus::Flagged, 50));
    }

    #[test]
    fn criticals_fail_down_to_zero() {
        assert_eq!(verdict(1, 0, 0), (QcStatus::QcFailed, 75));
        assert_eq!(verdict(2, 3, 0), (QcStatus::QcFailed, 50));
        assert_eq!(verdict(5, 0, 0), (QcStatus::QcFailed, 0));
    }

    #[test]
    fn custom_penalties() {
        let scoring = ScoringConfig {
            critical_penalty: Some(40),
            warning_penalty: Some(5),
            warning_floor: Some(80),
        };
        assert_eq!(resolve(&findings(1, 0, 0), &scoring).score, 60);
        assert_eq!(resolve(&findings(0, 2, 0), &scoring).score, 90);
        assert_eq!(resolve(&findings(0, 10, 0), &scoring).score, 80);
    }
}
