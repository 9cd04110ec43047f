//! Closed-set arithmetic extraction from prompt and answer text.
//!
//! Patterns are tried by operation priority: addition, subtraction,
//! multiplication, division. The first operation with a match wins, and
//! within it the leftmost match.

use std::fmt;
use std::sync::LazyLock;

use quizqc_core::constants::NUMERIC_TOLERANCE;
use quizqc_core::models::{parse_number, Language};
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Priority order used by [`extract`].
    pub const PRIORITY: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Subtract => "subtraction",
            Self::Multiply => "multiplication",
            Self::Divide => "division",
        }
    }

    fn pattern(&self) -> &'static LazyLock<Option<Regex>> {
        match self {
            Self::Add => &RE_ADD,
            Self::Subtract => &RE_SUBTRACT,
            Self::Multiply => &RE_MULTIPLY,
            Self::Divide => &RE_DIVIDE,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A binary expression found in text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression {
    pub op: Operation,
    pub left: f64,
    pub right: f64,
    /// Byte offset just past the right operand.
    pub end: usize,
}

impl Expression {
    /// The exact result, or `None` for division by zero.
    pub fn evaluate(&self) -> Option<f64> {
        match self.op {
            Operation::Add => Some(self.left + self.right),
            Operation::Subtract => Some(self.left - self.right),
            Operation::Multiply => Some(self.left * self.right),
            Operation::Divide if self.right == 0.0 => None,
            Operation::Divide => Some(self.left / self.right),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op.symbol(), self.right)
    }
}

// Operands: digits with an optional decimal part, or thousands grouped by
// apostrophe or comma (`1'000`, `1,000`). Which reading a comma gets is up to
// the record's language. The surrounding context keeps an operand from
// starting or ending inside a larger number or a fraction (`1/2 + 1/4`). A
// bare slash is a fraction bar and a bare colon is a clock time, so both
// need spaces to mean division (`12 / 4`, `24 : 6`).
macro_rules! operation_pattern {
    ($name:ident, $operator:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| {
            Regex::new(&format!(
                r"(?i)(?:^|[^\d/.,'’]){num}\s*(?:{op})\s*{num}(?:[^\d/'’]|$)",
                num = r"(\d{1,3}(?:[,'’]\d{3})+(?:[.,]\d+)?|\d+(?:[.,]\d+)?)",
                op = $operator,
            ))
            .ok()
        });
    };
}

operation_pattern!(RE_ADD, r"\+|plus");
operation_pattern!(RE_SUBTRACT, r"[-−–]|minus|weniger|moins");
operation_pattern!(
    RE_MULTIPLY,
    r"[x×*·]|mal|fois|times|multiplied\s+by|multiplié\s+par"
);
operation_pattern!(
    RE_DIVIDE,
    r"÷|\s:\s|\s/\s|geteilt(?:\s+durch)?|divis[ée]\s+par|divided\s+by"
);

/// `= <number>` right after an expression, as in `7 + 5 = 12`.
static RE_CLAIMED_RESULT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^\s*=\s*(-?\d{1,3}(?:[,'’]\d{3})+(?:[.,]\d+)?|-?\d+(?:[.,]\d+)?)").ok()
});

/// First number in free text, with optional thousands separators.
static RE_FIRST_NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"-?\d{1,3}(?:[,'’]\d{3})+(?:[.,]\d+)?|-?\d+(?:[.,]\d+)?").ok()
});

/// Find the highest-priority arithmetic expression in `text`, reading
/// numbers the way `language` writes them.
pub fn extract(text: &str, language: Language) -> Option<Expression> {
    Operation::PRIORITY.iter().find_map(|op| {
        let re = op.pattern().as_ref()?;
        let caps = re.captures(text)?;
        let left = caps.get(1)?;
        let right = caps.get(2)?;
        Some(Expression {
            op: *op,
            left: parse_number(left.as_str(), language)?,
            right: parse_number(right.as_str(), language)?,
            end: right.end(),
        })
    })
}

/// The value asserted after the expression (`a op b = c`), if any.
pub fn claimed_result(text: &str, expression: &Expression, language: Language) -> Option<f64> {
    let rest = text.get(expression.end..)?;
    let caps = RE_CLAIMED_RESULT.as_ref()?.captures(rest)?;
    parse_number(caps.get(1)?.as_str(), language)
}

/// Numeric value of an answer: the whole text if it is a plain number,
/// otherwise the first number inside it ("7 Äpfel", "CHF 3.50").
pub fn extract_number(text: &str, language: Language) -> Option<f64> {
    if let Some(n) = parse_number(text, language) {
        return Some(n);
    }
    let m = RE_FIRST_NUMBER.as_ref()?.find(text)?;
    parse_number(m.as_str(), language)
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < NUMERIC_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    const DE: Language = Language::German;
    const EN: Language = Language::English;

    fn op_of(text: &str) -> Option<Operation> {
        extract(text, DE).map(|e| e.op)
    }

    #[test]
    fn symbolic_operators() {
        let e = extract("12 - 5", DE).unwrap();
        assert_eq!(e.op, Operation::Subtract);
        assert_eq!((e.left, e.right), (12.0, 5.0));
        assert_eq!(op_of("Was ist 7 + 8?"), Some(Operation::Add));
        assert_eq!(op_of("6 × 7 = ?"), Some(Operation::Multiply));
        assert_eq!(op_of("3x4"), Some(Operation::Multiply));
        assert_eq!(op_of("24 ÷ 6"), Some(Operation::Divide));
        assert_eq!(op_of("24 : 6"), Some(Operation::Divide));
        assert_eq!(op_of("24 / 6"), Some(Operation::Divide));
    }

    #[test]
    fn word_operators() {
        assert_eq!(op_of("Wie viel ist 6 mal 7?"), Some(Operation::Multiply));
        assert_eq!(op_of("Combien font 6 fois 7 ?"), Some(Operation::Multiply));
        assert_eq!(op_of("What is 6 times 7?"), Some(Operation::Multiply));
        assert_eq!(op_of("20 geteilt durch 4"), Some(Operation::Divide));
        assert_eq!(op_of("20 divisé par 4"), Some(Operation::Divide));
        assert_eq!(op_of("20 divided by 4"), Some(Operation::Divide));
        assert_eq!(op_of("9 minus 4"), Some(Operation::Subtract));
        assert_eq!(op_of("9 moins 4"), Some(Operation::Subtract));
        assert_eq!(op_of("3 plus 4"), Some(Operation::Add));
    }

    #[test]
    fn addition_outranks_later_operations() {
        let e = extract("Rechne 6 × 2 und dann 3 + 4", DE).unwrap();
        assert_eq!(e.op, Operation::Add);
        assert_eq!((e.left, e.right), (3.0, 4.0));
    }

    #[test]
    fn decimals_and_fractions() {
        let e = extract("2,5 + 1,5", DE).unwrap();
        assert_eq!((e.left, e.right), (2.5, 1.5));
        assert!(extract("1/2 + 1/4", DE).is_none());
    }

    #[test]
    fn grouped_operands_follow_the_language() {
        let e = extract("What is 1,000 + 250?", EN).unwrap();
        assert_eq!((e.left, e.right), (1000.0, 250.0));
        let e = extract("Was ist 1'000 + 250?", DE).unwrap();
        assert_eq!((e.left, e.right), (1000.0, 250.0));
        let e = extract("1,500 + 2", DE).unwrap();
        assert_eq!((e.left, e.right), (1.5, 2.0));
        let text = "12,000 - 2,000 = 10,000";
        let e = extract(text, EN).unwrap();
        assert_eq!(claimed_result(text, &e, EN), Some(10_000.0));
    }

    #[test]
    fn clock_times_are_not_division() {
        assert!(extract("Es ist 7:15 Uhr.", DE).is_none());
        assert!(extract("Le train part à 14:30.", Language::French).is_none());
        assert_eq!(op_of("Was ist 24 : 6?"), Some(Operation::Divide));
    }

    #[test]
    fn no_pattern_in_plain_text() {
        assert!(extract("Wie heisst die Hauptstadt der Schweiz?", DE).is_none());
        assert!(extract("Combien font soixante-dix plus cinq ?", DE).is_none());
    }

    #[test]
    fn division_by_zero_has_no_result() {
        assert_eq!(extract("8 ÷ 0", DE).unwrap().evaluate(), None);
        assert_eq!(extract("8 ÷ 2", DE).unwrap().evaluate(), Some(4.0));
    }

    #[test]
    fn claimed_result_after_equals() {
        let text = "7 + 5 = 12";
        let e = extract(text, DE).unwrap();
        assert_eq!(claimed_result(text, &e, DE), Some(12.0));
        let text = "7 + 5";
        assert_eq!(claimed_result(text, &extract(text, DE).unwrap(), DE), None);
    }

    #[test]
    fn answer_numbers() {
        assert_eq!(extract_number("7", DE), Some(7.0));
        assert_eq!(extract_number("1'000", DE), Some(1000.0));
        assert_eq!(extract_number("7 Äpfel", DE), Some(7.0));
        assert_eq!(extract_number("CHF 3,50", DE), Some(3.5));
        assert_eq!(extract_number("sieben", DE), None);
        assert_eq!(extract_number("1,000", EN), Some(1000.0));
        assert_eq!(extract_number("1,000 apples", EN), Some(1000.0));
        assert_eq!(extract_number("1,000", DE), Some(1.0));
    }
}
