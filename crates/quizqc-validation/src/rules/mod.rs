//! Rule modules and the registry that scopes them by language and subject.
//!
//! Every rule is a pure `QcRule`: `(record, knowledge) -> findings`.

pub mod arithmetic;
pub mod factual;
pub mod locale;
pub mod registry;
pub mod structural;

pub use arithmetic::ArithmeticRule;
pub use factual::FactualRule;
pub use locale::{EnglishSpellingRule, SwissFrenchNumeralRule, SwissGermanSharpSRule};
pub use registry::{RuleRegistry, RuleScope};
pub use structural::StructuralRule;
