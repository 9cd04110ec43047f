//! Record schema: raw input shape and normalization into `QuestionRecord`.

pub mod normalize;
pub mod raw;

pub use normalize::normalize;
pub use raw::{RawAnswer, RawQuestion};
