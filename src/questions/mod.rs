//! Questions: validation, raw-record normalization, and the play-order bank.
//!
//! ## Key Types
//!
//! - `Question`: immutable, validated, options shuffled once
//! - `Difficulty`: easy/medium/hard, also the weighted score
//! - `RawQuestion`: unvalidated record from an external source
//! - `QuestionBank`: shuffled sequence plus a play cursor

pub mod question;
pub mod source;
pub mod bank;

pub use question::{Difficulty, Question};
pub use source::{load_questions, RawAnswer, RawQuestion};
pub use bank::QuestionBank;
