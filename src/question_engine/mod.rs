//! Question engine: level bands, operand drawing and answer grading.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: `Level`, `Operator`, `Question`, `QuestionRequest` |
//! | `bands`      | Level → operand ranges and legal operators |
//! | `helpers`    | Id, display text and `Question` builders shared by generators |
//! | `generator`  | Entry points `generate_question()` / `generate_question_with()` |
//! | `operations` | Per-operator generators (arithmetic, division, powers) |
//! | `grading`    | Parse free-text answers and compare with tolerance |

pub mod bands;
pub mod generator;
pub mod grading;
pub mod helpers;
pub mod models;
pub mod operations;

pub use bands::LevelBand;
pub use generator::{generate_question, generate_question_with};
pub use grading::{is_correct, parse_answer, DEFAULT_TOLERANCE};
pub use models::{Level, Operator, Question, QuestionRequest};
