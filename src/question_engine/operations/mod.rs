//! Operand generators grouped by operator family.
//!
//! Every public function takes the RNG, the active band (where relevant) and
//! a pre-built question id, and returns a finished [`Question`]:
//!
//! ```ignore
//! pub fn generate_<name><R: Rng>(
//!     rng: &mut R,
//!     band: LevelBand,
//!     id: String,
//! ) -> Question
//! ```
//!
//! The generator dispatches to these via `generator.rs`.
//!
//! [`Question`]: crate::question_engine::models::Question

/// Add, subtract, multiply.
pub mod arithmetic;
/// Divide (exact quotients only).
pub mod division;
/// Square, cube, power of two.
pub mod powers;
