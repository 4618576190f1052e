use rand::Rng;
use tracing::trace;

use crate::question_engine::{
    bands::DIVISION_RANGE,
    helpers,
    models::{Operator, Question},
};

/// Division with an exact integer quotient.
///
/// Both operands are redrawn from `DIVISION_RANGE` until `a % b == 0`; the
/// band's own ranges are not used. There is no attempt cap: every `b` divides
/// `b` itself, so the loop ends with probability 1.
pub fn generate<R: Rng>(rng: &mut R, id: String) -> Question {
    let mut attempts = 0u32;
    let (a, b) = loop {
        attempts += 1;
        let a = rng.gen_range(DIVISION_RANGE);
        let b = rng.gen_range(DIVISION_RANGE);
        if a % b == 0 {
            break (a, b);
        }
    };
    trace!(attempts, a, b, "division operands found");

    helpers::question(id, a, Operator::Divide, b, a / b)
}
