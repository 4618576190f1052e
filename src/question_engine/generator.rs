use rand::seq::SliceRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::question_engine::{
    bands::LevelBand,
    helpers,
    models::{Level, Operator, Question, QuestionRequest},
    operations,
};

/// Generate one question for `request.level`.
///
/// Seeded requests are reproducible; unseeded ones draw from OS entropy.
pub fn generate_question(request: QuestionRequest) -> Question {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_question_with(&mut rng, request.level)
}

/// Core dispatch: pick a legal operator for the band, then route to its generator.
pub fn generate_question_with<R: Rng>(rng: &mut R, level: Level) -> Question {
    let band = LevelBand::for_level(level);
    // Every band's operator table is non-empty.
    let operator = *band.operators().choose(rng).unwrap_or(&Operator::Add);
    let id = helpers::question_id(operator, rng);

    let question = match operator {
        Operator::Add | Operator::Subtract | Operator::Multiply =>
            operations::arithmetic::generate(rng, band, operator, id),

        Operator::Divide =>
            operations::division::generate(rng, id),

        Operator::Square =>
            operations::powers::generate_square(rng, band, id),

        Operator::Cube =>
            operations::powers::generate_cube(rng, band, id),

        Operator::PowerOfTwo =>
            operations::powers::generate_power_of_two(rng, id),
    };

    debug!(%level, ?band, id = %question.id, text = %question.display_text, "generated question");
    question
}
