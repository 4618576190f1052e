use rand::Rng;

use crate::question_engine::{
    bands::{LevelBand, POWER_OF_TWO_EXPONENTS},
    helpers,
    models::{Operator, Question},
};

/// `a ^ 2` with `a` from the band's first range.
pub fn generate_square<R: Rng>(rng: &mut R, band: LevelBand, id: String) -> Question {
    let a = rng.gen_range(band.first_range());
    helpers::question(id, a, Operator::Square, 2, a * a)
}

/// `a ^ 3` with `a` from the band's first range.
pub fn generate_cube<R: Rng>(rng: &mut R, band: LevelBand, id: String) -> Question {
    let a = rng.gen_range(band.first_range());
    helpers::question(id, a, Operator::Cube, 3, a * a * a)
}

/// `2 ^ e` with `e` in `POWER_OF_TWO_EXPONENTS`.
pub fn generate_power_of_two<R: Rng>(rng: &mut R, id: String) -> Question {
    let exponent = rng.gen_range(POWER_OF_TWO_EXPONENTS);
    helpers::question(id, 2, Operator::PowerOfTwo, i64::from(exponent), 1i64 << exponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn square_and_cube_answers() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..100 {
            let sq = generate_square(&mut rng, LevelBand::Secondary, "SQR-0".into());
            let (a, two) = sq.operands;
            assert_eq!(two, 2);
            assert_eq!(sq.answer, (a * a) as f64);
            assert_eq!(sq.display_text, format!("{a} ^ 2"));

            let cu = generate_cube(&mut rng, LevelBand::Secondary, "CUB-0".into());
            let (a, three) = cu.operands;
            assert_eq!(three, 3);
            assert_eq!(cu.answer, (a * a * a) as f64);
        }
    }

    #[test]
    fn power_of_two_covers_all_exponents() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut seen = [false; 9];
        for _ in 0..400 {
            let q = generate_power_of_two(&mut rng, "POW-0".into());
            let (base, e) = q.operands;
            assert_eq!(base, 2);
            assert!((1..=8).contains(&e));
            assert_eq!(q.answer, 2f64.powi(e as i32));
            seen[e as usize] = true;
        }
        assert!(seen[1..].iter().all(|&s| s), "exponents seen: {seen:?}");
    }
}
