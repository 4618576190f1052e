//! Diagnostic calibration for three simulated students.
//!
//! Run with: `cargo run --example diagnostic`
//!
//! Each student starts at grade 5 and answers the five questions with a
//! different accuracy and speed. The report shows how accuracy and average
//! time turn into the calibrated level.

use std::time::Duration;

use arithmetic_drill::{diagnostic_payload, AppState, DiagnosticSession, TickOutcome};
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // (name, correct answers, seconds per answer; None = let it time out)
    let students: [(&str, usize, Option<u64>); 3] = [
        ("fast and accurate", 5, Some(3)),
        ("steady", 3, Some(6)),
        ("struggling", 1, None),
    ];

    for (seed, (name, right, secs)) in students.into_iter().enumerate() {
        let mut app = AppState::default();
        let grade = app.select_grade(5).unwrap();
        let mut rng = StdRng::seed_from_u64(seed as u64);
        let mut session = DiagnosticSession::start(&mut rng, grade);

        println!("━━ {name} (grade {grade}) ━━");
        println!("{}", diagnostic_payload(&session));

        while let Some(question) = session.current_question().cloned() {
            let index = session.current_index();
            if secs.is_none() && index >= right {
                while !matches!(session.tick(), TickOutcome::TimedOut(_)) {}
                println!("  {} = (timed out)", question.display_text);
                continue;
            }

            let input = if index < right {
                question.answer.to_string()
            } else {
                "?".to_string()
            };
            let elapsed = Duration::from_secs(secs.unwrap_or(4));
            let step = session
                .answer_current(&input, elapsed)
                .expect("diagnostic still running");
            println!("  {} = {input:<6} correct={}", question.display_text, step.correct);
        }

        let report = session.report().expect("all questions resolved");
        println!(
            "  accuracy {:.0}%  average {:.1}s  level {} -> {}",
            report.accuracy * 100.0,
            report.average_secs,
            report.starting_level,
            report.new_level,
        );
        app.complete_diagnostic(report.new_level);
        println!("  saved: {}", app.snapshot().to_json().unwrap());
        println!();
    }
}
