//! Simulated practice run.
//!
//! Run with: `cargo run --example practice`
//! (set `RUST_LOG=debug` to see every question and tick).
//!
//! A simulated student answers 60 questions. Accuracy drops as the level
//! climbs, and some questions are left to time out, so the run shows
//! level-ups, level-downs and timeouts. Output is deterministic (seeded RNG).

use arithmetic_drill::{
    practice_payload, AppState, Level, PracticeSession, ProgressSnapshot, TickOutcome,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut app = AppState::from_snapshot(ProgressSnapshot {
        user_level: Level::new(3).unwrap(),
        diagnostic_completed: true,
        ..Default::default()
    });
    app.subscribe(|change| println!("  [state] {change:?}"));

    let mut rng = StdRng::seed_from_u64(2024);
    let mut student = StdRng::seed_from_u64(7);
    let mut session = PracticeSession::new(app.user_level(), app.lifetime());

    for round in 1..=60 {
        let presented = session.next_question(&mut rng);
        let skill = 0.97 - 0.06 * f64::from(session.level().get());

        let line = if student.gen_bool(0.08) {
            // Walk away and let the clock run out.
            loop {
                if let TickOutcome::TimedOut(_) = session.tick() {
                    break "timeout".to_string();
                }
            }
        } else {
            let input = if student.gen_bool(skill.clamp(0.05, 0.95)) {
                presented.question.answer.to_string()
            } else {
                (presented.question.answer + 1.0).to_string()
            };
            let report = session
                .submit_answer(presented.ticket, &input)
                .accepted()
                .expect("ticket is fresh");
            format!("{} ({})", input, if report.correct { "right" } else { "wrong" })
        };

        println!(
            "#{round:>2} L{:<2} [{}s] {:<10} -> {}",
            session.level(),
            presented.budget_secs,
            presented.question.display_text,
            line,
        );
        app.sync_practice(&session);
    }

    session.exit();
    println!();
    println!("{}", serde_json::to_string_pretty(&practice_payload(&session)).unwrap());
    println!("{}", app.snapshot().to_json().unwrap());
}
