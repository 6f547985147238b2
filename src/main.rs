//! Beamtrace headless demo
//!
//! Builds a small play area, scripts the mirror moves a player would make,
//! and runs the frame loop against real wall-clock time until the charge
//! completes. No display surface involved; the "render feed" is printed.

use std::time::{Duration, Instant};

use glam::Vec2;

use beamtrace::Tuning;
use beamtrace::sim::{ChargeEvent, Circle, FixedTarget, MirrorField, PuzzleState};

fn main() {
    env_logger::init();

    let tuning = Tuning::load("beamtrace.json");
    let (width, height) = (800.0, 600.0);

    let mirrors = MirrorField::standard_layout(3, width, height, tuning.mirror_half_length);
    let mut puzzle = PuzzleState::new(width, height, mirrors, tuning);
    let target = FixedTarget(Circle::new(Vec2::new(120.0, 300.0), 30.0));

    let start = Instant::now();
    let now_ms = move || start.elapsed().as_secs_f64() * 1000.0;

    // The solve a player would perform: drag the middle mirror under the
    // emitter, then rotate it to 45 degrees so the beam folds toward the
    // target on the left.
    puzzle.translate_mirror(1, Vec2::new(width / 2.0, 300.0), &target, now_ms());
    let event = puzzle.rotate_mirror(1, &target, now_ms());

    print_path(&puzzle);
    if event != Some(ChargeEvent::Started) {
        log::error!("scripted solve did not reach the target, giving up");
        return;
    }

    // Frame loop: draw-only reads plus the charge clock, ~60 Hz.
    loop {
        let event = puzzle.update(&target, now_ms());
        let frame = puzzle.frame();
        println!(
            "charging={} progress={:.2}",
            frame.charging, frame.progress
        );

        match event {
            Some(ChargeEvent::Completed) => {
                println!("charge complete - puzzle solved");
                break;
            }
            Some(ChargeEvent::Discharged) => {
                log::error!("unexpected discharge in a static scene");
                break;
            }
            _ => {}
        }
        std::thread::sleep(Duration::from_millis(160));
    }
}

fn print_path(puzzle: &PuzzleState) {
    let points: Vec<String> = puzzle
        .path()
        .points
        .iter()
        .map(|p| format!("({:.0}, {:.0})", p.x, p.y))
        .collect();
    println!("beam: {}", points.join(" -> "));
}
