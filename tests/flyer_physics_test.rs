//! Integration test: flyer physics through the round tick
//!
//! Checks gravity integration against closed-form kinematics, the ceiling
//! clamp and flap semantics as seen through `Round::tick`.

use flapper::core::GameConfig;
use flapper::round::{GameInput, Round, RoundState};
use flapper::{Collision, Flyer};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const DT: f64 = 1.0 / 60.0;

fn new_round() -> (Round, ChaCha8Rng) {
    (
        Round::new(GameConfig::default()).expect("default config is valid"),
        ChaCha8Rng::seed_from_u64(2024),
    )
}

// =============================================================================
// Integration Law
// =============================================================================

#[test]
fn test_single_tick_from_rest() {
    let (mut round, mut rng) = new_round();
    round.tick(DT, &mut rng);

    let flyer = round.flyer();
    assert!((flyer.vel_y - 5.33).abs() < 0.01, "vel {}", flyer.vel_y);
    assert!((flyer.y - 300.09).abs() < 0.01, "y {}", flyer.y);
    assert!((flyer.x - 120.0).abs() < f64::EPSILON);
}

#[test]
fn test_free_fall_matches_closed_form() {
    let (mut round, mut rng) = new_round();
    let gravity = round.config().gravity;
    let n = 30;

    for _ in 0..n {
        round.tick(DT, &mut rng);
    }

    let n = n as f64;
    let expected_vel = n * gravity * DT;
    // Velocity is updated before position each step
    let expected_y = 300.0 + gravity * DT * DT * n * (n + 1.0) / 2.0;

    let flyer = round.flyer();
    assert!((flyer.vel_y - expected_vel).abs() < 1e-9);
    assert!((flyer.y - expected_y).abs() < 1e-9);
    assert_eq!(round.state(), RoundState::Playing);
}

#[test]
fn test_free_fall_ends_on_ground() {
    let (mut round, mut rng) = new_round();

    let mut ticks = 0;
    loop {
        ticks += 1;
        let result = round.tick(DT, &mut rng);
        if result.game_over {
            assert_eq!(result.collision, Some(Collision::Ground));
            break;
        }
        assert!(ticks < 200, "flyer never reached the ground");
    }

    // Box bottom passes 488 once y > 472: n(n+1)/2 > 1935 first at n = 62
    assert_eq!(ticks, 62);
}

// =============================================================================
// Ceiling Clamp
// =============================================================================

#[test]
fn test_flapping_into_ceiling_clamps_exactly() {
    let (mut round, mut rng) = new_round();

    // Each flapped tick climbs ~3.9 units, so the ceiling is reached within 80
    let mut reached = None;
    for tick in 1..=100 {
        round.queue_input(GameInput::Flap);
        round.tick(DT, &mut rng);
        assert!(round.is_playing(), "ceiling must not kill");
        assert!(round.flyer().y >= 0.0);
        if reached.is_none() && round.flyer().y == 0.0 {
            reached = Some(tick);
        }
    }

    let reached = reached.expect("flyer reaches the ceiling");
    assert!((76..=78).contains(&reached), "tick {reached}");
    assert_eq!(round.flyer().y, 0.0);
    assert_eq!(round.flyer().vel_y, 0.0);
}

#[test]
fn test_ceiling_clamp_on_bare_flyer() {
    let config = GameConfig::default();
    for launch in [-200.0, -600.0, -50_000.0] {
        let mut flyer = Flyer::new(&config);
        flyer.y = 2.0;
        flyer.vel_y = launch;
        flyer.integrate(config.gravity, DT);

        assert!(flyer.clamp_to_ceiling(), "launch {launch}");
        assert_eq!(flyer.y, 0.0);
        assert_eq!(flyer.vel_y, 0.0);
    }
}

// =============================================================================
// Flap Semantics
// =============================================================================

#[test]
fn test_two_flaps_override_not_add() {
    let config = GameConfig::default();
    let mut flyer = Flyer::new(&config);

    flyer.flap(config.flap_force);
    flyer.flap(config.flap_force);
    assert_eq!(flyer.vel_y, -config.flap_force);
}

#[test]
fn test_queued_flaps_collapse_within_a_tick() {
    let (mut round, mut rng) = new_round();
    round.queue_input(GameInput::Flap);
    round.queue_input(GameInput::Flap);

    let result = round.tick(DT, &mut rng);
    assert!(result.flapped);
    // -240 overridden, then one gravity step
    assert!((round.flyer().vel_y - (-240.0 + 320.0 * DT)).abs() < 1e-9);
}

#[test]
fn test_flap_ignored_after_crash() {
    let (mut round, mut rng) = new_round();
    while !round.tick(DT, &mut rng).game_over {}
    assert_eq!(round.state(), RoundState::GameOver);

    let y = round.flyer().y;
    round.queue_input(GameInput::Flap);
    let result = round.tick(DT, &mut rng);

    assert!(!result.flapped);
    assert_eq!(round.flyer().y, y);
    assert!(!round.flyer().alive);
}
