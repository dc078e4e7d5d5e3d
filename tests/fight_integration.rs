//! Fight minigame integration tests

use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tightlines::core::types::{Species, Vec2};
use tightlines::simulation::snapshot::{
    FieldBounds, LinearDepthScale, LureMotion, LureState, WorldSnapshot,
};
use tightlines::{
    AiState, BehaviorConfig, DecisionEngine, FightConfig, FightInput, FightOutcome, FightSession,
    Predator, ProfileRegistry, TackleParams,
};

fn spawn(species: Species, weight: f32, seed: u64) -> Predator {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Predator::new(
        species,
        Vec2::new(0.0, 100.0),
        weight,
        &ProfileRegistry::standard(),
        &mut rng,
    )
    .unwrap()
}

fn tackle(line_test: f32) -> TackleParams {
    TackleParams { line_test_strength: line_test, drag_setting: 1.0, shock_absorption: 0.9 }
}

/// Config with thrashing pushed out of reach, making fights deterministic
/// up to the landing/break race
fn calm_config() -> FightConfig {
    let mut config = FightConfig::default();
    config.thrash_interval_min = 100_000.0;
    config.thrash_interval_max = 100_001.0;
    config
}

fn run_to_resolution(
    session: &mut FightSession,
    reel: bool,
    max_ticks: usize,
    rng: &mut ChaCha8Rng,
) -> Option<FightOutcome> {
    for _ in 0..max_ticks {
        let status = session.tick(FightInput { reel }, 0.05, rng);
        if status.resolution.is_some() {
            return status.resolution;
        }
    }
    None
}

#[test]
fn test_hookset_to_landing_through_the_engine() {
    // Full handoff: decision engine drives the fish to a strike, the
    // hookset converts it, the fight resolves, the release returns the
    // fish to idle.
    let eng = DecisionEngine::new(
        BehaviorConfig::default(),
        ProfileRegistry::standard(),
        Box::new(LinearDepthScale::default()),
    );
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let mut fish = spawn(Species::RainbowTrout, 2.0, 77);
    fish.personality.preferred_speed = 2.0;

    let mut t = 0.0;
    let mut struck = false;
    for _ in 0..300 {
        t += 0.15;
        let snap = WorldSnapshot {
            lure: Some(LureState {
                position: Vec2::new(5.0, 100.0),
                depth: 10.0,
                speed: 2.0,
                motion: LureMotion::Retrieving,
            }),
            actors: vec![],
            schools: vec![],
            timestamp: t,
            field: FieldBounds { width: 800.0, height: 400.0 },
        };
        fish.position = Vec2::new(0.0, 100.0);
        if eng.update(&mut fish, &snap, &mut rng).state == AiState::Striking {
            struck = true;
            break;
        }
    }
    assert!(struck, "fish never struck");
    assert!(eng.confirm_hookset(&mut fish));

    let mut session = FightSession::new(&fish, 10.0, tackle(50.0), calm_config());
    let outcome = run_to_resolution(&mut session, true, 4000, &mut rng);
    assert!(
        matches!(outcome, Some(FightOutcome::Landed { .. })),
        "strong tackle with no thrashing must land, got {outcome:?}"
    );

    eng.release_from_fight(&mut fish);
    assert_eq!(fish.state(), AiState::Idle);
}

#[test]
fn test_tackle_strength_decides_break_vs_land() {
    let fish = spawn(Species::NorthernPike, 9.0, 5);

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut weak = FightSession::new(&fish, 12.0, tackle(1.0), calm_config());
    let outcome = run_to_resolution(&mut weak, true, 4000, &mut rng);
    assert_eq!(outcome, Some(FightOutcome::LineBroken));

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut strong = FightSession::new(&fish, 12.0, tackle(80.0), calm_config());
    let outcome = run_to_resolution(&mut strong, true, 8000, &mut rng);
    assert!(
        matches!(outcome, Some(FightOutcome::Landed { .. })),
        "80 lb tackle must not break on a 9 kg fish, got {outcome:?}"
    );
}

#[test]
fn test_points_scale_with_fish_size() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);

    let small = spawn(Species::RainbowTrout, 1.0, 31);
    let mut session = FightSession::new(&small, 15.0, tackle(80.0), calm_config());
    let Some(FightOutcome::Landed { points: small_points }) =
        run_to_resolution(&mut session, true, 8000, &mut rng)
    else {
        panic!("small fish should land");
    };

    let trophy = spawn(Species::Muskellunge, 10.0, 31);
    let mut session = FightSession::new(&trophy, 15.0, tackle(80.0), calm_config());
    let Some(FightOutcome::Landed { points: trophy_points }) =
        run_to_resolution(&mut session, true, 8000, &mut rng)
    else {
        panic!("trophy fish should land");
    };

    assert!(
        trophy_points > small_points * 10,
        "trophy scoring must dominate: {trophy_points} vs {small_points}"
    );
}

#[test]
fn test_passive_player_loses_line() {
    let fish = spawn(Species::NorthernPike, 8.0, 5);
    let mut session = FightSession::new(&fish, 10.0, tackle(80.0), calm_config());
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    // Skip the hookset grace, then watch the fish run
    for _ in 0..70 {
        session.tick(FightInput::default(), 0.05, &mut rng);
    }
    let start = session.tick(FightInput::default(), 0.05, &mut rng).remaining_distance;
    for _ in 0..100 {
        session.tick(FightInput::default(), 0.05, &mut rng);
    }
    let end = session.tick(FightInput::default(), 0.05, &mut rng).remaining_distance;
    assert!(end > start, "a strong fish takes line while the player does nothing");
}

#[test]
fn test_resolution_survives_continued_ticking() {
    let fish = spawn(Species::NorthernPike, 9.0, 5);
    let mut session = FightSession::new(&fish, 12.0, tackle(1.0), FightConfig::default());
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let outcome = run_to_resolution(&mut session, true, 4000, &mut rng).expect("must resolve");
    for _ in 0..100 {
        let status = session.tick(FightInput { reel: true }, 0.05, &mut rng);
        assert_eq!(status.resolution, Some(outcome));
    }
}
