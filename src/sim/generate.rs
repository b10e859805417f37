//! Population generation
//!
//! Builds a fresh population from a configuration and the arena bounds. The
//! random source is passed in; `generate_seeded` and `generate_from_entropy`
//! cover the common cases.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::agent::{Agent, NOT_SICK, Population, Status};
use super::arena::Arena;
use crate::config::Config;

/// Slowest speed an agent can be generated with for this arena
pub fn base_speed(arena: &Arena, config: &Config) -> f32 {
    arena.side() / config.speed_scale
}

/// Uniform position in `[0, side)` on both axes
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, arena: &Arena) -> Vec2 {
    let side = arena.side();
    Vec2::new(rng.random_range(0.0..side), rng.random_range(0.0..side))
}

/// Two uniform `[0, 1)` components, normalized
///
/// Both components are non-negative, so every heading starts in the first
/// quadrant. Walls and collisions spread them out after a few ticks.
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let raw = Vec2::new(rng.random::<f32>(), rng.random::<f32>());
    // (0, 0) has no heading
    raw.normalize_or(Vec2::X)
}

/// Uniform speed between the base speed and `base * minimal_speed`
pub fn random_speed<R: Rng + ?Sized>(rng: &mut R, arena: &Arena, config: &Config) -> f32 {
    let base = base_speed(arena, config);
    let scaled = base * config.minimal_speed;
    let (lo, hi) = if scaled < base { (scaled, base) } else { (base, scaled) };
    rng.random_range(lo..=hi)
}

/// Generate `config.count` agents
///
/// The first `sick_count()` agents by index start sick. The population is then
/// shuffled and the first `frozen_count()` agents are frozen, so the sick and
/// frozen subsets are independent of each other.
pub fn generate<R: Rng + ?Sized>(config: &Config, arena: &Arena, rng: &mut R) -> Population {
    config.assert_valid();

    let sick_count = config.sick_count();
    let mut agents = Vec::with_capacity(config.count);
    for i in 0..config.count {
        let sick = i < sick_count;
        agents.push(Agent::new(
            random_position(rng, arena),
            random_direction(rng),
            random_speed(rng, arena, config),
            config.radius,
            if sick { Status::Sick } else { Status::Healthy },
            if sick { config.sick_time } else { NOT_SICK },
            false,
        ));
    }

    // Shuffle and freeze
    let frozen_count = config.frozen_count();
    debug_assert_eq!(agents.len(), config.count);
    debug_assert!(agents.iter().all(|a| arena.contains(a.position)));
    agents.shuffle(rng);
    for agent in agents.iter_mut().take(frozen_count) {
        agent.frozen = true;
    }

    log::debug!(
        "Generated {} agents ({} sick, {} frozen) in arena {}",
        config.count,
        sick_count,
        frozen_count,
        arena.side()
    );

    Population::new(agents)
}

/// Generate with a reproducible seed
pub fn generate_seeded(config: &Config, arena: &Arena, seed: u64) -> Population {
    let mut rng = Pcg32::seed_from_u64(seed);
    generate(config, arena, &mut rng)
}

/// Generate with a seed taken from the system clock
pub fn generate_from_entropy(config: &Config, arena: &Arena) -> Population {
    generate_seeded(config, arena, clock_seed())
}

/// Nanoseconds since the Unix epoch, truncated to 64 bits
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config(count: usize, sick: f32, freeze: f32) -> Config {
        Config {
            count,
            sick_percentage: sick,
            freeze_percentage: freeze,
            ..Default::default()
        }
    }

    #[test]
    fn test_exact_count() {
        let arena = Arena::square(500.0);
        let pop = generate_seeded(&Config::default(), &arena, 1);
        assert_eq!(pop.len(), 100);
    }

    #[test]
    fn test_empty_population() {
        let arena = Arena::square(500.0);
        let pop = generate_seeded(&config(0, 0.5, 0.5), &arena, 1);
        assert!(pop.is_empty());
    }

    #[test]
    fn test_same_seed_same_population() {
        let arena = Arena::square(500.0);
        let a = generate_seeded(&Config::default(), &arena, 42);
        let b = generate_seeded(&Config::default(), &arena, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sick_agents_carry_timer() {
        let arena = Arena::square(500.0);
        let cfg = config(50, 0.2, 0.0);
        let pop = generate_seeded(&cfg, &arena, 7);
        for agent in &pop {
            match agent.status {
                Status::Sick => assert_eq!(agent.sick_time_remaining, cfg.sick_time),
                Status::Healthy => assert_eq!(agent.sick_time_remaining, NOT_SICK),
                Status::Recovered => panic!("no agent starts recovered"),
            }
            assert_eq!(agent.radius, cfg.radius);
        }
    }

    #[test]
    fn test_all_sick_all_frozen() {
        let arena = Arena::square(500.0);
        let pop = generate_seeded(&config(20, 1.0, 1.0), &arena, 3);
        assert!(pop.iter().all(|a| a.is_sick() && a.frozen));
    }

    #[test]
    fn test_speed_bounds_inverted_when_factor_below_one() {
        let arena = Arena::square(1000.0);
        let cfg = Config {
            minimal_speed: 0.5,
            speed_scale: 50.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(9);
        for _ in 0..200 {
            let s = random_speed(&mut rng, &arena, &cfg);
            assert!((10.0..=20.0).contains(&s));
        }
    }

    #[test]
    fn test_entropy_generation_counts() {
        let arena = Arena::square(300.0);
        let pop = generate_from_entropy(&config(30, 0.5, 0.2), &arena);
        assert_eq!(pop.count(Status::Sick), 15);
        assert_eq!(pop.iter().filter(|a| a.frozen).count(), 6);
    }

    #[test]
    #[should_panic(expected = "invalid configuration")]
    fn test_out_of_range_fraction_panics() {
        generate_seeded(&config(10, 1.2, 0.0), &Arena::square(100.0), 0);
    }

    proptest! {
        #[test]
        fn prop_generated_population_invariants(
            count in 0usize..150,
            sick in 0.0f32..=1.0,
            freeze in 0.0f32..=1.0,
            side in 20.0f32..2000.0,
            seed in any::<u64>(),
        ) {
            let cfg = config(count, sick, freeze);
            let arena = Arena::square(side);
            let pop = generate_seeded(&cfg, &arena, seed);
            let base = base_speed(&arena, &cfg);

            prop_assert_eq!(pop.len(), count);
            prop_assert_eq!(pop.count(Status::Sick), cfg.sick_count());
            prop_assert_eq!(pop.count(Status::Healthy), count - cfg.sick_count());
            prop_assert_eq!(pop.count(Status::Recovered), 0);
            prop_assert_eq!(pop.iter().filter(|a| a.frozen).count(), cfg.frozen_count());

            for agent in &pop {
                prop_assert!((agent.direction.length() - 1.0).abs() < 1e-5);
                prop_assert!(agent.direction.x >= 0.0 && agent.direction.y >= 0.0);
                prop_assert!(arena.contains(agent.position));
                prop_assert!(agent.speed >= base && agent.speed <= base * cfg.minimal_speed);
            }
        }
    }
}
