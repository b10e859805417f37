//! Simulation driver
//!
//! Owns the configuration, the arena and the current population, and does what
//! a UI needs around the engine: start/stop, regenerate on any parameter change,
//! and hand out population snapshots for drawing.
//!
//! The population sits behind an `Arc`. A renderer holding a snapshot keeps a
//! consistent view: stepping goes through `Arc::make_mut`, which clones the
//! population only while an older snapshot is still alive.

use std::sync::Arc;
use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::{Config, ConfigError};
use crate::consts::HISTORY_LIMIT;
use crate::sim::generate::clock_seed;
use crate::sim::{Arena, Population, StepReport, generate, step};
use crate::stats::{History, Tally};

pub struct Driver {
    config: Config,
    arena: Arena,
    population: Arc<Population>,
    rng: Pcg32,
    running: bool,
    ticks: u64,
    history: History,
}

impl Driver {
    /// Create a stopped driver with a clock-seeded random source
    pub fn new(config: Config, arena: Arena) -> Self {
        Self::with_seed(config, arena, clock_seed())
    }

    /// Create a stopped driver whose populations are reproducible
    pub fn with_seed(config: Config, arena: Arena, seed: u64) -> Self {
        let mut driver = Self {
            config,
            arena,
            population: Arc::new(Population::default()),
            rng: Pcg32::seed_from_u64(seed),
            running: false,
            ticks: 0,
            history: History::with_limit(HISTORY_LIMIT),
        };
        driver.regenerate();
        log::info!("Driver created with seed {}", seed);
        driver
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Shared snapshot of the current population
    pub fn population(&self) -> Arc<Population> {
        Arc::clone(&self.population)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks since the last regeneration
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tally(&self) -> Tally {
        Tally::of(&self.population)
    }

    /// Wall-clock time between ticks for a live loop
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.config.tick_interval_ms)
    }

    /// Returns false if already running
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        log::info!("Simulation started at tick {}", self.ticks);
        true
    }

    /// Returns false if already stopped
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        log::info!("Simulation stopped at tick {}", self.ticks);
        true
    }

    /// Timer callback: advance one tick if running
    pub fn tick(&mut self) -> Option<StepReport> {
        if !self.running {
            return None;
        }
        Some(self.advance())
    }

    /// Advance one tick regardless of the running state
    pub fn advance(&mut self) -> StepReport {
        let population = Arc::make_mut(&mut self.population);
        let report = step(
            population,
            &self.arena,
            self.config.sick_time,
            self.config.delta_t,
        );
        self.ticks += 1;

        let tally = Tally::of(&self.population);
        self.history.record(self.ticks, &tally);
        log::debug!(
            "tick {}: healthy={} sick={} recovered={}",
            self.ticks,
            tally.healthy,
            tally.sick,
            tally.recovered
        );
        report
    }

    /// Stop and build a fresh population from the current parameters
    pub fn recreate(&mut self) {
        self.stop();
        self.regenerate();
    }

    /// Replace every parameter at once
    ///
    /// A rejected configuration leaves the driver untouched: the old parameters,
    /// population and running state all stay.
    pub fn set_config(&mut self, config: Config) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.recreate();
        Ok(())
    }

    /// The drawing surface changed size
    pub fn set_arena(&mut self, arena: Arena) {
        self.arena = arena;
        self.recreate();
    }

    pub fn set_count(&mut self, count: usize) -> Result<(), ConfigError> {
        self.set_config(Config {
            count,
            ..self.config.clone()
        })
    }

    pub fn set_sick_percentage(&mut self, fraction: f32) -> Result<(), ConfigError> {
        self.set_config(Config {
            sick_percentage: fraction,
            ..self.config.clone()
        })
    }

    pub fn set_freeze_percentage(&mut self, fraction: f32) -> Result<(), ConfigError> {
        self.set_config(Config {
            freeze_percentage: fraction,
            ..self.config.clone()
        })
    }

    pub fn set_radius(&mut self, radius: f32) -> Result<(), ConfigError> {
        self.set_config(Config {
            radius,
            ..self.config.clone()
        })
    }

    pub fn set_sick_time(&mut self, sick_time: f32) -> Result<(), ConfigError> {
        self.set_config(Config {
            sick_time,
            ..self.config.clone()
        })
    }

    pub fn set_minimal_speed(&mut self, minimal_speed: f32) -> Result<(), ConfigError> {
        self.set_config(Config {
            minimal_speed,
            ..self.config.clone()
        })
    }

    fn regenerate(&mut self) {
        self.population = Arc::new(generate(&self.config, &self.arena, &mut self.rng));
        self.ticks = 0;
        self.history.clear();
        let tally = Tally::of(&self.population);
        self.history.record(0, &tally);
        log::info!(
            "Regenerated {} agents ({} sick) in {}x{} arena",
            tally.total(),
            tally.sick,
            self.arena.side(),
            self.arena.side()
        );
    }
}
