//! Contagion - colliding agents spreading a disease on a square arena
//!
//! Core modules:
//! - `sim`: Simulation engine (agents, generation, per-tick step)
//! - `config`: Tunable parameters with JSON load/save
//! - `stats`: Status tallies and the epidemic curve
//! - `driver`: Start/stop/regenerate controller for a UI or headless loop
//! - `controls`: Slider value mapping for parameter widgets
//! - `render`: Toolkit-neutral drawing adapter

pub mod config;
pub mod controls;
pub mod driver;
pub mod render;
pub mod sim;
pub mod stats;

pub use config::{Config, ConfigError};
pub use driver::Driver;
pub use stats::{History, Sample, Tally};

/// Simulation defaults
pub mod consts {
    /// Arena side divided by this gives the slowest generated speed
    pub const SPEED_SCALE: f32 = 10_000.0;
    /// Simulated time per tick
    pub const DELTA_T: f32 = 1.0;
    /// One step of the sickness-duration slider, in time units
    pub const SICK_TIME_UNIT: f32 = 10.0;
    /// Default sickness duration (50 slider steps)
    pub const SICK_TIME: f32 = SICK_TIME_UNIT * 50.0;
    /// Driver tick interval in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 10;
    /// Samples kept in the epidemic curve, about 17 minutes at the default tick rate
    pub const HISTORY_LIMIT: usize = 100_000;

    /// Population defaults
    pub const AGENT_COUNT: usize = 100;
    pub const AGENT_RADIUS: f32 = 5.0;
    pub const SICK_PERCENTAGE: f32 = 0.1;
    pub const FREEZE_PERCENTAGE: f32 = 0.1;
    pub const MINIMAL_SPEED: f32 = 10.0;
}
