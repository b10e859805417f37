//! Parameter widgets
//!
//! Maps integer slider positions and button presses onto the driver. Every
//! parameter change regenerates the population and stops the simulation.

use crate::config::{Config, ConfigError};
use crate::consts::SICK_TIME_UNIT;
use crate::driver::Driver;

/// Integer slider range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    pub min: i32,
    pub max: i32,
}

impl Slider {
    pub const PERCENT: Slider = Slider { min: 0, max: 100 };

    pub fn new(min: i32, max: i32) -> Self {
        assert!(max > min, "slider range must be non-empty");
        Self { min, max }
    }

    /// Slider value as a fraction of the slider's span
    pub fn fraction(&self, value: i32) -> f32 {
        value as f32 / (self.max - self.min) as f32
    }
}

/// A parameter slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Number,
    SickPercentage(Slider),
    FreezePercentage(Slider),
    Radius,
    /// One step is `SICK_TIME_UNIT` time units
    SickTime,
    Speed,
}

impl Control {
    pub fn as_str(&self) -> &'static str {
        match self {
            Control::Number => "number",
            Control::SickPercentage(_) => "sick_percentage",
            Control::FreezePercentage(_) => "freeze_percentage",
            Control::Radius => "radius",
            Control::SickTime => "sick_time",
            Control::Speed => "speed",
        }
    }

    /// Look up a control by name; percentage controls use a 0-100 slider
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "number" | "count" => Some(Control::Number),
            "sick_percentage" | "sick" => Some(Control::SickPercentage(Slider::PERCENT)),
            "freeze_percentage" | "freeze" => Some(Control::FreezePercentage(Slider::PERCENT)),
            "radius" => Some(Control::Radius),
            "sick_time" => Some(Control::SickTime),
            "speed" | "minimal_speed" => Some(Control::Speed),
            _ => None,
        }
    }

    /// Write a slider value into a configuration without regenerating
    pub fn update(&self, config: &mut Config, value: i32) {
        match self {
            Control::Number => config.count = value.max(0) as usize,
            Control::SickPercentage(slider) => config.sick_percentage = slider.fraction(value),
            Control::FreezePercentage(slider) => config.freeze_percentage = slider.fraction(value),
            Control::Radius => config.radius = value as f32,
            Control::SickTime => config.sick_time = SICK_TIME_UNIT * value as f32,
            Control::Speed => config.minimal_speed = value as f32,
        }
    }

    /// Apply a slider value to the driver
    ///
    /// Values the configuration rejects leave the driver as it was.
    pub fn apply(&self, driver: &mut Driver, value: i32) -> Result<(), ConfigError> {
        let mut config = driver.config().clone();
        self.update(&mut config, value);
        driver.set_config(config).inspect_err(|e| {
            log::warn!("{} -> {} rejected: {}", self.as_str(), value, e);
        })?;
        log::debug!("{} -> {}", self.as_str(), value);
        Ok(())
    }
}

/// Run control buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Start,
    Stop,
    Recreate,
}

impl Button {
    pub fn press(&self, driver: &mut Driver) {
        match self {
            Button::Start => {
                driver.start();
            }
            Button::Stop => {
                driver.stop();
            }
            Button::Recreate => driver.recreate(),
        }
    }

    /// Whether the button is clickable in the driver's current state
    pub fn enabled(&self, driver: &Driver) -> bool {
        match self {
            Button::Start => !driver.is_running(),
            Button::Stop => driver.is_running(),
            Button::Recreate => true,
        }
    }
}
