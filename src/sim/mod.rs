//! Simulation engine
//!
//! Everything that decides where agents go and who gets sick lives here:
//! - Single-threaded, fixed timestep
//! - Random source injected into generation only; the step is deterministic
//! - Stable iteration order (by index)
//! - No rendering or platform dependencies

pub mod agent;
pub mod arena;
pub mod collision;
pub mod generate;
pub mod step;

pub use agent::{Agent, NOT_SICK, Population, Status};
pub use arena::Arena;
pub use collision::{bounce, circles_touch, reflect_off_walls, wall_contact};
pub use generate::{generate, generate_from_entropy, generate_seeded};
pub use step::{StepReport, step};
