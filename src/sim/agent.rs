//! Agent entity and population container
//!
//! Agents are plain data. All behavior lives in `generate` and `step`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Sentinel for `sick_time_remaining` when the agent is not sick
pub const NOT_SICK: f32 = -1.0;

/// Disease state of an agent
///
/// Transitions only move forward: Healthy -> Sick -> Recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Healthy,
    Sick,
    Recovered,
}

impl Status {
    /// Position in the Healthy -> Sick -> Recovered order
    pub fn rank(&self) -> u8 {
        match self {
            Status::Healthy => 0,
            Status::Sick => 1,
            Status::Recovered => 2,
        }
    }
}

/// One simulated individual
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub position: Vec2,
    /// Unit vector. Sign flips keep the length, so it is never renormalized.
    pub direction: Vec2,
    /// Distance per unit time, fixed at generation
    pub speed: f32,
    pub radius: f32,
    pub status: Status,
    /// Countdown until recovery; `NOT_SICK` unless `status` is Sick
    pub sick_time_remaining: f32,
    /// Frozen agents never move but still collide and infect
    pub frozen: bool,
}

impl Agent {
    pub fn new(
        position: Vec2,
        direction: Vec2,
        speed: f32,
        radius: f32,
        status: Status,
        sick_time_remaining: f32,
        frozen: bool,
    ) -> Self {
        Self {
            position,
            direction,
            speed,
            radius,
            status,
            sick_time_remaining,
            frozen,
        }
    }

    /// A healthy, moving agent
    pub fn healthy(position: Vec2, direction: Vec2, speed: f32, radius: f32) -> Self {
        Self::new(position, direction, speed, radius, Status::Healthy, NOT_SICK, false)
    }

    /// A sick, moving agent that recovers after `sick_time` units
    pub fn sick(position: Vec2, direction: Vec2, speed: f32, radius: f32, sick_time: f32) -> Self {
        Self::new(position, direction, speed, radius, Status::Sick, sick_time, false)
    }

    /// Builder-style freeze toggle
    pub fn with_frozen(mut self, frozen: bool) -> Self {
        self.frozen = frozen;
        self
    }

    pub fn is_sick(&self) -> bool {
        self.status == Status::Sick
    }

    /// Healthy agents are the only ones that can catch the disease
    pub fn is_susceptible(&self) -> bool {
        self.status == Status::Healthy
    }

    /// Mark the agent sick if it is still susceptible. Returns true on infection.
    pub fn infect(&mut self, sick_duration: f32) -> bool {
        if !self.is_susceptible() {
            return false;
        }
        self.status = Status::Sick;
        self.sick_time_remaining = sick_duration;
        true
    }
}

/// Ordered collection of agents; an agent's identity is its index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Population {
    pub agents: Vec<Agent>,
}

impl Population {
    pub fn new(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    pub fn count(&self, status: Status) -> usize {
        self.agents.iter().filter(|a| a.status == status).count()
    }
}

impl From<Vec<Agent>> for Population {
    fn from(agents: Vec<Agent>) -> Self {
        Self::new(agents)
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Agent;
    type IntoIter = std::slice::Iter<'a, Agent>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent() -> Agent {
        Agent::healthy(Vec2::new(10.0, 10.0), Vec2::X, 1.0, 5.0)
    }

    #[test]
    fn test_infect_healthy() {
        let mut a = agent();
        assert!(a.infect(30.0));
        assert_eq!(a.status, Status::Sick);
        assert_eq!(a.sick_time_remaining, 30.0);
    }

    #[test]
    fn test_infect_does_not_reset_sick_timer() {
        let mut a = Agent::sick(Vec2::ZERO, Vec2::Y, 1.0, 5.0, 3.0);
        assert!(!a.infect(30.0));
        assert_eq!(a.sick_time_remaining, 3.0);
    }

    #[test]
    fn test_recovered_is_immune() {
        let mut a = agent();
        a.status = Status::Recovered;
        assert!(!a.infect(30.0));
        assert_eq!(a.status, Status::Recovered);
    }

    #[test]
    fn test_population_count() {
        let pop = Population::new(vec![
            agent(),
            Agent::sick(Vec2::ZERO, Vec2::X, 1.0, 5.0, 10.0),
            agent().with_frozen(true),
        ]);
        assert_eq!(pop.len(), 3);
        assert_eq!(pop.count(Status::Healthy), 2);
        assert_eq!(pop.count(Status::Sick), 1);
        assert_eq!(pop.count(Status::Recovered), 0);
        assert!(pop.agents[2].frozen);
    }

    #[test]
    fn test_status_rank_order() {
        assert!(Status::Healthy.rank() < Status::Sick.rank());
        assert!(Status::Sick.rank() < Status::Recovered.rank());
    }
}
