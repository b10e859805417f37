//! Vertex and instance types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::sim::{Agent, Status};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// One filled circle per agent, laid out for instanced drawing
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub _pad: f32,
    pub color: [f32; 4],
}

impl CircleInstance {
    pub fn new(center: Vec2, radius: f32, color: [f32; 4]) -> Self {
        Self {
            center: center.to_array(),
            radius,
            _pad: 0.0,
            color,
        }
    }

    pub fn from_agent(agent: &Agent) -> Self {
        Self::new(agent.position, agent.radius, colors::status(agent.status))
    }
}

/// Colors for simulation elements
pub mod colors {
    use super::Status;

    pub const HEALTHY: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const SICK: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const RECOVERED: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const ARENA_EDGE: [f32; 4] = [0.3, 0.3, 0.3, 1.0];

    pub fn status(status: Status) -> [f32; 4] {
        match status {
            Status::Healthy => HEALTHY,
            Status::Sick => SICK,
            Status::Recovered => RECOVERED,
        }
    }
}
