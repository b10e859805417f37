//! Rendering adapter
//!
//! The engine never draws. A UI implements `Canvas` (or uploads
//! `CircleInstance`s to the GPU) and `View` keeps the last population snapshot
//! it was handed.

pub mod shapes;
pub mod vertex;

use std::sync::Arc;

use glam::Vec2;

pub use shapes::{arena_outline, circle, population_mesh};
pub use vertex::{CircleInstance, Vertex, colors};

use crate::sim::{Arena, Population};

/// A 2D drawing surface
pub trait Canvas {
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: [f32; 4]);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
}

/// Draw the arena edges, then every agent colored by status
pub fn paint<C: Canvas + ?Sized>(canvas: &mut C, arena: &Arena, population: &Population) {
    for [from, to] in arena_outline(arena) {
        canvas.draw_line(from, to, colors::ARENA_EDGE);
    }
    for agent in population {
        canvas.fill_circle(agent.position, agent.radius, colors::status(agent.status));
    }
}

/// Per-agent instance data ready for a GPU buffer
pub fn instances(population: &Population) -> Vec<CircleInstance> {
    population.iter().map(CircleInstance::from_agent).collect()
}

/// Holds the snapshot a drawing surface shows
#[derive(Debug, Clone)]
pub struct View {
    arena: Arena,
    population: Option<Arc<Population>>,
}

impl View {
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            population: None,
        }
    }

    pub fn set_arena(&mut self, arena: Arena) {
        self.arena = arena;
    }

    /// Swap in a new snapshot
    pub fn redraw(&mut self, population: Arc<Population>) {
        self.population = Some(population);
    }

    pub fn snapshot(&self) -> Option<&Arc<Population>> {
        self.population.as_ref()
    }

    /// Paint the edges and, once a snapshot exists, the agents
    pub fn paint<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        match &self.population {
            Some(population) => paint(canvas, &self.arena, population),
            None => paint(canvas, &self.arena, &Population::default()),
        }
    }
}
