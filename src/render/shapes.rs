//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::{Arena, Population};

/// The four arena edges as line segments: left, top, right, bottom
pub fn arena_outline(arena: &Arena) -> [[Vec2; 2]; 4] {
    let top_left = arena.min();
    let bottom_right = arena.max();
    let top_right = Vec2::new(bottom_right.x, top_left.y);
    let bottom_left = Vec2::new(top_left.x, bottom_right.y);
    [
        [bottom_left, top_left],
        [top_left, top_right],
        [top_right, bottom_right],
        [bottom_right, bottom_left],
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Triangle list for the whole population, one fan per agent
pub fn population_mesh(population: &Population, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(population.len() * (segments * 3) as usize);
    for agent in population {
        vertices.extend(circle(
            agent.position,
            agent.radius,
            colors::status(agent.status),
            segments,
        ));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Agent;

    #[test]
    fn test_outline_is_closed() {
        let edges = arena_outline(&Arena::square(100.0));
        for i in 0..4 {
            assert_eq!(edges[i][1], edges[(i + 1) % 4][0]);
        }
        assert_eq!(edges[1][1], Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_circle_vertices_on_rim() {
        let verts = circle(Vec2::new(10.0, 10.0), 4.0, colors::HEALTHY, 8);
        assert_eq!(verts.len(), 24);
        for tri in verts.chunks(3) {
            assert_eq!(tri[0].position, [10.0, 10.0]);
            let rim = Vec2::from(tri[1].position);
            assert!((rim.distance(Vec2::new(10.0, 10.0)) - 4.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_population_mesh_colors() {
        let pop = Population::new(vec![
            Agent::healthy(Vec2::ZERO, Vec2::X, 1.0, 2.0),
            Agent::sick(Vec2::ONE, Vec2::X, 1.0, 2.0, 5.0),
        ]);
        let mesh = population_mesh(&pop, 6);
        assert_eq!(mesh.len(), 36);
        assert_eq!(mesh[0].color, colors::HEALTHY);
        assert_eq!(mesh[18].color, colors::SICK);
    }
}
