//! Fixed timestep simulation step
//!
//! Advances every agent by one tick, in collection order. Each agent's update
//! sees the effects of the agents before it in the same tick (moved positions,
//! flipped directions, new infections).

use glam::Vec2;

use super::agent::{Agent, Population, Status};
use super::arena::Arena;
use super::collision::{bounce, circles_touch, reflect_off_walls};

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Agent-agent contacts, counted once per acting agent per partner
    pub collisions: u32,
    /// Wall reflections, counted per axis
    pub wall_reflections: u32,
    pub infections: u32,
    pub recoveries: u32,
}

/// Advance the population by one tick of `delta_t`
///
/// Per agent:
/// 1. A sick agent's timer decays and it recovers once the timer is negative.
/// 2. Frozen agents stop here.
/// 3. A candidate position is taken along the current direction.
/// 4. The candidate is reflected off the arena walls.
/// 5. Every other agent within `2 * radius` of the candidate bounces both
///    agents and may pass on the infection. The scan never exits early.
/// 6. The candidate becomes the stored position.
///
/// Panics if a sick agent enters the step with a negative timer.
pub fn step(
    population: &mut Population,
    arena: &Arena,
    sick_duration: f32,
    delta_t: f32,
) -> StepReport {
    let mut report = StepReport::default();
    let agents = population.agents.as_mut_slice();

    for i in 0..agents.len() {
        if decay_sickness(&mut agents[i], delta_t) {
            report.recoveries += 1;
        }

        if agents[i].frozen {
            continue;
        }

        let stride = agents[i].speed * delta_t;
        let mut candidate = candidate_position(&agents[i], delta_t);

        // Walls
        {
            let agent = &mut agents[i];
            let hit = reflect_off_walls(
                &mut candidate,
                &mut agent.direction,
                stride,
                agent.radius,
                arena,
            );
            report.wall_reflections += hit.x as u32 + hit.y as u32;
        }

        // Other agents
        for j in 0..agents.len() {
            if j == i {
                continue;
            }
            let (agent, other) = pair_mut(agents, i, j);
            if !circles_touch(candidate, other.position, agent.radius) {
                continue;
            }
            report.collisions += 1;

            bounce(&mut candidate, &mut agent.direction, stride);
            agent.position = candidate;
            other.direction = -other.direction;

            report.infections += spread_infection(agent, other, sick_duration);
        }

        agents[i].position = candidate;
    }

    if report.infections > 0 || report.recoveries > 0 {
        log::trace!(
            "step: {} infections, {} recoveries, {} collisions",
            report.infections,
            report.recoveries,
            report.collisions
        );
    }

    report
}

/// Count down a sick agent's timer. Returns true if the agent recovered.
fn decay_sickness(agent: &mut Agent, delta_t: f32) -> bool {
    if agent.status != Status::Sick {
        return false;
    }
    assert!(
        agent.sick_time_remaining >= 0.0,
        "sick agent entered step with negative timer {}",
        agent.sick_time_remaining
    );
    agent.sick_time_remaining -= delta_t;
    if agent.sick_time_remaining < 0.0 {
        // Timer is left as is
        agent.status = Status::Recovered;
        return true;
    }
    false
}

/// If either agent is sick, infect whichever of the two is still healthy.
/// Returns the number of new infections.
fn spread_infection(a: &mut Agent, b: &mut Agent, sick_duration: f32) -> u32 {
    if !a.is_sick() && !b.is_sick() {
        return 0;
    }
    a.infect(sick_duration) as u32 + b.infect(sick_duration) as u32
}

/// Mutable references to two distinct agents
fn pair_mut(agents: &mut [Agent], i: usize, j: usize) -> (&mut Agent, &mut Agent) {
    debug_assert_ne!(i, j);
    if i < j {
        let (lo, hi) = agents.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = agents.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    }
}

/// Position an agent would reach this tick before any reflection
pub fn candidate_position(agent: &Agent, delta_t: f32) -> Vec2 {
    agent.position + agent.direction * agent.speed * delta_t
}
