//! Epidemic statistics
//!
//! A `Tally` counts agents by status at one moment; `History` keeps one
//! `Sample` per tick for plotting the sick / recovered / total-sick curves.
//! Only the most recent `limit` samples are kept.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::consts::HISTORY_LIMIT;
use crate::sim::{Population, Status};

/// Agents per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub healthy: usize,
    pub sick: usize,
    pub recovered: usize,
}

impl Tally {
    pub fn of(population: &Population) -> Self {
        let mut tally = Self::default();
        for agent in population {
            match agent.status {
                Status::Healthy => tally.healthy += 1,
                Status::Sick => tally.sick += 1,
                Status::Recovered => tally.recovered += 1,
            }
        }
        tally
    }

    pub fn total(&self) -> usize {
        self.healthy + self.sick + self.recovered
    }

    /// Everyone who has caught the disease so far
    pub fn ever_sick(&self) -> usize {
        self.sick + self.recovered
    }

    /// No one left to spread the disease
    pub fn is_over(&self) -> bool {
        self.sick == 0
    }
}

/// One point on the epidemic curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub tick: u64,
    pub sick: usize,
    pub recovered: usize,
    pub total_sick: usize,
}

/// Epidemic curve since the last regeneration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    pub samples: VecDeque<Sample>,
    #[serde(skip, default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    HISTORY_LIMIT
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }

    /// Keep at most `limit` samples, dropping the oldest first
    pub fn with_limit(limit: usize) -> Self {
        assert!(limit > 0, "history limit must be positive");
        Self {
            samples: VecDeque::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn record(&mut self, tick: u64, tally: &Tally) {
        if self.samples.len() == self.limit {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample {
            tick,
            sick: tally.sick,
            recovered: tally.recovered,
            total_sick: tally.ever_sick(),
        });
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Earliest sample with the most sick agents
    pub fn peak_sick(&self) -> Option<&Sample> {
        self.samples
            .iter()
            .fold(None, |best: Option<&Sample>, s| match best {
                Some(b) if b.sick >= s.sick => Some(b),
                _ => Some(s),
            })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
