//! Automated players and the loop that pits two of them against each other.

mod agent;
pub mod arena;
mod first_free;
mod random;

use serde::{Deserialize, Serialize};

pub use agent::Agent;
pub use arena::{play_match, MatchRecord};
pub use first_free::FirstFreeAgent;
pub use random::RandomAgent;

/// Agent selector used by the config file and CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    FirstFree,
    Random,
}

impl AgentKind {
    /// Build the agent. `seed` makes random agents reproducible.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            AgentKind::FirstFree => Box::new(FirstFreeAgent),
            AgentKind::Random => match seed {
                Some(seed) => Box::new(RandomAgent::with_seed(seed)),
                None => Box::new(RandomAgent::new()),
            },
        }
    }
}
