use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::agent::Agent;
use crate::error::MatchError;
use crate::game::{BoardConfig, Cell, GameOutcome, GameSession, Player};

/// A finished game between two agents.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub moves: Vec<(Player, Cell)>,
    pub outcome: GameOutcome,
    pub session: GameSession,
}

/// Play one game to completion. `agent_a` plays `Player::A`.
///
/// Each move gets its own deadline of `move_budget` from the moment the agent
/// is asked. `on_move` sees the session after every placement.
pub fn play_match(
    config: BoardConfig,
    first: Player,
    agent_a: &mut dyn Agent,
    agent_b: &mut dyn Agent,
    move_budget: Duration,
    mut on_move: impl FnMut(&GameSession),
) -> Result<MatchRecord, MatchError> {
    let mut session = GameSession::new(config, first);
    let mut moves = Vec::new();

    while !session.is_terminal() {
        let player = session.current_player();
        let agent: &mut dyn Agent = match player {
            Player::A => &mut *agent_a,
            Player::B => &mut *agent_b,
        };
        let deadline = Instant::now() + move_budget;
        let cell = agent
            .select_move(session.board(), player, deadline)
            .ok_or_else(|| MatchError::NoMove(agent.name().to_string()))?;
        if Instant::now() > deadline {
            debug!(agent = agent.name(), "move returned after deadline");
        }
        session
            .play_cell(cell)
            .map_err(|source| MatchError::IllegalMove {
                agent: agent.name().to_string(),
                cell,
                source,
            })?;
        moves.push((player, cell));
        on_move(&session);
    }

    let outcome = session.outcome().ok_or(MatchError::MissingOutcome)?;
    info!(?outcome, moves = moves.len(), "match finished");
    Ok(MatchRecord {
        moves,
        outcome,
        session,
    })
}
