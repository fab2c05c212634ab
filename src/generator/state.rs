// src/generator/state.rs

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

/// The stage a generation run is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    Idle,
    Partitioning,
    PlacingRooms,
    Walking,
    Done,
}

impl Phase {
    /// The phase that follows once this one completes.
    pub fn next(self) -> Phase {
        match self {
            Phase::Idle => Phase::Partitioning,
            Phase::Partitioning => Phase::PlacingRooms,
            Phase::PlacingRooms => Phase::Walking,
            Phase::Walking | Phase::Done => Phase::Done,
        }
    }

    /// Progress reported once this phase has completed.
    pub fn checkpoint(self) -> f32 {
        match self {
            Phase::Idle => 0.0,
            Phase::Partitioning => 0.33,
            Phase::PlacingRooms => 0.66,
            Phase::Walking | Phase::Done => 1.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Partitioning => "Partitioning",
            Phase::PlacingRooms => "PlacingRooms",
            Phase::Walking => "Walking",
            Phase::Done => "Done",
        }
    }
}

/// Progress of the current (or last) generation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationState {
    pub is_generating: bool,
    pub phase: Phase,
    pub progress: f32,
}

impl GenerationState {
    pub fn idle() -> Self {
        GenerationState {
            is_generating: false,
            phase: Phase::Idle,
            progress: 0.0,
        }
    }

    /// State at the start of a run.
    pub fn started() -> Self {
        GenerationState {
            is_generating: true,
            phase: Phase::Partitioning,
            progress: 0.0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }
}

impl Default for GenerationState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Read-only, cloneable view of a generator's state. Safe to poll from
/// another thread at any rate.
#[derive(Debug, Clone)]
pub struct StateHandle {
    inner: Arc<RwLock<GenerationState>>,
}

impl StateHandle {
    pub(crate) fn new(inner: Arc<RwLock<GenerationState>>) -> Self {
        StateHandle { inner }
    }

    /// A consistent copy of the state.
    pub fn snapshot(&self) -> GenerationState {
        *self.inner.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_sequence() {
        let mut phase = Phase::Idle;
        let mut seen = vec![phase];
        while phase != Phase::Done {
            phase = phase.next();
            seen.push(phase);
        }
        assert_eq!(
            seen,
            vec![Phase::Idle, Phase::Partitioning, Phase::PlacingRooms, Phase::Walking, Phase::Done]
        );
        assert_eq!(Phase::Done.next(), Phase::Done);
    }

    #[test]
    fn test_checkpoints_increase() {
        let checkpoints: Vec<f32> = [Phase::Partitioning, Phase::PlacingRooms, Phase::Walking]
            .iter()
            .map(|p| p.checkpoint())
            .collect();
        assert_eq!(checkpoints, vec![0.33, 0.66, 1.0]);
    }

    #[test]
    fn test_handle_reads_shared_state() {
        let shared = Arc::new(RwLock::new(GenerationState::idle()));
        let handle = StateHandle::new(shared.clone());
        *shared.write() = GenerationState::started();
        assert_eq!(handle.snapshot(), GenerationState::started());
        assert!(!handle.snapshot().is_done());
    }
}
