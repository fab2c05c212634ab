//! # Generation Orchestrator
//!
//! [`MapGenerator`] owns a generation run from start to finish. A run is
//! started from a snapshot of [`MapSettings`] and then moved through its
//! phases one [`step`](MapGenerator::step) at a time:
//!
//! 1. **Partitioning** splits the map volume into BSP leaves.
//! 2. **PlacingRooms** carves one room per leaf and hands each to the sink.
//! 3. **Walking** runs the corridor walkers and hands each segment to the sink.
//!
//! Finishing a phase bumps the shared progress to its checkpoint
//! (0.33, 0.66, 1.0). The progress lives behind an `Arc<RwLock<_>>` so a
//! [`StateHandle`] on another thread always reads a consistent snapshot.
//!
//! Every stage draws from its own fork of the run's master seed, so a seed
//! replays the same map regardless of thread count.

use std::sync::Arc;

use log::{debug, info, warn};
use parking_lot::RwLock;

use crate::bsp::BspPartitioner;
use crate::document::{GeneratedMap, PlacementSink};
use crate::generator::state::{GenerationState, Phase, StateHandle};
use crate::generator::{CorridorWalker, GenerationError, MapSettings, RoomPlacer, StageError};
use crate::map::{CorridorSegment, Room, TemplateHandle};
use crate::utils::{RandomSource, Volume};

// Streams forked off the master seed, one per stage.
const PARTITION_STREAM: u64 = 0;
const ROOM_STREAM: u64 = 1;
const WALKER_STREAM: u64 = 2;

/// Identifies one generation run of a [`MapGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(pub u64);

/// A run in progress: the settings snapshot, the stages built from it, and
/// the outputs handed from one phase to the next.
struct Run {
    id: RunId,
    settings: MapSettings,
    room_template: TemplateHandle,
    corridor_template: TemplateHandle,
    rng: RandomSource,
    partitioner: BspPartitioner,
    placer: RoomPlacer,
    walker: CorridorWalker,
    leaves: Vec<Volume>,
    rooms: Vec<Room>,
    corridors: Vec<CorridorSegment>,
}

/// Drives a generation run through its phases:
/// `Idle -> Partitioning -> PlacingRooms -> Walking -> Done`.
///
/// Each [`step`](MapGenerator::step) runs one phase to completion, the same
/// way a host would tick it once per frame. [`run_to_completion`] does all
/// of them at once.
///
/// Calling [`start_generation`](MapGenerator::start_generation) while a run
/// is active is rejected with [`GenerationError::AlreadyGenerating`]. A
/// finished or failed run is simply replaced.
///
/// [`run_to_completion`]: MapGenerator::run_to_completion
pub struct MapGenerator {
    state: Arc<RwLock<GenerationState>>,
    run: Option<Run>,
    runs_started: u64,
}

impl MapGenerator {
    pub fn new() -> Self {
        MapGenerator {
            state: Arc::new(RwLock::new(GenerationState::idle())),
            run: None,
            runs_started: 0,
        }
    }

    /// A consistent snapshot of the current progress.
    pub fn state(&self) -> GenerationState {
        *self.state.read()
    }

    /// A handle another thread can keep polling.
    pub fn state_handle(&self) -> StateHandle {
        StateHandle::new(Arc::clone(&self.state))
    }

    /// Validates and snapshots `settings`, then resets the state to the
    /// start of a new run. Nothing is generated until the run is stepped.
    pub fn start_generation(&mut self, settings: MapSettings) -> Result<RunId, GenerationError> {
        if self.state.read().is_generating {
            return Err(GenerationError::AlreadyGenerating);
        }
        let (room_template, corridor_template) = match settings.validated_templates() {
            Ok(templates) => templates,
            Err(err) => {
                warn!("Rejected map settings: {}", err);
                return Err(err.into());
            }
        };
        let partitioner = BspPartitioner::from_settings(&settings);
        let placer = RoomPlacer::from_settings(&settings);
        let walker = CorridorWalker::from_settings(&settings);
        let seed = settings.seed.unwrap_or_else(rand::random);

        self.runs_started += 1;
        let id = RunId(self.runs_started);
        info!("Starting map generation run {} (seed {})", id.0, seed);

        self.run = Some(Run {
            id,
            settings,
            room_template,
            corridor_template,
            rng: RandomSource::seeded(seed),
            partitioner,
            placer,
            walker,
            leaves: Vec::new(),
            rooms: Vec::new(),
            corridors: Vec::new(),
        });
        *self.state.write() = GenerationState::started();
        Ok(id)
    }

    /// Runs the current phase to completion and advances to the next one.
    /// Returns the phase the run is in afterwards.
    ///
    /// Rooms are handed to `sink` when room placement completes, corridors
    /// when walking completes. On a stage error the run stops, `phase` stays
    /// at the failed stage and `is_generating` drops to false.
    pub fn step<S: PlacementSink + ?Sized>(&mut self, sink: &mut S) -> Result<Phase, GenerationError> {
        let current = self.state();
        if !current.is_generating {
            return Err(GenerationError::NotStarted);
        }
        let run = self.run.as_mut().ok_or(GenerationError::NotStarted)?;

        let outcome = match current.phase {
            Phase::Partitioning => {
                let mut rng = run.rng.fork(PARTITION_STREAM);
                run.leaves = run.partitioner.leaf_volumes(run.settings.map_volume(), &mut rng);
                debug!("Run {}: {} leaf partitions", run.id.0, run.leaves.len());
                Ok(())
            }
            Phase::PlacingRooms => run.placer.place(&run.leaves, &run.rng.fork(ROOM_STREAM)).map(|rooms| {
                for room in &rooms {
                    sink.place_room(room.placement(run.room_template));
                }
                run.rooms = rooms;
            }),
            Phase::Walking => run.walker.walk(&run.rooms, &run.rng.fork(WALKER_STREAM)).map(|corridors| {
                for corridor in &corridors {
                    sink.place_corridor(corridor.placement(run.corridor_template));
                }
                run.corridors = corridors;
            }),
            Phase::Idle | Phase::Done => return Err(GenerationError::NotStarted),
        };

        match outcome {
            Ok(()) => Ok(self.advance(current.phase)),
            Err(source) => Err(self.abort(current.phase, source)),
        }
    }

    /// Steps until the run is done and returns what it produced. A run that
    /// was already stepped to the end is returned as is.
    pub fn run_to_completion<S: PlacementSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<GeneratedMap, GenerationError> {
        while !self.state().is_done() {
            self.step(&mut *sink)?;
        }
        self.take_map().ok_or(GenerationError::NotStarted)
    }

    /// Starts a run with `settings` and drives it to the end.
    pub fn generate<S: PlacementSink + ?Sized>(
        &mut self,
        settings: MapSettings,
        sink: &mut S,
    ) -> Result<GeneratedMap, GenerationError> {
        self.start_generation(settings)?;
        self.run_to_completion(sink)
    }

    /// Takes the output of a finished run. `None` until the run is done.
    pub fn take_map(&mut self) -> Option<GeneratedMap> {
        if !self.state().is_done() {
            return None;
        }
        self.run.take().map(|run| GeneratedMap {
            seed: run.rng.seed(),
            settings: run.settings,
            leaves: run.leaves,
            rooms: run.rooms,
            corridors: run.corridors,
        })
    }

    fn advance(&mut self, completed: Phase) -> Phase {
        let next = completed.next();
        let mut state = self.state.write();
        state.phase = next;
        state.progress = completed.checkpoint();
        if next == Phase::Done {
            state.is_generating = false;
        }
        drop(state);

        if next == Phase::Done {
            info!("Map generation complete");
        } else {
            debug!("Map generation progress: {:.0}%", completed.checkpoint() * 100.0);
        }
        next
    }

    fn abort(&mut self, phase: Phase, source: StageError) -> GenerationError {
        self.state.write().is_generating = false;
        warn!("Map generation aborted during {}: {}", phase.name(), source);
        GenerationError::Stage { phase, source }
    }
}

impl Default for MapGenerator {
    fn default() -> Self {
        Self::new()
    }
}
