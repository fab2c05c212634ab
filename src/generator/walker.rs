//! # Corridor Walkers
//!
//! Corridors are carved by random-walk agents. Each agent starts at the
//! minimum corner of a randomly chosen room and takes `walk_steps` unit
//! moves of `step_size` along one of the four floor directions. A move that
//! would leave the map is dropped without a segment and the agent stays put,
//! so an agent never carves more than `walk_steps` segments.
//!
//! Agents share nothing but the room list. Each one walks with its own fork
//! of the stage's random source, which keeps the output identical however
//! rayon schedules them.

use log::debug;
use rayon::prelude::*;

use crate::generator::{MapSettings, StageError};
use crate::map::{CorridorSegment, Room};
use crate::utils::{RandomSource, Vec3};

/// One of the four floor-plane step directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North, // +Z
    South, // -Z
    East,  // +X
    West,  // -X
}

impl Direction {
    /// Maps a `[0, 1)` draw to a direction, a quarter of the range each.
    pub fn from_draw(draw: f32) -> Self {
        if draw < 0.25 {
            Direction::North
        } else if draw < 0.5 {
            Direction::South
        } else if draw < 0.75 {
            Direction::East
        } else {
            Direction::West
        }
    }

    pub fn vector(&self) -> Vec3 {
        match self {
            Direction::North => Vec3::new(0.0, 0.0, 1.0),
            Direction::South => Vec3::new(0.0, 0.0, -1.0),
            Direction::East => Vec3::new(1.0, 0.0, 0.0),
            Direction::West => Vec3::new(-1.0, 0.0, 0.0),
        }
    }
}

/// Carves corridors with independent random-walk agents started from rooms.
///
/// This is a corridor carver, not a connector: rooms may stay unreachable and
/// `Room::connected` is left untouched.
#[derive(Debug, Clone, Copy)]
pub struct CorridorWalker {
    walker_count: u32,
    walk_steps: u32,
    step_size: f32,
    map_size: Vec3,
}

/// A single agent: its current position and its own random source.
#[derive(Debug, Clone)]
pub struct Walker {
    pub position: Vec3,
    rng: RandomSource,
}

impl Walker {
    pub fn new(position: Vec3, rng: RandomSource) -> Self {
        Walker { position, rng }
    }

    /// Takes one step of `step_size`. Steps leaving `[0, map.x] x [0, map.z]`
    /// are dropped and the walker stays put.
    pub fn step(&mut self, step_size: f32, map_size: Vec3) -> Option<CorridorSegment> {
        let direction = Direction::from_draw(self.rng.next_float());
        let candidate = self.position + direction.vector() * step_size;
        if !in_bounds(candidate, map_size) {
            return None;
        }
        let segment = CorridorSegment::new(self.position, candidate);
        self.position = candidate;
        Some(segment)
    }
}

fn in_bounds(p: Vec3, map_size: Vec3) -> bool {
    p.x >= 0.0 && p.x <= map_size.x && p.z >= 0.0 && p.z <= map_size.z
}

impl CorridorWalker {
    pub fn new(walker_count: u32, walk_steps: u32, step_size: f32, map_size: Vec3) -> Self {
        CorridorWalker {
            walker_count,
            walk_steps,
            step_size,
            map_size,
        }
    }

    pub fn from_settings(settings: &MapSettings) -> Self {
        Self::new(settings.walker_count, settings.walk_steps, settings.step_size, settings.map_size)
    }

    pub fn is_in_bounds(&self, p: Vec3) -> bool {
        in_bounds(p, self.map_size)
    }

    /// Runs every agent and returns their segments, agent by agent.
    ///
    /// Agent `i` uses `rng.fork(i)` both to pick its start room and to walk.
    pub fn walk(&self, rooms: &[Room], rng: &RandomSource) -> Result<Vec<CorridorSegment>, StageError> {
        if self.walker_count == 0 {
            return Ok(Vec::new());
        }
        if rooms.is_empty() {
            return Err(StageError::NoRooms { walkers: self.walker_count });
        }

        let per_agent: Vec<Vec<CorridorSegment>> = (0..self.walker_count)
            .into_par_iter()
            .map(|agent| self.walk_agent(rooms, rng.fork(agent as u64)))
            .collect();
        let segments: Vec<CorridorSegment> = per_agent.into_iter().flatten().collect();

        debug!(
            "{} walkers carved {} of {} possible segments",
            self.walker_count,
            segments.len(),
            self.walker_count as u64 * self.walk_steps as u64
        );
        Ok(segments)
    }

    fn walk_agent(&self, rooms: &[Room], mut rng: RandomSource) -> Vec<CorridorSegment> {
        // walk() rejects an empty room list.
        let start = rng.next_index(rooms.len()).unwrap_or(0);
        let mut walker = Walker::new(rooms[start].position, rng);
        (0..self.walk_steps)
            .filter_map(|_| walker.step(self.step_size, self.map_size))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn rooms() -> Vec<Room> {
        vec![
            Room::new(0, Vec3::new(2.0, 0.0, 3.0), Vec3::new(6.0, 10.0, 6.0)),
            Room::new(1, Vec3::new(30.0, 0.0, 30.0), Vec3::new(8.0, 10.0, 5.0)),
            Room::new(2, Vec3::new(49.0, 0.0, 1.0), Vec3::new(1.0, 10.0, 1.0)),
        ]
    }

    fn walker(count: u32, steps: u32) -> CorridorWalker {
        CorridorWalker::new(count, steps, 1.0, Vec3::new(50.0, 10.0, 50.0))
    }

    #[test]
    fn test_direction_quarters() {
        assert_eq!(Direction::from_draw(0.0), Direction::North);
        assert_eq!(Direction::from_draw(0.3), Direction::South);
        assert_eq!(Direction::from_draw(0.5), Direction::East);
        assert_eq!(Direction::from_draw(0.99), Direction::West);
    }

    #[test]
    fn test_segments_stay_in_bounds() {
        let walker = walker(5, 400);
        for seed in 0..30 {
            let segments = walker.walk(&rooms(), &RandomSource::seeded(seed)).unwrap();
            assert!(segments.len() <= 5 * 400);
            for seg in &segments {
                assert!(walker.is_in_bounds(seg.start));
                assert!(walker.is_in_bounds(seg.end));
                assert_approx_eq!(seg.length, 1.0, 1e-6);
                assert_eq!(seg.start.y, seg.end.y);
            }
        }
    }

    #[test]
    fn test_segments_chain_from_a_room_anchor() {
        let segments = walker(1, 200).walk(&rooms(), &RandomSource::seeded(4)).unwrap();
        assert!(!segments.is_empty());
        assert!(rooms().iter().any(|r| r.position == segments[0].start));
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_out_of_bounds_step_is_skipped() {
        // Pinned in the corner of a map with zero floor area, every step leaves the map.
        let mut agent = Walker::new(Vec3::ZERO, RandomSource::seeded(1));
        for _ in 0..50 {
            assert!(agent.step(1.0, Vec3::new(0.0, 10.0, 0.0)).is_none());
        }
        assert_eq!(agent.position, Vec3::ZERO);
    }

    #[test]
    fn test_zero_steps_or_walkers() {
        assert!(walker(1, 0).walk(&rooms(), &RandomSource::seeded(1)).unwrap().is_empty());
        assert!(walker(0, 100).walk(&rooms(), &RandomSource::seeded(1)).unwrap().is_empty());
        assert!(walker(0, 100).walk(&[], &RandomSource::seeded(1)).unwrap().is_empty());
    }

    #[test]
    fn test_no_rooms_is_stage_error() {
        assert_eq!(
            walker(2, 10).walk(&[], &RandomSource::seeded(1)).unwrap_err(),
            StageError::NoRooms { walkers: 2 }
        );
    }

    #[test]
    fn test_deterministic() {
        let walker = walker(4, 150);
        let a = walker.walk(&rooms(), &RandomSource::seeded(21)).unwrap();
        let b = walker.walk(&rooms(), &RandomSource::seeded(21)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_thread_matches_thread_pool() {
        let walker = walker(8, 250);
        let pool = rayon::ThreadPoolBuilder::new().num_threads(1).build().unwrap();
        for seed in 0..10 {
            let rng = RandomSource::seeded(seed);
            let sequential = pool.install(|| walker.walk(&rooms(), &rng)).unwrap();
            let parallel = walker.walk(&rooms(), &rng).unwrap();
            assert_eq!(sequential, parallel);
        }
    }
}
