//! # Map Settings
//!
//! The parameters a host hands to the generator, with the defaults used when
//! a field is left out of a JSON settings file.
//!
//! All checking happens here. The stages built from a `MapSettings` take
//! their values as given, so a run only starts from settings that passed
//! [`MapSettings::validated_templates`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bsp::BSP_DEPTH_LIMIT;
use crate::generator::ConfigError;
use crate::map::TemplateHandle;
use crate::utils::{Vec3, Volume};

/// Generation parameters supplied by the host.
///
/// The orchestrator takes a snapshot at the start of a run, so editing the
/// host's copy afterwards never affects a run in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    // BSP
    pub max_depth: i32,
    pub min_room_size: f32,
    pub map_size: Vec3,

    // Walkers
    pub walker_count: u32,
    pub walk_steps: u32,
    pub step_size: f32,

    // Prefabs
    pub room_template: Option<TemplateHandle>,
    pub corridor_template: Option<TemplateHandle>,

    /// Master seed. `None` draws a fresh one for every run.
    pub seed: Option<u64>,
}

impl Default for MapSettings {
    fn default() -> Self {
        MapSettings {
            max_depth: 4,
            min_room_size: 5.0,
            map_size: Vec3::new(50.0, 10.0, 50.0),
            walker_count: 3,
            walk_steps: 100,
            step_size: 1.0,
            room_template: None,
            corridor_template: None,
            seed: None,
        }
    }
}

impl MapSettings {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn with_templates(mut self, room: TemplateHandle, corridor: TemplateHandle) -> Self {
        self.room_template = Some(room);
        self.corridor_template = Some(corridor);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The area being partitioned, anchored at the world origin.
    pub fn map_volume(&self) -> Volume {
        Volume::new(Vec3::ZERO, self.map_size)
    }

    /// Checks every field; the first problem found is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validated_templates().map(|_| ())
    }

    /// Checks every field and hands back the room and corridor templates.
    pub fn validated_templates(&self) -> Result<(TemplateHandle, TemplateHandle), ConfigError> {
        if self.max_depth < 0 {
            return Err(ConfigError::NegativeDepth(self.max_depth));
        }
        if self.max_depth as u32 > BSP_DEPTH_LIMIT {
            return Err(ConfigError::DepthTooLarge { depth: self.max_depth, limit: BSP_DEPTH_LIMIT });
        }
        positive("min_room_size", self.min_room_size)?;
        positive("map_size.x", self.map_size.x)?;
        positive("map_size.y", self.map_size.y)?;
        positive("map_size.z", self.map_size.z)?;
        positive("step_size", self.step_size)?;
        let room = self.room_template.ok_or(ConfigError::MissingTemplate("room"))?;
        let corridor = self.corridor_template.ok_or(ConfigError::MissingTemplate("corridor"))?;
        Ok((room, corridor))
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        Err(ConfigError::NonFinite { field })
    } else if value <= 0.0 {
        Err(ConfigError::NonPositive { field, value })
    } else {
        Ok(())
    }
}
