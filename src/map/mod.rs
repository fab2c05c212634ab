// src/map/mod.rs
pub mod corridor;
pub mod placement;
pub mod room;

pub use corridor::CorridorSegment;
pub use placement::{CorridorPlacement, RoomPlacement, TemplateHandle};
pub use room::Room;
