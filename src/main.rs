#![warn(non_snake_case)]
//! # dungeon_gen
//!
//! Headless front end for the generator. Loads settings (from a JSON file
//! or the built-in defaults), runs one generation pass and prints a summary,
//! or the whole map as JSON.
//!
//! ## License
//! Licensed under the MIT License.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use dungeon_gen::map::TemplateHandle;
use dungeon_gen::{MapGenerator, MapSettings, PlacementLog};

#[derive(Parser, Debug)]
#[command(name = "dungeon_gen")]
#[command(about = "Generate a BSP dungeon with random-walk corridors")]
struct Args {
    /// JSON settings file; missing fields use the defaults
    #[arg(short = 'c', long)]
    settings: Option<PathBuf>,

    /// Master seed (random if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum BSP depth
    #[arg(short, long)]
    depth: Option<i32>,

    /// Number of corridor walkers
    #[arg(short, long)]
    walkers: Option<u32>,

    /// Steps per walker
    #[arg(long)]
    steps: Option<u32>,

    /// Print the generated map as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn load_settings(args: &Args) -> Result<MapSettings, Box<dyn Error>> {
    let mut settings = match &args.settings {
        Some(path) => MapSettings::from_json_file(path)?,
        None => MapSettings::default(),
    };
    // Without a host there are no prefabs; stand-in handles keep validation happy.
    settings.room_template.get_or_insert(TemplateHandle(0));
    settings.corridor_template.get_or_insert(TemplateHandle(1));

    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(depth) = args.depth {
        settings.max_depth = depth;
    }
    if let Some(walkers) = args.walkers {
        settings.walker_count = walkers;
    }
    if let Some(steps) = args.steps {
        settings.walk_steps = steps;
    }
    Ok(settings)
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    let args = Args::parse();
    let settings = load_settings(&args)?;

    let mut generator = MapGenerator::new();
    let mut placements = PlacementLog::new();
    let map = generator.generate(settings, &mut placements)?;
    info!("{} placement requests emitted", placements.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        println!("{}", map.summary());
        for room in &map.rooms {
            println!(
                "  room {:>3} at ({:>6.2}, {:>6.2}) size {:>5.2} x {:>5.2}",
                room.id, room.position.x, room.position.z, room.size.x, room.size.z
            );
        }
    }
    Ok(())
}
