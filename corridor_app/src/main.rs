//! Corridor walk demo
//!
//! Headless driver for the collision core: builds a world from a scene file
//! (or the built-in corridor), feeds it scripted random input for a number of
//! ticks and logs where the player ends up.
//!
//! Usage: `corridor_demo [scene.toml|scene.ron] [--ticks N] [--seed S]`

use rand::{rngs::StdRng, Rng, SeedableRng};
use sweep_engine::foundation::logging;
use sweep_engine::prelude::*;

const TICK_RATE: f32 = 60.0;
const DEFAULT_TICKS: u32 = 600;
const DEFAULT_SEED: u64 = 7;

/// Ticks between changes of scripted input
const INPUT_HOLD_TICKS: u32 = 45;

#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

struct Options {
    scene_path: Option<String>,
    ticks: u32,
    seed: u64,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, DemoError> {
        let mut options = Self {
            scene_path: None,
            ticks: DEFAULT_TICKS,
            seed: DEFAULT_SEED,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--ticks" => options.ticks = parse_value(&arg, args.next())?,
                "--seed" => options.seed = parse_value(&arg, args.next())?,
                _ if arg.starts_with("--") => return Err(DemoError::Usage(format!("Unknown option {arg}"))),
                _ => options.scene_path = Some(arg),
            }
        }

        Ok(options)
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, DemoError> {
    value
        .as_deref()
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| DemoError::Usage(format!("{flag} expects a number")))
}

/// Input held for several ticks at a time
#[derive(Debug, Default)]
struct ScriptedInput {
    movements: Vec<Movement>,
    yaw_per_tick: f32,
    jump: bool,
}

impl ScriptedInput {
    fn roll(rng: &mut StdRng) -> Self {
        let all = [Movement::Forward, Movement::Backward, Movement::Left, Movement::Right];
        let movements = all.into_iter().filter(|_| rng.gen_bool(0.4)).collect();

        Self {
            movements,
            yaw_per_tick: rng.gen_range(-20.0..20.0),
            jump: rng.gen_bool(0.15),
        }
    }
}

struct CorridorDemo {
    world: World,
    rng: StdRng,
}

impl CorridorDemo {
    fn new(config: &SimulationConfig, seed: u64) -> Result<Self, DemoError> {
        Ok(Self {
            world: World::from_config(config)?,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    fn run(&mut self, ticks: u32) -> Result<(), DemoError> {
        let dt = 1.0 / TICK_RATE;
        let start = self.world.player().position();
        let mut lowest = start.y;
        let mut travelled = 0.0;
        let mut input = ScriptedInput::default();

        for tick in 0..ticks {
            if tick % INPUT_HOLD_TICKS == 0 {
                input = ScriptedInput::roll(&mut self.rng);
                log::debug!("tick {tick}: new input {input:?}");
            }

            let player = self.world.player_mut();
            player.camera_mut().rotate(input.yaw_per_tick, 0.0);
            for movement in &input.movements {
                player.move_player(*movement, dt);
            }
            if input.jump {
                player.delta_y(1.0);
            }

            let before = self.world.player().position();
            let position = self.world.tick(dt)?;
            travelled += (position - before).norm();
            lowest = lowest.min(position.y);

            if (tick + 1) % TICK_RATE as u32 == 0 {
                log::info!("t = {:>5.2}s  position = {:?}", (tick + 1) as f32 * dt, position);
            }
        }

        let end = self.world.player().position();
        log::info!("Ran {ticks} ticks: {start:?} -> {end:?}");
        log::info!("Travelled {travelled:.2} units, lowest centre height {lowest:.3}");

        let radius = self.world.player().radius();
        if lowest < radius - 1e-3 {
            log::warn!("Player centre dipped below one radius above the floor");
        }
        Ok(())
    }
}

fn load_config(path: Option<&str>) -> Result<SimulationConfig, DemoError> {
    match path {
        Some(path) => {
            log::info!("Loading scene from {path}");
            Ok(SimulationConfig::load_from_file(path)?)
        }
        None => {
            log::info!("No scene file given, using the built-in corridor");
            Ok(SimulationConfig::new().with_scene(SceneConfig::corridor()))
        }
    }
}

fn run() -> Result<(), DemoError> {
    let options = Options::parse(std::env::args().skip(1))?;
    let config = load_config(options.scene_path.as_deref())?;

    let mut demo = CorridorDemo::new(&config, options.seed)?;
    demo.run(options.ticks)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level("info");

    log::info!("Starting corridor demo");

    match run() {
        Ok(()) => {
            log::info!("Corridor demo completed successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Corridor demo failed: {e}");
            Err(e.into())
        }
    }
}
