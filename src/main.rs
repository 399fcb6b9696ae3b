#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::time::{Duration, Instant};

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use halo_life::config::MIN_WORKERS;
use halo_life::{Config, ConfigError, World};

const REPORT_INTERVAL: u64 = 100;

struct MainArgs {
    config: Config,
    generations: u64,
    seed: Option<u64>,
}

fn usage() -> ! {
    eprintln!(
        "usage: halo-life [--window-width PX] [--window-height PX] [--cell-size PX] \
         [--workers N] [--strategy sequential|threaded|data-parallel] \
         [--generations N] [--seed N]"
    );
    std::process::exit(1);
}

fn parse_args() -> Result<MainArgs, ConfigError> {
    let args: Vec<String> = std::env::args().collect();
    let mut window_width = 800usize;
    let mut window_height = 600usize;
    let mut cell_size = 5usize;
    let mut workers = num_cpus::get().max(MIN_WORKERS);
    let mut strategy = Config::default().strategy;
    let mut generations = 1_000u64;
    let mut seed = None;

    let next_arg = |i: usize, flag: &str| -> &str {
        args.get(i).map(String::as_str).unwrap_or_else(|| {
            eprintln!("{flag} requires a value");
            usage()
        })
    };
    let parse_num = |i: usize, flag: &str| -> u64 {
        next_arg(i, flag).parse().unwrap_or_else(|_| {
            eprintln!("{flag} requires a non-negative integer");
            usage()
        })
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--window-width" => {
                i += 1;
                window_width = parse_num(i, "--window-width") as usize;
            }
            "--window-height" => {
                i += 1;
                window_height = parse_num(i, "--window-height") as usize;
            }
            "--cell-size" => {
                i += 1;
                cell_size = parse_num(i, "--cell-size") as usize;
            }
            "--workers" => {
                i += 1;
                workers = parse_num(i, "--workers") as usize;
            }
            "--strategy" => {
                i += 1;
                strategy = next_arg(i, "--strategy").parse()?;
            }
            "--generations" => {
                i += 1;
                generations = parse_num(i, "--generations");
            }
            "--seed" => {
                i += 1;
                seed = Some(parse_num(i, "--seed"));
            }
            "--help" | "-h" => usage(),
            other => {
                eprintln!("unknown argument: {other}");
                usage();
            }
        }
        i += 1;
    }

    let config = Config {
        workers,
        strategy,
        ..Config::from_window(window_width, window_height, cell_size)
    };
    config.validate()?;
    Ok(MainArgs {
        config,
        generations,
        seed,
    })
}

fn run(args: MainArgs) -> Result<(), ConfigError> {
    let config = &args.config;
    let stepper = config.build_stepper()?;

    let mut world = World::new(config.width, config.height);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    world.seed_random(&mut rng);

    info!(
        "grid {}x{}, strategy {}, {} workers, {} generations",
        config.width, config.height, stepper.name(), config.workers, args.generations
    );

    let mut window_elapsed = Duration::ZERO;
    let mut total_elapsed = Duration::ZERO;
    for _ in 0..args.generations {
        let start = Instant::now();
        world.advance(stepper.as_ref());
        let elapsed = start.elapsed();
        window_elapsed += elapsed;
        total_elapsed += elapsed;

        if world.generation() % REPORT_INTERVAL == 0 {
            info!(
                "{REPORT_INTERVAL} generations took {} us with {} ({} live)",
                window_elapsed.as_micros(),
                stepper.name(),
                world.current().population(),
            );
            window_elapsed = Duration::ZERO;
        }
    }

    let total_ms = total_elapsed.as_secs_f64() * 1000.0;
    let avg_ms = if args.generations > 0 {
        total_ms / args.generations as f64
    } else {
        0.0
    };
    info!(
        "summary: {} generations in {total_ms:.3} ms, {avg_ms:.6} ms/generation, final population {}",
        args.generations,
        world.current().population(),
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = parse_args().and_then(run);
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
