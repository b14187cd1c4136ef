use std::io::Read;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use life::{BoundingBox, Simulation};

const SOUP_WIDTH: i32 = 64;
const SOUP_HEIGHT: i32 = SOUP_WIDTH * 9 / 16;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const DEFAULT_GENERATIONS: u64 = 100;
const USAGE: &str = "usage: headless [PATTERN_FILE|-] [GENERATIONS]";

struct Args {
    pattern: Option<String>,
    generations: u64,
}

impl Args {
    fn parse() -> anyhow::Result<Self> {
        let mut args = std::env::args().skip(1);
        let pattern = args.next();
        if matches!(pattern.as_deref(), Some("-h" | "--help")) {
            println!("{USAGE}");
            std::process::exit(0);
        }
        let generations = match args.next() {
            Some(arg) => arg
                .parse()
                .with_context(|| format!("invalid generation count {arg:?}\n{USAGE}"))?,
            None => DEFAULT_GENERATIONS,
        };
        Ok(Args { pattern, generations })
    }
}

fn read_pattern(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut pattern = String::new();
        std::io::stdin()
            .read_to_string(&mut pattern)
            .context("read pattern from stdin")?;
        Ok(pattern)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("read pattern file {source}"))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse()?;

    let mut sim = Simulation::new();
    match &args.pattern {
        Some(source) => sim.load_pattern(&read_pattern(source)?),
        None => sim.randomize(BoundingBox {
            min_x: 0,
            min_y: 0,
            max_x: SOUP_WIDTH - 1,
            max_y: SOUP_HEIGHT - 1,
        }),
    }
    log::info!("starting with {} cells, running {} generations", sim.population(), args.generations);

    sim.toggle_running();
    let mut last_frame = Instant::now();
    let mut last_rate_log = Instant::now();
    let mut steps_since_log = 0u32;

    while sim.generation() < args.generations && sim.population() > 0 {
        thread::sleep(FRAME_INTERVAL);
        let now = Instant::now();
        if sim.tick(now - last_frame) {
            steps_since_log += 1;
        }
        last_frame = now;

        let elapsed = last_rate_log.elapsed();
        if elapsed >= Duration::from_secs(1) {
            let rate = steps_since_log as f64 / elapsed.as_secs_f64();
            log::info!("generation {}: {} cells, {:.1} gen/s", sim.generation(), sim.population(), rate);
            steps_since_log = 0;
            last_rate_log = Instant::now();
        }
    }

    match BoundingBox::tight(sim.cells()) {
        Some(bbox) => println!(
            "generation {}: {} cells within ({}, {})..=({}, {})",
            sim.generation(),
            sim.population(),
            bbox.min_x,
            bbox.min_y,
            bbox.max_x,
            bbox.max_y
        ),
        None => println!("generation {}: board is empty", sim.generation()),
    }
    Ok(())
}
