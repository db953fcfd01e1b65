// File: crates/demo/src/main.rs
// Summary: Headless driver: ticks the random walk, rewrites a self-refreshing HTML page with the
// current SVG frame, and saves settled frames per tick (SVG, optionally PNG).

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use walkchart_core::raster::{self, RasterOptions};
use walkchart_core::walk::{entropy_rng, seeded_rng, RandomWalk, DEFAULT_COUNT, DEFAULT_MAX_STEP};
use walkchart_core::{svg, ChartConfig, ChartState, Driver, Frame, HostPage, CHART_SELECTOR};

#[derive(Parser, Debug)]
#[command(name = "walkchart-demo")]
#[command(about = "Live random-walk line chart rendered to an auto-refreshing HTML page", long_about = None)]
struct Args {
    /// Number of ticks to run, one every 600 ms; 0 keeps the page live until interrupted
    #[arg(long, default_value_t = 0)]
    ticks: u64,

    /// Seed for a reproducible walk; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory for index.html and per-tick frames
    #[arg(long, default_value = "target/out/walkchart")]
    out: PathBuf,

    /// Intermediate frames to save per transition (0 keeps only settled frames)
    #[arg(long, default_value_t = 0)]
    frames: u32,

    /// Also write a PNG of every settled frame
    #[arg(long)]
    png: bool,

    /// Advance a virtual clock instead of sleeping between frames
    #[arg(long)]
    instant: bool,

    /// Steps per generated walk
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Exclusive bound on a single step
    #[arg(long, default_value_t = DEFAULT_MAX_STEP)]
    max_step: u32,

    /// Host page template; must contain an element with id="chart"
    #[arg(long)]
    page: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_deref())?;

    let config = ChartConfig::default();
    let period = config.tick_period();
    let transition = config.transition;
    let chart = ChartState::initialize(config).context("initializing chart")?;

    let page = match &args.page {
        Some(path) => HostPage::from_file(path).with_context(|| format!("reading page template {}", path.display()))?,
        None => HostPage::default(),
    }
    .with_refresh(period);
    // Fail before the first tick if the page cannot host the chart.
    page.mount(CHART_SELECTOR, "").context("host page")?;

    std::fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    let index = args.out.join("index.html");

    let walk = RandomWalk::new(args.count, args.max_step);
    let rng = match args.seed {
        Some(seed) => seeded_rng(seed),
        None => entropy_rng(),
    };
    let start = Instant::now();
    let mut driver = Driver::new(chart, walk, rng, start);
    let mut clock = Clock::new(start, args.instant);

    // The page shows the empty axes until the first tick fires.
    write_page(&page, &driver.frame(clock.now()), &index)?;
    info!(out = %args.out.display(), ticks = args.ticks, "started; open index.html in a browser");

    while keep_ticking(args.ticks, driver.tick_count()) {
        let due = driver.next_deadline();
        clock.advance_to(due);
        if !driver.poll(clock.now()) {
            continue;
        }
        let tick = driver.tick_count();

        for j in 1..=args.frames {
            let at = due + transition.mul_f64(j as f64 / (args.frames + 1) as f64);
            clock.advance_to(at);
            let frame = driver.frame(clock.now());
            save(&args.out.join(format!("tick-{tick:04}-f{j:02}.svg")), |p| svg::write(&frame, p));
            save(&index, |p| write_page(&page, &frame, p));
        }

        clock.advance_to(due + transition);
        let settled = driver.frame(clock.now());
        save(&index, |p| write_page(&page, &settled, p));
        save(&args.out.join(format!("tick-{tick:04}.svg")), |p| svg::write(&settled, p));
        if args.png {
            save(&args.out.join(format!("tick-{tick:04}.png")), |p| {
                raster::render_to_png(&settled, &RasterOptions::default(), p)
            });
        }
        info!(tick, y_max = driver.chart().y_domain()[1], "frame written");
    }

    info!(ticks = driver.tick_count(), "done");
    println!("Wrote {}", index.display());
    Ok(())
}

fn keep_ticking(limit: u64, done: u64) -> bool {
    limit == 0 || done < limit
}

/// Real or virtual time source for the driver.
struct Clock {
    now: Instant,
    virtual_time: bool,
}

impl Clock {
    fn new(start: Instant, virtual_time: bool) -> Self {
        Self { now: start, virtual_time }
    }

    fn now(&self) -> Instant {
        if self.virtual_time { self.now } else { Instant::now() }
    }

    fn advance_to(&mut self, at: Instant) {
        if self.virtual_time {
            self.now = self.now.max(at);
        } else {
            let wait = at.saturating_duration_since(Instant::now());
            if wait > Duration::ZERO {
                std::thread::sleep(wait);
            }
        }
    }
}

fn write_page(page: &HostPage, frame: &Frame, path: &Path) -> walkchart_core::Result<()> {
    page.write(CHART_SELECTOR, &svg::render(frame), path)
}

// A failed write is logged; the next tick retries with fresh data.
fn save<E: std::fmt::Display>(path: &Path, write: impl FnOnce(&Path) -> std::result::Result<(), E>) {
    if let Err(e) = write(path) {
        warn!(path = %path.display(), error = %e, "failed to write frame");
    }
}

fn init_logging(log: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
        }
    }
    Ok(())
}
