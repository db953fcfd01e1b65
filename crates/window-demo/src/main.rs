// File: crates/window-demo/src/main.rs
// Summary: Windowed live chart: the driver ticks every 600 ms and frames are rendered with
// Skia (CPU) and blitted to the window via winit + softbuffer. Any key cycles the theme.

use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use walkchart_core::raster::{render_to_rgba8, RasterOptions};
use walkchart_core::walk::{entropy_rng, seeded_rng, RandomWalk, DEFAULT_COUNT, DEFAULT_MAX_STEP};
use walkchart_core::{theme, ChartConfig, ChartState, Driver};
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Repaint cadence while a transition is running.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(name = "walkchart-window")]
#[command(about = "Live random-walk line chart in a native window", long_about = None)]
struct Args {
    /// Seed for a reproducible walk; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Initial theme (classic, dark, solarized-light)
    #[arg(long, default_value = "classic")]
    theme: String,

    /// Steps per generated walk
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Exclusive bound on a single step
    #[arg(long, default_value_t = DEFAULT_MAX_STEP)]
    max_step: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ChartConfig::default();
    let (chart_w, chart_h) = (config.width, config.height);
    let chart = ChartState::initialize(config)?;
    let rng = match args.seed {
        Some(seed) => seeded_rng(seed),
        None => entropy_rng(),
    };
    let mut driver = Driver::new(chart, RandomWalk::new(args.count, args.max_step), rng, Instant::now());
    let mut opts = RasterOptions { theme: theme::find(&args.theme), ..RasterOptions::default() };

    // Window + softbuffer setup
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Walkchart - live random walk")
        .with_inner_size(winit::dpi::PhysicalSize::new(chart_w, chart_h))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    info!(theme = opts.theme.name, period_ms = driver.period().as_millis() as u64, "window ready");

    event_loop.run(move |event, _, cf| match event {
        Event::WindowEvent { event, window_id: _ } => match event {
            WindowEvent::CloseRequested => {
                info!(ticks = driver.tick_count(), "closing");
                *cf = ControlFlow::Exit;
            }
            WindowEvent::Resized(_) => window.request_redraw(),
            WindowEvent::KeyboardInput { input, .. } if input.state == ElementState::Pressed => {
                opts.theme = theme::next(&opts.theme);
                debug!(theme = opts.theme.name, "theme changed");
                window.request_redraw();
            }
            _ => {}
        },
        Event::MainEventsCleared => {
            let now = Instant::now();
            let fired = driver.poll(now);
            let animating = driver.chart().is_animating(now);
            if fired || animating {
                window.request_redraw();
            }
            let wake = if animating { (now + FRAME_INTERVAL).min(driver.next_deadline()) } else { driver.next_deadline() };
            *cf = ControlFlow::WaitUntil(wake);
        }
        Event::RedrawRequested(_) => {
            let size = window.inner_size();
            let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else { return };
            if let Err(e) = surface.resize(w, h) {
                warn!("resize failed: {e}");
                return;
            }

            let frame = driver.frame(Instant::now());
            let (rgba, fw, fh, stride) = match render_to_rgba8(&frame, &opts) {
                Ok(out) => out,
                Err(e) => {
                    warn!("render failed: {e}");
                    return;
                }
            };

            let mut buffer = match surface.buffer_mut() {
                Ok(b) => b,
                Err(e) => {
                    warn!("buffer unavailable: {e}");
                    return;
                }
            };
            let bg = opts.theme.background;
            let bg_px = ((bg.r() as u32) << 16) | ((bg.g() as u32) << 8) | bg.b() as u32;
            let (win_w, win_h) = (w.get() as usize, h.get() as usize);
            // Blit the chart into the top-left corner; pad the rest with the background.
            for y in 0..win_h {
                for x in 0..win_w {
                    buffer[y * win_w + x] = if x < fw as usize && y < fh as usize {
                        let px = &rgba[y * stride + x * 4..y * stride + x * 4 + 4];
                        ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32
                    } else {
                        bg_px
                    };
                }
            }
            if let Err(e) = buffer.present() {
                warn!("present error: {e}");
            }
        }
        _ => {}
    })
}
