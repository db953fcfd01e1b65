// File: crates/walkchart-core/tests/chart.rs
// Purpose: Chart initialization, domain updates, line re-binding and transition sampling.

use std::time::{Duration, Instant};

use walkchart_core::types::Insets;
use walkchart_core::walk::{seeded_rng, RandomWalk};
use walkchart_core::{ChartConfig, ChartError, ChartState, Series};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn chart() -> ChartState {
    ChartState::initialize(ChartConfig::default()).expect("default layout fits")
}

#[test]
fn initialize_derives_plot_area_and_labels() {
    let ch = chart();
    assert_eq!(ch.plot().width, 590.0);
    assert_eq!(ch.plot().height, 240.0);
    assert_eq!(ch.x_scale().range(), [0.0, 590.0]);
    assert_eq!(ch.y_scale().range(), [240.0, 0.0]);
    assert_eq!(ch.x_domain(), [0.0, 1.0]);
    assert_eq!(ch.line_count(), 0);

    let labels = ch.labels();
    assert_eq!(labels[0].text, "x axis");
    assert_eq!((labels[0].x, labels[0].y), (295.0, 280.0));
    assert_eq!(labels[1].text, "y axis");
    assert_eq!((labels[1].x, labels[1].y, labels[1].rotate), (-120.0, -40.0, -90.0));

    // axes are drawn for the initial domain before any data arrives
    let frame = ch.frame(Instant::now());
    assert_eq!(frame.x_axis.ticks.len(), 11);
    assert!(frame.line.is_none());
}

#[test]
fn initialize_rejects_margins_wider_than_surface() {
    let cfg = ChartConfig { width: 100, margins: Insets::uniform(60), ..ChartConfig::default() };
    let err = ChartState::initialize(cfg).unwrap_err();
    assert!(matches!(err, ChartError::InvalidLayout { width: 100, hsum: 120, .. }));

    let cfg = ChartConfig { transition: Duration::ZERO, ..ChartConfig::default() };
    assert!(matches!(ChartState::initialize(cfg), Err(ChartError::InvalidDuration)));
}

#[test]
fn tick_period_is_twice_the_transition() {
    assert_eq!(ChartConfig::default().tick_period(), Duration::from_millis(600));
}

#[test]
fn update_sets_domains_from_series_maxima_with_zero_lower_bound() {
    let mut ch = chart();
    let series = Series::from(vec![(0.0, 0.0), (10.0, 5.0), (20.0, 2.0)]);
    ch.update(&series, Instant::now());
    assert_eq!(ch.x_domain(), [0.0, 20.0]);
    assert_eq!(ch.y_domain(), [0.0, 5.0]);

    let mut rng = seeded_rng(11);
    let walk = RandomWalk::default().generate_with(&mut rng);
    ch.update(&walk, Instant::now());
    assert_eq!(ch.x_domain(), [0.0, walk.x_max().unwrap()]);
    assert_eq!(ch.y_domain(), [0.0, walk.y_max().unwrap()]);
}

#[test]
fn first_update_draws_line_without_animation() {
    let mut ch = chart();
    let now = Instant::now();
    ch.update(&Series::from(vec![(0.0, 0.0), (10.0, 5.0), (20.0, 2.0)]), now);

    let line = ch.frame(now).line.expect("line entered");
    let v = &line.vertices;
    assert_eq!(v.len(), 3);
    assert!(approx(v[0].x, 0.0) && approx(v[0].y, 240.0));
    assert!(approx(v[1].x, 295.0) && approx(v[1].y, 0.0));
    assert!(approx(v[2].x, 590.0) && approx(v[2].y, 144.0));
    assert_eq!(line.style.stroke, "green");
    assert_eq!(line.style.stroke_width, 1.5);
}

#[test]
fn repeated_updates_keep_a_single_line() {
    let mut ch = chart();
    let now = Instant::now();
    ch.update(&Series::from(vec![(0.0, 0.0), (1.0, 1.0)]), now);
    ch.update(&Series::from(vec![(0.0, 0.0), (2.0, 3.0)]), now + Duration::from_millis(600));
    assert_eq!(ch.line_count(), 1);
    assert_eq!(ch.update_count(), 2);
}

#[test]
fn line_transitions_from_displayed_shape() {
    let mut ch = chart();
    let t0 = Instant::now();
    ch.update(&Series::from(vec![(0.0, 0.0), (10.0, 10.0)]), t0);

    let t1 = t0 + Duration::from_millis(600);
    ch.update(&Series::from(vec![(0.0, 10.0), (10.0, 0.0)]), t1);

    // at the start of the transition the old shape is still on screen
    let start = ch.frame(t1).line.unwrap().vertices;
    assert!(approx(start[0].y, 240.0) && approx(start[1].y, 0.0));

    // halfway (eased 0.5) both ends meet in the middle
    let mid = ch.frame(t1 + Duration::from_millis(150)).line.unwrap().vertices;
    assert!(approx(mid[0].y, 120.0) && approx(mid[1].y, 120.0));
    assert!(ch.is_animating(t1 + Duration::from_millis(150)));

    let end = ch.frame(t1 + Duration::from_millis(300)).line.unwrap().vertices;
    assert!(approx(end[0].y, 0.0) && approx(end[1].y, 240.0));
    assert!(!ch.is_animating(t1 + Duration::from_millis(300)));
}

#[test]
fn interrupted_transition_restarts_from_current_shape() {
    let mut ch = chart();
    let t0 = Instant::now();
    ch.update(&Series::from(vec![(0.0, 0.0), (10.0, 10.0)]), t0);
    let t1 = t0 + Duration::from_millis(600);
    ch.update(&Series::from(vec![(0.0, 10.0), (10.0, 0.0)]), t1);

    let t2 = t1 + Duration::from_millis(150);
    let before = ch.frame(t2).line.unwrap().vertices;
    ch.update(&Series::from(vec![(0.0, 5.0), (10.0, 10.0)]), t2);
    let after = ch.frame(t2).line.unwrap().vertices;
    assert_eq!(before, after);
}

#[test]
fn axis_ticks_settle_on_new_domain() {
    let mut ch = chart();
    let t0 = Instant::now();
    ch.update(&Series::from(vec![(0.0, 0.0), (1000.0, 47.0)]), t0);

    let settled = ch.frame(t0 + Duration::from_secs(1));
    let xs: Vec<f64> = settled.x_axis.ticks.iter().map(|t| t.value).collect();
    assert_eq!(xs.len(), 11);
    assert_eq!(settled.x_axis.ticks[10].label, "1,000");
    assert!(settled.x_axis.ticks.iter().all(|t| t.opacity == 1.0));
    let ys: Vec<f64> = settled.y_axis.ticks.iter().map(|t| t.value).collect();
    assert_eq!(ys.last().copied(), Some(45.0));

    // mid-transition the old [0, 1] ticks are still fading out
    let mid = ch.frame(t0 + Duration::from_millis(150));
    assert!(mid.x_axis.ticks.iter().any(|t| t.label == "0.5" && t.opacity > 0.0 && t.opacity < 1.0));
}

#[test]
fn negative_values_render_below_the_plot() {
    let mut ch = chart();
    let now = Instant::now();
    ch.snap(&Series::from(vec![(0.0, 0.0), (12.07, -5.0), (24.14, 10.0)]), now);
    assert_eq!(ch.y_domain(), [0.0, 10.0]);
    let v = ch.frame(now).line.unwrap().vertices;
    assert!(v[1].y > ch.plot().height);
}

#[test]
fn flat_series_draws_mid_height() {
    let mut ch = chart();
    let now = Instant::now();
    let mut rng = seeded_rng(0);
    ch.snap(&RandomWalk::new(16, 0).generate_with(&mut rng), now);
    assert_eq!(ch.y_domain(), [0.0, 0.0]);
    let v = ch.frame(now).line.unwrap().vertices;
    assert!(v.iter().all(|p| approx(p.y, 120.0)));
}

#[test]
fn empty_series_is_ignored() {
    let mut ch = chart();
    ch.update(&Series::default(), Instant::now());
    assert_eq!(ch.update_count(), 0);
    assert_eq!(ch.line_count(), 0);
    assert_eq!(ch.x_domain(), [0.0, 1.0]);
}

#[test]
fn interrupted_axis_keeps_ticks_in_place() {
    let mut ch = chart();
    let t0 = Instant::now();
    ch.update(&Series::from(vec![(0.0, 0.0), (1000.0, 47.0)]), t0);
    let t1 = t0 + Duration::from_millis(600);
    ch.update(&Series::from(vec![(0.0, 0.0), (50.0, 12.0)]), t1);

    // cut the second transition short with a third domain
    let t2 = t1 + Duration::from_millis(150);
    let visible = |ch: &ChartState| {
        let mut ticks: Vec<(f64, f64, f64)> =
            ch.frame(t2).x_axis.visible_ticks().map(|t| (t.value, t.offset, t.opacity)).collect();
        ticks.sort_by(|a, b| a.0.total_cmp(&b.0));
        ticks
    };
    let before = visible(&ch);
    ch.update(&Series::from(vec![(0.0, 0.0), (400.0, 30.0)]), t2);
    let after = visible(&ch);

    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(&after) {
        assert!(approx(b.0, a.0) && approx(b.1, a.1) && approx(b.2, a.2), "tick jumped: {b:?} -> {a:?}");
    }

    // and the new transition still settles on the new domain
    let settled = ch.frame(t2 + Duration::from_secs(1));
    assert_eq!(settled.x_axis.ticks.last().map(|t| t.label.as_str()), Some("400"));
}
