// File: crates/walkchart-core/tests/scale.rs
// Purpose: Linear scale mapping, tick generation, nice rounding and tick labels.

use walkchart_core::scale::{ticks, LinearScale, TickFormat};

fn approx_slice(got: &[f64], want: &[f64]) {
    assert_eq!(got.len(), want.len(), "got {got:?}, want {want:?}");
    for (g, w) in got.iter().zip(want) {
        assert!((g - w).abs() < 1e-9, "got {got:?}, want {want:?}");
    }
}

#[test]
fn maps_domain_onto_range_and_back() {
    let s = LinearScale::new([0.0, 590.0]).with_domain([0.0, 100.0]);
    assert_eq!(s.map(0.0), 0.0);
    assert_eq!(s.map(100.0), 590.0);
    assert!((s.map(50.0) - 295.0).abs() < 1e-9);
    assert!((s.invert(295.0) - 50.0).abs() < 1e-9);

    // inverted range for y
    let y = LinearScale::new([240.0, 0.0]).with_domain([0.0, 10.0]);
    assert_eq!(y.map(0.0), 240.0);
    assert_eq!(y.map(10.0), 0.0);
    // extrapolates below the domain
    assert!((y.map(-5.0) - 360.0).abs() < 1e-9);
}

#[test]
fn degenerate_domain_maps_to_middle_of_range() {
    let y = LinearScale::new([240.0, 0.0]).with_domain([0.0, 0.0]);
    assert_eq!(y.map(0.0), 120.0);
    assert_eq!(y.map(42.0), 120.0);
    assert_eq!(y.ticks(10), vec![0.0]);
}

#[test]
fn unit_domain_ticks_by_tenths() {
    let s = LinearScale::new([0.0, 100.0]);
    let want: Vec<f64> = (0..=10).map(|i| i as f64 / 10.0).collect();
    approx_slice(&s.ticks(10), &want);
    assert_eq!(s.tick_format(10).decimals, 1);
}

#[test]
fn ticks_use_one_two_five_steps() {
    approx_slice(&ticks(0.0, 1000.0, 10.0), &[0.0, 100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0, 1000.0]);
    let thousands: Vec<f64> = (0..=12).map(|i| i as f64 * 1000.0).collect();
    approx_slice(&ticks(0.0, 12359.68, 10.0), &thousands);
    approx_slice(&ticks(0.0, 47.0, 10.0), &[0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0]);
    approx_slice(&ticks(0.0, 0.3, 5.0), &[0.0, 0.05, 0.1, 0.15, 0.2, 0.25, 0.3]);
    assert!(ticks(0.0, 1.0, 0.0).is_empty());
}

#[test]
fn reversed_domain_ticks_descend() {
    approx_slice(&ticks(10.0, 0.0, 5.0), &[10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
}

#[test]
fn nice_extends_domain_to_round_values() {
    let mut s = LinearScale::new([0.0, 1.0]).with_domain([0.3, 9.7]);
    s.nice(10);
    assert_eq!(s.domain(), [0.0, 10.0]);

    let mut unit = LinearScale::new([0.0, 1.0]);
    unit.nice(10);
    assert_eq!(unit.domain(), [0.0, 1.0]);

    let mut flat = LinearScale::new([0.0, 1.0]).with_domain([3.0, 3.0]);
    flat.nice(10);
    assert_eq!(flat.domain(), [3.0, 3.0]);
}

#[test]
fn tick_labels_group_thousands_and_keep_step_precision() {
    let s = LinearScale::new([0.0, 1.0]).with_domain([0.0, 12359.68]);
    let fmt = s.tick_format(10);
    assert_eq!(fmt.format(12000.0), "12,000");
    assert_eq!(fmt.format(0.0), "0");

    let fine = TickFormat { decimals: 2 };
    assert_eq!(fine.format(0.05), "0.05");
    assert_eq!(fine.format(-1234.5), "\u{2212}1,234.50");
    assert_eq!(TickFormat { decimals: 0 }.format(-0.2), "0");
}
