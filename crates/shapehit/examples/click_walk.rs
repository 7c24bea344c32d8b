//! Walk a few clicks through the trapezoid controller and print each morph.
//!
//! Usage:
//!   cargo run -p shapehit --example click_walk
//!   cargo run -p shapehit --example click_walk -- live

use nalgebra::Vector2;
use shapehit::geom2::format_points;
use shapehit::hit::{EdgeAnchor, HitTester};
use shapehit::morph::{trapezoid, MorphController, ShapeRenderer, SnapRenderer};

fn main() {
    let anchor = match std::env::args().nth(1).as_deref() {
        Some("live") => EdgeAnchor::Live,
        Some("fixed") | None => EdgeAnchor::Fixed,
        Some(other) => {
            eprintln!("usage: click_walk [fixed|live] (got {other:?})");
            return;
        }
    };
    let tester = HitTester {
        anchor,
        ..HitTester::default()
    };
    let mut ctl = MorphController::new(tester, SnapRenderer::new(trapezoid()));
    let clicks = [
        (250.0, 150.0),
        (250.0, 297.0),
        (348.0, 200.0),
        (250.0, 220.0),
        (10.0, 10.0),
        (120.0, 120.0),
    ];
    for (x, y) in clicks {
        let d = ctl.handle_click(Vector2::new(x, y));
        println!(
            "click ({x}, {y}) -> {d:<7} shape = {}",
            format_points(ctl.renderer().current())
        );
    }
}
