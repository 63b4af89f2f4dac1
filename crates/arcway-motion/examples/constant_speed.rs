//! Drives a follower around a cyclic Catmull-Rom loop at constant speed.
//!
//! Run with `RUST_LOG=info cargo run --example constant_speed`.

use arcway_curve::{CurveKind, CurvePath, PathConfig};
use arcway_math::DVec3;
use arcway_motion::PathFollower;

fn main() {
    env_logger::init();

    let points = [
        DVec3::new(-4.0, 0.0, -4.0),
        DVec3::new(4.0, 0.0, -4.0),
        DVec3::new(4.0, 0.0, 4.0),
        DVec3::new(-4.0, 0.0, 4.0),
    ];
    let config = PathConfig {
        kind: CurveKind::CatmullRom,
        cyclic: true,
        resolution: 64,
    };
    let path = CurvePath::new(points, config).expect("square corners are finite");
    println!(
        "loop of {} segments, length {:.3}",
        path.segment_count(),
        path.total_length()
    );

    let mut follower = PathFollower::new(2.0);
    let dt = 1.0 / 30.0;
    let mut previous = follower.pose(&path).position;

    for frame in 0..60 {
        let pose = follower.advance(&path, dt);
        let step = previous.distance(pose.position);
        let heading = match pose.orientation(DVec3::Y) {
            Some(q) => format!("{:.3?}", q),
            None => "degenerate".to_string(),
        };
        println!(
            "frame {frame:2}  d {:7.3}  pos ({:6.3}, {:6.3})  step {step:.4}  heading {heading}",
            follower.distance(),
            pose.position.x,
            pose.position.z,
        );
        previous = pose.position;
    }
}
