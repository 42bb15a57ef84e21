//! Headless run of the rotation-projection pipeline
//!
//! Steps the pipeline at 60 frames per second without a window and prints
//! a few projected vertices and edges, the same data a renderer would upload.
//!
//! Run with: `cargo run --example headless_frames`

use hyperview_core::{ProjectionPipeline, PALETTE};
use hyperview_math::{HypercubeTopology, Wireframe4D};

const FRAME_SECONDS: f32 = 1.0 / 60.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let topology = HypercubeTopology::shared();
    log::info!(
        "Tesseract: {} vertices, {} edges",
        topology.vertex_count(),
        topology.edge_count()
    );

    let mut pipeline = ProjectionPipeline::new();
    for (second, speed) in [(0, 1.0f32), (1, 3.0), (2, 0.0), (3, 0.5)] {
        for _ in 0..60 {
            pipeline.advance_and_project(FRAME_SECONDS, speed);
        }

        let rotation = pipeline.rotation();
        let buffers = pipeline.buffers();
        println!(
            "t={}s speed={:.1}x xw={:.4} yw={:.4} zw={:.4}",
            second + 1,
            speed,
            rotation.xw,
            rotation.yw,
            rotation.zw
        );
        for (i, p) in buffers.points().iter().enumerate().step_by(5) {
            println!("  vertex {:2}: ({:+.4}, {:+.4}, {:+.4})", i, p.x, p.y, p.z);
        }
        let [a, b] = buffers.segment(0);
        println!(
            "  edge 0: ({:+.4}, {:+.4}, {:+.4}) -> ({:+.4}, {:+.4}, {:+.4})",
            a.x, a.y, a.z, b.x, b.y, b.z
        );
    }

    let names: Vec<_> = PALETTE.iter().map(|c| format!("{} {}", c.name, c.color)).collect();
    println!("palette: {}", names.join(", "));
    println!("frames projected: {}", pipeline.frame_count());
}
