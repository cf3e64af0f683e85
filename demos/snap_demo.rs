//! Walks through both snapping modes on an in-memory scene.
//!
//! ```text
//! cargo run --example snap_demo
//! RUST_LOG=vertex_snap=debug cargo run --example snap_demo
//! ```

use vertex_snap::math::{Isometry3, Point3, Vector3};
use vertex_snap::scene::{ObjectData, ObjectId, TracingFeedback};
use vertex_snap::{MemoryScene, Scene, SnapTool};

fn main() {
    // Default: WARN for everything, INFO for vertex_snap.
    // Override with RUST_LOG env var (e.g. RUST_LOG=vertex_snap=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("snap_demo=info".parse().unwrap_or_default())
        .add_directive("vertex_snap=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut scene = MemoryScene::new();
    let body = scene.add_object(
        ObjectData::new("|character|body")
            .with_mesh(vec![
                Point3::new(-1.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 2.0, 0.0),
                Point3::new(0.0, 1.0, 1.0),
            ])
            .with_transform(Isometry3::translation(0.0, 1.0, 0.0)),
    );
    let jacket = scene.add_mesh(
        "|character|jacket",
        vec![
            Point3::new(-0.9, 1.1, 0.1),
            Point3::new(1.2, 0.8, 0.0),
            Point3::new(0.1, 3.2, -0.1),
        ],
    );

    let mut tool = SnapTool::new(TracingFeedback);

    // Auto Snap: jacket vertices onto the body.
    scene.select_object(body);
    tool.load_source(&scene);
    tracing::info!(source = tool.source_label(), "source loaded");
    scene.select_vertices(jacket, 0..3);
    tool.snap_selected(&mut scene);
    print_mesh(&scene, jacket);

    scene.undo();
    tracing::info!("undone");
    print_mesh(&scene, jacket);

    // Manual Snap: one jacket vertex onto a hand-picked body vertex.
    if let Ok(data) = scene.object_mut(body) {
        data.transform = Isometry3::new(Vector3::new(0.0, 1.0, 0.5), Vector3::zeros());
    }
    scene.select_vertices(body, 3..4);
    tool.load_sources(&scene);
    scene.select_vertices(jacket, 2..3);
    tool.load_targets(&scene);
    tracing::info!(
        sources = %tool.sources_label(),
        targets = %tool.targets_label(),
        "manual sets loaded"
    );
    tool.snap_loaded(&mut scene);
    print_mesh(&scene, jacket);
}

fn print_mesh(scene: &MemoryScene, object: ObjectId) {
    let Ok(verts) = scene.mesh_vertices(object) else {
        return;
    };
    for v in verts {
        if let Ok(p) = scene.vertex_position(v) {
            tracing::info!(index = v.index, x = p.x, y = p.y, z = p.z, "vertex");
        }
    }
}
