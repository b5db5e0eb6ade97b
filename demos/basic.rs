//! Animated grid walkthrough with a toy print-only engine.
//!
//! Run with `cargo run --example basic`. Set `RUST_LOG=spark_grid=trace` to
//! see the pipeline's own logging alongside the engine output.

use spark_grid::{mount, AnimationEngine, ContainerSize, GridOptions, HeightTarget, ItemTarget};

/// Spring parameters the engine understands; spark-grid passes them through
/// untouched.
#[derive(Debug, Clone, Copy)]
struct Spring {
    stiffness: f64,
    damping: f64,
}

/// A stand-in engine that jumps straight to every target and narrates what a
/// real spring engine would interpolate.
#[derive(Default)]
struct PrintEngine {
    positions: Vec<(f64, f64)>,
    height: f64,
}

impl AnimationEngine for PrintEngine {
    type Tuning = Spring;

    fn set_item_count(&mut self, count: usize) {
        self.positions.resize(count, (0.0, 0.0));
    }

    fn animate_item(&mut self, index: usize, target: ItemTarget<Spring>) {
        let mode = if target.immediate { "jump  " } else { "spring" };
        println!(
            "item {index:>2}: {mode} to ({:>6.1}, {:>6.1})  delay {:>6.1}ms  k={} d={}",
            target.position.x,
            target.position.y,
            target.delay,
            target.tuning.stiffness,
            target.tuning.damping,
        );
        self.positions[index] = (target.position.x, target.position.y);
    }

    fn animate_height(&mut self, target: HeightTarget) {
        let mode = if target.immediate { "jump  " } else { "spring" };
        println!("height : {mode} to {:.1}", target.height);
        self.height = target.height;
    }

    fn height(&self) -> f64 {
        self.height
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let size = ContainerSize::new();
    let options = GridOptions {
        column_gap: 20.0,
        row_gap: 20.0,
        padding: 10.0,
        interval: 40.0,
        ..GridOptions::new(200.0, 120.0)
    };
    let spring = Spring {
        stiffness: 170.0,
        damping: 26.0,
    };

    let handle = mount(options, spring, PrintEngine::default(), 7, size.clone())
        .expect("dimensions are valid");

    println!("-- first measurement: static launch, items appear in place --");
    size.set_width(1000.0);

    println!("-- narrower: items wrap and cascade to their new rows --");
    size.set_width(640.0);

    println!("-- two more items fly in from the origin --");
    handle.set_item_count(9);

    handle.unmount();
}
