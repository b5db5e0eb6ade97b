//! # spark-grid
//!
//! Animated wrapping-grid layout engine for fixed-size tiles.
//!
//! Given a container of variable width and items of one fixed size,
//! spark-grid computes a row-major wrapping placement for N items, hands the
//! animation engine one target (and stagger delay) per item whenever the
//! layout changes, and drives the container's height to fit the rows.
//!
//! ## Architecture
//!
//! ```text
//! size change → row_capacity → plan_positions → {item targets + stagger delays}
//!                                             → container height target
//! ```
//!
//! The crate computes targets; collaborators do the rest:
//!
//! - a [`SizeObserver`] reports container size changes,
//! - an [`AnimationEngine`] interpolates items (and the height) toward their
//!   targets,
//! - the rendering layer reads live values from the engine and paints items
//!   at their fixed size, absolutely positioned.
//!
//! ## Modules
//!
//! - [`types`] - Core geometry ([`Point`])
//! - [`options`] - [`GridOptions`] and validation
//! - [`layout`] - Pure placement math (row capacity, position plan)
//! - [`animate`] - Animation engine seam
//! - [`observe`] - Size observation seam and [`ContainerSize`]
//! - [`pipeline`] - The relayout control loop and session lifecycle
//!
//! ## Example
//!
//! ```ignore
//! use spark_grid::{mount, ContainerSize, GridOptions};
//!
//! let size = ContainerSize::new();
//! let options = GridOptions {
//!     column_gap: 20.0,
//!     interval: 50.0,
//!     ..GridOptions::new(200.0, 120.0)
//! };
//! let handle = mount(options, tuning, engine, 12, size.clone())?;
//!
//! // The host reports measurements; every change re-plans and re-targets.
//! size.set_width(1000.0);
//! size.set_width(640.0);
//!
//! handle.unmount();
//! ```

pub mod animate;
pub mod layout;
pub mod observe;
pub mod options;
pub mod pipeline;
pub mod types;

// Re-export commonly used items
pub use animate::{AnimationEngine, HeightTarget, ItemTarget};
pub use layout::{plan_positions, row_capacity, LayoutPlan};
pub use observe::{ContainerSize, SizeObserver};
pub use options::{GridOptions, OptionsError};
pub use pipeline::{mount, stagger_delay, unmount, GridController, GridHandle, LayoutPhase};
pub use types::Point;
