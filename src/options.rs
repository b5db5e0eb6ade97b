//! Grid configuration.
//!
//! [`GridOptions`] carries the fixed tile dimensions and the animation policy
//! knobs. Dimensions are immutable for the lifetime of one mounted session -
//! changing them is a configuration change (unmount, mount again), not a
//! runtime mutation.

use thiserror::Error;

// =============================================================================
// OPTIONS
// =============================================================================

/// Layout configuration for one grid session.
///
/// All lengths are in pixels. Only the tile size has no useful default;
/// everything else starts at the zero-gap, zero-padding, static-launch
/// behavior callers expect out of the box.
#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    /// Fixed width of every item.
    pub item_width: f64,
    /// Fixed height of every item.
    pub item_height: f64,
    /// Horizontal gap between neighbors in a row (default 0).
    pub column_gap: f64,
    /// Vertical gap between rows (default 0).
    pub row_gap: f64,
    /// Padding on all four container edges (default 0).
    pub padding: f64,
    /// Suppress the entry animation when the container had no measured width
    /// yet, so items appear pre-placed instead of flying in from the origin
    /// (default true).
    pub static_launch: bool,
    /// Stagger step in milliseconds between consecutive item animations
    /// (default 0). May be negative; see
    /// [`stagger_delay`](crate::pipeline::stagger_delay) for the exact
    /// schedule.
    pub interval: f64,
}

impl GridOptions {
    /// Create options with the given tile size and everything else defaulted.
    pub fn new(item_width: f64, item_height: f64) -> Self {
        Self {
            item_width,
            item_height,
            column_gap: 0.0,
            row_gap: 0.0,
            padding: 0.0,
            static_launch: true,
            interval: 0.0,
        }
    }

    /// Inner width available to a row: container width minus both paddings.
    #[inline]
    pub fn inner_width(&self, container_width: f64) -> f64 {
        container_width - 2.0 * self.padding
    }

    /// Validate the dimension fields.
    ///
    /// The layout math itself never checks its inputs (it degrades instead of
    /// failing), so rejection happens once here, before any layout begins.
    /// `interval` only has to be finite: negative stagger steps are a
    /// supported schedule.
    pub fn validate(&self) -> Result<(), OptionsError> {
        for (field, value) in [
            ("item_width", self.item_width),
            ("item_height", self.item_height),
            ("column_gap", self.column_gap),
            ("row_gap", self.row_gap),
            ("padding", self.padding),
        ] {
            if !value.is_finite() {
                return Err(OptionsError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(OptionsError::Negative { field, value });
            }
        }
        if !self.interval.is_finite() {
            return Err(OptionsError::NonFinite {
                field: "interval",
                value: self.interval,
            });
        }
        Ok(())
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Configuration rejected before layout began.
#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    /// A length was negative.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    /// A value was NaN or infinite.
    #[error("{field} must be finite (got {value})")]
    NonFinite { field: &'static str, value: f64 },
}

// =============================================================================
// TESTS
// =============================================================================
