//! Common utilities for integration tests

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{ContinuousStirredTank, FixedOutput};
pub use test_helpers::{
    assert_strictly_decreasing,
    curves_for,
    relative_error,
    text_x,
};
