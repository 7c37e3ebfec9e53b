use thiserror::Error;

/// Argument errors raised by the grid evaluator before any cell is priced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("{axis} axis is empty; a grid needs at least one value per axis")]
    EmptyAxis { axis: &'static str },

    #[error("{axis} axis value at index {index} is not finite: {value}")]
    NonFiniteAxisValue {
        axis: &'static str,
        index: usize,
        value: f64,
    },
}
