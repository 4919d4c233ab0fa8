use thiserror::Error;

mod annotations;
mod colors;
mod ids;

pub use annotations::*;
pub use colors::*;
pub use ids::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
