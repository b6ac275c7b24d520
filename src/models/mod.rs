//! Projection models.

pub mod projection;

pub use projection::{
    estimate_ratio, horizon_points, project, round_ratio, GeometricProjector,
    GeometricProjectorBuilder, RatioSource, DEFAULT_TRAILING_WINDOW,
};
