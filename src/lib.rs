//! gapminder-scenes: a scene-based presentation of the Gapminder dataset.
//!
//! The crate loads country-year records from CSV, aggregates them, and turns
//! each of three scenes into a backend-agnostic `RenderFrame`. A
//! `Presentation` sequences the scenes over a `Surface` and manages the
//! hover tooltip of the interactive scatter scene.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod loader;
pub mod render;
pub mod scenes;
pub mod telemetry;

pub use api::{Presentation, PresentationConfig};
pub use core::{Dataset, Record};
pub use error::{LoadError, SceneError, SceneResult};
pub use loader::{LoadOptions, load_dataset, load_dataset_async, parse_dataset};
pub use scenes::{SceneKind, SceneRegistry};
