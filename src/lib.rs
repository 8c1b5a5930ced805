#![warn(clippy::all, rust_2018_idioms)]

pub mod animation;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod scene;
pub mod shape;
pub mod state;
pub mod style;
pub mod tools;

pub use animation::Animator;
pub use app::ShapeApp;
pub use config::AppSettings;
pub use error::{EditorError, EditorResult};
pub use input::{InputEvent, InputLocation};
pub use renderer::Renderer;
pub use scene::Scene;
pub use shape::{Shape, ShapeId, ShapeKind};
pub use state::EditorState;
pub use style::StyleState;
pub use tools::Mode;
