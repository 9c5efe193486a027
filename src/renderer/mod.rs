//! Rendering module
//!
//! `shapes` turns a session into primitives; on the web, `canvas` paints them.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use shapes::{Shape, scene};
