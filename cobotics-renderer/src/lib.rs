//! # cobotics-renderer
//!
//! Tera-based rendering of the Cobotics site page from loaded content data.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cobotics_core::{data, BuildConfig};
//! use cobotics_renderer::Renderer;
//!
//! fn render_page(config: &BuildConfig) {
//!     if let (Ok(site), Ok(renderer)) = (data::load_all_at(&config.data_dir), Renderer::new(config)) {
//!         if let Ok(html) = renderer.render(&site) {
//!             println!("{} bytes", html.len());
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod helpers;

pub use context::SiteContext;
pub use engine::{Renderer, TemplateEngine};
pub use error::RenderError;
pub use helpers::JSON_HELPER;
