//! # rigger-renderer
//!
//! Tera-based generation of addon files through an output sink.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rigger_renderer::get_template;
//! use rigger_writer::DryRunRecorder;
//!
//! fn preview() -> Result<(), rigger_renderer::RenderError> {
//!     let mut recorder = DryRunRecorder::new();
//!     let mut handle = get_template("webapp_routing", None, "manifests", &mut recorder)?;
//!     handle.config_mut().set_variable("ingress-host", "myapp.example.com");
//!     handle.generate()?;
//!     drop(handle);
//!     println!("{}", recorder.info().to_pretty_json()?);
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod handle;

pub use context::TemplateContext;
pub use engine::TemplateEngine;
pub use error::RenderError;
pub use handle::{get_template, TemplateHandle};
