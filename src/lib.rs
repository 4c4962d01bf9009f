//! pathgen: generate provider resource and documentation files from the
//! path items of an OpenAPI document.
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use pathgen::codegen::{EndpointRegistry, TeraRenderer};
//! use pathgen::generate::Generator;
//! use pathgen::output::FileSystemOutput;
//!
//! # async fn demo() -> pathgen::core::Result<()> {
//! let document = pathgen::openapi::load_document(Path::new("openapi.json")).await?;
//! let generator = Generator::new(
//!     EndpointRegistry::default(),
//!     Arc::new(TeraRenderer::embedded()?),
//!     Arc::new(FileSystemOutput::new()),
//!     "out",
//! );
//! let report = generator.run(&document).await;
//! assert!(report.is_success());
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod codegen;
pub mod core;
pub mod generate;
pub mod openapi;
pub mod output;
