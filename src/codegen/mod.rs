//! Turning OpenAPI path items into rendered provider files.
//!
//! The flow for one endpoint is: build a [`TemplatableEndpoint`] from the
//! path item, [`validate`] it into a [`ValidatedEndpoint`], then hand that to
//! a [`Renderer`] once per [`ArtifactKind`].

pub mod endpoint;
pub mod kind;
pub mod naming;
pub mod params;
pub mod registry;
pub mod render;
pub mod validate;

pub use endpoint::{ParamLocation, TemplatableEndpoint, TemplatableParam};
pub use kind::{ArtifactKind, TemplateKind};
pub use params::{ParamShape, ScalarType, UnsupportedType, classify};
pub use registry::EndpointRegistry;
pub use render::{Renderer, TeraRenderer};
pub use validate::{ValidatedEndpoint, ValidationError, validate};
