//! Tera-based rendering of validated endpoints.
//!
//! Each [`TemplateKind`] has a code and a doc template, named
//! `<kind dir>/<artifact>.tera` (for example `resources/code.tera`). The
//! built-in set is compiled into the binary; a template directory with the
//! same layout can replace it.
//!
//! Templates see every field of the endpoint (`endpoint`, `dir_name`,
//! `exported_func_prefix`, `private_func_prefix`, `parameters`,
//! `supports_read`, `supports_write`, `supports_delete`) plus
//! `template_kind` and `mount` (the first path segment, e.g. `transform`),
//! and can use the `terraform_type` filter to map a schema
//! type name to a provider schema type.

use std::collections::HashMap;
use std::path::Path;

use rust_embed::RustEmbed;
use serde_json::Value as JsonValue;
use tera::{Context, Tera};
use tracing::{debug, error};

use super::kind::{ArtifactKind, TemplateKind};
use super::naming::first_field;
use super::params::{ARRAY_TYPE, ScalarType};
use super::validate::ValidatedEndpoint;
use crate::core::error::{Error, Result};

/// Templates compiled into the binary from the `templates/` folder
#[derive(RustEmbed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

const TEMPLATE_SUFFIX: &str = ".tera";

/// Turns a validated endpoint into file contents
pub trait Renderer: Send + Sync {
    fn render(
        &self,
        kind: TemplateKind,
        artifact: ArtifactKind,
        endpoint: &ValidatedEndpoint,
    ) -> Result<String>;
}

/// Tera-based renderer
#[derive(Debug, Clone)]
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    /// Renderer using the templates compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let mut templates = Vec::new();
        for name in EmbeddedTemplates::iter().filter(|name| name.ends_with(TEMPLATE_SUFFIX)) {
            let file = EmbeddedTemplates::get(&name)
                .ok_or_else(|| Error::template(format!("Embedded template missing: {name}")))?;
            let content = std::str::from_utf8(file.data.as_ref()).map_err(|e| {
                Error::template(format!("Embedded template {name} is not valid UTF-8: {e}"))
            })?;
            templates.push((name.into_owned(), content.to_string()));
        }

        let mut tera = Tera::default();
        tera.add_raw_templates(templates)?;
        ensure_required(&tera, "built-in templates")?;
        Ok(Self::with_filters(tera))
    }

    /// Renderer using every `*.tera` file below `dir`.
    ///
    /// Fails if any of the code/doc templates for a template kind is
    /// missing.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::template(format!(
                "Template directory does not exist: {}",
                dir.display()
            )));
        }

        let glob = dir.join("**").join(format!("*{TEMPLATE_SUFFIX}"));
        let tera = Tera::new(&glob.to_string_lossy())?;
        ensure_required(&tera, &dir.display().to_string())?;

        debug!(dir = %dir.display(), "Loaded templates from directory");
        Ok(Self::with_filters(tera))
    }

    fn with_filters(mut tera: Tera) -> Self {
        tera.register_filter("terraform_type", terraform_type);
        Self { tera }
    }

    /// Names of all loaded templates, sorted.
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }
}

impl Renderer for TeraRenderer {
    fn render(
        &self,
        kind: TemplateKind,
        artifact: ArtifactKind,
        endpoint: &ValidatedEndpoint,
    ) -> Result<String> {
        let template_name = artifact.template_name(kind);
        let mut context = Context::from_serialize(&**endpoint)?;
        context.insert("template_kind", kind.as_str());
        context.insert("mount", first_field(&endpoint.endpoint));

        debug!(
            endpoint = %endpoint.endpoint,
            template = %template_name,
            "Rendering template"
        );
        self.tera.render(&template_name, &context).map_err(|e| {
            error!("Tera error details: {e:?}");
            Error::template(format!("Failed to render template '{template_name}': {e}"))
        })
    }
}

/// Fails unless `tera` has the code and doc template of every kind.
fn ensure_required(tera: &Tera, origin: &str) -> Result<()> {
    let missing: Vec<String> = TemplateKind::all()
        .flat_map(|kind| ArtifactKind::all().map(move |artifact| artifact.template_name(kind)))
        .filter(|name| !tera.get_template_names().any(|loaded| loaded == name.as_str()))
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    Err(Error::template(format!(
        "Missing templates in {origin}: {}",
        missing.join(", ")
    )))
}

/// Tera filter mapping a schema type name to a provider schema type.
fn terraform_type(value: &JsonValue, _args: &HashMap<String, JsonValue>) -> tera::Result<JsonValue> {
    let name = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("terraform_type expects a string"))?;
    let mapped = if name == ARRAY_TYPE {
        "schema.TypeList"
    } else {
        match name.parse::<ScalarType>() {
            Ok(ScalarType::String) => "schema.TypeString",
            Ok(ScalarType::Boolean) => "schema.TypeBool",
            Ok(ScalarType::Integer) => "schema.TypeInt",
            Ok(ScalarType::Number) => "schema.TypeFloat",
            Err(()) => {
                return Err(tera::Error::msg(format!(
                    "no provider type for schema type {name:?}"
                )));
            }
        }
    };
    Ok(JsonValue::String(mapped.to_string()))
}
