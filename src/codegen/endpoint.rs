//! The renderer-ready endpoint record and its construction from a path item.

use std::collections::HashSet;

use serde::Serialize;

use super::naming::{clean, last_field, parent_field};
use super::params::ARRAY_TYPE;
use crate::core::utils::to_proper_case;
use crate::openapi::{Parameter, ParameterLocation, PathItem, Schema};

/// Normalized, renderer-ready view of one API path.
///
/// Built by [`TemplatableEndpoint::from_path_item`], which never fails;
/// shape problems are reported by [`validate`](super::validate::validate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplatableEndpoint {
    /// Raw path including positional markers, e.g. `/transform/role/{name}`
    pub endpoint: String,
    pub dir_name: String,
    pub exported_func_prefix: String,
    pub private_func_prefix: String,
    pub parameters: Vec<TemplatableParam>,
    pub supports_read: bool,
    pub supports_write: bool,
    pub supports_delete: bool,
}

/// Where a parameter is supplied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Path,
    #[default]
    Query,
    Header,
    Cookie,
    /// A property of the JSON request body
    Body,
}

impl From<ParameterLocation> for ParamLocation {
    fn from(location: ParameterLocation) -> Self {
        match location {
            ParameterLocation::Path => Self::Path,
            ParameterLocation::Query => Self::Query,
            ParameterLocation::Header => Self::Header,
            ParameterLocation::Cookie => Self::Cookie,
        }
    }
}

/// One parameter of a [`TemplatableEndpoint`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplatableParam {
    pub name: String,
    /// Declared schema type; empty when the source declared none
    pub schema_type: String,
    /// Element type, for `array` parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location: ParamLocation,
    pub required: bool,
}

impl TemplatableParam {
    fn from_schema(name: &str, schema: &Schema, location: ParamLocation, required: bool) -> Self {
        let schema_type = schema.schema_type.clone().unwrap_or_default();
        // Only arrays carry an element type
        let item_type = if schema_type == ARRAY_TYPE {
            schema
                .items
                .as_ref()
                .and_then(|items| items.schema_type.clone())
        } else {
            None
        };
        Self {
            name: name.to_string(),
            schema_type,
            item_type,
            description: schema.description.clone(),
            location,
            required,
        }
    }

    fn from_parameter(param: &Parameter) -> Self {
        let mut templatable =
            Self::from_schema(&param.name, &param.schema, param.location.into(), param.required);
        // The parameter's own description wins over the schema's
        if param.description.is_some() {
            templatable.description = param.description.clone();
        }
        templatable
    }
}

impl TemplatableEndpoint {
    /// Build the templatable form of `endpoint`.
    ///
    /// For `/transform/role/{name}` the directory name is `role`, the
    /// private prefix `name` and the exported prefix `Name`. Degenerate
    /// paths produce blank fields rather than an error.
    pub fn from_path_item(endpoint: &str, item: &PathItem) -> Self {
        let private_func_prefix = clean(last_field(endpoint));
        Self {
            endpoint: endpoint.to_string(),
            dir_name: clean(parent_field(endpoint)),
            exported_func_prefix: to_proper_case(&private_func_prefix),
            private_func_prefix,
            parameters: collect_parameters(item),
            supports_read: item.get.is_some(),
            supports_write: item.post.is_some() || item.put.is_some(),
            supports_delete: item.delete.is_some(),
        }
    }

    /// Parameters with the given location, in order.
    pub fn parameters_in(&self, location: ParamLocation) -> impl Iterator<Item = &TemplatableParam> {
        self.parameters
            .iter()
            .filter(move |param| param.location == location)
    }
}

/// Gather every parameter of `item` in a stable order: path-level
/// parameters, then operation parameters (get, post, put, delete), then
/// JSON body properties of post and put. The first definition of a name wins.
fn collect_parameters(item: &PathItem) -> Vec<TemplatableParam> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    let declared = item
        .parameters
        .iter()
        .chain(item.operations().flat_map(|op| op.parameters.iter()))
        .map(TemplatableParam::from_parameter);

    let body = [&item.post, &item.put]
        .into_iter()
        .flatten()
        .filter_map(|op| op.json_body_schema())
        .flat_map(|schema| {
            schema.properties.iter().map(move |(name, property)| {
                let required = schema.required.iter().any(|r| r == name);
                TemplatableParam::from_schema(name, property, ParamLocation::Body, required)
            })
        });

    for param in declared.chain(body) {
        if seen.insert(param.name.clone()) {
            result.push(param);
        }
    }
    result
}
