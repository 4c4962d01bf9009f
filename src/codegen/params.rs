//! Parameter type classification.
//!
//! Decides whether a parameter's declared schema can be expressed by the
//! templates: a supported scalar, or an array of a supported scalar.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use super::endpoint::TemplatableParam;

/// Schema type name for arrays
pub const ARRAY_TYPE: &str = "array";

/// Scalar schema types the templates can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    String,
    Boolean,
    Integer,
    Number,
}

impl ScalarType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalarType {
    type Err = ();

    /// Schema type names are case-sensitive, as in JSON schema.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "boolean" => Ok(Self::Boolean),
            "integer" => Ok(Self::Integer),
            "number" => Ok(Self::Number),
            _ => Err(()),
        }
    }
}

/// Accepted shape of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamShape {
    Scalar(ScalarType),
    Array(ScalarType),
}

/// Why a parameter cannot be rendered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnsupportedType {
    #[error("unsupported type of {schema_type} for {param}")]
    Scalar { schema_type: String, param: String },

    #[error("unsupported array type of {item_type} for {param}")]
    ArrayItem { item_type: String, param: String },
}

impl UnsupportedType {
    /// Name of the rejected parameter
    pub fn param(&self) -> &str {
        match self {
            Self::Scalar { param, .. } | Self::ArrayItem { param, .. } => param,
        }
    }
}

/// Classify a parameter, rejecting shapes the templates cannot express.
pub fn classify(param: &TemplatableParam) -> Result<ParamShape, UnsupportedType> {
    if param.schema_type == ARRAY_TYPE {
        let item_type = param.item_type.as_deref().unwrap_or_default();
        return item_type
            .parse()
            .map(ParamShape::Array)
            .map_err(|_| UnsupportedType::ArrayItem {
                item_type: item_type.to_string(),
                param: param.name.clone(),
            });
    }

    param
        .schema_type
        .parse()
        .map(ParamShape::Scalar)
        .map_err(|_| UnsupportedType::Scalar {
            schema_type: param.schema_type.clone(),
            param: param.name.clone(),
        })
}
