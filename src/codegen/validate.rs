//! Structural checks run before an endpoint may be rendered.
//!
//! Checks run in a fixed order and stop at the first failure:
//! missing record, blank `endpoint`, blank `dir_name`, blank exported
//! prefix, blank private prefix, then each parameter in order.

use std::ops::Deref;

use thiserror::Error;

use super::endpoint::TemplatableEndpoint;
use super::params::{UnsupportedType, classify};

/// First problem found on an endpoint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("endpoint is nil")]
    Missing,

    #[error("endpoint cannot be blank for {0:?}")]
    BlankEndpoint(Box<TemplatableEndpoint>),

    #[error("dirname cannot be blank for {0:?}")]
    BlankDirName(Box<TemplatableEndpoint>),

    #[error("exported function prefix cannot be blank for {0:?}")]
    BlankExportedFuncPrefix(Box<TemplatableEndpoint>),

    #[error("private function prefix cannot be blank for {0:?}")]
    BlankPrivateFuncPrefix(Box<TemplatableEndpoint>),

    #[error(transparent)]
    UnsupportedParam(#[from] UnsupportedType),
}

impl ValidationError {
    /// The endpoint a structural check failed on.
    pub fn endpoint(&self) -> Option<&TemplatableEndpoint> {
        match self {
            Self::BlankEndpoint(endpoint)
            | Self::BlankDirName(endpoint)
            | Self::BlankExportedFuncPrefix(endpoint)
            | Self::BlankPrivateFuncPrefix(endpoint) => Some(&**endpoint),
            Self::Missing | Self::UnsupportedParam(_) => None,
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate an optional endpoint record.
pub fn validate(endpoint: Option<&TemplatableEndpoint>) -> Result<(), ValidationError> {
    let Some(endpoint) = endpoint else {
        return Err(ValidationError::Missing);
    };

    let structural: [(&str, fn(Box<TemplatableEndpoint>) -> ValidationError); 4] = [
        (endpoint.endpoint.as_str(), ValidationError::BlankEndpoint),
        (endpoint.dir_name.as_str(), ValidationError::BlankDirName),
        (
            endpoint.exported_func_prefix.as_str(),
            ValidationError::BlankExportedFuncPrefix,
        ),
        (
            endpoint.private_func_prefix.as_str(),
            ValidationError::BlankPrivateFuncPrefix,
        ),
    ];
    if let Some((_, to_error)) = structural.into_iter().find(|(field, _)| is_blank(field)) {
        return Err(to_error(Box::new(endpoint.clone())));
    }

    for param in &endpoint.parameters {
        classify(param)?;
    }
    Ok(())
}

impl TemplatableEndpoint {
    /// Shorthand for [`validate`] on a present endpoint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(Some(self))
    }
}

/// An endpoint that passed [`validate`]; the only form renderers accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEndpoint(TemplatableEndpoint);

impl ValidatedEndpoint {
    pub fn into_inner(self) -> TemplatableEndpoint {
        self.0
    }
}

impl TryFrom<TemplatableEndpoint> for ValidatedEndpoint {
    type Error = ValidationError;

    fn try_from(endpoint: TemplatableEndpoint) -> Result<Self, Self::Error> {
        endpoint.validate()?;
        Ok(Self(endpoint))
    }
}

impl Deref for ValidatedEndpoint {
    type Target = TemplatableEndpoint;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::endpoint::TemplatableParam;

    fn named(endpoint: &str, dir_name: &str, exported: &str, private: &str) -> TemplatableEndpoint {
        TemplatableEndpoint {
            endpoint: endpoint.to_string(),
            dir_name: dir_name.to_string(),
            exported_func_prefix: exported.to_string(),
            private_func_prefix: private.to_string(),
            ..Default::default()
        }
    }

    fn with_param(schema_type: &str, item_type: Option<&str>, name: &str) -> TemplatableEndpoint {
        TemplatableEndpoint {
            parameters: vec![TemplatableParam {
                name: name.to_string(),
                schema_type: schema_type.to_string(),
                item_type: item_type.map(str::to_string),
                ..Default::default()
            }],
            ..named("foo", "foo", "foo", "foo")
        }
    }

    #[test]
    fn test_missing_endpoint() {
        assert_eq!(validate(None), Err(ValidationError::Missing));
        assert_eq!(validate(None).unwrap_err().to_string(), "endpoint is nil");
    }

    #[test]
    fn test_structural_checks_in_order() {
        let cases = [
            (named("", "", "", ""), "endpoint cannot be blank for "),
            (named("foo", "", "", ""), "dirname cannot be blank for "),
            (
                named("foo", "foo", "", ""),
                "exported function prefix cannot be blank for ",
            ),
            (
                named("foo", "foo", "foo", ""),
                "private function prefix cannot be blank for ",
            ),
        ];
        for (endpoint, expected_prefix) in cases {
            let err = endpoint.validate().unwrap_err();
            let message = err.to_string();
            assert!(
                message.starts_with(expected_prefix),
                "expected {expected_prefix:?}, got {message:?}"
            );
            assert_eq!(message, format!("{expected_prefix}{endpoint:?}"));
            assert_eq!(err.endpoint(), Some(&endpoint));
        }
    }

    #[test]
    fn test_dirname_reported_before_prefixes() {
        let endpoint = named("/transform/role/{name}", "", "", "");
        assert!(matches!(
            endpoint.validate(),
            Err(ValidationError::BlankDirName(_))
        ));
    }

    #[test]
    fn test_structural_error_before_parameter_error() {
        let mut endpoint = with_param("object", None, "settings");
        endpoint.private_func_prefix.clear();
        assert!(matches!(
            endpoint.validate(),
            Err(ValidationError::BlankPrivateFuncPrefix(_))
        ));
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let endpoint = named("foo", "  ", "foo", "foo");
        assert!(matches!(
            endpoint.validate(),
            Err(ValidationError::BlankDirName(_))
        ));

        // A whitespace endpoint is reported before the blank dirname
        let endpoint = named("\t", "", "", "");
        let err = endpoint.validate().unwrap_err();
        assert!(matches!(err, ValidationError::BlankEndpoint(_)));
        assert_eq!(err.to_string(), format!("endpoint cannot be blank for {endpoint:?}"));

        let endpoint = named("foo", "foo", "foo", " \n");
        assert!(matches!(
            endpoint.validate(),
            Err(ValidationError::BlankPrivateFuncPrefix(_))
        ));
    }

    #[test]
    fn test_dump_mentions_fields() {
        let message = named("foo", "", "", "").validate().unwrap_err().to_string();
        assert!(message.contains("endpoint: \"foo\""));
        assert!(message.contains("dir_name: \"\""));
        assert!(message.contains("parameters: []"));
        assert!(message.contains("supports_read: false"));
    }

    #[test]
    fn test_valid_without_parameters() {
        assert_eq!(named("foo", "foo", "foo", "foo").validate(), Ok(()));
    }

    #[test]
    fn test_parameter_checks() {
        let cases = [
            (with_param("foo", None, "some-param"), Some("unsupported type of foo for some-param")),
            (with_param("string", None, "some-param"), None),
            (with_param("array", Some("string"), "foo"), None),
            (
                with_param("array", Some("object"), "foo"),
                Some("unsupported array type of object for foo"),
            ),
        ];
        for (endpoint, expected) in cases {
            let actual = endpoint.validate().err().map(|e| e.to_string());
            assert_eq!(actual.as_deref(), expected, "input: {endpoint:?}");
        }
    }

    #[test]
    fn test_first_unsupported_parameter_wins() {
        let mut endpoint = with_param("string", None, "ok");
        for (name, schema_type) in [("first", "object"), ("second", "foo")] {
            endpoint.parameters.push(TemplatableParam {
                name: name.to_string(),
                schema_type: schema_type.to_string(),
                ..Default::default()
            });
        }
        let err = endpoint.validate().unwrap_err();
        assert_eq!(err.to_string(), "unsupported type of object for first");
        assert!(err.endpoint().is_none());
    }

    #[test]
    fn test_validated_endpoint() {
        let validated = ValidatedEndpoint::try_from(named("foo", "foo", "Foo", "foo")).unwrap();
        assert_eq!(validated.exported_func_prefix, "Foo");
        assert_eq!(validated.into_inner().endpoint, "foo");

        let rejected = ValidatedEndpoint::try_from(named("foo", "", "", ""));
        assert!(matches!(rejected, Err(ValidationError::BlankDirName(_))));
    }

    #[test]
    fn test_validation_is_deterministic() {
        let endpoint = with_param("array", Some("object"), "foo");
        assert_eq!(endpoint.validate(), endpoint.clone().validate());
    }
}
