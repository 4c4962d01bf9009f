//! Which endpoints are generated, and with which template kind.

use indexmap::IndexMap;

use super::kind::TemplateKind;

/// Endpoints generated when the config names none
const DEFAULT_ENDPOINTS: &[(&str, TemplateKind)] =
    &[("/transform/role/{name}", TemplateKind::Resource)];

/// Ordered mapping of endpoint path to template kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRegistry {
    entries: IndexMap<String, TemplateKind>,
}

impl EndpointRegistry {
    pub fn from_entries(entries: IndexMap<String, TemplateKind>) -> Self {
        Self { entries }
    }

    /// Template kind registered for `endpoint`
    pub fn get(&self, endpoint: &str) -> Option<TemplateKind> {
        self.entries.get(endpoint).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, TemplateKind)> {
        self.entries
            .iter()
            .map(|(endpoint, kind)| (endpoint.as_str(), *kind))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EndpointRegistry {
    fn default() -> Self {
        DEFAULT_ENDPOINTS
            .iter()
            .map(|(endpoint, kind)| (endpoint.to_string(), *kind))
            .collect()
    }
}

impl FromIterator<(String, TemplateKind)> for EndpointRegistry {
    fn from_iter<I: IntoIterator<Item = (String, TemplateKind)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
