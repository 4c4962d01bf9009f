//! Generation driver.
//!
//! Walks the paths of an OpenAPI document, picks out the ones in the
//! [`EndpointRegistry`], and for each one transforms, validates, renders and
//! writes. A failing endpoint is recorded in the [`GenerationReport`] and the
//! run moves on to the next one.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::codegen::{
    ArtifactKind, EndpointRegistry, Renderer, TemplatableEndpoint, TemplateKind, ValidatedEndpoint,
};
use crate::core::error::{Error, Result};
use crate::openapi::{OpenApiDocument, PathItem};
use crate::output::{Artifact, OutputSink, artifact_path};

/// An endpoint that went through successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEndpoint {
    pub endpoint: String,
    pub kind: TemplateKind,
    /// Files written for the endpoint; empty for a check run
    pub files: Vec<PathBuf>,
}

/// An endpoint that was skipped or failed part-way
#[derive(Debug)]
pub struct EndpointFailure {
    pub endpoint: String,
    pub error: Error,
}

/// Outcome of a [`Generator::run`] or [`Generator::check`]
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub generated: Vec<GeneratedEndpoint>,
    pub failures: Vec<EndpointFailure>,
    /// Registered endpoints the document does not define
    pub missing: Vec<String>,
}

impl GenerationReport {
    /// No endpoint failed and none was missing.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.missing.is_empty()
    }

    /// Number of files written across all endpoints
    pub fn file_count(&self) -> usize {
        self.generated.iter().map(|g| g.files.len()).sum()
    }
}

/// Drives generation for the registered endpoints of a document
pub struct Generator {
    registry: EndpointRegistry,
    renderer: Arc<dyn Renderer>,
    output: Arc<dyn OutputSink>,
    output_root: PathBuf,
    generate_docs: bool,
}

impl Generator {
    pub fn new(
        registry: EndpointRegistry,
        renderer: Arc<dyn Renderer>,
        output: Arc<dyn OutputSink>,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry,
            renderer,
            output,
            output_root: output_root.into(),
            generate_docs: true,
        }
    }

    /// Turn documentation output on or off (on by default).
    pub fn with_docs(mut self, generate_docs: bool) -> Self {
        self.generate_docs = generate_docs;
        self
    }

    /// Generate every registered endpoint found in `document`.
    pub async fn run(&self, document: &OpenApiDocument) -> GenerationReport {
        let mut report = self.report_for(document);

        for (endpoint, item, kind) in self.selected(document) {
            debug!(endpoint = %endpoint, kind = %kind, "Generating endpoint");

            let validated = match prepare(endpoint, item) {
                Ok(validated) => validated,
                Err(e) => {
                    warn!(endpoint = %endpoint, error = %e, "Skipping endpoint");
                    report.failures.push(EndpointFailure {
                        endpoint: endpoint.to_string(),
                        error: e,
                    });
                    continue;
                }
            };

            match self.write_endpoint(&validated, kind).await {
                Ok(files) => report.generated.push(GeneratedEndpoint {
                    endpoint: endpoint.to_string(),
                    kind,
                    files,
                }),
                Err(e) => {
                    error!(endpoint = %endpoint, error = %e, "Failed to generate endpoint");
                    report.failures.push(EndpointFailure {
                        endpoint: endpoint.to_string(),
                        error: e,
                    });
                }
            }
        }

        info!(
            endpoints = report.generated.len(),
            failed = report.failures.len(),
            missing = report.missing.len(),
            "generated {} files",
            report.file_count()
        );
        report
    }

    /// Transform and validate every registered endpoint without rendering
    /// or writing anything.
    pub fn check(&self, document: &OpenApiDocument) -> GenerationReport {
        let mut report = self.report_for(document);

        for (endpoint, item, kind) in self.selected(document) {
            match prepare(endpoint, item) {
                Ok(_) => {
                    debug!(endpoint = %endpoint, "Endpoint is valid");
                    report.generated.push(GeneratedEndpoint {
                        endpoint: endpoint.to_string(),
                        kind,
                        files: Vec::new(),
                    });
                }
                Err(e) => {
                    warn!(endpoint = %endpoint, error = %e, "Endpoint is invalid");
                    report.failures.push(EndpointFailure {
                        endpoint: endpoint.to_string(),
                        error: e,
                    });
                }
            }
        }

        info!(
            valid = report.generated.len(),
            invalid = report.failures.len(),
            missing = report.missing.len(),
            "checked {} endpoints",
            report.generated.len() + report.failures.len()
        );
        report
    }

    /// Registered paths of `document`, in document order.
    fn selected<'a>(
        &'a self,
        document: &'a OpenApiDocument,
    ) -> impl Iterator<Item = (&'a str, &'a PathItem, TemplateKind)> {
        document.paths.iter().filter_map(|(endpoint, item)| {
            self.registry
                .get(endpoint)
                .map(|kind| (endpoint.as_str(), item, kind))
        })
    }

    /// A report pre-filled with the registered endpoints `document` lacks.
    fn report_for(&self, document: &OpenApiDocument) -> GenerationReport {
        let missing: Vec<String> = self
            .registry
            .iter()
            .filter(|(endpoint, _)| !document.paths.contains_key(*endpoint))
            .map(|(endpoint, _)| endpoint.to_string())
            .collect();
        for endpoint in &missing {
            warn!(endpoint = %endpoint, "Registered endpoint not found in document");
        }

        GenerationReport {
            missing,
            ..Default::default()
        }
    }

    async fn write_endpoint(
        &self,
        endpoint: &ValidatedEndpoint,
        kind: TemplateKind,
    ) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let artifacts = ArtifactKind::all()
            .filter(|artifact| self.generate_docs || *artifact == ArtifactKind::Code);

        for artifact in artifacts {
            let content = self.renderer.render(kind, artifact, endpoint)?;
            let path = artifact_path(&self.output_root, kind, artifact, &endpoint.endpoint);
            self.output
                .write_artifact(&Artifact {
                    path: path.clone(),
                    content,
                })
                .await?;
            files.push(path);
        }
        Ok(files)
    }
}

fn prepare(endpoint: &str, item: &PathItem) -> Result<ValidatedEndpoint> {
    let templatable = TemplatableEndpoint::from_path_item(endpoint, item);
    Ok(ValidatedEndpoint::try_from(templatable)?)
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tracing_test::traced_test;

    use super::*;
    use crate::codegen::{TeraRenderer, ValidationError};
    use crate::openapi::parse_document;

    /// Collects artifacts in memory instead of writing them
    #[derive(Default)]
    struct MemorySink {
        written: Mutex<Vec<Artifact>>,
    }

    impl MemorySink {
        fn paths(&self) -> Vec<PathBuf> {
            self.written
                .lock()
                .unwrap()
                .iter()
                .map(|a| a.path.clone())
                .collect()
        }
    }

    #[async_trait]
    impl OutputSink for MemorySink {
        async fn write_artifact(&self, artifact: &Artifact) -> Result<()> {
            self.written.lock().unwrap().push(artifact.clone());
            Ok(())
        }
    }

    /// Refuses to write anything
    struct ReadOnlySink;

    #[async_trait]
    impl OutputSink for ReadOnlySink {
        async fn write_artifact(&self, artifact: &Artifact) -> Result<()> {
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("read-only: {}", artifact.path.display()),
            )))
        }
    }

    const DOCUMENT: &str = r#"{
        "openapi": "3.0.2",
        "paths": {
            "/transform/alphabet/{name}": {
                "parameters": [ { "name": "name", "in": "path", "schema": { "type": "string" } } ],
                "post": { "requestBody": { "content": { "application/json": { "schema": {
                    "properties": { "settings": { "type": "object" } }
                } } } } }
            },
            "/transform/role/{name}": {
                "parameters": [ { "name": "name", "in": "path", "required": true,
                                  "schema": { "type": "string" } } ],
                "get": {},
                "post": { "requestBody": { "content": { "application/json": { "schema": {
                    "properties": { "transformations": { "type": "array", "items": { "type": "string" } } }
                } } } } },
                "delete": {}
            },
            "/transform/decode/{role_name}": {
                "parameters": [ { "name": "role_name", "in": "path", "schema": { "type": "string" } } ],
                "post": {}
            },
            "/sys/mounts": { "get": {} }
        }
    }"#;

    fn registry() -> EndpointRegistry {
        [
            ("/transform/role/{name}", TemplateKind::Resource),
            ("/transform/alphabet/{name}", TemplateKind::Resource),
            ("/transform/decode/{role_name}", TemplateKind::DataSource),
            ("/transform/template/{name}", TemplateKind::Resource),
        ]
        .into_iter()
        .map(|(endpoint, kind)| (endpoint.to_string(), kind))
        .collect()
    }

    fn generator(sink: Arc<dyn OutputSink>) -> Generator {
        let renderer = Arc::new(TeraRenderer::embedded().unwrap());
        Generator::new(registry(), renderer, sink, "out")
    }

    #[tokio::test]
    #[traced_test]
    async fn test_run_isolates_failures() {
        let sink = Arc::new(MemorySink::default());
        let document = parse_document(DOCUMENT).unwrap();

        let report = generator(sink.clone()).run(&document).await;

        assert!(!report.is_success());
        let generated: Vec<_> = report.generated.iter().map(|g| g.endpoint.as_str()).collect();
        assert_eq!(generated, vec!["/transform/role/{name}", "/transform/decode/{role_name}"]);

        assert_eq!(report.failures.len(), 1);
        let failure = &report.failures[0];
        assert_eq!(failure.endpoint, "/transform/alphabet/{name}");
        assert!(failure.error.is_validation());
        assert_eq!(failure.error.to_string(), "unsupported type of object for settings");

        assert_eq!(report.missing, vec!["/transform/template/{name}"]);
        assert_eq!(report.file_count(), 4);

        assert_eq!(
            sink.paths(),
            vec![
                Path::new("out/generated/resources/transform/role/name.go").to_path_buf(),
                Path::new("out/website/docs/generated/resources/transform/role/name.md")
                    .to_path_buf(),
                Path::new("out/generated/datasources/transform/decode/role_name.go").to_path_buf(),
                Path::new("out/website/docs/generated/datasources/transform/decode/role_name.md")
                    .to_path_buf(),
            ]
        );

        assert!(logs_contain("Skipping endpoint"));
        assert!(logs_contain("Registered endpoint not found in document"));
        assert!(logs_contain("generated 4 files"));
    }

    #[tokio::test]
    async fn test_run_without_docs() {
        let sink = Arc::new(MemorySink::default());
        let document = parse_document(DOCUMENT).unwrap();

        let report = generator(sink.clone()).with_docs(false).run(&document).await;

        assert_eq!(report.file_count(), 2);
        assert!(
            sink.paths()
                .iter()
                .all(|path| path.extension().is_some_and(|ext| ext == "go"))
        );
    }

    #[tokio::test]
    async fn test_unregistered_paths_are_ignored() {
        let sink = Arc::new(MemorySink::default());
        let document = parse_document(DOCUMENT).unwrap();

        let report = generator(sink.clone()).run(&document).await;

        assert!(report.generated.iter().all(|g| g.endpoint != "/sys/mounts"));
        assert!(report.failures.iter().all(|f| f.endpoint != "/sys/mounts"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_write_failures_are_recorded() {
        let document = parse_document(DOCUMENT).unwrap();

        let report = generator(Arc::new(ReadOnlySink)).run(&document).await;

        assert!(report.generated.is_empty());
        assert_eq!(report.failures.len(), 3);
        assert!(matches!(report.failures[1].error, Error::Io(_)));
        assert!(logs_contain("Failed to generate endpoint"));
        assert!(logs_contain("generated 0 files"));
    }

    #[test]
    fn test_check_writes_nothing() {
        let sink = Arc::new(MemorySink::default());
        let document = parse_document(DOCUMENT).unwrap();

        let report = generator(sink.clone()).check(&document);

        assert_eq!(report.generated.len(), 2);
        assert!(report.generated.iter().all(|g| g.files.is_empty()));
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.missing.len(), 1);
        assert!(sink.paths().is_empty());
    }

    #[test]
    fn test_degenerate_endpoint_fails_validation() {
        let document = parse_document(r#"{ "paths": { "/unlikely": { "get": {} } } }"#).unwrap();
        let registry = [("/unlikely".to_string(), TemplateKind::Resource)]
            .into_iter()
            .collect();
        let generator = Generator::new(
            registry,
            Arc::new(TeraRenderer::embedded().unwrap()),
            Arc::new(MemorySink::default()),
            "out",
        );

        let report = generator.check(&document);

        assert_eq!(report.failures.len(), 1);
        match &report.failures[0].error {
            Error::Validation(ValidationError::BlankDirName(endpoint)) => {
                assert_eq!(endpoint.private_func_prefix, "unlikely");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_report_is_success() {
        let report = GenerationReport::default();
        assert!(report.is_success());
        assert_eq!(report.file_count(), 0);
    }
}
