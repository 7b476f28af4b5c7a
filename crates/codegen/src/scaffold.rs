//! The `create` flow: endpoint handler plus optional schema files under
//! `<routes>/<route-dir>/`.
//!
//! Prompting and printing live behind [`ScaffoldInteraction`] so the flow
//! can run against a terminal or a scripted answer list.

use api_cli_core::{CoreError, HttpMethod, Route};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::templates::{EndpointTemplate, SCHEMA_STUB};
use crate::writer::CodeWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Response,
    Body,
}

impl SchemaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Response => "response",
            SchemaKind::Body => "body",
        }
    }

    /// `response.schema.js` / `body.schema.js`
    pub fn shared_file_name(&self) -> String {
        format!("{}.schema.js", self.as_str())
    }

    /// `<method>.response.schema.js` / `<method>.body.schema.js`
    pub fn method_file_name(&self, method: HttpMethod) -> String {
        format!("{}.{}.schema.js", method, self.as_str())
    }
}

/// Yes/no questions asked during scaffolding. Both default to "no".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    /// The shared schema file does not exist yet
    CreateSchema(SchemaKind),
    /// The shared schema file exists; offer a method-specific one
    CreateAdditionalSchema(SchemaKind),
}

impl Question {
    pub fn default_answer(&self) -> bool {
        false
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Question::CreateSchema(kind) => write!(
                f,
                "Would you like to create the {} file? (y,n)",
                kind.shared_file_name()
            ),
            Question::CreateAdditionalSchema(kind) => write!(
                f,
                "The {} file already exists. Would you like to create an additional {} schema file? (y,n)",
                kind.shared_file_name(),
                kind.as_str()
            ),
        }
    }
}

/// Progress reported to the user, in the order it happens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    EndpointExists { method: HttpMethod, route: String },
    EndpointCreated { method: HttpMethod, route: String },
    SchemaCreated { file_name: String, route: String },
    SchemaSkipped { path: PathBuf },
    Completed { path: PathBuf },
}

pub trait ScaffoldInteraction {
    fn confirm(&mut self, question: &Question) -> Result<bool, CoreError>;

    fn notify(&mut self, event: &ScaffoldEvent);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRequest {
    pub route: Route,
    pub method: HttpMethod,
}

impl EndpointRequest {
    pub fn new(route: Route, method: HttpMethod) -> Self {
        Self { route, method }
    }

    /// `_get.js`, `_post.js`, ...
    pub fn endpoint_file_name(&self) -> String {
        format!("_{}.js", self.method)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub endpoint: PathBuf,
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    /// Response schema file the handler imports
    pub response_schema: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// Nothing was written
    EndpointExists { path: PathBuf },
    Created(ScaffoldReport),
}

pub struct EndpointScaffolder {
    routes_root: PathBuf,
    writer: CodeWriter,
}

impl EndpointScaffolder {
    pub fn new(routes_root: impl Into<PathBuf>) -> Self {
        Self {
            routes_root: routes_root.into(),
            writer: CodeWriter::new(),
        }
    }

    pub fn endpoint_dir(&self, route: &Route) -> PathBuf {
        self.routes_root.join(route.dir_name())
    }

    pub fn scaffold(
        &self,
        request: &EndpointRequest,
        interaction: &mut dyn ScaffoldInteraction,
    ) -> Result<ScaffoldOutcome, CoreError> {
        let dir = self.endpoint_dir(&request.route);
        self.writer.ensure_dir(&dir)?;

        let endpoint = dir.join(request.endpoint_file_name());
        if endpoint.exists() {
            tracing::warn!(path = %endpoint.display(), "endpoint file already exists");
            interaction.notify(&ScaffoldEvent::EndpointExists {
                method: request.method,
                route: request.route.to_string(),
            });
            return Ok(ScaffoldOutcome::EndpointExists { path: endpoint });
        }

        // announced up front; the file itself is written once the schema
        // choices are known
        interaction.notify(&ScaffoldEvent::EndpointCreated {
            method: request.method,
            route: request.route.to_string(),
        });

        let mut report = ScaffoldReport {
            endpoint: endpoint.clone(),
            ..ScaffoldReport::default()
        };

        let response_schema =
            self.schema_step(SchemaKind::Response, request, &dir, interaction, &mut report)?;
        report.response_schema = response_schema;

        if request.method.accepts_body() {
            self.schema_step(SchemaKind::Body, request, &dir, interaction, &mut report)?;
        }

        let mut template = EndpointTemplate::new(request.method, &request.route);
        if let Some(file_name) = &report.response_schema {
            template = template.with_response_schema(file_name.clone());
        }
        self.writer.write_new(&endpoint, &template.render()?)?;
        report.created.push(endpoint.clone());

        interaction.notify(&ScaffoldEvent::Completed { path: endpoint });
        Ok(ScaffoldOutcome::Created(report))
    }

    /// Returns the schema file the handler should reference
    fn schema_step(
        &self,
        kind: SchemaKind,
        request: &EndpointRequest,
        dir: &Path,
        interaction: &mut dyn ScaffoldInteraction,
        report: &mut ScaffoldReport,
    ) -> Result<Option<String>, CoreError> {
        let shared_name = kind.shared_file_name();
        let shared_path = dir.join(&shared_name);

        if !shared_path.exists() {
            if !interaction.confirm(&Question::CreateSchema(kind))? {
                return Ok(None);
            }
            self.writer.write_new(&shared_path, SCHEMA_STUB)?;
            report.created.push(shared_path);
            interaction.notify(&ScaffoldEvent::SchemaCreated {
                file_name: shared_name.clone(),
                route: request.route.to_string(),
            });
            return Ok(Some(shared_name));
        }

        if !interaction.confirm(&Question::CreateAdditionalSchema(kind))? {
            report.skipped.push(shared_path.clone());
            interaction.notify(&ScaffoldEvent::SchemaSkipped { path: shared_path });
            return Ok(Some(shared_name));
        }

        let method_name = kind.method_file_name(request.method);
        let method_path = dir.join(&method_name);
        match self.writer.write_new(&method_path, SCHEMA_STUB) {
            Ok(()) => {
                report.created.push(method_path);
                interaction.notify(&ScaffoldEvent::SchemaCreated {
                    file_name: method_name.clone(),
                    route: request.route.to_string(),
                });
            }
            Err(CoreError::AlreadyExists { path }) => {
                tracing::warn!(path = %path.display(), "schema file already exists, keeping it");
                report.skipped.push(path.clone());
                interaction.notify(&ScaffoldEvent::SchemaSkipped { path });
            }
            Err(e) => return Err(e),
        }

        Ok(Some(method_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::fs;
    use tempfile::TempDir;

    /// Answers questions from a fixed list and records everything
    #[derive(Default)]
    struct Scripted {
        answers: VecDeque<bool>,
        asked: Vec<Question>,
        events: Vec<ScaffoldEvent>,
    }

    impl Scripted {
        fn answering(answers: &[bool]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl ScaffoldInteraction for Scripted {
        fn confirm(&mut self, question: &Question) -> Result<bool, CoreError> {
            self.asked.push(*question);
            Ok(self.answers.pop_front().unwrap_or(question.default_answer()))
        }

        fn notify(&mut self, event: &ScaffoldEvent) {
            self.events.push(event.clone());
        }
    }

    fn request(route: &str, method: HttpMethod) -> EndpointRequest {
        EndpointRequest::new(Route::parse(route).unwrap(), method)
    }

    fn created(outcome: ScaffoldOutcome) -> ScaffoldReport {
        match outcome {
            ScaffoldOutcome::Created(report) => report,
            other => panic!("expected created, got {other:?}"),
        }
    }

    #[test]
    fn test_question_text() {
        assert_eq!(
            Question::CreateSchema(SchemaKind::Response).to_string(),
            "Would you like to create the response.schema.js file? (y,n)"
        );
        assert_eq!(
            Question::CreateAdditionalSchema(SchemaKind::Body).to_string(),
            "The body.schema.js file already exists. Would you like to create an additional body schema file? (y,n)"
        );
    }

    #[test]
    fn test_get_with_new_response_schema() {
        let temp_dir = TempDir::new().unwrap();
        let scaffolder = EndpointScaffolder::new(temp_dir.path().join("routes"));
        let mut ui = Scripted::answering(&[true]);

        let report = created(
            scaffolder
                .scaffold(&request("/members/:memberId", HttpMethod::Get), &mut ui)
                .unwrap(),
        );

        let dir = temp_dir.path().join("routes/members/_memberId");
        assert_eq!(report.endpoint, dir.join("_get.js"));
        assert_eq!(report.response_schema.as_deref(), Some("response.schema.js"));
        assert_eq!(fs::read_to_string(dir.join("response.schema.js")).unwrap(), SCHEMA_STUB);
        // get has no body prompt
        assert_eq!(ui.asked, vec![Question::CreateSchema(SchemaKind::Response)]);

        let handler = fs::read_to_string(dir.join("_get.js")).unwrap();
        assert!(handler.starts_with("import responseSchema from './response.schema.js';"));
        assert!(matches!(ui.events.first(), Some(ScaffoldEvent::EndpointCreated { .. })));
        assert!(matches!(ui.events.last(), Some(ScaffoldEvent::Completed { .. })));
    }

    #[test]
    fn test_post_declining_everything() {
        let temp_dir = TempDir::new().unwrap();
        let scaffolder = EndpointScaffolder::new(temp_dir.path());
        let mut ui = Scripted::answering(&[false, false]);

        let report = created(
            scaffolder
                .scaffold(&request("/members", HttpMethod::Post), &mut ui)
                .unwrap(),
        );

        assert_eq!(
            ui.asked,
            vec![
                Question::CreateSchema(SchemaKind::Response),
                Question::CreateSchema(SchemaKind::Body)
            ]
        );
        assert_eq!(report.created, vec![temp_dir.path().join("members/_post.js")]);
        assert_eq!(report.response_schema, None);
        let handler = fs::read_to_string(&report.endpoint).unwrap();
        assert!(handler.starts_with("// Please link to corresponding response schema"));
    }

    #[test]
    fn test_existing_endpoint_stops_early() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("members");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("_put.js"), "existing").unwrap();

        let scaffolder = EndpointScaffolder::new(temp_dir.path());
        let mut ui = Scripted::default();
        let outcome = scaffolder
            .scaffold(&request("/members", HttpMethod::Put), &mut ui)
            .unwrap();

        assert_eq!(
            outcome,
            ScaffoldOutcome::EndpointExists {
                path: dir.join("_put.js")
            }
        );
        assert!(ui.asked.is_empty());
        assert_eq!(fs::read_to_string(dir.join("_put.js")).unwrap(), "existing");
    }

    #[test]
    fn test_existing_schemas_offer_method_specific_files() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("members");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("response.schema.js"), "shared").unwrap();
        fs::write(dir.join("body.schema.js"), "shared").unwrap();

        let scaffolder = EndpointScaffolder::new(temp_dir.path());
        // additional response schema: yes, additional body schema: no
        let mut ui = Scripted::answering(&[true, false]);
        let report = created(
            scaffolder
                .scaffold(&request("/members", HttpMethod::Patch), &mut ui)
                .unwrap(),
        );

        assert_eq!(
            ui.asked,
            vec![
                Question::CreateAdditionalSchema(SchemaKind::Response),
                Question::CreateAdditionalSchema(SchemaKind::Body)
            ]
        );
        assert_eq!(report.response_schema.as_deref(), Some("patch.response.schema.js"));
        assert!(dir.join("patch.response.schema.js").exists());
        assert!(!dir.join("patch.body.schema.js").exists());
        assert_eq!(report.skipped, vec![dir.join("body.schema.js")]);
        assert_eq!(fs::read_to_string(dir.join("body.schema.js")).unwrap(), "shared");
    }

    #[test]
    fn test_declined_additional_response_keeps_shared_import() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("members");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("response.schema.js"), "shared").unwrap();

        let scaffolder = EndpointScaffolder::new(temp_dir.path());
        let mut ui = Scripted::answering(&[false]);
        let report = created(
            scaffolder
                .scaffold(&request("/members", HttpMethod::Delete), &mut ui)
                .unwrap(),
        );

        assert_eq!(report.response_schema.as_deref(), Some("response.schema.js"));
        assert!(ui.events.contains(&ScaffoldEvent::SchemaSkipped {
            path: dir.join("response.schema.js")
        }));
    }

    #[test]
    fn test_existing_method_specific_schema_is_not_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("members");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("response.schema.js"), "shared").unwrap();
        fs::write(dir.join("get.response.schema.js"), "mine").unwrap();

        let scaffolder = EndpointScaffolder::new(temp_dir.path());
        let mut ui = Scripted::answering(&[true]);
        let report = created(
            scaffolder
                .scaffold(&request("/members", HttpMethod::Get), &mut ui)
                .unwrap(),
        );

        assert_eq!(report.response_schema.as_deref(), Some("get.response.schema.js"));
        assert_eq!(fs::read_to_string(dir.join("get.response.schema.js")).unwrap(), "mine");
        assert_eq!(report.skipped, vec![dir.join("get.response.schema.js")]);
    }

    #[test]
    fn test_interrupt_propagates_without_writing_endpoint() {
        struct Interrupting;

        impl ScaffoldInteraction for Interrupting {
            fn confirm(&mut self, _question: &Question) -> Result<bool, CoreError> {
                Err(CoreError::Interrupted)
            }

            fn notify(&mut self, _event: &ScaffoldEvent) {}
        }

        let temp_dir = TempDir::new().unwrap();
        let scaffolder = EndpointScaffolder::new(temp_dir.path());
        let err = scaffolder
            .scaffold(&request("/members", HttpMethod::Get), &mut Interrupting)
            .unwrap_err();

        assert!(err.is_interrupted());
        assert!(!temp_dir.path().join("members/_get.js").exists());
    }
}
