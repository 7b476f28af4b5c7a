//! Terminal prompts (inquire) and styled progress output (console).

use api_cli_codegen::{parse_sample, Question, ScaffoldEvent, ScaffoldInteraction};
use api_cli_core::{CoreError, HttpMethod, Route};
use console::style;
use inquire::error::{CustomUserError, InquireError};
use inquire::validator::Validation;
use inquire::{Confirm, Select, Text};
use std::path::Path;

/// Ctrl-C and Esc end the program quietly; anything else is a real error
pub fn map_prompt_error(err: InquireError) -> CoreError {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            CoreError::Interrupted
        }
        InquireError::IO(io) => CoreError::Io(io),
        other => CoreError::validation(format!("Prompt failed: {}", other)),
    }
}

pub fn prompt_route() -> Result<Route, CoreError> {
    let input = Text::new("Enter the route for the API endpoint")
        .with_placeholder("/members/:memberId")
        .with_validator(|input: &str| {
            Ok::<_, CustomUserError>(match Route::check(input) {
                Ok(()) => Validation::Valid,
                Err(message) => Validation::Invalid(message.into()),
            })
        })
        .prompt()
        .map_err(map_prompt_error)?;

    Route::parse(&input)
}

pub fn prompt_method() -> Result<HttpMethod, CoreError> {
    Select::new(
        "Select the method for the API endpoint",
        HttpMethod::ALL.to_vec(),
    )
    .prompt()
    .map_err(map_prompt_error)
}

/// Asks until the text parses as a JSON sample, returns the raw text
pub fn prompt_json_sample() -> Result<String, CoreError> {
    Text::new("Enter the JSON object")
        .with_validator(|input: &str| {
            Ok::<_, CustomUserError>(match parse_sample(input) {
                Ok(_) => Validation::Valid,
                Err(err) => Validation::Invalid(err.to_string().into()),
            })
        })
        .prompt()
        .map_err(map_prompt_error)
}

fn skipped_message(path: &Path) -> String {
    format!("Skipped to create {}", path.display())
}

/// Scaffold interaction backed by the terminal. A preset answer skips the
/// yes/no prompts entirely.
pub struct TerminalInteraction {
    assume: Option<bool>,
}

impl TerminalInteraction {
    pub fn new(assume: Option<bool>) -> Self {
        Self { assume }
    }
}

impl ScaffoldInteraction for TerminalInteraction {
    fn confirm(&mut self, question: &Question) -> Result<bool, CoreError> {
        if let Some(answer) = self.assume {
            tracing::debug!(%question, answer, "answered from configuration");
            return Ok(answer);
        }

        let message = match question {
            Question::CreateSchema(_) => question.to_string(),
            Question::CreateAdditionalSchema(_) => style(question).yellow().to_string(),
        };

        Confirm::new(&message)
            .with_default(question.default_answer())
            .prompt()
            .map_err(map_prompt_error)
    }

    fn notify(&mut self, event: &ScaffoldEvent) {
        match event {
            ScaffoldEvent::EndpointExists { method, route } => println!(
                "{}",
                style(format!(
                    "Error: The {} route already exists in {}",
                    method.as_upper(),
                    route
                ))
                .red()
            ),
            ScaffoldEvent::EndpointCreated { method, route } => println!(
                "{}",
                style(format!("Created {} file in {}", method.as_upper(), route)).green()
            ),
            ScaffoldEvent::SchemaCreated { file_name, route } => println!(
                "{}",
                style(format!("Created {} in {}", file_name, route)).green()
            ),
            ScaffoldEvent::SchemaSkipped { path } => {
                eprintln!("{}", style(skipped_message(path)).black().on_yellow())
            }
            ScaffoldEvent::Completed { path } => {
                tracing::info!(path = %path.display(), "endpoint written");
            }
        }
    }
}
