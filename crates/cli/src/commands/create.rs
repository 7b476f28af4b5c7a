use api_cli_codegen::{CodeGenerator, EndpointRequest, ScaffoldOutcome};
use api_cli_core::{CliConfig, CoreError, HttpMethod, Route};
use console::style;

use crate::interactive::{self, TerminalInteraction};

/// Create files (api endpoint & schema) for a route. Anything not given on
/// the command line is prompted for.
pub fn run(
    config: &CliConfig,
    route: Option<Route>,
    method: Option<HttpMethod>,
) -> Result<(), CoreError> {
    let route = match route {
        Some(route) => route,
        None => interactive::prompt_route()?,
    };
    let method = match method {
        Some(method) => method,
        None => interactive::prompt_method()?,
    };

    let generator = CodeGenerator::new(config);
    let mut terminal = TerminalInteraction::new(config.assume);
    let request = EndpointRequest::new(route, method);

    match generator.create_endpoint(&request, &mut terminal)? {
        ScaffoldOutcome::EndpointExists { path } => {
            tracing::debug!(path = %path.display(), "nothing written");
        }
        ScaffoldOutcome::Created(report) => {
            tracing::info!(
                created = report.created.len(),
                skipped = report.skipped.len(),
                "scaffold finished"
            );
            println!(
                "{}",
                style("Please fix the @ in the generated file with the appropriate handlers & permissions.")
                    .underlined()
                    .magenta()
                    .bright()
            );
            println!("{}", style("Happy Coding!🚀🚀🚀").on_green());
        }
    }

    Ok(())
}
