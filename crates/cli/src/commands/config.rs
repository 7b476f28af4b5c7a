use api_cli_core::CliConfig;
use console::style;

/// Prints the resolved configuration and where each value came from
pub fn run(config: &CliConfig) {
    println!("{}", style("📋 Configuration:").bold());
    println!("  📁 Project root: {}", style(config.project_root().display()).cyan());
    println!("  🛣️  Routes dir:  {}", style(config.routes_path().display()).cyan());
    println!("  📝 Log level:   {}", style(&config.log_level).cyan());
    let assume = match config.assume {
        Some(true) => "yes",
        Some(false) => "no",
        None => "ask",
    };
    println!("  ❓ Prompts:     {}", style(assume).cyan());
    println!();

    println!("{}", style("Sources:").bold());
    let mut sources: Vec<_> = config.config_sources().iter().collect();
    sources.sort_by(|a, b| a.0.cmp(b.0));
    for (field, source) in sources {
        println!("  {:<11} {}", field, style(source).dim());
    }
}
