use console::style;

const BANNER: &str = r#"
   _    ___ ___      ___ _    ___
  /_\  | _ \_ _|___ / __| |  |_ _|
 / _ \ |  _/| ||___| (__| |__ | |
/_/ \_\|_| |___|    \___|____|___|
"#;

pub const TAGLINE: &str = "CLI to create API endpoint files.";

/// Shown when no subcommand is given
pub fn run() {
    println!("{}", style(BANNER).magenta().bold());
    println!();
    println!("{}", style(TAGLINE).on_magenta());
    println!();
    println!(
        "Run {} to scaffold an endpoint or {} to turn a JSON sample into a schema.",
        style("api-cli create").cyan(),
        style("api-cli json").cyan()
    );
}
