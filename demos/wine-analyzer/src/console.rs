//! Console banner and logging setup for the demo app.

use std::sync::OnceLock;

use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes the banner and tracing output.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

fn print_banner() {
    let banner = r#"
__     ___             _
\ \   / (_)_ __   __ _| |_   _ _______
 \ \ / /| | '_ \ / _` | | | | |_  / _ \
  \ V / | | | | | (_| | | |_| |/ /  __/
   \_/  |_|_| |_|\__,_|_|\__, /___\___|
                         |___/
"#;

    let version_line = format!(
        "          v{} - Red Wine Quality Analyzer\n",
        env!("CARGO_PKG_VERSION")
    );

    println!("{}", banner.bright_red());
    println!("{}", version_line.bright_white().bold());
}

/// Prints the endpoint status line under the banner.
pub fn print_endpoint_status(endpoint: Option<&str>) {
    match endpoint {
        Some(endpoint) => println!(
            "{} Predictions served by {}",
            "▸".bright_green(),
            endpoint.bright_cyan()
        ),
        None => println!(
            "{} {}",
            "▸".bright_yellow(),
            "No prediction endpoint configured - set VINALYZE_ENDPOINT or vinalyze.toml"
                .yellow()
        ),
    }
}
