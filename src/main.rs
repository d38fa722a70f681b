//! `list-plus-icon`
//!
//! Generates `icon.png` and `logo.png` from the "list plus" glyph.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use list_plus_icon::{generate, GenerateError, GeneratedIcons, IconConfig};

/// Command line arguments.
#[derive(Parser)]
#[command(name = "list-plus-icon")]
#[command(about = "Renders the list plus glyph into an app icon and a transparent logo", long_about = None)]
struct Cli {
    /// Directory to write icon.png and logo.png into [default: working directory]
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// JSON file overriding canvas_size, padding, background and icon_colour
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Error generating icons: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the config, generates both images and reports what was written.
fn run(cli: &Cli) -> Result<(), GenerateError> {
    let config = match &cli.config {
        Some(path) => IconConfig::from_file(path)?,
        None => IconConfig::default(),
    };

    // An empty path resolves against the working directory.
    let out_dir = cli.out_dir.clone().unwrap_or_default();

    let generated = generate(&config, &out_dir)?;
    print!("{}", status_lines(&generated, &config));

    Ok(())
}

/// Formats the confirmation printed once both images are written.
fn status_lines(generated: &GeneratedIcons, config: &IconConfig) -> String {
    let GeneratedIcons {
        icon,
        logo,
        icon_path,
        logo_path,
    } = generated;

    format!(
        "✓ Icon saved as {} ({}x{})\n  Background: {}\n  Icon color: {}\n✓ Logo saved as {} ({}x{}, transparent)\n",
        icon_path.display(),
        icon.width(),
        icon.height(),
        config.background,
        config.icon_colour,
        logo_path.display(),
        logo.width(),
        logo.height()
    )
}
