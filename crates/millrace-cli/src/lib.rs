//! CLI logic for the millrace conversion tool.
//!
//! This module contains the core CLI logic for the millrace conversion
//! tool.

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use millrace::{
    MillraceError, ModelBuilder,
    config::{AppConfig, ConversionConfig},
};

/// Run the millrace CLI application
///
/// This function imports the input diagram, assembles the process model,
/// and writes the model summary to the output file as JSON.
///
/// # Errors
///
/// Returns `MillraceError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Import errors
/// - Conversion errors (strict mode only)
pub fn run(args: &Args) -> Result<(), MillraceError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Converting diagram"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.strict {
        app_config = AppConfig::new(ConversionConfig::new(true));
    }

    let source = fs::read_to_string(&args.input)?;

    let builder = ModelBuilder::new(app_config)?;
    let canvas = builder.import(&source)?;
    let assembly = builder.build(&canvas)?;

    for diagnostic in assembly.diagnostics() {
        warn!(stencil_id = diagnostic.stencil_id(); "Shape was not converted");
    }

    let summary = builder.summarize(&assembly);
    let json = serde_json::to_string_pretty(&summary)?;
    fs::write(&args.output, json)?;

    info!(
        output_file = args.output,
        elements = assembly.model().len(),
        skipped = assembly.diagnostics().len();
        "Model summary written"
    );

    Ok(())
}
