//! Implementation of the `hello languages` command.

use hello_core::{
    application::TourService,
    domain::{LineKind, TranscriptLine},
};

use crate::{cli::OutputFormat, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let roster = config.tour.roster();

    if output.format() == OutputFormat::Json {
        let lines: Vec<TranscriptLine> = roster
            .entries()
            .map(|e| TranscriptLine::new(LineKind::RosterEntry, e.to_string()))
            .collect();
        output.json(&lines)?;
        return Ok(());
    }

    TourService::new(output.line_sink()).list(&roster)?;
    Ok(())
}
