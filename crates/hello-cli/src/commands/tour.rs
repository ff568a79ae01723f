//! Implementation of `hello tour` (and of `hello` with no subcommand).

use hello_core::{
    application::TourService,
    domain::{Greeter, Roster, TourScript},
};
use tracing::{debug, info};

use crate::{
    cli::{OutputFormat, TourArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: TourArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let script = build_script(args, &config);
    debug!(
        subject = %script.subject,
        greeter = %script.greeter,
        languages = script.roster.len(),
        "tour script resolved"
    );

    if output.format() == OutputFormat::Json {
        // Bypasses the line sink: JSON must stay parseable as one document.
        output.json(&script.transcript())?;
        return Ok(());
    }

    let mut service = TourService::new(output.line_sink());
    let written = service.play(&script)?;
    info!(lines = written, quiet = output.is_quiet(), "tour finished");

    Ok(())
}

/// Config values, overridden field by field by whatever flags were given.
fn build_script(args: TourArgs, config: &AppConfig) -> TourScript {
    let mut script = config.tour.script();

    if let Some(subject) = args.subject {
        script = script.with_subject(subject);
    }
    if let Some(greeter) = args.greeter {
        script = script.with_greeter(Greeter::new(greeter));
    }
    if let Some(header) = args.header {
        script = script.with_header(header);
    }
    if !args.languages.is_empty() {
        script = script.with_roster(Roster::new(args.languages));
    }

    script
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_uses_config() {
        let script = build_script(TourArgs::default(), &AppConfig::default());
        assert_eq!(script, TourScript::default());
    }

    #[test]
    fn flags_override_config() {
        let mut config = AppConfig::default();
        config.tour.subject = "Python".into();
        config.tour.header = "From config:".into();

        let args = TourArgs {
            subject: Some("Rust".into()),
            greeter: Some("Rust OOP".into()),
            header: None,
            languages: vec!["Rust".into()],
        };
        let script = build_script(args, &config);

        assert_eq!(script.subject, "Rust");
        assert_eq!(script.greeter.name(), "Rust OOP");
        assert_eq!(script.header, "From config:");
        assert_eq!(script.roster, Roster::new(["Rust"]));
    }

    #[test]
    fn empty_language_flags_keep_config_roster() {
        let mut config = AppConfig::default();
        config.tour.languages = vec!["Zig".into()];

        let script = build_script(TourArgs::default(), &config);
        assert_eq!(script.roster, Roster::new(["Zig"]));
    }
}
