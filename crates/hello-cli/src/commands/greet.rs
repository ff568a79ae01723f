//! Implementation of the `hello greet` command.

use hello_core::domain::{Greeter, LineKind, TranscriptLine, say_hello};

use crate::{
    cli::{GreetArgs, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: GreetArgs, output: OutputManager) -> CliResult<()> {
    let line = greeting(&args);

    match output.format() {
        OutputFormat::Json => output.json(&line)?,
        _ => output.print(&line.text)?,
    }

    Ok(())
}

fn greeting(args: &GreetArgs) -> TranscriptLine {
    if args.method {
        TranscriptLine::new(LineKind::MethodGreeting, Greeter::new(args.name.as_str()).greet())
    } else {
        TranscriptLine::new(LineKind::FunctionGreeting, say_hello(&args.name))
    }
}
