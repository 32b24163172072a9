mod cli;
mod output;

use crate::cli::{Command, LogFormatArg, CLI};
use crate::output::{CheckReport, Printer};
use anyhow::Context;
use clap::Parser;
use shortseq_core::{next_code, Code};
use shortseq_generator::{Generator, SeqGenerator};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    init_tracing(config.log_format);

    debug!(output = %config.output, command = ?config.command, "starting shortseq");

    let printer = Printer::new(config.output);

    match config.command {
        Command::Next { code } => {
            let next =
                next_code(&code).with_context(|| format!("cannot compute the code after {code:?}"))?;
            info!(current = %code, next = %next, "computed next code");
            printer.code(&next)?;
        }
        Command::Seq { after, count } => {
            let generator = match after {
                Some(last) => SeqGenerator::resume_after(last),
                None => SeqGenerator::fresh(),
            };
            let written = printer.codes((0..count).map(|_| generator.generate()))?;
            info!(count = written, last = ?generator.last_issued(), "generated codes");
        }
        Command::Check { code } => {
            let parsed = Code::new(&code).with_context(|| format!("{code:?} is not a valid code"))?;
            printer.check(&CheckReport::new(&parsed))?;
        }
    }

    Ok(())
}

fn init_tracing(format: LogFormatArg) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormatArg::Text => builder.init(),
        LogFormatArg::Json => builder.json().init(),
    }
}
