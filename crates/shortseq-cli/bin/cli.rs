use clap::{Parser, Subcommand, ValueEnum};
use shortseq_core::Code;
use std::fmt::{Display, Formatter};

pub const OUTPUT_ENV: &str = "SHORTSEQ_OUTPUT";
pub const LOG_FORMAT_ENV: &str = "SHORTSEQ_LOG_FORMAT";

pub const DEFAULT_SEQ_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    #[value(name = "plain")]
    Plain,
    #[value(name = "json")]
    Json,
}

impl Display for OutputArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputArg::Plain => write!(f, "plain"),
            OutputArg::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the code that follows CODE.
    Next { code: String },
    /// Print consecutive codes.
    Seq {
        /// Start after this code instead of at the seed.
        #[arg(long)]
        after: Option<Code>,
        #[arg(long, short = 'n', default_value_t = DEFAULT_SEQ_COUNT)]
        count: usize,
    },
    /// Validate CODE and print its digit values.
    Check { code: String },
}

#[derive(Debug, Parser)]
#[command(name = "shortseq", about = "Compute codes in the short-code sequence")]
pub struct CLI {
    #[arg(
        long,
        global = true,
        env = OUTPUT_ENV,
        value_enum,
        default_value_t = OutputArg::Plain
    )]
    pub output: OutputArg,

    #[arg(
        long,
        global = true,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_next_with_defaults() {
        let cli = CLI::try_parse_from(["shortseq", "next", "bcd"]).unwrap();

        assert_eq!(cli.output, OutputArg::Plain);
        assert_eq!(cli.log_format, LogFormatArg::Text);
        assert!(matches!(cli.command, Command::Next { code } if code == "bcd"));
    }

    #[test]
    fn seq_defaults_to_ten_from_seed() {
        let cli = CLI::try_parse_from(["shortseq", "seq"]).unwrap();

        match cli.command {
            Command::Seq { after, count } => {
                assert_eq!(after, None);
                assert_eq!(count, DEFAULT_SEQ_COUNT);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn seq_validates_after_code() {
        let cli = CLI::try_parse_from(["shortseq", "seq", "--after", "ZZ", "-n", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Seq { after: Some(ref c), count: 3 } if c.as_str() == "ZZ"
        ));

        assert!(CLI::try_parse_from(["shortseq", "seq", "--after", "O0"]).is_err());
    }

    #[test]
    fn global_output_flag_after_subcommand() {
        let cli = CLI::try_parse_from(["shortseq", "check", "5Z", "--output", "json"]).unwrap();
        assert_eq!(cli.output, OutputArg::Json);
    }

    #[test]
    fn rejects_unknown_output() {
        assert!(CLI::try_parse_from(["shortseq", "--output", "xml", "next", "2"]).is_err());
    }
}
