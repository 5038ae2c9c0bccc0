use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use foreclosure_leads::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Foreclosure Lead Scorer",
    about = "Score and rank foreclosure cases from court exports or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a court case listing and write the ranked document
    Score(ScoreArgs),
    /// Score a built-in sample docket set and print a ranked summary
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn score_arguments_parse() {
        let cli = Cli::try_parse_from([
            "leads",
            "score",
            "--cases",
            "cases.csv",
            "--dockets",
            "dockets.csv",
            "--today",
            "2025-06-01",
            "--format",
            "csv",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.cases.to_str(), Some("cases.csv"));
                assert!(args.dockets.is_some());
                assert_eq!(args.format, OutputFormat::Csv);
                assert!(args.output.is_none());
                assert_eq!(args.today.map(|d| d.to_string()).as_deref(), Some("2025-06-01"));
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn missing_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["leads"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
