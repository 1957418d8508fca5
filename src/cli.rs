use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use treewalk::{Evaluator, League, parse};

/// Expression evaluated when none is given
pub const DEFAULT_EXPRESSION: &str = "5*10+20";

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Parse and evaluate an integer expression
    Eval {
        /// Infix expression using + - * / and parentheses
        #[arg(default_value = DEFAULT_EXPRESSION)]
        expression: String,
    },
    /// Print the ranking of the sample league
    League,
}

/// Treewalk - evaluate integer expression trees
#[derive(Parser, Debug)]
#[command(name = "treewalk")]
#[command(about = "Evaluate integer expression trees and rank league results")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub command: Command,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            command: args.command,
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> CliConfig {
    CliArgs::parse().into()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

fn run_eval(expression: &str) -> Result<()> {
    let tree = parse(expression).context("Invalid expression")?;
    info!("Evaluating tree: {}", tree);

    match Evaluator::new().evaluate(Some(&tree)) {
        Ok(value) => {
            println!("{}", value);
            Ok(())
        }
        Err(err) => {
            println!("0");
            Err(err).context("Evaluation failed")
        }
    }
}

fn run_league() -> Result<()> {
    let league = League::sample().context("Failed to build sample league")?;
    let ranking = league.ranking();
    for name in &ranking {
        info!("{}: {} win(s)", name, league.wins(name));
    }
    println!("[{}]", ranking.join(" "));
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args();

    init_logging(&config.log_level)?;

    match &config.command {
        Command::Eval { expression } => run_eval(expression),
        Command::League => run_league(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_default_expression() {
        let args = CliArgs::try_parse_from(["treewalk", "eval"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            let config = CliConfig::from(args);
            assert!(matches!(
                config.command,
                Command::Eval { ref expression } if expression == DEFAULT_EXPRESSION
            ));
            assert!(matches!(config.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_eval_with_expression_and_log_level() {
        let args = CliArgs::try_parse_from(["treewalk", "eval", "1+2", "--log-level", "debug"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(matches!(
                args.command,
                Command::Eval { ref expression } if expression == "1+2"
            ));
            assert!(matches!(args.log_level, LogLevel::Debug));
        }
    }

    #[test]
    fn test_league_subcommand() {
        let args = CliArgs::try_parse_from(["treewalk", "-l", "info", "league"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(matches!(args.command, Command::League));
            assert!(matches!(args.log_level, LogLevel::Info));
        }
    }

    #[test]
    fn test_missing_subcommand_rejected() {
        assert!(CliArgs::try_parse_from(["treewalk"]).is_err());
        assert!(CliArgs::try_parse_from(["treewalk", "eval", "1", "2"]).is_err());
    }

    #[test]
    fn test_run_eval() {
        assert!(run_eval("5*10+20").is_ok());
        assert!(run_eval("5 +").is_err());

        let result = run_eval("1 / 0");
        assert!(result.is_err());
        if let Err(err) = result {
            assert_eq!(format!("{:#}", err), "Evaluation failed: division by zero");
        }
    }

    #[test]
    fn test_run_league() {
        assert!(run_league().is_ok());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
