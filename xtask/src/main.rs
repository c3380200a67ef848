use clap::{Parser, Subcommand};
#[cfg(not(test))]
use xtask::*;

#[derive(Parser)]
#[command(author, version, about = "Development tasks for gofft")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Build,
    Test,
    Clippy,
    Fmt,
    /// Format, then lint
    Lint,
    /// fmt --check, clippy and test
    Ci,
    /// Run the demo matching the detected features
    Demo,
    Bench,
    #[command(name = "update-bench-readme")]
    UpdateBenchReadme,
    /// Analyze a CSV or WAV signal with the CLI
    Sanity {
        /// Path to input signal
        input: String,
        /// Comma separated target frequencies in Hz
        #[arg(long, default_value = "60")]
        ft: String,
    },
}

#[cfg(not(test))]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = detect_config();

    let status = match cli.command {
        Commands::Build => build_command(&cfg).status(),
        Commands::Test => test_command(&cfg).status(),
        Commands::Clippy => clippy_command().status(),
        Commands::Fmt => fmt_command().status(),
        Commands::Lint => {
            let fmt = fmt_command().status()?;
            if !fmt.success() {
                Ok(fmt)
            } else {
                clippy_command().status()
            }
        }
        Commands::Ci => return ci(&cfg),
        Commands::Demo => demo_command(&cfg).status(),
        Commands::Bench => bench_command(&cfg).status(),
        Commands::UpdateBenchReadme => update_bench_readme_command().status(),
        Commands::Sanity { input, ft } => sanity_command(&input, &ft).status(),
    }?;

    std::process::exit(status.code().unwrap_or(1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sanity_command() {
        let cli = Cli::parse_from(["xtask", "sanity", "tone.csv", "--ft", "50,60"]);
        match cli.command {
            Commands::Sanity { input, ft } => {
                assert_eq!(input, "tone.csv");
                assert_eq!(ft, "50,60");
            }
            _ => panic!("parsed wrong command"),
        }
    }

    #[test]
    fn parse_ci_command() {
        assert!(matches!(
            Cli::parse_from(["xtask", "ci"]).command,
            Commands::Ci
        ));
    }
}
