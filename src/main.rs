//! Repostats CLI - letter frequencies of a repository's JS/TS sources

use clap::Parser;
use repostats::config::{self, Overrides, RepoConfig};
use repostats::report::{write_error, write_histogram};
use repostats::ui::Spinner;
use repostats::GitHubClient;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "repostats")]
#[command(version)]
#[command(about = "Letter-frequency histogram over the JavaScript/TypeScript files of a GitHub branch")]
#[command(long_about = r#"
Repostats fetches the file tree of one branch through the GitHub GraphQL API
(three directory levels deep), collects every .js and .ts file, and prints how
often each letter occurs, most frequent first.

Example usage:
  repostats --owner lodash --repo lodash --branch main
  GITHUB_TOKEN=... repostats --config ./repostats.toml
"#)]
struct Cli {
    /// Repository owner (user or organization)
    #[arg(long)]
    owner: Option<String>,

    /// Repository name
    #[arg(long)]
    repo: Option<String>,

    /// Branch to read
    #[arg(long)]
    branch: Option<String>,

    /// Access token sent in the Authorization header
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GraphQL endpoint
    #[arg(long)]
    endpoint: Option<String>,

    /// Path to the config file (defaults to ./repostats.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report(cli, &mut out).await?;
    out.flush()?;

    Ok(())
}

/// Run once and print either the histogram or the single error line.
///
/// Only write failures escape; every run error ends up in `out`.
async fn report<W: Write>(cli: Cli, out: &mut W) -> std::io::Result<()> {
    match execute(cli).await {
        Ok(entries) => write_histogram(out, &entries),
        Err(e) => {
            tracing::debug!("Run failed: {:?}", e);
            write_error(out, &e)
        }
    }
}

fn resolve_config(cli: Cli) -> repostats::Result<RepoConfig> {
    let file = config::load_config(cli.config.as_deref())?;
    RepoConfig::resolve(
        file,
        Overrides {
            owner: cli.owner,
            repo: cli.repo,
            branch: cli.branch,
            endpoint: cli.endpoint,
            token: cli.token,
        },
    )
}

async fn execute(cli: Cli) -> repostats::Result<Vec<(char, u64)>> {
    let config = resolve_config(cli)?;
    tracing::debug!("Resolved {:?}", config);

    let client = GitHubClient::new();
    let spinner = Spinner::new(&format!(
        "Fetching {}/{}@{}",
        config.owner, config.repo, config.branch
    ));

    match repostats::run(&config, &client).await {
        Ok(counts) => {
            spinner.succeed(&format!("Counted {} letters", counts.total()));
            Ok(counts.sorted())
        }
        Err(e) => {
            spinner.fail("Failed");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("repostats").chain(args.iter().copied())).unwrap()
    }

    fn missing_config(dir: &tempfile::TempDir) -> String {
        dir.path().join("absent.toml").display().to_string()
    }

    #[test]
    fn test_token_flag_reads_github_token_env() {
        let command = Cli::command();
        let token = command
            .get_arguments()
            .find(|arg| arg.get_id() == "token")
            .unwrap();
        assert_eq!(token.get_env(), Some(std::ffi::OsStr::new("GITHUB_TOKEN")));
    }

    #[test]
    fn test_flags_beat_file_beat_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repostats.toml");
        std::fs::write(&path, "owner = \"file-owner\"\nrepo = \"file-repo\"\n").unwrap();

        let config = resolve_config(cli(&[
            "--config",
            path.to_str().unwrap(),
            "--owner",
            "flag-owner",
            "--token",
            "t",
        ]))
        .unwrap();

        assert_eq!(config.owner, "flag-owner");
        assert_eq!(config.repo, "file-repo");
        assert_eq!(config.branch, config::DEFAULT_BRANCH);
        assert_eq!(config.endpoint, config::DEFAULT_ENDPOINT);
        assert_eq!(config.token, "t");
    }

    #[tokio::test]
    async fn test_missing_token_prints_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut parsed = cli(&["--config", &missing_config(&dir)]);
        // Independent of whatever GITHUB_TOKEN the test process inherits
        parsed.token = None;

        let mut out = Vec::new();
        report(parsed, &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "An error occurred: Configuration error: no access token (pass --token or set GITHUB_TOKEN)\n"
        );
    }

    #[tokio::test]
    async fn test_bad_config_file_prints_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repostats.toml");
        std::fs::write(&path, "owner = [").unwrap();

        let mut out = Vec::new();
        report(cli(&["--config", path.to_str().unwrap(), "--token", "t"]), &mut out)
            .await
            .unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("An error occurred: Configuration error: "));
        assert_eq!(printed.lines().count(), 1);
    }
}
