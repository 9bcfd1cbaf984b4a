use clap::Parser;
use depcheck_comment::application::dto::OutputMode;
use std::path::PathBuf;

/// Render an OWASP dependency-check JSON report as a Markdown review comment
#[derive(Parser, Debug)]
#[command(name = "depcheck-comment")]
#[command(version)]
#[command(about = "Render an OWASP dependency-check JSON report as a Markdown review comment", long_about = None)]
pub struct Args {
    /// Path to the dependency-check JSON report
    /// [default: reports/dependency-check-report.json]
    #[arg(short, long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Output mode: stdout or github-output [default: stdout]
    #[arg(short, long)]
    pub mode: Option<OutputMode>,

    /// File that receives vuln_count and comment in github-output mode
    #[arg(long, env = "GITHUB_OUTPUT", value_name = "PATH")]
    pub github_output: Option<PathBuf>,

    /// Prefix stripped from dependency paths [default: /github/workspace/]
    #[arg(long, value_name = "PREFIX")]
    pub workspace_prefix: Option<String>,

    /// Heading of the comment [default: Dependency-Check Scan Results]
    #[arg(short, long)]
    pub title: Option<String>,

    /// Exit with code 1 when Critical or High vulnerabilities are found
    #[arg(long)]
    pub fail_on_critical_high: bool,

    /// Only print errors to stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to a config file (defaults to ./depcheck-comment.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
