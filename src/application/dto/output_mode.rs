/// Output mode enumeration for the rendered comment
///
/// Both the CLI (inbound adapter) and the presenter factory need to agree on
/// where the comment goes, so the mode lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Markdown on stdout (default)
    #[default]
    Stdout,
    /// `vuln_count` and `comment` appended to the GitHub Actions output file
    GithubOutput,
}

impl std::str::FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stdout" => Ok(OutputMode::Stdout),
            "github-output" | "github" | "gh" => Ok(OutputMode::GithubOutput),
            _ => Err(format!(
                "Invalid mode: {}. Please specify 'stdout' or 'github-output'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputMode::Stdout => write!(f, "stdout"),
            OutputMode::GithubOutput => write!(f, "github-output"),
        }
    }
}
