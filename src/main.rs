mod cli;

use cli::Args;
use depcheck_comment::adapters::outbound::console::StderrProgressReporter;
use depcheck_comment::adapters::outbound::filesystem::FileSystemReader;
use depcheck_comment::adapters::outbound::formatters::MarkdownFormatter;
use depcheck_comment::application::dto::CommentRequest;
use depcheck_comment::application::factories::{PresenterFactory, PresenterType};
use depcheck_comment::application::use_cases::GenerateCommentUseCase;
use depcheck_comment::config::{discover_config, load_config_from_path, ConfigFile};
use depcheck_comment::shared::error::{CommentError, ExitCode};
use depcheck_comment::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    match run() {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Everything a run needs, after merging CLI flags over the config file
#[derive(Debug)]
struct Settings {
    request: CommentRequest,
    presenter_type: PresenterType,
    title: Option<String>,
    fail_on_critical_high: bool,
    quiet: bool,
}

impl Settings {
    /// CLI flag > config file > built-in default
    fn resolve(args: Args, config: ConfigFile) -> Result<Self> {
        let mut builder = CommentRequest::builder();
        if let Some(path) = args
            .report
            .or_else(|| config.report_path.as_ref().map(PathBuf::from))
        {
            builder = builder.report_path(path);
        }
        if let Some(prefix) = args.workspace_prefix.or(config.workspace_prefix.clone()) {
            builder = builder.workspace_prefix(prefix);
        }
        let request = builder.build()?;

        let mode = args
            .mode
            .or_else(|| config.output_mode())
            .unwrap_or_default();
        let presenter_type = PresenterType::from_mode(mode, args.github_output)?;

        let title = args.title.or(config.title);
        if title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(CommentError::Validation {
                message: "title must not be empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            request,
            presenter_type,
            title,
            fail_on_critical_high: args.fail_on_critical_high
                || config.fail_on_critical_high.unwrap_or(false),
            quiet: args.quiet || config.quiet.unwrap_or(false),
        })
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    let config = match args.config.as_deref() {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(Path::new("."))?.unwrap_or_default(),
    };
    let settings = Settings::resolve(args, config)?;

    // Create adapters (Dependency Injection)
    let report_reader = FileSystemReader::new();
    let formatter = match settings.title {
        Some(title) => MarkdownFormatter::with_title(title),
        None => MarkdownFormatter::new(),
    };
    let progress_reporter = if settings.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = GenerateCommentUseCase::new(report_reader, formatter, progress_reporter);
    let response = use_case.execute(&settings.request)?;

    let presenter = PresenterFactory::create(settings.presenter_type);
    presenter.present(&response)?;

    Ok(ExitCode::for_outcome(
        settings.fail_on_critical_high,
        response.critical_high_count,
    ))
}
