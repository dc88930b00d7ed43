mod cli;

use cli::Args;
use pdc_tangle::adapters::outbound::console::StderrProgressReporter;
use pdc_tangle::adapters::outbound::network::PdcEdgeProvider;
use pdc_tangle::application::dto::ResolutionRequest;
use pdc_tangle::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pdc_tangle::application::use_cases::ResolveDependenciesUseCase;
use pdc_tangle::config::{discover_config, load_config_from_path, ConfigFile, Settings};
use pdc_tangle::ports::outbound::ProgressReporter;
use pdc_tangle::shared::error::{ExitCode, TangleError};
use pdc_tangle::shared::Result;
use std::future::Future;
use std::io::{self, IsTerminal};
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("{}", error_line(&e));
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let progress_reporter = StderrProgressReporter::new();

    let config = load_config(&args)?;
    for warning in config.iter().flat_map(ConfigFile::unknown_field_warnings) {
        progress_reporter.report_error(&warning);
    }
    let settings = Settings::resolve(args.overrides(), config)?;

    // Create adapters (Dependency Injection)
    let edge_provider =
        PdcEdgeProvider::with_options(&settings.server, settings.page_size, settings.timeout)?;

    let use_case = ResolveDependenciesUseCase::new(edge_provider, &progress_reporter)
        .with_max_concurrency(settings.max_concurrency);

    let request = ResolutionRequest::new(
        args.artifact.clone(),
        settings.release.clone(),
        settings.dependency_types.clone(),
    );

    let response = until_interrupted(use_case.execute(request), tokio::signal::ctrl_c()).await?;

    progress_reporter.report(FormatterFactory::progress_message(settings.format));

    let color = !args.no_color && args.output.is_none() && std::io::stdout().is_terminal();
    let formatter = FormatterFactory::create(settings.format, color);
    let formatted_output = formatter.format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from(args.output));
    presenter.present(&formatted_output)
}

/// Runs `work` unless `interrupt` fires first
///
/// An interrupt source that fails to install never cancels the work.
async fn until_interrupted<T>(
    work: impl Future<Output = Result<T>>,
    interrupt: impl Future<Output = io::Result<()>>,
) -> Result<T> {
    tokio::select! {
        result = work => result,
        Ok(()) = interrupt => Err(TangleError::Cancelled.into()),
    }
}

/// Renders an error and its causes on a single line
///
/// TangleError messages already embed their cause.
fn error_line(error: &anyhow::Error) -> String {
    if error.downcast_ref::<TangleError>().is_some() {
        error.to_string()
    } else {
        format!("{:#}", error)
    }
}

/// An explicit `--config` must exist; the auto-discovered file is optional
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(&std::env::current_dir()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[tokio::test]
    async fn test_interrupt_cancels_work() {
        let result: Result<()> =
            until_interrupted(std::future::pending(), async { Ok(()) }).await;

        let error = result.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<TangleError>(),
            Some(TangleError::Cancelled)
        ));
        assert_eq!(ExitCode::for_error(&error), ExitCode::Interrupted);
    }

    #[tokio::test]
    async fn test_failed_signal_handler_does_not_cancel() {
        let work = async {
            tokio::task::yield_now().await;
            Ok(42)
        };
        let interrupt = async { Err(io::Error::other("signal handler unavailable")) };

        assert_eq!(until_interrupted(work, interrupt).await.unwrap(), 42);
    }

    #[test]
    fn test_error_line_joins_causes() {
        let error = Err::<(), _>(io::Error::other("No such file or directory"))
            .context("Failed to read config file missing.yml")
            .context("Cannot use config file: missing.yml")
            .unwrap_err();

        let line = error_line(&error);
        assert_eq!(
            line,
            "Cannot use config file: missing.yml: Failed to read config file missing.yml: No such file or directory"
        );
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_error_line_keeps_tangle_message() {
        let error = anyhow::Error::from(TangleError::ArtifactNotFound {
            artifact: "ghost".to_string(),
        });
        assert_eq!(error_line(&error), "\"ghost\" is not in PDC");
    }
}
