mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use sbom_viewer::adapters::outbound::console::StderrProgressReporter;
use sbom_viewer::adapters::outbound::formatters::SvgChartRenderer;
use sbom_viewer::adapters::outbound::network::ReportClient;
use sbom_viewer::application::dto::{FilterRequest, OutputFormat, ReportRequest};
use sbom_viewer::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use sbom_viewer::application::use_cases::{LoadReportsUseCase, ReloadOutcome, ViewerSession};
use sbom_viewer::ports::outbound::{ChartRenderer, ProgressReporter, ReportRepository};
use sbom_viewer::report_analysis::domain::report_location::{
    DEFAULT_SBOM_LOCATION, DEFAULT_VULNERABILITY_LOCATION,
};
use sbom_viewer::shared::error::ExitCode;
use sbom_viewer::shared::Result;
use std::process;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Options after merging the command line over the config file
#[derive(Debug)]
struct ViewerOptions {
    request: ReportRequest,
    format: OutputFormat,
    presenter: PresenterType,
    filters: FilterRequest,
    watch: bool,
}

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };
    process::exit(exit_code.as_i32());
}

async fn run() -> Result<()> {
    let args = Args::parse_args();
    let config = load_config(&args)?;
    let options = resolve_options(args, config)?;

    let loader = LoadReportsUseCase::new(ReportClient::new()?, StderrProgressReporter::new());
    let session = ViewerSession::new(loader, options.request.clone());
    let renderer = SvgChartRenderer::new();

    session.reload().await;
    render(&session, &options, &renderer)?;

    if options.watch {
        watch(&session, &options, &renderer).await?;
    }

    Ok(())
}

/// Explicit `--config` wins; otherwise look for the config file in the
/// working directory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(&std::env::current_dir()?),
    }
}

fn resolve_options(args: Args, config: Option<ConfigFile>) -> Result<ViewerOptions> {
    let config = config.unwrap_or_default();
    let format = args
        .format
        .or_else(|| config.output_format())
        .unwrap_or_default();
    let filter = config.filter.unwrap_or_default();

    let sbom = args
        .sbom
        .or(config.sbom)
        .unwrap_or_else(|| DEFAULT_SBOM_LOCATION.to_string());
    let vulnerabilities = args
        .vulnerabilities
        .or(config.vulnerabilities)
        .unwrap_or_else(|| DEFAULT_VULNERABILITY_LOCATION.to_string());

    Ok(ViewerOptions {
        request: ReportRequest::from_locations(&sbom, &vulnerabilities)?,
        format,
        presenter: PresenterType::from_output(args.output.or(config.output)),
        filters: FilterRequest::new(
            args.filter.or(filter.term).unwrap_or_default(),
            args.severity.or(filter.severity),
            args.package_filter.or(filter.package).unwrap_or_default(),
        ),
        watch: args.watch,
    })
}

fn render<R, PR>(
    session: &ViewerSession<R, PR>,
    options: &ViewerOptions,
    renderer: &dyn ChartRenderer,
) -> Result<()>
where
    R: ReportRepository,
    PR: ProgressReporter,
{
    session
        .progress_reporter()
        .report(FormatterFactory::progress_message(options.format));

    let model = session.dashboard(&options.filters, renderer);
    let output = FormatterFactory::create(options.format).format(&model)?;
    PresenterFactory::create(options.presenter.clone()).present(&output)
}

/// Reloads and re-renders once per stdin line until "q" or EOF
///
/// Lines that arrive while a reload is running are dropped after it
/// finishes and reported as ignored.
async fn watch<R, PR>(
    session: &ViewerSession<R, PR>,
    options: &ViewerOptions,
    renderer: &dyn ChartRenderer,
) -> Result<()>
where
    R: ReportRepository,
    PR: ProgressReporter,
{
    let reporter = session.progress_reporter();
    reporter.report("👀 Watching: press Enter to reload, 'q' to quit.");

    let (tx, mut rx) = mpsc::unbounded_channel::<()>();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if line.trim().eq_ignore_ascii_case("q") || tx.send(()).is_err() {
                break;
            }
        }
    });

    while rx.recv().await.is_some() {
        if let ReloadOutcome::Loaded(_) = session.reload().await {
            render(session, options, renderer)?;
        }

        let mut ignored = 0;
        while rx.try_recv().is_ok() {
            ignored += 1;
        }
        if ignored > 0 {
            reporter.report_warning(&format!(
                "⚠️  Ignored {} reload request(s) received while loading.",
                ignored
            ));
        }
    }

    reporter.report("👋 Watch stopped.");
    Ok(())
}
