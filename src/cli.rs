use clap::Parser;
use sbom_viewer::application::dto::OutputFormat;
use std::path::PathBuf;

/// Render an SBOM and a vulnerability-scan report as a dashboard
#[derive(Parser, Debug)]
#[command(name = "sbom-viewer")]
#[command(version)]
#[command(
    about = "Render a CycloneDX SBOM and a Grype vulnerability report as a dashboard",
    long_about = None
)]
pub struct Args {
    /// SBOM location: file path or http(s) URL [default: reports/sbom.cdx.json]
    #[arg(short, long, value_name = "LOCATION")]
    pub sbom: Option<String>,

    /// Vulnerability report location: file path or http(s) URL [default: reports/grype.json]
    #[arg(short, long, value_name = "LOCATION")]
    pub vulnerabilities: Option<String>,

    /// Output format: html, markdown (md) or json [default: html]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Initial vulnerability filter (matches CVE, package and version)
    #[arg(long, value_name = "TERM")]
    pub filter: Option<String>,

    /// Initial severity filter, e.g. High
    #[arg(long, value_name = "SEVERITY")]
    pub severity: Option<String>,

    /// Initial package filter (matches name, version and type)
    #[arg(long, value_name = "TERM")]
    pub package_filter: Option<String>,

    /// Config file path (defaults to ./sbom-viewer.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Reload and re-render on every line read from stdin ("q" or EOF quits)
    #[arg(long)]
    pub watch: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
