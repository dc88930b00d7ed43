use clap::Parser;
use pdc_tangle::application::dto::OutputFormat;
use pdc_tangle::config::Overrides;
use std::path::PathBuf;

/// Show the transitive dependency tree of a component registered in PDC
#[derive(Parser, Debug)]
#[command(name = "pdc-tangle")]
#[command(version)]
#[command(
    about = "Show the transitive dependency tree of a component registered in PDC",
    long_about = None
)]
pub struct Args {
    /// Name of the component whose dependencies are resolved
    #[arg(value_name = "ARTIFACT")]
    pub artifact: String,

    /// PDC instance: a host name (reached over https) or a full URL
    /// [default: pdc.stg.fedoraproject.org]
    #[arg(short, long, value_name = "FQDN|URL")]
    pub server: Option<String>,

    /// Dependency type to follow; can be given multiple times
    /// [default: RPMBuildRequires, RPMRequires]
    #[arg(short = 'd', long = "dep-type", value_name = "TYPE")]
    pub dep_types: Vec<String>,

    /// Release to search under [default: fedora-26]
    #[arg(short, long)]
    pub release: Option<String>,

    /// Output format: text or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ./pdc-tangle.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable coloured markers in text output
    #[arg(long)]
    pub no_color: bool,

    /// Relationship queries in flight at once per round [default: 4]
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub max_concurrency: Option<u16>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Values that take precedence over the config file
    pub fn overrides(&self) -> Overrides {
        Overrides {
            server: self.server.clone(),
            release: self.release.clone(),
            dependency_types: self.dep_types.clone(),
            format: self.format,
            max_concurrency: self.max_concurrency.map(usize::from),
        }
    }
}
