use clap::Parser;
use gh_contributors::{
    config::{Config, DEFAULT_API_URL, DEFAULT_MAX_CONTRIBUTORS},
    report,
};

/// Commit totals and per-contributor shares for a GitHub repository.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// The GitHub organization owning the repository
    organization: String,

    /// The project to analyze results for
    repository: String,

    /// Number of contributors to list
    #[arg(short, long, default_value_t = DEFAULT_MAX_CONTRIBUTORS)]
    num_contributors: usize,

    /// Username for basic auth, requires --pat
    #[arg(short, long, env = "GH_USERNAME")]
    username: Option<String>,

    /// Personal access token for basic auth, requires --username
    #[arg(short, long, env = "GH_TOKEN", hide_env_values = true)]
    pat: Option<String>,

    /// Root of the REST API
    #[arg(long, env = "GH_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::new(cli.organization, cli.repository, cli.username, cli.pat)?
        .with_api_url(cli.api_url)
        .with_max_contributors(cli.num_contributors);
    log::info!("reporting contributors for {}", config.full_name());
    let report = report(&config).await?;
    print!("{report}");
    Ok(())
}
