use anyhow::Result;
use api_client::ApiClient;
use args::Args;
use clap::Parser;
use config::Configuration;
use runner::Runner;

mod api_client;
mod args;
mod config;
mod error;
mod render;
mod runner;
mod search;
mod summary;
mod time_bound;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    run(&args)?;
    Ok(())
}

/// Returns `false` without touching config or network when no query is given.
fn run(args: &Args) -> Result<bool> {
    let Some(query) = args.query.as_deref() else {
        log::debug!("No query given, nothing to do");
        return Ok(false);
    };

    let config = Configuration::load(&args.config)?;
    let client = ApiClient::new(args, &config)?;

    Runner::new(client, config).run(query, args)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn no_query_skips_everything() {
        let dir = tempdir().expect("failed to create tempdir");
        let config_path = dir.path().join("quake.conf");
        let args = Args::try_parse_from([
            "quake-search",
            "-o",
            "all",
            "-c",
            config_path.to_str().unwrap(),
        ])
        .unwrap();

        assert!(!run(&args).unwrap());
        assert!(!config_path.exists());
    }

    #[test]
    fn query_without_config_fails_and_writes_template() {
        let dir = tempdir().expect("failed to create tempdir");
        let config_path = dir.path().join("quake.conf");
        let args = Args::try_parse_from([
            "quake-search",
            "-q",
            "port: 80",
            "-c",
            config_path.to_str().unwrap(),
        ])
        .unwrap();

        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(config_path.exists());
    }
}
