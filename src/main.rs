mod config;
mod error;
mod report;
mod salary;
mod sources;
mod stats;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::sources::{HeadHunter, SuperJob};

/// Exit code for a crawl aborted by a transport failure. clap already
/// claims 2 for usage errors.
const EXIT_FETCH_FAILED: i32 = 1;

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jobstats=info")),
        )
        .init();

    let config = Config::parse();

    match run(&config) {
        Ok(tables) => println!("{}", tables.join("\n")),
        Err(e) => {
            tracing::error!("crawl aborted: {e}");
            std::process::exit(EXIT_FETCH_FAILED);
        }
    }
}

/// Crawl both boards and render one table per board. Nothing is printed
/// until both crawls have finished, so a failure anywhere drops the whole
/// report.
fn run(config: &Config) -> anyhow::Result<Vec<String>> {
    let client = reqwest::blocking::Client::builder().build()?;

    let hh = HeadHunter::new(config.hh_user_agent.clone(), config.per_page);
    let hh_stats = stats::collect_stats(&client, &hh, &config.languages)?;

    let sj = SuperJob::new(config.sj_key.clone(), config.per_page);
    let sj_stats = stats::collect_stats(&client, &sj, &config.languages)?;

    Ok(vec![
        report::build_table("HeadHunter Moscow", &hh_stats),
        report::build_table("SuperJob Moscow", &sj_stats),
    ])
}
