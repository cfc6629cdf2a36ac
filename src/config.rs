use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "jobstats", about = "Programming-language salary report from hh.ru and superjob.ru")]
pub struct Config {
    /// hh.ru identifies API consumers by User-Agent
    #[arg(long, env = "HH_USER_AGENT")]
    pub hh_user_agent: String,

    /// superjob.ru application key (sent as X-Api-App-Id)
    #[arg(long, env = "SJ_KEY")]
    pub sj_key: String,

    /// Languages to build statistics for
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "JavaScript,Python,Java,C#,PHP,C++,C,Ruby,Go"
    )]
    pub languages: Vec<String>,

    /// Listings requested per page from both boards
    #[arg(long, default_value = "10")]
    pub per_page: u32,
}
