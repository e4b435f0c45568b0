use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// All relative paths (readme, badges, the test run itself) will be
    /// interpreted relative to this directory.
    #[arg(long)]
    pub cwd: Option<String>,

    /// Path to the configuration file. Defaults to the nearest
    /// `aoc-status.toml` found walking up from the working directory.
    #[arg(long)]
    pub config: Option<String>,

    /// Logging level (overrides config). One of: trace, debug, info, warn, error
    #[arg(long = "log.level")]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color")]
    pub log_color: Option<String>,

    /// Test command used to produce JSON result events.
    /// Replaces config [test].cmd if provided.
    #[arg(long = "test.cmd")]
    pub test_cmd: Option<String>,
}
