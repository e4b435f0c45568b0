use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::Deserialize;

pub const CONFIG_FILENAME: &str = "aoc-status.toml";

pub const DEFAULT_TEST_CMD: &str = "cargo +nightly test -- -Z unstable-options --format json";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn color(&self) -> Option<bool> {
        self.color // None has semantic meaning (auto-detect)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TestConfig {
    pub cmd: Option<String>,
}

impl TestConfig {
    pub fn cmd(&self) -> &str {
        self.cmd.as_deref().unwrap_or(DEFAULT_TEST_CMD)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    // Top-level fields
    pub readme: Option<String>,
    pub badges: Option<Vec<String>>,
    pub start_year: Option<u32>,
    pub start_day: Option<u8>,

    // Nested sections
    pub log: Option<LogConfig>,
    pub test: Option<TestConfig>,
}

impl Config {
    pub fn readme(&self) -> &str {
        self.readme.as_deref().unwrap_or("readme.md")
    }

    pub fn badges(&self) -> Vec<String> {
        self.badges
            .clone()
            .unwrap_or_else(|| vec!["image_dark.svg".to_string(), "image_light.svg".to_string()])
    }

    pub fn start_year(&self) -> u32 {
        self.start_year.unwrap_or(2015)
    }

    pub fn start_day(&self) -> u8 {
        self.start_day.unwrap_or(1)
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn test(&self) -> TestConfig {
        self.test.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config: Option<String>,
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
    pub test_cmd: Option<String>,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        let mut cfg = Config::default();
        // Apply nearest config file found by walking up from cwd
        if let Some(path) = find_nearest_config_file()
            && let Some(file_cfg) = read_config_file(&path)
        {
            apply_file_config(&mut cfg, &file_cfg);
        }
        cfg
    })
}

pub fn init_with_overrides(overrides: &CliOverrides) {
    let mut cfg = Config::default();

    // 1) Config file: explicit --config path, else nearest file walking up from cwd
    let config_path = overrides
        .config
        .as_ref()
        .map(PathBuf::from)
        .or_else(find_nearest_config_file);
    if let Some(path) = config_path
        && let Some(file_cfg) = read_config_file(&path)
    {
        apply_file_config(&mut cfg, &file_cfg);
    }

    // 2) CLI arguments (highest priority). Only override if user specified.
    apply_cli_overrides(&mut cfg, overrides);

    let _ = CONFIG.set(cfg);
}

fn read_config_file(path: &Path) -> Option<Config> {
    match fs::read_to_string(path) {
        Ok(contents) => toml::from_str::<Config>(&contents).ok(),
        Err(_) => None,
    }
}

fn apply_file_config(cfg: &mut Config, file: &Config) {
    // Merge top-level fields
    if file.readme.is_some() {
        cfg.readme = file.readme.clone();
    }
    if file.badges.is_some() {
        cfg.badges = file.badges.clone();
    }
    if file.start_year.is_some() {
        cfg.start_year = file.start_year;
    }
    if file.start_day.is_some() {
        cfg.start_day = file.start_day;
    }

    // Merge log section
    if let Some(file_log) = &file.log {
        let mut log = cfg.log.clone().unwrap_or_default();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }

    // Merge test section
    if let Some(file_test) = &file.test {
        let mut test = cfg.test.clone().unwrap_or_default();
        if file_test.cmd.is_some() {
            test.cmd = file_test.cmd.clone();
        }
        cfg.test = Some(test);
    }
}

fn apply_cli_overrides(cfg: &mut Config, overrides: &CliOverrides) {
    // Log overrides
    let mut log = cfg.log.clone().unwrap_or_default();
    if let Some(level) = &overrides.log_level
        && !level.trim().is_empty()
    {
        log.level = Some(level.trim().to_string());
    }
    if let Some(color_str) = &overrides.log_color {
        match color_str.to_lowercase().as_str() {
            "on" => log.color = Some(true),
            "off" => log.color = Some(false),
            _ => {}
        }
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }

    // Test overrides
    let mut test = cfg.test.clone().unwrap_or_default();
    if let Some(cmd) = &overrides.test_cmd
        && !cmd.trim().is_empty()
    {
        test.cmd = Some(cmd.clone());
    }
    if overrides.test_cmd.is_some() {
        cfg.test = Some(test);
    }
}

fn find_nearest_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

pub fn colors_enabled() -> bool {
    match config().log().color() {
        Some(force) => force,
        None => console::colors_enabled(),
    }
}
