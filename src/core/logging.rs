use log::LevelFilter;

use crate::types::config::{colors_enabled, config};

fn level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

fn level_style(level: log::Level) -> console::Style {
    match level {
        log::Level::Error => console::Style::new().red().bold(),
        log::Level::Warn => console::Style::new().yellow(),
        log::Level::Info => console::Style::new().green(),
        log::Level::Debug => console::Style::new().cyan(),
        log::Level::Trace => console::Style::new().magenta(),
    }
}

/// Install the global logger. Level and color come from configuration, so
/// this must run after `init_with_overrides`.
pub fn init_logging() {
    let level = level_filter(config().log().level());
    let color = colors_enabled();

    let result = fern::Dispatch::new()
        .format(move |out, message, record| {
            let timestamp = chrono::Local::now().format("%H:%M:%S");
            let label = format!("{:<5}", record.level());
            let label = if color {
                level_style(record.level()).apply_to(label).to_string()
            } else {
                label
            };
            out.finish(format_args!("{timestamp} {label} {message}"))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply();

    if result.is_err() {
        eprintln!("Logger already initialized, keeping the existing sink");
    }
}
