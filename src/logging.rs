//! Best-effort decision logging to `~/.local/share/shellgate/decisions.log`.
//! Failures are silently ignored (logging must never block a decision).

use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::eval::Verdict;

fn log_file() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    let dir = std::path::Path::new(&home).join(".local/share/shellgate");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join("decisions.log"))
}

/// Install a file logger behind the `log` facade. Best-effort: on any
/// failure the process keeps running without logging.
pub fn init() {
    let Some(path) = log_file() else {
        return;
    };
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
    else {
        return;
    };
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = WriteLogger::init(LevelFilter::Info, config, file);
}

/// Record one decision line: verdict, truncated command, flattened reason.
pub fn log_decision(command: &str, verdict: &Verdict) {
    let cmd_truncated: String = command.chars().take(200).collect();
    match verdict {
        Verdict::Denied { reason } | Verdict::RequiresConfirmation { reason } => {
            let reason_oneline = reason.replace('\n', "; ");
            log::info!("{}\t{cmd_truncated}\t{reason_oneline}", verdict.as_str());
        }
        Verdict::Allowed => {
            log::info!("{}\t{cmd_truncated}", verdict.as_str());
        }
    }
}
