//! Progress reporting for the fetch phase.
//!
//! Interactive runs get an indicatif bar on stderr. In log-only mode the bar
//! is hidden and periodic `[phase] n/total (pct%)` lines are printed instead,
//! which reads better when stderr is tailed from a file.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

const BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}, ETA: {eta})";

/// Global flag for log-only mode (set from args in main)
pub static LOG_ONLY: AtomicBool = AtomicBool::new(false);

pub fn set_log_only(value: bool) {
    LOG_ONLY.store(value, Ordering::Relaxed);
}

pub fn is_log_only() -> bool {
    LOG_ONLY.load(Ordering::Relaxed)
}

/// "12.3s" under a minute, "4.5m" above.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.1}m", secs / 60.0)
    }
}

/// Progress bar over `len` tracks; hidden in log-only mode.
pub fn create_progress_bar(len: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if is_log_only() {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    } else {
        match ProgressStyle::default_bar().template(BAR_TEMPLATE) {
            Ok(style) => pb.set_style(style.progress_chars("=> ")),
            Err(err) => tracing::debug!("progress template rejected: {}", err),
        }
    }
    pb.set_message(msg.to_string());
    pb
}

/// Log-only progress line for `current` of `total`.
///
/// Emitted every `interval` items and once more on the last one. An empty
/// phase (`total == 0`) never reports.
pub fn progress_line(phase: &str, current: u64, total: u64, interval: u64) -> Option<String> {
    if total == 0 || current == 0 || current > total {
        return None;
    }
    let on_interval = interval > 0 && current % interval == 0;
    if !on_interval && current != total {
        return None;
    }
    let pct = 100.0 * current as f64 / total as f64;
    Some(format!("[{}] {}/{} ({:.1}%)", phase, current, total, pct))
}

/// Print `progress_line` to stderr when in log-only mode.
pub fn log_progress(phase: &str, current: u64, total: u64, interval: u64) {
    if !is_log_only() {
        return;
    }
    if let Some(line) = progress_line(phase, current, total, interval) {
        eprintln!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1.5m");
    }

    #[test]
    fn test_progress_line_on_interval() {
        assert_eq!(
            progress_line("fetch", 100, 250, 100).as_deref(),
            Some("[fetch] 100/250 (40.0%)")
        );
        assert_eq!(progress_line("fetch", 101, 250, 100), None);
        assert_eq!(progress_line("fetch", 99, 250, 100), None);
    }

    #[test]
    fn test_progress_line_final_item() {
        assert_eq!(
            progress_line("fetch", 250, 250, 100).as_deref(),
            Some("[fetch] 250/250 (100.0%)")
        );
        assert_eq!(
            progress_line("fetch", 3, 3, 100).as_deref(),
            Some("[fetch] 3/3 (100.0%)")
        );
    }

    #[test]
    fn test_progress_line_empty_phase() {
        assert_eq!(progress_line("fetch", 0, 0, 100), None);
        assert_eq!(progress_line("fetch", 0, 0, 0), None);
    }

    #[test]
    fn test_progress_line_zero_interval_reports_only_last() {
        assert_eq!(progress_line("fetch", 5, 10, 0), None);
        assert!(progress_line("fetch", 10, 10, 0).is_some());
    }

    #[test]
    fn test_hidden_bar_in_log_only_mode() {
        set_log_only(true);
        let pb = create_progress_bar(10, "Fetching lyrics");
        assert!(pb.is_hidden());
    }
}
