//! Colorful console output for solver events.
//!
//! Provides a custom `tracing` layer that formats solver events with colors
//! on stderr, so stdout stays reserved for the answer line.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve, validation and search start/end)
//! - **DEBUG**: Progress updates (1/sec with speed and best matte count)
//! - **TRACE**: Individual candidate evaluations

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(feature = "verbose-logging"))]
const DEFAULT_DIRECTIVES: &str = "paintshop_core=info,paintshop_solver=info";
#[cfg(feature = "verbose-logging")]
const DEFAULT_DIRECTIVES: &str = "paintshop_core=debug,paintshop_solver=debug";

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default directives.
pub fn init() {
    init_with_directives(DEFAULT_DIRECTIVES);
}

/// Initializes the console with DEBUG progress events enabled.
pub fn init_verbose() {
    init_with_directives("paintshop_core=debug,paintshop_solver=debug");
}

fn init_with_directives(directives: &str) {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
             _       _       _
 _ __   __ _(_)_ __ | |_ ___| |__   ___  _ __
| '_ \ / _` | | '_ \| __/ __| '_ \ / _ \| '_ \
| |_) | (_| | | | | | |_\__ \ | | | (_) | |_) |
| .__/ \__,_|_|_| |_|\__|___/_| |_|\___/| .__/
|_|                                     |_|
"#;

    let version_line = format!("                 v{} - Paint Shop Solver\n", VERSION);

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", banner.bright_cyan());
    let _ = writeln!(stderr, "{}", version_line.bright_white().bold());
    let _ = stderr.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !target.starts_with("paintshop") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = *metadata.level();
        let output = format_event(&visitor, level);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    colors: Option<u64>,
    customers: Option<u64>,
    forced: Option<u64>,
    defaulted: Option<u64>,
    unresolved: Option<u64>,
    violations: Option<u64>,
    first: Option<String>,
    unresolved_slots: Option<u64>,
    free_customers: Option<u64>,
    order: Option<String>,
    check: Option<String>,
    candidates: Option<u64>,
    candidate: Option<u64>,
    speed: Option<u64>,
    best_matte: Option<u64>,
    matte: Option<u64>,
    feasible: Option<bool>,
    cause: Option<String>,
    outcome: Option<String>,
    reason: Option<String>,
    pruned: Option<u64>,
    placements: Option<u64>,
    duration_ms: Option<u64>,
    answer: Option<String>,
    kind: Option<String>,
}

impl EventVisitor {
    fn text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "first" => self.first = Some(value),
            "order" => self.order = Some(value),
            "check" => self.check = Some(value),
            "cause" => self.cause = Some(value),
            "outcome" => self.outcome = Some(value),
            "reason" => self.reason = Some(value),
            "answer" => self.answer = Some(value),
            "kind" => self.kind = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "colors" => self.colors = Some(value),
            "customers" => self.customers = Some(value),
            "forced" => self.forced = Some(value),
            "defaulted" => self.defaulted = Some(value),
            "unresolved" => self.unresolved = Some(value),
            "violations" => self.violations = Some(value),
            "unresolved_slots" => self.unresolved_slots = Some(value),
            "free_customers" => self.free_customers = Some(value),
            "candidates" => self.candidates = Some(value),
            "candidate" => self.candidate = Some(value),
            "speed" => self.speed = Some(value),
            "best_matte" => self.best_matte = Some(value),
            "matte" => self.matte = Some(value),
            "pruned" => self.pruned = Some(value),
            "placements" => self.placements = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "feasible" {
            self.feasible = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.text(field.name(), value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "validation_passed" => format_validation_passed(v),
        "validation_rejected" => format_validation_rejected(v),
        "search_start" => format_search_start(v),
        "search_end" => format_search_end(v),
        "progress" => format_progress(v),
        "improved" => format_improved(v),
        "infeasible" => format_infeasible(v),
        "candidate" => format_candidate(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    format!(
        "{} {} Solving │ {} colors │ {} customers",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.colors).bright_yellow(),
        count(v.customers).bright_yellow(),
    )
}

fn format_validation_passed(v: &EventVisitor) -> String {
    format!(
        "{} {} Validated │ {} forced │ {} defaulted │ {} unresolved",
        format_elapsed(),
        "✓".bright_green(),
        count(v.forced).white(),
        count(v.defaulted).white(),
        count(v.unresolved).bright_yellow(),
    )
}

fn format_validation_rejected(v: &EventVisitor) -> String {
    let first = v.first.as_deref().unwrap_or("unknown violation");
    format!(
        "{} {} Rejected │ {} violations │ {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        count(v.violations).bright_red(),
        first,
    )
}

fn format_search_start(v: &EventVisitor) -> String {
    let slots = v.unresolved_slots.unwrap_or(0);
    format!(
        "{} {} Search started │ {} slots │ {} free customers │ scale {} │ {} / {}",
        format_elapsed(),
        "▶".bright_blue(),
        count(v.unresolved_slots).bright_yellow(),
        count(v.free_customers).bright_yellow(),
        search_scale(slots).bright_magenta(),
        v.order.as_deref().unwrap_or("?").white().bold(),
        v.check.as_deref().unwrap_or("?").white().bold(),
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    let duration = v.duration_ms.unwrap_or(0);
    format!(
        "{} {} Search ended │ {} │ {} candidates │ {} pruned │ {} placements │ {} candidates/s │ {}",
        format_elapsed(),
        "◀".bright_blue(),
        format_duration_ms(duration).yellow(),
        count(v.candidates).white(),
        count(v.pruned).white(),
        count(v.placements).white(),
        count(v.speed).bright_magenta().bold(),
        format_outcome(v.outcome.as_deref().unwrap_or("Unknown")),
    )
}

fn format_progress(v: &EventVisitor) -> String {
    let best = match v.best_matte {
        Some(matte) => format!("best {} matte", matte).bright_green().to_string(),
        None => "no assignment yet".bright_black().to_string(),
    };
    format!(
        "{} {} {:>10} candidates │ {:>12}/s │ {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        count(v.candidates).white(),
        count(v.speed).bright_magenta().bold(),
        best,
    )
}

fn format_improved(v: &EventVisitor) -> String {
    format!(
        "{} {} New best │ {} matte",
        format_elapsed(),
        "★".bright_yellow(),
        count(v.matte).bright_green().bold(),
    )
}

fn format_infeasible(v: &EventVisitor) -> String {
    format!(
        "{} {} Infeasible │ {}",
        format_elapsed(),
        "✗".bright_red(),
        v.cause.as_deref().unwrap_or("unknown cause"),
    )
}

fn format_candidate(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let icon = if v.feasible.unwrap_or(false) {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };

    format!(
        "{} {} Candidate {:>10} │ {} matte",
        format_elapsed(),
        icon,
        count(v.candidate).bright_black(),
        count(v.matte).bright_black(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let answer = v.answer.as_deref().unwrap_or("UNKNOWN");
    let (status, status_text) = match answer {
        "IMPOSSIBLE" => (
            "IMPOSSIBLE".bright_red().bold().to_string(),
            "NO ASSIGNMENT EXISTS",
        ),
        "UNKNOWN" => (
            "UNKNOWN".yellow().bold().to_string(),
            "STOPPED BEFORE ANY ASSIGNMENT",
        ),
        _ => (
            "SOLVED".bright_green().bold().to_string(),
            "ASSIGNMENT FOUND",
        ),
    };

    let mut output = format!(
        "{} {} Solving complete │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        status
    );

    output.push_str("\n\n");
    output.push_str(
        &"╔══════════════════════════════════════════════════════════╗"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');

    let inner_width: usize = 58;
    let total_pad = inner_width.saturating_sub(status_text.len());
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        status_text.bold(),
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');

    output.push_str(
        &"╠══════════════════════════════════════════════════════════╣"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');

    if let Some(matte) = matte_count(answer) {
        output.push_str(&summary_row("Matte colors:", &matte.to_string()));
    }
    if let Some(reason) = v.reason.as_deref() {
        output.push_str(&summary_row("Reason:", reason));
    }
    if let Some(kind) = v.kind.as_deref() {
        output.push_str(&summary_row("Kind:", kind));
    }
    if let Some(candidates) = v.candidates {
        output.push_str(&summary_row(
            "Candidates:",
            &candidates.to_formatted_string(&Locale::en),
        ));
    }

    output.push_str(
        &"╚══════════════════════════════════════════════════════════╝"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');

    output
}

fn summary_row(label: &str, value: &str) -> String {
    // Keep the box closed for long diagnostics.
    let value: String = value.chars().take(36).collect();
    format!(
        "{}  {:<18}{:>36}  {}\n",
        "║".bright_cyan(),
        label,
        value,
        "║".bright_cyan()
    )
}

// Matte count of an answer line such as "0 1 1".
fn matte_count(answer: &str) -> Option<usize> {
    if answer.is_empty() || !answer.split(' ').all(|s| s == "0" || s == "1") {
        return None;
    }
    Some(answer.split(' ').filter(|s| *s == "1").count())
}

fn format_outcome(outcome: &str) -> String {
    if outcome.starts_with("Optimal") {
        outcome.bright_green().to_string()
    } else if outcome.starts_with("Feasible") {
        outcome.yellow().to_string()
    } else if outcome.starts_with("Infeasible") {
        outcome.bright_red().to_string()
    } else {
        outcome.white().to_string()
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

// Size of the candidate space, 2^slots.
fn search_scale(slots: u64) -> String {
    if slots < 20 {
        return (1u64 << slots).to_formatted_string(&Locale::en);
    }
    let log_scale = slots as f64 * 2f64.log10();
    let exponent = log_scale.floor() as i32;
    let mantissa = 10f64.powf(log_scale - exponent as f64);

    format!("{:.3} x 10^{}", mantissa, exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_formatting() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_search_scale() {
        assert_eq!(search_scale(0), "1");
        assert_eq!(search_scale(10), "1,024");
        assert_eq!(search_scale(100), "1.268 x 10^30");
    }

    #[test]
    fn test_matte_count_of_answer() {
        assert_eq!(matte_count("0 1 1"), Some(2));
        assert_eq!(matte_count("0"), Some(0));
        assert_eq!(matte_count("IMPOSSIBLE"), None);
        assert_eq!(matte_count(""), None);
    }

    #[test]
    fn test_unknown_event_renders_nothing() {
        let visitor = EventVisitor {
            event: Some("unrelated".to_string()),
            ..Default::default()
        };
        assert!(format_event(&visitor, Level::INFO).is_empty());
    }

    #[test]
    fn test_candidate_only_at_trace() {
        let visitor = EventVisitor {
            event: Some("candidate".to_string()),
            candidate: Some(3),
            matte: Some(1),
            feasible: Some(true),
            ..Default::default()
        };
        assert!(format_event(&visitor, Level::DEBUG).is_empty());
        assert!(format_event(&visitor, Level::TRACE).contains("Candidate"));
    }

    #[test]
    fn test_solve_end_summary() {
        let visitor = EventVisitor {
            event: Some("solve_end".to_string()),
            answer: Some("0 1".to_string()),
            reason: Some("Optimality Proven".to_string()),
            candidates: Some(2),
            ..Default::default()
        };
        let output = format_event(&visitor, Level::INFO);
        assert!(output.contains("ASSIGNMENT FOUND"));
        assert!(output.contains("Matte colors:"));
        assert!(output.contains("Optimality Proven"));
    }
}
