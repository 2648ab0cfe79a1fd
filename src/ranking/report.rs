//! Text summary of a ranking

use std::fmt::Write;

use crate::ranking::evaluator::TargetRating;
use crate::ranking::Ranking;

const SUFFIXES: [&str; 7] = ["", "k", "m", "b", "t", "q", "Q"];

/// Format a rate with a thousands suffix: 1234567 -> "1.235m"
pub fn format_rate(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }
    let magnitude = value.abs();
    if magnitude > 0.0 && magnitude < 1e-3 {
        return format!("{:.3e}", value);
    }
    let mut scaled = value;
    let mut suffix = 0;
    while scaled.abs() >= 1000.0 && suffix < SUFFIXES.len() - 1 {
        scaled /= 1000.0;
        suffix += 1;
    }
    format!("{:.3}{}", scaled, SUFFIXES[suffix])
}

fn describe(rating: &TargetRating) -> String {
    let mut line = format!(
        "{:<20} gain {:>10}/s  exp {:>10}/s  [{}]",
        rating.id.as_str(),
        format_rate(rating.gain_rate),
        format_rate(rating.exp_rate),
        rating.model.name()
    );
    if rating.projected {
        let _ = write!(line, " projected from skill {}", rating.required_skill);
    }
    line
}

/// Reference and best target lines
pub fn render_headline(ranking: &Ranking) -> String {
    let mut out = String::new();

    match &ranking.reference {
        Some(reference) => {
            let _ = writeln!(out, "Reference target: {}", describe(reference));
        }
        None => {
            let _ = writeln!(out, "Reference target: none");
        }
    }
    match ranking.best() {
        Some(best) => {
            let _ = writeln!(out, "Best target:      {}", describe(best));
        }
        None => {
            let _ = writeln!(out, "No rankable targets found");
        }
    }
    out
}

/// Full gain list and top exp list
pub fn render_lists(ranking: &Ranking) -> String {
    let mut out = String::new();
    if ranking.by_gain.is_empty() {
        return out;
    }

    let _ = writeln!(out, "Targets by gain rate:");
    for (rank, rating) in ranking.by_gain.iter().enumerate() {
        let _ = writeln!(out, "{:>4}. {}", rank + 1, describe(rating));
    }

    let _ = writeln!(out, "\nTop {} by exp rate:", ranking.by_exp.len());
    for (rank, rating) in ranking.by_exp.iter().enumerate() {
        let _ = writeln!(out, "{:>4}. {}", rank + 1, describe(rating));
    }
    out
}

/// Emit both lists at debug level, one event per line
pub fn log_lists(ranking: &Ranking) {
    for line in render_lists(ranking).lines().filter(|l| !l.is_empty()) {
        tracing::debug!("{}", line);
    }
}

/// Headline followed by both lists
pub fn render_summary(ranking: &Ranking) -> String {
    let lists = render_lists(ranking);
    if lists.is_empty() {
        render_headline(ranking)
    } else {
        format!("{}\n{}", render_headline(ranking), lists)
    }
}
