//! Terminal rendering of results, history and probability charts. Every
//! function returns a `String` so callers decide where it goes.

use colored::{ColoredString, Colorize};
use domain::{ClassificationResult, HistoryEntry, HistoryLedger, Label, Probabilities};
use shared::utils::terminal_width;

const MIN_CHART_WIDTH: usize = 20;
const MAX_CHART_WIDTH: usize = 60;
const PREVIEW_CHARS: usize = 72;

pub fn chart_width() -> usize {
    terminal_width(80)
        .saturating_sub(20)
        .clamp(MIN_CHART_WIDTH, MAX_CHART_WIDTH)
}

fn paint(label: Label, text: &str) -> ColoredString {
    match label {
        Label::Ham => text.green(),
        Label::Spam => text.red(),
    }
}

pub fn result_banner(result: &ClassificationResult) -> String {
    let text = format!(
        "{} detected! {:.2}% confident",
        result.label(),
        result.confidence_percent()
    );
    paint(result.label(), &text).bold().to_string()
}

pub fn warning(text: &str) -> String {
    format!("{} {}", "Warning:".yellow().bold(), text.yellow())
}

pub fn failure(text: &str) -> String {
    format!("{} {}", "Error:".red().bold(), text.red())
}

pub fn history_cards(history: &HistoryLedger) -> String {
    if history.is_empty() {
        return "No history yet. Try classifying a message!".dimmed().to_string();
    }
    history
        .entries()
        .enumerate()
        .map(|(i, entry)| history_card(i + 1, entry))
        .collect::<Vec<_>>()
        .join("\n")
}

fn history_card(position: usize, entry: &HistoryEntry) -> String {
    let label = entry.result.label();
    format!(
        "{}\n  {} {}\n  {} {}\n  {} {:.2}%",
        format!("#{position}").dimmed(),
        "Message:".cyan().bold(),
        entry.message.preview(PREVIEW_CHARS),
        "Prediction:".bold(),
        paint(label, label.as_str()).bold(),
        "Confidence:".magenta().bold(),
        entry.result.confidence_percent()
    )
}

fn cells(share: f64, width: usize) -> usize {
    ((share * width as f64).round() as usize).min(width)
}

/// Proportional split of one bar between the classes.
pub fn share_chart(probabilities: &Probabilities, width: usize) -> String {
    let ham = cells(probabilities.get(Label::Ham), width);
    let spam = width - ham;
    format!(
        "{}{}\n{} {:.2}%  {} {:.2}%",
        paint(Label::Ham, &"█".repeat(ham)),
        paint(Label::Spam, &"█".repeat(spam)),
        paint(Label::Ham, "■ Ham"),
        probabilities.get(Label::Ham) * 100.0,
        paint(Label::Spam, "■ Spam"),
        probabilities.get(Label::Spam) * 100.0
    )
}

/// One bar per class on a fixed `[0, 1]` axis.
pub fn bar_chart(probabilities: &Probabilities, width: usize) -> String {
    Label::ALL
        .iter()
        .map(|&label| {
            let p = probabilities.get(label);
            let filled = cells(p, width);
            format!(
                "{:<4} |{}{}| {:.2}",
                label.as_str(),
                paint(label, &"█".repeat(filled)),
                " ".repeat(width - filled),
                p
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn detailed_analysis(entry: &HistoryEntry, width: usize) -> String {
    let probabilities = entry.result.probabilities();
    format!(
        "{}\n{}\n\n{}\n{}",
        "Spam vs Ham probability".bold(),
        share_chart(&probabilities, width),
        "Confidence distribution".bold(),
        bar_chart(&probabilities, width)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Message;

    fn plain() {
        colored::control::set_override(false);
    }

    fn result(spam: f64) -> ClassificationResult {
        ClassificationResult::from_probabilities(Probabilities::from_spam(spam).unwrap())
    }

    #[test]
    fn banner_shows_label_and_two_decimals() {
        plain();
        assert_eq!(result_banner(&result(0.9713)), "Spam detected! 97.13% confident");
        assert_eq!(result_banner(&result(0.116)), "Ham detected! 88.40% confident");
    }

    #[test]
    fn empty_history_message() {
        plain();
        assert_eq!(
            history_cards(&HistoryLedger::new()),
            "No history yet. Try classifying a message!"
        );
    }

    #[test]
    fn cards_are_numbered_newest_first() {
        plain();
        let mut ledger = HistoryLedger::new();
        for (text, spam) in [("see you at lunch", 0.1), ("WIN cash now", 0.95)] {
            let message = Message::parse(text, 100).unwrap();
            ledger.push_front(HistoryEntry::new(message, result(spam)));
        }
        let out = history_cards(&ledger);
        let first = out.find("#1").unwrap();
        let second = out.find("#2").unwrap();
        assert!(first < second);
        assert!(out[first..second].contains("WIN cash now"));
        assert!(out[first..second].contains("Prediction: Spam"));
        assert!(out[second..].contains("Confidence: 90.00%"));
    }

    #[test]
    fn share_chart_fills_width() {
        plain();
        let p = Probabilities::from_spam(0.75).unwrap();
        let out = share_chart(&p, 20);
        let bar = out.lines().next().unwrap();
        assert_eq!(bar.chars().count(), 20);
        assert!(out.contains("Ham 25.00%"));
        assert!(out.contains("Spam 75.00%"));
    }

    #[test]
    fn bar_chart_rows() {
        plain();
        let p = Probabilities::new(0.5, 0.5).unwrap();
        let out = bar_chart(&p, 10);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Ham  |█████     | 0.50");
        assert_eq!(lines[1], "Spam |█████     | 0.50");
    }

    #[test]
    fn chart_width_is_clamped() {
        let w = chart_width();
        assert!((MIN_CHART_WIDTH..=MAX_CHART_WIDTH).contains(&w));
    }
}
