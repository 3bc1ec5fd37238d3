//! Text formats accepted by the entry forms.

use std::collections::BTreeMap;

use learning_tracker_core::{MetricMove, MetricValue};

/// Parse `key:value` lines into a KPI map.
///
/// Values may themselves contain `:`. Blank lines and lines without a colon
/// are skipped.
#[must_use]
pub fn parse_kpis(text: &str) -> BTreeMap<String, String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_owned(), value.trim().to_owned()))
        .collect()
}

#[must_use]
pub fn kpis_to_text(kpis: &BTreeMap<String, String>) -> String {
    kpis.iter().map(|(k, v)| format!("{k}:{v}")).collect::<Vec<_>>().join("\n")
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

/// Parse one `name:before->after (note)` line. Every part but the name is
/// optional; a line without a colon is just a name.
#[must_use]
pub fn parse_metric_move(line: &str) -> Option<MetricMove> {
    let (name, rest) = line.split_once(':').unwrap_or((line, ""));
    let metric_name = non_empty(name)?.to_owned();
    let (range, note) = match rest.split_once('(') {
        Some((range, note)) => (range, Some(note.trim().trim_end_matches(')'))),
        None => (rest, None),
    };
    let (before, after) = range.split_once("->").unwrap_or((range, ""));
    Some(MetricMove {
        metric_name,
        before: non_empty(before).map(MetricValue::from),
        after: non_empty(after).map(MetricValue::from),
        note: note.and_then(non_empty).map(str::to_owned),
    })
}

#[must_use]
pub fn parse_metrics_moved(text: &str) -> Vec<MetricMove> {
    text.lines().filter_map(parse_metric_move).collect()
}

#[must_use]
pub fn metrics_moved_to_text(moves: &[MetricMove]) -> String {
    moves
        .iter()
        .map(|m| {
            let before = m.before.as_ref().map(ToString::to_string).unwrap_or_default();
            let after = m.after.as_ref().map(ToString::to_string).unwrap_or_default();
            match &m.note {
                Some(note) => format!("{}:{before}->{after} ({note})", m.metric_name),
                None => format!("{}:{before}->{after}", m.metric_name),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Comma-separated tags with blanks dropped.
#[must_use]
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(',').map(str::trim).filter(|t| !t.is_empty()).map(str::to_owned).collect()
}
