//! Coaching prompt assembly
//!
//! Builds the single user message sent to the Chat Completions API. The
//! wording is fixed; given the same goal, events, and notes the prompt is
//! byte-for-byte identical.

use daycoach_domain::constants::NO_TITLE_PLACEHOLDER;
use daycoach_domain::EventSummary;

const NO_EVENTS_LINE: &str = "No events found.";
const NO_NOTES_LINE: &str = "No notes.";
const UNKNOWN_TIME_LABEL: &str = "unknown";

/// Assemble the coaching prompt from the user's goal, today's events, and
/// optional notes.
///
/// Events are rendered one per line, numbered from 1, in the order given.
/// Empty sections fall back to fixed placeholder lines so the prompt shape
/// never changes.
#[must_use]
pub fn build_coaching_prompt(goal: &str, events: &[EventSummary], notes: Option<&str>) -> String {
    let formatted_events = if events.is_empty() {
        NO_EVENTS_LINE.to_string()
    } else {
        events
            .iter()
            .enumerate()
            .map(|(index, event)| format_event_line(index, event))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let notes = notes.filter(|n| !n.is_empty()).unwrap_or(NO_NOTES_LINE);

    format!(
        "You are a productivity coach.\n\nUser goal:\n{goal}\n\nToday's calendar entries:\n{formatted_events}\n\nAdditional notes from user:\n{notes}\n\nGive:\n1. A short daily assessment.\n2. 3 strengths from today.\n3. 3 improvement suggestions for tomorrow tied to the user's goal.\n4. A practical schedule tweak in bullet points.\nUse concise language."
    )
}

fn format_event_line(index: usize, event: &EventSummary) -> String {
    let title = event.title.as_deref().filter(|t| !t.is_empty()).unwrap_or(NO_TITLE_PLACEHOLDER);
    let start = event.start.as_deref().filter(|s| !s.is_empty()).unwrap_or(UNKNOWN_TIME_LABEL);
    let end = event.end.as_deref().filter(|e| !e.is_empty()).unwrap_or(UNKNOWN_TIME_LABEL);

    format!("{}. {title} ({start} - {end})", index + 1)
}
