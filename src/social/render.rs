//! Calendar rendering.
//!
//! Renderers return strings; printing is the binary's job. Column math uses
//! display width so wide characters line up.

use crate::model::{Entry, Status};
use chrono::{Datelike, Days, NaiveDate};
use colored::{ColoredString, Colorize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 10;
const PLATFORM_WIDTH: usize = 12;
const STATUS_WIDTH: usize = 11;
const DATE_WIDTH: usize = 12;
const PREVIEW_WIDTH: usize = 40;

fn status_colored(status: Status) -> ColoredString {
    match status {
        Status::Draft => status.to_string().yellow(),
        Status::Scheduled => status.to_string().blue(),
        Status::Published => status.to_string().green(),
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();

    let mut result = String::new();
    let mut current_width = 0;
    for c in flat.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Calendar table: one row per entry, in the order the store returned them.
pub fn render_table(entries: &[Entry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Content Calendar".bold()));
    out.push_str(&format!(
        "{}{}{}{}{}\n",
        pad_to_width("ID", ID_WIDTH),
        pad_to_width("Platform", PLATFORM_WIDTH),
        pad_to_width("Status", STATUS_WIDTH),
        pad_to_width("Scheduled", DATE_WIDTH),
        "Topic / Preview",
    ));

    for entry in entries {
        let scheduled = entry
            .scheduled_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "--".to_string());
        let preview = truncate_to_width(
            &format!("{}: {}", entry.topic, entry.content),
            PREVIEW_WIDTH,
        );

        // The status cell carries color codes, so pad the plain text first.
        let status_plain = pad_to_width(&entry.status.to_string(), STATUS_WIDTH);
        let status_cell = match entry.status {
            Status::Draft => status_plain.yellow(),
            Status::Scheduled => status_plain.blue(),
            Status::Published => status_plain.green(),
        };

        out.push_str(&format!(
            "{}{}{}{}{}\n",
            pad_to_width(&entry.id, ID_WIDTH).dimmed(),
            pad_to_width(&title_case(&entry.platform.to_string()), PLATFORM_WIDTH),
            status_cell,
            pad_to_width(&scheduled, DATE_WIDTH),
            preview,
        ));
    }
    out
}

/// Week view: the seven days starting at `start`, one day per row, with the
/// entries scheduled on each day beneath it.
pub fn render_week(entries: &[Entry], start: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", format!("Week of {}", start).bold()));

    for offset in 0..7u64 {
        let day = start + Days::new(offset);
        let label = format!("{} {:02}/{:02}", day.weekday(), day.month(), day.day());
        out.push_str(&format!("{}\n", label.bold()));

        let day_entries: Vec<&Entry> = entries
            .iter()
            .filter(|e| e.scheduled_date == Some(day))
            .collect();
        if day_entries.is_empty() {
            out.push_str(&format!("  {}\n", "--".dimmed()));
            continue;
        }
        for entry in day_entries {
            out.push_str(&format!(
                "  {} {} {}\n",
                status_colored(entry.status),
                title_case(&entry.platform.to_string()),
                truncate_to_width(&entry.topic, 30),
            ));
        }
    }
    out
}

/// Full detail view of one entry.
pub fn render_detail(entry: &Entry) -> String {
    let scheduled = entry
        .scheduled_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "Not scheduled".to_string());

    format!(
        "{} {}\n{} {}\n{} {}\n{} {}\n{} {}\n{} {}\n\n{}\n{}\n",
        "ID:".bold(),
        entry.id,
        "Platform:".bold(),
        title_case(&entry.platform.to_string()),
        "Status:".bold(),
        status_colored(entry.status),
        "Topic:".bold(),
        entry.topic,
        "Scheduled:".bold(),
        scheduled,
        "Created:".bold(),
        entry.created_at.to_rfc3339(),
        "Content:".bold(),
        entry.content,
    )
}
