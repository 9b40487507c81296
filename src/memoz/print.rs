use colored::{Color as TermColor, Colorize};
use memoz::api::{CmdMessage, DisplayMemo, MessageLevel};
use memoz::model::Color;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 72;
const TIME_WIDTH: usize = 14;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_board(memos: &[DisplayMemo], filtered: bool) {
    if memos.is_empty() {
        if filtered {
            println!("No memos match.");
        } else {
            println!("The board is empty. Stick one on with `memoz add`.");
        }
        return;
    }

    for dm in memos {
        let idx_str = format!("{:>3}. ", dm.position);
        let label = format!("[{}]", dm.memo.category.label());
        let time_ago = format_time_ago(dm.memo.created_at);

        let fixed_width = idx_str.width() + label.width() + 1 + TIME_WIDTH + 2;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let text_flat: String = dm
            .memo
            .text
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let text_display = truncate_to_width(&text_flat, available);
        let padding = available.saturating_sub(text_display.width());

        let card = card_color(dm.memo.color);
        println!(
            "{}{} {}{}  {}",
            idx_str,
            label.color(card).bold(),
            text_display.color(card),
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

// The pastel sticky-note palette, as truecolor ANSI.
fn card_color(color: Color) -> TermColor {
    match color {
        Color::Yellow => TermColor::TrueColor {
            r: 254,
            g: 240,
            b: 138,
        },
        Color::Blue => TermColor::TrueColor {
            r: 191,
            g: 219,
            b: 254,
        },
        Color::Emerald => TermColor::TrueColor {
            r: 167,
            g: 243,
            b: 208,
        },
        Color::Rose => TermColor::TrueColor {
            r: 254,
            g: 205,
            b: 211,
        },
        Color::Purple => TermColor::TrueColor {
            r: 233,
            g: 213,
            b: 255,
        },
        Color::Orange => TermColor::TrueColor {
            r: 254,
            g: 215,
            b: 170,
        },
    }
}

// Width-aware, not byte-aware: category labels and memo text can be
// double-width Hangul.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
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

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let duration = chrono::Utc::now().signed_duration_since(timestamp);
    let time_str = timeago::Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
