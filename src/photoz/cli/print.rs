use chrono::NaiveDateTime;
use colored::Colorize;
use photoz::api::{CmdMessage, MessageLevel};
use photoz::Photo;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const KEY_WIDTH: usize = 10;
const DATE_WIDTH: usize = 16;
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

pub(crate) fn print_full_photos(photos: &[Photo], now: NaiveDateTime) {
    for (i, photo) in photos.iter().enumerate() {
        if i > 0 {
            println!("\n--------------------------------\n");
        }
        println!(
            "{} {}",
            photo.key().to_string().yellow(),
            photo.title().unwrap_or("(untitled)").bold()
        );
        println!("url:   {}", photo.url().unwrap_or("-"));
        println!(
            "taken: {} ({})",
            photo.date().format("%Y-%m-%d %H:%M:%S"),
            format_time_ago(photo.date(), now).trim()
        );
    }
}

pub(crate) fn print_photos(photos: &[Photo], now: NaiveDateTime) {
    if photos.is_empty() {
        println!("No photos found.");
        return;
    }

    for photo in photos {
        let key = format!("{:<width$}", photo.key().to_string(), width = KEY_WIDTH);
        let date = photo.date().format("%Y-%m-%d %H:%M").to_string();
        let date = format!("{:<width$}", date, width = DATE_WIDTH);
        let time_ago = format_time_ago(photo.date(), now);

        let title = photo.title().unwrap_or("(untitled)");
        let description = match photo.url() {
            Some(url) => format!("{} {}", title, url),
            None => title.to_string(),
        };

        let fixed_width = KEY_WIDTH + DATE_WIDTH + TIME_WIDTH + 2;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let shown = truncate_to_width(&description, available);
        let padding = available.saturating_sub(shown.width());

        println!(
            "{}{} {}{} {}",
            key.yellow(),
            date,
            shown,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

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

fn format_time_ago(taken: NaiveDateTime, now: NaiveDateTime) -> String {
    let duration = now.signed_duration_since(taken);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
