use chrono::Utc;
use colored::{ColoredString, Colorize};
use foco::api::{CmdMessage, MessageLevel};
use foco::config::{FocoConfig, CONFIG_KEYS};
use foco::format::{words_label, working_time_label};
use foco::listing::{CoverDisplay, DocRow};
use foco::model::{CoverColor, Document};
use std::ops::Range;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 12;
const FAVORITE_MARKER: &str = "★";
const SWATCH: &str = "■";
const IMAGE_MARKER: &str = "▣";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_document_list(rows: &[DocRow]) {
    if rows.is_empty() {
        println!("No documents found.");
        return;
    }

    for row in rows {
        println!("{}", render_row(row));
    }
}

fn render_row(row: &DocRow) -> String {
    let marker = if row.selected { "›" } else { " " };
    let id = format!("{:>4}.", row.metadata.id);
    let favorite = if row.favorite {
        FAVORITE_MARKER.yellow()
    } else {
        " ".normal()
    };

    let name = truncate_to_width(&row.metadata.name, NAME_WIDTH);
    let padding = NAME_WIDTH.saturating_sub(name.width());
    // truncation may cut into the match; drop the highlight then
    let highlight = row.highlight.clone().filter(|r| r.end <= name.len());
    let name = highlighted(&name, highlight);

    let label = |value: &Option<String>| format!("{:>width$}", value.as_deref().unwrap_or(""), width = LABEL_WIDTH);

    format!(
        "{}{} {} {} {}{} {} {} {}",
        marker,
        id,
        favorite,
        cover_swatch(&row.cover),
        name,
        " ".repeat(padding),
        label(&row.words_label).dimmed(),
        label(&row.working_time_label).dimmed(),
        row.edited_label.as_deref().unwrap_or("").dimmed()
    )
}

fn highlighted(name: &str, range: Option<Range<usize>>) -> String {
    match range {
        Some(r) if name.is_char_boundary(r.start) && name.is_char_boundary(r.end) => format!(
            "{}{}{}",
            &name[..r.start],
            name[r.clone()].yellow().bold(),
            &name[r.end..]
        ),
        _ => name.to_string(),
    }
}

fn cover_swatch(cover: &CoverDisplay) -> ColoredString {
    match cover {
        CoverDisplay::Image(_) => IMAGE_MARKER.normal(),
        CoverDisplay::Color(color) | CoverDisplay::Default(color) => swatch(*color),
    }
}

fn swatch(color: CoverColor) -> ColoredString {
    let (r, g, b) = color.rgb();
    SWATCH.truecolor(r, g, b)
}

pub(super) fn print_documents(docs: &[Document]) {
    for (i, doc) in docs.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let meta = &doc.metadata;
        println!("{} {}", meta.id.to_string().yellow(), meta.name.bold());

        let mut details = Vec::new();
        if let Some(words) = meta.words {
            details.push(words_label(words));
        }
        if let Some(worked) = meta.working_time() {
            details.push(format!("{} writing", working_time_label(worked)));
        }
        if let Some(edited) = meta.last_edition {
            let elapsed = Utc::now().signed_duration_since(edited);
            let ago = Formatter::new().convert(elapsed.to_std().unwrap_or_default());
            details.push(format!("edited {}", ago));
        }
        if meta.favorite {
            details.push("favorite".to_string());
        }
        if !details.is_empty() {
            println!("{}", details.join(" · ").dimmed());
        }
        println!("--------------------------------");
        println!("{}", doc.text);
    }
}

pub(super) fn print_config(config: &FocoConfig) {
    for key in CONFIG_KEYS {
        if let Ok(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
