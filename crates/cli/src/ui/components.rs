// Presentation components - stateless terminal building blocks

use colored::{ColoredString, Colorize};
use fieldsync_core::domain::JobStatus;

const BRAND: (u8, u8, u8) = (0x25, 0x63, 0xeb);
const MUTED: (u8, u8, u8) = (0x64, 0x74, 0x8b);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Outline,
}

/// Screen title bar, with a back hint on pushed screens
pub fn header(title: &str, with_back: bool) -> String {
    let rule = "─".repeat(title.chars().count().max(24) + if with_back { 9 } else { 0 });
    let title = if with_back {
        format!("{}  {}", "‹ Back (b)".truecolor(BRAND.0, BRAND.1, BRAND.2), title.bold())
    } else {
        title.bold().to_string()
    };
    format!("{}\n{}\n", title, rule.dimmed())
}

/// Block of lines with an optional accent bar in the given color
pub fn card(lines: &[String], accent: Option<(u8, u8, u8)>) -> String {
    let bar = match accent {
        Some((r, g, b)) => "▌".truecolor(r, g, b),
        None => "│".dimmed(),
    };
    let mut out = String::new();
    for line in lines {
        out.push_str(&format!("{} {}\n", bar, line));
    }
    out.push('\n');
    out
}

pub fn button(title: &str, variant: ButtonVariant, disabled: bool) -> String {
    let label = format!("[ {} ]", title);
    if disabled {
        return label.dimmed().to_string();
    }
    match variant {
        ButtonVariant::Primary => label
            .bold()
            .white()
            .on_truecolor(BRAND.0, BRAND.1, BRAND.2)
            .to_string(),
        ButtonVariant::Outline => label.truecolor(BRAND.0, BRAND.1, BRAND.2).to_string(),
    }
}

/// Colored dot and label, both from the shared status palette
pub fn status_badge(status: JobStatus) -> String {
    let (r, g, b) = status.style().rgb();
    format!("{} {}", "●".truecolor(r, g, b), status.label().truecolor(r, g, b).bold())
}

/// Small uppercase field label
pub fn label(text: &str) -> ColoredString {
    text.to_uppercase().truecolor(MUTED.0, MUTED.1, MUTED.2)
}

pub fn muted(text: &str) -> ColoredString {
    text.truecolor(MUTED.0, MUTED.1, MUTED.2)
}
