//! Terminal painting of intake blocks

use crate::application::{Notification, NotificationKind};
use crate::domain::entities::{Permission, RiskLevel, SecurityTier};
use crate::presentation::report::{DetailItem, ScreenReport};
use console::style;
use std::fmt::Write;

pub fn print_banner() {
    println!();
    println!("{}", style("APK Decompiler Pro").cyan().bold());
}

fn push_details(out: &mut String, items: &[DetailItem]) {
    let width = items.iter().map(|i| i.label.len()).max().unwrap_or(0);
    for item in items {
        let _ = writeln!(out, "  {:<width$}  {}", item.label, item.value);
    }
}

/// The upload panel shown while the analysis runs
pub fn format_file_info(items: &[DetailItem]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style("File").green().bold());
    push_details(&mut out, items);
    out
}

/// The results panel
pub fn format_screen(screen: &ScreenReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", style("Application Details").green().bold());
    push_details(&mut out, &screen.app_details);
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", style("Permissions").green().bold());
    for card in &screen.permissions {
        let level = if card.level == RiskLevel::Dangerous.as_str() {
            style(card.level).red()
        } else {
            style(card.level).dim()
        };
        let _ = writeln!(out, "  {:<44} {:<10} {}", card.name, level, card.description);
    }
    let _ = writeln!(out);

    let score = match screen.score.tier {
        SecurityTier::High => style(screen.score.value).green(),
        SecurityTier::Medium => style(screen.score.value).yellow(),
        SecurityTier::Low => style(screen.score.value).red(),
    };
    let _ = writeln!(
        out,
        "{} {}/100 ({})",
        style("Security Score:").green().bold(),
        score.bold(),
        screen.score.caption
    );
    for finding in &screen.findings {
        let marker = match finding.polarity {
            "positive" => style("+").green(),
            "warning" => style("!").yellow(),
            _ => style("-").red(),
        };
        let _ = writeln!(out, "  {} {:<18} {}", marker, finding.title, finding.status);
    }

    out
}

pub fn format_notification(notification: &Notification) -> String {
    match notification.kind {
        NotificationKind::Error => format!("[!] {}", style(&notification.message).red()),
        NotificationKind::Success => format!("[+] {}", style(&notification.message).green()),
    }
}

/// Permission table for the `permissions` subcommand
pub fn format_permission_table(permissions: &[Permission]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<44} {:<10} {}",
        style("PERMISSION").bold(),
        style("LEVEL").bold(),
        style("DESCRIPTION").bold()
    );
    let _ = writeln!(out, "{}", "-".repeat(86));
    for permission in permissions {
        let _ = writeln!(
            out,
            "{:<44} {:<10} {}",
            permission.identifier,
            permission.risk_level.as_str(),
            permission.description
        );
    }
    out
}
