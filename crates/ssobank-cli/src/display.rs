//! Display utilities for the CLI

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use ssobank_types::{AccountView, Direction, TransferEntry};
use std::time::Duration;

/// Print a section header
pub fn section(title: &str) {
    println!();
    println!("{}", "━".repeat(60).bright_black());
    println!(" {}", title.bright_white().bold());
    println!("{}", "━".repeat(60).bright_black());
}

/// Print a success message
pub fn success(message: &str) {
    println!("  {} {}", "✓".bright_green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("  {} {}", "✗".bright_red(), message.bright_red());
}

/// Print an info message
pub fn info(message: &str) {
    println!("  {} {}", "→".bright_blue(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    println!("  {} {}", "⚠".yellow(), message.yellow());
}

/// Print a labeled value
pub fn labeled(label: &str, value: &str) {
    println!("  {}: {}", label.bright_white(), value.bright_cyan());
}

/// Spinner shown while a request is in flight
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("  {spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Whole units with thousands separators
pub fn amount(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Print an account snapshot with its recent transfers
pub fn account_view(view: &AccountView) {
    section("Account");
    labeled("Account number", &view.account.account_number);
    labeled("Balance", &amount(view.account.balance));

    section("Recent transfers");
    if view.transfers.is_empty() {
        println!("  No transfers yet.");
        return;
    }

    println!(
        "  {:<22} {:<8} {:<18} {:>14}",
        "DATE", "TYPE", "COUNTERPARTY", "AMOUNT"
    );
    println!("  {}", "─".repeat(64));
    for entry in &view.transfers {
        transfer_row(entry);
    }

    let sent = view.debits().fold(0i64, |acc, e| acc.saturating_add(e.record.amount));
    let received = view.credits().fold(0i64, |acc, e| acc.saturating_add(e.record.amount));
    println!();
    labeled("Sent", &amount(sent));
    labeled("Received", &amount(received));
}

/// Signed amount, with an explicit `+` on credits
fn signed(entry: &TransferEntry) -> String {
    let value = entry.signed_amount();
    if value > 0 {
        format!("+{}", amount(value))
    } else {
        amount(value)
    }
}

fn transfer_row(entry: &TransferEntry) {
    let when = entry.record.transferred_at.format("%Y-%m-%d %H:%M").to_string();
    let shown = signed(entry);
    let (kind, shown) = match entry.direction {
        Direction::Debit => ("debit".bright_red(), shown.bright_red()),
        Direction::Credit => ("credit".bright_green(), shown.bright_green()),
    };

    println!(
        "  {:<22} {:<8} {:<18} {:>14}",
        when.bright_black(),
        kind,
        entry.counterparty(),
        shown
    );
}
