//! Transfer command

use crate::commands::fail;
use crate::display;
use colored::*;
use dialoguer::Confirm;
use ssobank_sdk::BankingClient;

pub async fn transfer(bank: &BankingClient, to: &str, amount: &str, yes: bool) -> anyhow::Result<()> {
    // Validation runs before anything is sent, so bad input fails here
    let request = match bank.transfers().prepare(to, amount) {
        Ok(request) => request,
        Err(err) => {
            let message = err.user_message();
            return Err(fail(bank, err, message));
        }
    };

    println!("{}", "Transfer".bright_white().bold());
    println!("{}", "─".repeat(40));
    display::labeled("To", &request.to_account_number);
    display::labeled("Amount", &display::amount(request.amount));
    display::labeled("Transaction", request.transaction_id.as_str());
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Send this transfer?")
            .default(false)
            .interact()?;
        if !confirmed {
            display::warning("Transfer cancelled");
            return Ok(());
        }
    }

    let pb = display::spinner("Sending transfer...");
    let result = bank.transfers().send(&request).await;
    pb.finish_and_clear();

    match result {
        Ok(()) => {
            display::success(&format!(
                "Sent {} to {}",
                display::amount(request.amount).bright_cyan(),
                request.to_account_number
            ));
            Ok(())
        }
        Err(err) => {
            let message = err.user_message();
            Err(fail(bank, err, message))
        }
    }
}
