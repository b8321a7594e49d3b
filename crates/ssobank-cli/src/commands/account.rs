//! Dashboard - account balance and recent transfers

use crate::commands::fail;
use crate::display;
use ssobank_sdk::{BankingClient, Operation};

pub async fn dashboard(bank: &BankingClient, account: Option<String>) -> anyhow::Result<()> {
    if !bank.auth().is_authenticated() {
        anyhow::bail!("Not logged in. Run `ssobank login` first.");
    }

    let pb = display::spinner("Loading account...");
    let result = bank.accounts().load(account.as_deref()).await;
    pb.finish_and_clear();

    match result {
        Ok(view) => {
            display::account_view(&view);
            Ok(())
        }
        Err(err) => {
            let message = err.user_message(Operation::LoadAccount);
            Err(fail(bank, err, message))
        }
    }
}
