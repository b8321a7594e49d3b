//! Auth commands - sign up, log in, log out, status

use crate::commands::fail;
use crate::display;
use colored::*;
use dialoguer::{Input, Password};
use ssobank_sdk::{BankingClient, Operation};
use ssobank_types::{Credentials, SignupRequest};
use std::path::Path;

const MIN_PASSWORD_LEN: usize = 8;

fn prompt_email(email: Option<String>) -> anyhow::Result<String> {
    match email {
        Some(email) => Ok(email),
        None => Ok(Input::<String>::new().with_prompt("Email").interact_text()?),
    }
}

/// Register a new user
pub async fn signup(bank: &BankingClient, email: Option<String>, name: Option<String>) -> anyhow::Result<()> {
    println!("{}", "Create an account".bright_white().bold());
    println!();

    let email = prompt_email(email)?;
    let name = match name {
        Some(name) => name,
        None => Input::<String>::new().with_prompt("Name").interact_text()?,
    };
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        anyhow::bail!("Password must be at least {} characters", MIN_PASSWORD_LEN);
    }

    let request = SignupRequest::new(email, password, name);
    let pb = display::spinner("Signing up...");
    let result = bank.auth().signup(&request).await;
    pb.finish_and_clear();

    match result {
        Ok(()) => {
            display::success(&format!("Account created for {}", request.email.bright_cyan()));
            display::info("Log in with: ssobank login");
            Ok(())
        }
        Err(err) => {
            let message = err.user_message(Operation::Signup);
            Err(fail(bank, err, message))
        }
    }
}

/// Exchange credentials for a session
pub async fn login(bank: &BankingClient, email: Option<String>) -> anyhow::Result<()> {
    let email = prompt_email(email)?;
    let password = Password::new().with_prompt("Password").interact()?;

    let credentials = Credentials::new(email, password);
    let pb = display::spinner("Logging in...");
    let result = bank.auth().login(&credentials).await;
    pb.finish_and_clear();

    match result {
        Ok(response) => {
            let who = response.name.unwrap_or_else(|| credentials.email.clone());
            display::success(&format!("Welcome, {}", who.bright_cyan()));
            Ok(())
        }
        Err(err) => {
            let message = err.user_message(Operation::Login);
            Err(fail(bank, err, message))
        }
    }
}

pub fn logout(bank: &BankingClient) -> anyhow::Result<()> {
    if !bank.auth().is_authenticated() {
        display::warning("Not logged in");
        return Ok(());
    }
    bank.auth().logout();
    display::success("Logged out");
    Ok(())
}

/// Show session and endpoint configuration
pub fn status(bank: &BankingClient, session_path: &Path) -> anyhow::Result<()> {
    let config = bank.config();

    println!("{}", "Client Status".bright_white().bold());
    println!("{}", "─".repeat(50));

    print!("  Session: ");
    if bank.auth().is_authenticated() {
        println!("{}", "● Logged in".bright_green());
    } else {
        println!("{}", "○ Logged out".bright_red());
    }
    display::labeled("Session file", &session_path.display().to_string());
    display::labeled("Identity service", &config.auth_base_url);
    display::labeled("Banking service", &config.banking_base_url);
    if let Some(timeout) = config.timeout {
        display::labeled("Timeout", &format!("{:?}", timeout));
    }

    Ok(())
}
