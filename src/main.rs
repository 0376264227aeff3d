//! Interactive terminal login form.
//!
//! Prompts for the email, password and terms checkbox, shows inline errors
//! as the form is filled in, and submits once the form passes validation.
//! A rejected login prints the error and re-prompts with the previous values.
//!
//! # Usage
//!
//! ```bash
//! # Fill everything in interactively
//! cargo run
//!
//! # Pre-fill the email and accept the terms
//! cargo run -- --email demo@example.com -y
//!
//! # Show the password while typing and dump each form view as JSON
//! cargo run -- --show-password --json
//! ```
//!
//! # Environment Variables
//!
//! See [`login_form::config`]. `CREDENTIAL_SIGNING_SECRET` is required.

use login_form::application::services::{
    FormValidationController, LoginOutcome, LoginOutcomeHandler,
};
use login_form::config::{self, Config};
use login_form::domain::collaborators::{Authenticator, LoginSchema};
use login_form::domain::entities::{Destination, LoginView};
use login_form::infrastructure::auth::InMemoryAuthenticator;
use login_form::infrastructure::terminal::{TerminalNavigator, TerminalNotifier};
use login_form::infrastructure::validation::StandardLoginSchema;
use login_form::telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::{Confirm, Input, Password};
use std::sync::Arc;

/// Terminal login form.
#[derive(Parser)]
#[command(name = "login-form")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pre-fill the email field
    #[arg(short, long)]
    email: Option<String>,

    /// Show the password in plaintext while typing
    #[arg(long)]
    show_password: bool,

    /// Tick the terms checkbox without asking
    #[arg(short = 'y', long)]
    accept_terms: bool,

    /// Print the form view as JSON after every edit
    #[arg(long)]
    json: bool,

    /// Give up after this many rejected logins
    #[arg(long, default_value_t = 3)]
    max_attempts: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    telemetry::init(&config);
    config.print_summary();

    let schema = Arc::new(StandardLoginSchema::new(config.password_min_length));
    let authenticator = Arc::new(build_authenticator(&config));
    let mut controller = FormValidationController::new(schema, authenticator);

    if let Some(ref email) = cli.email {
        controller.set_email(email.clone());
    }
    if cli.show_password {
        controller.toggle_show_password();
    }
    if cli.accept_terms {
        controller.set_terms_accepted(true);
    }

    let mut handler = LoginOutcomeHandler::new(
        Arc::new(TerminalNavigator),
        Arc::new(TerminalNotifier),
        Destination::Catalogue(config.catalogue_path.clone()),
    );

    println!("{}", "🔐 Login".bright_blue().bold());
    println!();

    let mut rejected = 0;
    while rejected < cli.max_attempts {
        fill_form(&mut controller, &cli)?;

        if !controller.can_submit() {
            println!("{}", "Form is incomplete, please review the fields.".yellow());
            println!();
            continue;
        }

        let mut rx = controller.subscribe();
        let _pending = controller.submit();
        print_view(&controller.view(), cli.json)?;
        println!("{}", "Signing in...".dimmed());

        match handler.run(&mut rx).await? {
            LoginOutcome::Navigated(_) => return Ok(()),
            LoginOutcome::Notified(_) => {
                rejected += 1;
                println!();
            }
            LoginOutcome::Rejected => {
                rejected += 1;
                println!("{}", "Login rejected, please try again.".yellow());
                println!();
            }
        }
    }

    anyhow::bail!("Giving up after {} rejected logins", rejected)
}

/// Builds the credential store, seeding the demo account when configured.
fn build_authenticator(config: &Config) -> InMemoryAuthenticator {
    let mut authenticator = InMemoryAuthenticator::new(config.credential_signing_secret.clone());

    match config.demo_account {
        Some(ref demo) => authenticator.insert(&demo.email, &demo.password),
        None => tracing::warn!("No demo account configured; every login will be rejected"),
    }

    authenticator
}

/// Prompts for every field, keeping the current values as defaults.
fn fill_form<S, A>(controller: &mut FormValidationController<S, A>, cli: &Cli) -> Result<()>
where
    S: LoginSchema,
    A: Authenticator + 'static,
{
    let email: String = Input::new()
        .with_prompt("Email")
        .with_initial_text(controller.state().email.clone())
        .allow_empty(true)
        .interact_text()?;
    controller.set_email(email);
    print_field_error(controller.validation().email_error.as_deref());

    if controller.state().show_password {
        let password: String = Input::new()
            .with_prompt("Password")
            .with_initial_text(controller.state().password.clone())
            .allow_empty(true)
            .interact_text()?;
        controller.set_password(password);
    } else {
        let password = Password::new()
            .with_prompt("Password (leave empty to keep or clear)")
            .allow_empty_password(true)
            .interact()?;
        if !password.is_empty() {
            controller.set_password(password);
        } else if !controller.state().password.is_empty()
            && Confirm::new()
                .with_prompt("Clear the password?")
                .default(false)
                .interact()?
        {
            controller.set_password(String::new());
        }
    }
    print_field_error(controller.validation().password_error.as_deref());

    if !cli.accept_terms {
        let accepted = Confirm::new()
            .with_prompt("I have read and accept the terms and conditions")
            .default(controller.state().terms_accepted)
            .interact()?;
        controller.set_terms_accepted(accepted);
    }

    if !controller.can_submit()
        && controller.validation().password_error.is_some()
        && Confirm::new()
            .with_prompt("Toggle password visibility?")
            .default(false)
            .interact()?
    {
        controller.toggle_show_password();
    }

    print_view(&controller.view(), cli.json)
}

fn print_field_error(error: Option<&str>) {
    if let Some(message) = error {
        println!("  {} {}", "⚠".yellow(), message.yellow());
    }
}

/// Prints the form as a summary block or a JSON line.
fn print_view(view: &LoginView, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(view)?);
        return Ok(());
    }

    println!();
    println!("  {:<10} {}", "Email:".bold(), view.email);
    println!("  {:<10} {}", "Password:".bold(), view.password_display);
    println!(
        "  {:<10} {}",
        "Terms:".bold(),
        if view.terms_accepted { "[x]" } else { "[ ]" }
    );

    let button = if view.is_submitting {
        "Signing in...".dimmed()
    } else if view.submit_enabled {
        "Log in (enabled)".green()
    } else {
        "Log in (disabled)".red()
    };
    println!("  {:<10} {}", "Submit:".bold(), button);
    println!();

    Ok(())
}
