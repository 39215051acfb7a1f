mod config;

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use storage::Storage;
use tracing_subscriber::EnvFilter;
use will_core::{
    catalog, logout, BackOutcome, HttpAuthClient, PackageSelection, RegistrationError,
    RegistrationField, RegistrationFlow, RegistrationStep, ShareAllocation, StepOutcome,
    TokenStore,
};

use crate::config::{load_settings, Settings, DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(name = "willcli", about = "Register an account and draft a last will")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account; the emailed code and password are prompted for.
    Register {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        age: String,
    },
    /// Report whether a credential is stored.
    Token,
    /// Forget the stored credential.
    Logout,
    /// List packages, optionally picking one.
    Packages {
        #[arg(long)]
        select: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Total a set of beneficiary share percentages.
    Shares { values: Vec<String> },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();
    let settings = load_settings(&args.config)?;

    match args.command {
        Command::Register {
            full_name,
            email,
            phone,
            age,
        } => {
            let details = [
                (RegistrationField::FullName, full_name),
                (RegistrationField::Email, email),
                (RegistrationField::Phone, phone),
                (RegistrationField::Age, age),
            ];
            register(&settings, details).await
        }
        Command::Token => {
            let storage = Storage::new(&settings.database_url).await?;
            match storage.retrieve().await? {
                Some(token) => println!("Signed in (token of {} chars stored)", token.len()),
                None => println!("Not signed in"),
            }
            Ok(())
        }
        Command::Logout => {
            let storage = Storage::new(&settings.database_url).await?;
            logout(&storage).await?;
            println!("Signed out");
            Ok(())
        }
        Command::Packages { select, json } => show_packages(select.as_deref(), json),
        Command::Shares { values } => {
            let allocation = ShareAllocation::from_values(values.iter().map(String::as_str));
            println!("{allocation} ({:?})", allocation.status());
            if let Some(warning) = allocation.warning() {
                println!("{warning}");
            }
            Ok(())
        }
    }
}

async fn register(
    settings: &Settings,
    details: [(RegistrationField, String); 4],
) -> Result<()> {
    let storage = Storage::new(&settings.database_url).await?;
    let api = HttpAuthClient::new(settings.api_base.clone());
    let mut flow = RegistrationFlow::new(api, storage);
    for (field, value) in details {
        flow.set_field(field, value);
    }

    loop {
        match flow.step() {
            RegistrationStep::Details => {}
            RegistrationStep::VerifyOtp => {
                let input = prompt("Enter the 6-character code ('resend' or 'back')")?;
                match input.as_str() {
                    "resend" => {
                        match flow.resend_otp().await {
                            Ok(notice) => println!("{notice}"),
                            Err(err) => eprintln!("{err}"),
                        }
                        continue;
                    }
                    "back" => {
                        flow.back();
                        continue;
                    }
                    code => flow.set_field(RegistrationField::Otp, code),
                }
            }
            RegistrationStep::SetPassword => {
                let password = prompt("Password ('back' to re-enter the code)")?;
                if password == "back" {
                    flow.back();
                    continue;
                }
                flow.set_field(RegistrationField::Password, password);
                let confirm = prompt("Confirm password")?;
                flow.set_field(RegistrationField::ConfirmPassword, confirm);
            }
        }

        let step = flow.step();
        match flow.advance().await {
            Ok(StepOutcome::Advanced { notice, .. }) => {
                if let Some(notice) = notice {
                    println!("{notice}");
                }
            }
            Ok(StepOutcome::Completed {
                message,
                token_stored,
            }) => {
                println!("{message}");
                if !token_stored {
                    eprintln!("Account created, but the credential could not be saved.");
                }
                return Ok(());
            }
            Err(RegistrationError::Validation(errors)) => {
                for (field, message) in errors.iter() {
                    eprintln!("{field}: {message}");
                }
                if step == RegistrationStep::Details {
                    bail!("registration details were rejected");
                }
            }
            Err(err) => {
                eprintln!("{err}");
                // details come from the command line, so there is nothing to re-prompt
                if step == RegistrationStep::Details && flow.back() == BackOutcome::Exited {
                    bail!("could not start registration: {err}");
                }
            }
        }
    }
}

fn show_packages(select: Option<&str>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog())?);
    } else {
        for package in catalog() {
            let badge = if package.is_popular { " (most popular)" } else { "" };
            println!("{} - ${}{badge}", package.name, package.price_usd);
            println!("  {}", package.description);
            for feature in package.features {
                println!("  * {feature}");
            }
        }
    }

    if let Some(id) = select {
        let mut selection = PackageSelection::new();
        selection.select(id)?;
        if let Some(package) = selection.purchase() {
            println!("Selected {} for ${}", package.name, package.price_usd);
        }
    }
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("input closed");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
