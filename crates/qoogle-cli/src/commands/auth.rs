//! Authentication commands

use super::open_store;
use anyhow::Result;
use colored::Colorize;
use qoogle_core::{AuthService, Credentials, MIN_PASSWORD_LEN};

/// Fill in whichever of username/password was not passed on the command line
fn prompt_credentials(
    username: Option<String>,
    password: Option<String>,
    confirm: bool,
) -> Result<Credentials> {
    let username = match username {
        Some(username) => username,
        None => dialoguer::Input::new()
            .with_prompt("Username")
            .interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None if confirm => dialoguer::Password::new()
            .with_prompt(format!("Password (min {} chars)", MIN_PASSWORD_LEN))
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()?,
    };

    Ok(Credentials { username, password })
}

pub async fn signup(username: Option<String>, password: Option<String>) -> Result<()> {
    println!("{}", "🔹 Create a Qoogle account".blue().bold());
    println!();

    let credentials = prompt_credentials(username, password, true)?;
    let store = open_store()?;
    let user = AuthService::new(&store).signup(&credentials.username, &credentials.password)?;

    println!("{}", "✅ Account created!".green().bold());
    println!("   Welcome, {}!", user.username.cyan());
    Ok(())
}

pub async fn login(username: Option<String>, password: Option<String>) -> Result<()> {
    println!("{}", "🔹 Sign in to Qoogle".blue().bold());
    println!();

    let credentials = prompt_credentials(username, password, false)?;
    let store = open_store()?;
    let user = AuthService::new(&store).login(&credentials.username, &credentials.password)?;

    println!("{}", "✅ Login successful!".green().bold());
    println!("   Welcome back, {}!", user.username.cyan());
    Ok(())
}

pub async fn logout() -> Result<()> {
    let store = open_store()?;
    let auth = AuthService::new(&store);

    if auth.current_user().is_none() {
        println!("{}", "⚠️  Not logged in".yellow());
        return Ok(());
    }

    auth.logout();
    println!("{}", "✅ Signed out".green());
    Ok(())
}

pub async fn whoami() -> Result<()> {
    let store = open_store()?;

    match AuthService::new(&store).current_user() {
        Some(user) => {
            println!("{}", "👤 User Info".blue().bold());
            println!();
            println!("   Username: {}", user.username.cyan());
        }
        None => println!("{}", "⚠️  Not logged in".yellow()),
    }
    Ok(())
}
