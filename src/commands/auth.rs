//! Account commands

use colored::Colorize;
use prettytable::{row, Table};

use super::{print_json, value_or_prompt, Context};
use crate::api::types::User;
use crate::error::Result;

/// Create an account; the session moves straight to onboarding
pub async fn signup(
    ctx: &Context,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let name = value_or_prompt(name, "Full name: ")?;
    let email = value_or_prompt(email, "Email: ")?;
    let password = value_or_prompt(password, "Password: ")?;

    let user = ctx.session.signup(&name, &email, &password).await?;
    if ctx.json {
        return print_json(&user);
    }
    println!("{} {}", "Welcome,".green(), user.full_name.bold());
    Ok(())
}

/// Log in and store the session token
pub async fn login(ctx: &Context, email: Option<String>, password: Option<String>) -> Result<()> {
    let email = value_or_prompt(email, "Email: ")?;
    let password = value_or_prompt(password, "Password: ")?;

    let user = ctx.session.login(&email, &password).await?;
    if ctx.json {
        return print_json(&user);
    }
    println!("{} {}", "Logged in as".green(), user.email.bold());
    Ok(())
}

/// Forget the stored token; no backend call is made
pub fn logout(ctx: &Context) -> Result<()> {
    ctx.session.logout();
    if !ctx.json {
        println!("{}", "Logged out.".green());
    }
    Ok(())
}

pub async fn whoami(ctx: &Context) -> Result<()> {
    let user = ctx.authenticated().await?;
    if ctx.json {
        return print_json(&user);
    }
    print_user(&user);
    Ok(())
}

fn print_user(user: &User) {
    let mut table = Table::new();
    table.add_row(row!["Name", user.full_name]);
    table.add_row(row!["Email", user.email]);
    table.add_row(row!["ID", user.id]);
    table.add_row(row![
        "Active",
        if user.is_active { "yes" } else { "no" }
    ]);
    table.printstd();
}
