//! Dashboard command and watch mode

use std::time::Duration;

use colored::Colorize;
use prettytable::{format, row, Table};

use super::{or_dash, print_json, Context};
use crate::config::MAX_REFRESH_SECONDS;
use crate::error::Result;
use crate::views::dashboard::{self as view, DashboardSnapshot};

/// Prints the dashboard, then keeps refreshing it until Ctrl-C when `watch`
/// is set
pub async fn run_dashboard(ctx: &Context, watch: bool, interval: Option<u64>) -> Result<()> {
    ctx.authenticated().await?;

    let mut snapshot = view::load(ctx.api()).await?;
    render(ctx, &snapshot)?;

    if !watch {
        return Ok(());
    }

    let seconds = interval
        .unwrap_or(ctx.config.views.dashboard_refresh_seconds)
        .clamp(1, MAX_REFRESH_SECONDS);
    if !ctx.json {
        eprintln!(
            "{}",
            format!("Refreshing every {}s; press Ctrl-C to stop.", seconds).dimmed()
        );
    }

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Could not listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let refreshed = view::auto_refresh(
        ctx.api(),
        Duration::from_secs(seconds),
        shutdown,
        |dashboard| {
            snapshot.apply_refresh(dashboard);
            if let Err(e) = render(ctx, &snapshot) {
                tracing::warn!("Failed to render dashboard: {}", e);
            }
        },
    )
    .await;

    tracing::info!(refreshed, "Dashboard watch ended");
    Ok(())
}

fn render(ctx: &Context, snapshot: &DashboardSnapshot) -> Result<()> {
    if ctx.json {
        return print_json(snapshot);
    }

    let d = &snapshot.dashboard;
    println!();
    println!(
        "{} {}  {}",
        format!("Stage {}/4", d.stage).bold(),
        d.stage_label.cyan(),
        format!("(updated {})", snapshot.fetched_at.format("%H:%M:%S")).dimmed()
    );

    if !d.onboarding_complete {
        println!(
            "{} Finish your profile: {}",
            "!".yellow(),
            "gradpath profile update --help".cyan()
        );
    }

    let mut summary = Table::new();
    summary.set_format(*format::consts::FORMAT_CLEAN);
    if let Some(p) = &d.profile_summary {
        let countries = if p.countries.is_empty() {
            "-".to_string()
        } else {
            p.countries.join(", ")
        };
        summary.add_row(row!["Education", p.education]);
        summary.add_row(row!["Target intake", p.target_intake]);
        summary.add_row(row!["Countries", countries]);
        summary.add_row(row!["Budget", p.budget]);
    }
    if let Some(s) = &d.profile_strength {
        summary.add_row(row!["Academics", or_dash(s.academics.as_deref())]);
        summary.add_row(row!["Exams", or_dash(s.exams.as_deref())]);
        summary.add_row(row!["SOP", or_dash(s.sop.as_deref())]);
    }
    summary.add_row(row!["Shortlisted", d.shortlisted_count]);
    summary.add_row(row!["Locked", d.locked_count]);
    summary.printstd();

    if !d.todos.is_empty() {
        println!("\n{}", "To-dos".bold());
        for todo in &d.todos {
            let mark = if todo.completed {
                "[x]".green()
            } else {
                "[ ]".normal()
            };
            println!("  {} {} {}", mark, todo.title, todo.id.dimmed());
        }
    }

    let locked = snapshot.locked();
    if !locked.is_empty() {
        println!("\n{}", "Locked".bold());
        for item in locked {
            println!("  {} {} ({})", "🔒".normal(), item.name, item.country);
        }
    }

    let preview = snapshot.unlocked_preview();
    if !preview.is_empty() {
        println!("\n{}", "Shortlist".bold());
        for item in preview {
            println!(
                "  {} ({}) {}",
                item.name,
                item.country,
                or_dash(item.category.as_deref()).dimmed()
            );
        }
    }

    Ok(())
}
