//! University commands: search, shortlist, lock, recommendations

use colored::Colorize;
use prettytable::{format, row, Table};

use super::{confirm, or_dash, print_json, Context};
use crate::api::types::{ShortlistCreate, ShortlistItem, University};
use crate::cli::UniversityCommand;
use crate::error::{GradpathError, Result};
use crate::views::search::{self, SearchHit};
use crate::views::{LockOutcome, ShortlistView};

pub async fn handle_universities(ctx: &Context, command: UniversityCommand) -> Result<()> {
    ctx.authenticated().await?;
    let api = ctx.api();

    match command {
        UniversityCommand::Search { country, name } => {
            let shortlist = match ShortlistView::load(api).await {
                Ok(view) => view,
                Err(e) => {
                    tracing::warn!("Could not load shortlist for search: {}", e);
                    ShortlistView::default()
                }
            };
            let hits =
                search::search(api, country.as_deref(), name.as_deref(), &shortlist).await?;
            if ctx.json {
                let universities: Vec<_> = hits.iter().map(|h| &h.university).collect();
                return print_json(&universities);
            }
            print_hits(&hits);
        }
        UniversityCommand::Shortlist { page } => {
            let view = ShortlistView::load(api).await?;
            let page = view.page(page, ctx.config.views.shortlist_page_size);
            if ctx.json {
                return print_json(page.items);
            }
            if view.items().is_empty() {
                println!("{}", "Your shortlist is empty.".yellow());
                println!(
                    "Find universities with {}",
                    "gradpath universities search --country <name>".cyan()
                );
                return Ok(());
            }
            print_shortlist(page.items);
            println!(
                "Page {} of {}{}",
                page.number,
                page.total_pages,
                if page.has_next() {
                    format!(" (next: --page {})", page.number + 1)
                } else {
                    String::new()
                }
            );
        }
        UniversityCommand::Show { id } => {
            let view = ShortlistView::load(api).await?;
            let item = view.get(&id).ok_or_else(|| {
                GradpathError::Session(format!("{} is not on your shortlist", id))
            })?;
            if ctx.json {
                return print_json(item);
            }
            print_detail(item);
        }
        UniversityCommand::Add {
            name,
            country,
            domain,
            web_page,
            category,
        } => {
            let mut view = ShortlistView::load(api).await?;
            if view.contains(&name, &country) {
                println!("{} is already on your shortlist.", name.bold());
                return Ok(());
            }
            let entry = ShortlistCreate {
                name,
                country,
                domain,
                web_page,
                category,
                ..Default::default()
            };
            let item = view.add(api, &entry).await?;
            if ctx.json {
                return print_json(&item);
            }
            println!("{} {} ({})", "Shortlisted".green(), item.name.bold(), item.id.dimmed());
        }
        UniversityCommand::Remove { id } => {
            let mut view = ShortlistView::new(Vec::new());
            view.remove(api, &id).await?;
            if !ctx.json {
                println!("{} {}", "Removed".green(), id);
            }
        }
        UniversityCommand::Lock { id } => {
            let mut view = ShortlistView::load(api).await?;
            match view.set_lock(api, &id, true).await? {
                LockOutcome::Applied(status) => report_lock(ctx, &id, status.locked)?,
                LockOutcome::NeedsConfirmation(_) => {
                    return Err(GradpathError::Session(
                        "lock unexpectedly asked for confirmation".to_string(),
                    )
                    .into());
                }
            }
        }
        UniversityCommand::Unlock { id, yes } => {
            let mut view = ShortlistView::load(api).await?;
            match view.set_lock(api, &id, false).await? {
                LockOutcome::Applied(status) => report_lock(ctx, &id, status.locked)?,
                LockOutcome::NeedsConfirmation(pending) => {
                    let proceed = yes
                        || confirm(&format!(
                            "{} Unlocking {} removes its application guidance. Continue?",
                            "Warning:".yellow().bold(),
                            pending.name.bold()
                        ))?;
                    if proceed {
                        if let Some(status) = view.confirm_unlock(api).await? {
                            report_lock(ctx, &id, status.locked)?;
                        }
                    } else {
                        view.cancel_unlock();
                        println!("Unlock cancelled.");
                    }
                }
            }
        }
        UniversityCommand::Recommendations => {
            let recs = search::recommendations(api).await?;
            if ctx.json {
                return print_json(&recs);
            }
            print_category("Dream", &recs.dream);
            print_category("Target", &recs.target);
            print_category("Safe", &recs.safe);
        }
    }

    Ok(())
}

fn report_lock(ctx: &Context, id: &str, locked: bool) -> Result<()> {
    if ctx.json {
        return print_json(&serde_json::json!({ "id": id, "locked": locked }));
    }
    if locked {
        println!("{} {}", "Locked".green(), id);
        println!("Application guidance: {}", "gradpath applications".cyan());
    } else {
        println!("{} {}", "Unlocked".green(), id);
    }
    Ok(())
}

/// Label/value pairs for the detail view; missing values show as `-`
fn detail_rows(item: &ShortlistItem) -> Vec<(&'static str, String)> {
    vec![
        ("Country", item.country.clone()),
        ("Category", or_dash(item.category.as_deref()).to_string()),
        ("Acceptance", or_dash(item.acceptance_chance.as_deref()).to_string()),
        ("Cost", or_dash(item.cost_level.as_deref()).to_string()),
        ("Domain", or_dash(item.domain.as_deref()).to_string()),
        ("Website", or_dash(item.web_page.as_deref()).to_string()),
        ("Why it fits", or_dash(item.fit_reason.as_deref()).to_string()),
        ("Risks", or_dash(item.risks.as_deref()).to_string()),
        ("Locked", if item.locked { "yes" } else { "no" }.to_string()),
    ]
}

fn print_detail(item: &ShortlistItem) {
    println!("{} {}", item.name.bold(), item.id.dimmed());
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    for (label, value) in detail_rows(item) {
        table.add_row(row![label.bold(), value]);
    }
    table.printstd();

    if item.locked {
        println!(
            "Guidance: {}   Unlock: {}",
            "gradpath applications".cyan(),
            format!("gradpath universities unlock {}", item.id).cyan()
        );
    } else {
        println!(
            "Lock: {}   Remove: {}",
            format!("gradpath universities lock {}", item.id).cyan(),
            format!("gradpath universities remove {}", item.id).cyan()
        );
    }
}

fn print_hits(hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("{}", "No universities found.".yellow());
        return;
    }
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
    table.add_row(row!["Name".bold(), "Country".bold(), "Website".bold(), "".bold()]);
    for hit in hits {
        let u = &hit.university;
        table.add_row(row![
            u.name,
            u.country,
            or_dash(u.web_page.as_deref()),
            if hit.shortlisted {
                "shortlisted".green().to_string()
            } else {
                String::new()
            }
        ]);
    }
    table.printstd();
}

fn print_shortlist(items: &[ShortlistItem]) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
    table.add_row(row![
        "ID".bold(),
        "Name".bold(),
        "Country".bold(),
        "Category".bold(),
        "Cost".bold(),
        "Acceptance".bold(),
        "Locked".bold()
    ]);
    for item in items {
        table.add_row(row![
            item.id.cyan(),
            item.name,
            item.country,
            or_dash(item.category.as_deref()),
            or_dash(item.cost_level.as_deref()),
            or_dash(item.acceptance_chance.as_deref()),
            if item.locked { "yes" } else { "" }
        ]);
    }
    table.printstd();
}

fn print_category(label: &str, universities: &[University]) {
    println!("\n{}", label.bold());
    if universities.is_empty() {
        println!("  {}", "none".dimmed());
        return;
    }
    for u in universities {
        println!("  {} ({})", u.name, u.country);
        if let Some(reason) = u.fit_reason.as_deref().filter(|r| !r.is_empty()) {
            println!("    {}", reason.dimmed());
        }
    }
}
