//! Application guidance command

use colored::Colorize;

use super::{print_json, Context};
use crate::error::{GradpathError, Result};
use crate::views::guidance::{message_for, GuidanceView};

pub async fn run_applications(ctx: &Context, university: Option<String>) -> Result<()> {
    ctx.authenticated().await?;

    let mut view = match GuidanceView::load(ctx.api()).await {
        Ok(view) => view,
        Err(e) => {
            eprintln!("{}", message_for(&e).yellow());
            eprintln!(
                "Lock one with {}",
                "gradpath universities lock <id>".cyan()
            );
            return Err(e);
        }
    };

    if let Some(id) = university.as_deref() {
        if !view.select(id) {
            return Err(GradpathError::Session(format!("{} is not a locked university", id)).into());
        }
    }

    if ctx.json {
        return print_json(view.guidance());
    }

    println!("{}", "Locked universities".bold());
    if view.locked_universities().is_empty() {
        println!("  {}", "none".dimmed());
    }
    let selected_id = view.selected().map(|u| u.id.clone());
    for u in view.locked_universities() {
        let marker = if selected_id.as_deref() == Some(u.id.as_str()) {
            ">".cyan().bold()
        } else {
            " ".normal()
        };
        println!("{} {} ({}) {}", marker, u.name, u.country, u.id.dimmed());
    }

    let guidance = view.guidance();
    println!("\n{}", "Required documents".bold());
    for doc in &guidance.required_documents {
        println!("  - {}", doc);
    }

    println!("\n{}", "Timeline".bold());
    for (i, step) in guidance.timeline.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    if let Some(selected) = view.selected() {
        println!("\n{} {}", "To-dos for".bold(), selected.name.bold());
        let todos = view.selected_todos();
        if todos.is_empty() {
            println!("  {}", "none".dimmed());
        }
        for todo in todos {
            let mark = if todo.completed { "[x]" } else { "[ ]" };
            println!("  {} {} {}", mark, todo.title, todo.id.dimmed());
        }
    }

    Ok(())
}
