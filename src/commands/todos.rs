//! To-do commands

use colored::Colorize;
use prettytable::{format, row, Table};

use super::{or_dash, print_json, Context};
use crate::api::types::TodoCreate;
use crate::cli::TodoCommand;
use crate::error::Result;
use crate::views::TodoBoard;

pub async fn handle_todos(ctx: &Context, command: TodoCommand) -> Result<()> {
    ctx.authenticated().await?;
    let api = ctx.api();

    let mut board = TodoBoard::load(api).await?;

    match command {
        TodoCommand::List => {}
        TodoCommand::Add {
            title,
            description,
            category,
            shortlist,
        } => {
            let todo = TodoCreate {
                title,
                description,
                category,
                shortlist_id: shortlist,
            };
            let created = board.create(api, &todo).await?;
            tracing::info!(id = %created.id, "Created todo");
        }
        TodoCommand::Done { id } => board.set_completed(api, &id, true).await?,
        TodoCommand::Undone { id } => board.set_completed(api, &id, false).await?,
        TodoCommand::Delete { id } => board.delete(api, &id).await?,
    }

    if ctx.json {
        return print_json(board.todos());
    }
    print_board(&board);
    Ok(())
}

fn print_board(board: &TodoBoard) {
    if board.todos().is_empty() {
        println!("{}", "Nothing to do.".green());
        return;
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);
    table.add_row(row![
        "".bold(),
        "ID".bold(),
        "Title".bold(),
        "Category".bold(),
        "University".bold()
    ]);
    for todo in board.todos() {
        table.add_row(row![
            if todo.completed { "[x]" } else { "[ ]" },
            todo.id.cyan(),
            todo.title,
            or_dash(todo.category.as_deref()),
            or_dash(todo.shortlist_id.as_deref())
        ]);
    }
    table.printstd();
    println!(
        "{} of {} done",
        board.completed_count(),
        board.todos().len()
    );
}
