//! Counsellor chat: one-shot, history, or an interactive session
//!
//! The interactive session understands a few slash commands:
//!
//! - `/add <suggestion id>` shortlists a university the counsellor proposed
//! - `/suggestions` lists proposals from the whole conversation
//! - `/history` reprints the conversation
//! - `/exit` (or Ctrl-D) leaves

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::{print_json, Context};
use crate::api::types::ChatMessage;
use crate::error::{GradpathError, Result};
use crate::views::chat::{suggestions, ChatSession, Suggestion};
use crate::views::markdown::render_terminal;
use crate::views::ShortlistView;

/// What the user typed at the chat prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum ChatInput<'a> {
    Message(&'a str),
    Add(&'a str),
    Suggestions,
    History,
    Help,
    Exit,
    Empty,
}

fn parse_input(line: &str) -> ChatInput<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ChatInput::Empty;
    }
    match trimmed.split_once(char::is_whitespace) {
        Some(("/add", id)) => ChatInput::Add(id.trim()),
        _ => match trimmed {
            "/suggestions" => ChatInput::Suggestions,
            "/history" => ChatInput::History,
            "/help" => ChatInput::Help,
            "/exit" | "/quit" => ChatInput::Exit,
            _ => ChatInput::Message(trimmed),
        },
    }
}

pub async fn run_chat(ctx: &Context, message: Option<String>, history: bool) -> Result<()> {
    ctx.authenticated().await?;
    let api = ctx.api();
    let mut session = ChatSession::load(api).await;

    if history {
        if ctx.json {
            return print_json(session.history());
        }
        print_history(session.history());
        return Ok(());
    }

    if let Some(message) = message {
        if !session.send(api, &message).await? {
            return Err(GradpathError::Session("message is empty".to_string()).into());
        }
        if ctx.json {
            return print_json(&session.last_reply());
        }
        if let Some(reply) = session.last_reply() {
            print_message(reply);
        }
        return Ok(());
    }

    run_repl(ctx, &mut session).await
}

async fn run_repl(ctx: &Context, session: &mut ChatSession) -> Result<()> {
    let api = ctx.api();
    let mut rl = DefaultEditor::new()?;

    println!("{}", "AI Counsellor".bold());
    println!(
        "{}",
        "Ask about countries, universities or your applications. /help for commands.".dimmed()
    );
    if let Some(last) = session.history().last() {
        println!();
        print_message(last);
    }

    loop {
        let line = match rl.readline(&format!("{} ", "you>".green().bold())) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        match parse_input(&line) {
            ChatInput::Empty => continue,
            ChatInput::Exit => break,
            ChatInput::Help => print_help(),
            ChatInput::History => print_history(session.history()),
            ChatInput::Suggestions => print_suggestions(&session.all_suggestions()),
            ChatInput::Add(id) => {
                let found = session.all_suggestions().into_iter().find(|s| s.id == id);
                match found {
                    Some(suggestion) => {
                        if let Err(e) = add_suggestion(ctx, &suggestion).await {
                            eprintln!("{}", e.to_string().red());
                        }
                    }
                    None => eprintln!("{}", format!("No suggestion {}", id).red()),
                }
            }
            ChatInput::Message(text) => {
                rl.add_history_entry(text)?;
                println!("{}", "Thinking...".dimmed());
                match session.send(api, text).await {
                    Ok(_) => {
                        if let Some(reply) = session.last_reply() {
                            print_message(reply);
                        }
                    }
                    Err(e) => eprintln!("{}", e.to_string().red()),
                }
            }
        }
    }

    Ok(())
}

async fn add_suggestion(ctx: &Context, suggestion: &Suggestion) -> Result<()> {
    let entry = suggestion.to_shortlist_create()?;
    let mut shortlist = ShortlistView::load(ctx.api()).await?;
    if shortlist.contains(&entry.name, &entry.country) {
        println!("{} is already on your shortlist.", entry.name.bold());
        return Ok(());
    }
    let item = shortlist.add(ctx.api(), &entry).await?;
    println!("{} {} ({})", "Shortlisted".green(), item.name.bold(), item.id.dimmed());
    Ok(())
}

fn print_help() {
    println!("  /add <id>       shortlist a suggested university");
    println!("  /suggestions    list suggested universities");
    println!("  /history        show the conversation");
    println!("  /exit           leave");
}

fn print_history(history: &[ChatMessage]) {
    if history.is_empty() {
        println!("{}", "No messages yet.".dimmed());
        return;
    }
    for message in history {
        print_message(message);
    }
}

fn print_message(message: &ChatMessage) {
    if message.role == "user" {
        println!("{} {}", "you>".green().bold(), message.content);
        return;
    }
    println!("{}", "counsellor>".blue().bold());
    println!("{}", render_terminal(&message.content));
    let found = suggestions(message);
    if !found.is_empty() {
        print_suggestions(&found);
    }
    println!();
}

fn print_suggestions(found: &[Suggestion]) {
    if found.is_empty() {
        println!("{}", "No suggestions yet.".dimmed());
        return;
    }
    println!("{}", "Suggested universities:".bold());
    for s in found {
        println!(
            "  {} {} ({}) {}",
            s.id.cyan(),
            s.name.as_deref().unwrap_or("?"),
            s.country.as_deref().unwrap_or("?"),
            s.category.as_deref().unwrap_or("").dimmed()
        );
    }
    println!("{}", "Use /add <id> to shortlist one.".dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("   "), ChatInput::Empty);
        assert_eq!(parse_input("/exit"), ChatInput::Exit);
        assert_eq!(parse_input("/add  m3-1 "), ChatInput::Add("m3-1"));
        assert_eq!(parse_input("/history"), ChatInput::History);
        assert_eq!(
            parse_input("  Which universities in Canada?  "),
            ChatInput::Message("Which universities in Canada?")
        );
    }
}
