//! Profile commands

use colored::Colorize;
use prettytable::{row, Table};

use super::{or_dash, print_json, Context};
use crate::api::types::{Exam, Profile, ProfileUpdate};
use crate::cli::{ProfileArgs, ProfileCommand};
use crate::error::{GradpathError, Result};

pub async fn handle_profile(ctx: &Context, command: ProfileCommand) -> Result<()> {
    ctx.authenticated().await?;

    match command {
        ProfileCommand::Show => {
            let profile = ctx.api().profile().get().await?;
            if ctx.json {
                return print_json(&profile);
            }
            print_profile(&profile);
        }
        ProfileCommand::Update(args) => {
            let update = to_update(args)?;
            if update.is_empty() {
                return Err(GradpathError::Config(
                    "nothing to update; pass at least one field (see --help)".to_string(),
                )
                .into());
            }
            let profile = ctx.api().profile().update(&update).await?;
            if ctx.json {
                return print_json(&profile);
            }
            println!("{}", "Profile updated.".green());
            print_profile(&profile);
        }
        ProfileCommand::Complete => {
            let status = ctx.api().profile().complete().await?;
            if ctx.json {
                return print_json(&status);
            }
            if status.onboarding_complete {
                println!("{}", "Onboarding complete.".green());
                println!("Next: {}", "gradpath dashboard".cyan());
            } else {
                println!("{}", "Onboarding is not complete yet.".yellow());
            }
        }
    }

    Ok(())
}

/// Builds a partial update from command-line flags
///
/// # Errors
///
/// Returns a configuration error for an `--exam` value that is not
/// `NAME=STATUS`
pub(crate) fn to_update(args: ProfileArgs) -> Result<ProfileUpdate> {
    let exams = if args.exams.is_empty() {
        None
    } else {
        Some(
            args.exams
                .iter()
                .map(|raw| parse_exam(raw))
                .collect::<Result<Vec<_>>>()?,
        )
    };

    Ok(ProfileUpdate {
        current_education_level: args.education_level,
        degree_major: args.degree_major,
        graduation_year: args.graduation_year,
        gpa: args.gpa,
        intended_degree: args.intended_degree,
        field_of_study: args.field_of_study,
        target_intake_year: args.intake_year,
        preferred_countries: args.countries,
        budget_min: args.budget_min,
        budget_max: args.budget_max,
        funding_plan: args.funding_plan,
        exams,
        sop_status: args.sop_status,
    })
}

fn parse_exam(raw: &str) -> Result<Exam> {
    match raw.split_once('=') {
        Some((name, status)) if !name.trim().is_empty() && !status.trim().is_empty() => Ok(Exam {
            name: name.trim().to_string(),
            status: status.trim().to_string(),
        }),
        _ => Err(GradpathError::Config(format!(
            "Invalid --exam value {:?}; expected NAME=STATUS",
            raw
        ))
        .into()),
    }
}

fn print_profile(profile: &Profile) {
    let year = |y: Option<i32>| y.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string());
    let budget = match (profile.budget_min, profile.budget_max) {
        (Some(min), Some(max)) => format!("{} - {}", min, max),
        (Some(min), None) => format!("from {}", min),
        (None, Some(max)) => format!("up to {}", max),
        (None, None) => "-".to_string(),
    };
    let countries = profile
        .preferred_countries
        .as_ref()
        .filter(|c| !c.is_empty())
        .map(|c| c.join(", "))
        .unwrap_or_else(|| "-".to_string());
    let exams = profile
        .exams
        .as_ref()
        .filter(|e| !e.is_empty())
        .map(|e| {
            e.iter()
                .map(|exam| format!("{} ({})", exam.name, exam.status))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_else(|| "-".to_string());

    let mut table = Table::new();
    table.add_row(row![
        "Onboarding",
        if profile.onboarding_complete {
            "complete"
        } else {
            "in progress"
        }
    ]);
    table.add_row(row!["Education", or_dash(profile.current_education_level.as_deref())]);
    table.add_row(row!["Major", or_dash(profile.degree_major.as_deref())]);
    table.add_row(row!["Graduation", year(profile.graduation_year)]);
    table.add_row(row!["GPA", or_dash(profile.gpa.as_deref())]);
    table.add_row(row!["Intended degree", or_dash(profile.intended_degree.as_deref())]);
    table.add_row(row!["Field", or_dash(profile.field_of_study.as_deref())]);
    table.add_row(row!["Target intake", year(profile.target_intake_year)]);
    table.add_row(row!["Countries", countries]);
    table.add_row(row!["Budget", budget]);
    table.add_row(row!["Funding", or_dash(profile.funding_plan.as_deref())]);
    table.add_row(row!["Exams", exams]);
    table.add_row(row!["SOP", or_dash(profile.sop_status.as_deref())]);
    table.printstd();
}
