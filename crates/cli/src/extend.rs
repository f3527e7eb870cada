//! `extend` command - apply deadline extensions across matching assignments.
//!
//! Pipeline: resolve course and length, load the course roster, filter
//! assignments by title substring, match every supplied name, then apply
//! the cross product. Exact and unique close matches apply immediately;
//! ambiguous names are deferred and resolved interactively at the end,
//! each binding applied as soon as the operator confirms it.

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use gradekit_config::{CourseConfig, Settings};
use gradekit_platform::grading::{AssignmentHandle, GradingClient};
use gradekit_roster::model::ApplyFailure;
use gradekit_roster::resolve::{resolve_one, Resolution};
use gradekit_roster::{
    apply_for_student, match_name, BatchOutcome, MatchResult, PendingAmbiguity, PromptProvider,
};

use crate::CliError;

pub struct ExtendArgs<'a> {
    pub names: &'a [String],
    pub title_filter: &'a str,
    pub days: Option<i64>,
    pub course: Option<&'a str>,
    pub json: bool,
}

/// Machine-readable run report, written to stdout with `--json`.
#[derive(Serialize)]
struct Report<'a> {
    run_at: String,
    course: &'a str,
    title_filter: &'a str,
    days: i64,
    assignments: Vec<String>,
    extended: Vec<ExtendedStudent>,
    applied: usize,
    failures: &'a [ApplyFailure],
    not_found: &'a [String],
    skipped: &'a [String],
}

#[derive(Serialize)]
struct ExtendedStudent {
    name: String,
    email: String,
}

pub fn cmd_extend<G: GradingClient>(
    grading: &G,
    settings: &Settings,
    args: &ExtendArgs,
    prompt: &mut dyn PromptProvider,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if args.names.is_empty() {
        eprintln!("No names supplied, exiting..");
        return Ok(());
    }

    let course = match args.course.or(settings.default_course.as_deref()) {
        Some(c) => c.to_string(),
        None => {
            return Err(CliError::usage("no course given and no default course set")
                .with_hint("pass --id <course> or run `gradekit configure`"))
        }
    };
    let days = args.days.unwrap_or(settings.default_length);

    let config = CourseConfig::load(settings, &course).map_err(CliError::config)?;

    let assignments = grading
        .list_assignments(&config.gradescope_id, args.title_filter)
        .map_err(CliError::platform)?;
    if assignments.is_empty() {
        eprintln!("No assignments match '{}'", args.title_filter);
    } else {
        eprintln!("Extending {} assignment(s):", assignments.len());
        for assignment in &assignments {
            eprintln!("  - {}", assignment.title());
        }
    }

    let mut outcome = BatchOutcome::default();
    let mut extended: Vec<ExtendedStudent> = Vec::new();
    let mut pending: Vec<PendingAmbiguity> = Vec::new();
    let mut not_found: Vec<String> = Vec::new();
    let mut skipped: Vec<String> = Vec::new();

    for query in args.names {
        match match_name(query, &config.roster) {
            MatchResult::Exact(email) => {
                eprintln!("Extending {query} ({email})");
                outcome.merge(apply_for_student(&assignments, &email, days));
                extended.push(ExtendedStudent { name: query.clone(), email });
            }
            MatchResult::UniqueFuzzy { name, email } => {
                eprintln!("Matched '{query}' to '{name}' ({email})");
                outcome.merge(apply_for_student(&assignments, &email, days));
                extended.push(ExtendedStudent { name, email });
            }
            MatchResult::Ambiguous(candidates) => {
                pending.push(PendingAmbiguity { query: query.clone(), candidates });
            }
            MatchResult::NotFound => {
                eprintln!("No roster match for '{query}'");
                not_found.push(query.clone());
            }
        }
    }

    for item in &pending {
        match resolve_one(item, &config.roster, prompt)? {
            Resolution::Bound { name, email } => {
                eprintln!("Extending {name} ({email})");
                outcome.merge(apply_for_student(&assignments, &email, days));
                extended.push(ExtendedStudent { name, email });
            }
            Resolution::Skipped => {
                eprintln!("Skipping '{}'", item.query);
                skipped.push(item.query.clone());
            }
        }
    }

    for failure in &outcome.failures {
        eprintln!(
            "warning: extension for {} on '{}' failed: {}",
            failure.email, failure.assignment, failure.reason
        );
    }
    eprintln!(
        "Done: {} extension(s) of {days} day(s) applied, {} failed, {} unmatched, {} skipped",
        outcome.applied,
        outcome.failures.len(),
        not_found.len(),
        skipped.len()
    );

    if args.json {
        let report = Report {
            run_at: Utc::now().to_rfc3339(),
            course: &course,
            title_filter: args.title_filter,
            days,
            assignments: assignments.iter().map(|a| a.title().to_string()).collect(),
            extended,
            applied: outcome.applied,
            failures: &outcome.failures,
            not_found: &not_found,
            skipped: &skipped,
        };
        serde_json::to_writer_pretty(&mut *out, &report)
            .map_err(|e| CliError::io(e.to_string()))?;
        writeln!(out).map_err(|e| CliError::io(e.to_string()))?;
    }

    // Best-effort: partial failure still exits 0, but a batch where every
    // single call failed is a platform problem.
    if outcome.applied == 0 && !outcome.failures.is_empty() {
        return Err(CliError {
            code: crate::exit_codes::EXIT_PLATFORM,
            message: "every extension call failed".into(),
            hint: None,
        });
    }
    Ok(())
}
