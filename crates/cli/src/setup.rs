//! `configure` command - interactive course setup.
//!
//! Picks a grading-platform course, builds its canonical roster (from a
//! CSV export or by cross-referencing forum membership), and saves it
//! under a short identifier for `extend` to use.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use gradekit_config::{CourseConfig, Settings};
use gradekit_platform::credentials::forum_credentials;
use gradekit_platform::forum::ForumClient;
use gradekit_platform::grading::GradingClient;
use gradekit_roster::builder::{from_forum_export, from_forum_membership};
use gradekit_roster::{CanonicalRoster, PromptProvider};

use crate::exit_codes::EXIT_PLATFORM;
use crate::CliError;

pub fn cmd_configure<G: GradingClient, F: ForumClient>(
    grading: &G,
    forum: &mut F,
    settings: &mut Settings,
    settings_path: &Path,
    prompt: &mut dyn PromptProvider,
) -> Result<(), CliError> {
    let courses = grading.list_courses().map_err(CliError::platform)?;
    if courses.is_empty() {
        return Err(CliError {
            code: EXIT_PLATFORM,
            message: "no courses visible on the grading platform".into(),
            hint: None,
        });
    }

    let options: Vec<String> = courses
        .iter()
        .map(|c| format!("{} ({})", c.name, c.term))
        .collect();
    let ix = prompt.select_from_list("Select a course", &options)?;
    let chosen = &courses[ix];

    let roster = if prompt.ask_yes_no("Load the roster from a CSV export?")? {
        roster_from_csv(prompt)?
    } else {
        roster_from_forum(grading, forum, &chosen.id, prompt)?
    };
    if roster.is_empty() {
        eprintln!("warning: the roster is empty; every lookup will miss");
    }

    let identifier = loop {
        let ident = prompt.ask_line("Short identifier for this course (no spaces)")?;
        if ident.is_empty() || ident.contains(char::is_whitespace) {
            eprintln!("identifier must be non-empty with no spaces");
            continue;
        }
        if CourseConfig::path_for(settings, &ident).exists()
            && !prompt.ask_yes_no(&format!("'{ident}' already exists, overwrite?"))?
        {
            continue;
        }
        break ident;
    };

    let config = CourseConfig { gradescope_id: chosen.id.clone(), roster };
    config.save(settings, &identifier).map_err(CliError::config)?;

    let outcome = settings.register_course(&identifier);
    settings.save_to(settings_path).map_err(CliError::config)?;

    eprintln!("Saved course '{identifier}' ({} students)", config.roster.len());
    if outcome.promoted_default {
        eprintln!("'{identifier}' is now the default course");
    }
    Ok(())
}

/// Re-prompts until a readable file is given, then parses it as a
/// three-column forum export (name, email, role).
fn roster_from_csv(prompt: &mut dyn PromptProvider) -> Result<CanonicalRoster, CliError> {
    let contents = loop {
        let path = prompt.ask_line("Path to roster CSV export")?;
        match fs::read_to_string(Path::new(&path)) {
            Ok(contents) => break contents,
            Err(e) => eprintln!("cannot read {path}: {e}"),
        }
    };
    from_forum_export(&contents).map_err(|e| CliError::io(e.to_string()))
}

/// Logs into the forum, picks the matching TA course, and keeps only the
/// students whose email the grading platform also knows.
fn roster_from_forum<G: GradingClient, F: ForumClient>(
    grading: &G,
    forum: &mut F,
    grading_course_id: &str,
    prompt: &mut dyn PromptProvider,
) -> Result<CanonicalRoster, CliError> {
    let credentials = forum_credentials().map_err(CliError::platform)?;
    forum.login(&credentials).map_err(CliError::platform)?;

    let ta_courses = forum.ta_courses().map_err(CliError::platform)?;
    if ta_courses.is_empty() {
        return Err(CliError {
            code: EXIT_PLATFORM,
            message: "no TA courses on the forum".into(),
            hint: None,
        });
    }

    let options: Vec<String> = ta_courses
        .iter()
        .map(|c| format!("{} ({})", c.number, c.term))
        .collect();
    let ix = prompt.select_from_list("Select the matching forum course", &options)?;

    let users = forum
        .course_users(&ta_courses[ix].id)
        .map_err(CliError::platform)?;
    let valid: HashSet<String> = grading
        .course_roster(grading_course_id)
        .map_err(CliError::platform)?
        .into_iter()
        .map(|row| row.email)
        .collect();

    let outcome = from_forum_membership(&users, &valid);
    for name in &outcome.unmatched {
        eprintln!("warning: no grading email found for '{name}'");
    }
    Ok(outcome.roster)
}
