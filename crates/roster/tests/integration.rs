use std::collections::HashSet;

use gradekit_platform::memory::MemoryGrading;
use gradekit_platform::{ForumUser, GradingClient};
use gradekit_roster::builder::{from_forum_membership, from_grading_export};
use gradekit_roster::resolve::{resolve_one, Resolution};
use gradekit_roster::{
    apply_for_student, match_name, CanonicalRoster, MatchResult, PendingAmbiguity,
    ScriptedPrompt,
};

const GRADING_EXPORT: &str = "\
name,SID,email,role
\"Doe, Jane\",S1,jane@x.edu,Student
\"Doe, Janet\",S2,janet@x.edu,Student
\"Smith, Bob\",S3,bob@x.edu,Student
\"Prof, Pat\",S4,pat@x.edu,Instructor
";

fn course_setup() -> (MemoryGrading, CanonicalRoster) {
    let mut grading = MemoryGrading::new();
    grading.add_course("c1", "CS 101", "Fall 2026");
    grading.add_assignment("c1", "hw4: graphs");
    grading.add_assignment("c1", "hw4 redux");
    grading.add_assignment("c1", "midterm");

    let roster = from_grading_export(GRADING_EXPORT).unwrap();
    (grading, roster)
}

// -------------------------------------------------------------------------
// Full pipeline: build -> match -> resolve -> apply
// -------------------------------------------------------------------------

#[test]
fn exact_and_not_found_end_to_end() {
    let (grading, roster) = course_setup();
    let assignments = grading.list_assignments("c1", "hw4").unwrap();
    assert_eq!(assignments.len(), 2);

    let names = ["bob smith", "nonexistent person"];
    let mut not_found = Vec::new();

    for name in names {
        match match_name(name, &roster) {
            MatchResult::Exact(email) => {
                let outcome = apply_for_student(&assignments, &email, 5);
                assert_eq!(outcome.applied, 2);
            }
            MatchResult::NotFound => not_found.push(name),
            other => panic!("unexpected result for {name}: {other:?}"),
        }
    }

    assert_eq!(not_found, vec!["nonexistent person"]);
    // Only bob's two assignments were touched; nothing for the not-found name.
    let applied = grading.applied();
    assert_eq!(applied.len(), 2);
    assert!(applied.keys().all(|(_, email)| email == "bob@x.edu"));
    assert_eq!(grading.call_count(), 2);
}

#[test]
fn ambiguity_resolved_then_applied() {
    let (grading, roster) = course_setup();
    let assignments = grading.list_assignments("c1", "hw4").unwrap();

    let result = match_name("jane doh", &roster);
    let candidates = match result {
        MatchResult::Ambiguous(c) => c,
        other => panic!("expected Ambiguous, got {other:?}"),
    };

    let pending = PendingAmbiguity { query: "jane doh".into(), candidates };
    let mut prompt = ScriptedPrompt::new();
    prompt.push_selection(0); // best-ranked candidate: jane doe

    match resolve_one(&pending, &roster, &mut prompt).unwrap() {
        Resolution::Bound { name, email } => {
            assert_eq!(name, "jane doe");
            let outcome = apply_for_student(&assignments, &email, 3);
            assert_eq!(outcome.applied, 2);
        }
        Resolution::Skipped => panic!("expected a binding"),
    }

    assert_eq!(
        grading.applied()[&("hw4: graphs".to_string(), "jane@x.edu".to_string())],
        3
    );
}

#[test]
fn skipped_ambiguity_applies_nothing() {
    let (grading, roster) = course_setup();
    let pending = PendingAmbiguity {
        query: "jane doh".into(),
        candidates: vec!["jane doe".into(), "janet doe".into()],
    };
    let mut prompt = ScriptedPrompt::new();
    prompt.push_selection(2); // the none option

    assert_eq!(
        resolve_one(&pending, &roster, &mut prompt).unwrap(),
        Resolution::Skipped
    );
    assert!(grading.applied().is_empty());
}

// -------------------------------------------------------------------------
// Forum membership cross-referencing
// -------------------------------------------------------------------------

#[test]
fn forum_membership_against_grading_emails() {
    let grading_roster = from_grading_export(GRADING_EXPORT).unwrap();
    let valid: HashSet<String> = grading_roster.iter().map(|(_, e)| e.to_string()).collect();

    let students = vec![
        ForumUser {
            name: "Jane Doe".into(),
            role: "student".into(),
            emails: ForumUser::parse_emails("jane@personal.example, jane@x.edu"),
        },
        ForumUser {
            name: "dropped student".into(),
            role: "student".into(),
            emails: ForumUser::parse_emails("gone@elsewhere.edu"),
        },
    ];

    let outcome = from_forum_membership(&students, &valid);
    assert_eq!(outcome.roster.lookup("jane doe"), Some("jane@x.edu"));
    assert_eq!(outcome.unmatched, vec!["dropped student"]);

    // The cross-referenced roster matches the same way the export roster does.
    assert!(matches!(
        match_name("Jane Doe", &outcome.roster),
        MatchResult::Exact(email) if email == "jane@x.edu"
    ));
}
