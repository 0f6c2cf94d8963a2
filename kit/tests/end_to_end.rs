//! Full traversal of a builder-authored form through the facade: parse the
//! wire JSON, branch on an answer, and submit through the memory sink.

use formflow::prelude::*;
use formflow::{AnswerValue, Form, Page};

const FORM_JSON: &str = r#"{
    "id": "survey-1",
    "title": "Onboarding",
    "pages": [
        {
            "id": "P1",
            "name": "Page 01",
            "layout": ["q1"],
            "conditionalLogic": [
                {
                    "conditions": [{"fieldId": "q1", "value": "yes"}],
                    "passRedirect": "P3",
                    "failRedirect": "P2"
                }
            ]
        },
        {"id": "P2", "name": "Page 02", "layout": ["q2"]},
        {"id": "P3", "name": "Page 03", "layout": []}
    ],
    "questions": [
        {
            "id": "q1",
            "title": "Have you used the product before?",
            "type": "multiple-choice",
            "options": [
                {"id": "yes", "text": "Yes", "isCorrect": false},
                {"id": "no", "text": "No", "isCorrect": false}
            ]
        },
        {"id": "q2", "title": "What would you like to learn?", "type": "textarea"}
    ]
}"#;

fn load_form() -> Form {
    serde_json::from_str(FORM_JSON).expect("fixture parses")
}

#[test]
fn pass_branch_skips_the_middle_page() {
    let mut session = FillSession::new(load_form()).unwrap();
    session.record("q1", "yes");
    assert_eq!(session.advance().unwrap(), Progress::Page("P3".into()));
    assert_eq!(session.advance().unwrap(), Progress::Complete);
}

#[test]
fn fail_and_unanswered_both_visit_every_page() {
    for answer in [Some("no"), None] {
        let mut session = FillSession::new(load_form()).unwrap();
        if let Some(value) = answer {
            session.record("q1", value);
        }
        assert_eq!(session.advance().unwrap(), Progress::Page("P2".into()));
        assert_eq!(session.advance().unwrap(), Progress::Page("P3".into()));
        assert_eq!(session.advance().unwrap(), Progress::Complete);
    }
}

#[tokio::test]
async fn driven_session_submits_through_the_sink() {
    let repo = MemoryRepository::new();
    repo.insert_form(load_form());

    let mut respondent = |page: &Page, _form: &Form| match page.id.as_str() {
        "P1" => vec![("q1".to_string(), AnswerValue::from("no"))],
        "P2" => vec![("q2".to_string(), AnswerValue::from("branching"))],
        _ => Vec::new(),
    };

    let receipt = run_session(&repo, &repo, "survey-1", &mut respondent)
        .await
        .unwrap();
    assert_eq!(receipt.form_id, "survey-1");

    let submissions = repo.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].1.len(), 2);
}

#[test]
fn schematic_matches_the_authored_branches() {
    let form = load_form();
    let schematic = FlowSchematic::from_form(&form);
    assert_eq!(schematic.nodes.len(), 3);
    assert!(validate(&form).is_empty());
}
