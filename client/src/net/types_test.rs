use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_project() -> Project {
    Project {
        title: "Ledger".to_owned(),
        description: "Double-entry bookkeeping".to_owned(),
        tech: vec!["Go".to_owned(), "SQL".to_owned()],
        link: "https://github.com/example/ledger".to_owned(),
        image: None,
        highlights: Vec::new(),
        project_url: None,
    }
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn project_deserializes_full_document() {
    let json = r#"{
        "title": "Ledger",
        "description": "Double-entry bookkeeping",
        "tech": ["Go", "SQL"],
        "link": "https://github.com/example/ledger",
        "image": "img/ledger.png",
        "highlights": ["Fast", "Audited"],
        "projectUrl": "https://ledger.example.com"
    }"#;
    let project: Project = serde_json::from_str(json).unwrap();
    assert_eq!(project.tech, vec!["Go", "SQL"]);
    assert_eq!(project.image.as_deref(), Some("img/ledger.png"));
    assert_eq!(project.highlights, vec!["Fast", "Audited"]);
    assert_eq!(project.project_url.as_deref(), Some("https://ledger.example.com"));
}

#[test]
fn project_missing_optionals_are_absent() {
    let json = r#"{"title":"T","description":"D","link":"https://x"}"#;
    let project: Project = serde_json::from_str(json).unwrap();
    assert!(project.tech.is_empty());
    assert!(project.image.is_none());
    assert!(project.highlights.is_empty());
    assert!(project.project_url.is_none());
}

#[test]
fn project_null_optionals_are_absent() {
    let json = r#"{"title":"T","description":"D","link":"https://x","image":null,"projectUrl":null}"#;
    let project: Project = serde_json::from_str(json).unwrap();
    assert!(project.image.is_none());
    assert!(project.project_url.is_none());
}

#[test]
fn project_serializes_camel_case_url() {
    let mut project = make_project();
    project.project_url = Some("https://live".to_owned());
    let value = serde_json::to_value(&project).unwrap();
    assert_eq!(value["projectUrl"], "https://live");
    assert!(value.get("project_url").is_none());
}

// =============================================================
// Card helpers
// =============================================================

#[test]
fn image_src_falls_back_to_placeholder() {
    let project = make_project();
    assert_eq!(project.image_src(), PLACEHOLDER_IMAGE);
}

#[test]
fn image_src_treats_blank_as_absent() {
    let mut project = make_project();
    project.image = Some("  ".to_owned());
    assert_eq!(project.image_src(), PLACEHOLDER_IMAGE);
}

#[test]
fn image_src_uses_configured_image() {
    let mut project = make_project();
    project.image = Some("img/ledger.png".to_owned());
    assert_eq!(project.image_src(), "img/ledger.png");
}

#[test]
fn live_url_ignores_empty_string() {
    let mut project = make_project();
    project.project_url = Some(String::new());
    assert_eq!(project.live_url(), None);
    project.project_url = Some("https://live".to_owned());
    assert_eq!(project.live_url(), Some("https://live"));
}

#[test]
fn has_all_requires_every_skill() {
    let project = make_project();
    assert!(project.has_all(&["Go"]));
    assert!(project.has_all(&["SQL", "Go"]));
    assert!(!project.has_all(&["Go", "TS"]));
}

#[test]
fn has_all_with_no_skills_is_true() {
    let project = make_project();
    let none: [&str; 0] = [];
    assert!(project.has_all(&none));
}

#[test]
fn tech_attr_is_json_array() {
    let project = make_project();
    assert_eq!(project.tech_attr(), r#"["Go","SQL"]"#);
}
