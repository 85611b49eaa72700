//! Rendering tests for the HTML format
//!
//! These tests verify the markup produced for each module shape.

use crate::common::{fixture, fixture_source};
use dew_babel::format::Format;
use dew_babel::formats::html::{render_html, HtmlFormat, HtmlOptions};
use dew_babel::{FormatRegistry, ModuleContent};
use insta::assert_snapshot;
use std::collections::HashMap;

fn render_fixture(name: &str, options: &HtmlOptions) -> String {
    render_html(&ModuleContent::from_value(&fixture(name)), options)
}

#[test]
fn test_question_module() {
    let html = render_fixture("question-module.json", &HtmlOptions::default());
    assert_snapshot!(html, @r#"
<div class="dew-questions">
<div class="dew-question">
<div class="dew-question-label">Question #1</div>
<div class="dew-question-text">Which skill helps in a crisis?</div>
<div class="dew-options-label">Options:</div>
<ul class="dew-options">
<li>TIPP</li>
<li>Check the facts</li>
<li>DEAR MAN</li>
</ul>
<div class="dew-correct-answer">Correct Answer: TIPP</div>
</div>
<div class="dew-question">
<div class="dew-question-label">Question #2</div>
<div class="dew-question-text">Wise Mind is the overlap of reasonable mind and ____ mind.</div>
<div class="dew-correct-answer">Correct Answer: emotion</div>
</div>
</div>
"#);
}

#[test]
fn test_hidden_answers() {
    let options = HtmlOptions {
        show_correct_answers: false,
        ..HtmlOptions::default()
    };
    let html = render_fixture("question-module.json", &options);
    assert!(!html.contains("Correct Answer"));
    assert!(html.contains("Question #2"));
}

#[test]
fn test_theory_module() {
    let html = render_fixture("theory-module.json", &HtmlOptions::default());
    assert_snapshot!(html, @r#"
<div class="dew-theory">
<div class="dew-info-box">
<div class="dew-info-box-label">Info Box #1</div>
<h2 class="dew-heading">What is Wise Mind?</h2>
<p class="dew-paragraph">The overlap of reasonable mind and emotion mind.</p>
</div>
<div class="dew-info-box">
<div class="dew-info-box-label">Info Box #2</div>
<div class="dew-callout dew-callout-success">
<div class="dew-callout-title">Tip</div>
<div class="dew-callout-text">Pause before you act.</div>
</div>
</div>
<div class="dew-info-box">
<div class="dew-info-box-label">Info Box #3</div>
<div class="dew-activity dew-activity-journal_entry">
<div class="dew-activity-title">Journal Entry</div>
<div class="dew-activity-prompt">When did you last act from Wise Mind?</div>
</div>
</div>
</div>
"#);
}

#[test]
fn test_empty_info_box() {
    let content = ModuleContent::from_value(&serde_json::json!({ "infoBoxes": [{}] }));
    let html = render_html(&content, &HtmlOptions::default());
    assert!(html.contains("Info Box #1"));
    assert!(html.contains("<div class=\"dew-empty\">No content in this box</div>"));
}

#[test]
fn test_editor_document_through_registry() {
    let registry = FormatRegistry::default();
    let content = registry
        .parse(&fixture_source("wise-mind.tiptap"), "tiptap")
        .unwrap();
    let html = registry.serialize(&content, "html").unwrap();
    assert_snapshot!(html, @r#"
<div class="dew-content">
<h2 class="dew-heading">Wise Mind</h2>
<ul class="dew-list">
<li>Observe</li>
</ul>
</div>
"#);
}

#[test]
fn test_standalone_option() {
    let mut params = HashMap::new();
    params.insert("standalone".to_string(), "true".to_string());
    params.insert("title".to_string(), "Wise Mind".to_string());

    let content = ModuleContent::from_value(&fixture("theory-module.json"));
    let html = HtmlFormat::default()
        .serialize_with_options(&content, &params)
        .unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Wise Mind</title>"));
    assert!(html.contains("<style>"));
    assert!(html.contains("<div class=\"dew-theory\">"));
}
