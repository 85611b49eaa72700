//! HTML rendering of module content
//!
//! Output is one element per line. Every element carries a `dew-*` class; the standalone
//! page embeds `css/baseline.css` to style them.

use super::HtmlOptions;
use crate::ir::containers::{AnswerType, InfoBox, ModuleContent, Question, QuestionSet, TheoryContent};
use crate::ir::structured::{Section, StructuredDocument};
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Render module content as an HTML fragment, or a full page when `options.standalone` is set
pub fn render_html(content: &ModuleContent, options: &HtmlOptions) -> String {
    let mut body = String::new();
    match content {
        ModuleContent::Theory(theory) => render_theory(&mut body, theory),
        ModuleContent::Questions(set) => render_questions(&mut body, set, options),
        ModuleContent::Sections(doc) => {
            body.push_str("<div class=\"dew-content\">\n");
            render_sections(&mut body, doc);
            body.push_str("</div>\n");
        }
        ModuleContent::Empty => {
            body.push_str("<div class=\"dew-empty\">No content available</div>\n");
        }
    }

    if options.standalone {
        wrap_in_document(&body, &options.title)
    } else {
        body
    }
}

fn render_theory(out: &mut String, theory: &TheoryContent) {
    out.push_str("<div class=\"dew-theory\">\n");
    for (index, info_box) in theory.info_boxes.iter().enumerate() {
        render_info_box(out, index + 1, info_box);
    }
    out.push_str("</div>\n");
}

fn render_info_box(out: &mut String, number: usize, info_box: &InfoBox) {
    out.push_str("<div class=\"dew-info-box\">\n");
    out.push_str(&format!(
        "<div class=\"dew-info-box-label\">Info Box #{number}</div>\n"
    ));
    if info_box.content.is_empty() {
        out.push_str("<div class=\"dew-empty\">No content in this box</div>\n");
    } else {
        render_sections(out, &info_box.content);
    }
    out.push_str("</div>\n");
}

fn render_questions(out: &mut String, set: &QuestionSet, options: &HtmlOptions) {
    out.push_str("<div class=\"dew-questions\">\n");
    for (index, question) in set.questions.iter().enumerate() {
        render_question(out, index + 1, question, options);
    }
    out.push_str("</div>\n");
}

fn render_question(out: &mut String, number: usize, question: &Question, options: &HtmlOptions) {
    out.push_str("<div class=\"dew-question\">\n");
    out.push_str(&format!(
        "<div class=\"dew-question-label\">Question #{number}</div>\n"
    ));
    let text = if question.text.is_empty() {
        "No question text"
    } else {
        question.text.as_str()
    };
    out.push_str(&format!(
        "<div class=\"dew-question-text\">{}</div>\n",
        encode_text(text)
    ));

    if question.answer_type == AnswerType::Mcq && !question.options.is_empty() {
        out.push_str("<div class=\"dew-options-label\">Options:</div>\n");
        out.push_str("<ul class=\"dew-options\">\n");
        for option in &question.options {
            out.push_str(&format!("<li>{}</li>\n", encode_text(option)));
        }
        out.push_str("</ul>\n");
    }

    if options.show_correct_answers && !question.correct_answer.is_empty() {
        out.push_str(&format!(
            "<div class=\"dew-correct-answer\">Correct Answer: {}</div>\n",
            encode_text(&question.correct_answer)
        ));
    }
    out.push_str("</div>\n");
}

fn render_sections(out: &mut String, doc: &StructuredDocument) {
    for section in &doc.sections {
        render_section(out, section);
    }
}

fn render_section(out: &mut String, section: &Section) {
    match section {
        Section::Heading { level, text } => {
            let level = (*level).clamp(1, 3);
            out.push_str(&format!(
                "<h{level} class=\"dew-heading\">{}</h{level}>\n",
                encode_text(text)
            ));
        }
        Section::Paragraph { text } => {
            out.push_str(&format!(
                "<p class=\"dew-paragraph\">{}</p>\n",
                encode_text(text)
            ));
        }
        Section::BulletList { items } => {
            out.push_str("<ul class=\"dew-list\">\n");
            for item in items {
                out.push_str(&format!("<li>{}</li>\n", encode_text(item)));
            }
            out.push_str("</ul>\n");
        }
        Section::Image {
            src,
            alt,
            width,
            height,
        } => {
            if src.is_empty() {
                out.push_str("<div class=\"dew-image-placeholder\">Image placeholder</div>\n");
            } else {
                out.push_str(&format!(
                    "<img class=\"dew-image\" src=\"{}\" alt=\"{}\" width=\"{width}\" height=\"{height}\">\n",
                    encode_double_quoted_attribute(src),
                    encode_double_quoted_attribute(alt),
                ));
            }
        }
        Section::Callout {
            callout_type,
            title,
            text,
        } => {
            out.push_str(&format!(
                "<div class=\"dew-callout dew-callout-{}\">\n",
                callout_type.as_str()
            ));
            if !title.is_empty() {
                out.push_str(&format!(
                    "<div class=\"dew-callout-title\">{}</div>\n",
                    encode_text(title)
                ));
            }
            out.push_str(&format!(
                "<div class=\"dew-callout-text\">{}</div>\n",
                encode_text(text)
            ));
            out.push_str("</div>\n");
        }
        Section::Activity {
            activity_type,
            prompt,
        } => {
            out.push_str(&format!(
                "<div class=\"dew-activity dew-activity-{}\">\n",
                activity_type.as_str()
            ));
            out.push_str(&format!(
                "<div class=\"dew-activity-title\">{}</div>\n",
                activity_type.title()
            ));
            if !prompt.is_empty() {
                out.push_str(&format!(
                    "<div class=\"dew-activity-prompt\">{}</div>\n",
                    encode_text(prompt)
                ));
            }
            out.push_str("</div>\n");
        }
    }
}

/// Wrap the fragment in a complete HTML document with the baseline CSS
fn wrap_in_document(body_html: &str, title: &str) -> String {
    let baseline_css = include_str!("../../../css/baseline.css");
    let escaped_title = encode_text(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="dew-babel">
  <title>{escaped_title}</title>
  <style>
{baseline_css}
  </style>
</head>
<body>
{body_html}</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::structured::{ActivityKind, CalloutKind};

    fn sections(sections: Vec<Section>) -> ModuleContent {
        ModuleContent::Sections(StructuredDocument::new(sections))
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(
            render_html(&ModuleContent::Empty, &HtmlOptions::default()),
            "<div class=\"dew-empty\">No content available</div>\n"
        );
    }

    #[test]
    fn test_heading_level_is_clamped() {
        let html = render_html(
            &sections(vec![Section::Heading {
                level: 5,
                text: "Deep".to_string(),
            }]),
            &HtmlOptions::default(),
        );
        assert!(html.contains("<h3 class=\"dew-heading\">Deep</h3>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render_html(
            &sections(vec![
                Section::Paragraph {
                    text: "<script>alert(1)</script> & more".to_string(),
                },
                Section::Image {
                    src: "/a.png\" onerror=\"x".to_string(),
                    alt: String::new(),
                    width: 800,
                    height: 400,
                },
            ]),
            &HtmlOptions::default(),
        );
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; more"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("\" onerror=\""));
    }

    #[test]
    fn test_image_placeholder() {
        let html = render_html(
            &sections(vec![Section::Image {
                src: String::new(),
                alt: "x".to_string(),
                width: 800,
                height: 400,
            }]),
            &HtmlOptions::default(),
        );
        assert!(html.contains("Image placeholder"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_callout_without_title() {
        let html = render_html(
            &sections(vec![Section::Callout {
                callout_type: CalloutKind::Error,
                title: String::new(),
                text: "Stop".to_string(),
            }]),
            &HtmlOptions::default(),
        );
        assert!(html.contains("dew-callout-error"));
        assert!(!html.contains("dew-callout-title"));
    }

    #[test]
    fn test_activity_title() {
        let html = render_html(
            &sections(vec![Section::Activity {
                activity_type: ActivityKind::JournalEntry,
                prompt: String::new(),
            }]),
            &HtmlOptions::default(),
        );
        assert!(html.contains("<div class=\"dew-activity-title\">Journal Entry</div>"));
        assert!(!html.contains("dew-activity-prompt"));
    }

    #[test]
    fn test_standalone_page() {
        let options = HtmlOptions {
            standalone: true,
            title: "Module <1>".to_string(),
            ..HtmlOptions::default()
        };
        let html = render_html(&ModuleContent::Empty, &options);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Module &lt;1&gt;</title>"));
        assert!(html.contains(".dew-callout"));
        assert!(html.ends_with("</html>\n"));
    }
}
