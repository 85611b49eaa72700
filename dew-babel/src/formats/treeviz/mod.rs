//! Treeviz formatter for module content
//!
//! An outline of the content with one line per section or container item, used by
//! `dew inspect` to eyeball what the converters produced.
//!
//! Each line is:
//! <prefix><connector> <icon> <label> (label truncated to 30 characters)
//!
//! Example:
//!
//! ⧉ Theory (2 info boxes)
//! ├─ □ Info Box #1
//! │ ├─ § h2 Wise Mind
//! │ └─ ☰ 2 items
//! │   ├─ • Observe
//! │   └─ • Describe
//! └─ □ Info Box #2
//!   └─ ! warning: Heads up

use super::icons::get_icon;
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::containers::{AnswerType, ModuleContent, Question};
use crate::ir::structured::{Section, StructuredDocument};

const MAX_LABEL_CHARS: usize = 30;

/// One outline entry and its children
struct Line {
    icon: &'static str,
    label: String,
    children: Vec<Line>,
}

impl Line {
    fn leaf(icon: &'static str, label: impl Into<String>) -> Self {
        Line {
            icon,
            label: label.into(),
            children: Vec::new(),
        }
    }

    fn with_children(mut self, children: Vec<Line>) -> Self {
        self.children = children;
        self
    }
}

pub fn to_treeviz_str(content: &ModuleContent) -> String {
    let (header, lines) = match content {
        ModuleContent::Theory(theory) => (
            format!("Theory ({})", plural(theory.info_boxes.len(), "info box", "info boxes")),
            theory
                .info_boxes
                .iter()
                .enumerate()
                .map(|(index, info_box)| {
                    Line::leaf(get_icon("infoBox"), format!("Info Box #{}", index + 1))
                        .with_children(section_lines(&info_box.content))
                })
                .collect(),
        ),
        ModuleContent::Questions(set) => (
            format!("Questions ({})", plural(set.questions.len(), "question", "questions")),
            set.questions
                .iter()
                .enumerate()
                .map(|(index, question)| question_line(index + 1, question))
                .collect(),
        ),
        ModuleContent::Sections(doc) => (
            format!("Document ({})", plural(doc.sections.len(), "section", "sections")),
            section_lines(doc),
        ),
        ModuleContent::Empty => ("Empty".to_string(), Vec::new()),
    };

    let mut output = format!("{} {}\n", get_icon("document"), header);
    format_lines(&mut output, &lines, "");
    output
}

fn section_lines(doc: &StructuredDocument) -> Vec<Line> {
    doc.sections.iter().map(section_line).collect()
}

fn section_line(section: &Section) -> Line {
    let icon = get_icon(section.type_name());
    match section {
        Section::Heading { level, text } => Line::leaf(icon, format!("h{level} {text}")),
        Section::Paragraph { text } => Line::leaf(icon, text.as_str()),
        Section::BulletList { items } => {
            Line::leaf(icon, plural(items.len(), "item", "items")).with_children(
                items
                    .iter()
                    .map(|item| Line::leaf(get_icon("listItem"), item.as_str()))
                    .collect(),
            )
        }
        Section::Image {
            src, width, height, ..
        } => Line::leaf(icon, format!("{width}x{height} {src}")),
        Section::Callout {
            callout_type,
            title,
            text,
        } => {
            let shown = if title.is_empty() { text } else { title };
            Line::leaf(icon, format!("{}: {}", callout_type.as_str(), shown))
        }
        Section::Activity {
            activity_type,
            prompt,
        } => Line::leaf(icon, format!("{}: {}", activity_type.title(), prompt)),
    }
}

fn question_line(number: usize, question: &Question) -> Line {
    let mut children = Vec::new();
    if question.answer_type == AnswerType::Mcq {
        children.extend(
            question
                .options
                .iter()
                .map(|option| Line::leaf(get_icon("option"), option.as_str())),
        );
    }
    if !question.correct_answer.is_empty() {
        children.push(Line::leaf(
            get_icon("answer"),
            question.correct_answer.as_str(),
        ));
    }
    Line::leaf(
        get_icon("question"),
        format!("#{number} {} {}", question.answer_type.as_str(), question.text),
    )
    .with_children(children)
}

fn format_lines(output: &mut String, lines: &[Line], prefix: &str) {
    for (index, line) in lines.iter().enumerate() {
        let is_last = index == lines.len() - 1;
        let connector = if is_last { "└─" } else { "├─" };
        output.push_str(&format!(
            "{}{} {} {}\n",
            prefix,
            connector,
            line.icon,
            truncate(&line.label)
        ));
        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        format_lines(output, &line.children, &child_prefix);
    }
}

fn truncate(label: &str) -> String {
    let flat = label.replace(['\n', '\r'], " ");
    if flat.chars().count() <= MAX_LABEL_CHARS {
        flat
    } else {
        let mut cut: String = flat.chars().take(MAX_LABEL_CHARS - 1).collect();
        cut.push('…');
        cut
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Outline of module content with Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, content: &ModuleContent) -> Result<String, FormatError> {
        Ok(to_treeviz_str(content))
    }
}
