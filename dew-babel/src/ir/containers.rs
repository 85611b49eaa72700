//! Module containers built from structured documents.
//!
//! A module's persisted `content` is one of:
//!
//! | Shape                                  | Module kind | Variant                      |
//! |----------------------------------------|-------------|------------------------------|
//! | `{ infoBoxes: [...], boxesPerPage? }`  | Theory      | [`ModuleContent::Theory`]    |
//! | `{ questions: [...] }`                 | Question    | [`ModuleContent::Questions`] |
//! | `{ sections: [...] }`                  | standalone  | [`ModuleContent::Sections`]  |
//!
//! The keys are checked in that order; content matching none of them is
//! [`ModuleContent::Empty`] and renders as an explicit "no content" state.

use super::defaults;
use super::fields::Fields;
use super::structured::StructuredDocument;
use serde::Serialize;
use serde_json::Value;

/// One structured document grouped under a theory module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InfoBox {
    pub content: StructuredDocument,
}

impl InfoBox {
    pub fn new(content: StructuredDocument) -> Self {
        InfoBox { content }
    }

    pub fn from_value(value: &Value) -> Self {
        let content = Fields::of_value(value)
            .get("content")
            .map(StructuredDocument::from_value)
            .unwrap_or_default();
        InfoBox { content }
    }
}

/// A page of consecutive info boxes, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub page_number: usize,
    pub boxes: Vec<InfoBox>,
}

/// Splits `boxes` into pages of `boxes_per_page` (zero is treated as the default of one).
pub fn paginate(boxes: &[InfoBox], boxes_per_page: usize) -> Vec<Page> {
    let per_page = defaults::boxes_per_page(Some(boxes_per_page));
    boxes
        .chunks(per_page)
        .enumerate()
        .map(|(index, chunk)| Page {
            page_number: index + 1,
            boxes: chunk.to_vec(),
        })
        .collect()
}

/// Content of a theory module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TheoryContent {
    pub info_boxes: Vec<InfoBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boxes_per_page: Option<usize>,
}

impl TheoryContent {
    pub fn new(info_boxes: Vec<InfoBox>) -> Self {
        TheoryContent {
            info_boxes,
            boxes_per_page: None,
        }
    }

    pub fn with_boxes_per_page(mut self, boxes_per_page: usize) -> Self {
        self.boxes_per_page = Some(boxes_per_page);
        self
    }

    /// Boxes per page stored on the module, or `fallback` when it has none.
    pub fn effective_boxes_per_page(&self, fallback: usize) -> usize {
        defaults::boxes_per_page(self.boxes_per_page.or(Some(fallback)))
    }

    pub fn pages(&self, fallback_boxes_per_page: usize) -> Vec<Page> {
        paginate(
            &self.info_boxes,
            self.effective_boxes_per_page(fallback_boxes_per_page),
        )
    }

    pub fn page_count(&self, fallback_boxes_per_page: usize) -> usize {
        self.info_boxes
            .len()
            .div_ceil(self.effective_boxes_per_page(fallback_boxes_per_page))
    }

    fn from_fields(fields: &Fields<'_>) -> Self {
        TheoryContent {
            info_boxes: fields
                .array("infoBoxes")
                .iter()
                .map(InfoBox::from_value)
                .collect(),
            boxes_per_page: fields
                .positive_int("boxesPerPage")
                .and_then(|n| usize::try_from(n).ok()),
        }
    }
}

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnswerType {
    #[default]
    Mcq,
    FillInBlank,
}

impl AnswerType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "MCQ" => Some(AnswerType::Mcq),
            "FILL_IN_BLANK" => Some(AnswerType::FillInBlank),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerType::Mcq => "MCQ",
            AnswerType::FillInBlank => "FILL_IN_BLANK",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub text: String,
    pub answer_type: AnswerType,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    pub fn from_value(value: &Value) -> Self {
        let fields = Fields::of_value(value);
        Question {
            text: fields.string("text"),
            answer_type: fields
                .str("answerType")
                .and_then(AnswerType::from_name)
                .unwrap_or_default(),
            options: fields.strings("options"),
            correct_answer: fields.string("correctAnswer"),
        }
    }
}

/// Content of a question module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
}

/// The persisted `content` of any module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ModuleContent {
    Theory(TheoryContent),
    Questions(QuestionSet),
    Sections(StructuredDocument),
    Empty,
}

impl ModuleContent {
    /// Classifies persisted JSON by the first container key present.
    ///
    /// A key only counts when it holds a list; `{ "sections": null }` is empty content.
    pub fn from_value(value: &Value) -> Self {
        let fields = Fields::of_value(value);
        let is_list = |key: &str| fields.get(key).is_some_and(Value::is_array);

        if is_list("infoBoxes") {
            ModuleContent::Theory(TheoryContent::from_fields(&fields))
        } else if is_list("questions") {
            ModuleContent::Questions(QuestionSet {
                questions: fields
                    .array("questions")
                    .iter()
                    .map(Question::from_value)
                    .collect(),
            })
        } else if is_list("sections") {
            ModuleContent::Sections(StructuredDocument::from_value(value))
        } else {
            ModuleContent::Empty
        }
    }

    pub fn to_value(&self) -> Value {
        super::to_json(self)
    }

    /// Short name of the container shape.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ModuleContent::Theory(_) => "theory",
            ModuleContent::Questions(_) => "questions",
            ModuleContent::Sections(_) => "sections",
            ModuleContent::Empty => "empty",
        }
    }
}

impl From<StructuredDocument> for ModuleContent {
    fn from(doc: StructuredDocument) -> Self {
        ModuleContent::Sections(doc)
    }
}

impl From<TheoryContent> for ModuleContent {
    fn from(theory: TheoryContent) -> Self {
        ModuleContent::Theory(theory)
    }
}

impl From<QuestionSet> for ModuleContent {
    fn from(questions: QuestionSet) -> Self {
        ModuleContent::Questions(questions)
    }
}
