//! The structured content document persisted per module.
//!
//! `{ "sections": [ { "type": "heading", "level": 2, "text": "Wise Mind" }, ... ] }`
//!
//! Sections are a closed sum type; reading JSON drops entries whose `type` is not one of
//! the six kinds below and fills every other missing field from [`super::defaults`].

use super::defaults;
use super::fields::Fields;
use serde::Serialize;
use serde_json::Value;

/// Semantic type of a callout block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutKind {
    #[default]
    Info,
    Warning,
    Success,
    Error,
}

impl CalloutKind {
    pub const ALL: [CalloutKind; 4] = [
        CalloutKind::Info,
        CalloutKind::Warning,
        CalloutKind::Success,
        CalloutKind::Error,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "info" => Some(CalloutKind::Info),
            "warning" => Some(CalloutKind::Warning),
            "success" => Some(CalloutKind::Success),
            "error" => Some(CalloutKind::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CalloutKind::Info => "info",
            CalloutKind::Warning => "warning",
            CalloutKind::Success => "success",
            CalloutKind::Error => "error",
        }
    }
}

/// Kind of interactive cue an activity block stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    #[default]
    ReflectionPrompt,
    JournalEntry,
    PracticeExercise,
    QuizQuestion,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 4] = [
        ActivityKind::ReflectionPrompt,
        ActivityKind::JournalEntry,
        ActivityKind::PracticeExercise,
        ActivityKind::QuizQuestion,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "reflection_prompt" => Some(ActivityKind::ReflectionPrompt),
            "journal_entry" => Some(ActivityKind::JournalEntry),
            "practice_exercise" => Some(ActivityKind::PracticeExercise),
            "quiz_question" => Some(ActivityKind::QuizQuestion),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::ReflectionPrompt => "reflection_prompt",
            ActivityKind::JournalEntry => "journal_entry",
            ActivityKind::PracticeExercise => "practice_exercise",
            ActivityKind::QuizQuestion => "quiz_question",
        }
    }

    /// Display title shown above the prompt.
    pub fn title(&self) -> &'static str {
        match self {
            ActivityKind::ReflectionPrompt => "Reflection Prompt",
            ActivityKind::JournalEntry => "Journal Entry",
            ActivityKind::PracticeExercise => "Practice Exercise",
            ActivityKind::QuizQuestion => "Quiz Question",
        }
    }
}

/// One typed block of structured course content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Section {
    Heading {
        level: u8,
        text: String,
    },
    Paragraph {
        text: String,
    },
    BulletList {
        items: Vec<String>,
    },
    Image {
        src: String,
        alt: String,
        width: u32,
        height: u32,
    },
    Callout {
        callout_type: CalloutKind,
        title: String,
        text: String,
    },
    Activity {
        activity_type: ActivityKind,
        prompt: String,
    },
}

impl Section {
    /// The `type` discriminator as written in JSON.
    pub fn type_name(&self) -> &'static str {
        match self {
            Section::Heading { .. } => "heading",
            Section::Paragraph { .. } => "paragraph",
            Section::BulletList { .. } => "bulletList",
            Section::Image { .. } => "image",
            Section::Callout { .. } => "callout",
            Section::Activity { .. } => "activity",
        }
    }

    /// Reads a section from persisted JSON; unknown or missing `type` yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let fields = Fields::of_value(value);
        let section = match fields.str("type")? {
            "heading" => Section::Heading {
                level: defaults::heading_level(&fields),
                text: fields.string("text"),
            },
            "paragraph" => Section::Paragraph {
                text: fields.string("text"),
            },
            "bulletList" => Section::BulletList {
                items: fields.strings("items"),
            },
            "image" => Section::Image {
                src: fields.string("src"),
                alt: fields.string("alt"),
                width: defaults::image_width(&fields),
                height: defaults::image_height(&fields),
            },
            "callout" => Section::Callout {
                callout_type: defaults::callout_kind(&fields),
                title: fields.string("title"),
                text: fields.string("text"),
            },
            "activity" => Section::Activity {
                activity_type: defaults::activity_kind(&fields),
                prompt: fields.string("prompt"),
            },
            _ => return None,
        };
        Some(section)
    }

    pub fn to_value(&self) -> Value {
        super::to_json(self)
    }
}

/// An ordered list of sections, rendered top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructuredDocument {
    pub sections: Vec<Section>,
}

impl StructuredDocument {
    pub fn new(sections: Vec<Section>) -> Self {
        StructuredDocument { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Reads `{ sections: [...] }`; anything else reads as an empty document.
    pub fn from_value(value: &Value) -> Self {
        let sections = Fields::of_value(value)
            .array("sections")
            .iter()
            .filter_map(Section::from_value)
            .collect();
        StructuredDocument { sections }
    }

    pub fn to_value(&self) -> Value {
        super::to_json(self)
    }
}
