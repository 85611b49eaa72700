//! Property tests for the converters.

use dew_babel::ir::structured::{ActivityKind, CalloutKind};
use dew_babel::{rich_to_structured, structured_to_rich, to_rich, to_structured};
use dew_babel::{Section, StructuredDocument};
use proptest::prelude::*;

fn any_text() -> impl Strategy<Value = String> {
    "[ -~]{0,24}"
}

fn non_blank_text() -> impl Strategy<Value = String> {
    "[ -~]{0,12}[!-~][ -~]{0,12}"
}

fn any_section() -> impl Strategy<Value = Section> {
    prop_oneof![
        (1u8..=3, any_text()).prop_map(|(level, text)| Section::Heading { level, text }),
        non_blank_text().prop_map(|text| Section::Paragraph { text }),
        prop::collection::vec(non_blank_text(), 1..5)
            .prop_map(|items| Section::BulletList { items }),
        (any_text(), any_text(), 1u32..4000, 1u32..4000).prop_map(|(src, alt, width, height)| {
            Section::Image {
                src,
                alt,
                width,
                height,
            }
        }),
        (prop::sample::select(CalloutKind::ALL.to_vec()), any_text(), any_text()).prop_map(
            |(callout_type, title, text)| Section::Callout {
                callout_type,
                title,
                text,
            }
        ),
        (prop::sample::select(ActivityKind::ALL.to_vec()), any_text()).prop_map(
            |(activity_type, prompt)| Section::Activity {
                activity_type,
                prompt,
            }
        ),
    ]
}

fn any_document() -> impl Strategy<Value = StructuredDocument> {
    prop::collection::vec(any_section(), 0..8).prop_map(StructuredDocument::new)
}

proptest! {
    #[test]
    fn prop_structured_round_trips_through_rich(doc in any_document()) {
        let back = rich_to_structured(&structured_to_rich(&doc));
        prop_assert_eq!(back, doc);
    }

    #[test]
    fn prop_json_round_trip(doc in any_document()) {
        let structured = doc.to_value();
        prop_assert_eq!(to_structured(&to_rich(&structured)), structured);
    }

    #[test]
    fn prop_structured_input_passes_through(doc in any_document()) {
        let structured = doc.to_value();
        prop_assert_eq!(to_structured(&structured), structured);
    }

    #[test]
    fn prop_one_node_per_section(doc in any_document()) {
        let rich = structured_to_rich(&doc);
        prop_assert_eq!(rich.children().len(), doc.sections.len());
    }

    #[test]
    fn prop_blank_paragraphs_never_survive(text in "[ \t\n]{0,6}") {
        let rich = serde_json::json!({ "type": "doc", "content": [
            { "type": "paragraph", "content": [{ "type": "text", "text": text }] }
        ] });
        prop_assert_eq!(to_structured(&rich), serde_json::json!({ "sections": [] }));
    }
}
