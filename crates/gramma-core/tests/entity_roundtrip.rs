//! Serde roundtrip and JsonSchema validation tests for all wire types.

use chrono::Utc;
use gramma_core::api::*;
use gramma_core::entities::*;
use gramma_core::enums::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    grammar_result_roundtrip,
    GrammarResult,
    GrammarResult {
        sentence: "Me and him goes to the store.".into(),
        ll1_valid: false,
        dependency_valid: true,
        language_tool_issues: vec![
            "The pronoun 'Me' must be used in the subject position.".into(),
            "Possible agreement error: 'goes'.".into(),
        ],
        is_grammatically_correct: false,
    }
);

roundtrip_and_validate!(
    stats_roundtrip,
    Stats,
    Stats {
        total_checks: 24,
        grammar_score: 71,
        improvement: -10,
        streak: 3,
    }
);

roundtrip_and_validate!(
    chat_message_roundtrip,
    ChatMessage,
    ChatMessage {
        id: "1718000000000".into(),
        role: Role::Assistant,
        content: "Affect is usually a verb; effect is usually a noun.".into(),
        timestamp: Utc::now(),
        kind: Some(MessageKind::GrammarAnalysis),
    }
);

roundtrip_and_validate!(
    chat_message_untyped_roundtrip,
    ChatMessage,
    ChatMessage {
        id: "1718000000001".into(),
        role: Role::User,
        content: "Check this sentence.".into(),
        timestamp: Utc::now(),
        kind: None,
    }
);

roundtrip_and_validate!(chat_session_roundtrip, ChatSession, {
    let mut session = ChatSession::new(Some("Cover letter".into()));
    session.push(ChatMessage::user("Is this too formal?"));
    session.push(ChatMessage::assistant("Slightly. Try contractions."));
    session
});

roundtrip_and_validate!(
    grammar_tip_roundtrip,
    GrammarTip,
    GrammarTip {
        title: "Comma Usage".into(),
        description: "Use commas to separate items in a series.".into(),
        category: "Punctuation".into(),
    }
);

roundtrip_and_validate!(
    chat_request_roundtrip,
    ChatRequest,
    ChatRequest {
        message: "Explain semicolons".into(),
        session_id: Some("1718000000002".into()),
        context: Some("essay draft".into()),
    }
);

roundtrip_and_validate!(
    suggestions_response_roundtrip,
    SuggestionsResponse,
    SuggestionsResponse {
        suggestions: vec!["Use active voice".into(), "Split the long sentence".into()],
    }
);

roundtrip_and_validate!(
    create_session_response_roundtrip,
    CreateSessionResponse,
    CreateSessionResponse {
        session_id: "1718000000003".into(),
    }
);

roundtrip_and_validate!(
    api_error_roundtrip,
    ApiErrorBody,
    ApiErrorBody::new("Failed to process message")
);
