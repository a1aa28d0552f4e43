//! Structured result parser
//!
//! Collaborator output is supposed to be a single JSON object, but models
//! wrap JSON in prose, fence it in code blocks, or drop fields. The parser
//! tries a fixed sequence of recoveries and always produces a structurally
//! valid payload; the caller learns how degraded the parse was through the
//! `used_fallback` flag.

use serde_json::Value;

use crate::domain::value_objects::{ArtifactPayload, PayloadKind};

/// Parse raw collaborator text into the expected payload shape
///
/// Attempts, first success wins:
/// 1. direct parse of the whole text;
/// 2. parse of a fenced code block's interior, then of the outermost
///    brace-delimited span;
/// 3. the deterministic default for the expected shape, with
///    `used_fallback = true`.
///
/// A parse that succeeds structurally but misses required fields is repaired
/// with type-appropriate defaults rather than rejected.
pub fn parse_payload(raw: &str, expected: PayloadKind) -> (ArtifactPayload, bool) {
    if let Some(payload) = try_parse(raw, expected) {
        return (payload, false);
    }

    if let Some(block) = extract_fenced_block(raw) {
        if let Some(payload) = try_parse(&block, expected) {
            return (payload, false);
        }
    }

    if let Some(span) = extract_brace_span(raw) {
        if let Some(payload) = try_parse(span, expected) {
            return (payload, false);
        }
    }

    tracing::debug!(?expected, "collaborator output unparseable, using default payload");
    (ArtifactPayload::default_for(expected), true)
}

fn try_parse(text: &str, expected: PayloadKind) -> Option<ArtifactPayload> {
    let mut value: Value = serde_json::from_str(text.trim()).ok()?;
    repair(&mut value, expected);
    let payload: ArtifactPayload = serde_json::from_value(value).ok()?;
    // A well-formed payload of the wrong shape is still a failed parse for
    // this stage.
    (payload.kind() == expected).then_some(payload)
}

/// Fill in the tag and any missing required fields before typed parsing
fn repair(value: &mut Value, expected: PayloadKind) {
    let Some(object) = value.as_object_mut() else {
        return;
    };

    let kind_tag = match expected {
        PayloadKind::BeatSheet => "beat_sheet",
        PayloadKind::EpisodeScript => "episode_script",
        PayloadKind::Storyboard => "storyboard",
        PayloadKind::CastingSheet => "casting_sheet",
    };
    object
        .entry("kind")
        .or_insert_with(|| Value::String(kind_tag.to_string()));

    match expected {
        PayloadKind::BeatSheet => {
            ensure_array(object, "beats");
        }
        PayloadKind::EpisodeScript => {
            ensure_string(object, "title", "Untitled Episode");
            ensure_array(object, "scenes");
            ensure_array(object, "choices");
            if let Some(scenes) = object.get_mut("scenes").and_then(Value::as_array_mut) {
                for scene in scenes {
                    if let Some(scene) = scene.as_object_mut() {
                        ensure_string(scene, "heading", "INT. UNDISCLOSED LOCATION - DAY");
                    }
                }
            }
        }
        PayloadKind::Storyboard => {
            ensure_string(object, "title", "Untitled Storyboard");
            ensure_array(object, "frames");
            if let Some(frames) = object.get_mut("frames").and_then(Value::as_array_mut) {
                for frame in frames {
                    if let Some(frame) = frame.as_object_mut() {
                        ensure_string(frame, "shot_type", "wide");
                        ensure_string(frame, "description", "");
                    }
                }
            }
        }
        PayloadKind::CastingSheet => {
            ensure_array(object, "roles");
        }
    }
}

fn ensure_string(
    object: &mut serde_json::Map<String, Value>,
    key: &str,
    default: &str,
) {
    let needs_default = !matches!(object.get(key), Some(Value::String(_)));
    if needs_default {
        object.insert(key.to_string(), Value::String(default.to_string()));
    }
}

fn ensure_array(object: &mut serde_json::Map<String, Value>, key: &str) {
    let needs_default = !matches!(object.get(key), Some(Value::Array(_)));
    if needs_default {
        object.insert(key.to_string(), Value::Array(Vec::new()));
    }
}

/// Extract the interior of the first fenced code block
fn extract_fenced_block(text: &str) -> Option<String> {
    let start = text.find("```")?;
    let after_fence = &text[start + 3..];
    // Skip a language hint like "json" on the fence line.
    let body_start = after_fence.find('\n')? + 1;
    let body = &after_fence[body_start..];
    let end = body.find("```")?;
    Some(body[..end].to_string())
}

/// Outermost brace-delimited span, for JSON buried in prose
fn extract_brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_json_parses_without_fallback() {
        let raw = r#"{"kind": "beat_sheet", "beats": [{"title": "Hook", "summary": "s", "emotional_turn": "e"}]}"#;
        let (payload, used_fallback) = parse_payload(raw, PayloadKind::BeatSheet);
        assert!(!used_fallback);
        match payload {
            ArtifactPayload::BeatSheet { beats } => assert_eq!(beats[0].title, "Hook"),
            _ => panic!("Expected beat sheet"),
        }
    }

    #[test]
    fn fenced_block_is_extracted() {
        let raw = "Here is the beat sheet you asked for:\n```json\n{\"beats\": [{\"title\": \"Hook\"}]}\n```\nHope this helps!";
        let (payload, used_fallback) = parse_payload(raw, PayloadKind::BeatSheet);
        assert!(!used_fallback);
        match payload {
            ArtifactPayload::BeatSheet { beats } => {
                assert_eq!(beats.len(), 1);
                assert_eq!(beats[0].title, "Hook");
            }
            _ => panic!("Expected beat sheet"),
        }
    }

    #[test]
    fn json_buried_in_prose_is_recovered() {
        let raw = r#"Sure! {"kind": "casting_sheet", "roles": [{"character": "Maren"}]} Let me know."#;
        let (payload, used_fallback) = parse_payload(raw, PayloadKind::CastingSheet);
        assert!(!used_fallback);
        match payload {
            ArtifactPayload::CastingSheet { roles } => assert_eq!(roles[0].character, "Maren"),
            _ => panic!("Expected casting sheet"),
        }
    }

    #[test]
    fn garbage_falls_back_to_default() {
        let (payload, used_fallback) =
            parse_payload("I'm sorry, I can't do that.", PayloadKind::EpisodeScript);
        assert!(used_fallback);
        match payload {
            ArtifactPayload::EpisodeScript { scenes, choices, .. } => {
                assert!(!scenes.is_empty());
                assert_eq!(choices.len(), 3);
            }
            _ => panic!("Expected episode script"),
        }
    }

    #[test]
    fn missing_required_fields_are_repaired() {
        // Valid JSON, right general shape, but no title and no choices.
        let raw = r#"{"scenes": [{"action": "Maren opens the door."}]}"#;
        let (payload, used_fallback) = parse_payload(raw, PayloadKind::EpisodeScript);
        assert!(!used_fallback);
        match payload {
            ArtifactPayload::EpisodeScript { title, scenes, .. } => {
                assert_eq!(title, "Untitled Episode");
                assert_eq!(scenes[0].heading, "INT. UNDISCLOSED LOCATION - DAY");
                assert_eq!(scenes[0].action, "Maren opens the door.");
            }
            _ => panic!("Expected episode script"),
        }
    }

    #[test]
    fn wrong_shape_is_not_accepted() {
        // A well-formed storyboard is still a failure when a beat sheet was
        // expected.
        let raw = r#"{"kind": "storyboard", "title": "T", "frames": []}"#;
        let (payload, used_fallback) = parse_payload(raw, PayloadKind::BeatSheet);
        assert!(used_fallback);
        assert_eq!(payload.kind(), PayloadKind::BeatSheet);
    }
}
