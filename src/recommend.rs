use serde::{Deserialize, Serialize};

use crate::error::LookupError;
use crate::tables::{
    lookup, BODY_ADVICE, DEEP_SKIN_ADVICE, FACE_ADVICE, FAIR_SKIN_ADVICE, GENERIC_BODY_ADVICE,
    GENERIC_FACE_ADVICE, GENERIC_RECOMMENDATION, MEDIUM_SKIN_ADVICE, OLIVE_SKIN_ADVICE,
    PERSONALITY_STYLES,
};

/// Gender echoed back when a request leaves it out.
pub const DEFAULT_GENDER: &str = "female";

// ---------------------------------------------------------------------------
// Request / result shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationRequest {
    pub gender: Option<String>,
    pub body_type: Option<String>,
    pub face_shape: Option<String>,
    pub mbti: Option<String>,
    pub skin_tone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputParameters {
    pub gender: String,
    pub body_type: String,
    pub face_shape: String,
    pub personality: String,
    pub skin_tone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationResult {
    pub recommendation: String,
    pub input_parameters: InputParameters,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalityStyle {
    pub personality_type: String,
    pub style_recommendation: &'static str,
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn body_advice(body_type: &str) -> &'static str {
    lookup(&BODY_ADVICE, &body_type.to_lowercase()).unwrap_or(GENERIC_BODY_ADVICE)
}

fn face_advice(face_shape: &str) -> &'static str {
    lookup(&FACE_ADVICE, &face_shape.to_lowercase()).unwrap_or(GENERIC_FACE_ADVICE)
}

/// Classify by substring on the raw label, first match wins.
///
/// "III", "IV" and "VI" all contain "I", so any label with an uppercase `I`
/// lands on the fair branch and the medium and olive arms are only reached
/// by labels that never do. Type III, IV and VI labels are therefore
/// likely misclassified; the order is kept so outputs match the existing
/// recommendation text for every label.
fn skin_advice(skin_tone: &str) -> &'static str {
    if skin_tone.contains('I') || skin_tone.contains("II") {
        FAIR_SKIN_ADVICE
    } else if skin_tone.contains("III") {
        MEDIUM_SKIN_ADVICE
    } else if skin_tone.contains("IV") {
        OLIVE_SKIN_ADVICE
    } else {
        DEEP_SKIN_ADVICE
    }
}

fn personality_advice(mbti: &str) -> Option<String> {
    let code = mbti.to_uppercase();
    lookup(&PERSONALITY_STYLES, &code).map(|style| format!("Your {code} personality suggests: {style}"))
}

/// Merge whichever inputs are present into one paragraph.
///
/// Fragments always appear in body, face, skin, personality order. Empty
/// strings count as missing; with nothing usable the generic message is
/// returned.
pub fn compose(
    body_type: Option<&str>,
    face_shape: Option<&str>,
    mbti: Option<&str>,
    skin_tone: Option<&str>,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(b) = present(body_type) {
        parts.push(body_advice(b).to_string());
    }
    if let Some(f) = present(face_shape) {
        parts.push(face_advice(f).to_string());
    }
    if let Some(s) = present(skin_tone) {
        parts.push(skin_advice(s).to_string());
    }
    if let Some(p) = present(mbti).and_then(personality_advice) {
        parts.push(p);
    }

    if parts.is_empty() {
        GENERIC_RECOMMENDATION.to_string()
    } else {
        parts.join(" ")
    }
}

/// Build the full recommendation response, echoing the inputs back.
pub fn recommend(request: &RecommendationRequest) -> RecommendationResult {
    let text = compose(
        request.body_type.as_deref(),
        request.face_shape.as_deref(),
        request.mbti.as_deref(),
        request.skin_tone.as_deref(),
    );
    let echo = |v: &Option<String>| v.clone().unwrap_or_default();

    RecommendationResult {
        recommendation: text,
        input_parameters: InputParameters {
            gender: request
                .gender
                .clone()
                .unwrap_or_else(|| DEFAULT_GENDER.to_string()),
            body_type: echo(&request.body_type),
            face_shape: echo(&request.face_shape),
            personality: echo(&request.mbti),
            skin_tone: echo(&request.skin_tone),
        },
    }
}

/// Style description for a four-letter code, matched after uppercasing.
pub fn personality(code: &str) -> Result<PersonalityStyle, LookupError> {
    let code = code.to_uppercase();
    match lookup(&PERSONALITY_STYLES, &code) {
        Some(style) => Ok(PersonalityStyle {
            personality_type: code,
            style_recommendation: style,
        }),
        None => Err(LookupError::UnknownPersonality(code)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("missing fragment: {needle}"))
    }

    #[test]
    fn test_full_input_keeps_fragment_order() {
        let text = compose(Some("hourglass"), Some("oval"), Some("INTJ"), Some("Type II - Fair"));
        let body = position(&text, BODY_ADVICE[0].1);
        let face = position(&text, FACE_ADVICE[0].1);
        let skin = position(&text, FAIR_SKIN_ADVICE);
        let mbti = position(&text, "Sophisticated, sleek styles with clean lines");
        assert!(body < face && face < skin && skin < mbti);
        assert!(text.contains("Your INTJ personality suggests: "));
    }

    #[test]
    fn test_empty_input_gives_generic_message() {
        assert_eq!(compose(None, None, None, None), GENERIC_RECOMMENDATION);
        assert_eq!(compose(Some(""), Some(""), Some(""), Some("")), GENERIC_RECOMMENDATION);
    }

    #[test]
    fn test_unknown_body_gives_generic_body_fragment_only() {
        assert_eq!(compose(Some("unknown-shape"), None, None, None), GENERIC_BODY_ADVICE);
    }

    #[test]
    fn test_unknown_face_gives_generic_face_fragment() {
        assert_eq!(compose(None, Some("hexagon"), None, None), GENERIC_FACE_ADVICE);
    }

    #[test]
    fn test_body_and_face_lookup_ignore_case() {
        assert_eq!(compose(Some("Inverted Triangle"), None, None, None), BODY_ADVICE[3].1);
        assert_eq!(compose(None, Some("ROUND"), None, None), FACE_ADVICE[1].1);
    }

    #[test]
    fn test_unknown_personality_is_omitted() {
        assert_eq!(compose(None, None, Some("XXXX"), None), GENERIC_RECOMMENDATION);
        assert_eq!(
            compose(Some("oval"), None, Some("ABCD"), None),
            BODY_ADVICE[4].1
        );
    }

    #[test]
    fn test_personality_code_is_uppercased() {
        let text = compose(None, None, Some("enfp"), None);
        assert!(text.starts_with("Your ENFP personality suggests: Eclectic"));
    }

    #[test]
    fn test_skin_branch_priority_prefers_fair() {
        // contains both "I" and "III": the "I" test runs first
        assert_eq!(compose(None, None, None, Some("Type III - Medium")), FAIR_SKIN_ADVICE);
        assert_eq!(compose(None, None, None, Some("Type IV - Olive")), FAIR_SKIN_ADVICE);
        assert_eq!(compose(None, None, None, Some("Type VI - Dark brown to black")), FAIR_SKIN_ADVICE);
    }

    #[test]
    fn test_skin_without_uppercase_i_is_deep() {
        assert_eq!(compose(None, None, None, Some("Type V - Brown")), DEEP_SKIN_ADVICE);
        assert_eq!(compose(None, None, None, Some("type iii")), DEEP_SKIN_ADVICE);
        assert_eq!(compose(None, None, None, Some("dark")), DEEP_SKIN_ADVICE);
    }

    #[test]
    fn test_recommend_echoes_inputs_with_defaults() {
        let request = RecommendationRequest {
            body_type: Some("pear".into()),
            mbti: Some("istj".into()),
            ..Default::default()
        };
        let result = recommend(&request);
        assert_eq!(result.input_parameters.gender, DEFAULT_GENDER);
        assert_eq!(result.input_parameters.body_type, "pear");
        assert_eq!(result.input_parameters.face_shape, "");
        assert_eq!(result.input_parameters.personality, "istj");
        assert!(result.recommendation.starts_with(GENERIC_BODY_ADVICE));
        assert!(result.recommendation.contains("Your ISTJ personality"));
    }

    #[test]
    fn test_request_deserializes_with_missing_fields() {
        let request: RecommendationRequest =
            serde_json::from_str(r#"{"gender": "male", "face_shape": "square"}"#).unwrap();
        assert_eq!(request.gender.as_deref(), Some("male"));
        assert_eq!(request.face_shape.as_deref(), Some("square"));
        assert!(request.mbti.is_none());
    }

    #[test]
    fn test_personality_lookup() {
        let style = personality("entj").unwrap();
        assert_eq!(style.personality_type, "ENTJ");
        assert!(style.style_recommendation.starts_with("Power dressing"));
        assert_eq!(
            personality("abcd"),
            Err(LookupError::UnknownPersonality("ABCD".to_string()))
        );
    }

    proptest! {
        #[test]
        fn prop_compose_never_empty(
            body in proptest::option::of(".{0,12}"),
            face in proptest::option::of(".{0,12}"),
            mbti in proptest::option::of("[A-Za-z]{0,4}"),
            skin in proptest::option::of(".{0,16}"),
        ) {
            let text = compose(body.as_deref(), face.as_deref(), mbti.as_deref(), skin.as_deref());
            prop_assert!(!text.is_empty());
        }
    }
}
