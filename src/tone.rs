// Tone classification for Notes-Local
// Lexicon-based: counts positive vs negative phrase hits in a transcript

use serde::{Deserialize, Serialize};

/// Overall tone of a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Neutral => "neutral",
            Tone::Negative => "negative",
        }
    }

    /// Parse a stored tone value; anything unrecognized reads as neutral.
    pub fn from_str_or_neutral(value: &str) -> Self {
        match value {
            "positive" => Tone::Positive,
            "negative" => Tone::Negative,
            _ => Tone::Neutral,
        }
    }
}

const POSITIVE_PHRASES: &[&str] = &[
    "great",
    "happy",
    "grateful",
    "excited",
    "awesome",
    "wonderful",
    "amazing",
    "love",
    "glad",
    "good news",
    "went well",
];

const NEGATIVE_PHRASES: &[&str] = &[
    "sad",
    "angry",
    "frustrated",
    "worried",
    "terrible",
    "awful",
    "stressed",
    "annoyed",
    "exhausted",
    "bad news",
    "went wrong",
];

/// Classify the tone of a transcript.
///
/// Same matching primitive and guard behavior as the tagger: lowercase
/// substring containment, each phrase counted at most once, and absent or
/// empty input is neutral rather than an error.
pub fn classify_tone(text: Option<&str>) -> Tone {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return Tone::Neutral,
    };

    let lowered = text.to_lowercase();
    let positive = POSITIVE_PHRASES
        .iter()
        .filter(|phrase| lowered.contains(**phrase))
        .count();
    let negative = NEGATIVE_PHRASES
        .iter()
        .filter(|phrase| lowered.contains(**phrase))
        .count();

    if positive > negative {
        Tone::Positive
    } else if negative > positive {
        Tone::Negative
    } else {
        Tone::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_input_is_neutral() {
        assert_eq!(classify_tone(None), Tone::Neutral);
        assert_eq!(classify_tone(Some("")), Tone::Neutral);
    }

    #[test]
    fn test_positive_transcript() {
        assert_eq!(
            classify_tone(Some("I'm so happy, the demo went well and everyone was excited")),
            Tone::Positive
        );
    }

    #[test]
    fn test_negative_transcript() {
        assert_eq!(
            classify_tone(Some("I'm stressed and frustrated, this week was terrible")),
            Tone::Negative
        );
    }

    #[test]
    fn test_balanced_hits_are_neutral() {
        assert_eq!(
            classify_tone(Some("great start, awful ending")),
            Tone::Neutral
        );
    }

    #[test]
    fn test_no_lexicon_hits_are_neutral() {
        assert_eq!(
            classify_tone(Some("the quarterly numbers are in the shared folder")),
            Tone::Neutral
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify_tone(Some("GREAT NEWS EVERYONE")), Tone::Positive);
    }

    #[test]
    fn test_stored_value_round_trip() {
        for tone in [Tone::Positive, Tone::Neutral, Tone::Negative] {
            assert_eq!(Tone::from_str_or_neutral(tone.as_str()), tone);
        }
        assert_eq!(Tone::from_str_or_neutral("garbage"), Tone::Neutral);
    }
}
