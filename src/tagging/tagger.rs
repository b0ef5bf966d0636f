// Tagging - Keyword scorer
// Ranks a transcript against the taxonomy by counting distinct keyword hits

use serde_json::Value;

use super::taxonomy::Taxonomy;

/// Maximum number of tags returned for a single transcript.
pub const MAX_TAGS: usize = 3;

/// A category name paired with its match count for one transcript.
/// Lives only for the duration of one `tag` call.
#[derive(Debug, Clone)]
struct ScoredCategory<'a> {
    name: &'a str,
    matches: usize,
}

/// Scores transcripts against a taxonomy.
///
/// The taxonomy is borrowed, not owned: the built-in set lives for the whole
/// process, and tests can bind a tagger to any alternate set.
#[derive(Debug, Clone, Copy)]
pub struct Tagger<'a> {
    taxonomy: &'a Taxonomy,
}

impl<'a> Tagger<'a> {
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// Tag a transcript, returning up to [`MAX_TAGS`] category names ranked
    /// by match count.
    ///
    /// Total over its input: `None` and the empty string yield an empty
    /// result, and no input can make this panic. Matching is lowercase
    /// substring containment; each keyword phrase contributes at most one
    /// point to its category no matter how often it occurs. Ties keep the
    /// taxonomy's declaration order. The result is never padded.
    pub fn tag(&self, text: Option<&str>) -> Vec<String> {
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => return Vec::new(),
        };

        let lowered = text.to_lowercase();

        let mut scored: Vec<ScoredCategory> = Vec::new();
        for category in self.taxonomy.categories() {
            let matches = category
                .keywords()
                .iter()
                .filter(|keyword| lowered.contains(keyword.as_str()))
                .count();
            if matches > 0 {
                scored.push(ScoredCategory {
                    name: category.name(),
                    matches,
                });
            }
        }

        // sort_by is stable, so equal counts stay in declaration order
        scored.sort_by(|a, b| b.matches.cmp(&a.matches));
        scored.truncate(MAX_TAGS);

        scored.into_iter().map(|s| s.name.to_string()).collect()
    }

    /// Tag a loosely-typed value, e.g. a JSON field that was expected to be
    /// a transcript but may have deserialized to null or a number. Anything
    /// that is not a string behaves exactly like absent input.
    pub fn tag_value(&self, value: &Value) -> Vec<String> {
        self.tag(value.as_str())
    }
}

impl Tagger<'static> {
    /// A tagger bound to the built-in taxonomy.
    pub fn builtin() -> Self {
        Self::new(Taxonomy::builtin())
    }
}
