// Tagging - Category taxonomy
// The fixed set of note categories and the keyword phrases that identify them

use once_cell::sync::Lazy;

/// A named category and its keyword phrases.
///
/// Phrases are matched against lowercased transcripts by plain substring
/// containment, so they are normalized to lowercase on construction. A
/// phrase may legitimately appear in more than one category ("deadline" is
/// both time-sensitive and professional); one occurrence in a transcript
/// then counts toward every category that lists it.
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    keywords: Vec<String>,
}

impl Category {
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords
                .iter()
                .filter(|k| !k.is_empty())
                .map(|k| k.to_lowercase())
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// An ordered, immutable set of categories.
///
/// Declaration order matters: it is the tie-break order when two categories
/// score the same number of keyword hits.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

impl Taxonomy {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The built-in note taxonomy, constructed once per process.
    pub fn builtin() -> &'static Taxonomy {
        &BUILTIN
    }
}

static BUILTIN: Lazy<Taxonomy> = Lazy::new(|| {
    Taxonomy::new(vec![
        Category::new(
            "idea",
            &[
                "what if",
                "idea",
                "concept",
                "brainstorm",
                "thinking about",
                "what about",
                "imagine",
                "invention",
                "prototype",
            ],
        ),
        Category::new(
            "todo",
            &[
                "need to",
                "have to",
                "to-do",
                "to do",
                "task",
                "don't forget",
                "remember to",
                "checklist",
                "errand",
                "must",
            ],
        ),
        Category::new(
            "reminder",
            &[
                "remind me",
                "reminder",
                "don't forget",
                "by tomorrow",
                "appointment",
                "deadline",
                "due",
            ],
        ),
        Category::new(
            "journal",
            &[
                "today was",
                "i feel",
                "feeling",
                "grateful",
                "i've been",
                "dear diary",
                "looking back",
                "reflect",
            ],
        ),
        Category::new(
            "work",
            &[
                "meeting",
                "project",
                "client",
                "deadline",
                "presentation",
                "email",
                "team",
                "boss",
                "office",
                "interview",
            ],
        ),
        Category::new(
            "personal",
            &[
                "family",
                "friend",
                "dinner",
                "kids",
                "vacation",
                "weekend",
                "birthday",
                "home",
            ],
        ),
    ])
});
