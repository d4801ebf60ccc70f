//! Content catalog
//!
//! Static vocabulary examples grouped by category, plus the per-category rules
//! the synthesizer applies when turning an example into a post. The catalog is
//! built once at startup and never mutated afterwards.

use serde::Serialize;

use super::entries;
use super::post::{Difficulty, ExerciseType};

/// Content category, in generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    DailyLife,
    Food,
    Casual,
    Sumo,
}

impl Category {
    /// Fixed generation order; ties in frequency rank keep this order
    pub const ALL: [Category; 4] = [
        Category::DailyLife,
        Category::Food,
        Category::Casual,
        Category::Sumo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DailyLife => "daily-life",
            Self::Food => "food",
            Self::Casual => "casual",
            Self::Sumo => "sumo",
        }
    }
}

/// A hand-authored example used as the template for generated posts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub source_text: &'static str,
    pub reading: &'static str,
    pub translation_text: &'static str,
    pub frequency_rank: i32,
    pub explanation: Option<&'static str>,
}

/// How difficulty is derived from an entry's frequency rank
#[derive(Debug, Clone, Copy)]
pub enum DifficultyRule {
    /// `rank <= max_rank` gets `within`, anything rarer gets `beyond`
    Threshold {
        max_rank: i32,
        within: Difficulty,
        beyond: Difficulty,
    },
    Fixed(Difficulty),
}

impl DifficultyRule {
    pub fn apply(&self, rank: i32) -> Difficulty {
        match *self {
            Self::Threshold {
                max_rank,
                within,
                beyond,
            } => {
                if rank <= max_rank {
                    within
                } else {
                    beyond
                }
            }
            Self::Fixed(difficulty) => difficulty,
        }
    }
}

/// How priority is derived from an entry's frequency rank
#[derive(Debug, Clone, Copy)]
pub enum PriorityRule {
    /// `ceil(rank / divisor)`; a smaller divisor gives finer buckets
    Bucketed { divisor: i32 },
    /// `within` for `rank <= max_rank`, else `beyond`
    Threshold { max_rank: i32, within: i32, beyond: i32 },
    Fixed(i32),
}

impl PriorityRule {
    pub fn apply(&self, rank: i32) -> i32 {
        match *self {
            Self::Bucketed { divisor } => {
                // Ranks are positive, so this is ceil division
                (rank + divisor - 1) / divisor
            }
            Self::Threshold {
                max_rank,
                within,
                beyond,
            } => {
                if rank <= max_rank {
                    within
                } else {
                    beyond
                }
            }
            Self::Fixed(priority) => priority,
        }
    }
}

/// How the presentation hints (`audioFirst`, `exerciseType`) are chosen
#[derive(Debug, Clone, Copy)]
pub enum PresentationRule {
    /// Independent draws: `audioFirst` is true with probability
    /// `audio_first_chance`, exercise type is a fair coin.
    Random { audio_first_chance: f64 },
    Fixed {
        audio_first: bool,
        exercise_type: ExerciseType,
    },
}

/// Everything the synthesizer needs to know about one category
#[derive(Debug, Clone)]
pub struct CategoryProfile {
    pub category: Category,
    /// Value of the post `type` field
    pub post_type: &'static str,
    pub tags: &'static [&'static str],
    /// Used when an entry has no explanation; `{rank}` is replaced with the rank
    pub fallback_explanation: &'static str,
    pub difficulty: DifficultyRule,
    pub priority: PriorityRule,
    pub presentation: PresentationRule,
    pub sumo_category: Option<&'static str>,
}

impl CategoryProfile {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::DailyLife => Self {
                category,
                post_type: "Daily Life Post",
                tags: &["daily-life", "high-frequency", "practical"],
                fallback_explanation: "High-frequency daily vocabulary. Core words from subtitle analysis that appear in real conversations vs textbook phrases.",
                difficulty: DifficultyRule::Threshold {
                    max_rank: 50,
                    within: Difficulty::Beginner,
                    beyond: Difficulty::Intermediate,
                },
                priority: PriorityRule::Bucketed { divisor: 25 },
                presentation: PresentationRule::Random {
                    audio_first_chance: 0.3,
                },
                sumo_category: None,
            },
            Category::Food => Self {
                category,
                post_type: "Food Culture Post",
                tags: &["food", "dining", "practical"],
                fallback_explanation: "Food vocabulary from subtitle analysis. Essential for dining conversations and food anime/drama.",
                difficulty: DifficultyRule::Threshold {
                    max_rank: 100,
                    within: Difficulty::Beginner,
                    beyond: Difficulty::Intermediate,
                },
                priority: PriorityRule::Bucketed { divisor: 30 },
                presentation: PresentationRule::Random {
                    audio_first_chance: 0.4,
                },
                sumo_category: None,
            },
            Category::Casual => Self {
                category,
                post_type: "Casual Expression",
                tags: &["casual", "anime", "slang", "high-frequency"],
                fallback_explanation: "Casual anime/media expressions (rank #{rank}). Essential for understanding real Japanese but rarely taught in textbooks.",
                difficulty: DifficultyRule::Fixed(Difficulty::Intermediate),
                priority: PriorityRule::Fixed(1),
                presentation: PresentationRule::Fixed {
                    audio_first: true,
                    exercise_type: ExerciseType::Phonetic,
                },
                sumo_category: None,
            },
            Category::Sumo => Self {
                category,
                post_type: super::post::SUMO_POST_TYPE,
                tags: &["sumo", "sports", "traditional", "anime"],
                fallback_explanation: "Sumo vocabulary essential for sumo anime/content. Core terminology used in commentary and analysis.",
                difficulty: DifficultyRule::Threshold {
                    max_rank: 50,
                    within: Difficulty::Intermediate,
                    beyond: Difficulty::Advanced,
                },
                priority: PriorityRule::Threshold {
                    max_rank: 30,
                    within: 1,
                    beyond: 2,
                },
                presentation: PresentationRule::Random {
                    audio_first_chance: 0.5,
                },
                sumo_category: Some("technique"),
            },
        }
    }

    /// Explanation for an entry, falling back to the category template
    pub fn explanation_for(&self, entry: &CatalogEntry) -> String {
        match entry.explanation {
            Some(text) => text.to_string(),
            None => self
                .fallback_explanation
                .replace("{rank}", &entry.frequency_rank.to_string()),
        }
    }
}

/// Options that change catalog contents at build time
#[derive(Debug, Clone, Default)]
pub struct CatalogOptions {
    /// Override the frequency rank of the 相撲 sumo entry.
    ///
    /// Different authored versions disagree on this value, so it is left to
    /// configuration rather than picked here.
    pub sumo_core_rank: Option<i32>,
}

/// Source text of the sumo entry whose rank is configurable
pub const SUMO_CORE_ENTRY: &str = "今日の相撲は面白い";

/// Immutable set of examples and rules for every category
#[derive(Debug, Clone)]
pub struct Catalog {
    sections: Vec<(CategoryProfile, Vec<CatalogEntry>)>,
}

impl Catalog {
    /// Build the catalog from the authored vocabulary
    pub fn new(options: &CatalogOptions) -> Self {
        let sections = Category::ALL
            .iter()
            .map(|&category| {
                let mut examples = entries::for_category(category).to_vec();
                if category == Category::Sumo {
                    if let Some(rank) = options.sumo_core_rank {
                        for entry in examples
                            .iter_mut()
                            .filter(|e| e.source_text == SUMO_CORE_ENTRY)
                        {
                            entry.frequency_rank = rank;
                        }
                    }
                }
                (CategoryProfile::for_category(category), examples)
            })
            .collect();

        Self { sections }
    }

    /// Build a catalog from explicit sections (tests, alternate content sets)
    pub fn from_sections(sections: Vec<(CategoryProfile, Vec<CatalogEntry>)>) -> Self {
        Self { sections }
    }

    pub fn profile(&self, category: Category) -> Option<&CategoryProfile> {
        self.sections
            .iter()
            .find(|(p, _)| p.category == category)
            .map(|(p, _)| p)
    }

    pub fn examples(&self, category: Category) -> &[CatalogEntry] {
        self.sections
            .iter()
            .find(|(p, _)| p.category == category)
            .map(|(_, e)| e.as_slice())
            .unwrap_or(&[])
    }

    /// Sections in generation order
    pub fn sections(&self) -> impl Iterator<Item = (&CategoryProfile, &[CatalogEntry])> {
        self.sections.iter().map(|(p, e)| (p, e.as_slice()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(&CatalogOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_bucketing_is_ceil() {
        let rule = PriorityRule::Bucketed { divisor: 25 };
        assert_eq!(rule.apply(1), 1);
        assert_eq!(rule.apply(25), 1);
        assert_eq!(rule.apply(26), 2);
        assert_eq!(rule.apply(150), 6);

        let food = PriorityRule::Bucketed { divisor: 30 };
        assert_eq!(food.apply(75), 3);
        assert_eq!(food.apply(90), 3);
        assert_eq!(food.apply(91), 4);
    }

    #[test]
    fn test_difficulty_thresholds() {
        let daily = CategoryProfile::for_category(Category::DailyLife);
        assert_eq!(daily.difficulty.apply(50), Difficulty::Beginner);
        assert_eq!(daily.difficulty.apply(51), Difficulty::Intermediate);

        let sumo = CategoryProfile::for_category(Category::Sumo);
        assert_eq!(sumo.difficulty.apply(42), Difficulty::Intermediate);
        assert_eq!(sumo.difficulty.apply(200), Difficulty::Advanced);

        let casual = CategoryProfile::for_category(Category::Casual);
        assert_eq!(casual.difficulty.apply(1), Difficulty::Intermediate);
    }

    #[test]
    fn test_fallback_explanation_interpolates_rank() {
        let casual = CategoryProfile::for_category(Category::Casual);
        let entry = CatalogEntry {
            source_text: "マジで",
            reading: "まじで",
            translation_text: "Seriously",
            frequency_rank: 88,
            explanation: None,
        };
        assert!(casual.explanation_for(&entry).contains("rank #88"));
    }

    #[test]
    fn test_every_category_has_examples() {
        let catalog = Catalog::default();
        for category in Category::ALL {
            assert!(!catalog.examples(category).is_empty(), "{:?}", category);
            assert!(catalog.profile(category).is_some());
        }
    }

    #[test]
    fn test_tags_are_unique() {
        for category in Category::ALL {
            let profile = CategoryProfile::for_category(category);
            let mut tags = profile.tags.to_vec();
            tags.sort_unstable();
            tags.dedup();
            assert_eq!(tags.len(), profile.tags.len());
        }
    }

    #[test]
    fn test_sumo_core_rank_override() {
        let authored = Catalog::default();
        let rank_of = |catalog: &Catalog| {
            catalog
                .examples(Category::Sumo)
                .iter()
                .find(|e| e.source_text == SUMO_CORE_ENTRY)
                .map(|e| e.frequency_rank)
        };
        assert_eq!(rank_of(&authored), Some(200));

        let boosted = Catalog::new(&CatalogOptions {
            sumo_core_rank: Some(5),
        });
        assert_eq!(rank_of(&boosted), Some(5));
        // Other categories are untouched
        assert_eq!(
            boosted.examples(Category::Food),
            authored.examples(Category::Food)
        );
    }
}
