//! Post synthesizer
//!
//! Expands a short list of category examples into a target number of posts by
//! cycling through the list. Repeats get a cycle marker on the translation so
//! they stay distinguishable in the feed.

use rand::Rng;

use super::catalog::{CatalogEntry, CategoryProfile, PresentationRule};
use super::post::{ExerciseType, MediaFrequency, Post};

/// Generate `target_count` posts for one category.
///
/// Presentation hints are drawn from `rng`, so a seeded generator gives a
/// reproducible batch.
///
/// # Panics
///
/// Panics if `examples` is empty and `target_count > 0`; there is nothing to
/// cycle over.
pub fn synthesize<R: Rng + ?Sized>(
    profile: &CategoryProfile,
    examples: &[CatalogEntry],
    target_count: usize,
    rng: &mut R,
) -> Vec<Post> {
    assert!(
        target_count == 0 || !examples.is_empty(),
        "cannot synthesize {} {} posts from an empty example list",
        target_count,
        profile.category.as_str()
    );

    (0..target_count)
        .map(|i| {
            let example = &examples[i % examples.len()];
            let translation = match cycle_number(i, examples.len()) {
                Some(cycle) => format!("{} ({})", example.translation_text, cycle),
                None => example.translation_text.to_string(),
            };
            build_post(profile, example, translation, rng)
        })
        .collect()
}

/// 1-based cycle number for repeats, `None` on the first pass
fn cycle_number(index: usize, len: usize) -> Option<usize> {
    if index >= len {
        Some(index / len + 1)
    } else {
        None
    }
}

fn build_post<R: Rng + ?Sized>(
    profile: &CategoryProfile,
    example: &CatalogEntry,
    translation: String,
    rng: &mut R,
) -> Post {
    let rank = example.frequency_rank;

    let (audio_first, exercise_type) = match profile.presentation {
        PresentationRule::Fixed {
            audio_first,
            exercise_type,
        } => (audio_first, exercise_type),
        PresentationRule::Random { audio_first_chance } => {
            let audio_first = rng.gen_bool(audio_first_chance);
            let exercise_type = if rng.gen_bool(0.5) {
                ExerciseType::Recognition
            } else {
                ExerciseType::Phonetic
            };
            (audio_first, exercise_type)
        }
    };

    Post {
        _id: None,
        post_type: profile.post_type.to_string(),
        japanese: example.source_text.to_string(),
        reading: example.reading.to_string(),
        translation,
        explanation: profile.explanation_for(example),
        difficulty: profile.difficulty.apply(rank),
        tags: profile.tags.iter().map(|t| t.to_string()).collect(),
        audio_first,
        exercise_type,
        frequency_rank: rank,
        media_frequency: MediaFrequency::High,
        priority: profile.priority.apply(rank),
        sumo_category: profile.sumo_category.map(str::to_string),
    }
}
