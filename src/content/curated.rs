//! Curated "smart content" posts
//!
//! A small hand-written set inserted as-is (no cycling, no randomized hints).
//! Each post pairs two high-frequency words in a natural sentence.

use super::catalog::Category;
use super::post::{Difficulty, ExerciseType, MediaFrequency, Post};

use super::post::Difficulty::{Beginner, Intermediate};
use super::post::ExerciseType::{Phonetic, Recognition};
use super::post::MediaFrequency::{High, Medium};

/// A fully authored post plus the category it is reported under
#[derive(Debug, Clone, Copy)]
pub struct CuratedPost {
    pub category: Category,
    pub post_type: &'static str,
    pub japanese: &'static str,
    pub reading: &'static str,
    pub translation: &'static str,
    pub explanation: &'static str,
    pub difficulty: Difficulty,
    pub tags: &'static [&'static str],
    pub audio_first: bool,
    pub exercise_type: ExerciseType,
    pub frequency_rank: i32,
    pub media_frequency: MediaFrequency,
    pub priority: i32,
}

impl CuratedPost {
    pub fn to_post(&self) -> Post {
        Post {
            _id: None,
            post_type: self.post_type.to_string(),
            japanese: self.japanese.to_string(),
            reading: self.reading.to_string(),
            translation: self.translation.to_string(),
            explanation: self.explanation.to_string(),
            difficulty: self.difficulty,
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            audio_first: self.audio_first,
            exercise_type: self.exercise_type,
            frequency_rank: self.frequency_rank,
            media_frequency: self.media_frequency,
            priority: self.priority,
            sumo_category: None,
        }
    }
}

/// Curated posts grouped into per-category batches, in generation order
pub fn batches() -> Vec<(Category, Vec<Post>)> {
    Category::ALL
        .iter()
        .map(|&category| {
            let posts = SMART_POSTS
                .iter()
                .filter(|p| p.category == category)
                .map(CuratedPost::to_post)
                .collect();
            (category, posts)
        })
        .collect()
}

pub const SMART_POSTS: &[CuratedPost] = &[
    CuratedPost {
        category: Category::DailyLife,
        post_type: "Morning Post",
        japanese: "今日はコーヒーを飲む",
        reading: "きょうはコーヒーをのむ",
        translation: "Today I'm drinking coffee",
        explanation: "今日 (rank #25) and コーヒー (rank #90) are high-frequency words in Japanese media. Much more useful than textbook phrases like 'where is the library'.",
        difficulty: Beginner,
        tags: &["daily-life", "drinks", "high-frequency"],
        audio_first: false,
        exercise_type: Recognition,
        frequency_rank: 25,
        media_frequency: High,
        priority: 2,
    },
    CuratedPost {
        category: Category::Food,
        post_type: "Food Review",
        japanese: "この料理は美味しい",
        reading: "このりょうりはおいしい",
        translation: "This food is delicious",
        explanation: "料理 (rank #80) and 美味しい (rank #75) appear constantly in anime/drama. Essential for food conversations.",
        difficulty: Beginner,
        tags: &["food", "adjective", "high-frequency"],
        audio_first: false,
        exercise_type: Recognition,
        frequency_rank: 75,
        media_frequency: High,
        priority: 2,
    },
    CuratedPost {
        category: Category::Casual,
        post_type: "Casual Expression",
        japanese: "やばい美味しい！",
        reading: "やばいおいしい！",
        translation: "So delicious!",
        explanation: "やばい (rank #47) is extremely common in casual anime/drama but rarely taught in textbooks. Essential for understanding real Japanese.",
        difficulty: Intermediate,
        tags: &["casual", "slang", "high-frequency"],
        audio_first: true,
        exercise_type: Phonetic,
        frequency_rank: 47,
        media_frequency: High,
        priority: 1,
    },
    CuratedPost {
        category: Category::DailyLife,
        post_type: "Shopping Post",
        japanese: "この店は安い",
        reading: "このみせはやすい",
        translation: "This store is cheap",
        explanation: "店 (rank #87) and 安い (rank #97) are practical vocabulary for daily life. Much more useful than academic Japanese.",
        difficulty: Beginner,
        tags: &["shopping", "adjective", "daily-life"],
        audio_first: false,
        exercise_type: Recognition,
        frequency_rank: 87,
        media_frequency: High,
        priority: 2,
    },
    CuratedPost {
        category: Category::DailyLife,
        post_type: "Weather Chat",
        japanese: "今日の天気は大丈夫",
        reading: "きょうのてんきはだいじょうぶ",
        translation: "Today's weather is okay",
        explanation: "天気 (rank #135) and 大丈夫 (rank #57) appear frequently in daily conversation. 大丈夫 has many uses beyond just 'okay'.",
        difficulty: Intermediate,
        tags: &["weather", "daily-life", "versatile-word"],
        audio_first: false,
        exercise_type: Recognition,
        frequency_rank: 57,
        media_frequency: High,
        priority: 2,
    },
    CuratedPost {
        category: Category::DailyLife,
        post_type: "Home Life",
        japanese: "家で料理を作る",
        reading: "いえでりょうりをつくる",
        translation: "Making food at home",
        explanation: "家 (rank #45) and 料理 (rank #80) are essential daily vocabulary. Notice the を particle marking the object.",
        difficulty: Beginner,
        tags: &["home", "cooking", "particles"],
        audio_first: false,
        exercise_type: Recognition,
        frequency_rank: 45,
        media_frequency: High,
        priority: 1,
    },
    CuratedPost {
        category: Category::Casual,
        post_type: "Casual Reaction",
        japanese: "すごいね！",
        reading: "すごいね！",
        translation: "That's amazing!",
        explanation: "すごい (rank #52) is one of the most useful casual expressions. Appears constantly in anime but underemphasized in textbooks.",
        difficulty: Beginner,
        tags: &["casual", "reaction", "high-frequency"],
        audio_first: true,
        exercise_type: Phonetic,
        frequency_rank: 52,
        media_frequency: High,
        priority: 1,
    },
    CuratedPost {
        category: Category::DailyLife,
        post_type: "Shopping Decision",
        japanese: "ちょっと高いかな",
        reading: "ちょっとたかいかな",
        translation: "It's a bit expensive, I guess",
        explanation: "ちょっと (rank #62) and 高い (rank #102) with かな ending - very natural Japanese that appears in real conversations.",
        difficulty: Intermediate,
        tags: &["shopping", "hesitation", "natural-speech"],
        audio_first: false,
        exercise_type: Recognition,
        frequency_rank: 62,
        media_frequency: High,
        priority: 2,
    },
    CuratedPost {
        category: Category::Casual,
        post_type: "Confirmation",
        japanese: "本当？",
        reading: "ほんとう？",
        translation: "Really?",
        explanation: "本当 (rank #67) is extremely high-frequency for confirmations and questions. Essential for natural conversation flow.",
        difficulty: Beginner,
        tags: &["question", "confirmation", "high-frequency"],
        audio_first: true,
        exercise_type: Phonetic,
        frequency_rank: 67,
        media_frequency: High,
        priority: 1,
    },
    CuratedPost {
        category: Category::Food,
        post_type: "Restaurant Experience",
        japanese: "レストランで食べる",
        reading: "レストランでたべる",
        translation: "Eating at a restaurant",
        explanation: "レストラン (rank #85) and 食べる (rank #65) are practical daily vocabulary. で particle shows location of action.",
        difficulty: Beginner,
        tags: &["restaurant", "dining", "location-particle"],
        audio_first: false,
        exercise_type: Recognition,
        frequency_rank: 65,
        media_frequency: High,
        priority: 2,
    },
    CuratedPost {
        category: Category::DailyLife,
        post_type: "Weather Report",
        japanese: "雨が降る",
        reading: "あめがふる",
        translation: "It's raining",
        explanation: "雨 (rank #140) and the pattern 'rain falls' is common in weather discussions. が marks the subject doing the action.",
        difficulty: Beginner,
        tags: &["weather", "verb", "subject-particle"],
        audio_first: false,
        exercise_type: Recognition,
        frequency_rank: 140,
        media_frequency: Medium,
        priority: 3,
    },
    CuratedPost {
        category: Category::Casual,
        post_type: "Intense Reaction",
        japanese: "めちゃくちゃ美味しい",
        reading: "めちゃくちゃおいしい",
        translation: "Extremely delicious",
        explanation: "めちゃくちゃ (rank #120) is very common in casual speech for emphasis. Much more natural than textbook intensifiers.",
        difficulty: Intermediate,
        tags: &["casual", "intensifier", "food"],
        audio_first: true,
        exercise_type: Phonetic,
        frequency_rank: 120,
        media_frequency: High,
        priority: 2,
    },
    CuratedPost {
        category: Category::DailyLife,
        post_type: "Writing Practice",
        japanese: "きょう vs 今日",
        reading: "きょう",
        translation: "today",
        explanation: "Same word, different writing. Can you recognize them as identical when heard? This trains sound-meaning connections vs visual recognition.",
        difficulty: Beginner,
        tags: &["writing-practice", "phonetic-training", "hiragana"],
        audio_first: true,
        exercise_type: Phonetic,
        frequency_rank: 25,
        media_frequency: High,
        priority: 1,
    },
    CuratedPost {
        category: Category::Food,
        post_type: "Writing Practice",
        japanese: "りょうり vs 料理",
        reading: "りょうり",
        translation: "cooking, cuisine",
        explanation: "High-frequency word (rank #80) in different scripts. Training your brain to connect sound to meaning regardless of writing system.",
        difficulty: Intermediate,
        tags: &["writing-practice", "food", "phonetic-training"],
        audio_first: true,
        exercise_type: Phonetic,
        frequency_rank: 80,
        media_frequency: High,
        priority: 2,
    },
    CuratedPost {
        category: Category::DailyLife,
        post_type: "Daily Routine",
        japanese: "コーヒーを買う",
        reading: "コーヒーをかう",
        translation: "Buying coffee",
        explanation: "Both コーヒー (rank #90) and 買う (rank #82) are high-frequency daily vocabulary. を particle marks what you're buying.",
        difficulty: Beginner,
        tags: &["shopping", "daily-routine", "object-particle"],
        audio_first: false,
        exercise_type: Recognition,
        frequency_rank: 82,
        media_frequency: High,
        priority: 2,
    },
];
