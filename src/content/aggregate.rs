//! Catalog aggregator
//!
//! Merges per-category batches into one feed ordered by frequency rank.

use super::post::Post;

/// Concatenate batches in the order given, then stable-sort by frequency rank.
///
/// Posts with equal rank keep their submission order, so passing batches in
/// `Category::ALL` order keeps ties in category order.
pub fn aggregate<I>(batches: I) -> Vec<Post>
where
    I: IntoIterator<Item = Vec<Post>>,
{
    let mut posts: Vec<Post> = batches.into_iter().flatten().collect();
    // sort_by_key is stable
    posts.sort_by_key(|p| p.frequency_rank);
    posts
}
