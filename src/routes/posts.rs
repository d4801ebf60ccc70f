//! Read endpoints: `/get-posts` and `/get-shuffled-posts`

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

use super::{error_response, json_response};
use crate::content::Post;
use crate::db::PostStore;
use crate::server::AppState;
use crate::types::Result;

/// Order in which stored posts are returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOrder {
    /// Natural store order (frequency rank after a reseed)
    Stored,
    /// Uniformly shuffled (Fisher-Yates)
    Shuffled,
}

/// Every stored post, in the requested order. An empty store gives an empty list.
pub async fn list_posts<S, R>(store: &S, order: PostOrder, rng: &mut R) -> Result<Vec<Post>>
where
    S: PostStore + ?Sized,
    R: Rng + ?Sized,
{
    let mut posts = store.find_all().await?;
    if order == PostOrder::Shuffled {
        posts.shuffle(rng);
    }
    Ok(posts)
}

/// Handle `/get-posts` and `/get-shuffled-posts`
pub async fn handle_list_posts(state: Arc<AppState>, order: PostOrder) -> Response<Full<Bytes>> {
    match fetch(&state, order).await {
        Ok(posts) => {
            debug!(count = posts.len(), ?order, "Returning posts");
            json_response(StatusCode::OK, &posts)
        }
        Err(e) => {
            error!("Failed to fetch posts: {}", e);
            error_response(&e)
        }
    }
}

async fn fetch(state: &AppState, order: PostOrder) -> Result<Vec<Value>> {
    let store = state.connector.connect().await?;
    let mut rng = state.rng();
    let result = list_posts(&*store, order, &mut rng).await;
    store.close().await;

    let posts = result?
        .iter()
        .map(Post::to_client_json)
        .collect::<serde_json::Result<Vec<_>>>()?;
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use crate::db::MemoryPostStore;
    use crate::reseed::{build_batch, SeedPlan, TargetCounts};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_store() -> MemoryPostStore {
        let batch = build_batch(
            &Catalog::default(),
            &SeedPlan::Frequency(TargetCounts::default()),
            &mut StdRng::seed_from_u64(11),
        );
        MemoryPostStore::with_posts(batch.posts)
    }

    #[tokio::test]
    async fn test_empty_store_returns_empty_list() {
        let store = MemoryPostStore::new();
        let mut rng = StdRng::seed_from_u64(1);
        for order in [PostOrder::Stored, PostOrder::Shuffled] {
            let posts = list_posts(&store, order, &mut rng).await.unwrap();
            assert!(posts.is_empty());
        }
    }

    #[tokio::test]
    async fn test_stored_order_is_preserved() {
        let store = seeded_store();
        let posts = list_posts(&store, PostOrder::Stored, &mut StdRng::seed_from_u64(1))
            .await
            .unwrap();
        assert_eq!(posts, store.snapshot().await);
    }

    #[tokio::test]
    async fn test_shuffle_is_a_permutation() {
        let store = seeded_store();
        let stored = store.snapshot().await;
        let shuffled = list_posts(&store, PostOrder::Shuffled, &mut StdRng::seed_from_u64(9))
            .await
            .unwrap();

        assert_eq!(shuffled.len(), stored.len());
        assert_ne!(shuffled, stored);

        let mut ids: Vec<_> = shuffled.iter().map(|p| p._id.map(|id| id.to_hex())).collect();
        let mut expected: Vec<_> = stored.iter().map(|p| p._id.map(|id| id.to_hex())).collect();
        ids.sort();
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_shuffle_is_reproducible_with_seed() {
        let store = seeded_store();
        let a = list_posts(&store, PostOrder::Shuffled, &mut StdRng::seed_from_u64(5))
            .await
            .unwrap();
        let b = list_posts(&store, PostOrder::Shuffled, &mut StdRng::seed_from_u64(5))
            .await
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_first_position_is_roughly_uniform() {
        // Each of 4 items should land first about a quarter of the time
        let mut rng = StdRng::seed_from_u64(2024);
        let mut firsts = [0usize; 4];
        for _ in 0..8000 {
            let mut items = [0usize, 1, 2, 3];
            items.shuffle(&mut rng);
            firsts[items[0]] += 1;
        }
        for count in firsts {
            assert!((1700..2300).contains(&count), "{:?}", firsts);
        }
    }
}
