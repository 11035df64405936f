// src/services/concurrency.rs

//! Bounded-concurrency mapping.
//!
//! A fixed set of worker futures pulls indices from one shared atomic cursor
//! and writes into a preallocated, position-indexed result array. Workers are
//! the only holders of in-flight work, so at most `concurrency` items are
//! ever being processed at once.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::future;

use crate::error::Result;

/// Map `items` through `worker` with at most `concurrency` items in flight.
///
/// The output has the same order and length as the input regardless of
/// completion order. A failure on one item becomes that index's `Err` and
/// never aborts sibling workers; the call returns only once every item has a
/// result (join-all semantics).
pub async fn map_bounded<'a, T, R, F, Fut>(
    items: &'a [T],
    concurrency: usize,
    worker: F,
) -> Vec<Result<R>>
where
    F: Fn(&'a T) -> Fut,
    Fut: Future<Output = Result<R>>,
{
    if items.is_empty() {
        return Vec::new();
    }

    let cursor = AtomicUsize::new(0);
    let worker = &worker;
    let cursor_ref = &cursor;

    let workers = (0..concurrency.clamp(1, items.len())).map(|_| async move {
        let mut claimed = Vec::new();
        loop {
            let index = cursor_ref.fetch_add(1, Ordering::SeqCst);
            if index >= items.len() {
                break;
            }
            claimed.push((index, worker(&items[index]).await));
        }
        claimed
    });

    let mut slots: Vec<Option<Result<R>>> = Vec::with_capacity(items.len());
    slots.resize_with(items.len(), || None);

    for (index, result) in future::join_all(workers).await.into_iter().flatten() {
        slots[index] = Some(result);
    }

    // The cursor hands out every index exactly once.
    slots
        .into_iter()
        .map(|slot| slot.expect("every index claimed by exactly one worker"))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::error::AppError;

    #[tokio::test]
    async fn preserves_input_order_despite_variable_latency() {
        let items = vec![30u64, 5, 20];
        let results = map_bounded(&items, 2, |&delay| async move {
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(delay * 10)
        })
        .await;

        let values: Vec<u64> = results.into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(values, vec![300, 50, 200]);
    }

    #[tokio::test]
    async fn isolates_item_failures() {
        let items = vec!["a", "b", "c"];
        let results = map_bounded(&items, 2, |&item| async move {
            if item == "b" {
                Err(AppError::validation("boom"))
            } else {
                Ok(item.to_uppercase())
            }
        })
        .await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_deref().unwrap(), "A");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_deref().unwrap(), "C");
    }

    #[tokio::test]
    async fn never_exceeds_the_concurrency_bound() {
        let in_flight = AtomicUsize::new(0);
        let max_seen = AtomicUsize::new(0);
        let items: Vec<usize> = (0..20).collect();

        let bound = 3;
        let results = map_bounded(&items, bound, |&i| {
            let in_flight = &in_flight;
            let max_seen = &max_seen;
            async move {
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                max_seen.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(5)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
                Ok(i)
            }
        })
        .await;

        assert_eq!(results.len(), 20);
        assert!(max_seen.load(Ordering::SeqCst) <= bound);
        assert!(max_seen.load(Ordering::SeqCst) >= 2);
    }

    #[tokio::test]
    async fn empty_input_returns_empty_output() {
        let items: Vec<u8> = Vec::new();
        let results = map_bounded(&items, 4, |&i| async move { Ok(i) }).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn concurrency_larger_than_input_is_clamped() {
        let items = vec![1, 2];
        let results = map_bounded(&items, 16, |&i| async move { Ok(i * 2) }).await;
        let values: Vec<i32> = results.into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(values, vec![2, 4]);
    }
}
