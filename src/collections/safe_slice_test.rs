#[cfg(test)]
mod tests {
  use futures::future::join_all;

  use crate::collections::{SafeSlice, SliceBase, SliceError};

  async fn build_test_safe_slice(start: i32, end: i32) -> SafeSlice<i32> {
    let ss = SafeSlice::default();
    for i in start..end {
      ss.append([i]).await;
    }
    ss
  }

  #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
  async fn test_for_each_holds_a_consistent_snapshot() {
    let ss = build_test_safe_slice(0, 100).await;

    let mut handles = Vec::new();
    for _ in 0..50 {
      let ss = ss.clone();
      handles.push(tokio::spawn(async move {
        ss.for_each(|index, item| assert_eq!(index as i32, *item)).await;
      }));
    }
    for joined in join_all(handles).await {
      joined.unwrap();
    }
  }

  #[tokio::test]
  async fn test_for_each_with_break_stops_early() {
    let ss = build_test_safe_slice(0, 100).await;
    let mut seen = Vec::new();
    ss.for_each_with_break(|_, item| {
      let keep_going = *item < 50;
      if keep_going {
        seen.push(*item);
      }
      keep_going
    })
    .await;
    assert_eq!(seen, (0..50).collect::<Vec<_>>());
  }

  #[tokio::test]
  async fn test_filter_does_not_mutate() {
    let ss = build_test_safe_slice(0, 10).await;
    let below = ss.filter(|_, item| *item < 5).await;
    assert_eq!(below, (0..5).collect::<Vec<_>>());
    assert_eq!(ss.load().await, (0..10).collect::<Vec<_>>());
  }

  #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
  async fn test_append_under_contention_loses_nothing() {
    let ss = SafeSlice::default();

    let mut handles = Vec::new();
    for i in 0..1000 {
      let ss = ss.clone();
      handles.push(tokio::spawn(async move {
        ss.append([i]).await;
      }));
    }
    for joined in join_all(handles).await {
      joined.unwrap();
    }

    let mut loaded = ss.load().await;
    assert_eq!(loaded.len(), 1000);
    loaded.sort_unstable();
    assert_eq!(loaded, (0..1000).collect::<Vec<_>>());
  }

  #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
  async fn test_append_if_not_duplicate_under_contention() {
    let ss = SafeSlice::default();

    let mut handles = Vec::new();
    for i in 0..1000 {
      let ss = ss.clone();
      handles.push(tokio::spawn(async move {
        ss.append_if_not_duplicate(i % 500).await;
      }));
    }
    for joined in join_all(handles).await {
      joined.unwrap();
    }

    let mut loaded = ss.load().await;
    assert_eq!(loaded.len(), 500);
    loaded.sort_unstable();
    assert_eq!(loaded, (0..500).collect::<Vec<_>>());
  }

  #[tokio::test]
  async fn test_append_multiple_if_not_duplicate() {
    let ss = SafeSlice::new(vec![1, 2]);
    ss.append_multiple_if_not_duplicate(vec![2, 3, 3, 4]).await;
    assert_eq!(ss.load().await, vec![1, 2, 3, 4]);
  }

  #[tokio::test]
  async fn test_load_returns_an_independent_copy() {
    let ss = build_test_safe_slice(0, 3).await;
    let mut copy = ss.load().await;
    copy.push(99);
    assert_eq!(ss.load().await, vec![0, 1, 2]);
  }

  #[tokio::test]
  async fn test_load_by_index_minus_one_is_last() {
    let ss = build_test_safe_slice(0, 4).await;
    assert_eq!(ss.load_by_index(-1).await, ss.load_by_index(3).await);
    assert_eq!(ss.load_by_index(0).await, 0);
  }

  #[tokio::test]
  #[should_panic(expected = "index 10 out of range for slice of length 4")]
  async fn test_load_by_index_panics_out_of_range() {
    let ss = build_test_safe_slice(0, 4).await;
    ss.load_by_index(10).await;
  }

  #[tokio::test]
  async fn test_try_load_by_index() {
    let ss = build_test_safe_slice(0, 4).await;
    assert_eq!(ss.try_load_by_index(2).await, Ok(2));
    assert_eq!(ss.try_load_by_index(-1).await, Ok(3));
    assert_eq!(
      ss.try_load_by_index(10).await,
      Err(SliceError::IndexOutOfRange { index: 10, len: 4 })
    );
    assert_eq!(
      ss.try_load_by_index(-2).await,
      Err(SliceError::IndexOutOfRange { index: -2, len: 4 })
    );
  }

  #[tokio::test]
  async fn test_index_of() {
    let ss = SafeSlice::new(vec![5, 6, 7, 6]);
    assert_eq!(ss.index_of(&6).await, Some(1));
    assert_eq!(ss.index_of(&9).await, None);
  }

  #[tokio::test]
  async fn test_insert_shifts_right() {
    let ss = SafeSlice::new(vec![1, 4]);
    ss.insert(1, vec![2, 3]).await;
    assert_eq!(ss.load().await, vec![1, 2, 3, 4]);
  }

  #[tokio::test]
  async fn test_insert_out_of_range_appends() {
    let ss = SafeSlice::new(vec![1, 2]);
    ss.insert(100, vec![3]).await;
    assert_eq!(ss.load().await, vec![1, 2, 3]);
  }

  #[tokio::test]
  async fn test_len_and_is_empty() {
    let ss = build_test_safe_slice(0, 3).await;
    assert_eq!(ss.len().await, 3);
    assert!(!ss.is_empty().await);
    assert!(SafeSlice::<i32>::default().is_empty().await);
  }

  #[tokio::test]
  async fn test_remove_drops_all_occurrences() {
    let ss = SafeSlice::new(vec![1, 2, 1, 3, 1]);
    ss.remove(&[1, 3]).await;
    assert_eq!(ss.load().await, vec![2]);
  }

  #[tokio::test]
  async fn test_remove_by_index() {
    let ss = SafeSlice::new(vec![10, 20, 30]);
    assert_eq!(ss.remove_by_index(1).await, 20);
    assert_eq!(ss.load().await, vec![10, 30]);
  }

  #[tokio::test]
  #[should_panic(expected = "out of range")]
  async fn test_remove_by_index_panics_out_of_range() {
    let ss = SafeSlice::new(vec![10, 20, 30]);
    ss.remove_by_index(3).await;
  }

  #[tokio::test]
  async fn test_try_remove_by_index_out_of_range() {
    let ss = SafeSlice::new(vec![10]);
    assert_eq!(
      ss.try_remove_by_index(5).await,
      Err(SliceError::IndexOutOfRange { index: 5, len: 1 })
    );
    assert_eq!(ss.load().await, vec![10]);
  }

  #[tokio::test]
  async fn test_replace_bounded_count() {
    let ss = SafeSlice::new(vec![0, 1, 0, 1, 0]);
    ss.replace(&0, &9, 2).await;
    assert_eq!(ss.load().await, vec![9, 1, 9, 1, 0]);

    let ss = SafeSlice::new(vec![0, 1, 0, 1, 0]);
    ss.replace(&0, &9, -1).await;
    assert_eq!(ss.load().await, vec![9, 1, 9, 1, 9]);

    let ss = SafeSlice::new(vec![0, 1, 0, 1, 0]);
    ss.replace(&0, &9, 0).await;
    assert_eq!(ss.load().await, vec![0, 1, 0, 1, 0]);
  }

  #[tokio::test]
  async fn test_replace_by_index() {
    let ss = SafeSlice::new(vec![1, 2, 3]);
    ss.replace_by_index(2, 9).await;
    assert_eq!(ss.load().await, vec![1, 2, 9]);
  }

  #[tokio::test]
  #[should_panic(expected = "index 3 out of range for slice of length 3")]
  async fn test_replace_by_index_panics_out_of_range() {
    let ss = SafeSlice::new(vec![1, 2, 3]);
    ss.replace_by_index(3, 9).await;
  }

  #[tokio::test]
  async fn test_slice_range_clamps_instead_of_panicking() {
    let ss = build_test_safe_slice(0, 4).await;
    assert_eq!(ss.slice_range(1, 3).await, vec![1, 2]);
    assert_eq!(ss.slice_range(1, 6).await, vec![1, 2, 3]);
    assert_eq!(ss.slice_range(5, 10).await, Vec::<i32>::new());
    assert_eq!(ss.slice_range(10, 5).await, Vec::<i32>::new());
  }

  #[tokio::test]
  async fn test_clones_share_storage() {
    let ss = SafeSlice::new(vec![1]);
    let other = ss.clone();
    other.append([2]).await;
    assert_eq!(ss.load().await, vec![1, 2]);
  }
}
