use std::fmt::Debug;
use std::panic;
use std::sync::Arc;

use futures::future::join_all;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::collections::SafeSlice;

/// Waits for every handle, then re-raises the first captured panic on the
/// calling task. Successful results come back in handle order.
async fn join_settled<U>(handles: Vec<JoinHandle<U>>) -> Vec<U> {
  let mut results = Vec::with_capacity(handles.len());
  let mut first_panic = None;
  for joined in join_all(handles).await {
    match joined {
      Ok(value) => results.push(value),
      Err(err) => {
        if first_panic.is_none() && err.is_panic() {
          first_panic = Some(err.into_panic());
        }
      }
    }
  }
  if let Some(payload) = first_panic {
    panic::resume_unwind(payload);
  }
  results
}

/// Calls `iteratee(index, item)` for every element on its own task and waits
/// until all of them have completed.<br/>
/// 各要素に対して `iteratee(index, item)` を個別のタスクで呼び出し、すべての完了を待ちます。
///
/// Invocations may run in any order and in true parallel. No result is
/// collected, so `iteratee` must perform its own side effects; beyond the join
/// barrier this routine provides no synchronization for them. An empty input
/// returns immediately without spawning anything.
///
/// If an invocation panics, the remaining tasks still run to completion and
/// the first panic is then re-raised on the calling task.
pub async fn parallel_for_each<T, F>(list: Vec<T>, iteratee: F)
where
  T: Send + 'static,
  F: Fn(usize, T) + Send + Sync + 'static, {
  if list.is_empty() {
    return;
  }
  let iteratee = Arc::new(iteratee);
  let mut handles = Vec::with_capacity(list.len());
  for (index, item) in list.into_iter().enumerate() {
    let iteratee = iteratee.clone();
    handles.push(tokio::spawn(async move { iteratee(index, item) }));
  }
  join_settled(handles).await;
}

/// Calls `iteratee(index, item)` for every element on its own detached task and
/// returns immediately, without waiting for completion.<br/>
/// 各要素に対して `iteratee(index, item)` を切り離されたタスクで呼び出し、完了を待たずに即座に戻ります。
///
/// This is a deliberately weaker contract than [`parallel_for_each`]: when this
/// function returns, the side effects of `iteratee` may be only partially
/// applied. Callers needing completion must bring their own barrier inside
/// `iteratee` (for example a [`crate::concurrent::WaitGroup`]). A task that
/// panics takes only its own effect with it; nothing is reported back.
///
/// Must be called from within a tokio runtime.
pub fn concurrent_for_each<T, F>(list: Vec<T>, iteratee: F)
where
  T: Send + 'static,
  F: Fn(usize, T) + Send + Sync + 'static, {
  debug!(tasks = list.len(), "detaching per-element tasks");
  let iteratee = Arc::new(iteratee);
  for (index, item) in list.into_iter().enumerate() {
    let iteratee = iteratee.clone();
    tokio::spawn(async move {
      iteratee(index, item);
    });
  }
}

/// Calls `iteratee(index, item)` for every element on its own task, waits for
/// all of them and returns the results positionally aligned with the input:
/// `result[i] == iteratee(i, input[i])` regardless of completion order.<br/>
/// 各要素に対して `iteratee(index, item)` を個別のタスクで呼び出し、入力と位置が揃った結果を返します。
///
/// An empty input yields an empty vector. Panic handling matches
/// [`parallel_for_each`].
pub async fn parallel_map<T, U, F>(list: Vec<T>, iteratee: F) -> Vec<U>
where
  T: Send + 'static,
  U: Send + 'static,
  F: Fn(usize, T) -> U + Send + Sync + 'static, {
  if list.is_empty() {
    return Vec::new();
  }
  let iteratee = Arc::new(iteratee);
  let mut handles = Vec::with_capacity(list.len());
  for (index, item) in list.into_iter().enumerate() {
    let iteratee = iteratee.clone();
    handles.push(tokio::spawn(async move { iteratee(index, item) }));
  }
  join_settled(handles).await
}

/// Schedules `iteratee(index, item)` for every element on its own detached task
/// and immediately returns a [`SafeSlice`] of result slots, one per input
/// element, each initially `None`.<br/>
/// 各要素に対して `iteratee(index, item)` を切り離されたタスクで実行し、結果スロットの
/// [`SafeSlice`] を即座に返します。各スロットの初期値は `None` です。
///
/// Slot `i` becomes `Some(iteratee(i, input[i]))` only once the corresponding
/// task has finished; until the caller has independently ensured completion
/// (an external barrier, or redesigning around [`parallel_map`]), reads may
/// still observe `None` in any position. A panicking task leaves its slot
/// `None` forever. An empty input yields an empty, fully settled slice.
///
/// Must be called from within a tokio runtime.
pub fn concurrent_map<T, U, F>(list: Vec<T>, iteratee: F) -> SafeSlice<Option<U>>
where
  T: Send + 'static,
  U: Debug + Send + Sync + 'static,
  F: Fn(usize, T) -> U + Send + Sync + 'static, {
  debug!(tasks = list.len(), "detaching per-element tasks with result slots");
  let slots = std::iter::repeat_with(|| None).take(list.len()).collect();
  let result = SafeSlice::new(slots);
  let iteratee = Arc::new(iteratee);
  for (index, item) in list.into_iter().enumerate() {
    let iteratee = iteratee.clone();
    let result = result.clone();
    tokio::spawn(async move {
      let value = iteratee(index, item);
      result.replace_by_index(index, Some(value)).await;
    });
  }
  result
}
