use std::fmt::{Debug, Formatter};
use std::pin::pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// A counting join barrier in the style of Go's `sync.WaitGroup`.<br/>
/// Go の `sync.WaitGroup` と同様のカウント式合流バリア。
///
/// `add(n)` announces n tasks, each task calls `done()` when finished, and
/// `wait().await` suspends until the count reaches zero. Clones share the same
/// counter, so a handle can be moved into every spawned task.
#[derive(Clone)]
pub struct WaitGroup {
  inner: Arc<Inner>,
}

struct Inner {
  count: AtomicUsize,
  notify: Notify,
}

impl Debug for WaitGroup {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WaitGroup")
      .field("count", &self.inner.count.load(Ordering::SeqCst))
      .finish()
  }
}

impl Default for WaitGroup {
  fn default() -> Self {
    Self::new()
  }
}

impl WaitGroup {
  pub fn new() -> Self {
    Self::with_count(0)
  }

  pub fn with_count(count: usize) -> Self {
    Self {
      inner: Arc::new(Inner {
        count: AtomicUsize::new(count),
        notify: Notify::new(),
      }),
    }
  }

  /// Adds `n` to the count of outstanding tasks.
  pub fn add(&self, n: usize) {
    self.inner.count.fetch_add(n, Ordering::SeqCst);
  }

  /// Marks one task as finished.
  ///
  /// # Panics
  ///
  /// Panics when called more times than [`WaitGroup::add`] announced.
  pub fn done(&self) {
    let prev = self.inner.count.fetch_sub(1, Ordering::SeqCst);
    assert!(prev > 0, "WaitGroup::done called more times than add");
    if prev == 1 {
      self.inner.notify.notify_waiters();
    }
  }

  /// Suspends until the count reaches zero. Returns immediately if it already is.
  pub async fn wait(&self) {
    loop {
      if self.inner.count.load(Ordering::SeqCst) == 0 {
        return;
      }
      let mut notified = pin!(self.inner.notify.notified());
      // register before re-checking so a final `done` in between cannot be missed
      notified.as_mut().enable();
      if self.inner.count.load(Ordering::SeqCst) == 0 {
        return;
      }
      notified.await;
    }
  }
}
