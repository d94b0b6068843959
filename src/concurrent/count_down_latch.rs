use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_condvar::Condvar;

/// A one-shot countdown barrier.<br/>
/// 一回限りのカウントダウンバリア。
///
/// Created with an initial count; `count_down()` decrements it and
/// `wait().await` suspends until it reaches zero. Clones share the same count.
#[derive(Clone)]
pub struct CountDownLatch {
  inner: Arc<Inner>,
}

struct Inner {
  count: Mutex<usize>,
  condvar: Condvar,
}

impl Debug for CountDownLatch {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CountDownLatch").finish()
  }
}

impl PartialEq for CountDownLatch {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.inner, &other.inner)
  }
}

impl Eq for CountDownLatch {}

impl Default for CountDownLatch {
  fn default() -> Self {
    Self::new(0)
  }
}

impl CountDownLatch {
  pub fn new(count: usize) -> Self {
    Self {
      inner: Arc::new(Inner {
        count: Mutex::new(count),
        condvar: Condvar::new(),
      }),
    }
  }

  /// Returns the current count.
  pub async fn count(&self) -> usize {
    *self.inner.count.lock().await
  }

  /// Decrements the count, waking all waiters when it reaches zero.
  ///
  /// # Panics
  ///
  /// Panics when called more times than the initial count allows.
  pub async fn count_down(&self) {
    let mut count = self.inner.count.lock().await;
    assert!(*count > 0, "CountDownLatch::count_down called on a settled latch");
    *count -= 1;
    if *count == 0 {
      self.inner.condvar.notify_all();
    }
  }

  /// Suspends until the count reaches zero. Returns immediately if it already is.
  pub async fn wait(&self) {
    let mut count = self.inner.count.lock().await;
    while *count > 0 {
      count = self.inner.condvar.wait(count).await;
    }
  }
}
