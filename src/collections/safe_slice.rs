use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::collections::element::Element;
use crate::collections::slice;

/// An error that occurs when a slice operation is given an invalid index.<br/>
/// スライス操作に不正なインデックスが渡された場合に発生するエラー。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SliceError {
  #[error("index {index} out of range for slice of length {len}")]
  IndexOutOfRange { index: isize, len: usize },
}

/// A trait that defines the behavior common to guarded slices.<br/>
/// ガード付きスライスに共通する振る舞いを定義するトレイト。
#[async_trait]
pub trait SliceBase<E: Element>: Debug + Send + Sync {
  /// Returns the length of this slice.<br/>
  /// このスライスの長さを返します。
  async fn len(&self) -> usize;

  /// Returns whether this slice is empty.<br/>
  /// このスライスが空かどうかを返します。
  async fn is_empty(&self) -> bool {
    self.len().await == 0
  }
}

/// A concurrency-safe slice.<br/>
/// 並行安全なスライス。
///
/// A clonable handle to a dynamically sized sequence guarded by a single
/// `tokio::sync::RwLock`. Clones share the same backing storage. Every public
/// method is one critical section: queries acquire the lock in read mode and
/// run concurrently with each other, mutations acquire it in write mode and
/// are fully serialized. The lock is released on every exit path, panics
/// included, by the RAII guards.
///
/// Reads copy data out; no method hands out a reference to the backing
/// storage.
#[derive(Debug)]
pub struct SafeSlice<E> {
  inner: Arc<RwLock<Vec<E>>>,
}

impl<E> Clone for SafeSlice<E> {
  fn clone(&self) -> Self {
    Self {
      inner: self.inner.clone(),
    }
  }
}

impl<E> Default for SafeSlice<E> {
  fn default() -> Self {
    Self {
      inner: Arc::new(RwLock::new(Vec::new())),
    }
  }
}

impl<E: Element> SafeSlice<E> {
  /// Creates a concurrency-safe slice owning `list`.<br/>
  /// `list` を所有する並行安全なスライスを作成します。
  ///
  /// Ownership of the initial sequence moves into the new instance, so no
  /// caller can alias it afterwards.
  pub fn new(list: Vec<E>) -> Self {
    Self {
      inner: Arc::new(RwLock::new(list)),
    }
  }

  /// Calls `iteratee` for every element, in order, holding the read lock for
  /// the whole traversal. Writers block until the traversal completes.<br/>
  /// 各要素に対して順番に `iteratee` を呼び出します。走査中は読み取りロックを保持します。
  pub async fn for_each<F>(&self, iteratee: F)
  where
    F: FnMut(usize, &E), {
    let guard = self.inner.read().await;
    slice::for_each(&guard, iteratee);
  }

  /// Like [`SafeSlice::for_each`], but stops the first time `iteratee` returns `false`.<br/>
  /// `iteratee` が `false` を返した時点で走査を打ち切ります。
  pub async fn for_each_with_break<F>(&self, iteratee: F)
  where
    F: FnMut(usize, &E) -> bool, {
    let guard = self.inner.read().await;
    slice::for_each_with_break(&guard, iteratee);
  }

  /// Returns the elements for which `iteratee` returns `true`. Does not mutate.<br/>
  /// `iteratee` が `true` を返した要素のみを返します。内部状態は変更しません。
  pub async fn filter<F>(&self, iteratee: F) -> Vec<E>
  where
    E: Clone,
    F: FnMut(usize, &E) -> bool, {
    let guard = self.inner.read().await;
    slice::filter(&guard, iteratee)
  }

  /// Appends `items` to the end, preserving their order.<br/>
  /// `items` を末尾に追加します。
  pub async fn append(&self, items: impl IntoIterator<Item = E>) {
    let mut guard = self.inner.write().await;
    guard.extend(items);
  }

  /// Appends `item` unless an equal element already exists.<br/>
  /// 等しい要素が存在しない場合のみ `item` を追加します。
  ///
  /// The scan and the append happen under one write lock, so no duplicate can
  /// slip in between them.
  pub async fn append_if_not_duplicate(&self, item: E)
  where
    E: PartialEq, {
    let mut guard = self.inner.write().await;
    let list = std::mem::take(&mut *guard);
    *guard = slice::append_if_not_duplicate(list, item);
  }

  /// Appends every item that is not already present, also de-duplicating
  /// against items accepted earlier in the same call.<br/>
  /// 既存要素および同一呼び出し内で受理済みの要素と重複しないものだけを追加します。
  pub async fn append_multiple_if_not_duplicate(&self, items: Vec<E>)
  where
    E: PartialEq, {
    let mut guard = self.inner.write().await;
    let list = std::mem::take(&mut *guard);
    *guard = slice::append_multiple_if_not_duplicate(list, items);
  }

  /// Returns an independent copy of the whole sequence.<br/>
  /// シーケンス全体の独立したコピーを返します。
  pub async fn load(&self) -> Vec<E>
  where
    E: Clone, {
    let guard = self.inner.read().await;
    guard.clone()
  }

  /// Returns the element at `index`; `-1` means the last element.<br/>
  /// `index` の位置の要素を返します。`-1` は末尾の要素を意味します。
  ///
  /// # Panics
  ///
  /// Panics on any other out-of-range index. Use
  /// [`SafeSlice::try_load_by_index`] for a value-level error instead.
  pub async fn load_by_index(&self, index: isize) -> E
  where
    E: Clone, {
    self
      .try_load_by_index(index)
      .await
      .unwrap_or_else(|err| panic!("{}", err))
  }

  /// Non-panicking variant of [`SafeSlice::load_by_index`].<br/>
  /// [`SafeSlice::load_by_index`] の非パニック版。
  pub async fn try_load_by_index(&self, index: isize) -> Result<E, SliceError>
  where
    E: Clone, {
    let guard = self.inner.read().await;
    let len = guard.len();
    let resolved = if index == -1 {
      len.checked_sub(1)
    } else {
      usize::try_from(index).ok()
    };
    match resolved {
      Some(i) if i < len => Ok(guard[i].clone()),
      _ => Err(SliceError::IndexOutOfRange { index, len }),
    }
  }

  /// Returns the index of the first element equal to `item`, or `None`.<br/>
  /// `item` と等しい最初の要素のインデックスを返します。存在しなければ `None`。
  pub async fn index_of(&self, item: &E) -> Option<usize>
  where
    E: PartialEq, {
    let guard = self.inner.read().await;
    slice::find_index(&guard, item)
  }

  /// Inserts `items` at `index`, shifting later elements right. An index past
  /// the end appends instead of failing.<br/>
  /// `index` の位置に `items` を挿入します。範囲外のインデックスは末尾への追加になります。
  pub async fn insert(&self, index: usize, items: Vec<E>) {
    let mut guard = self.inner.write().await;
    let list = std::mem::take(&mut *guard);
    *guard = slice::insert_at(list, index, items);
  }

  /// Removes every element equal to any of `items` (all occurrences).<br/>
  /// `items` のいずれかと等しい要素をすべて削除します。
  pub async fn remove(&self, items: &[E])
  where
    E: PartialEq, {
    let mut guard = self.inner.write().await;
    let list = std::mem::take(&mut *guard);
    *guard = slice::remove(list, items);
  }

  /// Removes and returns the element at `index`.<br/>
  /// `index` の位置の要素を削除して返します。
  ///
  /// # Panics
  ///
  /// Panics if `index` is out of range. Use
  /// [`SafeSlice::try_remove_by_index`] for a value-level error instead.
  pub async fn remove_by_index(&self, index: usize) -> E {
    self
      .try_remove_by_index(index)
      .await
      .unwrap_or_else(|err| panic!("{}", err))
  }

  /// Non-panicking variant of [`SafeSlice::remove_by_index`].<br/>
  /// [`SafeSlice::remove_by_index`] の非パニック版。
  pub async fn try_remove_by_index(&self, index: usize) -> Result<E, SliceError> {
    let mut guard = self.inner.write().await;
    if index < guard.len() {
      Ok(guard.remove(index))
    } else {
      Err(SliceError::IndexOutOfRange {
        index: index as isize,
        len: guard.len(),
      })
    }
  }

  /// Replaces up to `n` left-to-right occurrences of `old` with `new`.
  /// `n = -1` replaces all occurrences; `n = 0` replaces none.<br/>
  /// 先頭から最大 `n` 個の `old` を `new` に置き換えます。`n = -1` はすべて置き換えます。
  pub async fn replace(&self, old: &E, new: &E, n: isize)
  where
    E: PartialEq + Clone, {
    let mut guard = self.inner.write().await;
    let replaced = slice::replace(&guard, old, new, n);
    *guard = replaced;
  }

  /// Replaces the element at `index` with `new`.<br/>
  /// `index` の位置の要素を `new` に置き換えます。
  ///
  /// # Panics
  ///
  /// Panics if `index` is out of range. Use
  /// [`SafeSlice::try_replace_by_index`] for a value-level error instead.
  pub async fn replace_by_index(&self, index: usize, new: E) {
    self
      .try_replace_by_index(index, new)
      .await
      .unwrap_or_else(|err| panic!("{}", err))
  }

  /// Non-panicking variant of [`SafeSlice::replace_by_index`].<br/>
  /// [`SafeSlice::replace_by_index`] の非パニック版。
  pub async fn try_replace_by_index(&self, index: usize, new: E) -> Result<(), SliceError> {
    let mut guard = self.inner.write().await;
    if index < guard.len() {
      guard[index] = new;
      Ok(())
    } else {
      Err(SliceError::IndexOutOfRange {
        index: index as isize,
        len: guard.len(),
      })
    }
  }

  /// Returns the elements in `[n, m)`, clamped to the sequence bounds.
  /// Never panics: out-of-range bounds yield an empty result.<br/>
  /// `[n, m)` の範囲の要素を返します。範囲外の指定は空の結果になります。
  pub async fn slice_range(&self, n: usize, m: usize) -> Vec<E>
  where
    E: Clone, {
    let guard = self.inner.read().await;
    slice::slice_range(&guard, n, m)
  }
}

#[async_trait]
impl<E: Element> SliceBase<E> for SafeSlice<E> {
  // Takes the read lock like every other query; the length is only meaningful
  // relative to a consistent snapshot.
  async fn len(&self) -> usize {
    let guard = self.inner.read().await;
    guard.len()
  }
}
