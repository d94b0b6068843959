//! Pure, copy-returning slice transforms.
//!
//! These carry the traversal and mutation logic that [`crate::collections::SafeSlice`]
//! runs under its lock. None of them synchronize anything on their own.

/// Calls `iteratee` for every element, in order.
pub fn for_each<T, F>(list: &[T], mut iteratee: F)
where
  F: FnMut(usize, &T), {
  for (index, item) in list.iter().enumerate() {
    iteratee(index, item);
  }
}

/// Calls `iteratee` for every element until it returns `false`.
pub fn for_each_with_break<T, F>(list: &[T], mut iteratee: F)
where
  F: FnMut(usize, &T) -> bool, {
  for (index, item) in list.iter().enumerate() {
    if !iteratee(index, item) {
      break;
    }
  }
}

/// Returns the elements for which `iteratee` returns `true`.
pub fn filter<T, F>(list: &[T], mut iteratee: F) -> Vec<T>
where
  T: Clone,
  F: FnMut(usize, &T) -> bool, {
  list
    .iter()
    .enumerate()
    .filter(|(index, item)| iteratee(*index, *item))
    .map(|(_, item)| item.clone())
    .collect()
}

/// Appends `item` unless an equal element already exists.
pub fn append_if_not_duplicate<T>(mut list: Vec<T>, item: T) -> Vec<T>
where
  T: PartialEq, {
  if !list.contains(&item) {
    list.push(item);
  }
  list
}

/// Appends every item that is not already present, checking against both the
/// existing elements and the items accepted earlier in the same call.
pub fn append_multiple_if_not_duplicate<T>(mut list: Vec<T>, items: Vec<T>) -> Vec<T>
where
  T: PartialEq, {
  for item in items {
    if !list.contains(&item) {
      list.push(item);
    }
  }
  list
}

/// Removes every occurrence of any of `items`.
pub fn remove<T>(mut list: Vec<T>, items: &[T]) -> Vec<T>
where
  T: PartialEq, {
  if list.is_empty() || items.is_empty() {
    return list;
  }
  list.retain(|item| !items.contains(item));
  list
}

/// Returns a copy with up to `n` left-to-right occurrences of `old` replaced by `new`.
/// `n = -1` replaces all occurrences; `n = 0` replaces none.
pub fn replace<T>(list: &[T], old: &T, new: &T, n: isize) -> Vec<T>
where
  T: PartialEq + Clone, {
  let mut remaining = n;
  let mut result = list.to_vec();
  for item in result.iter_mut() {
    if *item == *old && remaining != 0 {
      *item = new.clone();
      remaining -= 1;
    }
  }
  result
}

/// Returns the index of the first element equal to `target`, or `None`.
pub fn find_index<T>(list: &[T], target: &T) -> Option<usize>
where
  T: PartialEq, {
  list.iter().position(|item| item == target)
}

/// Inserts `items` at `index`, shifting later elements right.
/// An index greater than the length appends at the end instead of failing.
pub fn insert_at<T>(mut list: Vec<T>, index: usize, items: Vec<T>) -> Vec<T> {
  if items.is_empty() {
    return list;
  }
  let index = index.min(list.len());
  list.splice(index..index, items);
  list
}

/// Returns the elements in `[n, m)`, clamped to the slice bounds.
/// Equivalent to `&list[n..m]` but never panics: out-of-range bounds yield an
/// empty result instead.
pub fn slice_range<T>(list: &[T], n: usize, m: usize) -> Vec<T>
where
  T: Clone, {
  if n >= m || n >= list.len() {
    return Vec::new();
  }
  let m = m.min(list.len());
  list[n..m].to_vec()
}
