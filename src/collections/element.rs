use std::fmt::Debug;
use std::sync::Arc;

/// Fundamental constraints for elements stored in a [`crate::collections::SafeSlice`].
///
/// Requiring `Debug`, `Send`, `Sync` and `'static` keeps element types safe to move
/// between tasks. Equality and cloning are per-operation bounds, not part of this trait.
pub trait Element: Debug + Send + Sync + 'static {}

macro_rules! impl_element_for_primitives {
  ($($ty:ty),* $(,)?) => {
    $(impl Element for $ty {})*
  };
}

impl_element_for_primitives!(i8, i16, i32, i64, i128, isize);
impl_element_for_primitives!(u8, u16, u32, u64, u128, usize);
impl_element_for_primitives!(f32, f64, bool, char);

impl Element for String {}
impl Element for &'static str {}

impl<T> Element for Option<T> where T: Debug + Send + Sync + 'static {}

impl<T> Element for Box<T> where T: Debug + Send + Sync + 'static {}

impl<T> Element for Arc<T> where T: Debug + Send + Sync + 'static {}

impl<T> Element for Vec<T> where T: Debug + Send + Sync + 'static {}
