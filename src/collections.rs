mod element;
mod safe_slice;
mod safe_slice_test;
mod slice;

pub use self::{element::*, safe_slice::*, slice::*};
