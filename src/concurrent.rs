mod combinators;
mod count_down_latch;
mod wait_group;

pub use self::{combinators::*, count_down_latch::*, wait_group::*};
