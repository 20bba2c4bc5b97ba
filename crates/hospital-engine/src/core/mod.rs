pub use self::{entity::*, position::*};

pub(crate) mod entity;
pub(crate) mod position;
