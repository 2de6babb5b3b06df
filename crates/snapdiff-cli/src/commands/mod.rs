pub mod compare;
pub mod variants;
