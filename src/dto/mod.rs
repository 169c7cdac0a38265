pub mod categories;
pub mod topics;
