pub mod category;
pub mod topic;
pub mod types;
