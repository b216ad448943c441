pub mod approval;
pub mod create;
pub mod query;
