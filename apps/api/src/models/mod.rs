pub mod assessment;
pub mod insight;
pub mod resume;
pub mod user;
