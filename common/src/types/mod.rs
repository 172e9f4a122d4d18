pub mod exchanges;
pub mod restaurant;
