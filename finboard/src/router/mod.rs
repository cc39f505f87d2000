pub mod companies;
pub mod health;
pub mod indicators;
pub mod search;

pub mod util;
