pub mod companies;
pub mod indicators;
