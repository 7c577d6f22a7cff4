pub mod config_tests;
pub mod utils;
