mod utils;

mod analysis_tests;
mod config_tests;
mod export_tests;
