#![no_main]
use libfuzzer_sys::fuzz_target;
use loglet::config::{Config, Settings};

fuzz_target!(|data: &str| {
    // Must not panic on any config content
    let config = Config::parse(data);
    let _ = Settings::from_config(&config);
});
