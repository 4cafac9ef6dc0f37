#![no_main]
use libfuzzer_sys::fuzz_target;
use loglet::fmt::{FormatTemplate, FormatValues, finish_line};

fuzz_target!(|data: &str| {
    // Must not panic on any template string, multibyte text included
    let template = FormatTemplate::parse(data);

    let values = FormatValues::new()
        .date_time("2025-01-01 00:00:00")
        .log_type("[Info]")
        .user_name("fuzz")
        .message(data);
    let _ = finish_line(&template.render(&values));
});
