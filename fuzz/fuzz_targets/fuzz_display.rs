#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = opme::truncate(s, data.len() % 64);
        let _ = opme::format_date(s);
        let _ = opme::format_date_time(s);
        let _ = opme::format_date_for_api(s);
        let _ = opme::parse_date_from_api(s);
        let _ = opme::operation_label(s);
    }
});
