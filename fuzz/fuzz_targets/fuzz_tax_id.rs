#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Total functions: any panic is a bug.
        let valid = opme::is_valid_tax_id(s);
        let formatted = opme::format_tax_id(s);
        let cleaned = opme::clean(s);
        assert_eq!(opme::clean(cleaned.as_str()), cleaned);
        if valid {
            assert_eq!(opme::clean(formatted.as_str()), cleaned);
            assert!(opme::TaxId::parse(s).is_ok());
        }
    }
});
