#![no_main]

use libfuzzer_sys::fuzz_target;
use revfilter_core::{Person, SignedOffByFilter};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(person) = Person::parse(input) {
        let trailer = SignedOffByFilter::trailer(&person);
        let filter = SignedOffByFilter::new(person).expect("escaped trailer compiles");
        assert!(filter.matches(&trailer));
    }
});
