#![no_main]

use libfuzzer_sys::fuzz_target;

use basics_core::input::TokenReader;
use basics_core::interfaces::NullPresenter;
use basics_core::session::run_calculator;

fuzz_target!(|data: &[u8]| {
    let mut reader = TokenReader::new(data);
    let mut presenter = NullPresenter;

    // Arbitrary stdin may fail to parse but should not panic
    let _ = run_calculator(&mut reader, &mut presenter);
});
