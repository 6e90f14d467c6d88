#![no_main]

use libfuzzer_sys::fuzz_target;

use basics_cli::output::format_value;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let value = f64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);

    let s = format_value(value);

    // Finite output must read back as the same value
    if value.is_finite() {
        let parsed: f64 = s.parse().expect("formatted value should parse");
        assert_eq!(parsed.to_bits(), value.to_bits());
    }
});
