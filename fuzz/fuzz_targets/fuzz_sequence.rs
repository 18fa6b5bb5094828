#![no_main]

use libfuzzer_sys::fuzz_target;

use ciprobe_core::generator::SequenceGenerator;
use ciprobe_core::generator_iterative::IterativeGenerator;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Capped at 2000 terms for speed; sign taken from the high bit
    let n = i64::from(i16::from_le_bytes([data[0], data[1]])) % 2000;

    match IterativeGenerator::new().generate(n) {
        Ok(seq) => {
            assert_eq!(seq.len() as i64, n);
            for i in 2..seq.len() {
                assert_eq!(seq[i], &seq[i - 1] + &seq[i - 2]);
            }
        }
        Err(_) => assert!(n < 0),
    }
});
