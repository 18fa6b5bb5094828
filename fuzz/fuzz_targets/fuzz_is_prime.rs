#![no_main]

use libfuzzer_sys::fuzz_target;

use ciprobe_core::primes::is_prime;

fn naive_is_prime(x: i64) -> bool {
    if x < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= x {
        if x % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Signed 32-bit input keeps naive trial division cheap
    let x = i64::from(i32::from_le_bytes([data[0], data[1], data[2], data[3]]));
    assert_eq!(is_prime(x), naive_is_prime(x), "disagreement at {x}");
});
