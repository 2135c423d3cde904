#![no_main]

use libfuzzer_sys::fuzz_target;
use simple_hyperloglog::{HyperLogLog, WyHasher128};
use wyhash::wyhash;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let precision = (wyhash(data, 0) % 13) as u32;
    let mut estimator = HyperLogLog::<WyHasher128>::with_precision(precision).unwrap();
    let mut prev = estimator.registers().to_vec();
    for chunk in data.chunks(4) {
        estimator.add(chunk);
        assert!(estimator.count() > 0);
        assert!(estimator.registers().iter().zip(&prev).all(|(new, old)| new >= old));
        prev = estimator.registers().to_vec();

        estimator.add(chunk);
        assert_eq!(estimator.registers(), prev.as_slice());
    }
});
