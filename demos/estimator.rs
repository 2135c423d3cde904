use simple_hyperloglog::{HyperLogLog, WyHasher128};

fn main() {
    let mut estimator1: HyperLogLog = HyperLogLog::default();
    for i in 0usize..10 {
        estimator1.add(&i.to_le_bytes());
    }
    println!("estimator1 estimate = {}", estimator1.count());

    let mut estimator2 = HyperLogLog::<WyHasher128>::new(1024).unwrap();
    for i in 0..100_000 {
        estimator2.add(&format!("item-{}", i));
    }
    println!("estimator2 estimate = {}", estimator2.count());

    if let Err(e) = HyperLogLog::<WyHasher128>::new(1000) {
        println!("estimator3 error = {}", e);
    }
}
