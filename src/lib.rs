//! `simple-hyperloglog` is a Rust crate designed to estimate the number of distinct elements in a stream or dataset
//! using memory independent of the stream's true cardinality.
//!
//! Values are hashed into 128 bits, the lowest bits select one of `M` registers and the remaining bits define a rank.
//! The estimate is derived from the harmonic mean of registers with bias and small range corrections.
//!
//! ```
//! use simple_hyperloglog::HyperLogLog;
//!
//! let mut hll: HyperLogLog = HyperLogLog::new(1024).unwrap();
//! hll.add("apple");
//! hll.add("banana");
//! hll.add("apple");
//! assert_eq!(hll.count(), 2);
//! ```
mod error;
pub mod estimator;
pub mod hasher;

pub use error::EstimatorError;
pub use estimator::HyperLogLog;
pub use hasher::{Hasher128, Md5Hasher, WyHasher128};
