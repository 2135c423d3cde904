//! HyperLogLog estimator allows to estimate number of distinct elements
//! in the stream or dataset and is defined with a single runtime parameter:
//! - `register_count`: number of registers `M`, which must be a power of two.
//!   The lowest `P = log2(M)` bits of each hash select a register.
//!
//! # Data-structure design
//!
//! Registers are stored as a plain `Vec<u8>` of length `M`, which is the only heap
//! allocation and never grows. A register holds the maximum rank observed among all
//! hashes routed to it. The rank of a 128-bit hash `h` is computed from `w = h >> P`:
//! - `rank = 128 - P - bit_length(w) + 1` when `w != 0`
//! - `rank = 128 - P + 1` when `w == 0`
//!
//! Both cases reduce to `leading_zeros(w) - P + 1`, so register values are bounded
//! by `129 - P` and fit into `u8`.
//!
//! # Estimation
//!
//! The raw estimate is `alpha(M) * M^2 / sum(2^-register)`. When it is at most `2.5 * M`
//! and some registers are still zero, linear counting `M * ln(M / zeros)` is used instead.
//! The result is rounded half away from zero.
//!
//! Expected relative error is `1.04 / sqrt(M)`:
//!   M = 16: 26%
//!   M = 1024: 3.25%
//!   M = 4096: 1.62%

use std::fmt::{Debug, Formatter};
use std::mem::{size_of, size_of_val};

use tracing::{debug, warn};

use crate::error::EstimatorError;
use crate::hasher::{Hasher128, Md5Hasher};

/// Precision used by `HyperLogLog::default()` (4096 registers)
pub const DEFAULT_PRECISION: u32 = 12;
/// Largest supported precision (number of register index bits)
pub const MAX_PRECISION: u32 = 32;

pub struct HyperLogLog<H: Hasher128 = Md5Hasher> {
    /// Register ranks, `2^precision` elements
    registers: Vec<u8>,
    /// Number of hash bits used for register index
    precision: u32,
    hasher: H,
}

impl<H: Hasher128> HyperLogLog<H> {
    /// Creates new instance of `HyperLogLog` with `register_count` registers.
    ///
    /// Fails with `EstimatorError::InvalidConfiguration` unless `register_count`
    /// is a positive power of two.
    pub fn new(register_count: usize) -> Result<Self, EstimatorError> {
        if !register_count.is_power_of_two() {
            warn!(register_count, "register count is not a positive power of two");
            return Err(EstimatorError::InvalidConfiguration { register_count });
        }
        Self::with_precision(register_count.trailing_zeros())
    }

    /// Creates new instance of `HyperLogLog` with `2^precision` registers
    pub fn with_precision(precision: u32) -> Result<Self, EstimatorError> {
        let max = MAX_PRECISION.min(usize::BITS - 1);
        if precision > max {
            warn!(precision, max, "precision is out of range");
            return Err(EstimatorError::InvalidPrecision { precision, max });
        }
        Ok(Self::from_precision(precision))
    }

    /// Allocate zeroed registers, `precision` assumed to be valid
    fn from_precision(precision: u32) -> Self {
        let register_count = 1usize << precision;
        debug!(register_count, precision, "creating HyperLogLog estimator");
        Self {
            registers: vec![0; register_count],
            precision,
            hasher: H::default(),
        }
    }

    /// Insert an item into `HyperLogLog`.
    ///
    /// Inserting the same item more than once has no further effect.
    #[inline]
    pub fn add<T: AsRef<[u8]> + ?Sized>(&mut self, item: &T) {
        let hash = self.hasher.hash128(item.as_ref());
        self.add_hash(hash);
    }

    /// Insert 128-bit hash into `HyperLogLog`
    #[inline]
    pub fn add_hash(&mut self, hash: u128) {
        let (idx, rank) = self.index_and_rank(hash);
        let register = &mut self.registers[idx];
        if rank > *register {
            *register = rank;
        }
    }

    /// Split hash into register index (low bits) and rank of the remaining high bits
    #[inline]
    fn index_and_rank(&self, hash: u128) -> (usize, u8) {
        let idx = (hash & ((1u128 << self.precision) - 1)) as usize;
        let w = hash >> self.precision;
        // `w` has at least `precision` leading zeros, rank is in [1..129 - precision]
        let rank = w.leading_zeros() - self.precision + 1;
        (idx, rank as u8)
    }

    /// Return cardinality estimate
    pub fn count(&self) -> usize {
        let m = self.registers.len() as f64;
        let (sum, zeros) = self
            .registers
            .iter()
            .fold((0.0f64, 0usize), |(sum, zeros), &rank| {
                (sum + 2f64.powi(-i32::from(rank)), zeros + usize::from(rank == 0))
            });

        let mut estimate = alpha(self.registers.len()) * m * m / sum;

        // small range correction, only possible while some registers are unset
        if estimate <= 2.5 * m && zeros > 0 {
            estimate = m * (m / zeros as f64).ln();
        }

        estimate.round() as usize
    }

    /// Return number of registers
    #[inline]
    pub fn register_count(&self) -> usize {
        self.registers.len()
    }

    /// Return number of hash bits used for register index
    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Return register ranks
    #[inline]
    pub fn registers(&self) -> &[u8] {
        &self.registers
    }

    /// Return number of registers set to 0
    pub fn zero_registers(&self) -> usize {
        self.registers.iter().filter(|&&rank| rank == 0).count()
    }

    /// Return whether nothing has been inserted yet
    pub fn is_empty(&self) -> bool {
        self.registers.iter().all(|&rank| rank == 0)
    }

    /// Return memory size of `HyperLogLog`
    pub fn size_of(&self) -> usize {
        size_of::<Self>() + size_of_val(self.registers.as_slice())
    }
}

impl<H: Hasher128> Default for HyperLogLog<H> {
    fn default() -> Self {
        Self::from_precision(DEFAULT_PRECISION)
    }
}

impl<H: Hasher128 + Clone> Clone for HyperLogLog<H> {
    fn clone(&self) -> Self {
        Self {
            registers: self.registers.clone(),
            precision: self.precision,
            hasher: self.hasher.clone(),
        }
    }
}

impl<H: Hasher128> PartialEq for HyperLogLog<H> {
    /// Compare register banks
    fn eq(&self, rhs: &Self) -> bool {
        self.registers == rhs.registers
    }
}

impl<H: Hasher128> Debug for HyperLogLog<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ registers: {}, zeros: {}, estimate: {}, size: {} }}",
            self.register_count(),
            self.zero_registers(),
            self.count(),
            self.size_of()
        )
    }
}

/// Parameter for bias correction
#[inline]
pub fn alpha(m: usize) -> f64 {
    match m {
        0..=15 => 0.5,
        16..=31 => 0.673,
        32..=63 => 0.697,
        64..=127 => 0.709,
        _ => 0.7213 / (1.0 + 1.079 / (m as f64)),
    }
}
