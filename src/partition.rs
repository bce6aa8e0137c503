use crate::mint::Mint;

/// Prime modulus for all partition counts.
pub const MODULUS: u64 = 1_000_000_007;

type Coeff = Mint<MODULUS>;

/// Number of unordered partitions of `n` into powers of two, mod 10^9 + 7.
///
/// Each power may be used any number of times: 7 has the six partitions
/// 1+1+1+1+1+1+1, 2+1+1+1+1+1, 2+2+1+1+1, 2+2+2+1, 4+1+1+1 and 4+2+1.
/// Runs in O(n log n) time over an O(n) coefficient table, so practical
/// `n` is bounded by the table allocation.
pub fn count(n: u64) -> u64 {
    if n < 2 {
        return 1;
    }
    let n: usize = n.try_into().expect("partition table exceeds address space");

    // Largest power of two not exceeding n.
    let mut k = 1;
    while k <= n / 2 {
        k <<= 1;
    }

    let mut table = vec![Coeff::zero(); n + 1];
    table[0] = Coeff::one();

    // Fold in denominations from largest down to 1. Ascending i within a
    // pass is what lets a denomination repeat without bound.
    while k > 0 {
        for i in k..=n {
            table[i] = table[i] + table[i - k];
        }
        k >>= 1;
    }

    table[n].into()
}
