#[inline(always)]
pub(crate) const fn ceil_div(n: usize, d: usize) -> usize {
    (n + (d - 1)) / d
}

// return next multiple of d after n, such that result % d == 0 , and result >= n
#[inline(always)]
pub(crate) const fn next_multiple_of(n: usize, d: usize) -> usize {
    ceil_div(n, d) * d
}

/// `dst[i] ^= src[i]` over the common prefix.
#[inline(always)]
pub(crate) fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

/// Equality that inspects every byte regardless of where the first difference is.
pub(crate) fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
