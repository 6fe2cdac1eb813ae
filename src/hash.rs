/// Standard FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 2166136261;

/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 16777619;

/// Hash bytes with 32-bit FNV-1a, starting from a caller-supplied offset
/// basis instead of the standard one.
///
/// Seeding through the basis chains the seed through every multiply round,
/// unlike XOR-ing a fixed-basis hash afterwards, which a page could undo
/// linearly. Empty input returns the basis unchanged. Integer-only, so the
/// result is bit-for-bit identical on every platform.
#[inline]
pub const fn fnv1a(bytes: &[u8], offset_basis: u32) -> u32 {
    let mut acc = offset_basis;
    let mut i = 0;

    while i < bytes.len() {
        acc = (acc ^ bytes[i] as u32).wrapping_mul(FNV_PRIME);
        i += 1;
    }

    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_empty_input_returns_basis() {
        assert_eq!(fnv1a(b"", FNV_OFFSET_BASIS), FNV_OFFSET_BASIS);
        assert_eq!(fnv1a(b"", 123456789), 123456789);
        assert_eq!(fnv1a(b"", 0), 0);
    }

    #[test]
    fn test_fnv1a_reference_vectors() {
        // Published FNV-1a 32-bit vectors under the standard basis.
        assert_eq!(fnv1a(b"a", FNV_OFFSET_BASIS), 0xe40c292c);
        assert_eq!(fnv1a(b"foobar", FNV_OFFSET_BASIS), 0xbf9cf968);
    }

    #[test]
    fn test_fnv1a_custom_basis() {
        assert_eq!(fnv1a(b"Arial", 123456789), 3213730124);
        assert_ne!(fnv1a(b"x", 1), fnv1a(b"x", 2));
    }

    #[test]
    fn test_fnv1a_is_const() {
        const H: u32 = fnv1a(b"static", FNV_OFFSET_BASIS);
        assert_eq!(H, fnv1a(b"static", FNV_OFFSET_BASIS));
    }
}
