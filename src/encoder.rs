use wordlife_common::BITS_PER_CHAR;

/// Converts a word into its flat bit pattern, one 8-bit group per character,
/// most significant bit first.
///
/// Code points wider than 8 bits keep only their low byte. No normalization
/// (case, whitespace) happens here.
pub fn encode(word: &str) -> Vec<u8> {
    let mut bits = Vec::with_capacity(word.chars().count() * BITS_PER_CHAR);
    for ch in word.chars() {
        let byte = (ch as u32 & 0xFF) as u8;
        for shift in (0..BITS_PER_CHAR).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}
