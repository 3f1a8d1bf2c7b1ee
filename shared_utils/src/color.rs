/// Derives a stable `#RRGGBB` accent colour from `value`.
///
/// Rolls a 32-bit `hash * 31 + code_unit` over the UTF-16 code units of the
/// input with wrapping arithmetic, then keeps the low 24 bits.
#[must_use]
pub fn derive_color(value: &str) -> String {
    let hash = value.encode_utf16().fold(0_i32, |hash, unit| {
        i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    });

    format!("#{:06X}", hash & 0x00FF_FFFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_color(color: &str) -> bool {
        color.len() == 7
            && color.starts_with('#')
            && color[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
    }

    #[test]
    fn empty_string_is_black() {
        assert_eq!(derive_color(""), "#000000");
    }

    #[test]
    fn short_inputs_are_zero_padded() {
        assert_eq!(derive_color("a"), "#000061");
        // 97 * 31 + 98
        assert_eq!(derive_color("ab"), "#000C21");
    }

    #[test]
    fn is_deterministic() {
        for input in ["Apple", "Banana", "क", "🦀 crab", "a much longer lesson name"] {
            assert_eq!(derive_color(input), derive_color(input));
        }
    }

    #[test]
    fn always_six_uppercase_hex_digits() {
        for input in ["", "x", "Elephant", "ज़ेब्रा", "🦀🦀🦀🦀🦀🦀🦀🦀", &"z".repeat(500)] {
            let color = derive_color(input);
            assert!(is_hex_color(&color), "{input:?} produced {color}");
        }
    }

    #[test]
    fn negative_hashes_are_masked() {
        // Long inputs overflow into negative i32 territory; the mask must
        // still produce a positive 24-bit value.
        let color = derive_color(&"Zebra".repeat(20));
        assert!(is_hex_color(&color));
    }

    #[test]
    fn hashes_utf16_code_units() {
        // Characters outside the BMP contribute two surrogate units.
        let crab = derive_color("🦀");
        let expected = {
            let units: Vec<u16> = "🦀".encode_utf16().collect();
            let hash = i32::from(units[0])
                .wrapping_mul(31)
                .wrapping_add(i32::from(units[1]));
            format!("#{:06X}", hash & 0x00FF_FFFF)
        };
        assert_eq!(crab, expected);
    }
}
