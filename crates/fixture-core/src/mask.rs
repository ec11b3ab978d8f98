//! Partial-redaction functions for the "safe" CSV variant.
//!
//! Masking is a pure function of the original value and intentionally
//! destroys invertibility: the masked output keeps only the leading (and for
//! cards, trailing) characters a human needs to recognize the record.

/// Mask an RRN-like string: the first 8 characters are kept, the remainder
/// is replaced with exactly six `*`.
///
/// Inputs shorter than 8 characters are kept whole before the mask.
pub fn mask_rrn(rrn: &str) -> String {
    let keep: String = rrn.chars().take(8).collect();
    format!("{keep}******")
}

/// Mask a dashed card-like string: the first 5 and last 4 characters are
/// kept, the middle groups are replaced with `****-****-`.
///
/// Inputs too short to have distinct head and tail are returned unchanged.
pub fn mask_card(card: &str) -> String {
    if card.chars().count() < 9 {
        return card.to_string();
    }
    let head: String = card.chars().take(5).collect();
    let tail: String = {
        let count = card.chars().count();
        card.chars().skip(count - 4).collect()
    };
    format!("{head}****-****-{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_rrn() {
        assert_eq!(mask_rrn("850101-1234567"), "850101-1******");
        assert_eq!(mask_rrn("020315-3987654"), "020315-3******");
    }

    #[test]
    fn test_mask_rrn_keeps_first_eight_chars() {
        let masked = mask_rrn("991231-2000000");
        assert_eq!(&masked[..8], "991231-2");
        assert!(masked.ends_with("******"));
        assert_eq!(masked.len(), 14);
    }

    #[test]
    fn test_mask_rrn_short_input() {
        assert_eq!(mask_rrn("123"), "123******");
    }

    #[test]
    fn test_mask_card() {
        assert_eq!(mask_card("4552-1234-5678-9010"), "4552-****-****-9010");
        assert_eq!(mask_card("5105-1051-0510-5100"), "5105-****-****-5100");
    }

    #[test]
    fn test_mask_card_preserves_head_and_tail() {
        let original = "4936-1111-2222-3344";
        let masked = mask_card(original);
        assert_eq!(&masked[..5], &original[..5]);
        assert_eq!(&masked[masked.len() - 4..], &original[original.len() - 4..]);
        assert_eq!(masked.len(), original.len());
    }

    #[test]
    fn test_mask_card_short_input() {
        assert_eq!(mask_card("1234"), "1234");
    }
}
