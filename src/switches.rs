// src/switches.rs

// Switch-line patterns for the RF front-end boards. One code per group is
// asserted on the GPIO lines at a time; nothing here enforces that.

// RF filter switches (BPF board)
pub const LPF: u8 = 0b0000_0001;
pub const BPF1: u8 = 0b0000_1011;
pub const BPF2: u8 = 0b0000_1110;
pub const BPF3: u8 = 0b0000_0100;

pub const BPF4: u8 = 0b0001_0000;
pub const BPF5: u8 = 0b1011_0000;
pub const BPF6: u8 = 0b1110_0000;
pub const HPF: u8 = 0b0100_0000;

// RF range switches (Main board)
pub const RANGE0: u8 = 0b0111_1000;    // 0-12 MHz
pub const RANGE1: u8 = 0b0100_1000;    // 12-30 MHz
pub const RANGE2: u8 = 0b0011_0000;    // 30-60 MHz
pub const RANGE3: u8 = 0b0110_0010;    // 60-120 MHz
pub const RANGE4: u8 = 0b0110_0100;    // 120-250 MHz
pub const RANGE5: u8 = 0b0110_0110;    // 250-1000 MHz
pub const RANGE6: u8 = 0b0110_0000;    // >1000 MHz

#[cfg(test)]
mod tests {
    use super::*;

    const FILTERS: [u8; 8] = [LPF, BPF1, BPF2, BPF3, BPF4, BPF5, BPF6, HPF];
    const RANGES: [u8; 7] = [RANGE0, RANGE1, RANGE2, RANGE3, RANGE4, RANGE5, RANGE6];

    fn assert_pairwise_distinct(codes: &[u8]) {
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn filter_codes_match_board_wiring() {
        assert_eq!(LPF, 0b0000_0001);
        assert_eq!(BPF1, 0b0000_1011);
        assert_eq!(BPF2, 0b0000_1110);
        assert_eq!(BPF3, 0b0000_0100);
        assert_eq!(BPF4, 0b0001_0000);
        assert_eq!(BPF5, 0b1011_0000);
        assert_eq!(BPF6, 0b1110_0000);
        assert_eq!(HPF, 0b0100_0000);
    }

    #[test]
    fn range_codes_match_board_wiring() {
        assert_eq!(RANGE0, 0b0111_1000);
        assert_eq!(RANGE1, 0b0100_1000);
        assert_eq!(RANGE2, 0b0011_0000);
        assert_eq!(RANGE3, 0b0110_0010);
        assert_eq!(RANGE4, 0b0110_0100);
        assert_eq!(RANGE5, 0b0110_0110);
        assert_eq!(RANGE6, 0b0110_0000);
    }

    #[test]
    fn filter_codes_are_distinct() {
        assert_pairwise_distinct(&FILTERS);
    }

    #[test]
    fn range_codes_are_distinct() {
        assert_pairwise_distinct(&RANGES);
    }
}
