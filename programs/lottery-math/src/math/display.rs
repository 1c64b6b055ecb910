use crate::state::{Amount, Bracket, TicketNumber, BRACKET_COUNT};

/// Renders `amount` smallest units as a decimal string with trailing zeros
/// trimmed, e.g. `48500000` at 6 decimals is `"48.5"`.
pub fn format_units(amount: Amount, decimals: u32) -> String {
    let Some(scale) = 10u128.checked_pow(decimals) else {
        return amount.to_string();
    };
    let whole = amount / scale;
    let fraction = amount % scale;
    if fraction == 0 {
        return whole.to_string();
    }

    let digits = format!("{:0width$}", fraction, width = decimals as usize);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

pub fn bracket_label(bracket: Bracket) -> String {
    if bracket == Bracket::TOP {
        format!("Match all {}", BRACKET_COUNT)
    } else {
        format!("Match first {}", bracket.matched_digits())
    }
}

/// The six matchable digits of a ticket or winning number, most significant
/// first. The leading `1` of the seven-digit encoding is dropped.
pub fn significant_digits(number: TicketNumber) -> [u8; BRACKET_COUNT] {
    let mut digits = [0u8; BRACKET_COUNT];
    let mut rest = number;
    for digit in digits.iter_mut().rev() {
        *digit = (rest % 10) as u8;
        rest /= 10;
    }
    digits
}
