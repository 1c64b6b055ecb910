use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::state::Amount;

/// Total cost of buying `count` tickets in a single purchase.
///
/// `floor(ticket_price * count * (discount_divisor + 1 - count) / discount_divisor)`,
/// computed in integers so the result matches the contract's own division.
///
/// # Errors
/// - `InvalidTicketCount` if `count` is zero
/// - `InvalidTicketPrice` if `ticket_price` is zero
/// - `InvalidDiscountParameters` if `discount_divisor` is zero or smaller than `count`
/// - `Overflow` if the intermediate product does not fit
pub fn compute_total_cost(
    ticket_price: Amount,
    count: u32,
    discount_divisor: u32,
) -> Result<Amount> {
    require!(count > 0, LotteryError::InvalidTicketCount);
    require!(ticket_price > 0, LotteryError::InvalidTicketPrice);
    require!(discount_divisor > 0, LotteryError::InvalidDiscountParameters);
    if count > discount_divisor {
        msg!(
            "Buying {} tickets exceeds discount divisor {}",
            count,
            discount_divisor
        );
        return Err(LotteryError::InvalidDiscountParameters.into());
    }

    // Non-zero: count <= discount_divisor.
    let discount_factor = (discount_divisor - count) as Amount + 1;

    let gross = ticket_price
        .checked_mul(count as Amount)
        .ok_or(LotteryError::Overflow)?
        .checked_mul(discount_factor)
        .ok_or(LotteryError::Overflow)?;

    Ok(gross / discount_divisor as Amount)
}

/// Bulk discount shown to buyers, `round((count - 1) / discount_divisor * 100)`.
///
/// Informational only; settlement uses [`compute_total_cost`].
pub fn discount_percentage(count: u32, discount_divisor: u32) -> Result<u32> {
    require!(count > 0, LotteryError::InvalidTicketCount);
    require!(discount_divisor > 0, LotteryError::InvalidDiscountParameters);

    // Half-up rounding: floor((200 * (count - 1) + divisor) / (2 * divisor)).
    let numerator = (count as u64 - 1) * 200 + discount_divisor as u64;
    let denominator = discount_divisor as u64 * 2;
    Ok((numerator / denominator) as u32)
}

/// Amount saved against paying the full price for every ticket.
pub fn compute_discount_savings(
    ticket_price: Amount,
    count: u32,
    discount_divisor: u32,
) -> Result<Amount> {
    let total_cost = compute_total_cost(ticket_price, count, discount_divisor)?;
    let full_price = ticket_price
        .checked_mul(count as Amount)
        .ok_or(LotteryError::Overflow)?;
    Ok(full_price
        .checked_sub(total_cost)
        .ok_or(LotteryError::Overflow)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{code_of, returned_code};

    const PRICE: Amount = 5_000_000;

    #[test]
    fn test_single_ticket_has_no_discount() {
        assert_eq!(compute_total_cost(PRICE, 1, 300).unwrap(), PRICE);
        for divisor in [1, 2, 300, 500, 10_000] {
            assert_eq!(compute_total_cost(7, 1, divisor).unwrap(), 7);
        }
    }

    #[test]
    fn test_ten_tickets() {
        // 5000000 * 10 * 291 / 300
        assert_eq!(compute_total_cost(PRICE, 10, 300).unwrap(), 48_500_000);
    }

    #[test]
    fn test_floor_division() {
        // 3 * 2 * 2 / 3 = 4
        assert_eq!(compute_total_cost(3, 2, 3).unwrap(), 4);
        // 1 * 2 * 299 / 300 = 1.99.. -> 1
        assert_eq!(compute_total_cost(1, 2, 300).unwrap(), 1);
    }

    #[test]
    fn test_count_equal_to_divisor() {
        // factor of 1: price * count / count
        assert_eq!(compute_total_cost(PRICE, 300, 300).unwrap(), PRICE);
    }

    #[test]
    fn test_total_non_decreasing_average_non_increasing() {
        let divisor = 300;
        let mut previous_total = 0;
        let mut previous_average = Amount::MAX;
        for count in 1..=150 {
            let total = compute_total_cost(PRICE, count, divisor).unwrap();
            let average = total / count as Amount;
            assert!(total >= previous_total, "total decreased at {}", count);
            assert!(average <= previous_average, "average increased at {}", count);
            previous_total = total;
            previous_average = average;
        }
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert_eq!(
            returned_code(compute_total_cost(PRICE, 301, 300)),
            Some(code_of(LotteryError::InvalidDiscountParameters))
        );
        assert_eq!(
            returned_code(compute_total_cost(PRICE, 1, 0)),
            Some(code_of(LotteryError::InvalidDiscountParameters))
        );
        assert_eq!(
            returned_code(compute_total_cost(PRICE, 0, 300)),
            Some(code_of(LotteryError::InvalidTicketCount))
        );
        assert_eq!(
            returned_code(compute_total_cost(0, 1, 300)),
            Some(code_of(LotteryError::InvalidTicketPrice))
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(
            returned_code(compute_total_cost(Amount::MAX, 2, 300)),
            Some(code_of(LotteryError::Overflow))
        );
    }

    #[test]
    fn test_discount_percentage() {
        assert_eq!(discount_percentage(1, 300).unwrap(), 0);
        // 9 / 300 = 3%
        assert_eq!(discount_percentage(10, 300).unwrap(), 3);
        // 3 / 200 = 1.5% -> 2
        assert_eq!(discount_percentage(4, 200).unwrap(), 2);
        // 100 / 300 = 33.3%
        assert_eq!(discount_percentage(101, 300).unwrap(), 33);
    }

    #[test]
    fn test_savings() {
        assert_eq!(compute_discount_savings(PRICE, 1, 300).unwrap(), 0);
        assert_eq!(compute_discount_savings(PRICE, 10, 300).unwrap(), 1_500_000);
    }
}
