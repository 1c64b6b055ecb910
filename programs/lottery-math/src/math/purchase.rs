use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::state::{Amount, LotteryLimits, LotteryRound, TicketNumber, TicketRange};

/// Parses a comma-separated list of ticket numbers as typed by a buyer,
/// e.g. `"1234567, 1000001"`.
///
/// # Errors
/// - `InvalidTicketCount` if the input holds no numbers
/// - `InvalidTicketNumber` if an entry is not an integer or lies outside `range`
pub fn parse_ticket_numbers(input: &str, range: &TicketRange) -> Result<Vec<TicketNumber>> {
    require!(!input.trim().is_empty(), LotteryError::InvalidTicketCount);

    input
        .split(',')
        .map(str::trim)
        .map(|entry| {
            let number = entry.parse::<TicketNumber>().map_err(|_| {
                msg!("Unparsable ticket number {:?}", entry);
                LotteryError::InvalidTicketNumber
            })?;
            range.validate(number)
        })
        .collect()
}

/// Checks a batch of chosen numbers before it is submitted.
pub fn validate_ticket_numbers(
    numbers: &[TicketNumber],
    range: &TicketRange,
    limits: &LotteryLimits,
) -> Result<()> {
    limits.validate_batch_size(numbers.len())?;
    for number in numbers {
        range.validate(*number)?;
    }
    Ok(())
}

/// Price of buying `numbers` in `round` at time `now`.
///
/// Uses the round's own discount divisor.
///
/// # Errors
/// - `LotteryNotOpen` if the round is not open or has ended
/// - `InvalidTicketCount` / `TooManyTickets` for an empty or oversized batch
/// - `InvalidTicketNumber` if any number is out of range
/// - any pricing error from [`crate::math::pricing::compute_total_cost`]
pub fn quote_purchase(
    round: &LotteryRound,
    numbers: &[TicketNumber],
    now: i64,
    range: &TicketRange,
    limits: &LotteryLimits,
) -> Result<Amount> {
    round.ensure_open(now)?;
    validate_ticket_numbers(numbers, range, limits)?;

    let count = u32::try_from(numbers.len()).map_err(|_| LotteryError::TooManyTickets)?;
    round.round_config()?.total_cost(count)
}
