use anchor_lang::error_code;

#[error_code]
pub enum LotteryError {
    Overflow,
    #[msg("Ticket number is outside the valid range")]
    InvalidTicketNumber,
    #[msg("Ticket count exceeds the discount divisor or the divisor is zero")]
    InvalidDiscountParameters,
    #[msg("The round has not been drawn yet")]
    RoundNotFinalized,
    #[msg("At least one ticket is required")]
    InvalidTicketCount,
    #[msg("Ticket price is zero or outside the allowed bounds")]
    InvalidTicketPrice,
    #[msg("Too many tickets in a single buy or claim")]
    TooManyTickets,
    #[msg("Ticket range bounds are inverted, differ in digit count or are too short")]
    InvalidTicketRange,
    #[msg("Rewards breakdown must sum to 10000")]
    InvalidRewardsBreakdown,
    #[msg("Treasury fee exceeds maximum allowed")]
    TreasuryFeeTooHigh,
    #[msg("Discount divisor is below the minimum allowed")]
    DiscountDivisorTooLow,
    #[msg("End time must be in the future")]
    EndTimeNotInFuture,
    #[msg("Lottery is not open")]
    LotteryNotOpen,
    #[msg("Unknown lottery status")]
    InvalidLotteryStatus,
    #[msg("Ticket ids, numbers and statuses differ in length")]
    MalformedTicketData,
    #[msg("Bracket out of range")]
    InvalidBracket,
    #[msg("Ticket has already been claimed")]
    TicketAlreadyClaimed,
    #[msg("No prize for this bracket")]
    NoPrizeForBracket,
    #[msg("Ticket matches a higher bracket")]
    BracketMustBeHigher,
}

/// Anchor error code number of `error`, for comparing returned errors in tests.
#[cfg(test)]
pub(crate) fn code_of(error: LotteryError) -> u32 {
    u32::from(error)
}

/// Error code carried by `result`, or `None` when it is `Ok` or a non-anchor error.
#[cfg(test)]
pub(crate) fn returned_code<T>(result: anchor_lang::Result<T>) -> Option<u32> {
    match result {
        Err(anchor_lang::error::Error::AnchorError(e)) => Some(e.error_code_number),
        _ => None,
    }
}
