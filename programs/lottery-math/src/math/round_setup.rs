use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::state::{Amount, LotteryLimits, RewardsBreakdown, RoundConfig};

/// Parameters an operator submits to start a round.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartRoundParams {
    pub end_time: i64,
    pub price_ticket: Amount,
    pub discount_divisor: u32,
    pub rewards_breakdown: RewardsBreakdown,
    /// Basis points.
    pub treasury_fee: u16,
}

impl StartRoundParams {
    /// Checks the parameters the contract would reject when starting a round.
    ///
    /// The checks performed:
    /// 1. `end_time` is after `now`
    /// 2. The ticket price lies within the configured bounds
    /// 3. The discount divisor is at least the configured minimum
    /// 4. The treasury fee does not exceed the configured maximum
    /// 5. The rewards breakdown sums to 10000
    ///
    /// Returns the pricing configuration of the new round.
    pub fn validate(&self, now: i64, limits: &LotteryLimits) -> Result<RoundConfig> {
        require!(self.end_time > now, LotteryError::EndTimeNotInFuture);

        require!(
            self.price_ticket >= limits.min_ticket_price,
            LotteryError::InvalidTicketPrice
        );
        require!(
            self.price_ticket <= limits.max_ticket_price,
            LotteryError::InvalidTicketPrice
        );

        require!(
            self.discount_divisor >= limits.min_discount_divisor,
            LotteryError::DiscountDivisorTooLow
        );

        limits.validate_treasury_fee(self.treasury_fee)?;
        self.rewards_breakdown.validate()?;

        RoundConfig::new(self.price_ticket, self.discount_divisor)
    }
}
