use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::state::{
    Amount, RewardTable, RewardsBreakdown, RoundConfig, TicketRange, WinningNumber,
    BRACKET_COUNT,
};

/// Lifecycle of a round as reported by the contract, in its numeric order.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LotteryStatus {
    Pending,
    Open,
    Close,
    Claimable,
}

impl TryFrom<u8> for LotteryStatus {
    type Error = anchor_lang::error::Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(LotteryStatus::Pending),
            1 => Ok(LotteryStatus::Open),
            2 => Ok(LotteryStatus::Close),
            3 => Ok(LotteryStatus::Claimable),
            _ => Err(LotteryError::InvalidLotteryStatus.into()),
        }
    }
}

// Space calculation:
// 1 (status) +
// 8 (start_time) +
// 8 (end_time) +
// 16 (price_ticket) +
// 4 (discount_divisor) +
// 12 (rewards_breakdown: 6 x u16) +
// 2 (treasury_fee) +
// 96 (reward_per_bracket: 6 x u128) +
// 48 (count_winners_per_bracket: 6 x u64) +
// 8 (first_ticket_id) +
// 8 (first_ticket_id_next_round) +
// 16 (amount_collected) +
// 4 (final_number) =
// 231 total bytes
pub const LOTTERY_ROUND_SIZE: usize = 1 + 8 + 8 + 16 + 4 + 12 + 2 + 96 + 48 + 8 + 8 + 16 + 4;

/// Snapshot of one round as read from the contract's round view.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct LotteryRound {
    pub status: LotteryStatus,
    pub start_time: i64,
    pub end_time: i64,
    pub price_ticket: Amount,
    pub discount_divisor: u32,
    pub rewards_breakdown: RewardsBreakdown,
    /// Basis points.
    pub treasury_fee: u16,
    pub reward_per_bracket: RewardTable,
    pub count_winners_per_bracket: [u64; BRACKET_COUNT],
    pub first_ticket_id: u64,
    pub first_ticket_id_next_round: u64,
    pub amount_collected: Amount,
    /// Zero until the round is drawn.
    pub final_number: u32,
}

impl LotteryRound {
    pub fn round_config(&self) -> Result<RoundConfig> {
        RoundConfig::new(self.price_ticket, self.discount_divisor)
    }

    /// The drawn number, available only once the round is claimable.
    pub fn winning_number(&self, range: &TicketRange) -> Result<WinningNumber> {
        if self.status != LotteryStatus::Claimable {
            msg!("Round status is {:?}, not Claimable", self.status);
            return Err(LotteryError::RoundNotFinalized.into());
        }
        WinningNumber::new(self.final_number, range)
    }

    /// Tickets can be bought while the round is open and before its end time.
    pub fn ensure_open(&self, now: i64) -> Result<()> {
        require!(
            self.status == LotteryStatus::Open,
            LotteryError::LotteryNotOpen
        );
        require!(now < self.end_time, LotteryError::LotteryNotOpen);
        Ok(())
    }

    /// Number of tickets sold in this round, once the next round has been started.
    pub fn tickets_sold(&self) -> Result<u64> {
        Ok(self
            .first_ticket_id_next_round
            .checked_sub(self.first_ticket_id)
            .ok_or(LotteryError::Overflow)?)
    }
}
