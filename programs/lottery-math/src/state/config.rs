use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::math::pricing::compute_total_cost;
use crate::state::{Amount, BASIS_POINTS, BRACKET_COUNT};

/// Smallest ticket number the observed deployment accepts.
pub const DEFAULT_MIN_TICKET_NUMBER: u32 = 1_000_000;
/// Largest ticket number the observed deployment accepts.
pub const DEFAULT_MAX_TICKET_NUMBER: u32 = 1_999_999;

/// Inclusive range of valid ticket numbers. A per-deployment contract parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicketRange {
    min: u32,
    max: u32,
}

impl TicketRange {
    /// Both bounds must have the same digit count so suffix matching lines up,
    /// and at least one digit per bracket.
    pub fn new(min: u32, max: u32) -> Result<Self> {
        require!(min <= max, LotteryError::InvalidTicketRange);
        require!(
            digit_count(min) == digit_count(max),
            LotteryError::InvalidTicketRange
        );
        require!(
            digit_count(min) as usize >= BRACKET_COUNT,
            LotteryError::InvalidTicketRange
        );
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Number of distinct ticket numbers in the range.
    pub fn size(&self) -> u64 {
        (self.max - self.min) as u64 + 1
    }

    pub fn contains(&self, number: u32) -> bool {
        (self.min..=self.max).contains(&number)
    }

    pub fn validate(&self, number: u32) -> Result<u32> {
        if !self.contains(number) {
            msg!(
                "Ticket number {} outside [{}, {}]",
                number,
                self.min,
                self.max
            );
            return Err(LotteryError::InvalidTicketNumber.into());
        }
        Ok(number)
    }
}

impl Default for TicketRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_TICKET_NUMBER,
            max: DEFAULT_MAX_TICKET_NUMBER,
        }
    }
}

fn digit_count(mut value: u32) -> u32 {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}

/// Bounds enforced by the contract when a round is started or tickets are bought.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LotteryLimits {
    pub min_discount_divisor: u32,
    /// Basis points.
    pub max_treasury_fee: u16,
    pub max_tickets_per_buy_or_claim: u32,
    pub min_ticket_price: Amount,
    pub max_ticket_price: Amount,
}

impl Default for LotteryLimits {
    // Prices assume a 6-decimal payment token: 0.001 to 50 units.
    fn default() -> Self {
        Self {
            min_discount_divisor: 300,
            max_treasury_fee: 3_000,
            max_tickets_per_buy_or_claim: 100,
            min_ticket_price: 1_000,
            max_ticket_price: 50_000_000,
        }
    }
}

impl LotteryLimits {
    pub fn validate_treasury_fee(&self, treasury_fee: u16) -> Result<()> {
        require!(treasury_fee <= BASIS_POINTS, LotteryError::TreasuryFeeTooHigh);
        require!(
            treasury_fee <= self.max_treasury_fee,
            LotteryError::TreasuryFeeTooHigh
        );
        Ok(())
    }

    pub fn validate_batch_size(&self, count: usize) -> Result<()> {
        require!(count > 0, LotteryError::InvalidTicketCount);
        require!(
            count <= self.max_tickets_per_buy_or_claim as usize,
            LotteryError::TooManyTickets
        );
        Ok(())
    }
}

/// Pricing parameters of a single round.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundConfig {
    pub ticket_price: Amount,
    pub discount_divisor: u32,
}

impl RoundConfig {
    pub fn new(ticket_price: Amount, discount_divisor: u32) -> Result<Self> {
        require!(ticket_price > 0, LotteryError::InvalidTicketPrice);
        require!(discount_divisor > 0, LotteryError::InvalidDiscountParameters);
        Ok(Self {
            ticket_price,
            discount_divisor,
        })
    }

    /// Cost of buying `count` tickets in one transaction.
    pub fn total_cost(&self, count: u32) -> Result<Amount> {
        compute_total_cost(self.ticket_price, count, self.discount_divisor)
    }
}
