use anchor_lang::prelude::*;

use crate::error::LotteryError;

/// Amounts are denominated in the payment token's smallest unit.
pub type Amount = u128;

/// Number of prize brackets; bracket `i` pays for matching the last `i + 1` digits.
pub const BRACKET_COUNT: usize = 6;

/// Basis points a rewards breakdown (and the treasury fee scale) is expressed in.
pub const BASIS_POINTS: u16 = 10_000;

/// A prize tier. Higher brackets match more trailing digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bracket(u8);

impl Bracket {
    /// The all-digits bracket.
    pub const TOP: Bracket = Bracket(BRACKET_COUNT as u8 - 1);

    pub fn new(index: u8) -> Result<Self> {
        require!((index as usize) < BRACKET_COUNT, LotteryError::InvalidBracket);
        Ok(Self(index))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn matched_digits(self) -> u32 {
        self.0 as u32 + 1
    }

    /// `10^(index + 1)`, the modulus the suffix comparison uses.
    pub fn modulus(self) -> u32 {
        10u32.pow(self.matched_digits())
    }

    /// The next bracket up, or `None` for the top bracket.
    pub fn higher(self) -> Option<Bracket> {
        (self < Self::TOP).then(|| Bracket(self.0 + 1))
    }

    /// Every bracket, most specific first.
    pub fn descending() -> impl Iterator<Item = Bracket> {
        (0..BRACKET_COUNT as u8).rev().map(Bracket)
    }
}

/// Reward paid to one winning ticket in each bracket, fixed once a round is claimable.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewardTable(pub [Amount; BRACKET_COUNT]);

impl RewardTable {
    pub fn reward(&self, bracket: Bracket) -> Amount {
        self.0[bracket.index()]
    }
}

/// Share of the post-fee pool allocated to each bracket, in basis points.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardsBreakdown(pub [u16; BRACKET_COUNT]);

impl RewardsBreakdown {
    pub fn share(&self, bracket: Bracket) -> u16 {
        self.0[bracket.index()]
    }

    /// Fails unless the shares add up to exactly [`BASIS_POINTS`].
    pub fn validate(&self) -> Result<()> {
        let total: u32 = self.0.iter().map(|share| *share as u32).sum();
        if total != BASIS_POINTS as u32 {
            msg!("Rewards breakdown sums to {}", total);
            return Err(LotteryError::InvalidRewardsBreakdown.into());
        }
        Ok(())
    }
}

impl Default for RewardsBreakdown {
    fn default() -> Self {
        Self([250, 375, 625, 1250, 2500, 5000])
    }
}
