use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::math::matching::match_bracket;
use crate::state::{
    Amount, Bracket, RewardTable, RewardsBreakdown, TicketNumber, WinningNumber, BASIS_POINTS,
    BRACKET_COUNT,
};

/// Outcome of drawing a round: what each winner is owed and where the rest goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSettlement {
    pub reward_per_bracket: RewardTable,
    pub count_winners_per_bracket: [u64; BRACKET_COUNT],
    /// Pool left after the treasury fee.
    pub amount_to_share: Amount,
    /// Treasury fee taken from the collected amount.
    pub treasury_amount: Amount,
    /// Allocation of brackets nobody won, carried into the next round.
    pub rollover_amount: Amount,
}

/// Collected amount minus the treasury fee, `collected * (10000 - fee) / 10000`.
pub fn amount_to_share(amount_collected: Amount, treasury_fee: u16) -> Result<Amount> {
    require!(treasury_fee <= BASIS_POINTS, LotteryError::TreasuryFeeTooHigh);
    let kept = (BASIS_POINTS - treasury_fee) as Amount;
    Ok(amount_collected
        .checked_mul(kept)
        .ok_or(LotteryError::Overflow)?
        / BASIS_POINTS as Amount)
}

/// Portion of the post-fee pool allocated to each bracket before it is split
/// among that bracket's winners.
pub fn bracket_pools(
    amount_collected: Amount,
    treasury_fee: u16,
    breakdown: &RewardsBreakdown,
) -> Result<[Amount; BRACKET_COUNT]> {
    breakdown.validate()?;
    let to_share = amount_to_share(amount_collected, treasury_fee)?;

    let mut pools = [0; BRACKET_COUNT];
    for bracket in Bracket::descending() {
        pools[bracket.index()] = bracket_allocation(to_share, breakdown.share(bracket))?;
    }
    Ok(pools)
}

/// Number of tickets whose highest matching bracket is each bracket.
pub fn count_winners_per_bracket(
    ticket_numbers: &[TicketNumber],
    winning_number: WinningNumber,
) -> Result<[u64; BRACKET_COUNT]> {
    let mut counts = [0u64; BRACKET_COUNT];
    for bracket in ticket_numbers
        .iter()
        .filter_map(|number| match_bracket(*number, winning_number))
    {
        let count = &mut counts[bracket.index()];
        *count = count.checked_add(1).ok_or(LotteryError::Overflow)?;
    }
    Ok(counts)
}

/// Derives the reward table of a drawn round from every ticket sold in it.
///
/// Each bracket's allocation is split evenly among its winners, rounding
/// down. A bracket without winners pays nothing and its allocation rolls
/// over.
///
/// # Errors
/// - `InvalidRewardsBreakdown` if the breakdown does not sum to 10000
/// - `TreasuryFeeTooHigh` if the fee exceeds 10000 basis points
/// - `Overflow` if any product does not fit
pub fn settle_round(
    ticket_numbers: &[TicketNumber],
    winning_number: WinningNumber,
    amount_collected: Amount,
    treasury_fee: u16,
    breakdown: &RewardsBreakdown,
) -> Result<RoundSettlement> {
    breakdown.validate()?;
    let to_share = amount_to_share(amount_collected, treasury_fee)?;
    let counts = count_winners_per_bracket(ticket_numbers, winning_number)?;

    let mut rewards = [0; BRACKET_COUNT];
    let mut rollover_amount: Amount = 0;

    for bracket in Bracket::descending() {
        let share = breakdown.share(bracket) as Amount;
        let winners = counts[bracket.index()];

        if winners == 0 {
            rollover_amount = rollover_amount
                .checked_add(bracket_allocation(to_share, breakdown.share(bracket))?)
                .ok_or(LotteryError::Overflow)?;
            continue;
        }

        // Divide by the winner count before the basis points, as the contract does.
        rewards[bracket.index()] = share
            .checked_mul(to_share)
            .ok_or(LotteryError::Overflow)?
            / winners as Amount
            / BASIS_POINTS as Amount;
    }

    let treasury_amount = amount_collected
        .checked_sub(to_share)
        .ok_or(LotteryError::Overflow)?;

    msg!(
        "Settled round: winners {:?}, rollover {}, treasury {}",
        counts,
        rollover_amount,
        treasury_amount
    );

    Ok(RoundSettlement {
        reward_per_bracket: RewardTable(rewards),
        count_winners_per_bracket: counts,
        amount_to_share: to_share,
        treasury_amount,
        rollover_amount,
    })
}

fn bracket_allocation(to_share: Amount, share: u16) -> Result<Amount> {
    Ok(to_share
        .checked_mul(share as Amount)
        .ok_or(LotteryError::Overflow)?
        / BASIS_POINTS as Amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{code_of, returned_code};
    use crate::state::TicketRange;

    const COLLECTED: Amount = 1_000_000_000;

    fn winning() -> WinningNumber {
        WinningNumber::new(1_234_567, &TicketRange::default()).unwrap()
    }

    #[test]
    fn test_amount_to_share() {
        assert_eq!(amount_to_share(COLLECTED, 2_000).unwrap(), 800_000_000);
        assert_eq!(amount_to_share(COLLECTED, 0).unwrap(), COLLECTED);
        assert_eq!(
            returned_code(amount_to_share(COLLECTED, 10_001)),
            Some(code_of(LotteryError::TreasuryFeeTooHigh))
        );
    }

    #[test]
    fn test_bracket_pools() {
        let pools = bracket_pools(COLLECTED, 2_000, &RewardsBreakdown::default()).unwrap();
        assert_eq!(
            pools,
            [20_000_000, 30_000_000, 50_000_000, 100_000_000, 200_000_000, 400_000_000]
        );
    }

    #[test]
    fn test_counts_are_exclusive() {
        let tickets = [1_234_567, 1_234_567, 1_134_567, 1_000_007, 1_234_568];
        assert_eq!(
            count_winners_per_bracket(&tickets, winning()).unwrap(),
            [1, 0, 0, 0, 1, 2]
        );
    }

    #[test]
    fn test_settle_round() {
        let tickets = [1_234_567, 1_234_567, 1_134_567, 1_000_007, 1_234_568];
        let settlement = settle_round(
            &tickets,
            winning(),
            COLLECTED,
            2_000,
            &RewardsBreakdown::default(),
        )
        .unwrap();

        assert_eq!(
            settlement.reward_per_bracket,
            RewardTable([20_000_000, 0, 0, 0, 200_000_000, 200_000_000])
        );
        assert_eq!(settlement.treasury_amount, 200_000_000);
        assert_eq!(settlement.rollover_amount, 180_000_000);

        let paid: Amount = settlement
            .reward_per_bracket
            .0
            .iter()
            .zip(settlement.count_winners_per_bracket)
            .map(|(reward, count)| reward * count as Amount)
            .sum();
        assert_eq!(paid + settlement.rollover_amount, settlement.amount_to_share);
    }

    #[test]
    fn test_rewards_round_down() {
        // 5000 * 100 / 3 / 10000 = 16.66.. -> 16
        let tickets = [1_234_567, 1_234_567, 1_234_567];
        let settlement =
            settle_round(&tickets, winning(), 100, 0, &RewardsBreakdown::default()).unwrap();
        assert_eq!(settlement.reward_per_bracket.reward(Bracket::TOP), 16);
    }

    #[test]
    fn test_no_tickets_rolls_everything_over() {
        let settlement =
            settle_round(&[], winning(), COLLECTED, 2_000, &RewardsBreakdown::default()).unwrap();
        assert_eq!(settlement.reward_per_bracket, RewardTable::default());
        assert_eq!(settlement.rollover_amount, 800_000_000);
    }

    #[test]
    fn test_rejects_bad_breakdown() {
        let breakdown = RewardsBreakdown([0, 0, 0, 0, 0, 9_999]);
        assert_eq!(
            returned_code(settle_round(&[], winning(), COLLECTED, 2_000, &breakdown)),
            Some(code_of(LotteryError::InvalidRewardsBreakdown))
        );
    }
}
