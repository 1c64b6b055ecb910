use std::collections::BTreeSet;

use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::state::{
    Amount, Bracket, LotteryLimits, LotteryRound, RewardTable, Ticket, TicketRange, WinningNumber,
};

/// A ticket submitted for payout together with the bracket it claims.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicketClaim {
    pub ticket: Ticket,
    pub bracket: u8,
}

/// Reward owed for claiming `ticket` in `bracket`.
///
/// A claim is valid only for the ticket's highest matching bracket, and only
/// when that bracket carries a reward.
///
/// # Errors
/// - `InvalidBracket` if `bracket >= 6`
/// - `TicketAlreadyClaimed` if the ticket has been paid
/// - `NoPrizeForBracket` if the digits do not match or the reward is zero
/// - `BracketMustBeHigher` if the ticket also matches the next bracket up
pub fn verify_claim(
    ticket: &Ticket,
    bracket: u8,
    winning_number: WinningNumber,
    reward_table: &RewardTable,
) -> Result<Amount> {
    let bracket = Bracket::new(bracket)?;
    require!(!ticket.claimed, LotteryError::TicketAlreadyClaimed);

    let matches = |bracket: Bracket| {
        let modulus = bracket.modulus();
        ticket.number % modulus == winning_number.value() % modulus
    };

    require!(matches(bracket), LotteryError::NoPrizeForBracket);

    let reward = reward_table.reward(bracket);
    require!(reward > 0, LotteryError::NoPrizeForBracket);

    if let Some(higher) = bracket.higher() {
        if matches(higher) {
            msg!(
                "Ticket {} matches bracket {}, claimed {}",
                ticket.id,
                higher.index(),
                bracket.index()
            );
            return Err(LotteryError::BracketMustBeHigher.into());
        }
    }

    Ok(reward)
}

/// Total payout of a claim batch against a drawn round. Fails as a whole if
/// any claim is invalid.
///
/// A ticket is paid at most once per batch: the first claim for an id marks
/// it claimed, so a repeated id fails with `TicketAlreadyClaimed`.
pub fn verify_claim_batch(
    round: &LotteryRound,
    claims: &[TicketClaim],
    range: &TicketRange,
    limits: &LotteryLimits,
) -> Result<Amount> {
    limits.validate_batch_size(claims.len())?;
    let winning_number = round.winning_number(range)?;

    let mut paid = BTreeSet::new();
    claims.iter().try_fold(0, |total: Amount, claim| -> Result<Amount> {
        if !paid.insert(claim.ticket.id) {
            msg!("Ticket {} claimed twice in one batch", claim.ticket.id);
            return Err(LotteryError::TicketAlreadyClaimed.into());
        }
        let reward = verify_claim(
            &claim.ticket,
            claim.bracket,
            winning_number,
            &round.reward_per_bracket,
        )?;
        Ok(total.checked_add(reward).ok_or(LotteryError::Overflow)?)
    })
}
