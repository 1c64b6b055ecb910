use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::math::matching::reward_for_ticket;
use crate::state::{Amount, Bracket, LotteryRound, RewardTable, Ticket, TicketRange, WinningNumber};

/// An unclaimed ticket that won a prize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningTicket {
    pub ticket: Ticket,
    pub bracket: Bracket,
    pub reward: Amount,
}

/// Winning tickets of a user in a finalized round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WinningsReport {
    pub winning_tickets: Vec<WinningTicket>,
    pub total: Amount,
}

/// Unclaimed tickets that win a nonzero reward, in input order.
///
/// Ticket numbers are assumed to be in range; [`check_winnings`] validates them.
pub fn compute_winnings(
    tickets: &[Ticket],
    winning_number: WinningNumber,
    reward_table: &RewardTable,
) -> Vec<WinningTicket> {
    tickets
        .iter()
        .filter(|ticket| !ticket.claimed)
        .filter_map(|ticket| {
            reward_for_ticket(ticket.number, winning_number, reward_table).map(
                |(bracket, reward)| WinningTicket {
                    ticket: *ticket,
                    bracket,
                    reward,
                },
            )
        })
        .collect()
}

/// Sum of all rewards, with overflow reported rather than wrapped.
pub fn total_winnings(winning_tickets: &[WinningTicket]) -> Result<Amount> {
    winning_tickets
        .iter()
        .try_fold(0, |total: Amount, winner| -> Result<Amount> {
            Ok(total
                .checked_add(winner.reward)
                .ok_or(LotteryError::Overflow)?)
        })
}

/// Checks `tickets` against a round, which must already be claimable.
///
/// # Errors
/// - `RoundNotFinalized` if the round has not been drawn
/// - `InvalidTicketNumber` if any ticket number lies outside `range`
/// - `Overflow` if the total does not fit
pub fn check_winnings(
    round: &LotteryRound,
    tickets: &[Ticket],
    range: &TicketRange,
) -> Result<WinningsReport> {
    let winning_number = round.winning_number(range)?;
    for ticket in tickets {
        range.validate(ticket.number)?;
    }
    let winning_tickets = compute_winnings(tickets, winning_number, &round.reward_per_bracket);
    let total = total_winnings(&winning_tickets)?;

    Ok(WinningsReport {
        winning_tickets,
        total,
    })
}
