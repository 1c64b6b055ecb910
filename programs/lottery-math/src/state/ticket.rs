use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::state::TicketRange;

/// A ticket number; the observed deployment encodes six digits behind a leading `1`.
pub type TicketNumber = u32;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub id: u64,
    pub number: TicketNumber,
    pub claimed: bool,
}

/// The final number of a drawn round.
///
/// Only obtainable through validation, so holding one means the round was
/// settled with a number inside the ticket range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningNumber(TicketNumber);

impl WinningNumber {
    /// An unset final number (zero) or any value outside `range` means the
    /// round has not been drawn.
    pub fn new(number: TicketNumber, range: &TicketRange) -> Result<Self> {
        if !range.contains(number) {
            msg!("Winning number {} is not a drawn value", number);
            return Err(LotteryError::RoundNotFinalized.into());
        }
        Ok(Self(number))
    }

    pub fn value(self) -> TicketNumber {
        self.0
    }
}

/// Zips the parallel arrays the contract returns for a user's tickets in a round.
pub fn tickets_from_user_info(
    ids: &[u64],
    numbers: &[TicketNumber],
    claimed: &[bool],
) -> Result<Vec<Ticket>> {
    require!(
        ids.len() == numbers.len() && numbers.len() == claimed.len(),
        LotteryError::MalformedTicketData
    );

    Ok(ids
        .iter()
        .zip(numbers)
        .zip(claimed)
        .map(|((id, number), claimed)| Ticket {
            id: *id,
            number: *number,
            claimed: *claimed,
        })
        .collect())
}
