use crate::state::{Amount, Bracket, RewardTable, TicketNumber, WinningNumber};

/// Highest bracket whose trailing digits agree between `ticket_number` and the
/// winning number, or `None` when even the last digit differs.
///
/// Comparison is by `number % 10^(bracket + 1)`, so a fixed leading digit in
/// the encoding never takes part in a match.
pub fn match_bracket(
    ticket_number: TicketNumber,
    winning_number: WinningNumber,
) -> Option<Bracket> {
    let winning = winning_number.value();
    Bracket::descending().find(|bracket| {
        let modulus = bracket.modulus();
        ticket_number % modulus == winning % modulus
    })
}

/// Bracket and reward of a ticket. A matching bracket whose reward is zero
/// forfeits; lower brackets do not pay out in its place.
pub fn reward_for_ticket(
    ticket_number: TicketNumber,
    winning_number: WinningNumber,
    reward_table: &RewardTable,
) -> Option<(Bracket, Amount)> {
    let bracket = match_bracket(ticket_number, winning_number)?;
    let reward = reward_table.reward(bracket);
    (reward > 0).then_some((bracket, reward))
}
