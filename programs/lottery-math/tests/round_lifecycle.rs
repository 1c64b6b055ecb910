use lottery_math::*;

const NOW: i64 = 1_700_000_000;
const WINNING_NUMBER: u32 = 1_234_567;

fn error_code<T>(result: anchor_lang::Result<T>) -> Option<u32> {
    match result {
        Err(anchor_lang::error::Error::AnchorError(e)) => Some(e.error_code_number),
        _ => None,
    }
}

fn code(error: LotteryError) -> u32 {
    u32::from(error)
}

fn open_round(params: &StartRoundParams) -> LotteryRound {
    LotteryRound {
        status: LotteryStatus::Open,
        start_time: NOW,
        end_time: params.end_time,
        price_ticket: params.price_ticket,
        discount_divisor: params.discount_divisor,
        rewards_breakdown: params.rewards_breakdown,
        treasury_fee: params.treasury_fee,
        reward_per_bracket: RewardTable::default(),
        count_winners_per_bracket: [0; BRACKET_COUNT],
        first_ticket_id: 0,
        first_ticket_id_next_round: 0,
        amount_collected: 0,
        final_number: 0,
    }
}

#[test]
fn test_full_round() {
    let range = TicketRange::default();
    let limits = LotteryLimits::default();

    let params = StartRoundParams {
        end_time: NOW + 4 * 3_600,
        price_ticket: 5_000_000,
        discount_divisor: 300,
        rewards_breakdown: RewardsBreakdown::default(),
        treasury_fee: 2_000,
    };
    params.validate(NOW, &limits).unwrap();
    let mut round = open_round(&params);

    // One buyer picks four numbers by hand and fills the batch with generated ones.
    let mut numbers = parse_ticket_numbers("1234567, 1134567, 1000067, 1999999", &range).unwrap();
    numbers.extend(generate_ticket_numbers(&[42u8; 32], 96, &range).unwrap());

    let cost = quote_purchase(&round, &numbers, NOW + 60, &range, &limits).unwrap();
    // 5000000 * 100 * 201 / 300
    assert_eq!(cost, 335_000_000);

    let tickets: Vec<Ticket> = numbers
        .iter()
        .enumerate()
        .map(|(id, number)| Ticket {
            id: id as u64,
            number: *number,
            claimed: false,
        })
        .collect();

    // Drawing.
    round.status = LotteryStatus::Close;
    round.amount_collected = cost;
    round.first_ticket_id_next_round = tickets.len() as u64;
    assert_eq!(
        error_code(check_winnings(&round, &tickets, &range)),
        Some(code(LotteryError::RoundNotFinalized))
    );

    let winning_number = WinningNumber::new(WINNING_NUMBER, &range).unwrap();
    let settlement = settle_round(
        &numbers,
        winning_number,
        round.amount_collected,
        round.treasury_fee,
        &round.rewards_breakdown,
    )
    .unwrap();
    assert_eq!(settlement.treasury_amount, 67_000_000);
    let matched = numbers
        .iter()
        .filter(|number| match_bracket(**number, winning_number).is_some())
        .count();
    assert_eq!(
        settlement.count_winners_per_bracket.iter().sum::<u64>(),
        matched as u64
    );

    round.status = LotteryStatus::Claimable;
    round.final_number = WINNING_NUMBER;
    round.reward_per_bracket = settlement.reward_per_bracket;
    round.count_winners_per_bracket = settlement.count_winners_per_bracket;

    // The hand-picked tickets land in brackets 5, 4 and 1; the last never matches.
    let report = check_winnings(&round, &tickets[..4], &range).unwrap();
    let brackets: Vec<(u64, usize)> = report
        .winning_tickets
        .iter()
        .map(|winner| (winner.ticket.id, winner.bracket.index()))
        .collect();
    assert_eq!(brackets, vec![(0, 5), (1, 4), (2, 1)]);

    // Claims for exactly those brackets pay the reported total.
    let claims: Vec<TicketClaim> = report
        .winning_tickets
        .iter()
        .map(|winner| TicketClaim {
            ticket: winner.ticket,
            bracket: winner.bracket.index() as u8,
        })
        .collect();
    assert_eq!(
        verify_claim_batch(&round, &claims, &range, &limits).unwrap(),
        report.total
    );

    // A lower bracket cannot be claimed for the jackpot ticket.
    let underclaim = [TicketClaim {
        ticket: tickets[0],
        bracket: 0,
    }];
    assert_eq!(
        error_code(verify_claim_batch(&round, &underclaim, &range, &limits)),
        Some(code(LotteryError::BracketMustBeHigher))
    );

    // Once paid, the tickets drop out of the winnings check.
    let paid: Vec<Ticket> = tickets[..4]
        .iter()
        .map(|ticket| Ticket {
            claimed: true,
            ..*ticket
        })
        .collect();
    let report = check_winnings(&round, &paid, &range).unwrap();
    assert!(report.winning_tickets.is_empty());
    assert_eq!(report.total, 0);
}

#[test]
fn test_purchase_after_end_time_is_rejected() {
    let params = StartRoundParams {
        end_time: NOW + 3_600,
        price_ticket: 5_000_000,
        discount_divisor: 300,
        rewards_breakdown: RewardsBreakdown::default(),
        treasury_fee: 2_000,
    };
    let round = open_round(&params);
    assert_eq!(
        error_code(quote_purchase(
            &round,
            &[1_234_567],
            NOW + 3_600,
            &TicketRange::default(),
            &LotteryLimits::default(),
        )),
        Some(code(LotteryError::LotteryNotOpen))
    );
}
