use anchor_lang::prelude::*;
use arrayref::array_ref;

use crate::error::LotteryError;
use crate::state::{TicketNumber, TicketRange};

/// Generates `count` ticket numbers inside `range` from caller-supplied entropy.
///
/// The same entropy always yields the same numbers. The entropy source (a
/// block hash, an OS RNG, a VRF output) is the caller's choice.
///
/// The numbers are produced with these steps:
/// 1. Split the 32 entropy bytes into four little-endian words
/// 2. Fold the words into one state through avalanche mixing
/// 3. Mix the state with each ticket's index
/// 4. Map the result into the range without modulo bias
pub fn generate_ticket_numbers(
    entropy: &[u8; 32],
    count: u32,
    range: &TicketRange,
) -> Result<Vec<TicketNumber>> {
    require!(count > 0, LotteryError::InvalidTicketCount);

    let words = [
        u64::from_le_bytes(*array_ref![entropy, 0, 8]),
        u64::from_le_bytes(*array_ref![entropy, 8, 8]),
        u64::from_le_bytes(*array_ref![entropy, 16, 8]),
        u64::from_le_bytes(*array_ref![entropy, 24, 8]),
    ];
    let state = words.iter().fold(0, |state, word| mix(state, *word));

    (0..count)
        .map(|index| -> Result<TicketNumber> {
            let value = mix(state, index as u64);
            let offset = unbiased_range(value, range.size())?;
            let number = (range.min() as u64)
                .checked_add(offset)
                .and_then(|number| u32::try_from(number).ok())
                .ok_or(LotteryError::Overflow)?;
            Ok(number)
        })
        .collect()
}

/// splitmix64 finalizer over the sum of both inputs.
fn mix(a: u64, b: u64) -> u64 {
    let mut z = a.wrapping_add(b).wrapping_add(0x9e3779b97f4a7c15);

    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Maps `x` into `0..range` by rejection sampling above the largest multiple of `range`.
fn unbiased_range(x: u64, range: u64) -> Result<u64> {
    require!(range > 0, LotteryError::InvalidTicketRange);

    if range.is_power_of_two() {
        return Ok(x & (range - 1));
    }

    let threshold = u64::MAX - (u64::MAX % range);
    let mut value = x;
    let mut attempt: u64 = 0;
    while value >= threshold {
        attempt += 1;
        value = mix(value, attempt);
    }

    Ok(value % range)
}
