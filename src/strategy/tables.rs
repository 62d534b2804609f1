//! Basic strategy charts for a four-plus deck shoe, dealer hits soft 17,
//! double after split allowed.
//!
//! Columns are the dealer upcard value 2 through 10, then 11 for an ace.

use super::PlayerAction::{self, Double as D, Hit as H, Split as P, Stand as S};

type Row = [PlayerAction; 10];

/// Hard totals 5 through 21.
const HARD_TOTALS: [Row; 17] = [
    [H, H, H, H, H, H, H, H, H, H], // 5
    [H, H, H, H, H, H, H, H, H, H], // 6
    [H, H, H, H, H, H, H, H, H, H], // 7
    [H, H, H, H, H, H, H, H, H, H], // 8
    [H, D, D, D, D, H, H, H, H, H], // 9
    [D, D, D, D, D, D, D, D, H, H], // 10
    [D, D, D, D, D, D, D, D, D, D], // 11
    [H, H, S, S, S, H, H, H, H, H], // 12
    [S, S, S, S, S, H, H, H, H, H], // 13
    [S, S, S, S, S, H, H, H, H, H], // 14
    [S, S, S, S, S, H, H, H, H, H], // 15
    [S, S, S, S, S, H, H, H, H, H], // 16
    [S, S, S, S, S, S, S, S, S, S], // 17
    [S, S, S, S, S, S, S, S, S, S], // 18
    [S, S, S, S, S, S, S, S, S, S], // 19
    [S, S, S, S, S, S, S, S, S, S], // 20
    [S, S, S, S, S, S, S, S, S, S], // 21
];

/// Soft totals 13 through 21.
const SOFT_TOTALS: [Row; 9] = [
    [H, H, H, D, D, H, H, H, H, H], // A,2
    [H, H, H, D, D, H, H, H, H, H], // A,3
    [H, H, D, D, D, H, H, H, H, H], // A,4
    [H, H, D, D, D, H, H, H, H, H], // A,5
    [H, D, D, D, D, H, H, H, H, H], // A,6
    [D, D, D, D, D, S, S, H, H, H], // A,7
    [S, S, S, S, D, S, S, S, S, S], // A,8
    [S, S, S, S, S, S, S, S, S, S], // A,9
    [S, S, S, S, S, S, S, S, S, S], // A,10
];

/// Pairs by card value 2 through 11 (aces).
const PAIRS: [Row; 10] = [
    [P, P, P, P, P, P, H, H, H, H], // 2,2
    [P, P, P, P, P, P, H, H, H, H], // 3,3
    [H, H, H, P, P, H, H, H, H, H], // 4,4
    [D, D, D, D, D, D, D, D, H, H], // 5,5 plays as hard 10
    [P, P, P, P, P, H, H, H, H, H], // 6,6
    [P, P, P, P, P, P, H, H, H, H], // 7,7
    [P, P, P, P, P, P, P, P, P, P], // 8,8
    [P, P, P, P, P, S, P, P, S, S], // 9,9
    [S, S, S, S, S, S, S, S, S, S], // 10,10
    [P, P, P, P, P, P, P, P, P, P], // A,A
];

fn lookup(table: &[Row], first_key: u8, key: u8, dealer: u8) -> PlayerAction {
    let row = key.checked_sub(first_key).map(usize::from);
    let column = dealer.checked_sub(2).map(usize::from);

    row.zip(column)
        .and_then(|(row, column)| table.get(row)?.get(column).copied())
        .unwrap_or(PlayerAction::Hit)
}

/// Chart entry for a hard total; totals outside 5..=21 are clamped.
pub(super) fn hard(total: u8, dealer: u8) -> PlayerAction {
    lookup(&HARD_TOTALS, 5, total.clamp(5, 21), dealer)
}

/// Chart entry for a soft total; anything off the chart is a hit.
pub(super) fn soft(total: u8, dealer: u8) -> PlayerAction {
    lookup(&SOFT_TOTALS, 13, total, dealer)
}

/// Chart entry for a pair of the given card value.
pub(super) fn pair(value: u8, dealer: u8) -> PlayerAction {
    lookup(&PAIRS, 2, value, dealer)
}
