//! Winner resolution and scoring.
//!
//! Everything here is a pure function of the played cards and the round's
//! buff/debuff, so it can be checked without dealing any hands.

use smallvec::SmallVec;
use std::cmp::Ordering;

use super::outcome::{PlayedCard, RoundOutcome, WinnerScore};
use crate::cards::{Card, Token};
use crate::core::PlayerId;

/// Points a winner loses per debuffer other than themself.
pub const DEBUFF_PENALTY: i64 = 2;

/// How `challenger` ranks against the current `best` card.
///
/// Higher adjusted value wins. On equal adjusted value a buff card beats a
/// non-buff card; two buff cards, or two non-buff cards, tie.
#[must_use]
pub fn compare_cards(best: &Card, challenger: &Card, buff: &Token) -> Ordering {
    challenger
        .adjusted_value(buff)
        .cmp(&best.adjusted_value(buff))
        .then_with(|| challenger.is_token(buff).cmp(&best.is_token(buff)))
}

/// Indices into `played` of every winning play.
///
/// Walks the plays in order keeping a set of current best plays: a strictly
/// better card replaces the set, an equal one joins it.
#[must_use]
pub fn winning_plays(played: &[PlayedCard], buff: &Token) -> SmallVec<[usize; 4]> {
    let mut best: SmallVec<[usize; 4]> = SmallVec::new();
    for (index, play) in played.iter().enumerate() {
        let Some(&lead) = best.first() else {
            best.push(index);
            continue;
        };
        match compare_cards(&played[lead].card, &play.card, buff) {
            Ordering::Greater => {
                best.clear();
                best.push(index);
            }
            Ordering::Equal => best.push(index),
            Ordering::Less => {}
        }
    }
    best
}

/// Players who put down a debuff card, win or lose, in play order.
#[must_use]
pub fn debuffers(played: &[PlayedCard], debuff: &Token) -> SmallVec<[PlayerId; 4]> {
    played
        .iter()
        .filter(|p| p.card.is_token(debuff))
        .map(|p| p.player)
        .collect()
}

/// Score one winning play against the round's debuffers.
#[must_use]
pub fn score_winner(play: &PlayedCard, debuffers: &[PlayerId], buff: &Token) -> WinnerScore {
    let raw = play.card.adjusted_value(buff);
    let debuffer_count = if debuffers.contains(&play.player) {
        debuffers.len() - 1
    } else {
        debuffers.len()
    };
    let penalty = debuffer_count as i64 * DEBUFF_PENALTY;

    WinnerScore {
        player: play.player,
        card: play.card.clone(),
        raw,
        debuffer_count,
        penalty,
        points: raw.saturating_sub(penalty).max(0),
    }
}

/// Resolve a round from its played cards.
///
/// Tied winners are each scored in full with the same debuffer list.
#[must_use]
pub fn resolve_round(buff: &Token, debuff: &Token, played: Vec<PlayedCard>) -> RoundOutcome {
    let debuffers = debuffers(&played, debuff);
    let winners = winning_plays(&played, buff)
        .into_iter()
        .map(|index| score_winner(&played[index], &debuffers, buff))
        .collect();

    RoundOutcome {
        buff: buff.clone(),
        debuff: debuff.clone(),
        played,
        debuffers,
        winners,
    }
}
