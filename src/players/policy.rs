//! Card selection policies for computer-controlled players.
//!
//! - `RandomPolicy`: uniform over the whole hand
//! - `HeuristicPolicy`: weighs the best buff card against the best debuff card

use smallvec::SmallVec;
use std::cmp::Reverse;
use tracing::trace;

use crate::cards::{Card, Hand, Token};
use crate::core::GameRng;
use crate::round::DEBUFF_PENALTY;

/// Picks which card an AI player plays this round.
pub trait CardPolicy: Send + Sync {
    /// Index into the flattened hand. `None` only when the hand is empty.
    fn choose(&self, hand: &Hand, buff: &Token, debuff: &Token, rng: &mut GameRng) -> Option<usize>;
}

/// Plays any card in hand with equal probability.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl CardPolicy for RandomPolicy {
    fn choose(&self, hand: &Hand, _buff: &Token, _debuff: &Token, rng: &mut GameRng) -> Option<usize> {
        if hand.is_empty() {
            return None;
        }
        Some(rng.gen_range_usize(0..hand.len()))
    }
}

/// Buff/debuff heuristic.
///
/// Looks only at buff and debuff cards when it has any. With both available
/// it plays the best debuff card unless the best buff card is worth more
/// than the debuff card plus a full debuff penalty. With neither it plays
/// its highest card (first one on ties).
#[derive(Clone, Debug, Default)]
pub struct HeuristicPolicy;

impl CardPolicy for HeuristicPolicy {
    fn choose(&self, hand: &Hand, buff: &Token, debuff: &Token, _rng: &mut GameRng) -> Option<usize> {
        // Buff bucket first, then debuff bucket; the stable sort below keeps
        // that order between equal values.
        let mut candidates: SmallVec<[(usize, &Card); 8]> =
            hand.indexed().filter(|(_, card)| card.is_token(buff)).collect();
        candidates.extend(hand.indexed().filter(|(_, card)| card.is_token(debuff)));

        if candidates.is_empty() {
            return highest_card(hand, buff);
        }

        candidates.sort_by_key(|(_, card)| Reverse(card.adjusted_value(buff)));

        let mut best_buff = None;
        let mut best_debuff = None;
        for &(index, card) in &candidates {
            if best_buff.is_none() && card.is_token(buff) {
                best_buff = Some((index, card));
            } else if best_debuff.is_none() && card.is_token(debuff) {
                best_debuff = Some((index, card));
            }
            if best_buff.is_some() && best_debuff.is_some() {
                break;
            }
        }

        let choice = match (best_buff, best_debuff) {
            (Some((index, _)), None) | (None, Some((index, _))) => index,
            (Some((buff_index, buff_card)), Some((debuff_index, debuff_card))) => {
                let buff_value = buff_card.adjusted_value(buff);
                let debuff_value = debuff_card.adjusted_value(buff);
                trace!(%buff_card, buff_value, %debuff_card, debuff_value, "weighing buff against debuff");
                if buff_value > debuff_value + DEBUFF_PENALTY {
                    buff_index
                } else {
                    debuff_index
                }
            }
            (None, None) => return None,
        };
        Some(choice)
    }
}

/// Index of the highest adjusted value in the hand, first one on ties.
fn highest_card(hand: &Hand, buff: &Token) -> Option<usize> {
    hand.indexed()
        .fold(None, |best: Option<(usize, i64)>, (index, card)| {
            let value = card.adjusted_value(buff);
            match best {
                Some((_, best_value)) if best_value >= value => best,
                _ => Some((index, value)),
            }
        })
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(cards: &[(&str, i64)]) -> Hand {
        cards.iter().map(|&(token, value)| Card::new(token, value)).collect()
    }

    fn pick(policy: &dyn CardPolicy, hand: &Hand) -> Option<Card> {
        let mut rng = GameRng::new(0);
        policy
            .choose(hand, &Token::from("X"), &Token::from("O"), &mut rng)
            .and_then(|i| hand.get(i).cloned())
    }

    #[test]
    fn test_heuristic_buff_clears_threshold() {
        // X-5 is worth 7, O-4 plus the penalty is 6.
        let hand = hand(&[("X", 5), ("O", 4), ("^", 8)]);
        assert_eq!(pick(&HeuristicPolicy, &hand), Some(Card::new("X", 5)));
    }

    #[test]
    fn test_heuristic_prefers_debuff_below_threshold() {
        let hand = hand(&[("X", 3), ("O", 4), ("^", 8)]);
        assert_eq!(pick(&HeuristicPolicy, &hand), Some(Card::new("O", 4)));
    }

    #[test]
    fn test_heuristic_threshold_is_strict() {
        // 7 > 5 + 2 is false.
        let hand = hand(&[("X", 5), ("O", 5)]);
        assert_eq!(pick(&HeuristicPolicy, &hand), Some(Card::new("O", 5)));
    }

    #[test]
    fn test_heuristic_uses_best_of_each_token() {
        let hand = hand(&[("X", 1), ("O", 2), ("X", 8), ("O", 3)]);
        // Best buff X-8 (10) vs best debuff O-3 (3 + 2).
        assert_eq!(pick(&HeuristicPolicy, &hand), Some(Card::new("X", 8)));
    }

    #[test]
    fn test_heuristic_only_buff_cards() {
        let hand = hand(&[("X", 2), ("^", 8), ("X", 6)]);
        assert_eq!(pick(&HeuristicPolicy, &hand), Some(Card::new("X", 6)));
    }

    #[test]
    fn test_heuristic_only_debuff_cards_even_if_weaker() {
        let hand = hand(&[("O", 1), ("^", 8)]);
        assert_eq!(pick(&HeuristicPolicy, &hand), Some(Card::new("O", 1)));
    }

    #[test]
    fn test_heuristic_fallback_highest_first_on_ties() {
        let hand = hand(&[("^", 3), ("^", 7), ("#", 7), ("#", 1)]);
        let mut rng = GameRng::new(0);

        let index = HeuristicPolicy
            .choose(&hand, &Token::from("X"), &Token::from("O"), &mut rng)
            .unwrap();

        assert_eq!(index, 1);
        assert_eq!(hand.get(index), Some(&Card::new("^", 7)));
    }

    #[test]
    fn test_heuristic_duplicate_cards_pick_first() {
        let hand = hand(&[("X", 4), ("X", 4)]);
        let mut rng = GameRng::new(0);

        let index = HeuristicPolicy.choose(&hand, &Token::from("X"), &Token::from("O"), &mut rng);

        assert_eq!(index, Some(0));
    }

    #[test]
    fn test_empty_hand_has_no_choice() {
        let hand = Hand::new();
        let mut rng = GameRng::new(0);
        let (buff, debuff) = (Token::from("X"), Token::from("O"));

        assert_eq!(HeuristicPolicy.choose(&hand, &buff, &debuff, &mut rng), None);
        assert_eq!(RandomPolicy.choose(&hand, &buff, &debuff, &mut rng), None);
    }

    #[test]
    fn test_random_covers_whole_hand() {
        let hand = hand(&[("X", 1), ("O", 2), ("^", 3)]);
        let mut rng = GameRng::new(11);
        let (buff, debuff) = (Token::from("X"), Token::from("O"));
        let mut seen = [0usize; 3];

        for _ in 0..300 {
            let index = RandomPolicy.choose(&hand, &buff, &debuff, &mut rng).unwrap();
            seen[index] += 1;
        }

        assert!(seen.iter().all(|&count| count > 50), "skewed picks: {:?}", seen);
    }
}
