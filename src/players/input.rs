//! Human card choice.
//!
//! The engine never reads input itself. A `HumanInput` is handed the
//! player's visible hand and returns an index into it; prompting and
//! re-prompting on bad input are the implementation's business.

use std::collections::VecDeque;

use crate::cards::Card;

/// Source of a human player's card choices.
pub trait HumanInput {
    /// Index into `visible_hand`, or `None` once the input source is closed.
    fn request_card_choice(&mut self, visible_hand: &[Card]) -> Option<usize>;
}

/// Replays a fixed list of choices, then reports closed input.
///
/// Used for tests, replays, and all-AI games where no human ever plays.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    choices: VecDeque<usize>,
}

impl ScriptedInput {
    pub fn new(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
        }
    }

    /// Choices not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.choices.len()
    }
}

impl HumanInput for ScriptedInput {
    fn request_card_choice(&mut self, _visible_hand: &[Card]) -> Option<usize> {
        self.choices.pop_front()
    }
}
