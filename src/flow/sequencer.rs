use std::num::NonZeroUsize;

/// Intent of the most recent move, used to pick enter/exit transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Moved to the previous step.
    Backward,
    /// No move yet since the last reset.
    #[default]
    Idle,
    /// Moved to the next step.
    Forward,
}

impl Direction {
    /// `-1`, `0` or `1`.
    pub fn signum(self) -> i8 {
        match self {
            Self::Backward => -1,
            Self::Idle => 0,
            Self::Forward => 1,
        }
    }
}

/// Snapshot of a [`StepSequencer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SequencerState {
    /// Current step, `0 <= index < len`.
    pub index: usize,
    /// Direction of the last move.
    pub direction: Direction,
    /// Number of steps.
    pub len: usize,
}

/// Result of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nav {
    /// The index changed.
    Moved {
        /// Index before the move.
        from: usize,
        /// Index after the move.
        to: usize,
        /// Direction of the move.
        direction: Direction,
    },
    /// Already on the last step; nothing changed.
    ExhaustedForward,
    /// Already on the first step; nothing changed.
    ExhaustedBackward,
}

/// Bounded cursor over a step list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepSequencer {
    index: usize,
    direction: Direction,
    len: NonZeroUsize,
}

impl StepSequencer {
    /// Cursor on the first of `len` steps.
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            index: 0,
            direction: Direction::Idle,
            len,
        }
    }

    /// Move to the next step, or report the end of the list.
    pub fn advance(&mut self) -> Nav {
        if self.index + 1 >= self.len.get() {
            return Nav::ExhaustedForward;
        }
        let from = self.index;
        self.index += 1;
        self.direction = Direction::Forward;
        Nav::Moved {
            from,
            to: self.index,
            direction: self.direction,
        }
    }

    /// Move to the previous step, or report the start of the list.
    pub fn retreat(&mut self) -> Nav {
        if self.index == 0 {
            return Nav::ExhaustedBackward;
        }
        let from = self.index;
        self.index -= 1;
        self.direction = Direction::Backward;
        Nav::Moved {
            from,
            to: self.index,
            direction: self.direction,
        }
    }

    /// Back to the first step of a list of `len` steps.
    pub fn reset(&mut self, len: NonZeroUsize) {
        *self = Self::new(len);
    }

    /// Current snapshot.
    pub fn state(&self) -> SequencerState {
        SequencerState {
            index: self.index,
            direction: self.direction,
            len: self.len.get(),
        }
    }

    /// Current index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// On the first step.
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// On the last step.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len.get()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/flow/sequencer.rs"]
mod tests;
