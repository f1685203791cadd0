use std::collections::VecDeque;

/// Short-lived decorative token, e.g. a floating trend arrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub id: u64,
    born: u64,
}

/// Periodic generator of ephemeral tokens. Every tick spawns one token and
/// retires the ones older than `lifespan` ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenEmitter {
    lifespan: u64,
    clock: u64,
    next_id: u64,
    live: VecDeque<Token>,
}

impl TokenEmitter {
    pub fn new(lifespan: usize) -> Self {
        Self {
            lifespan: lifespan.max(1) as u64,
            clock: 0,
            next_id: 0,
            live: VecDeque::new(),
        }
    }

    pub fn tick(&mut self) -> &VecDeque<Token> {
        self.clock += 1;
        while self
            .live
            .front()
            .is_some_and(|t| self.clock - t.born >= self.lifespan)
        {
            self.live.pop_front();
        }
        self.live.push_back(Token {
            id: self.next_id,
            born: self.clock,
        });
        self.next_id += 1;
        &self.live
    }

    pub fn tokens(&self) -> &VecDeque<Token> {
        &self.live
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }
}
