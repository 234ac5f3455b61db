//! Terminal promotion prompt

use std::io::{self, BufRead, Write};

use chess_rules::{PendingPromotion, PromotionChoice, PromotionPrompt};
use tracing::warn;

/// Asks on stdout and reads the answer from a line source
pub struct TerminalPrompt<R> {
    input: R,
}

impl<R: BufRead> TerminalPrompt<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> PromotionPrompt for TerminalPrompt<R> {
    fn choose(&mut self, pending: PendingPromotion) -> PromotionChoice {
        println!("Choose a piece for the {} pawn on {}:", pending.color, pending.square);
        println!("1. Queen (Q)");
        println!("2. Rook (R)");
        println!("3. Bishop (B)");
        println!("4. Knight (N)");
        print!("Enter 1-4: ");
        if let Err(err) = io::stdout().flush() {
            warn!("[PROMOTION] Could not flush prompt: {}", err);
        }

        let mut answer = String::new();
        if let Err(err) = self.input.read_line(&mut answer) {
            warn!("[PROMOTION] Could not read answer: {}", err);
        }
        PromotionChoice::from_response(&answer)
    }
}
