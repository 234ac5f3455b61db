//! Command-line configuration
//!
//! Every option can also come from the environment; a `.env` file in the
//! working directory is loaded before parsing.

use clap::Parser;

use chess_rules::PromotionChoice;

#[derive(Parser, Debug, Clone)]
#[command(name = "chess", version, about = "Two-player chess in the terminal")]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. "info", "chess_rules=debug")
    #[arg(long, env = "CHESS_LOG", default_value = "warn")]
    pub log_level: String,

    /// Comma-separated moves to play first, e.g. "e2 e4,e7 e5"
    #[arg(long, env = "CHESS_MOVES")]
    pub moves: Option<String>,

    /// Answer every promotion with this piece instead of asking (q, r, b, n or 1-4)
    #[arg(long)]
    pub promotion: Option<String>,

    /// Print the final board as JSON and exit
    #[arg(long)]
    pub json: bool,

    /// Stop after the scripted moves instead of reading from stdin
    #[arg(long)]
    pub no_interactive: bool,
}

impl Cli {
    /// Scripted moves, trimmed, with empty entries dropped
    pub fn scripted_moves(&self) -> Vec<String> {
        self.moves
            .as_deref()
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|mv| !mv.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn fixed_promotion(&self) -> Option<PromotionChoice> {
        self.promotion.as_deref().map(PromotionChoice::from_response)
    }

    /// The binary never reads stdin when it is only asked for a snapshot
    pub fn is_interactive(&self) -> bool {
        !self.no_interactive && !self.json
    }
}
