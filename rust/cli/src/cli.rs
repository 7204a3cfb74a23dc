//! Command-line argument definitions (clap derive types).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use flopcore_engine::deck::Street;
use flopcore_engine::hand::Category;
use flopcore_engine::outs::OutsPolicy;

#[derive(Parser)]
#[command(
    name = "flopcore",
    version,
    about = "Poker hand evaluation: classify hands, count outs, read board texture"
)]
pub struct FlopcoreCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify 5-7 cards and print the evaluation and its score
    Eval {
        /// Cards in compact notation, e.g. As Ks Qs Js 4d
        cards: Vec<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
        /// Append an evaluation record to this JSONL file
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Enumerate outs for hole cards on a flop or turn board
    Outs {
        /// Two hole cards
        #[arg(long, num_args = 2)]
        hole: Vec<String>,
        /// Three or four board cards
        #[arg(long, num_args = 3..=4)]
        board: Vec<String>,
        /// What counts as an out (default comes from configuration)
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
        /// Count only cards reaching at least this category
        #[arg(long, value_enum)]
        target: Option<TargetArg>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Classify the texture of a 3-5 card community board
    Texture {
        /// Community cards in compact notation
        board: Vec<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Deal a sample hand and evaluate it
    Deal {
        /// RNG seed for deterministic dealing
        #[arg(long)]
        seed: Option<u64>,
        /// How much of the board to deal
        #[arg(long, value_enum, default_value = "flop")]
        street: StreetArg,
    },
    /// Display current configuration settings
    Cfg,
}

/// CLI-facing mirror of [`OutsPolicy`]'s non-targeted modes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum PolicyArg {
    /// Any category upgrade counts
    Upgrade,
    /// Any strictly stronger evaluation counts
    Any,
}

impl PolicyArg {
    pub fn to_policy(self) -> OutsPolicy {
        match self {
            PolicyArg::Upgrade => OutsPolicy::CategoryUpgrade,
            PolicyArg::Any => OutsPolicy::AnyImprovement,
        }
    }
}

/// Target categories for draw-specific outs queries.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum TargetArg {
    Pair,
    TwoPair,
    Trips,
    Straight,
    Flush,
    FullHouse,
    Quads,
    StraightFlush,
}

impl TargetArg {
    pub fn to_category(self) -> Category {
        match self {
            TargetArg::Pair => Category::OnePair,
            TargetArg::TwoPair => Category::TwoPair,
            TargetArg::Trips => Category::ThreeOfAKind,
            TargetArg::Straight => Category::Straight,
            TargetArg::Flush => Category::Flush,
            TargetArg::FullHouse => Category::FullHouse,
            TargetArg::Quads => Category::FourOfAKind,
            TargetArg::StraightFlush => Category::StraightFlush,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum StreetArg {
    Flop,
    Turn,
    River,
}

impl StreetArg {
    pub fn to_street(self) -> Street {
        match self {
            StreetArg::Flop => Street::Flop,
            StreetArg::Turn => Street::Turn,
            StreetArg::River => Street::River,
        }
    }
}
