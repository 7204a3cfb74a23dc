//! # flopcore-engine: Poker Hand Evaluation Core
//!
//! A pure Texas Hold'em hand-evaluation core: classifies 5-7 card sets
//! against the standard hand hierarchy, enumerates outs by exhaustive
//! single-card simulation, converts outs into a bounded potential score, and
//! classifies community-board texture. Strategy layers (bet sizing,
//! position, bluffing) live elsewhere and consume only the values produced
//! here.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), deck construction,
//!   and the validated [`cards::CardSet`]
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - Hand classification and strength comparison
//! - [`score`] - Total-order scalar over evaluations
//! - [`outs`] - Outs enumeration and potential estimation
//! - [`texture`] - Community-board texture classification
//! - [`logger`] - Evaluation record serialization (JSONL)
//! - [`errors`] - Error types for evaluation operations
//!
//! ## Quick Start
//!
//! ```rust
//! use flopcore_engine::cards::CardSet;
//! use flopcore_engine::hand::{evaluate, Category};
//! use flopcore_engine::outs::{enumerate_outs, estimate_potential};
//!
//! // Hole cards plus a flop
//! let current = CardSet::parse(&["Ah", "Kh", "Qh", "Jh", "2c"]).unwrap();
//! let evaluation = evaluate(&current).unwrap();
//! assert_eq!(evaluation.category, Category::HighCard);
//!
//! // Every unseen card that upgrades the hand's category
//! let outs = enumerate_outs(&current, &current.unseen()).unwrap();
//! let potential = estimate_potential(&outs, &current).unwrap();
//! assert!(potential > 0.0 && potential <= 1.0);
//! ```
//!
//! All operations are pure, synchronous computations over immutable inputs;
//! nothing persists across calls.

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod outs;
pub mod score;
pub mod texture;
