use flopcore_engine::cards::{Card, CardSet, Rank as R, Suit as S};
use flopcore_engine::errors::EvalError;
use flopcore_engine::hand::{compare, evaluate, Category};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

fn set(cards: &[Card]) -> CardSet {
    CardSet::new(cards.to_vec()).expect("unique cards")
}

#[test]
fn royal_flush_is_ace_high_straight_flush() {
    let cards = set(&[
        c(S::Hearts, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Three),
    ]);
    let hs = evaluate(&cards).unwrap();
    assert_eq!(hs.category, Category::StraightFlush);
    assert_eq!(hs.tiebreak[0], R::Ace.value());
    // display label refines it, with no separate detection path
    assert_eq!(hs.label(), Category::RoyalFlush);
}

#[test]
fn wheel_straight_reports_top_rank_five() {
    let cards = set(&[
        c(S::Hearts, R::Two),
        c(S::Diamonds, R::Three),
        c(S::Clubs, R::Four),
        c(S::Spades, R::Five),
        c(S::Hearts, R::Ace),
    ]);
    let hs = evaluate(&cards).unwrap();
    assert_eq!(hs.category, Category::Straight);
    assert_eq!(hs.tiebreak[0], 5, "Ace plays low in the wheel");
}

#[test]
fn wheel_straight_flush_is_not_royal() {
    let cards = set(&[
        c(S::Spades, R::Two),
        c(S::Spades, R::Three),
        c(S::Spades, R::Four),
        c(S::Spades, R::Five),
        c(S::Spades, R::Ace),
    ]);
    let hs = evaluate(&cards).unwrap();
    assert_eq!(hs.category, Category::StraightFlush);
    assert_eq!(hs.tiebreak[0], 5);
    assert_eq!(hs.label(), Category::StraightFlush);
}

#[test]
fn category_ordering_is_correct() {
    // Four of a kind vs full house
    let quads = set(&[
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Ace),
        c(S::Clubs, R::King),
        c(S::Diamonds, R::Queen),
        c(S::Hearts, R::Two),
    ]);
    let full_house = set(&[
        c(S::Clubs, R::King),
        c(S::Diamonds, R::King),
        c(S::Hearts, R::King),
        c(S::Clubs, R::Queen),
        c(S::Diamonds, R::Queen),
        c(S::Hearts, R::Two),
        c(S::Spades, R::Three),
    ]);
    let a = evaluate(&quads).unwrap();
    let b = evaluate(&full_house).unwrap();
    assert_eq!(a.category, Category::FourOfAKind);
    assert_eq!(b.category, Category::FullHouse);
    assert!(compare(&a, &b).is_gt());
}

#[test]
fn full_house_pair_rank_breaks_ties() {
    let kings_over_twos = set(&[
        c(S::Spades, R::King),
        c(S::Diamonds, R::King),
        c(S::Clubs, R::King),
        c(S::Spades, R::Two),
        c(S::Diamonds, R::Two),
    ]);
    let kings_over_threes = set(&[
        c(S::Spades, R::King),
        c(S::Diamonds, R::King),
        c(S::Clubs, R::King),
        c(S::Spades, R::Three),
        c(S::Diamonds, R::Three),
    ]);
    let a = evaluate(&kings_over_twos).unwrap();
    let b = evaluate(&kings_over_threes).unwrap();
    assert_eq!(a.category, Category::FullHouse);
    assert_eq!(b.category, Category::FullHouse);
    assert!(compare(&b, &a).is_gt());
}

#[test]
fn double_trips_counts_as_full_house() {
    let cards = set(&[
        c(S::Clubs, R::Nine),
        c(S::Diamonds, R::Nine),
        c(S::Hearts, R::Nine),
        c(S::Clubs, R::Queen),
        c(S::Diamonds, R::Queen),
        c(S::Hearts, R::Queen),
        c(S::Spades, R::Two),
    ]);
    let hs = evaluate(&cards).unwrap();
    assert_eq!(hs.category, Category::FullHouse);
    assert_eq!(hs.tiebreak[0], R::Queen.value());
    assert_eq!(hs.tiebreak[1], R::Nine.value());
}

#[test]
fn flush_beats_straight_and_keeps_five_highest() {
    let flush = set(&[
        c(S::Hearts, R::Two),
        c(S::Hearts, R::Seven),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::Nine),
        c(S::Hearts, R::Four),
        c(S::Diamonds, R::King),
    ]);
    let straight = set(&[
        c(S::Clubs, R::Five),
        c(S::Hearts, R::Six),
        c(S::Clubs, R::Seven),
        c(S::Hearts, R::Eight),
        c(S::Diamonds, R::Nine),
        c(S::Spades, R::Two),
        c(S::Clubs, R::Three),
    ]);
    let a = evaluate(&flush).unwrap();
    assert_eq!(a.category, Category::Flush);
    // 6 hearts: the deuce drops out of the tie-break
    assert_eq!(a.tiebreak, [12, 11, 9, 7, 4]);
    let b = evaluate(&straight).unwrap();
    assert_eq!(b.category, Category::Straight);
    assert!(compare(&a, &b).is_gt());
}

#[test]
fn three_pairs_use_third_pair_as_kicker() {
    // Best five cards are A A K K Q, not A A K K J
    let cards = set(&[
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Clubs, R::King),
        c(S::Diamonds, R::King),
        c(S::Clubs, R::Queen),
        c(S::Diamonds, R::Queen),
        c(S::Spades, R::Jack),
    ]);
    let hs = evaluate(&cards).unwrap();
    assert_eq!(hs.category, Category::TwoPair);
    assert_eq!(hs.tiebreak[..3], [14, 13, 12]);
}

#[test]
fn one_pair_keeps_three_kickers() {
    let cards = set(&[
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Two),
        c(S::Diamonds, R::Nine),
        c(S::Clubs, R::Four),
        c(S::Diamonds, R::Five),
        c(S::Hearts, R::Seven),
    ]);
    let hs = evaluate(&cards).unwrap();
    assert_eq!(hs.category, Category::OnePair);
    assert_eq!(hs.tiebreak, [14, 9, 7, 5, 0]);
}

#[test]
fn high_card_takes_five_highest_ranks() {
    let cards = set(&[
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::King),
        c(S::Spades, R::Nine),
        c(S::Diamonds, R::Eight),
        c(S::Clubs, R::Seven),
        c(S::Diamonds, R::Three),
        c(S::Hearts, R::Two),
    ]);
    let hs = evaluate(&cards).unwrap();
    assert_eq!(hs.category, Category::HighCard);
    assert_eq!(hs.tiebreak, [14, 13, 9, 8, 7]);
}

#[test]
fn straight_flush_requires_suited_run() {
    // Flush in hearts plus an offsuit straight: not a straight flush
    let cards = set(&[
        c(S::Hearts, R::Two),
        c(S::Hearts, R::Seven),
        c(S::Hearts, R::Nine),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::King),
        c(S::Clubs, R::Eight),
        c(S::Diamonds, R::Ten),
    ]);
    let hs = evaluate(&cards).unwrap();
    assert_eq!(hs.category, Category::Flush);
}

#[test]
fn too_few_cards_is_an_error() {
    let cards = set(&[
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::King),
        c(S::Spades, R::Nine),
        c(S::Diamonds, R::Eight),
    ]);
    assert_eq!(
        evaluate(&cards),
        Err(EvalError::InsufficientCards {
            required: 5,
            actual: 4
        })
    );
}

#[test]
fn too_many_cards_is_an_error() {
    let cards = set(&[
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::King),
        c(S::Spades, R::Nine),
        c(S::Diamonds, R::Eight),
        c(S::Clubs, R::Seven),
        c(S::Diamonds, R::Three),
        c(S::Hearts, R::Two),
        c(S::Spades, R::Two),
    ]);
    assert_eq!(
        evaluate(&cards),
        Err(EvalError::InvalidCardSetSize { len: 8 })
    );
}

#[test]
fn seven_card_result_is_at_least_every_five_card_subset() {
    use flopcore_engine::deck::Deck;

    let mut deck = Deck::new_with_seed(2024);
    for _ in 0..20 {
        deck.shuffle();
        let cards: Vec<Card> = (0..7).map(|_| deck.deal_card().unwrap()).collect();
        let full = evaluate(&set(&cards)).unwrap();
        // every 5-card subset = drop two of the seven
        for i in 0..7 {
            for j in (i + 1)..7 {
                let subset: Vec<Card> = cards
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != i && k != j)
                    .map(|(_, &card)| card)
                    .collect();
                let sub = evaluate(&set(&subset)).unwrap();
                assert!(
                    compare(&full, &sub).is_ge(),
                    "7-card hand {:?} weaker than subset {:?}",
                    full,
                    sub
                );
            }
        }
    }
}
