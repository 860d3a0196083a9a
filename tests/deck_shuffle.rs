use showdown_rs::cards::{Card, Rank, Suit};
use showdown_rs::deck::Deck;

fn drain(mut deck: Deck) -> Vec<Card> {
    let mut out = Vec::with_capacity(52);
    while let Ok(c) = deck.deal() {
        out.push(c);
    }
    out
}

#[test]
fn shuffle_is_a_permutation() {
    for seed in 0..20u64 {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        let mut shuffled = drain(deck);
        let mut reference = drain(Deck::standard());
        shuffled.sort();
        reference.sort();
        assert_eq!(shuffled, reference, "seed {seed} lost or duplicated cards");
    }
}

#[test]
fn shuffle_changes_the_order() {
    let reference = drain(Deck::standard());
    let mut moved = 0;
    for seed in 0..10u64 {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        if drain(deck) != reference {
            moved += 1;
        }
    }
    assert_eq!(moved, 10);
}

// Positional statistics over many independent shuffles, not a single run:
// every card should land in the top slot roughly equally often, and a fixed
// card's mean position should sit near the middle of the deck.
#[test]
fn shuffle_positions_are_statistically_uniform() {
    const TRIALS: u64 = 5200;
    let ace = Card::new(Rank::Ace, Suit::Spades);
    let mut top_counts = std::collections::HashMap::new();
    let mut ace_position_sum: u64 = 0;

    for seed in 0..TRIALS {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        let cards = drain(deck);
        *top_counts.entry(cards[0]).or_insert(0u64) += 1;
        let pos = cards.iter().position(|&c| c == ace).expect("ace present") as u64;
        ace_position_sum += pos;
    }

    // Expected 100 per card; generous bounds rule out gross bias only.
    assert_eq!(top_counts.len(), 52);
    assert_eq!(top_counts.values().sum::<u64>(), TRIALS);
    for (card, count) in &top_counts {
        assert!(
            (40..=200).contains(count),
            "card {card} appeared on top {count} times out of {TRIALS}"
        );
    }

    // Expected mean index 25.5 over 0..=51.
    let mean = ace_position_sum as f64 / TRIALS as f64;
    assert!((22.5..=28.5).contains(&mean), "mean ace position {mean}");
}
