//! Интеграционные тесты для ShuffleDeck.

use std::collections::HashSet;

use card_containers::domain::Card;
use card_containers::infra::{DeterministicRng, RngSeed};
use card_containers::{DeckError, ShuffleDeck};

type Deck52 = ShuffleDeck<u32, 52, DeterministicRng>;

fn sorted(cards: &[u32]) -> Vec<u32> {
    let mut v = cards.to_vec();
    v.sort_unstable();
    v
}

/// После создания: N различных карт 0..N, курсор 0.
#[test]
fn new_deck_is_permutation_of_identity() {
    let deck = Deck52::seeded(1);

    assert_eq!(deck.cursor(), 0);
    assert_eq!(deck.capacity(), 52);
    assert_eq!(sorted(deck.deck()), (0..52).collect::<Vec<_>>());
}

/// Колода с энтропийным seed тоже полная.
#[test]
fn entropy_deck_is_complete() {
    let deck: ShuffleDeck<u8, 20> = ShuffleDeck::new();
    let set: HashSet<u8> = deck.deck().iter().copied().collect();
    assert_eq!(set.len(), 20);
    assert!(deck.deck().iter().all(|&c| c < 20));
}

/// shuffle: множество карт не меняется, курсор сбрасывается в 0.
#[test]
fn shuffle_resets_cursor_and_keeps_cards() {
    let mut deck = Deck52::seeded(2);
    deck.deal::<5>();
    deck.deal::<7>();
    assert_eq!(deck.cursor(), 12);

    deck.shuffle();

    assert_eq!(deck.cursor(), 0);
    assert_eq!(deck.remaining(), 52);
    assert_eq!(sorted(deck.deck()), (0..52).collect::<Vec<_>>());
}

/// Клон колоды с энтропийным RNG перемешивается независимо.
#[test]
fn cloned_entropy_deck_shuffles_independently() {
    let mut a: ShuffleDeck<u8, 52> = ShuffleDeck::new();
    let mut b = a.clone();
    assert_eq!(a.deck(), b.deck(), "клон копирует карты");

    a.shuffle();
    b.shuffle();

    assert_ne!(a.deck(), b.deck(), "клон не должен повторять перестановки оригинала");
}

/// Одинаковый seed — одинаковый порядок.
#[test]
fn same_seed_same_order() {
    let a = Deck52::seeded(77);
    let b = Deck52::seeded(77);
    assert_eq!(a.deck(), b.deck());

    let c: Deck52 = ShuffleDeck::with_rng(RngSeed::from_u64(77).derive("deck", 1).to_rng());
    assert_ne!(a.deck(), c.deck());
}

/// deal<K> возвращает ровно K карт, сдвигает курсор, порции не пересекаются.
#[test]
fn deals_are_disjoint_and_advance_cursor() {
    let mut deck = Deck52::seeded(3);
    let mut seen = HashSet::new();

    for round in 0..10 {
        let hand = *deck.deal::<5>();
        assert_eq!(hand.len(), 5);
        assert_eq!(deck.cursor(), (round + 1) * 5);
        for card in hand {
            assert!(seen.insert(card), "карта {card} сдана дважды");
        }
    }

    let tail = *deck.deal::<2>();
    for card in tail {
        assert!(seen.insert(card));
    }
    assert_eq!(seen.len(), 52);
    assert_eq!(deck.remaining(), 0);
    assert!(deck.undealt().is_empty());
}

/// Сданная порция — это окно в колоду.
#[test]
fn dealt_view_aliases_backing_storage() {
    let mut deck = Deck52::seeded(4);
    let expected = deck.deck()[0..3].to_vec();

    let hand = deck.deal::<3>();
    assert_eq!(&hand[..], &expected[..]);

    hand[0] = 999;
    assert_eq!(deck.deck()[0], 999);
    assert_eq!(deck.dealt(), &[999, expected[1], expected[2]]);
}

/// Граница: is_dealable(N - cursor) истинно, is_dealable(N - cursor + 1) ложно.
#[test]
fn is_dealable_boundary() {
    let mut deck = Deck52::seeded(5);

    for _ in 0..13 {
        let left = 52 - deck.cursor();
        assert!(deck.is_dealable(left));
        assert!(!deck.is_dealable(left + 1));
        deck.deal::<4>();
    }

    assert_eq!(deck.cursor(), 52);
    assert!(deck.is_dealable(0));
    assert!(!deck.is_dealable(1));
}

/// deal<0> ничего не меняет.
#[test]
fn deal_zero_is_noop() {
    let mut deck = Deck52::seeded(6);
    let empty = deck.deal::<0>();
    assert!(empty.is_empty());
    assert_eq!(deck.cursor(), 0);
}

/// Пересдача сверх остатка — нарушение контракта.
#[test]
#[should_panic(expected = "Нельзя сдать 3 карт")]
fn over_deal_panics() {
    let mut deck: ShuffleDeck<u32, 4, DeterministicRng> = ShuffleDeck::seeded(7);
    deck.deal::<2>();
    deck.deal::<3>();
}

/// try_deal сообщает ошибку и не двигает курсор.
#[test]
fn try_deal_reports_not_enough_cards() {
    let mut deck: ShuffleDeck<u32, 4, DeterministicRng> = ShuffleDeck::seeded(8);
    assert!(deck.try_deal::<3>().is_ok());

    let err = deck.try_deal::<2>().unwrap_err();
    assert_eq!(
        err,
        DeckError::NotEnoughCards {
            requested: 2,
            remaining: 1
        }
    );
    assert_eq!(deck.cursor(), 3);
    assert_eq!(deck.try_deal::<1>().map(|c| c.len()), Ok(1));
}

/// Колода из настоящих карт: 52 уникальных карты.
#[test]
fn card_deck_contains_every_card_once() {
    let mut deck: ShuffleDeck<Card, { Card::FULL_DECK }, DeterministicRng> =
        ShuffleDeck::seeded(9);

    let set: HashSet<Card> = deck.deck().iter().copied().collect();
    assert_eq!(set.len(), 52);

    let hole = *deck.deal::<2>();
    assert_ne!(hole[0], hole[1]);
    assert_eq!(deck.dealt(), &hole[..]);
}

/// Грубая проверка равномерности: первая карта после shuffle.
#[test]
fn first_card_roughly_uniform() {
    const TRIALS: usize = 40_000;
    let mut deck: ShuffleDeck<usize, 4, DeterministicRng> = ShuffleDeck::seeded(10);
    let mut counts = [0usize; 4];

    for _ in 0..TRIALS {
        deck.shuffle();
        counts[deck.deal::<1>()[0]] += 1;
    }

    let expected = TRIALS / 4;
    for (card, &c) in counts.iter().enumerate() {
        let diff = c.abs_diff(expected);
        assert!(diff < expected / 10, "карта {card}: {c} из {TRIALS}");
    }
}
