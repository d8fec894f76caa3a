// src/bin/deal_dev_cli.rs

use card_containers::domain::Card;
use card_containers::infra::{DeterministicRng, RngConfig};
use card_containers::{RandomRemovalSet, ShuffleDeck};

const PLAYERS: u8 = 4;

// 2 карты каждому + флоп, тёрн, ривер.
const _: () = assert!(
    2 * PLAYERS as usize + 5 <= Card::FULL_DECK,
    "deal_dev_cli: слишком много игроков для одной колоды"
);

fn main() {
    env_logger::init();

    println!("deal_dev_cli: стартуем dev-CLI раздачи…");

    // 1. Конфиг seed: JSON из первого аргумента или окружение.
    let config = match std::env::args().nth(1) {
        Some(json) => RngConfig::from_json(&json),
        None => RngConfig::from_env(),
    };
    let config = match config {
        Ok(config) => config.resolved(),
        Err(e) => {
            eprintln!("[CLI] Ошибка конфига: {e}");
            std::process::exit(2);
        }
    };
    // Этот seed через CARD_CONTAINERS_SEED повторяет раздачу целиком.
    if let Some(seed) = config.seed {
        println!("[CLI] seed: {seed}");
    }

    // 2. Колода и очередь игроков: один seed, разные потоки.
    let mut deck: ShuffleDeck<Card, { Card::FULL_DECK }, DeterministicRng> =
        ShuffleDeck::with_rng(config.build_for("deck"));
    let mut seats: RandomRemovalSet<u8, DeterministicRng> =
        RandomRemovalSet::with_rng(config.build_for("seats"));
    seats.extend(1..=PLAYERS);

    println!();
    println!("================ HAND =================");

    // 3. Случайный порядок сдачи.
    while !seats.is_empty() {
        let seat = seats.pop_random();
        let hole = deck.deal::<2>();
        println!("seat {seat}: {} {}", hole[0], hole[1]);
    }

    // 4. Борд.
    let flop = *deck.deal::<3>();
    let turn = *deck.deal::<1>();
    let river = *deck.deal::<1>();
    println!(
        "board: {} {} {} | {} | {}",
        flop[0], flop[1], flop[2], turn[0], river[0]
    );
    println!("[CLI] в колоде осталось {} карт", deck.remaining());

    deck.shuffle();
    println!("[CLI] перемешали, курсор = {}", deck.cursor());
    println!("[CLI] Завершение работы dev-CLI.");
}
