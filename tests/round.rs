//! Round simulation integration tests.

use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bjgen::{
    Card, DECK_SIZE, Dealer, Deck, DrawError, Generator, GeneratorOptions, Hand, OptionsError,
    Participant, Player, Rank, RoundError, SeatState, Suit, Table, Winner, output,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Builds a shoe that yields `draws` in order, padded with filler cards so
/// the pre-deal rebuild never triggers.
fn rigged_deck(draws: &[Card]) -> Deck {
    let mut cards = vec![card(Rank::Two, Suit::Clubs); DECK_SIZE];
    cards.extend(draws.iter().rev().copied());
    Deck::from_cards(cards)
}

fn rigged_table(draws: &[Card]) -> Table {
    let mut table = Table::new(1, 1, 0);
    table.deck = rigged_deck(draws);
    table
}

#[test]
fn hand_value_reduces_soft_aces() {
    let mut hand = Hand::new();
    hand.add_card(card(Rank::Ace, Suit::Spades));
    hand.add_card(card(Rank::Ace, Suit::Hearts));
    hand.add_card(card(Rank::Nine, Suit::Clubs));

    // 11 + 11 + 9 = 31; one reduction reaches 21 and the loop stops.
    assert_eq!(hand.value(), 21);
    assert_eq!(hand.count_rank(Rank::Ace), 2);
}

#[test]
fn hand_value_blackjack() {
    let mut hand = Hand::new();
    hand.add_card(card(Rank::King, Suit::Spades));
    hand.add_card(card(Rank::Ace, Suit::Diamonds));
    assert_eq!(hand.value(), 21);
}

#[test]
fn hand_without_aces_can_bust() {
    let mut player = Player::new(1);
    player.hand_mut().add_card(card(Rank::King, Suit::Spades));
    player.hand_mut().add_card(card(Rank::King, Suit::Hearts));
    player.hand_mut().add_card(card(Rank::King, Suit::Clubs));

    assert_eq!(player.hand_value(), 30);
    assert!(player.busted());
    assert!(!player.hit_or_stay());
}

#[test]
fn hand_display_joins_cards_with_colons() {
    let mut hand = Hand::new();
    assert_eq!(hand.value(), 0);
    assert_eq!(hand.to_string(), "");

    hand.add_card(card(Rank::Ace, Suit::Spades));
    hand.add_card(card(Rank::Ten, Suit::Clubs));
    assert_eq!(hand.to_string(), "Ace_Spades:10_Clubs");
}

#[test]
fn deck_builds_full_sets() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for num_sets in [1u8, 2] {
        let mut deck = Deck::new(num_sets, &mut rng);
        assert_eq!(deck.len(), DECK_SIZE * num_sets as usize);

        let mut counts: HashMap<(Rank, Suit), usize> = HashMap::new();
        while let Ok(drawn) = deck.draw() {
            *counts.entry((drawn.rank, drawn.suit)).or_default() += 1;
        }

        assert_eq!(counts.len(), 52);
        assert!(counts.values().all(|&n| n == num_sets as usize));
    }
}

#[test]
fn deck_draws_until_empty_then_errors() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut deck = Deck::new(1, &mut rng);

    for _ in 0..DECK_SIZE {
        deck.draw().unwrap();
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DrawError::EmptyDeck));
}

#[test]
fn deck_draw_order_is_deterministic_for_equal_seeds() {
    let mut rng_a = ChaCha8Rng::seed_from_u64(42);
    let mut rng_b = ChaCha8Rng::seed_from_u64(42);
    let mut deck_a = Deck::new(2, &mut rng_a);
    let mut deck_b = Deck::new(2, &mut rng_b);

    for _ in 0..deck_a.len() {
        assert_eq!(deck_a.draw(), deck_b.draw());
    }
}

#[test]
fn play_round_emits_one_record_per_player() {
    let mut table = Table::new(6, 3, 99);

    for num_players in 1..=6 {
        let records = table.play_round(num_players).unwrap();
        assert_eq!(records.len(), num_players);

        for record in &records {
            assert_eq!(record.table_number, 3);
            assert_eq!(record.num_players, num_players);
            assert!(["player", "dealer", "draw"].contains(&record.winner.as_str()));
            assert!(!record.player_hand.is_empty());
            assert!(!record.dealer_open_card.is_empty());
        }
    }
}

#[test]
fn play_round_rejects_bad_player_counts() {
    let mut table = Table::new(1, 1, 5);
    assert_eq!(table.play_round(0).unwrap_err(), RoundError::NoPlayers);
    assert_eq!(table.play_round(7).unwrap_err(), RoundError::TooManyPlayers);
}

#[test]
fn dealer_blackjack_ends_round_immediately() {
    // Deal order: p1, p2, dealer, then again p1, p2, dealer.
    let mut table = rigged_table(&[
        card(Rank::King, Suit::Hearts),  // p1
        card(Rank::Ace, Suit::Spades),   // p2
        card(Rank::King, Suit::Diamonds), // dealer up
        card(Rank::Nine, Suit::Clubs),   // p1
        card(Rank::King, Suit::Spades),  // p2
        card(Rank::Ace, Suit::Diamonds), // dealer: blackjack
    ]);

    let records = table.play_round(2).unwrap();
    assert_eq!(records.len(), 2);

    // Non-21 player loses, 21 player draws; nobody drew a third card.
    assert_eq!(records[0].winner, Winner::Dealer);
    assert_eq!(records[0].player_hand_value, 19);
    assert_eq!(records[1].winner, Winner::Draw);
    assert_eq!(records[1].player_hand_value, 21);

    for record in &records {
        assert_eq!(record.dealer_open_card, "King_Diamonds");
        assert_eq!(record.dealer_hand, "King_Diamonds:Ace_Diamonds");
        assert_eq!(record.dealer_hand_value, 21);
        assert_eq!(record.player_hand.split(':').count(), 2);
    }
}

#[test]
fn bust_rows_capture_the_dealer_hand_before_its_turn() {
    let mut table = rigged_table(&[
        card(Rank::Ten, Suit::Hearts),   // p1
        card(Rank::King, Suit::Spades),  // p2
        card(Rank::Seven, Suit::Diamonds), // dealer up
        card(Rank::Six, Suit::Clubs),    // p1: 16, must hit
        card(Rank::Queen, Suit::Hearts), // p2: 20, stands
        card(Rank::Five, Suit::Spades),  // dealer hole: 12
        card(Rank::Ten, Suit::Diamonds), // p1 hit: 26, bust
        card(Rank::Nine, Suit::Clubs),   // dealer draw: 21
    ]);

    let records = table.play_round(2).unwrap();
    assert_eq!(records.len(), 2);

    // The bust row is emitted during the player's turn, against the
    // dealer's two-card hand.
    let bust = &records[0];
    assert_eq!(bust.winner, Winner::Dealer);
    assert_eq!(bust.player_hand, "10_Hearts:6_Clubs:10_Diamonds");
    assert_eq!(bust.player_hand_value, 26);
    assert_eq!(bust.dealer_hand, "7_Diamonds:5_Spades");
    assert_eq!(bust.dealer_hand_value, 12);

    // The standing player settles against the dealer's final hand.
    let stood = &records[1];
    assert_eq!(stood.winner, Winner::Dealer);
    assert_eq!(stood.player_hand_value, 20);
    assert_eq!(stood.dealer_hand, "7_Diamonds:5_Spades:9_Clubs");
    assert_eq!(stood.dealer_hand_value, 21);
    assert_eq!(stood.dealer_open_card, "7_Diamonds");
}

#[test]
fn standing_players_win_when_dealer_busts() {
    let mut table = rigged_table(&[
        card(Rank::Ten, Suit::Hearts),  // p1
        card(Rank::Ten, Suit::Spades),  // dealer up
        card(Rank::Eight, Suit::Clubs), // p1: 18, stands
        card(Rank::Six, Suit::Hearts),  // dealer hole: 16, must hit
        card(Rank::King, Suit::Clubs),  // dealer draw: 26, bust
    ]);

    let records = table.play_round(1).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].winner, Winner::Player);
    assert_eq!(records[0].player_hand_value, 18);
    assert_eq!(records[0].dealer_hand_value, 26);
}

#[test]
fn equal_values_push() {
    let mut table = rigged_table(&[
        card(Rank::Ten, Suit::Hearts),  // p1
        card(Rank::Ten, Suit::Spades),  // dealer up
        card(Rank::Nine, Suit::Clubs),  // p1: 19
        card(Rank::Nine, Suit::Hearts), // dealer hole: 19
    ]);

    let records = table.play_round(1).unwrap();
    assert_eq!(records[0].winner, Winner::Draw);
    assert_eq!(records[0].player_hand_value, 19);
    assert_eq!(records[0].dealer_hand_value, 19);
}

#[test]
fn players_hit_below_seventeen() {
    let mut table = rigged_table(&[
        card(Rank::Ten, Suit::Hearts),   // p1
        card(Rank::Ten, Suit::Spades),   // dealer up
        card(Rank::Five, Suit::Clubs),   // p1: 15, must hit
        card(Rank::Seven, Suit::Hearts), // dealer hole: 17, stands
        card(Rank::Two, Suit::Diamonds), // p1 hit: 17, stands
    ]);

    let records = table.play_round(1).unwrap();
    assert_eq!(records[0].player_hand.split(':').count(), 3);
    assert_eq!(records[0].player_hand_value, 17);
    assert_eq!(records[0].winner, Winner::Draw);
}

#[test]
fn reset_hand_clears_cards_and_reactivates_seat() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::new(1, &mut rng);

    let mut player = Player::new(1);
    player.deal_from(&mut deck).unwrap();
    player.set_state(SeatState::Done);
    player.reset_hand();

    assert_eq!(player.hand_value(), 0);
    assert!(player.hand().is_empty());
    assert_eq!(player.state(), SeatState::Active);

    let mut dealer = Dealer::new();
    dealer.deal_from(&mut deck).unwrap();
    assert!(dealer.open_card().is_some());
    dealer.reset_hand();
    assert!(dealer.open_card().is_none());
    assert_eq!(dealer.hand_value(), 0);
}

#[test]
fn short_shoe_is_rebuilt_before_the_deal() {
    let mut table = Table::new(1, 1, 7);
    table.deck = Deck::from_cards(Vec::new());

    // An empty shoe is below the 52-card threshold, so the deal rebuilds
    // a full single-deck shoe first.
    let records = table.play_round(1).unwrap();
    assert_eq!(records.len(), 1);

    let drawn = records[0].player_hand.split(':').count()
        + records[0].dealer_hand.split(':').count();
    assert_eq!(table.deck.len(), DECK_SIZE - drawn);
}

#[test]
fn generator_rejects_malformed_options() {
    let zero_decks = GeneratorOptions::default().with_decks(0);
    assert_eq!(
        Generator::new(zero_decks, 1).unwrap_err(),
        OptionsError::ZeroDecks
    );

    let zero_tables = GeneratorOptions::default().with_tables(0);
    assert_eq!(
        Generator::new(zero_tables, 1).unwrap_err(),
        OptionsError::ZeroTables
    );

    let zero_rows = GeneratorOptions::default().with_min_rows(0);
    assert_eq!(
        Generator::new(zero_rows, 1).unwrap_err(),
        OptionsError::ZeroRows
    );
}

#[test]
fn generator_meets_row_target_with_valid_rows() {
    let options = GeneratorOptions::default()
        .with_decks(2)
        .with_tables(3)
        .with_min_rows(50);

    let mut generator = Generator::new(options, 11).unwrap();
    let records = generator.run().unwrap();

    assert!(records.len() >= 50);
    for record in &records {
        assert!((1..=3).contains(&record.table_number));
        assert!((1..=6).contains(&record.num_players));
        assert!(["player", "dealer", "draw"].contains(&record.winner.as_str()));
    }
}

#[test]
fn generator_is_reproducible_for_equal_seeds() {
    let options = GeneratorOptions::default()
        .with_decks(2)
        .with_tables(3)
        .with_min_rows(40);

    let records_a = Generator::new(options, 123).unwrap().run().unwrap();
    let records_b = Generator::new(options, 123).unwrap().run().unwrap();
    assert_eq!(records_a, records_b);
}

#[test]
fn csv_output_matches_schema() {
    let options = GeneratorOptions::default()
        .with_decks(1)
        .with_tables(2)
        .with_min_rows(10);
    let records = Generator::new(options, 9).unwrap().run().unwrap();

    let mut buffer = Vec::new();
    output::write_csv(&mut buffer, &records).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], output::CSV_HEADER);
    assert_eq!(lines.len(), records.len() + 1);
    for line in &lines[1..] {
        assert_eq!(line.split(',').count(), 8);
    }
}
