use cartamaroc_engine::cards::{Card, Rank, Suit};
use cartamaroc_engine::game::{CardEffect, GameSession};
use cartamaroc_engine::player::Player;

fn card(suit: Suit, rank: Rank) -> Card {
    Card { suit, rank }
}

fn player(name: &str, cards: &[Card]) -> Player {
    let mut p = Player::new(name);
    for &c in cards {
        p.add_card(c);
    }
    p
}

fn cards_in_play(game: &GameSession) -> usize {
    let hands: usize = game.players().iter().map(|p| p.hand_size()).sum();
    game.deck_remaining() + game.discard_size() + hands
}

#[test]
fn empty_deck_refills_from_the_discard_pile_on_draw() {
    let mut game = GameSession::with_state_for_test(
        vec![
            player("p1", &[card(Suit::Copas, Rank::Rey)]),
            player("p2", &[card(Suit::Bastos, Rank::Sota)]),
        ],
        vec![],
        vec![
            card(Suit::Oros, Rank::Dos),
            card(Suit::Oros, Rank::Tres),
            card(Suit::Copas, Rank::Seis),
            card(Suit::Espadas, Rank::Cinco),
            card(Suit::Oros, Rank::Cuatro), // top
        ],
        Suit::Oros,
    );
    let before = cards_in_play(&game);

    let outcome = game.draw_card_action("p1").unwrap();
    assert!(outcome.reshuffled);
    assert_eq!(outcome.drawn, 1);
    // only the old top card stays on the pile
    assert_eq!(game.discard_size(), 1);
    assert_eq!(game.top_discard(), card(Suit::Oros, Rank::Cuatro));
    // four cards went back to the deck, one was drawn
    assert_eq!(game.deck_remaining(), 3);
    assert_eq!(cards_in_play(&game), before);
}

#[test]
fn reshuffle_is_a_noop_when_the_discard_has_one_card() {
    let mut game = GameSession::with_state_for_test(
        vec![
            player("p1", &[card(Suit::Copas, Rank::Rey)]),
            player("p2", &[card(Suit::Bastos, Rank::Sota)]),
        ],
        vec![],
        vec![card(Suit::Oros, Rank::Cuatro)],
        Suit::Oros,
    );
    assert!(!game.reshuffle_from_discard());
    assert_eq!(game.discard_size(), 1);

    // drawing stalls gracefully: nothing delivered, nothing lost
    let outcome = game.draw_card_action("p1").unwrap();
    assert_eq!(outcome.requested, 1);
    assert_eq!(outcome.drawn, 0);
    assert!(!outcome.reshuffled);
    assert_eq!(game.hand_of("p1").unwrap().len(), 1);
}

#[test]
fn cards_are_conserved_through_a_whole_scripted_game() {
    let mut game = GameSession::new(["a", "b", "c"], Some(2024)).unwrap();
    assert_eq!(cards_in_play(&game), 40);

    // greedy autoplay: play the first legal card, otherwise draw
    for _ in 0..200 {
        if game.winner().is_some() {
            break;
        }
        let name = game.current_player().name().to_string();
        match game.playable_indices().first().copied() {
            Some(idx) => {
                let outcome = game.play_card(&name, idx).unwrap();
                if outcome.won {
                    break;
                }
                if let Some(CardEffect::SuitChoiceRequired) = outcome.effect {
                    game.change_suit(Suit::Bastos).unwrap();
                }
            }
            None => {
                game.draw_card_action(&name).unwrap();
            }
        }
        assert_eq!(cards_in_play(&game), 40, "conservation broken mid-game");
        game.next_turn().unwrap();
    }
    assert_eq!(cards_in_play(&game), 40);
}
