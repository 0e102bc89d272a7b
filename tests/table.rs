//! Round controller, strategy and session tests.

use std::cell::Cell;
use std::collections::VecDeque;
use std::io::{self, BufReader, Cursor};
use std::rc::Rc;

use blackjack_sim::{
    Action, BetError, BetPolicy, Card, Deck, Event, Exhaustion, Interactive, Observer, Outcome,
    Player, PlayerView, RoundError, Scripted, Seat, Session, Strategy, StrategyError, Suit,
    Table, TableOptions,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Bets a fixed amount and plays a fixed list of actions, then stands.
#[derive(Debug)]
struct Script {
    bet: i64,
    actions: VecDeque<Action>,
}

impl Script {
    fn new(bet: i64, actions: &[Action]) -> Self {
        Self {
            bet,
            actions: actions.iter().copied().collect(),
        }
    }
}

impl Strategy for Script {
    fn play(&mut self, _view: &PlayerView<'_>) -> Result<Action, StrategyError> {
        Ok(self.actions.pop_front().unwrap_or(Action::Stand))
    }

    fn bet(&mut self, _view: &PlayerView<'_>) -> Result<i64, StrategyError> {
        Ok(self.bet)
    }
}

/// Records what it was shown, then stands.
#[derive(Debug)]
struct Spy {
    balance: Rc<Cell<Option<i64>>>,
    dealer_up: Rc<Cell<Option<Card>>>,
}

impl Strategy for Spy {
    fn play(&mut self, view: &PlayerView<'_>) -> Result<Action, StrategyError> {
        self.balance.set(Some(view.balance));
        self.dealer_up.set(view.dealer_up);
        Ok(Action::Stand)
    }

    fn bet(&mut self, _view: &PlayerView<'_>) -> Result<i64, StrategyError> {
        Ok(10)
    }
}

/// Writes every event as a short line.
#[derive(Debug, Default)]
struct Recorder {
    lines: Vec<String>,
}

impl Observer for Recorder {
    fn notify(&mut self, event: &Event<'_>) {
        let line = match *event {
            Event::Dealt { dealer_up } => format!("dealt {dealer_up}"),
            Event::Turn { seat, name, hand } => format!("turn {seat:?} {name} {}", hand.value()),
            Event::Draw {
                seat, card, hand, ..
            } => format!("draw {seat:?} {card} {}", hand.value()),
            Event::Bust { seat, .. } => format!("bust {seat:?}"),
        };
        self.lines.push(line);
    }
}

fn interactive(input: &str) -> Interactive<Cursor<Vec<u8>>, io::Sink> {
    Interactive::new(Cursor::new(input.as_bytes().to_vec()), io::sink())
}

#[test]
fn end_to_end_win_against_standing_dealer() {
    let mut table = Table::new(TableOptions::default(), 1);
    table.seat(Player::new("Bruce", 100, Script::new(10, &[Action::Stand])));

    let deck = Deck::from_cards([
        card(Suit::Spades, 9),   // player
        card(Suit::Hearts, 10),  // dealer up
        card(Suit::Hearts, 9),   // player
        card(Suit::Clubs, 7),    // dealer hole
        card(Suit::Diamonds, 2), // unused: dealer stands on 17
    ]);

    let result = table.play_round_with(deck).unwrap();
    assert_eq!(result.round, 1);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.dealer_cards.len(), 2);
    assert!(!result.dealer_bust);

    let bruce = &result.players[0];
    assert_eq!(bruce.value, 18);
    assert_eq!(bruce.settlement.outcome, Outcome::Win);
    assert_eq!(bruce.settlement.payout, 20);
    assert_eq!(bruce.balance, 110);

    let player = table.player(0).unwrap();
    assert_eq!(player.balance(), 110);
    assert_eq!(player.bet(), 0);
    assert_eq!(player.stats().wins, 1);
    assert_eq!(player.stats().win_streak, 1);
    assert!(player.hand().is_empty());
    assert!(table.dealer().hand().is_empty());
    assert_eq!(table.rounds_played(), 1);
}

#[test]
fn players_act_in_seat_order_before_dealer() {
    let mut table = Table::new(TableOptions::default(), 2);
    let hit_once = [Action::Hit, Action::Stand];
    table.seat(Player::new("First", 100, Script::new(10, &hit_once)));
    table.seat(Player::new("Second", 100, Script::new(10, &hit_once)));

    let deck = Deck::from_cards([
        card(Suit::Spades, 2),  // first
        card(Suit::Spades, 3),  // second
        card(Suit::Spades, 10), // dealer up
        card(Suit::Spades, 4),  // first
        card(Suit::Spades, 5),  // second
        card(Suit::Spades, 6),  // dealer hole
        card(Suit::Spades, 7),  // first hits
        card(Suit::Spades, 8),  // second hits
        card(Suit::Spades, 9),  // dealer hits on 16
    ]);

    let result = table.play_round_with(deck).unwrap();

    assert_eq!(
        result.players[0].cards,
        vec![card(Suit::Spades, 2), card(Suit::Spades, 4), card(Suit::Spades, 7)]
    );
    assert_eq!(
        result.players[1].cards,
        vec![card(Suit::Spades, 3), card(Suit::Spades, 5), card(Suit::Spades, 8)]
    );
    assert_eq!(result.dealer_value, 25);
    assert!(result.dealer_bust);
    assert!(
        result
            .players
            .iter()
            .all(|p| p.settlement.outcome == Outcome::Win)
    );
}

#[test]
fn busted_player_loses_when_dealer_also_busts() {
    let mut table = Table::new(TableOptions::default(), 3);
    table.seat(Player::new("Greedy", 100, Script::new(10, &[Action::Hit])));

    let deck = Deck::from_cards([
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 10),
        card(Suit::Hearts, 6),
        card(Suit::Clubs, 6),
        card(Suit::Hearts, 13), // player busts
        card(Suit::Clubs, 9),   // dealer busts
    ]);

    let result = table.play_round_with(deck).unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.players[0].settlement.outcome, Outcome::Lose);
    assert_eq!(table.player(0).unwrap().balance(), 90);
    assert_eq!(table.player(0).unwrap().stats().lose_streak, 1);
}

#[test]
fn strategies_see_debited_balance_and_dealer_up_card() {
    let balance = Rc::new(Cell::new(None));
    let dealer_up = Rc::new(Cell::new(None));
    let spy = Spy {
        balance: Rc::clone(&balance),
        dealer_up: Rc::clone(&dealer_up),
    };

    let mut table = Table::new(TableOptions::default(), 4);
    table.seat(Player::new("Spy", 100, spy));

    let deck = Deck::from_cards([
        card(Suit::Hearts, 10),
        card(Suit::Diamonds, 4),
        card(Suit::Hearts, 8),
        card(Suit::Clubs, 13),
        card(Suit::Spades, 5),
    ]);
    table.play_round_with(deck).unwrap();

    assert_eq!(balance.get(), Some(90));
    assert_eq!(dealer_up.get(), Some(card(Suit::Diamonds, 4)));
}

#[test]
fn unrecognized_action_abandons_round_and_refunds() {
    let mut table = Table::new(TableOptions::default(), 5);
    table.seat(Player::new("Bruce", 100, Script::new(20, &[Action::Stand])));
    table.seat(Player::new(
        "Human",
        100,
        interactive("10\nfold\ndouble\nsplit\n"),
    ));

    let err = table.play_round().unwrap_err();
    assert_eq!(
        err,
        RoundError::Strategy {
            seat: Seat::Player(1),
            source: StrategyError::UnrecognizedAction("split".to_string()),
        }
    );

    for player in table.players() {
        assert_eq!(player.balance(), 100);
        assert_eq!(player.bet(), 0);
        assert!(player.hand().is_empty());
        assert_eq!(player.stats().games, 0);
    }
    assert_eq!(table.rounds_played(), 0);
}

#[test]
fn interactive_player_recovers_from_a_typo() {
    let mut table = Table::new(TableOptions::default(), 6);
    table.seat(Player::new("Human", 100, interactive("ten\n10\nstnad\nstand\n")));

    let deck = Deck::from_cards([
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 10),
        card(Suit::Hearts, 9),
        card(Suit::Clubs, 8),
    ]);
    let result = table.play_round_with(deck).unwrap();

    assert_eq!(result.players[0].settlement.bet, 10);
    assert_eq!(result.players[0].settlement.outcome, Outcome::Win);
    assert_eq!(table.player(0).unwrap().balance(), 110);
}

#[test]
fn closed_input_is_an_error() {
    let mut table = Table::new(TableOptions::default(), 7);
    table.seat(Player::new("Human", 100, interactive("")));

    assert_eq!(
        table.play_round().unwrap_err(),
        RoundError::Strategy {
            seat: Seat::Player(0),
            source: StrategyError::InputClosed,
        }
    );
}

#[test]
fn rejected_bet_refunds_earlier_seats() {
    let options = TableOptions::default().with_bet_policy(BetPolicy::Reject);
    let mut table = Table::new(options, 8);
    table.seat(Player::new("Modest", 100, Script::new(10, &[])));
    table.seat(Player::new("Bold", 100, Script::new(500, &[])));

    let err = table.play_round().unwrap_err();
    assert_eq!(
        err,
        RoundError::Bet {
            seat: Seat::Player(1),
            source: BetError::InsufficientFunds {
                bet: 500,
                balance: 100
            },
        }
    );
    assert_eq!(table.player(0).unwrap().balance(), 100);
    assert_eq!(table.player(1).unwrap().balance(), 100);
}

#[test]
fn unchecked_bet_that_overflows_abandons_the_round() {
    let options = TableOptions::default().with_bet_policy(BetPolicy::Unchecked);
    let mut table = Table::new(options, 8);
    table.seat(Player::new("Modest", 100, Script::new(10, &[])));
    table.seat(Player::new("Wild", 100, Script::new(i64::MIN, &[])));

    let err = table.play_round().unwrap_err();
    assert_eq!(
        err,
        RoundError::Bet {
            seat: Seat::Player(1),
            source: BetError::Overflow {
                bet: i64::MIN,
                balance: 100
            },
        }
    );
    assert_eq!(table.player(0).unwrap().balance(), 100);
    assert_eq!(table.player(1).unwrap().balance(), 100);
    assert_eq!(table.rounds_played(), 0);
}

#[test]
fn clamped_bet_never_exceeds_balance() {
    let mut table = Table::new(TableOptions::default(), 9);
    table.seat(Player::new("Bold", 30, Script::new(500, &[])));

    let result = table.play_round().unwrap();
    assert_eq!(result.players[0].settlement.bet, 30);
    assert!(table.player(0).unwrap().balance() >= 0);
}

#[test]
fn short_deck_fails_before_dealing() {
    let options = TableOptions::default().with_exhaustion(Exhaustion::Fail);
    let mut table = Table::new(options, 10);
    table.seat(Player::new("Bruce", 100, Script::new(10, &[])));

    let deck = Deck::from_cards([
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 3),
        card(Suit::Hearts, 4),
    ]);
    assert_eq!(table.play_round_with(deck), Err(RoundError::EmptyDeck));
    assert_eq!(table.player(0).unwrap().balance(), 100);
}

#[test]
fn running_dry_mid_turn_fails_or_adds_a_pack() {
    let stacked = || {
        Deck::from_cards([
            card(Suit::Hearts, 2),
            card(Suit::Clubs, 10),
            card(Suit::Hearts, 3),
            card(Suit::Clubs, 9),
        ])
    };

    let options = TableOptions::default().with_exhaustion(Exhaustion::Fail);
    let mut strict = Table::new(options, 11);
    strict.seat(Player::new("Bruce", 100, Script::new(10, &[Action::Hit])));
    assert_eq!(strict.play_round_with(stacked()), Err(RoundError::EmptyDeck));
    assert_eq!(strict.player(0).unwrap().balance(), 100);
    assert!(strict.player(0).unwrap().hand().is_empty());

    let mut lenient = Table::new(TableOptions::default(), 11);
    lenient.seat(Player::new("Bruce", 100, Script::new(10, &[Action::Hit])));
    let result = lenient.play_round_with(stacked()).unwrap();
    assert_eq!(result.players[0].cards.len(), 3);
    assert_eq!(result.dealer_value, 19);
}

#[test]
fn dealer_draws_to_seventeen() {
    let mut table = Table::new(TableOptions::default(), 12);
    table.seat(Player::new("Bruce", 100, Script::new(10, &[])));

    let deck = Deck::from_cards([
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 2),
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 3),
        card(Suit::Clubs, 4),  // 9
        card(Suit::Clubs, 5),  // 14
        card(Suit::Clubs, 1),  // 15, ace counted low
        card(Suit::Spades, 2), // 17
        card(Suit::Spades, 3),
    ]);

    let result = table.play_round_with(deck).unwrap();
    assert_eq!(result.dealer_cards.len(), 6);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.players[0].settlement.outcome, Outcome::Win);
}

#[test]
fn dealer_never_bets() {
    let mut table = Table::new(TableOptions::default(), 13);
    table.seat(Player::new("Bruce", 100, Scripted::default()));
    for _ in 0..20 {
        table.play_round().unwrap();
        assert_eq!(table.dealer().balance(), 0);
        assert_eq!(table.dealer().stats().games, 0);
    }
}

#[test]
fn scripted_bets_follow_lose_streak() {
    let mut scripted = Scripted::default();
    let hand = blackjack_sim::Hand::new();
    let mut view = PlayerView {
        name: "Bruce",
        hand: &hand,
        balance: 100,
        bet: 0,
        stats: blackjack_sim::Statistics::default(),
        dealer_up: None,
    };

    let mut bets = Vec::new();
    for streak in 0..9 {
        view.stats.lose_streak = streak;
        bets.push(scripted.bet(&view).unwrap());
    }
    assert_eq!(bets, vec![5, 10, 20, 5, 10, 20, 5, 10, 20]);

    let mut flat = Scripted::new(15, 5, 0);
    view.stats.lose_streak = 4;
    assert_eq!(flat.bet(&view).unwrap(), 5);
}

#[test]
fn observer_sees_every_turn_as_it_happens() {
    let mut table = Table::new(TableOptions::default(), 18);
    table.seat(Player::new("Bruce", 100, Script::new(10, &[Action::Hit])));

    let deck = Deck::from_cards([
        card(Suit::Clubs, 10),
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 6),
        card(Suit::Hearts, 7),
        card(Suit::Spades, 9),
    ]);
    let mut recorder = Recorder::default();
    let result = table.play_round_with_observed(deck, &mut recorder).unwrap();

    assert_eq!(
        recorder.lines,
        vec![
            "dealt 10 of Hearts",
            "turn Player(0) Bruce 16",
            "draw Player(0) 9 of Spades 25",
            "bust Player(0)",
            "turn Dealer Dealer 17",
        ]
    );
    assert_eq!(result.players[0].settlement.outcome, Outcome::Lose);
}

#[test]
fn same_seed_same_rounds() {
    let run = |seed| {
        let mut table = Table::new(TableOptions::default(), seed);
        table.seat(Player::new("Bruce", 100, Scripted::default()));
        (0..25)
            .map(|_| table.play_round().unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(99), run(99));
}

#[test]
fn session_plays_up_to_the_limit() {
    let mut table = Table::new(TableOptions::default(), 14);
    table.seat(Player::new("Bruce", 100, Scripted::default()));

    let mut session = Session::<BufReader<io::Empty>, Vec<u8>>::new(table, Vec::new())
        .with_max_rounds(5);
    assert_eq!(session.run().unwrap(), 5);
    assert_eq!(session.table().rounds_played(), 5);
    assert_eq!(session.table().player(0).unwrap().stats().games, 5);
}

#[test]
fn session_stops_when_asked() {
    let mut table = Table::new(TableOptions::default(), 15);
    table.seat(Player::new("Bruce", 100, Scripted::default()));

    let mut session = Session::new(table, Vec::new()).with_prompt(Cursor::new(b"yes\nno\n".to_vec()));
    assert_eq!(session.run().unwrap(), 2);

    let mut table = Table::new(TableOptions::default(), 16);
    table.seat(Player::new("Bruce", 100, Scripted::default()));
    let mut session = Session::new(table, Vec::new()).with_prompt(Cursor::new(Vec::new()));
    assert_eq!(session.run().unwrap(), 1);
}

#[test]
fn session_report_includes_statistics() {
    let mut table = Table::new(TableOptions::default(), 17);
    table.seat(Player::new("Bruce", 100, Scripted::default()));

    let mut output = Vec::new();
    {
        let mut session =
            Session::<BufReader<io::Empty>, &mut Vec<u8>>::new(table, &mut output).with_max_rounds(1);
        session.run().unwrap();
    }
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Game #1 over!"));
    assert!(text.contains("Bruce has played 1 games"));
}

#[test]
fn session_narrates_turns_before_the_report() {
    let play = |narrate| {
        let mut table = Table::new(TableOptions::default(), 19);
        table.seat(Player::new("Bruce", 100, Scripted::default()));
        let mut output = Vec::new();
        {
            let mut session =
                Session::<BufReader<io::Empty>, &mut Vec<u8>>::new(table, &mut output)
                    .with_max_rounds(1)
                    .with_narration(narrate);
            session.run().unwrap();
        }
        String::from_utf8(output).unwrap()
    };

    let text = play(true);
    let position = |needle: &str| text.find(needle).unwrap();
    assert!(text.contains("] [x]"));
    assert!(position("Dealer's hand: [") < position("It's Bruce's turn"));
    assert!(position("It's Bruce's turn") < position("It's Dealer's turn"));
    assert!(position("It's Dealer's turn") < position("Game #1 over!"));

    let quiet = play(false);
    assert!(!quiet.contains("It's Bruce's turn"));
    assert!(!quiet.contains("[x]"));
    assert!(quiet.contains("Game #1 over!"));
}
