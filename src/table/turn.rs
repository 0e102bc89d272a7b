use crate::card::Card;
use crate::error::{RoundError, Seat};
use crate::player::Player;
use crate::strategy::Action;

use super::{Event, Observer, Shoe, TurnState};

/// Runs one seat's turn until it stands or busts.
pub(super) fn play_turn(
    player: &mut Player,
    seat: Seat,
    dealer_up: Option<Card>,
    shoe: &mut Shoe<'_>,
    observer: &mut dyn Observer,
) -> Result<TurnState, RoundError> {
    observer.notify(&Event::Turn {
        seat,
        name: player.name(),
        hand: player.hand(),
    });
    let mut state = TurnState::AwaitingAction;

    while !state.is_terminal() {
        state = match state {
            TurnState::AwaitingAction => {
                let action = player
                    .decide(dealer_up)
                    .map_err(|source| RoundError::Strategy { seat, source })?;
                log::debug!("{} chooses to {action} on {}", player.name(), player.hand().value());
                match action {
                    Action::Hit => TurnState::Hit,
                    Action::Stand => TurnState::Stand,
                }
            }
            TurnState::Hit => {
                let card = shoe.draw()?;
                player.receive(card);
                log::debug!("{} draws {card}: {}", player.name(), player.hand());
                observer.notify(&Event::Draw {
                    seat,
                    name: player.name(),
                    card,
                    hand: player.hand(),
                });
                if player.hand().is_bust() {
                    log::debug!("{} busts with {}", player.name(), player.hand().value());
                    observer.notify(&Event::Bust {
                        seat,
                        name: player.name(),
                        hand: player.hand(),
                    });
                    TurnState::Bust
                } else {
                    TurnState::AwaitingAction
                }
            }
            TurnState::Stand | TurnState::Bust => state,
        };
    }

    Ok(state)
}
