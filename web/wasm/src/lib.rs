use bjtable::{
    Action, Card, DealerHand, GameOptions, GameState, Hand, HandOutcome, Phase, Player,
    PlayerAction, Seat, Suit,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// A table held on the JS side. Every method applies one transition.
#[wasm_bindgen]
pub struct WasmTable {
    state: GameState,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            state: GameState::new(GameOptions::default(), u64::from(seed)),
        }
    }

    pub fn reset(&mut self, seed: u32, stand_on_soft_17: bool) {
        let options = GameOptions::default().with_stand_on_soft_17(stand_on_soft_17);
        self.state = GameState::new(options, u64::from(seed));
    }

    pub fn start_session(&mut self, chips: u32) {
        self.apply(Action::StartSession {
            starting_chips: chips as usize,
        });
    }

    pub fn return_to_menu(&mut self) {
        self.apply(Action::ReturnToMenu);
    }

    pub fn add_player(&mut self, seat: &str) -> Result<(), JsValue> {
        let seat = parse_seat(seat)?;
        self.apply(Action::AddAutomatedPlayer(seat));
        Ok(())
    }

    pub fn remove_player(&mut self, seat: &str) -> Result<(), JsValue> {
        let seat = parse_seat(seat)?;
        self.apply(Action::RemoveAutomatedPlayer(seat));
        Ok(())
    }

    pub fn place_bet(&mut self, amount: u32) {
        self.apply(Action::PlaceBet(amount as usize));
    }

    pub fn clear_bet(&mut self) {
        self.apply(Action::ClearBet);
    }

    pub fn confirm_bets(&mut self) {
        self.apply(Action::ConfirmBets);
    }

    pub fn deal_one_card(&mut self) {
        self.apply(Action::DealOneCard);
    }

    pub fn hit(&mut self) {
        self.apply(Action::Player(PlayerAction::Hit));
    }

    pub fn stand(&mut self) {
        self.apply(Action::Player(PlayerAction::Stand));
    }

    pub fn double_down(&mut self) {
        self.apply(Action::Player(PlayerAction::Double));
    }

    pub fn split(&mut self) {
        self.apply(Action::Player(PlayerAction::Split));
    }

    pub fn automated_step(&mut self) {
        self.apply(Action::AutomatedPlayerStep);
    }

    pub fn dealer_reveal(&mut self) {
        self.apply(Action::DealerReveal);
    }

    pub fn dealer_hit(&mut self) {
        self.apply(Action::DealerHit);
    }

    pub fn settle(&mut self) {
        self.apply(Action::Settle);
    }

    pub fn start_new_round(&mut self) {
        self.apply(Action::StartNewRound);
    }

    pub fn set_message(&mut self, message: String) {
        self.apply(Action::SetMessage(message));
    }

    /// Advances one automatic step (deal, automated move, dealer, settle).
    ///
    /// Returns false when the table is waiting on the human.
    pub fn step(&mut self) -> bool {
        let action = match self.state.phase() {
            Phase::Dealing => Action::DealOneCard,
            Phase::PlayerTurn
                if self
                    .state
                    .active_player()
                    .is_some_and(|player| !player.is_human()) =>
            {
                Action::AutomatedPlayerStep
            }
            Phase::DealerTurn if self.state.dealer().has_hidden_card() => Action::DealerReveal,
            Phase::DealerTurn => Action::DealerHit,
            Phase::Settlement => Action::Settle,
            _ => return false,
        };
        self.apply(action);
        true
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let state = &self.state;
        let snapshot = Snapshot {
            phase: phase_to_str(state.phase()),
            round: state.round(),
            message: state.message().to_string(),
            cards_remaining: state.cards_remaining() as u32,
            active_player: state.active_player_index().map(|index| index as u32),
            players: state.players().iter().map(JsPlayer::from).collect(),
            dealer: JsDealer::from(state.dealer()),
        };
        to_js_value(&snapshot)
    }

    pub fn recommendation(&self) -> Result<JsValue, JsValue> {
        let advice = self.state.recommendation().map(|advice| JsAdvice {
            action: advice.action.name(),
            reason: advice.reason,
        });
        to_js_value(&advice)
    }
}

impl WasmTable {
    fn apply(&mut self, action: Action) {
        self.state = self.state.apply(action);
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    round: u32,
    message: String,
    cards_remaining: u32,
    active_player: Option<u32>,
    players: Vec<JsPlayer>,
    dealer: JsDealer,
}

#[derive(Serialize)]
struct JsAdvice {
    action: &'static str,
    reason: String,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
}

#[derive(Serialize)]
struct JsPlayer {
    name: &'static str,
    seat: &'static str,
    is_human: bool,
    is_active: bool,
    chips: u32,
    active_hand: u32,
    last_result: Option<&'static str>,
    bet_multiplier: u8,
    hands: Vec<JsHand>,
}

impl From<&Player> for JsPlayer {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name(),
            seat: seat_to_str(player.seat()),
            is_human: player.is_human(),
            is_active: player.is_active(),
            chips: player.chips() as u32,
            active_hand: player.active_hand_index() as u32,
            last_result: player.last_result().map(outcome_to_str),
            bet_multiplier: player.bet_multiplier(),
            hands: player.hands().iter().map(JsHand::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<JsCard>,
    value: u8,
    is_soft: bool,
    bet: u32,
    doubled_down: bool,
    from_split: bool,
    result: Option<&'static str>,
}

impl From<&Hand> for JsHand {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().iter().copied().map(card_to_js).collect(),
            value: hand.value(),
            is_soft: hand.is_soft(),
            bet: hand.bet() as u32,
            doubled_down: hand.is_doubled_down(),
            from_split: hand.is_from_split(),
            result: hand.result().map(outcome_to_str),
        }
    }
}

#[derive(Serialize)]
struct JsDealer {
    cards: Vec<Option<JsCard>>,
    value: u8,
    visible_value: u8,
    is_blackjack: bool,
    is_bust: bool,
    hole_revealed: bool,
}

impl From<&DealerHand> for JsDealer {
    fn from(dealer: &DealerHand) -> Self {
        let hole_revealed = !dealer.has_hidden_card();
        let cards = dealer
            .cards()
            .iter()
            .map(|card| card.face_up.then(|| card_to_js(*card)))
            .collect();

        // Totals stay hidden with the hole card.
        let value = if hole_revealed {
            dealer.value()
        } else {
            dealer.visible_value()
        };

        Self {
            cards,
            value,
            visible_value: dealer.visible_value(),
            is_blackjack: hole_revealed && dealer.is_blackjack(),
            is_bust: dealer.is_bust(),
            hole_revealed,
        }
    }
}

fn parse_seat(seat: &str) -> Result<Seat, JsValue> {
    match seat {
        "Left" | "left" => Ok(Seat::Left),
        "Center" | "center" => Ok(Seat::Center),
        "Right" | "right" => Ok(Seat::Right),
        other => Err(JsValue::from_str(&format!("unknown seat: {other}"))),
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn seat_to_str(seat: Seat) -> &'static str {
    match seat {
        Seat::Left => "Left",
        Seat::Center => "Center",
        Seat::Right => "Right",
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Menu => "Menu",
        Phase::BuyIn => "BuyIn",
        Phase::Betting => "Betting",
        Phase::Dealing => "Dealing",
        Phase::PlayerTurn => "PlayerTurn",
        Phase::DealerTurn => "DealerTurn",
        Phase::Settlement => "Settlement",
        Phase::RoundEnd => "RoundEnd",
    }
}

fn outcome_to_str(outcome: HandOutcome) -> &'static str {
    match outcome {
        HandOutcome::Win => "Win",
        HandOutcome::Lose => "Lose",
        HandOutcome::Push => "Push",
        HandOutcome::Blackjack => "Blackjack",
        HandOutcome::Bust => "Bust",
    }
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
