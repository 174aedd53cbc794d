//! The game session: command methods, match resolution, deferred tasks.

use std::time::Duration;

use tracing::{debug, info, trace};

use super::event::SessionEvent;
use super::intent::Intent;
use super::scheduler::{ScheduledTask, Scheduler, TaskId, TaskKind};
use super::state::{GameState, Phase};
use crate::cards::{validate_deck, Card, CardId, DeckBuilder};
use crate::core::{GameRng, SessionConfig};
use crate::error::{DeckError, Result};

/// A single-player memory game session.
///
/// All mutation goes through the command methods. Time only moves when
/// the host calls [`advance`](Self::advance), which fires due tasks in
/// order.
///
/// ```
/// use std::time::Duration;
/// use memory_match::{GameSession, Phase, SessionConfig};
///
/// let mut session = GameSession::new(SessionConfig::new().with_seed(42)).unwrap();
/// session.start();
/// assert_eq!(session.phase(), Phase::Playing);
///
/// let first = session.state().cards[0].id;
/// let second = session.state().cards[1].id;
/// session.flip(first);
/// session.flip(second);
/// assert_eq!(session.phase(), Phase::Resolving);
///
/// // Reveal pause plus mismatch hide covers both outcomes
/// session.advance(Duration::from_millis(1500));
/// assert_eq!(session.state().moves, 1);
/// assert!(session.state().flipped_cards.is_empty());
/// ```
#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,
    deck: DeckBuilder,
    rng: GameRng,
    state: GameState,
    scheduler: Scheduler,
    /// Logical clock.
    now: Duration,
    /// Bumped on every start/reset; tasks from older generations are dropped.
    generation: u64,
    /// The one outstanding resolve task, if any.
    pending_resolve: Option<TaskId>,
    events: Vec<SessionEvent>,
    revision: u64,
}

impl GameSession {
    /// Create an idle session. Fails if the configuration is invalid.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let deck = config.deck_builder()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        Ok(Self {
            config,
            deck,
            rng,
            state: GameState::new(),
            scheduler: Scheduler::new(),
            now: Duration::ZERO,
            generation: 0,
            pending_resolve: None,
            events: Vec::new(),
            revision: 0,
        })
    }

    // === Commands ===

    /// Deal a new shuffled deck, replacing any game in progress.
    pub fn start(&mut self) -> &GameState {
        let mut deal = self.rng.fork();
        let cards = self.deck.build(&mut deal);
        self.begin(cards);
        &self.state
    }

    /// Start a game over a caller-supplied deck ordering.
    ///
    /// Used for replays and scripted scenarios. The deck must satisfy the
    /// usual invariants; on error the current session is left untouched.
    pub fn start_with_deck(&mut self, cards: Vec<Card>) -> std::result::Result<&GameState, DeckError> {
        validate_deck(&cards)?;
        self.begin(cards);
        Ok(&self.state)
    }

    /// Return to the empty, unstarted state.
    pub fn reset(&mut self) {
        self.supersede();
        self.state = GameState::new();
        info!(generation = self.generation, "game reset");
        self.record(SessionEvent::GameReset { generation: self.generation });
    }

    /// Turn a card face-up.
    ///
    /// Silently ignored unless fewer than two cards are face-up, the game
    /// is not complete, and the card exists face-down and unmatched.
    pub fn flip(&mut self, card: CardId) {
        if let Some(reason) = self.flip_rejection(card) {
            debug!(card = card.raw(), reason, "flip ignored");
            return;
        }
        let Some(target) = self.card_mut(card) else {
            return;
        };
        target.is_flipped = true;
        self.state.flipped_cards.push(card);
        trace!(card = card.raw(), flipped = self.state.flipped_cards.len(), "card flipped");
        self.record(SessionEvent::CardFlipped { card });

        if self.state.flipped_cards.len() == 2 {
            let pair = [self.state.flipped_cards[0], self.state.flipped_cards[1]];
            self.schedule_resolve(pair);
        }
    }

    /// Apply an intent from the presentation layer.
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::Start => {
                self.start();
            }
            Intent::Reset => self.reset(),
            Intent::Flip { card } => self.flip(card),
        }
    }

    // === Time ===

    /// Move the logical clock forward, firing every task that falls due.
    ///
    /// Tasks scheduled by a firing task also run if they fall due within
    /// the window. Returns the number of tasks fired.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let target = self.now.saturating_add(elapsed);
        let mut fired = 0;

        while let Some(due) = self.scheduler.next_due() {
            if due > target {
                break;
            }
            self.now = self.now.max(due);
            if let Some(task) = self.scheduler.pop_due(self.now) {
                self.run(task);
                fired += 1;
            }
        }

        self.now = target;
        fired
    }

    /// Advance until no tasks remain. Returns the number fired.
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(due) = self.scheduler.next_due() {
            fired += self.advance(due.saturating_sub(self.now));
        }
        fired
    }

    // === Queries ===

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned snapshot. Cheap: cards are a persistent vector.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Derived phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Session generation; changes on every start/reset.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Increments on every state change. Re-render when it moves.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of deferred tasks waiting to fire.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    /// Logical time of the next deferred task, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    /// Events recorded since the last drain, start or reset.
    #[must_use]
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Take the recorded events.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // === Internals ===

    fn begin(&mut self, cards: Vec<Card>) {
        self.supersede();
        self.state = GameState::dealt(cards);
        let cards = self.state.cards.len();
        info!(generation = self.generation, cards, "game started");
        self.record(SessionEvent::GameStarted { generation: self.generation, cards });
    }

    /// Invalidate everything scheduled or recorded for the current game.
    fn supersede(&mut self) {
        self.generation += 1;
        self.pending_resolve = None;
        self.events.clear();
        let dropped = self.scheduler.cancel_all();
        if dropped > 0 {
            debug!(dropped, generation = self.generation, "cancelled pending tasks");
        }
    }

    fn flip_rejection(&self, id: CardId) -> Option<&'static str> {
        if self.state.flipped_cards.len() >= 2 {
            return Some("pair pending");
        }
        if self.state.is_game_complete {
            return Some("game complete");
        }
        match self.state.card(id) {
            None => Some("unknown card"),
            Some(card) if card.is_matched => Some("already matched"),
            Some(card) if card.is_flipped => Some("already face-up"),
            Some(_) => None,
        }
    }

    fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let index = self.state.cards.iter().position(|c| c.id == id)?;
        self.state.cards.get_mut(index)
    }

    fn record(&mut self, event: SessionEvent) {
        self.revision += 1;
        self.events.push(event);
    }

    fn schedule_resolve(&mut self, pair: [CardId; 2]) {
        if let Some(previous) = self.pending_resolve.take() {
            self.scheduler.cancel(previous);
        }
        let due = self.now.saturating_add(self.config.reveal_pause);
        let id = self.scheduler.schedule(due, self.generation, TaskKind::Resolve { pair });
        self.pending_resolve = Some(id);
        debug!(task = id.0, ?due, "resolve scheduled");
    }

    fn run(&mut self, task: ScheduledTask) {
        if task.generation != self.generation {
            debug!(task = task.id.0, generation = task.generation, "dropping stale task");
            return;
        }

        match task.kind {
            TaskKind::Resolve { pair } => {
                if self.pending_resolve == Some(task.id) {
                    self.pending_resolve = None;
                }
                if self.state.flipped_cards[..] != pair[..] {
                    debug!(task = task.id.0, "flipped cards changed, dropping resolve");
                    return;
                }
                self.resolve(pair);
            }
            TaskKind::HideMismatch { pair } => self.hide(pair),
        }
    }

    fn resolve(&mut self, [first, second]: [CardId; 2]) {
        let is_match = match (self.state.card(first), self.state.card(second)) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => return,
        };

        self.state.moves += 1;

        if is_match {
            for id in [first, second] {
                if let Some(card) = self.card_mut(id) {
                    card.is_matched = true;
                }
            }
            self.state.flipped_cards.clear();
            self.state.score += self.config.match_points;
            debug!(first = first.raw(), second = second.raw(), score = self.state.score, "pair matched");
            self.record(SessionEvent::PairMatched { first, second });

            if self.state.refresh_complete() {
                let (moves, score) = (self.state.moves, self.state.score);
                info!(moves, score, "game complete");
                self.record(SessionEvent::GameCompleted { moves, score });
            }
        } else {
            let due = self.now.saturating_add(self.config.mismatch_hide);
            let pair = [first, second];
            let id = self.scheduler.schedule(due, self.generation, TaskKind::HideMismatch { pair });
            debug!(first = first.raw(), second = second.raw(), task = id.0, "pair mismatched");
            self.record(SessionEvent::PairMismatched { first, second });
        }
    }

    fn hide(&mut self, [first, second]: [CardId; 2]) {
        for id in [first, second] {
            if let Some(card) = self.card_mut(id) {
                if !card.is_matched {
                    card.is_flipped = false;
                }
            }
        }
        self.state.flipped_cards.clear();
        self.record(SessionEvent::CardsHidden { first, second });
    }
}
