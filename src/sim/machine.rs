//! Game state machine
//!
//! Start -> Playing -> GameOver -> (restart) -> Playing. Owns the session,
//! the RNG, and the tick source; every input and every frame goes through
//! here, so the session can never be half-updated.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{GameEvent, GamePhase, GameSession};
use super::tick::{FrameOutcome, tick};
use crate::platform::{ManualTicker, TickSource};
use crate::quiz::{AnswerTracker, OptionId, QuestionBank, Submission, begin_round};
use crate::tuning::Tuning;

pub struct GameStateMachine<T: TickSource = ManualTicker> {
    session: GameSession,
    bank: QuestionBank,
    tuning: Tuning,
    rng: Pcg32,
    ticker: T,
    events: Vec<GameEvent>,
}

impl<T: TickSource> GameStateMachine<T> {
    /// Idle machine in the Start phase; nothing runs until `start`
    pub fn new(bank: QuestionBank, tuning: Tuning, ticker: T, seed: u64) -> Self {
        Self {
            session: GameSession::new(&tuning),
            bank,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            ticker,
            events: Vec::new(),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn round(&self) -> Option<&AnswerTracker> {
        self.session.round.as_ref()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin a run from Start or GameOver. Returns false (and does nothing)
    /// while already playing.
    pub fn start(&mut self) -> bool {
        if self.session.is_playing() {
            log::warn!("Start ignored: already playing");
            return false;
        }

        self.session.score = 0;
        self.session.final_score = None;
        self.session.time_ticks = 0;
        self.session.phase = GamePhase::Playing;
        self.events.push(GameEvent::Started);
        log::info!("Game started");

        self.next_round();
        self.ticker.start();
        debug_assert!(self.session.is_consistent());
        true
    }

    /// Same as `start`, but only from GameOver
    pub fn restart(&mut self) -> bool {
        if self.session.phase != GamePhase::GameOver {
            log::warn!("Restart ignored in phase {:?}", self.session.phase);
            return false;
        }
        self.start()
    }

    /// One scheduled frame. Inert unless playing.
    pub fn frame(&mut self) -> FrameOutcome {
        let outcome = tick(&mut self.session);
        if outcome == FrameOutcome::Collided {
            self.on_collision();
        }
        outcome
    }

    /// Click on a word button. `None` when no round is active.
    pub fn submit(&mut self, option: OptionId) -> Option<Submission> {
        let Some(tracker) = self.session.round.as_mut() else {
            log::warn!("Word click ignored in phase {:?}", self.session.phase);
            return None;
        };

        let submission = tracker.submit(option);
        if submission.accepted {
            log::debug!("Accepted {:?}: \"{}\"", option, tracker.transcript());
            self.events.push(GameEvent::WordAccepted {
                option,
                transcript: tracker.transcript(),
            });
        } else {
            log::debug!("Rejected {:?}", option);
            self.events.push(GameEvent::WordRejected { option });
        }

        if submission.round_complete {
            self.on_round_complete();
        }
        Some(submission)
    }

    /// Click by word value; picks the first unused button with that word
    pub fn submit_token(&mut self, token: &str) -> Option<Submission> {
        let option = self.session.round.as_ref()?.find_available(token);

        match option {
            Some(option) => self.submit(option),
            None => {
                log::debug!("Rejected \"{}\": no such button", token);
                Some(Submission::REJECTED)
            }
        }
    }

    fn on_collision(&mut self) {
        debug_assert!(self.session.is_playing());
        self.session.phase = GamePhase::GameOver;
        self.ticker.stop();
        self.session.round = None;
        self.session.final_score = Some(self.session.score);
        self.events.push(GameEvent::GameOver {
            final_score: self.session.score,
        });
        log::info!(
            "Game over: score {} after {} frames",
            self.session.score,
            self.session.time_ticks
        );
    }

    fn on_round_complete(&mut self) {
        debug_assert!(self.session.is_playing());
        self.session.score += 1;
        self.events.push(GameEvent::RoundCleared {
            score: self.session.score,
        });
        self.next_round();
    }

    /// Fresh question, enemy back at the right edge with score-based speed
    fn next_round(&mut self) {
        let (round, speed) = begin_round(
            &self.bank,
            &self.tuning,
            self.session.score,
            &mut self.rng,
        );
        self.session.enemy.respawn(self.tuning.arena_width, speed);
        self.events.push(GameEvent::RoundStarted {
            prompt: round.prompt.clone(),
            options: round.presentation.clone(),
        });
        self.session.round = Some(AnswerTracker::new(round));
    }
}
