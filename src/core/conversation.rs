//! Pure state transition function for the intake conversation
//!
//! `transition` decides what happens for an inbound event given the current
//! state. It performs no I/O; the bot runtime executes the returned effects
//! in order.

use crate::core::prompts;
use crate::models::{Answer, ConversationState, SatScore};
use thiserror::Error;
use validator::Validate;

/// Inbound user action
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// `/start`
    Start,
    /// `/cancel`
    Cancel,
    /// Plain text, already trimmed
    Text(String),
}

/// Keyboard attached to a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyboard {
    /// Leave whatever the client shows
    Keep,
    MajorChoices,
    Remove,
}

/// Effects to be executed after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Create an empty session, replacing any existing one
    StartSession,
    Record(Answer),
    Reply {
        text: &'static str,
        keyboard: Keyboard,
    },
    /// Run the lookup for the session and send the formatted result
    FindMatches,
    /// Delete the session
    EndSession,
}

impl Effect {
    fn reply(text: &'static str) -> Self {
        Effect::Reply { text, keyboard: Keyboard::Keep }
    }
}

/// Result of a state transition
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    pub new_state: ConversationState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: ConversationState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Events that are not valid in the current state
#[derive(Debug, Error, PartialEq)]
pub enum TransitionError {
    #[error("No conversation in progress")]
    NoConversation,
}

#[derive(Debug, Error, PartialEq)]
pub enum IeltsError {
    #[error("IELTS score is not a number: {0:?}")]
    NotANumber(String),

    #[error("IELTS score {0} is outside 5.0..=9.0")]
    OutOfRange(f64),
}

#[derive(Debug, Validate)]
struct IeltsScore {
    #[validate(range(min = 5.0, max = 9.0))]
    value: f64,
}

/// Parse an IELTS band score in the inclusive range 5.0..=9.0
pub fn parse_ielts(text: &str) -> Result<f64, IeltsError> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|_| IeltsError::NotANumber(text.to_string()))?;

    // NaN slips through range comparisons
    if !value.is_finite() {
        return Err(IeltsError::NotANumber(text.to_string()));
    }

    IeltsScore { value }
        .validate()
        .map_err(|_| IeltsError::OutOfRange(value))?;

    Ok(value)
}

/// Pure transition function
pub fn transition(
    state: ConversationState,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    use crate::models::ConversationState::*;

    match (state, event) {
        // Start is accepted everywhere and always begins from scratch
        (_, Event::Start) => Ok(TransitionResult::new(Grade10)
            .with_effect(Effect::StartSession)
            .with_effect(Effect::Reply {
                text: prompts::WELCOME,
                keyboard: Keyboard::Remove,
            })),

        (End, Event::Cancel) | (End, Event::Text(_)) => Err(TransitionError::NoConversation),

        (_, Event::Cancel) => Ok(TransitionResult::new(End)
            .with_effect(Effect::EndSession)
            .with_effect(Effect::Reply {
                text: prompts::CANCELLED,
                keyboard: Keyboard::Remove,
            })),

        (Grade10, Event::Text(text)) => Ok(TransitionResult::new(Grade11)
            .with_effect(Effect::Record(Answer::Grade10(text)))
            .with_effect(Effect::reply(prompts::ASK_GRADE_11))),

        (Grade11, Event::Text(text)) => Ok(TransitionResult::new(Grade12)
            .with_effect(Effect::Record(Answer::Grade11(text)))
            .with_effect(Effect::reply(prompts::ASK_GRADE_12))),

        (Grade12, Event::Text(text)) => Ok(TransitionResult::new(Ielts)
            .with_effect(Effect::Record(Answer::Grade12(text)))
            .with_effect(Effect::reply(prompts::ASK_IELTS))),

        (Ielts, Event::Text(text)) => match parse_ielts(&text) {
            Ok(score) => Ok(TransitionResult::new(Sat)
                .with_effect(Effect::Record(Answer::Ielts(score)))
                .with_effect(Effect::reply(prompts::ASK_SAT))),
            Err(_) => Ok(TransitionResult::new(Ielts)
                .with_effect(Effect::reply(prompts::INVALID_IELTS))),
        },

        (Sat, Event::Text(text)) => Ok(TransitionResult::new(Major)
            .with_effect(Effect::Record(Answer::Sat(SatScore::parse(&text))))
            .with_effect(Effect::Reply {
                text: prompts::ASK_MAJOR,
                keyboard: Keyboard::MajorChoices,
            })),

        (Major, Event::Text(text)) => Ok(TransitionResult::new(End)
            .with_effect(Effect::Record(Answer::Major(text)))
            .with_effect(Effect::FindMatches)
            .with_effect(Effect::EndSession)),
    }
}
