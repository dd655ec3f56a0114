//! Client-side conversation state: the controller behind the chat UI.

pub mod controller;

pub use controller::{
    ConversationController, HistoryCursor, SubmitOutcome, TurnRelay, ERROR_REPLY,
};
