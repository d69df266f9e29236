use std::collections::HashMap;

use crate::errors::SessionError;

/// Key a chat adapter uses to isolate sessions from one another, typically
/// a channel identifier.
pub type ChannelId = String;

/// A registry of running sessions keyed by channel: at most one session per
/// channel, each exclusively owned. This replaces ambient per-channel
/// dictionaries with explicit create/lookup/destroy operations.
///
/// Sessions never share state, so the registry is a plain single-threaded
/// map; the owning control flow drives one session to completion per event.
///
/// # Examples
///
/// ```
/// use cartamaroc_engine::game::GameSession;
/// use cartamaroc_engine::session::SessionRegistry;
///
/// let mut registry: SessionRegistry<GameSession> = SessionRegistry::new();
/// let game = GameSession::new(["sara", "nabil"], Some(3)).unwrap();
/// registry.create("channel-1".into(), game).unwrap();
///
/// assert!(registry.is_active("channel-1"));
/// let game = registry.get_mut("channel-1").unwrap();
/// game.draw_card_action("sara").unwrap();
///
/// registry.remove("channel-1").unwrap();
/// assert!(!registry.is_active("channel-1"));
/// ```
#[derive(Debug, Default)]
pub struct SessionRegistry<S> {
    sessions: HashMap<ChannelId, S>,
}

impl<S> SessionRegistry<S> {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Registers a session for `channel`; fails when one is already running
    /// there, leaving the existing session untouched.
    pub fn create(&mut self, channel: ChannelId, session: S) -> Result<(), SessionError> {
        if self.sessions.contains_key(&channel) {
            return Err(SessionError::AlreadyActive(channel));
        }
        self.sessions.insert(channel, session);
        Ok(())
    }

    pub fn get(&self, channel: &str) -> Result<&S, SessionError> {
        self.sessions
            .get(channel)
            .ok_or_else(|| SessionError::NotFound(channel.to_string()))
    }

    pub fn get_mut(&mut self, channel: &str) -> Result<&mut S, SessionError> {
        self.sessions
            .get_mut(channel)
            .ok_or_else(|| SessionError::NotFound(channel.to_string()))
    }

    /// Destroys the session for `channel`, returning ownership to the
    /// caller. Dropping the result is a plain cancellation; the core holds
    /// no external resources that would need cleanup.
    pub fn remove(&mut self, channel: &str) -> Result<S, SessionError> {
        self.sessions
            .remove(channel)
            .ok_or_else(|| SessionError::NotFound(channel.to_string()))
    }

    pub fn is_active(&self, channel: &str) -> bool {
        self.sessions.contains_key(channel)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
