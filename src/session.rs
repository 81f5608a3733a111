use crate::cart::Cart;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Unique identifier for an open shopping session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl SessionId {
    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("no open session {}", .session_id.value())]
    SessionNotFound { session_id: SessionId },
}

/// Hands out carts scoped to explicit session handles.
///
/// Each session owns its cart exclusively. Independent sessions never share
/// state, so no synchronization exists here or in [`Cart`].
#[derive(Debug, Default)]
pub struct SessionManager {
    carts: HashMap<SessionId, Cart>,
    next_id: u32,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            carts: HashMap::new(),
            next_id: 0,
        }
    }

    /// Opens a new session with an empty cart and returns its handle.
    pub fn open(&mut self) -> SessionId {
        let session_id = SessionId(self.next_id);
        self.next_id += 1;
        self.carts.insert(session_id, Cart::new());
        debug!(session_id = session_id.value(), "opened session");
        session_id
    }

    /// Gets the cart for `session_id`.
    pub fn cart(&self, session_id: SessionId) -> Result<&Cart, SessionError> {
        self.carts
            .get(&session_id)
            .ok_or(SessionError::SessionNotFound { session_id })
    }

    /// Gets mutable access to the cart for `session_id`.
    pub fn cart_mut(&mut self, session_id: SessionId) -> Result<&mut Cart, SessionError> {
        self.carts
            .get_mut(&session_id)
            .ok_or(SessionError::SessionNotFound { session_id })
    }

    /// Closes a session, returning its cart for final inspection.
    pub fn close(&mut self, session_id: SessionId) -> Result<Cart, SessionError> {
        let cart = self
            .carts
            .remove(&session_id)
            .ok_or(SessionError::SessionNotFound { session_id })?;
        debug!(session_id = session_id.value(), "closed session");
        Ok(cart)
    }

    /// Number of currently open sessions.
    #[inline]
    pub fn open_sessions(&self) -> usize {
        self.carts.len()
    }
}
