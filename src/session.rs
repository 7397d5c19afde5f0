use crate::core_network::endpoint::DataEndpoint;
use std::net::SocketAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepted, greeting not yet sent.
    Greeting,
    /// Any command may be dispatched. There is no separate logged-in state.
    Ready,
    Closed,
}

/// Per-connection state, owned by the task serving that control connection.
#[derive(Debug)]
pub struct Session {
    peer: SocketAddr,
    state: SessionState,
    current_dir: String,
    data_endpoint: Option<DataEndpoint>,
}

impl Session {
    pub fn new(peer: SocketAddr) -> Self {
        Self {
            peer,
            state: SessionState::Greeting,
            current_dir: String::from("/"),
            data_endpoint: None,
        }
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == SessionState::Closed
    }

    pub fn mark_ready(&mut self) {
        if self.state == SessionState::Greeting {
            self.state = SessionState::Ready;
        }
    }

    pub fn close(&mut self) {
        self.state = SessionState::Closed;
    }

    pub fn current_dir(&self) -> &str {
        &self.current_dir
    }

    /// The working directory is cosmetic: nothing backs it on disk.
    pub fn set_current_dir(&mut self, dir: impl Into<String>) {
        self.current_dir = dir.into();
    }

    pub fn data_endpoint(&self) -> Option<&DataEndpoint> {
        self.data_endpoint.as_ref()
    }

    /// Replaces any previously negotiated endpoint.
    pub fn set_data_endpoint(&mut self, endpoint: DataEndpoint) {
        self.data_endpoint = Some(endpoint);
    }
}
