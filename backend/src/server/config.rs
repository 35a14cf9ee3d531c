//! HTTP server configuration object.

use std::net::SocketAddr;

use tagarela::domain::GossipBoardService;

/// Everything [`super::create_server`] needs to start listening.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) service: GossipBoardService,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, service: GossipBoardService) -> Self {
        Self { bind_addr, service }
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(not(test), expect(dead_code, reason = "Read by server tests only"))]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
