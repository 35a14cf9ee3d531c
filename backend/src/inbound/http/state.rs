//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable with mocks.

use std::sync::Arc;

use crate::domain::GossipBoardService;
use crate::domain::ports::{PostsCommand, PostsQuery, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub posts: Arc<dyn PostsCommand>,
    pub posts_query: Arc<dyn PostsQuery>,
}

impl HttpState {
    /// Construct state from individual port implementations.
    pub fn new(
        users: Arc<dyn UsersCommand>,
        users_query: Arc<dyn UsersQuery>,
        posts: Arc<dyn PostsCommand>,
        posts_query: Arc<dyn PostsQuery>,
    ) -> Self {
        Self {
            users,
            users_query,
            posts,
            posts_query,
        }
    }

    /// Back every port with the same board service.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use tagarela::domain::GossipBoardService;
    /// use tagarela::inbound::http::state::HttpState;
    ///
    /// let service = GossipBoardService::seeded(Arc::new(DefaultClock)).expect("seed data");
    /// let state = HttpState::from_service(service);
    /// let _users = state.users_query.clone();
    /// ```
    pub fn from_service(service: GossipBoardService) -> Self {
        let service = Arc::new(service);
        Self::new(service.clone(), service.clone(), service.clone(), service)
    }
}
