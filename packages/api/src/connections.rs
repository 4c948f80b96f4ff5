use std::fmt;

use crate::types::{Connection, ConnectionDetails, ConnectionStatus, NewConnection, Platform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionError {
    PlatformRequired,
    AccountNameRequired,
    NotFound(u32),
}

impl ConnectionError {
    /// Translation key shown inline on the connections page.
    pub fn key(self) -> &'static str {
        match self {
            ConnectionError::PlatformRequired => "platformRequired",
            ConnectionError::AccountNameRequired => "accountNameRequired",
            ConnectionError::NotFound(_) => "connectionNotFound",
        }
    }
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionError::PlatformRequired => f.write_str("a platform must be selected"),
            ConnectionError::AccountNameRequired => f.write_str("account name is required"),
            ConnectionError::NotFound(id) => write!(f, "connection {id} not found"),
        }
    }
}

impl std::error::Error for ConnectionError {}

/// Accounts the mock user starts with.
pub fn initial_connections() -> Vec<Connection> {
    vec![
        Connection {
            id: 1,
            platform: Platform::WordPress,
            account_name: "myblog.com".to_string(),
            details: ConnectionDetails {
                url: Some("https://myblog.com".to_string()),
                username: "admin".to_string(),
                api_key: "wp_1234567890".to_string(),
                api_secret: None,
            },
            status: ConnectionStatus::Connected,
            auto_post: true,
        },
        Connection {
            id: 2,
            platform: Platform::Facebook,
            account_name: "John Doe".to_string(),
            details: ConnectionDetails {
                url: None,
                username: "johndoe".to_string(),
                api_key: "fb_1234567890".to_string(),
                api_secret: Some("fb_secret_1234".to_string()),
            },
            status: ConnectionStatus::Connected,
            auto_post: false,
        },
    ]
}

/// In-memory list of connected accounts, edited from the connections page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionBook {
    connections: Vec<Connection>,
}

impl ConnectionBook {
    pub fn new(connections: Vec<Connection>) -> Self {
        Self { connections }
    }

    pub fn seeded() -> Self {
        Self::new(initial_connections())
    }

    pub fn all(&self) -> &[Connection] {
        &self.connections
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == id)
    }

    pub fn next_id(&self) -> u32 {
        self.connections.iter().map(|c| c.id).max().map_or(1, |max| max + 1)
    }

    /// Adds the draft as a connected account and returns its id.
    ///
    /// Fields that do not apply to the platform are dropped: only sites keep a
    /// URL and only social accounts keep an API secret.
    pub fn add(&mut self, draft: &NewConnection) -> Result<u32, ConnectionError> {
        let platform = draft.platform.ok_or(ConnectionError::PlatformRequired)?;
        let account_name = draft.account_name.trim();
        if account_name.is_empty() {
            return Err(ConnectionError::AccountNameRequired);
        }

        let id = self.next_id();
        let details = ConnectionDetails {
            url: draft
                .details
                .url
                .clone()
                .filter(|url| platform.is_site() && !url.trim().is_empty()),
            username: draft.details.username.trim().to_string(),
            api_key: draft.details.api_key.clone(),
            api_secret: draft
                .details
                .api_secret
                .clone()
                .filter(|secret| !platform.is_site() && !secret.is_empty()),
        };
        self.connections.push(Connection {
            id,
            platform,
            account_name: account_name.to_string(),
            details,
            status: ConnectionStatus::Connected,
            auto_post: draft.auto_post,
        });
        tracing::info!(
            "connections.add: id={} platform={}",
            id,
            platform.value()
        );
        Ok(id)
    }

    pub fn remove(&mut self, id: u32) -> Result<Connection, ConnectionError> {
        let index = self
            .connections
            .iter()
            .position(|c| c.id == id)
            .ok_or(ConnectionError::NotFound(id))?;
        tracing::info!("connections.remove: id={id}");
        Ok(self.connections.remove(index))
    }

    /// Flips auto-posting and returns the new value.
    pub fn toggle_auto_post(&mut self, id: u32) -> Result<bool, ConnectionError> {
        let connection = self
            .connections
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ConnectionError::NotFound(id))?;
        connection.auto_post = !connection.auto_post;
        tracing::debug!(
            "connections.toggle_auto_post: id={} auto_post={}",
            id,
            connection.auto_post
        );
        Ok(connection.auto_post)
    }
}
