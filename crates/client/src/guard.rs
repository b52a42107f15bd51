//! Navigation guards and action gates.
//!
//! Both are the same pure predicate over an [`AccessSnapshot`]: guards
//! apply it per screen entry, gates apply it per mutation inside a screen.
//! Neither ever touches the network, so a decision is instantaneous and
//! cannot hang navigation.

use std::str::FromStr;

use thiserror::Error;

use crate::policy::{AccessPolicy, AccessSnapshot};

/// The screens the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Chat,
    Products,
    Clients,
}

/// Access required to enter a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    Public,
    Authenticated,
    AdminOnly,
}

impl Screen {
    /// Client management is an administrator feature; products and chat are
    /// open to any authenticated user.
    pub fn access(self) -> AccessLevel {
        match self {
            Screen::Login | Screen::Register => AccessLevel::Public,
            Screen::Chat | Screen::Products => AccessLevel::Authenticated,
            Screen::Clients => AccessLevel::AdminOnly,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Register => "register",
            Screen::Chat => "chat",
            Screen::Products => "products",
            Screen::Clients => "clients",
        }
    }
}

impl FromStr for Screen {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(Screen::Login),
            "register" => Ok(Screen::Register),
            "chat" => Ok(Screen::Chat),
            "products" | "produits" => Ok(Screen::Products),
            "clients" => Ok(Screen::Clients),
            _ => Err(()),
        }
    }
}

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// Not authenticated: go log in.
    RedirectToLogin,
    /// Authenticated but not admin: back to the default screen.
    RedirectToChat,
}

/// The guard predicate. Pure: no IO, no await.
pub fn evaluate(level: AccessLevel, snapshot: &AccessSnapshot) -> Decision {
    match level {
        AccessLevel::Public => Decision::Allow,
        AccessLevel::Authenticated | AccessLevel::AdminOnly if !snapshot.authenticated => {
            Decision::RedirectToLogin
        }
        AccessLevel::AdminOnly if !snapshot.admin => Decision::RedirectToChat,
        AccessLevel::Authenticated | AccessLevel::AdminOnly => Decision::Allow,
    }
}

/// An action gate denial, carrying the message shown to the user.
///
/// Not a fault: the action is simply not performed, and no remote call is
/// issued. The services would refuse it anyway — the gate just says so
/// without the round-trip.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct GateDenied {
    pub message: String,
}

/// Gate for administrator-only mutations (create/edit/delete).
pub fn require_admin(snapshot: &AccessSnapshot) -> Result<(), GateDenied> {
    match evaluate(AccessLevel::AdminOnly, snapshot) {
        Decision::Allow => Ok(()),
        _ => Err(GateDenied {
            message: "Action réservée aux administrateurs".to_string(),
        }),
    }
}

/// Owns the current screen and applies the guard on every navigation.
pub struct Router {
    policy: AccessPolicy,
    current: Screen,
}

impl Router {
    pub fn new(policy: AccessPolicy) -> Self {
        Self {
            policy,
            current: Screen::Login,
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Attempt to enter `target`; redirects are applied locally.
    ///
    /// Returns the screen actually entered.
    pub fn navigate(&mut self, target: Screen) -> Screen {
        let snapshot = self.policy.snapshot();
        self.current = match evaluate(target.access(), &snapshot) {
            Decision::Allow => target,
            Decision::RedirectToLogin => {
                tracing::debug!(target = target.name(), "not authenticated, redirecting");
                Screen::Login
            }
            Decision::RedirectToChat => {
                tracing::debug!(target = target.name(), "not admin, redirecting");
                Screen::Chat
            }
        };
        self.current
    }
}
