//! Platform capability probing for orientation access.

use clap::ValueEnum;
use serde::Deserialize;

/// What the platform needs before orientation events can be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    /// Events can be subscribed to right away.
    NotRequired,
    /// An explicit permission request must succeed first.
    RequiresRequest,
    /// No orientation API at all.
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Resolved once per session open (and on every retry).
pub trait PlatformCapabilities {
    fn probe(&self) -> Capability;

    /// `Err` carries the platform's failure message.
    fn request_permission(&mut self) -> Result<Permission, String>;
}

/// Capability provider with fixed answers.
#[derive(Debug, Clone)]
pub struct StaticPlatform {
    capability: Capability,
    permission: Result<Permission, String>,
    requests: usize,
}

impl StaticPlatform {
    pub fn new(capability: Capability, permission: Result<Permission, String>) -> Self {
        Self {
            capability,
            permission,
            requests: 0,
        }
    }

    pub fn not_required() -> Self {
        Self::new(Capability::NotRequired, Ok(Permission::Granted))
    }

    pub fn requires(permission: Result<Permission, String>) -> Self {
        Self::new(Capability::RequiresRequest, permission)
    }

    pub fn unsupported() -> Self {
        Self::new(Capability::Unsupported, Ok(Permission::Denied))
    }

    pub fn set_permission(&mut self, permission: Result<Permission, String>) {
        self.permission = permission;
    }

    /// How many times a permission request was issued.
    pub fn requests(&self) -> usize {
        self.requests
    }
}

impl PlatformCapabilities for StaticPlatform {
    fn probe(&self) -> Capability {
        self.capability
    }

    fn request_permission(&mut self) -> Result<Permission, String> {
        self.requests += 1;
        self.permission.clone()
    }
}
