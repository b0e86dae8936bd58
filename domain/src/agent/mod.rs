//! Advisory agents: the three fixed roles and their identities.

pub mod entities;
pub mod role;

pub use entities::Agent;
pub use role::AgentRole;
