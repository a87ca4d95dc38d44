//! # emporium-update
//!
//! Update detection and install orchestration for the Emporium extension
//! engine:
//! - Remote content loading in both shapes (plain text, container record)
//! - Container document parsing
//! - Version-driven update checks with a consumable result cache
//! - Install coordination against the host-store and activation boundaries

pub mod cache;
pub mod config;
pub mod container;
pub mod host;
pub mod installer;
pub mod loader;
pub mod orchestrator;

pub use cache::{PendingUpdate, UpdateCache};
pub use config::ExplorerOptions;
pub use container::{ContainerDocument, ContainerRecord};
pub use host::{sort_missing_source_last, Activator, HostStore};
pub use installer::{InstallCoordinator, InstallOutcome};
pub use loader::{ContentLoader, HttpLoader};
pub use orchestrator::{CheckOutcome, UpdateOrchestrator};
