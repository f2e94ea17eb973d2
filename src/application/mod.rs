//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CompressUseCase` - One scan-and-compress pass with freshness check
//! - `CheckUseCase` - Read-only artifact status, optional round-trip verification
//! - `CleanUseCase` - Remove generated artifacts
//!
//! ## Hooks
//!
//! - `HookRegistry` - Pre-action callbacks keyed by build action name

pub mod check;
pub mod clean;
pub mod compress;
pub mod hooks;

pub use check::{ArtifactStatus, CheckEntry, CheckOptions, CheckReport, CheckUseCase};
pub use clean::{CleanOptions, CleanReport, CleanUseCase};
pub use compress::{CompressOptions, CompressReport, CompressUseCase, CompressedFile};
pub use hooks::{HookContext, HookRegistry, PreAction, DEFAULT_PRE_ACTIONS, UPLOAD_FS, UPLOAD_FS_OTA};
