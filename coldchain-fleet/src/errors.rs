//! Fleet-level errors
//!
//! The tick itself cannot fail. What can go wrong at this layer is an operator
//! action naming a box that does not exist, a settings update that would break
//! the engine's assumptions, or a snapshot that cannot be exported.

use coldchain_core::SettingsError;
use thiserror_no_std::Error;

/// Result type for fleet operations
pub type FleetResult<T> = Result<T, FleetError>;

/// Errors raised by fleet operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FleetError {
    /// No box with this id in the fleet
    #[error("Unknown box: {id}")]
    UnknownBox {
        /// Id that was looked up
        id: String,
    },

    /// Settings update rejected
    #[error("Settings rejected: {0}")]
    Settings(#[from] SettingsError),

    /// Snapshot could not be serialized
    #[error("Snapshot export failed: {reason}")]
    Export {
        /// Serializer message
        reason: String,
    },

    /// The runner was already stopped or its thread panicked
    #[error("Runner already stopped")]
    RunnerAlreadyStopped,
}
