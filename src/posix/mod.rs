//! POSIX lookup tables: signals, reserved shell exit codes and file permission bits.

pub mod exit_code;
pub mod permissions;
#[cfg(all(unix, feature = "unstable-shm"))]
pub mod shm;
pub mod signal;

pub use exit_code::ShReservedExitCode;
pub use permissions::{
    InvalidPermissionBits, InvalidTriad, PosixFilePermissionBits, PosixFilePermissions, Triad,
};
#[cfg(all(unix, feature = "unstable-shm"))]
pub use shm::{LinuxShm, ShmError};
pub use signal::{Architecture, PosixSignal};
