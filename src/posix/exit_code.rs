//! Exit codes reserved by the `sh` family of shells.

/// An exit code with a special meaning in `sh`-like shells.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum ShReservedExitCode {
    /// General errors.
    GeneralErrors = 1,
    /// Misuse of shell builtins.
    MisuseShellBuiltins = 2,
    /// The invoked command cannot execute.
    CannotExecute = 126,
    /// Command not found.
    CommandNotFound = 127,
    /// Invalid argument to `exit`.
    InvalidExitCode = 128,
    /// Exit status out of range.
    ExitCodeOutOfRange = 255,
}

impl ShReservedExitCode {
    /// All the reserved exit codes.
    pub const ALL: [Self; 6] = [
        Self::GeneralErrors,
        Self::MisuseShellBuiltins,
        Self::CannotExecute,
        Self::CommandNotFound,
        Self::InvalidExitCode,
        Self::ExitCodeOutOfRange,
    ];

    /// The numeric exit code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Resolves a numeric exit code, or [`None`] if it is not reserved.
    #[must_use]
    pub fn resolve(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|it| i32::from(it.code()) == code)
    }

    /// A description of the exit code, as listed in the Advanced Bash-Scripting Guide.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::GeneralErrors => "Catchall for general errors",
            Self::MisuseShellBuiltins => "Misuse of shell builtins",
            Self::CannotExecute => "Command invoked cannot execute",
            Self::CommandNotFound => "\"command not found\"",
            Self::InvalidExitCode => "Invalid argument to exit",
            Self::ExitCodeOutOfRange => "Exit status out of range",
        }
    }
}

impl From<ShReservedExitCode> for i32 {
    fn from(value: ShReservedExitCode) -> Self {
        Self::from(value.code())
    }
}
