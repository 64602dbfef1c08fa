//! Signals as defined in the POSIX standard, numbered per architecture.

/// A family of architectures sharing a signal numbering.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Architecture {
    /// x86, ARM and most other architectures.
    Common,
    /// Alpha.
    Alpha,
    /// SPARC.
    Sparc,
    /// MIPS.
    Mips,
    /// PA-RISC.
    Parisc,
}

impl Architecture {
    /// All the architecture families.
    pub const ALL: [Self; 5] = [
        Self::Common,
        Self::Alpha,
        Self::Sparc,
        Self::Mips,
        Self::Parisc,
    ];

    /// The architecture family of the compilation target, or [`None`] if it is not known.
    #[must_use]
    pub const fn current() -> Option<Self> {
        if cfg!(any(
            target_arch = "x86",
            target_arch = "x86_64",
            target_arch = "arm",
            target_arch = "aarch64",
            target_arch = "riscv32",
            target_arch = "riscv64",
            target_arch = "powerpc",
            target_arch = "powerpc64",
            target_arch = "s390x",
            target_arch = "loongarch64",
        )) {
            Some(Self::Common)
        } else if cfg!(any(target_arch = "sparc", target_arch = "sparc64")) {
            Some(Self::Sparc)
        } else if cfg!(any(
            target_arch = "mips",
            target_arch = "mips64",
            target_arch = "mips32r6",
            target_arch = "mips64r6",
        )) {
            Some(Self::Mips)
        } else {
            None
        }
    }
}

/// Signal numbers of one signal on each architecture family; `None` where it is absent.
#[derive(Clone, Copy)]
struct Numbers {
    common: Option<u8>,
    alpha: Option<u8>,
    sparc: Option<u8>,
    mips: Option<u8>,
    parisc: Option<u8>,
}

impl Numbers {
    const fn all(number: u8) -> Self {
        Self::split(Some(number), Some(number), Some(number), Some(number))
    }

    /// Alpha and SPARC share the same number.
    const fn split(
        common: Option<u8>,
        alpha_and_sparc: Option<u8>,
        mips: Option<u8>,
        parisc: Option<u8>,
    ) -> Self {
        Self {
            common,
            alpha: alpha_and_sparc,
            sparc: alpha_and_sparc,
            mips,
            parisc,
        }
    }
}

/// A POSIX signal.
///
/// The declaration order is not the signal number, which depends on the [`Architecture`]. Use
/// [`PosixSignal::number`] and [`PosixSignal::by_number`] instead.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, derive_more::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[allow(missing_docs)]
pub enum PosixSignal {
    #[display("SIGHUP")]
    Sighup,
    #[display("SIGINT")]
    Sigint,
    #[display("SIGQUIT")]
    Sigquit,
    #[display("SIGILL")]
    Sigill,
    #[display("SIGTRAP")]
    Sigtrap,
    #[display("SIGABRT")]
    Sigabrt,
    #[display("SIGIOT")]
    Sigiot,
    #[display("SIGBUS")]
    Sigbus,
    #[display("SIGEMT")]
    Sigemt,
    #[display("SIGFPE")]
    Sigfpe,
    #[display("SIGKILL")]
    Sigkill,
    #[display("SIGUSR1")]
    Sigusr1,
    #[display("SIGSEGV")]
    Sigsegv,
    #[display("SIGUSR2")]
    Sigusr2,
    #[display("SIGPIPE")]
    Sigpipe,
    #[display("SIGALRM")]
    Sigalrm,
    #[display("SIGTERM")]
    Sigterm,
    #[display("SIGSTKFLT")]
    Sigstkflt,
    #[display("SIGCHLD")]
    Sigchld,
    #[display("SIGCLD")]
    Sigcld,
    #[display("SIGCONT")]
    Sigcont,
    #[display("SIGSTOP")]
    Sigstop,
    #[display("SIGTSTP")]
    Sigtstp,
    #[display("SIGTTIN")]
    Sigttin,
    #[display("SIGTTOU")]
    Sigttou,
    #[display("SIGURG")]
    Sigurg,
    #[display("SIGXCPU")]
    Sigxcpu,
    #[display("SIGXFSZ")]
    Sigxfsz,
    #[display("SIGVTALRM")]
    Sigvtalrm,
    #[display("SIGPROF")]
    Sigprof,
    #[display("SIGWINCH")]
    Sigwinch,
    #[display("SIGIO")]
    Sigio,
    #[display("SIGPOLL")]
    Sigpoll,
    #[display("SIGPWR")]
    Sigpwr,
    #[display("SIGINFO")]
    Siginfo,
    #[display("SIGLOST")]
    Siglost,
    #[display("SIGSYS")]
    Sigsys,
    #[display("SIGUNUSED")]
    Sigunused,
}

impl PosixSignal {
    /// The number of entries in a signal table, see [`PosixSignal::for_platform`].
    pub const TABLE_SIZE: usize = 32;

    /// All the signals, more common aliases first.
    pub const ALL: [Self; 38] = [
        Self::Sighup,
        Self::Sigint,
        Self::Sigquit,
        Self::Sigill,
        Self::Sigtrap,
        Self::Sigabrt,
        Self::Sigiot,
        Self::Sigbus,
        Self::Sigemt,
        Self::Sigfpe,
        Self::Sigkill,
        Self::Sigusr1,
        Self::Sigsegv,
        Self::Sigusr2,
        Self::Sigpipe,
        Self::Sigalrm,
        Self::Sigterm,
        Self::Sigstkflt,
        Self::Sigchld,
        Self::Sigcld,
        Self::Sigcont,
        Self::Sigstop,
        Self::Sigtstp,
        Self::Sigttin,
        Self::Sigttou,
        Self::Sigurg,
        Self::Sigxcpu,
        Self::Sigxfsz,
        Self::Sigvtalrm,
        Self::Sigprof,
        Self::Sigwinch,
        Self::Sigio,
        Self::Sigpoll,
        Self::Sigpwr,
        Self::Siginfo,
        Self::Siglost,
        Self::Sigsys,
        Self::Sigunused,
    ];

    // Numbers taken from signal(7).
    #[allow(clippy::match_same_arms)]
    const fn numbers(self) -> Numbers {
        const ABSENT: Option<u8> = None;
        match self {
            Self::Sighup => Numbers::all(1),
            Self::Sigint => Numbers::all(2),
            Self::Sigquit => Numbers::all(3),
            Self::Sigill => Numbers::all(4),
            Self::Sigtrap => Numbers::all(5),
            Self::Sigabrt | Self::Sigiot => Numbers::all(6),
            Self::Sigbus => Numbers::split(Some(7), Some(10), Some(10), Some(10)),
            Self::Sigemt => Numbers::split(ABSENT, Some(7), Some(7), ABSENT),
            Self::Sigfpe => Numbers::all(8),
            Self::Sigkill => Numbers::all(9),
            Self::Sigusr1 => Numbers::split(Some(10), Some(30), Some(16), Some(16)),
            Self::Sigsegv => Numbers::all(11),
            Self::Sigusr2 => Numbers::split(Some(12), Some(31), Some(17), Some(17)),
            Self::Sigpipe => Numbers::all(13),
            Self::Sigalrm => Numbers::all(14),
            Self::Sigterm => Numbers::all(15),
            Self::Sigstkflt => Numbers::split(Some(16), ABSENT, ABSENT, Some(7)),
            Self::Sigchld => Numbers::split(Some(17), Some(20), Some(18), Some(18)),
            Self::Sigcld => Numbers::split(ABSENT, ABSENT, Some(18), ABSENT),
            Self::Sigcont => Numbers::split(Some(18), Some(19), Some(25), Some(26)),
            Self::Sigstop => Numbers::split(Some(19), Some(17), Some(23), Some(24)),
            Self::Sigtstp => Numbers::split(Some(20), Some(18), Some(24), Some(25)),
            Self::Sigttin => Numbers::split(Some(21), Some(21), Some(26), Some(27)),
            Self::Sigttou => Numbers::split(Some(22), Some(22), Some(27), Some(28)),
            Self::Sigurg => Numbers::split(Some(23), Some(16), Some(21), Some(29)),
            Self::Sigxcpu => Numbers::split(Some(24), Some(24), Some(30), Some(12)),
            Self::Sigxfsz => Numbers::split(Some(25), Some(25), Some(31), Some(30)),
            Self::Sigvtalrm => Numbers::split(Some(26), Some(26), Some(28), Some(20)),
            Self::Sigprof => Numbers::split(Some(27), Some(27), Some(29), Some(21)),
            Self::Sigwinch => Numbers::split(Some(28), Some(28), Some(20), Some(23)),
            Self::Sigio | Self::Sigpoll => Numbers::split(Some(29), Some(23), Some(22), Some(22)),
            Self::Sigpwr => Numbers {
                common: Some(30),
                alpha: Some(29),
                sparc: ABSENT,
                mips: Some(19),
                parisc: Some(19),
            },
            Self::Siginfo => Numbers {
                common: ABSENT,
                alpha: Some(29),
                sparc: ABSENT,
                mips: ABSENT,
                parisc: ABSENT,
            },
            Self::Siglost => Numbers {
                common: ABSENT,
                alpha: ABSENT,
                sparc: Some(29),
                mips: ABSENT,
                parisc: ABSENT,
            },
            Self::Sigsys => Numbers::split(Some(31), Some(12), Some(12), Some(31)),
            Self::Sigunused => Numbers::split(Some(31), ABSENT, ABSENT, Some(31)),
        }
    }

    /// The number of the signal on `architecture`, or [`None`] if the signal does not exist
    /// there.
    #[must_use]
    pub const fn number(self, architecture: Architecture) -> Option<u8> {
        let numbers = self.numbers();
        match architecture {
            Architecture::Common => numbers.common,
            Architecture::Alpha => numbers.alpha,
            Architecture::Sparc => numbers.sparc,
            Architecture::Mips => numbers.mips,
            Architecture::Parisc => numbers.parisc,
        }
    }

    /// Looks up the signal with `number` on `architecture`.
    /// When several aliases share the number, the more common one is returned.
    #[must_use]
    pub fn by_number(number: u8, architecture: Architecture) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|it| it.number(architecture) == Some(number))
    }

    /// The signal table of `architecture`, indexed by signal number.
    /// Entry 0 and numbers without a signal are [`None`].
    #[must_use]
    pub fn for_platform(architecture: Architecture) -> [Option<Self>; Self::TABLE_SIZE] {
        std::array::from_fn(|number| {
            u8::try_from(number)
                .ok()
                .and_then(|it| Self::by_number(it, architecture))
        })
    }

    /// A description of the signal, as in `signal(7)`.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Sighup => {
                "Hangup detected on controlling terminal or death of controlling process"
            }
            Self::Sigint => "Interrupt from keyboard",
            Self::Sigquit => "Quit from keyboard",
            Self::Sigill => "Illegal Instruction",
            Self::Sigtrap => "Trace/breakpoint trap",
            Self::Sigabrt => "Abort signal from abort",
            Self::Sigiot => "IOT trap. A synonym for SIGABRT",
            Self::Sigbus => "Bus error (bad memory access)",
            Self::Sigemt => "Emulator trap",
            Self::Sigfpe => "Floating-point exception",
            Self::Sigkill => "Kill signal",
            Self::Sigusr1 => "User-defined signal 1",
            Self::Sigsegv => "Invalid memory reference",
            Self::Sigusr2 => "User-defined signal 2",
            Self::Sigpipe => "Broken pipe: write to pipe with no readers",
            Self::Sigalrm => "Timer signal from alarm",
            Self::Sigterm => "Termination signal",
            Self::Sigstkflt => "Stack fault on coprocessor",
            Self::Sigchld | Self::Sigcld => "Child stopped or terminated",
            Self::Sigcont => "Continue if stopped",
            Self::Sigstop => "Stop process",
            Self::Sigtstp => "Stop typed at terminal",
            Self::Sigttin => "Terminal input for background process",
            Self::Sigttou => "Terminal output for background process",
            Self::Sigurg => "Urgent condition on socket",
            Self::Sigxcpu => "CPU time limit exceeded",
            Self::Sigxfsz => "File size limit exceeded",
            Self::Sigvtalrm => "Virtual alarm clock",
            Self::Sigprof => "Profiling timer expired",
            Self::Sigwinch => "Window resize signal",
            Self::Sigio => "I/O now possible",
            Self::Sigpoll => "Pollable event",
            Self::Sigpwr | Self::Siginfo => "Power failure",
            Self::Siglost => "File lock lost",
            Self::Sigsys | Self::Sigunused => "Bad system call",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn numbers_in_range() {
        for signal in PosixSignal::ALL {
            for architecture in Architecture::ALL {
                if let Some(number) = signal.number(architecture) {
                    assert!((1..32).contains(&number), "{signal} on {architecture:?}");
                }
            }
        }
    }

    #[test]
    fn common_table() {
        let table = PosixSignal::for_platform(Architecture::Common);
        for (number, signal) in table.iter().enumerate() {
            if let Some(signal) = signal {
                assert_eq!(
                    signal.number(Architecture::Common).map(usize::from),
                    Some(number)
                );
            }
        }
        assert_eq!(table[0], None);
        assert_eq!(table[9], Some(PosixSignal::Sigkill));
        assert_eq!(table[6], Some(PosixSignal::Sigabrt));
        assert_eq!(table[29], Some(PosixSignal::Sigio));
    }

    #[test]
    fn common_numbers() {
        assert_eq!(PosixSignal::Sigkill.number(Architecture::Common), Some(9));
        assert_eq!(PosixSignal::Siginfo.number(Architecture::Common), None);
    }

    #[test]
    fn architecture_specific_numbers() {
        assert_eq!(PosixSignal::Sigbus.number(Architecture::Sparc), Some(10));
        assert_eq!(PosixSignal::Sigpwr.number(Architecture::Sparc), None);
        assert_eq!(
            PosixSignal::by_number(29, Architecture::Sparc),
            Some(PosixSignal::Siglost)
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(PosixSignal::Sigusr1.to_string(), "SIGUSR1");
    }

    #[test]
    fn all_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = PosixSignal::ALL.into_iter().collect();
        assert_eq!(unique.len(), PosixSignal::ALL.len());
    }

    #[test]
    fn aliases_share_numbers() {
        for architecture in Architecture::ALL {
            assert_eq!(
                PosixSignal::Sigio.number(architecture),
                PosixSignal::Sigpoll.number(architecture)
            );
            assert_eq!(
                PosixSignal::Sigabrt.number(architecture),
                PosixSignal::Sigiot.number(architecture)
            );
        }
    }

    proptest! {
        #[test]
        fn lookup_matches_number(signal in any::<PosixSignal>(), architecture in any::<Architecture>()) {
            if let Some(number) = signal.number(architecture) {
                let found = PosixSignal::by_number(number, architecture);
                prop_assert!(found.is_some());
                prop_assert_eq!(found.and_then(|it| it.number(architecture)), Some(number));
            }
        }
    }
}
