//! Octal and textual forms of POSIX file permission bits.

use bitflags::bitflags;

bitflags! {
    /// The nine permission bits of a POSIX file mode.
    #[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
    pub struct PosixFilePermissions: u32 {
        /// Read permission, owner.
        const OWNER_READ = 0o400;
        /// Write permission, owner.
        const OWNER_WRITE = 0o200;
        /// Execute permission, owner.
        const OWNER_EXECUTE = 0o100;
        /// Read permission, group.
        const GROUP_READ = 0o040;
        /// Write permission, group.
        const GROUP_WRITE = 0o020;
        /// Execute permission, group.
        const GROUP_EXECUTE = 0o010;
        /// Read permission, others.
        const OTHERS_READ = 0o004;
        /// Write permission, others.
        const OTHERS_WRITE = 0o002;
        /// Execute permission, others.
        const OTHERS_EXECUTE = 0o001;
    }
}

/// An error indicating that a mode has bits set above the nine permission bits.
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
#[error("Permission bits out of range: {0:#o}")]
pub struct InvalidPermissionBits(pub u32);

/// An error indicating that a triad is above `7`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
#[error("Permission triad out of range: {0}")]
pub struct InvalidTriad(pub u8);

/// The three permission bits for one class of users.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, derive_more::Display)]
#[display("{_0}")]
pub struct Triad(u8);

impl Triad {
    const BITMASK: u32 = 0b111;

    /// Creates a triad from its octal digit.
    ///
    /// # Errors
    /// [`InvalidTriad`] if `value` is above `7`.
    pub const fn new(value: u8) -> Result<Self, InvalidTriad> {
        if value <= 7 {
            Ok(Self(value))
        } else {
            Err(InvalidTriad(value))
        }
    }

    /// The octal digit of the triad.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether the read bit is set.
    #[must_use]
    pub const fn read(self) -> bool {
        self.0 & 0b100 != 0
    }

    /// Whether the write bit is set.
    #[must_use]
    pub const fn write(self) -> bool {
        self.0 & 0b010 != 0
    }

    /// Whether the execute bit is set.
    #[must_use]
    pub const fn execute(self) -> bool {
        self.0 & 0b001 != 0
    }

    /// The `ls -l` form of the triad, e.g. `r-x`.
    #[must_use]
    pub fn to_text_string(self) -> String {
        [(self.read(), 'r'), (self.write(), 'w'), (self.execute(), 'x')]
            .into_iter()
            .map(|(set, c)| if set { c } else { '-' })
            .collect()
    }

    #[allow(clippy::cast_possible_truncation)]
    const fn from_mode(mode: u32, shift: u32) -> Self {
        Self(((mode >> shift) & Self::BITMASK) as u8)
    }
}

/// The permission bits of a file, as in `chmod 775`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct PosixFilePermissionBits(u32);

impl PosixFilePermissionBits {
    const OWNER_MODE_SHIFT: u32 = 6;
    const GROUP_MODE_SHIFT: u32 = 3;
    const OTHERS_MODE_SHIFT: u32 = 0;

    /// Creates the permission bits from a mode.
    ///
    /// # Errors
    /// [`InvalidPermissionBits`] if `mode` is above `0o777`.
    pub const fn new(mode: u32) -> Result<Self, InvalidPermissionBits> {
        if mode <= PosixFilePermissions::all().bits() {
            Ok(Self(mode))
        } else {
            Err(InvalidPermissionBits(mode))
        }
    }

    /// Creates the permission bits from the triads of the owner, the group and others.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn from_triads(owner: Triad, group: Triad, others: Triad) -> Self {
        Self(
            ((owner.0 as u32) << Self::OWNER_MODE_SHIFT)
                | ((group.0 as u32) << Self::GROUP_MODE_SHIFT)
                | ((others.0 as u32) << Self::OTHERS_MODE_SHIFT),
        )
    }

    /// The numeric mode.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The permissions of the owner.
    #[must_use]
    pub const fn owner_mode(self) -> Triad {
        Triad::from_mode(self.0, Self::OWNER_MODE_SHIFT)
    }

    /// The permissions of the group.
    #[must_use]
    pub const fn group_mode(self) -> Triad {
        Triad::from_mode(self.0, Self::GROUP_MODE_SHIFT)
    }

    /// The permissions of others.
    #[must_use]
    pub const fn others_mode(self) -> Triad {
        Triad::from_mode(self.0, Self::OTHERS_MODE_SHIFT)
    }

    /// Whether all the bits of `permission` are set.
    #[must_use]
    pub const fn has_permission(self, permission: PosixFilePermissions) -> bool {
        self.permissions().contains(permission)
    }

    /// The set of permissions.
    #[must_use]
    pub const fn permissions(self) -> PosixFilePermissions {
        PosixFilePermissions::from_bits_truncate(self.0)
    }

    /// The octal form of the mode, e.g. `775`.
    #[must_use]
    pub fn to_octal_string(self) -> String {
        format!(
            "{}{}{}",
            self.owner_mode(),
            self.group_mode(),
            self.others_mode()
        )
    }

    /// The `ls -l` form of the mode, e.g. `rwxrwxr-x`.
    #[must_use]
    pub fn to_text_string(self) -> String {
        [self.owner_mode(), self.group_mode(), self.others_mode()]
            .map(Triad::to_text_string)
            .concat()
    }
}

impl From<PosixFilePermissions> for PosixFilePermissionBits {
    fn from(value: PosixFilePermissions) -> Self {
        Self(value.bits())
    }
}

impl TryFrom<u32> for PosixFilePermissionBits {
    type Error = InvalidPermissionBits;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
