//! Scratch directories in the RAM-backed `/dev/shm` of Linux.

use std::{
    collections::HashSet,
    fs, io,
    os::unix::fs::{PermissionsExt, symlink},
    path::{Component, Path, PathBuf},
};

use super::permissions::PosixFilePermissions;

/// An error raised when managing a [`LinuxShm`].
#[derive(Debug, thiserror::Error)]
#[instability::unstable(feature = "shm")]
pub enum ShmError {
    /// `/dev/shm` does not exist on this system.
    #[error("/dev/shm is not present in the system")]
    Unavailable,
    /// The path to create already exists.
    #[error("Target already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    /// The path does not lie under its expected root.
    #[error("Path escapes its root: {}", .0.display())]
    OutsideShmRoot(PathBuf),
    /// The file system operation failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A directory under `/dev/shm`, removed together with the symlinks pointing to it when
/// closed or dropped.
///
/// Since the directory resides in RAM, failing to remove it leaks memory until reboot.
/// Prefer [`LinuxShm::close`] to observe the failure.
#[derive(Debug)]
#[instability::unstable(feature = "shm")]
pub struct LinuxShm {
    directory: PathBuf,
    symlinks: HashSet<PathBuf>,
    closed: bool,
}

/// Whether `path` is relative and stays under the directory it is resolved against.
fn is_contained(path: &Path) -> bool {
    path.components().all(|it| matches!(it, Component::Normal(_) | Component::CurDir))
}

impl LinuxShm {
    /// The root directory of the Linux `shm`.
    pub const SHM_ROOT: &'static str = "/dev/shm";

    /// The mode of the created directory, `rwxrwx---`.
    pub const MODE: PosixFilePermissions = PosixFilePermissions::OWNER_READ
        .union(PosixFilePermissions::OWNER_WRITE)
        .union(PosixFilePermissions::OWNER_EXECUTE)
        .union(PosixFilePermissions::GROUP_READ)
        .union(PosixFilePermissions::GROUP_WRITE)
        .union(PosixFilePermissions::GROUP_EXECUTE);

    /// Whether `/dev/shm` is present on the system.
    #[must_use]
    pub fn is_available() -> bool {
        Path::new(Self::SHM_ROOT).is_dir()
    }

    /// Creates the directory `/dev/shm/[subpath/]name` with mode `770`.
    ///
    /// `subpath` is either relative or an absolute path under `/dev/shm`.
    ///
    /// # Errors
    /// - [`ShmError::Unavailable`] if `/dev/shm` does not exist.
    /// - [`ShmError::OutsideShmRoot`] if the directory would not be under `/dev/shm`.
    /// - [`ShmError::AlreadyExists`] if the directory already exists.
    /// - [`ShmError::Io`] if the directory cannot be created.
    pub fn new(name: &str, subpath: Option<&Path>) -> Result<Self, ShmError> {
        if !Self::is_available() {
            return Err(ShmError::Unavailable);
        }
        let root = Path::new(Self::SHM_ROOT);
        let parent = match subpath {
            None => root.to_path_buf(),
            Some(it) if it.is_absolute() => {
                let relative = it
                    .strip_prefix(root)
                    .map_err(|_| ShmError::OutsideShmRoot(it.to_path_buf()))?;
                if !is_contained(relative) {
                    return Err(ShmError::OutsideShmRoot(it.to_path_buf()));
                }
                it.to_path_buf()
            }
            Some(it) if is_contained(it) => root.join(it),
            Some(it) => return Err(ShmError::OutsideShmRoot(it.to_path_buf())),
        };
        let directory = parent.join(name);
        if !is_contained(Path::new(name)) || directory == parent {
            return Err(ShmError::OutsideShmRoot(directory));
        }

        fs::create_dir_all(&parent)?;
        match fs::create_dir(&directory) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(ShmError::AlreadyExists(directory));
            }
            Err(e) => return Err(e.into()),
        }
        let mode = fs::Permissions::from_mode(Self::MODE.bits());
        if let Err(e) = fs::set_permissions(&directory, mode) {
            if let Err(cleanup) = fs::remove_dir(&directory) {
                log::error!(
                    "Unable to delete {}, this may leak memory: {cleanup}",
                    directory.display()
                );
            }
            return Err(e.into());
        }
        log::debug!("Created shm directory {}", directory.display());
        Ok(Self {
            directory,
            symlinks: HashSet::new(),
            closed: false,
        })
    }

    /// The directory created under `/dev/shm`.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The symlinks created by [`LinuxShm::create_symlink`] and not removed yet.
    pub fn symlinks(&self) -> impl Iterator<Item = &Path> {
        self.symlinks.iter().map(PathBuf::as_path)
    }

    /// Creates a symlink at `location` pointing to `subpath` within the directory.
    /// Returns `location`.
    ///
    /// # Errors
    /// - [`ShmError::AlreadyExists`] if `location` exists.
    /// - [`ShmError::OutsideShmRoot`] if `subpath` escapes the directory.
    /// - [`ShmError::Io`] if the symlink cannot be created.
    pub fn create_symlink<L, S>(&mut self, location: L, subpath: S) -> Result<PathBuf, ShmError>
    where
        L: AsRef<Path>,
        S: AsRef<Path>,
    {
        let location = location.as_ref();
        let subpath = subpath.as_ref();
        if location.symlink_metadata().is_ok() {
            return Err(ShmError::AlreadyExists(location.to_path_buf()));
        }
        if !is_contained(subpath) {
            return Err(ShmError::OutsideShmRoot(subpath.to_path_buf()));
        }

        symlink(self.directory.join(subpath), location)?;
        self.symlinks.insert(location.to_path_buf());
        Ok(location.to_path_buf())
    }

    /// Removes the symlink at `location`.
    ///
    /// Returns `true` if the symlink was deleted, or `false` if `location` is not a symlink or
    /// cannot be deleted.
    pub fn remove_symlink<L: AsRef<Path>>(&mut self, location: L) -> bool {
        let location = location.as_ref();
        let is_symlink = location
            .symlink_metadata()
            .is_ok_and(|it| it.file_type().is_symlink());
        if !is_symlink {
            self.symlinks.remove(location);
            return false;
        }
        match fs::remove_file(location) {
            Ok(()) => {
                self.symlinks.remove(location);
                true
            }
            Err(e) => {
                log::warn!("Failed to remove symlink {}: {e}", location.display());
                false
            }
        }
    }

    /// Removes the symlinks and the directory.
    ///
    /// # Errors
    /// [`ShmError::Io`] if the directory cannot be deleted. The memory it occupies is then
    /// leaked.
    pub fn close(mut self) -> Result<(), ShmError> {
        self.release().map_err(ShmError::from)
    }

    fn release(&mut self) -> io::Result<()> {
        self.closed = true;
        for link in self.symlinks.drain() {
            match fs::remove_file(&link) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => log::warn!("Failed to remove symlink {}: {e}", link.display()),
            }
        }
        match fs::remove_dir_all(&self.directory) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl PartialEq for LinuxShm {
    fn eq(&self, other: &Self) -> bool {
        self.directory == other.directory
    }
}

impl Eq for LinuxShm {}

impl Drop for LinuxShm {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.release() {
            log::error!(
                "Unable to delete {}, this may leak memory: {e}",
                self.directory.display()
            );
        }
    }
}
