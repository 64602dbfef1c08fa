//! Naming scheme for worker threads.

use std::{
    collections::HashMap,
    io,
    sync::{
        LazyLock, Mutex, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
    thread::{self, JoinHandle},
};

/// Number of factories created so far, per prefix.
static POOL_COUNTS: LazyLock<Mutex<HashMap<String, usize>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// A thread factory naming its threads `<prefix>-<pool>-thread-<thread>`, where
/// - `<prefix>` is the prefix given to [`NamedThreadFactory::new`],
/// - `<pool>` is the index of the factory among all factories with the same prefix in this
///   process, starting from 1,
/// - `<thread>` is the index of the thread created by this factory, starting from 1.
#[derive(Debug)]
pub struct NamedThreadFactory {
    prefix: String,
    pool_index: usize,
    thread_count: AtomicUsize,
}

impl NamedThreadFactory {
    /// Creates a factory and registers it under `prefix`.
    #[must_use]
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        let prefix = prefix.into();
        let pool_index = {
            let mut counts = POOL_COUNTS.lock().unwrap_or_else(PoisonError::into_inner);
            let count = counts.entry(prefix.clone()).or_default();
            *count += 1;
            *count
        };
        Self {
            prefix,
            pool_index,
            thread_count: AtomicUsize::new(0),
        }
    }

    /// The name prefix of the factory.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The index of the factory among the factories sharing its prefix.
    #[must_use]
    pub const fn pool_index(&self) -> usize {
        self.pool_index
    }

    /// Reserves the name of the next thread.
    #[must_use]
    pub fn next_thread_name(&self) -> String {
        let thread_index = self.thread_count.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}-thread-{thread_index}", self.prefix, self.pool_index)
    }

    /// Spawns a thread running `f`, named after the next thread name.
    ///
    /// # Errors
    /// If the operating system fails to create the thread.
    pub fn new_thread<F, T>(&self, f: F) -> io::Result<JoinHandle<T>>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let name = self.next_thread_name();
        log::debug!("Spawning thread {name}");
        thread::Builder::new().name(name).spawn(f)
    }
}
