use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// The only filesystem operations the LED control needs.
pub trait Sysfs {
    /// Succeeds when `path` exists.
    fn stat(&self, path: &str) -> io::Result<()>;

    /// Opens an existing attribute write-only and writes `value` once.
    fn write_attribute(&self, path: &str, value: &str) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostSysfs;

impl Sysfs for HostSysfs {
    fn stat(&self, path: &str) -> io::Result<()> {
        fs::metadata(Path::new(path)).map(|_| ())
    }

    fn write_attribute(&self, path: &str, value: &str) -> io::Result<()> {
        // No create: a missing attribute must fail, never appear.
        let mut file = OpenOptions::new().write(true).truncate(true).open(path)?;
        file.write_all(value.as_bytes())
    }
}

#[cfg(test)]
pub mod mock {
    use super::Sysfs;
    use crate::commands::*;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};
    use std::io;

    /// In-memory stand-in for sysfs; records every write in order.
    #[derive(Debug, Default)]
    pub struct MemorySysfs {
        entries: BTreeSet<String>,
        attributes: RefCell<BTreeMap<String, String>>,
        writes: RefCell<Vec<(String, String)>>,
        read_only: BTreeSet<String>,
    }

    impl MemorySysfs {
        pub fn new() -> Self {
            Default::default()
        }

        /// Adds a directory entry.
        pub fn with_entry(mut self, path: &str) -> Self {
            self.entries.insert(path.to_string());
            self
        }

        /// Adds a writable attribute (and its parent entry).
        pub fn with_attribute(mut self, path: &str) -> Self {
            self.entries.insert(path.to_string());
            self.attributes
                .borrow_mut()
                .insert(path.to_string(), String::new());
            self
        }

        pub fn with_read_only(mut self, path: &str) -> Self {
            self.read_only.insert(path.to_string());
            self.with_attribute(path)
        }

        /// A device `<prefix>global` with its red/green/blue channels and their brightness.
        pub fn controller(prefix: &str) -> Self {
            let mut sysfs = Self::new().with_entry(&channel_path(prefix, GROUP_MARKER));
            for channel in [CHANNEL_RED, CHANNEL_GREEN, CHANNEL_BLUE] {
                let dir = channel_path(prefix, channel);
                sysfs = sysfs
                    .with_entry(&dir)
                    .with_attribute(&brightness_path(&dir));
            }
            sysfs
        }

        pub fn attribute(&self, path: &str) -> Option<String> {
            self.attributes.borrow().get(path).cloned()
        }

        pub fn writes(&self) -> Vec<(String, String)> {
            self.writes.borrow().clone()
        }

        pub fn remove(&mut self, path: &str) {
            self.entries.remove(path);
            self.attributes.borrow_mut().remove(path);
        }
    }

    impl Sysfs for MemorySysfs {
        fn stat(&self, path: &str) -> io::Result<()> {
            if self.entries.contains(path) {
                Ok(())
            } else {
                Err(io::Error::new(io::ErrorKind::NotFound, "no such file or directory"))
            }
        }

        fn write_attribute(&self, path: &str, value: &str) -> io::Result<()> {
            if self.read_only.contains(path) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
            }
            let mut attributes = self.attributes.borrow_mut();
            match attributes.get_mut(path) {
                Some(content) => {
                    *content = value.to_string();
                    self.writes
                        .borrow_mut()
                        .push((path.to_string(), value.to_string()));
                    Ok(())
                }
                None => Err(io::Error::new(io::ErrorKind::NotFound, "no such file or directory")),
            }
        }
    }
}
