//! Three-part app version stored in a single-line file.
//!
//! ```text
//! 2.4.1
//! │ │ └─ minor
//! │ └─── major
//! └───── release
//! ```
//!
//! Bumping a part resets every less significant part to zero.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("no version file present at `{}`", .0.display())]
    Missing(PathBuf),

    #[error("malformed version `{0}`, expected `release.major.minor`")]
    Malformed(String),

    #[error("cannot bump the {part:?} part of `{version}` any further")]
    Overflow { version: Version, part: VersionPart },

    #[error("IO error on `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Version component selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VersionPart {
    Release,
    Major,
    Minor,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub release: u32,
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(release: u32, major: u32, minor: u32) -> Self {
        Self {
            release,
            major,
            minor,
        }
    }

    /// Increment `part`, zeroing the parts below it.
    pub fn bump(self, part: VersionPart) -> Result<Self, VersionError> {
        let bumped = |n: u32| {
            n.checked_add(1)
                .ok_or(VersionError::Overflow { version: self, part })
        };
        let next = match part {
            VersionPart::Release => Self::new(bumped(self.release)?, 0, 0),
            VersionPart::Major => Self::new(self.release, bumped(self.major)?, 0),
            VersionPart::Minor => Self::new(self.release, self.major, bumped(self.minor)?),
        };
        Ok(next)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || VersionError::Malformed(s.trim().to_string());
        let parts = s
            .trim()
            .split('.')
            .map(|part| part.parse::<u32>().map_err(|_| malformed()))
            .collect::<Result<Vec<_>, _>>()?;
        match parts.as_slice() {
            [release, major, minor] => Ok(Self::new(*release, *major, *minor)),
            _ => Err(malformed()),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.release, self.major, self.minor)
    }
}

/// Handle on the version file.
#[derive(Debug, Clone)]
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the current version. The file must exist and be well formed.
    pub fn get(&self) -> Result<Version, VersionError> {
        if !self.path.exists() {
            return Err(VersionError::Missing(self.path.clone()));
        }
        let raw = fs::read_to_string(&self.path).map_err(|source| VersionError::Io {
            path: self.path.clone(),
            source,
        })?;
        raw.parse()
    }

    pub fn set(&self, version: Version) -> Result<(), VersionError> {
        fs::write(&self.path, version.to_string()).map_err(|source| VersionError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Bump `part` and persist. A missing or malformed file counts as `0.0.0`.
    pub fn increment(&self, part: VersionPart) -> Result<Version, VersionError> {
        let current = match self.get() {
            Ok(version) => version,
            Err(VersionError::Missing(_) | VersionError::Malformed(_)) => Version::default(),
            Err(err) => return Err(err),
        };
        let next = current.bump(part)?;
        self.set(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse() {
        assert_eq!("1.2.3".parse::<Version>().unwrap(), Version::new(1, 2, 3));
        assert_eq!(" 0.10.7\n".parse::<Version>().unwrap(), Version::new(0, 10, 7));
    }

    #[test]
    fn test_parse_malformed() {
        for input in ["", "1.2", "1.2.3.4", "a.b.c", "1..3", "-1.0.0"] {
            assert!(
                matches!(input.parse::<Version>(), Err(VersionError::Malformed(_))),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_display_round_trip() {
        let version = Version::new(4, 0, 12);
        assert_eq!(version.to_string(), "4.0.12");
    }

    #[test]
    fn test_bump_resets_lower_parts() {
        let version = Version::new(1, 2, 3);
        assert_eq!(version.bump(VersionPart::Minor).unwrap(), Version::new(1, 2, 4));
        assert_eq!(version.bump(VersionPart::Major).unwrap(), Version::new(1, 3, 0));
        assert_eq!(version.bump(VersionPart::Release).unwrap(), Version::new(2, 0, 0));
    }

    #[test]
    fn test_bump_at_maximum_is_error() {
        let version = Version::new(u32::MAX, u32::MAX, u32::MAX);
        for part in [VersionPart::Release, VersionPart::Major, VersionPart::Minor] {
            assert!(matches!(
                version.bump(part),
                Err(VersionError::Overflow { part: p, .. }) if p == part
            ));
        }
        // Lower parts at maximum do not block a higher bump
        assert_eq!(
            Version::new(0, u32::MAX, u32::MAX).bump(VersionPart::Release).unwrap(),
            Version::new(1, 0, 0)
        );
    }

    #[test]
    fn test_increment_at_maximum_keeps_file() {
        let dir = TempDir::new().unwrap();
        let file = VersionFile::new(dir.path().join("v"));
        let max = format!("1.2.{}", u32::MAX);
        fs::write(&file.path, &max).unwrap();

        assert!(matches!(
            file.increment(VersionPart::Minor),
            Err(VersionError::Overflow { .. })
        ));
        assert_eq!(fs::read_to_string(&file.path).unwrap(), max);
    }

    #[test]
    fn test_get_missing_file() {
        let dir = TempDir::new().unwrap();
        let file = VersionFile::new(dir.path().join("v"));
        assert!(matches!(file.get(), Err(VersionError::Missing(_))));
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let file = VersionFile::new(dir.path().join("v"));
        file.set(Version::new(0, 3, 1)).unwrap();
        assert_eq!(fs::read_to_string(&file.path).unwrap(), "0.3.1");
        assert_eq!(file.get().unwrap(), Version::new(0, 3, 1));
    }

    #[test]
    fn test_increment_existing() {
        let dir = TempDir::new().unwrap();
        let file = VersionFile::new(dir.path().join("v"));
        fs::write(&file.path, "1.4.9").unwrap();

        assert_eq!(file.increment(VersionPart::Major).unwrap(), Version::new(1, 5, 0));
        assert_eq!(file.get().unwrap(), Version::new(1, 5, 0));
    }

    #[test]
    fn test_increment_starts_from_zero() {
        let dir = TempDir::new().unwrap();
        let file = VersionFile::new(dir.path().join("v"));
        assert_eq!(file.increment(VersionPart::Minor).unwrap(), Version::new(0, 0, 1));

        fs::write(&file.path, "garbage").unwrap();
        assert_eq!(file.increment(VersionPart::Release).unwrap(), Version::new(1, 0, 0));
    }
}
