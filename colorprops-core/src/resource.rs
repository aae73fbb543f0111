use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// A reference to a file or directory that properties may be loaded from.
///
/// Implemented for [PathBuf]. Applications that ship their resources some
/// other way (archives, embedded assets) can implement it themselves.
pub trait ResourceFile: Sized {
    /// The location of this resource, used in logs and errors.
    fn path(&self) -> &Path;

    /// Whether this resource is an existing, readable file.
    ///
    /// Directories report `false`, so a directory at a candidate path is
    /// skipped rather than failing the load.
    fn exists(&self) -> bool;

    /// Open the resource as a byte stream.
    fn open(&self) -> io::Result<Box<dyn Read + '_>>;

    /// The directory containing this resource.
    ///
    /// `None` only for a filesystem root.
    fn parent(&self) -> Option<Self>;

    /// A resource below this one.
    ///
    /// `relative` may start with `/`; it is always resolved under `self`.
    fn join(&self, relative: &str) -> Self;
}

impl ResourceFile for PathBuf {
    fn path(&self) -> &Path {
        self
    }

    fn exists(&self) -> bool {
        self.is_file()
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(self)?))
    }

    fn parent(&self) -> Option<Self> {
        // A bare relative name lives in the working directory.
        Path::parent(self).map(|p| {
            if p.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                p.to_path_buf()
            }
        })
    }

    fn join(&self, relative: &str) -> Self {
        Path::join(self, relative.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_strips_leading_slash() {
        let root = PathBuf::from("/opt/app");
        assert_eq!(
            ResourceFile::join(&root, "/support/Color.properties"),
            PathBuf::from("/opt/app/support/Color.properties")
        );
    }

    #[test]
    fn test_parent() {
        assert_eq!(
            ResourceFile::parent(&PathBuf::from("/opt/app/Ghost")),
            Some(PathBuf::from("/opt/app"))
        );
        assert_eq!(
            ResourceFile::parent(&PathBuf::from("relative")),
            Some(PathBuf::from("."))
        );
        assert_eq!(
            ResourceFile::parent(&PathBuf::from("relative/Ghidra")),
            Some(PathBuf::from("relative"))
        );
        assert_eq!(ResourceFile::parent(&PathBuf::from("/")), None);
    }
}
