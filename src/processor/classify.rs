//! Filesystem classification of scan entries.
//!
//! Directory checks look at the entry itself, so a symbolic link to a
//! directory is never a directory here. That keeps the recursive scan from
//! cycling through linked trees. Files are allowed through one symlink hop.

use crate::model::{Classification, HEADER_EXTENSIONS, SOURCE_EXTENSIONS};
use std::fs;
use std::path::Path;

/// A real directory (not a link to one).
pub fn is_directory(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_dir())
        .unwrap_or(false)
}

/// A regular file, or a symbolic link that resolves to one.
pub fn is_file_like(path: &Path) -> bool {
    match fs::symlink_metadata(path) {
        Ok(m) if m.file_type().is_file() => true,
        Ok(m) if m.file_type().is_symlink() => {
            fs::metadata(path).map(|t| t.is_file()).unwrap_or(false)
        }
        _ => false,
    }
}

/// `None` when the path is absent: missing, a special file, a broken link,
/// or a link to a directory.
pub fn classify(path: &Path) -> Option<Classification> {
    if is_directory(path) {
        return Some(Classification::Directory);
    }
    if !is_file_like(path) {
        return None;
    }
    Some(classify_extension(path))
}

/// Extension-only classification of something already known to be a file.
pub fn classify_extension(path: &Path) -> Classification {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return Classification::Other;
    };
    if SOURCE_EXTENSIONS.contains(&ext) {
        Classification::CompilationUnit
    } else if HEADER_EXTENSIONS.contains(&ext) {
        Classification::Header
    } else {
        Classification::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_classify_each_kind() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        fs::create_dir(root.join("sub")).unwrap();
        for name in ["a.cpp", "b.cc", "c.c", "d.h", "e.hpp", "f.txt", "Makefile"] {
            File::create(root.join(name)).unwrap();
        }

        let cases = [
            ("sub", Some(Classification::Directory)),
            ("a.cpp", Some(Classification::CompilationUnit)),
            ("b.cc", Some(Classification::CompilationUnit)),
            ("c.c", Some(Classification::CompilationUnit)),
            ("d.h", Some(Classification::Header)),
            ("e.hpp", Some(Classification::Header)),
            ("f.txt", Some(Classification::Other)),
            ("Makefile", Some(Classification::Other)),
            ("missing.cpp", None),
        ];
        for (name, expected) in cases {
            assert_eq!(classify(&root.join(name)), expected, "{name}");
        }
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        assert_eq!(classify_extension(Path::new("x.CPP")), Classification::Other);
        assert_eq!(classify_extension(Path::new("x.H")), Classification::Other);
    }

    #[test]
    fn test_directory_and_file_are_exclusive() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("x.cpp");
        File::create(&file).unwrap();

        assert!(is_directory(dir.path()) && !is_file_like(dir.path()));
        assert!(is_file_like(&file) && !is_directory(&file));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        fs::create_dir(root.join("real")).unwrap();
        File::create(root.join("real/x.cpp")).unwrap();

        symlink(root.join("real/x.cpp"), root.join("link.cpp")).unwrap();
        symlink(root.join("real"), root.join("linkdir")).unwrap();
        symlink(root.join("gone.cpp"), root.join("broken.cpp")).unwrap();

        assert_eq!(
            classify(&root.join("link.cpp")),
            Some(Classification::CompilationUnit)
        );
        assert_eq!(classify(&root.join("linkdir")), None);
        assert_eq!(classify(&root.join("broken.cpp")), None);
    }
}
