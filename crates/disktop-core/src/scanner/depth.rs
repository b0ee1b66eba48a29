//! Depth of a path relative to the scan root.

use crate::error::ScanError;
use std::path::Path;

/// Number of directory levels between `root` and `path`.
///
/// `root == path` is depth 0, `root/a` is 1, `root/a/b` is 2. The prefix is
/// matched per component, so `/data2` is not considered under `/data`, and
/// trailing separators on the root do not shift the count.
pub fn relative_depth(root: &Path, path: &Path) -> Result<usize, ScanError> {
    path.strip_prefix(root)
        .map(|rest| rest.components().count())
        .map_err(|_| ScanError::OutsideRoot {
            root: root.to_path_buf(),
            path: path.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn root_itself_is_zero() {
        let root = Path::new("/srv/data");
        assert_eq!(relative_depth(root, root).unwrap(), 0);
    }

    #[test]
    fn counts_levels_below_root() {
        let root = PathBuf::from("/srv/data");
        assert_eq!(relative_depth(&root, &root.join("a")).unwrap(), 1);
        assert_eq!(relative_depth(&root, &root.join("a").join("b")).unwrap(), 2);
        assert_eq!(
            relative_depth(&root, &root.join("a").join("b").join("c.txt")).unwrap(),
            3
        );
    }

    #[test]
    fn trailing_separator_on_root() {
        let root = Path::new("/srv/data/");
        assert_eq!(relative_depth(root, &root.join("a")).unwrap(), 1);
    }

    #[test]
    fn relative_root() {
        let root = Path::new(".");
        assert_eq!(relative_depth(root, &root.join("a").join("b")).unwrap(), 2);
    }

    #[test]
    fn path_outside_root_is_error() {
        let err = relative_depth(Path::new("/srv/data"), Path::new("/srv/data2/x")).unwrap_err();
        assert!(matches!(err, ScanError::OutsideRoot { .. }));
    }
}
