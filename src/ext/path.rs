use std::path::Path;

/// Extension trait for Path to provide convenient string conversion methods
pub trait PathExt {
    /// Returns the final component of the path as a string slice.
    ///
    /// Returns `None` when the path has no file name (`/`, `..`) or when the
    /// name is not valid Unicode.
    ///
    /// # Examples
    /// ```
    /// use opgen::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("op_kernel/add_example.cpp");
    /// assert_eq!(path.file_name_str(), Some("add_example.cpp"));
    /// ```
    fn file_name_str(&self) -> Option<&str>;

    /// Converts a path to a String using display(), which always succeeds
    /// but may use replacement characters for invalid Unicode.
    ///
    /// # Examples
    /// ```
    /// use opgen::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("math/asinh");
    /// assert_eq!(path.display_string(), "math/asinh");
    /// ```
    fn display_string(&self) -> String;
}

impl PathExt for Path {
    fn file_name_str(&self) -> Option<&str> {
        self.file_name().and_then(|name| name.to_str())
    }

    fn display_string(&self) -> String {
        self.display().to_string()
    }
}
