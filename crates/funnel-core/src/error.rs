use std::path::PathBuf;

/// Alias for `Result<T, TableError>`.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur when loading or validating rule tables.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A table file could not be read or written.
    #[error("cannot access {path}: {source}")]
    Io {
        /// The file or directory that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line in a table file could not be parsed.
    #[error("{file}:{line}: {message}")]
    Parse {
        /// The table file name.
        file: String,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// A table parsed correctly but does not cover every legal roll.
    #[error("invalid table '{table}': {message}")]
    Invalid {
        /// The table that failed validation.
        table: String,
        /// A human-readable description of the problem.
        message: String,
    },
}

impl TableError {
    /// Shorthand for building a [`TableError::Parse`].
    pub fn parse(file: &str, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.to_string(),
            line,
            message: message.into(),
        }
    }

    /// Shorthand for building a [`TableError::Invalid`].
    pub fn invalid(table: &str, message: impl Into<String>) -> Self {
        Self::Invalid {
            table: table.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err = TableError::parse("AppendixL.csv", 4, "expected 9 fields");
        assert_eq!(err.to_string(), "AppendixL.csv:4: expected 9 fields");
    }

    #[test]
    fn invalid_error_display() {
        let err = TableError::invalid("Elf_Occupations.csv", "gap at 5");
        assert_eq!(
            err.to_string(),
            "invalid table 'Elf_Occupations.csv': gap at 5"
        );
    }
}
