use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("could not create directory {}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read directory {}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory {} contains files, this might create conflicts", .path.display())]
    DirectoryNotEmpty { path: PathBuf },

    #[error("could not write file {}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not render template {template}")]
    Render {
        template: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("command failed: {command}")]
    CommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },
}

impl ScaffoldError {
    pub fn command(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { command, .. } => Some(command),
            _ => None,
        }
    }
}
