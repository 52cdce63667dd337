use thiserror::Error;

/// Error type for the DPI commands
#[derive(Error, Debug)]
pub enum DpiError {
    #[error("Monitor name not specified. Use [monitorName] argument or dpi.cfg file")]
    MonitorNameUnresolved,
    #[error("Monitor {0} not found!")]
    MonitorNotFound(String),
    #[error("Error while obtaining current resolution of {0}")]
    ResolutionUnavailable(String),
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl DpiError {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DpiError::MonitorNameUnresolved
            | DpiError::MonitorNotFound(_)
            | DpiError::ResolutionUnavailable(_) => -1,
            DpiError::Io(_) => 1,
        }
    }
}
