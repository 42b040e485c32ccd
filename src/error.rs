//! Errors raised by the display surface.
//!
//! The simulation itself never fails; everything here comes from the terminal.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("error creating screen: {0}")]
    Create(#[source] io::Error),

    #[error("error initializing screen: {0}")]
    Init(#[source] io::Error),

    #[error("error drawing to screen: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SurfaceError::Create(io::Error::new(io::ErrorKind::NotFound, "no tty"));
        assert_eq!(err.to_string(), "error creating screen: no tty");

        let err = SurfaceError::Init(io::Error::new(io::ErrorKind::Other, "raw mode"));
        assert_eq!(err.to_string(), "error initializing screen: raw mode");
    }

    #[test]
    fn test_io_error_converts() {
        fn draw() -> Result<(), SurfaceError> {
            let written: io::Result<()> =
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            written?;
            Ok(())
        }
        assert!(matches!(draw(), Err(SurfaceError::Io(_))));
    }
}
