use std::net::SocketAddr;

/// Errors that stop the server from starting or keep it from serving.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid Leptos configuration: {0}")]
    Configuration(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_message() {
        let err = AppError::Bind {
            addr: "127.0.0.1:3000".parse().unwrap(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to bind 127.0.0.1:3000: address in use"
        );
    }

    #[test]
    fn test_io_error_converts_to_serve() {
        let err: AppError = std::io::Error::other("boom").into();
        assert!(matches!(err, AppError::Serve(_)));
    }
}
