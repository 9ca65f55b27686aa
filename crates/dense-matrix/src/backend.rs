use dense_gemm_core::{default_params, KernelKind, ENV_KERNEL, ENV_VLEN};

/// Multiply kernels available to [`Mat::matmul`](crate::Mat::matmul).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Column-by-column accumulation with zero skipping.
    SparseColumn,
    /// Inner dimension split into viewports of `vlen` rows.
    Viewport,
}

impl Backend {
    /// The backend selected by the process-wide kernel parameters.
    pub fn current() -> Self {
        Backend::from(default_params().kernel)
    }

    /// Get a description of the active kernel configuration.
    pub fn description() -> String {
        let params = default_params();
        match Self::current() {
            Backend::SparseColumn => "sparse column (zero skipping)".to_string(),
            Backend::Viewport => format!("viewport (vlen {}, zero skipping)", params.vlen),
        }
    }
}

impl From<KernelKind> for Backend {
    fn from(kind: KernelKind) -> Self {
        match kind {
            KernelKind::SparseColumn => Backend::SparseColumn,
            KernelKind::Viewport => Backend::Viewport,
        }
    }
}

/// Get information about the library configuration.
pub fn version_info() -> String {
    format!(
        "dense-matrix v{}\nBackend: {}\nConfigured by: {}, {}",
        env!("CARGO_PKG_VERSION"),
        Backend::description(),
        ENV_KERNEL,
        ENV_VLEN
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_matches_params() {
        assert_eq!(Backend::current(), Backend::from(default_params().kernel));
    }

    #[test]
    fn test_backend_description_not_empty() {
        let desc = Backend::description();
        assert!(desc.contains("sparse column") || desc.contains("viewport"));
    }

    #[test]
    fn test_version_info_format() {
        let info = version_info();
        assert!(info.contains("dense-matrix v"));
        assert!(info.contains("Backend:"));
        assert!(info.contains("DENSE_GEMM_KERNEL"));
    }

    #[test]
    fn test_backend_from_kind() {
        assert_eq!(Backend::from(KernelKind::Viewport), Backend::Viewport);
        assert_ne!(Backend::SparseColumn, Backend::Viewport);
    }
}
