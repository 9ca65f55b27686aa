use once_cell::sync::Lazy;

/// Inner-dimension viewport length used when none is configured.
pub const VLEN_DEFAULT: usize = 30;

/// Environment variable holding the viewport length.
pub const ENV_VLEN: &str = "DENSE_GEMM_VLEN";

/// Environment variable selecting the multiply kernel (`column` or `viewport`).
pub const ENV_KERNEL: &str = "DENSE_GEMM_KERNEL";

/// Which multiply kernel a product is routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelKind {
    /// One full pass over the inner dimension per output column.
    #[default]
    SparseColumn,
    /// Inner dimension split into viewports of `vlen` rows of B.
    Viewport,
}

impl KernelKind {
    /// Parse the value of [`ENV_KERNEL`].
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "column" | "sparse-column" | "sparse_column" => Some(KernelKind::SparseColumn),
            "viewport" | "vp" => Some(KernelKind::Viewport),
            _ => None,
        }
    }

    /// Short name, as accepted by [`KernelKind::parse`].
    pub fn as_str(&self) -> &'static str {
        match self {
            KernelKind::SparseColumn => "column",
            KernelKind::Viewport => "viewport",
        }
    }
}

/// Multiply kernel configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelParams {
    /// Kernel used by matrix-level products.
    pub kernel: KernelKind,
    /// Viewport length for [`KernelKind::Viewport`].
    pub vlen: usize,
}

impl KernelParams {
    /// Built-in defaults: sparse column kernel, viewport length 30.
    pub const DEFAULT: Self = Self {
        kernel: KernelKind::SparseColumn,
        vlen: VLEN_DEFAULT,
    };

    /// Create custom kernel parameters.
    pub const fn new(kernel: KernelKind, vlen: usize) -> Self {
        Self { kernel, vlen }
    }

    /// Read parameters from the process environment.
    ///
    /// Missing or unparsable values fall back to [`KernelParams::DEFAULT`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read parameters through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut params = Self::DEFAULT;

        if let Some(raw) = lookup(ENV_KERNEL) {
            match KernelKind::parse(&raw) {
                Some(kind) => params.kernel = kind,
                None => tracing::warn!(value = %raw, "ignoring unknown {}", ENV_KERNEL),
            }
        }

        if let Some(raw) = lookup(ENV_VLEN) {
            match raw.trim().parse::<usize>() {
                Ok(vlen) => params.vlen = vlen,
                Err(_) => tracing::warn!(value = %raw, "ignoring unparsable {}", ENV_VLEN),
            }
        }

        if let Err(reason) = params.validate() {
            tracing::warn!(
                reason,
                vlen = VLEN_DEFAULT,
                "invalid viewport length, using default"
            );
            params.vlen = VLEN_DEFAULT;
        }

        params
    }

    /// Validate that the parameters are usable.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.vlen == 0 {
            return Err("vlen must be non-zero");
        }
        Ok(())
    }
}

impl Default for KernelParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

static DEFAULT_PARAMS: Lazy<KernelParams> = Lazy::new(KernelParams::from_env);

/// Process-wide parameters, read from the environment on first use.
pub fn default_params() -> KernelParams {
    *DEFAULT_PARAMS
}

/// Iterator over blocks of a dimension.
pub struct BlockIterator {
    total: usize,
    block_size: usize,
    current: usize,
}

impl BlockIterator {
    pub fn new(total: usize, block_size: usize) -> Self {
        Self {
            total,
            block_size: block_size.max(1),
            current: 0,
        }
    }
}

impl Iterator for BlockIterator {
    /// (start, length) of each block
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.total {
            return None;
        }

        let start = self.current;
        let len = (self.total - start).min(self.block_size);
        self.current += len;

        Some((start, len))
    }
}
