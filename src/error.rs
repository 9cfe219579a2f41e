use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// The iteration cap was reached before every node moved by less than the
    /// tolerance. Raise the cap or the tolerance and retry.
    #[error("no convergence after {iterations} iterations (max delta {max_delta})")]
    NonConvergence { iterations: usize, max_delta: f64 },

    #[error("corpus: {0}")]
    Corpus(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if damping.is_finite() && damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "damping={damping}, expected a value in (0, 1)"
        )))
    }
}

pub(crate) fn check_tolerance(tolerance: f64) -> Result<()> {
    if tolerance.is_finite() && tolerance > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "tolerance={tolerance}, expected a positive value"
        )))
    }
}

pub(crate) fn check_positive(name: &str, value: usize) -> Result<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!("{name}={value}, expected > 0")))
    }
}
