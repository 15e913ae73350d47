#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::launch;

#[cfg(not(unix))]
mod unsupported;
#[cfg(not(unix))]
pub use unsupported::launch;
