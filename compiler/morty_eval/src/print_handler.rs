//! Output sink for `puts`.
//!
//! The interpreter never writes to stdout directly. Built-ins that print go
//! through a [`PrintHandlerImpl`], so the driver can send output to the
//! terminal while tests capture it in a buffer.

use std::sync::Arc;

use parking_lot::Mutex;

/// Where printed lines go. Enum dispatch, no trait objects.
pub enum PrintHandlerImpl {
    /// Write each line to stdout.
    Stdout,
    /// Capture lines in memory.
    Buffer(Mutex<String>),
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
        }
    }

    /// Captured output so far. Always empty for `Stdout`.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout => String::new(),
            Self::Buffer(buf) => buf.lock().clone(),
        }
    }

    /// Drop captured output. No-op for `Stdout`.
    pub fn clear(&self) {
        if let Self::Buffer(buf) = self {
            buf.lock().clear();
        }
    }
}

/// Print handler shared between the interpreter and whoever reads the output.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}
