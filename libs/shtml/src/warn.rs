//! Printing diagnostics to stderr.

use std::sync::atomic::{AtomicBool, Ordering};

use shtml_html::env::get_env_bool;

/// When true, `trace!` statements print. See `init_trace_from_env`.
pub static SHTML_TRACE: AtomicBool = AtomicBool::new(false);

pub fn set_trace(on: bool) {
    SHTML_TRACE.store(on, Ordering::SeqCst);
}

pub fn trace_enabled() -> bool {
    SHTML_TRACE.load(Ordering::Relaxed)
}

/// Switch tracing on if the `SHTML_TRACE` env var holds a true value.
pub fn init_trace_from_env() -> anyhow::Result<()> {
    if get_env_bool("SHTML_TRACE")? {
        set_trace(true);
    }
    Ok(())
}

#[macro_export]
macro_rules! warn {
    ($formatstr:expr $(,$arg:expr)*) => { {
        use std::io::Write;
        let mut outp = std::io::BufWriter::new(std::io::stderr().lock());
        let _ = write!(&mut outp, "W: ");
        let _ = write!(&mut outp, $formatstr $(,$arg)*);
        let _ = writeln!(&mut outp, " at {:?} line {}", file!(), line!());
        let _ = outp.flush();
    } }
}

#[macro_export]
macro_rules! nowarn {
    ($formatstr:expr $(,$arg:expr)*) => {
    }
}

#[macro_export]
macro_rules! trace {
    ($formatstr:expr $(,$arg:expr)*) => {
        if $crate::warn::trace_enabled() {
            use std::io::Write;
            let mut outp = std::io::BufWriter::new(std::io::stderr().lock());
            let _ = write!(&mut outp, "T: ");
            let _ = write!(&mut outp, $formatstr $(,$arg)*);
            let _ = writeln!(&mut outp, " at {:?} line {}", file!(), line!());
            let _ = outp.flush();
        }
    }
}

#[macro_export]
macro_rules! notrace {
    ($formatstr:expr $(,$arg:expr)*) => {
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_trace_switch() {
        let before = trace_enabled();
        set_trace(true);
        assert!(trace_enabled());
        set_trace(before);
        init_trace_from_env().unwrap();
    }
}
