//! A trivial tracing facility: a bitmask of levels, and a macro
//! that writes to standard error when any of them is enabled.

use bitmask_enum::bitmask;

#[bitmask]
pub enum Trace {
    Reduce, // dominated & essential subsets
    Search, // combination widths & covers found
}

#[macro_export]
macro_rules! trace {
    ($trace:expr, $level:ident, $fmt:literal $(,)? $($arg:expr),* $(,)?) => {
        if $trace.intersects(Trace::$level) {
            eprintln!($fmt, $($arg),*);
        }
    }
}
