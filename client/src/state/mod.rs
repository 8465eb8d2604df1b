//! Client-side reactive state provided through context.

pub mod session;
