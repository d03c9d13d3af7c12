pub(crate) mod error;
pub(crate) mod logging;
pub(crate) mod math;
pub(crate) mod numfmt;
