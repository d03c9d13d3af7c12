pub(crate) mod interop;
pub(crate) mod materialize;
