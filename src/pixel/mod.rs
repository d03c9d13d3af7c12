pub(crate) mod alpha;
pub(crate) mod codec;
pub(crate) mod text;
pub(crate) mod types;
