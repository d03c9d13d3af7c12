pub(crate) mod blend;
pub(crate) mod op;
