pub(crate) mod depth;
pub(crate) mod descriptor;
pub(crate) mod layout;
