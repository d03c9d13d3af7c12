pub(crate) mod registry;
pub(crate) mod rgba;
pub(crate) mod strategy;
