pub(crate) mod foreign;
pub(crate) mod model;
