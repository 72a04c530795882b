pub(crate) mod color;
pub(crate) mod encoder;
pub(crate) mod tile;
