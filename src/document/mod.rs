pub(crate) mod content;
pub(crate) mod object;
pub(crate) mod resources;
