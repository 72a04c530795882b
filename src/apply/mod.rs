pub(crate) mod color;
pub(crate) mod composite;
pub(crate) mod config;
pub(crate) mod dispatch;
pub(crate) mod function;
pub(crate) mod pattern;
pub(crate) mod shading;
pub(crate) mod state;

#[cfg(test)]
#[path = "../../tests/unit/apply/fixture.rs"]
pub(crate) mod fixture;
