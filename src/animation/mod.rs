pub(crate) mod color;
pub(crate) mod ease;
pub(crate) mod interpolate;
pub(crate) mod noise;
pub(crate) mod ops;
pub(crate) mod spring;
