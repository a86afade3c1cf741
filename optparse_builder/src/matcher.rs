mod binder;
mod registry;

pub(crate) use binder::*;
pub(crate) use registry::*;
