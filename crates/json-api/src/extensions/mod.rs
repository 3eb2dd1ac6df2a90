//! Extension traits

mod depot;
mod image;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use image::{ImagePayloadExt as _, to_data_uri};
pub(crate) use result::ResultExt as _;
