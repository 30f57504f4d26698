#![doc = include_str!("../../../README.md")]

mod error;
mod item;
mod registry;
mod value;

pub use crate::{
    error::{EnumError, EnumResult},
    item::EnumItem,
    registry::Enum,
    value::EnumValue,
};
