//! Wire types shared between the product admin backend and its clients.

pub mod enums;
pub mod usecases;
