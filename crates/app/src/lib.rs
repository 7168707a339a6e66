//! Till application services
//!
//! Wires the pricing engine together with the item storage facade the
//! HTTP layer consumes. Services live behind traits so handlers can be
//! tested against mocks.

pub mod context;
pub mod domain;
