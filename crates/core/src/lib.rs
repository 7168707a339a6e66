//! Till
//!
//! Till is a basket price calculation engine. It evaluates a set of
//! independently configured discount rules against a basket of priced
//! items and settles on the most favourable total for the buyer.
//!
//! The engine is pure: no I/O, no global state, no interior mutability.
//! Rule configuration is frozen when a [`calculator::PriceCalculator`]
//! is built, so any number of calculations may run concurrently over
//! shared references.

pub mod calculator;
pub mod discounts;
pub mod items;
pub mod pricing;
