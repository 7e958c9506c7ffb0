//! # IPREF v1 Protocol Tables
//!
//! Offsets, command space, and single-record packet helpers built on the
//! core codecs.

pub mod command;
pub mod constants;
pub mod packet;
