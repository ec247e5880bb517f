//! rootwalk infrastructure: wire codec, UDP transport, referral following,
//! root iteration, resolvers and the in-memory result cache.
pub mod dns;
