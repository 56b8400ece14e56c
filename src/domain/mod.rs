// Domain layer: the values a transfer is built from and the ports the transfer
// routine talks to. No dependency on a concrete SSH implementation.

pub mod model;
pub mod ports;
