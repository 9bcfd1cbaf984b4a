/// Comment generation domain: report shape, findings and the services that
/// turn one into the other. Nothing in here performs I/O.
pub mod domain;
pub mod services;
