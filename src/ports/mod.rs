/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the interfaces the comment generation
/// core uses to reach the file system, the console and the CI output channel.
pub mod outbound;
