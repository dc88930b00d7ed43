/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: the PDC REST client,
/// the stderr progress reporter, the tree formatters and the output writers.
pub mod outbound;
