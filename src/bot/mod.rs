/// Argument grammar of the /infografis command
pub mod args;
/// Command handlers
pub mod handlers;
/// Outbound reply construction and sending
pub mod replies;
