// Adapters layer: concrete implementations of the domain ports for the
// terminal, the HTTP endpoint, MySQL and the local mail program.

pub mod http;
pub mod mail;
pub mod mysql;
pub mod terminal;
