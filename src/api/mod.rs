pub mod whoami;

pub use whoami::handle_whoami;
