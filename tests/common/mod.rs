pub mod server_harness;

pub use server_harness::ServerHarness;
