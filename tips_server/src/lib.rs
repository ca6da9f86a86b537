//! # energy-tips-server
//!
//! Hosting for the Energy Saving Tips page: configuration, and a small
//! HTTP/1.1 server that hands out the pre-rendered page and its images.
//!
//! The page itself comes from [`energy_tips_page`]; this crate only decides
//! where it is mounted and where the images are read from.
//!
//! ```rust,no_run
//! use energy_tips_server::{PageServer, ServerConfig};
//!
//! let server = PageServer::new(ServerConfig::default());
//! let running = server.bind().expect("bind");
//! println!("listening on http://{}", running.local_addr());
//! ```

pub mod config;
pub mod error;
pub mod server;

pub use config::{CliOptions, ServerConfig, load_config, resolve_config};
pub use error::ServerError;
pub use server::{PageServer, Response, RunningServer, Status};
