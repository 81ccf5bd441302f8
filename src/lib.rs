//! fragconf: merge comment-stripped JSON fragments into one configuration
//!
//! Configuration can come from inline data, an explicit list of files, a glob
//! pattern or a directory. Each file holds the body of a JSON object with
//! optional `#` line comments. Files are read in parallel, stripped, and
//! concatenated in source order into a single compacted object that can be
//! decoded into any `serde` type.
//!
//! ```no_run
//! use fragconf::Config;
//!
//! #[derive(serde::Deserialize)]
//! struct App {
//!     name: String,
//! }
//!
//! let cfg = Config::from_dir("conf.d")?;
//! let app: App = cfg.decode()?;
//! println!("{} from {} files", app.name, cfg.loaded_files().len());
//! # Ok::<(), fragconf::ConfigError>(())
//! ```

pub mod error;
pub mod handle;
pub mod loader;
pub mod merge;
pub mod options;
pub mod settings;
pub mod source;
pub mod strip;

pub use error::{ConfigError, ErrorKind, Result};
pub use handle::{Config, ConfigLoader, Origin};
pub use options::LoaderOptions;
