//! # Test helpers
//!
//! - `cli_runner`: `CliRunner` calls the library entry point with in-memory
//!   output streams and returns the exit code, stdout, stderr and duration.
//! - `temp_files`: `TempFileManager` writes fixture files into a scratch
//!   directory that is removed on drop.
//! - `fixtures`: a two-city board, snapshots and build actions shared by the
//!   command tests.
//!
//! ```rust,ignore
//! use crate::helpers::{cli_runner::CliRunner, fixtures, temp_files::TempFileManager};
//!
//! let tfm = TempFileManager::new().expect("temp dir");
//! let board = tfm.create_file("board.toml", fixtures::TWO_CITIES_TOML).expect("write");
//! let res = CliRunner::new().run(&["check", "--map", TempFileManager::arg(&board), "--snapshot", "..."]);
//! assert_eq!(res.exit_code, 0);
//! ```
pub mod cli_runner;
pub mod fixtures;
pub mod temp_files;
