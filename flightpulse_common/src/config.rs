/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
//! lookup and loading of RON configuration files
//!
//! configs are looked up per resource crate, first in `$FLIGHTPULSE_ROOT/configs/<crate>/<file>` and then
//! in `./configs/<crate>/<file>` (relative to the current working directory). Crates that own configs
//! should expand `define_load_config!{}` at their top level, which creates `load_config(..)` and
//! `load_config_or_default(..)` functions that automatically use the right resource crate

use std::{env, path::{Path,PathBuf}};
use serde::Deserialize;
use crate::define_error;

pub const CONFIGS: &'static str = "configs";
pub const ROOT_ENV: &'static str = "FLIGHTPULSE_ROOT";

define_error!{ pub ConfigError =
    IOError(#[from] std::io::Error) : "IO error: {0}",
    RonError(#[from] ron::de::SpannedError) : "RON error: {0}",
    NotFound(String) : "config not found: {0}"
}

pub type Result<T> = std::result::Result<T,ConfigError>;

/// the optional global root dir as set by `FLIGHTPULSE_ROOT`
pub fn root_dir()->Option<PathBuf> {
    env::var(ROOT_ENV).ok().filter(|s| !s.is_empty()).map( PathBuf::from)
}

/// the candidate locations for a config file of a given resource crate, in lookup order
pub fn config_candidates (resource_crate: &str, filename: &str)->Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(2);
    if let Some(root) = root_dir() {
        candidates.push( root.join(CONFIGS).join(resource_crate).join(filename));
    }
    candidates.push( Path::new(CONFIGS).join(resource_crate).join(filename));
    candidates
}

pub fn find_config_file (resource_crate: &str, filename: &str)->Option<PathBuf> {
    config_candidates( resource_crate, filename).into_iter().find( |p| p.is_file())
}

/// load a config from an explicit path
pub fn load_config_path<C,P> (path: P)->Result<C> where C: for <'a> Deserialize<'a>, P: AsRef<Path> {
    let data = std::fs::read( path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

pub fn load_crate_config<C> (resource_crate: &str, filename: &str)->Result<C> where C: for <'a> Deserialize<'a> {
    match find_config_file( resource_crate, filename) {
        Some(path) => load_config_path( &path),
        None => Err( ConfigError::NotFound( format!("{resource_crate}/{filename}")))
    }
}

/// the main macro that should be expanded at the top of crates (lib.rs) that define configs.
/// Config users call the defined `load_config(..)` function to instantiate config structs
#[macro_export]
macro_rules! define_load_config {
    () => {
        mod configs {
            use serde::Deserialize;

            /// load config using the flightpulse_common lookup mechanism
            pub fn load_config<C> (filename: &str)->flightpulse_common::config::Result<C> where C: for <'a> Deserialize<'a> {
                flightpulse_common::config::load_crate_config( env!("CARGO_PKG_NAME"), filename)
            }

            /// load config or use its `Default` if there is no such file. Malformed config files are still reported as errors
            pub fn load_config_or_default<C> (filename: &str)->flightpulse_common::config::Result<C> where C: for <'a> Deserialize<'a> + Default {
                match load_config( filename) {
                    Err( flightpulse_common::config::ConfigError::NotFound(_)) => Ok( C::default()),
                    other => other
                }
            }
        }
        pub use configs::*; // make load_config() visible at the crate level
    }
}
