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

use serde::Deserialize;
use flightpulse_common::config::*;

#[derive(Deserialize,Debug,Default,PartialEq)]
struct Dummy {
    name: String,
    n: u32,
}

#[test]
fn test_candidates() {
    let candidates = config_candidates( "some_crate", "some.ron");
    println!("{candidates:?}");
    let last = candidates.last().unwrap();
    assert!( last.ends_with("configs/some_crate/some.ron"));
}

#[test]
fn test_missing_config() {
    match load_crate_config::<Dummy>( "no_such_crate", "no_such_file.ron") {
        Err(ConfigError::NotFound(msg)) => assert!( msg.contains("no_such_file.ron")),
        other => panic!("expected NotFound, got {other:?}")
    }
}

#[test]
fn test_load_path() {
    let path = std::env::temp_dir().join( format!("flightpulse_test_{}.ron", std::process::id()));
    std::fs::write( &path, r#"( name: "test", n: 42 )"#).unwrap();
    let dummy: Dummy = load_config_path( &path).unwrap();
    std::fs::remove_file( &path).unwrap();
    assert_eq!( dummy, Dummy{ name: "test".to_string(), n: 42 });
}
