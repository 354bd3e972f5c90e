//! Fatal logging must terminate the process with a non-zero status.
//!
//! Termination cannot be observed in-process, so the test re-executes itself
//! with a marker variable and asserts on the child's exit condition.

use std::env;
use std::process::Command;

use dubbo_logger::Logger as _;

#[test]
fn test_fatal_terminates_process() {
    match env::var("BE_FATAL").as_deref() {
        Ok("plain") => {
            dubbo_logger::init_log("").ok();
            dubbo_logger::get_logger().fatal("fool");
        }
        Ok("formatted") => {
            dubbo_logger::init_log("").ok();
            dubbo_logger::fatal!("{}", "foolf");
        }
        _ => {}
    }

    let exe = env::current_exe().unwrap();
    for mode in ["plain", "formatted"] {
        let status = Command::new(&exe)
            .args(["test_fatal_terminates_process", "--exact", "--nocapture"])
            .env("BE_FATAL", mode)
            .status()
            .unwrap();
        assert!(
            !status.success(),
            "fatal ({mode}) should exit with a failure status"
        );
    }
}
