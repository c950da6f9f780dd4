//! Build script for bargraph-kit.

use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rustc-check-cfg=cfg(rust_analyzer)");

    // Firmware builds need memory.x on the linker search path; host builds do not.
    let target = env::var("TARGET").unwrap();
    if target.starts_with("thumbv6m") {
        // Pico 1: copy memory-pico1.x to OUT_DIR as memory.x
        let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
        let memory_x = fs::read_to_string("memory-pico1.x").expect("Failed to read memory-pico1.x");
        let dest = out_dir.join("memory.x");
        fs::write(&dest, memory_x).expect("Failed to write memory.x");
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rerun-if-changed=memory-pico1.x");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
