#![allow(clippy::print_stdout)]

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-link-arg=-Tlinkall.x");

    let version = chrono::Utc::now().format("%Y%m%d.%H%M").to_string();
    println!("cargo:rustc-env=BUILD_VERSION={version}");
}
