// Build script for duyguctl - embeds version at compile time

fn main() {
    // Release pipelines may set DUYGU_VERSION, otherwise use Cargo.toml
    let version =
        std::env::var("DUYGU_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=DUYGU_VERSION={}", version);

    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=DUYGU_VERSION");
}
