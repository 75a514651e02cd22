use std::env;
use std::path::Path;

/// Targets whose link-layer records are `sockaddr_ll` (`AF_PACKET`).
const PACKET_TARGETS: &[&str] = &["linux", "android"];

/// Targets whose link-layer records are `sockaddr_dl` and whose address is
/// located through the `LLADDR` macro.
const DATALINK_TARGETS: &[&str] = &[
    "macos",
    "ios",
    "freebsd",
    "openbsd",
    "netbsd",
    "dragonfly",
];

fn main() {
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    // `link_layer` gates everything built on `getifaddrs`, the other two
    // select the record layout
    for cfg in ["link_layer", "packet_family", "datalink_family"] {
        println!("cargo:rustc-check-cfg=cfg({cfg})");
    }

    if PACKET_TARGETS.contains(&target_os.as_str()) {
        println!("cargo:rustc-cfg=link_layer");
        println!("cargo:rustc-cfg=packet_family");
    }

    if DATALINK_TARGETS.contains(&target_os.as_str()) {
        use cc::Build;

        println!("cargo:rustc-cfg=link_layer");
        println!("cargo:rustc-cfg=datalink_family");

        let path = Path::new("src").join("target").join("bsd").join("lladdr.c");

        println!("cargo:rerun-if-changed={}", path.display());
        Build::new().file(path).compile("lladdr");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
