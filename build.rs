use std::process::Command;

fn main() {
    let rustc_version = Command::new("rustc")
        .arg("--version")
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .unwrap_or_else(|| "unknown".to_string());

    println!(
        "cargo:rustc-env=CATALOG_RUSTC_VERSION={}",
        rustc_version.trim()
    );

    // Report whether the optional docs renderer is compiled in, for `--version` output
    let docs_renderer = if std::env::var_os("CARGO_FEATURE_SCALAR").is_some() {
        "scalar"
    } else {
        "swagger-ui"
    };
    println!("cargo:rustc-env=CATALOG_DOCS_RENDERER={docs_renderer}");
    println!("cargo:rerun-if-changed=build.rs");
}
