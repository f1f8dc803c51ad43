/// Expose the compilation target triple as an environment variable at build time.
///
/// `constants::TARGET` uses `env!("TARGET")` so `deploader version` can
/// report which platform the binary was built for.
fn main() {
    println!(
        "cargo:rustc-env=TARGET={}",
        std::env::var("TARGET").unwrap()
    );
}
