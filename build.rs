use std::env;

fn main() {
    let target_triple = env::var("TARGET").expect("Cargo sets TARGET for build scripts");
    println!(
        "cargo:rustc-env=BATH_LOGGER_BUILD_TARGET_TRIPLE={}",
        target_triple
    );
}
