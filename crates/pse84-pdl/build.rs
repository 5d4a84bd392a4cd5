#[path = "src/link.rs"]
mod link;

fn main() {
    println!("cargo:rerun-if-changed=src/link.rs");
    println!("cargo:rerun-if-env-changed={}", link::LIB_DIR_VAR);
    println!("cargo:rerun-if-env-changed={}", link::LIB_NAME_VAR);

    // host builds only run the unit tests, which never call into C
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("none") {
        return;
    }

    let dir = std::env::var(link::LIB_DIR_VAR).ok();
    let name = std::env::var(link::LIB_NAME_VAR).ok();
    match link::plan(dir.as_deref(), name.as_deref()) {
        Ok(plan) => {
            println!("cargo:rustc-link-search=native={}", plan.search);
            println!("cargo:rustc-link-lib=static={}", plan.lib);
        }
        Err(e) => panic!("{}", e),
    }
}
