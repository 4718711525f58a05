/// The line printed by `mokujin version`
pub fn version_line() -> String {
    format!("Mokujin version {} !", env!("CARGO_PKG_VERSION"))
}

pub fn run_version() {
    println!("{}", version_line());
}
