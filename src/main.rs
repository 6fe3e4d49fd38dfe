/// Binary entrypoint for the `genid` executable.
///
/// Keeps the binary thin — all business logic lives in the `genid_lib` crate so
/// unit tests can import library functions directly.
fn main() {
    if let Err(e) = genid_lib::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
