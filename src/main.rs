/// Binary entrypoint for the `ggrvs` executable.
///
/// Keeps the binary thin; all sampling logic lives in the `ggrvs_lib` crate so
/// unit tests can import library functions directly.
fn main() {
    ggrvs_lib::run();
}
