//! Host-side helper: `cargo run` builds the wasm package into `static/pkg` and
//! serves `static/` locally for preview.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::process::{Command, Stdio};

    const ADDR: &str = "127.0.0.1";
    const PORT: &str = "8000";

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors.");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH (https://rustwasm.github.io/wasm-pack/). Serving existing static/pkg, which may be stale.");
        }
    }

    println!("Serving static/ at http://{ADDR}:{PORT} (Ctrl-C to stop) …");
    let status = Command::new("python3")
        .args(["-m", "http.server", PORT, "--bind", ADDR, "--directory", "static"])
        .stdout(Stdio::null())
        .status();
    match status {
        Ok(st) if st.success() => {}
        Ok(st) => eprintln!("http server exited with {st}"),
        Err(err) => {
            eprintln!("failed to start http server (python3 required): {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
