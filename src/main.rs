//! Host-side helper: `cargo run` builds the wasm package into `static/pkg`
//! and serves `static/` on a local HTTP server.

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::process::{Command, ExitCode, Stdio};

    use clap::Parser;

    #[derive(Debug, Parser)]
    #[command(about = "Build and serve the portfolio site locally")]
    struct Args {
        /// Port for the local HTTP server.
        #[arg(short, long, default_value_t = 8000)]
        port: u16,

        /// Serve whatever is already in `static/pkg`.
        #[arg(long)]
        skip_build: bool,
    }

    fn build_pkg() -> bool {
        println!("Building WASM pkg …");
        match Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
            .status()
        {
            Ok(st) if st.success() => true,
            Ok(_) => {
                eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
                false
            }
            Err(_) => {
                eprintln!("wasm-pack not found in PATH; serving existing static/pkg.");
                true
            }
        }
    }

    pub fn run() -> ExitCode {
        let args = Args::parse();
        if !args.skip_build && !build_pkg() {
            return ExitCode::FAILURE;
        }

        let port = args.port.to_string();
        println!("Serving portfolio at http://127.0.0.1:{port} …");
        let server = Command::new("python3")
            .args(["-m", "http.server", &port, "--directory", "static"])
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status();

        match server {
            Ok(st) if st.success() => ExitCode::SUCCESS,
            Ok(st) => {
                eprintln!("http server exited with {st}");
                ExitCode::FAILURE
            }
            Err(err) => {
                eprintln!("failed to start http server (python3 required): {err}");
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    host::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
