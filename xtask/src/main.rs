//! Developer workflow commands for the demo workspace (`cargo xtask`).
//!
//! Wraps the rustup/trunk/cargo invocations behind stable entrypoints so the cargo
//! aliases in `.cargo/config.toml` stay short.

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode, ExitStatus, Stdio};

const SITE_PACKAGE: &str = "site";
const SITE_FEATURES: &str = "csr";
const WASM_TARGET: &str = "wasm32-unknown-unknown";

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(command) = args.next() else {
        print_usage();
        return ExitCode::from(2);
    };
    let rest: Vec<String> = args.collect();

    match dispatch(&command, rest) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: &str, rest: Vec<String>) -> Result<(), String> {
    let root = workspace_root();
    match command {
        "setup-web" => setup_web(&root),
        "dev" => dev(&root, rest),
        "build-web" => trunk(&root, TrunkAction::Build { release: true }, rest),
        "check-web" => check_web(&root),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        unknown => Err(format!(
            "unknown xtask command `{unknown}` (try `cargo xtask help`)"
        )),
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask sits one level below the workspace root")
        .to_path_buf()
}

fn print_usage() {
    eprintln!(
        "Usage: cargo xtask <command> [args]\n\
         \n\
         Commands:\n\
           setup-web         Install the wasm32 target and trunk if missing\n\
           dev [trunk args]  Serve the demo with trunk (opens a browser; pass --no-open to skip)\n\
           dev build [args]  Build a non-release bundle with trunk\n\
           build-web [args]  Build the release bundle with trunk\n\
           check-web         cargo check the site crate natively and for wasm32\n"
    );
}

fn setup_web(root: &Path) -> Result<(), String> {
    exec(root, "rustup", &["target", "add", WASM_TARGET])?;

    if tool_installed("trunk") {
        println!("trunk already installed");
        Ok(())
    } else {
        exec(root, "cargo", &["install", "trunk"])
    }
}

fn dev(root: &Path, args: Vec<String>) -> Result<(), String> {
    match args.first().map(String::as_str) {
        Some("build") => trunk(root, TrunkAction::Build { release: false }, args[1..].to_vec()),
        Some("serve") => trunk(root, TrunkAction::Serve, args[1..].to_vec()),
        Some("help" | "--help" | "-h") => {
            print_usage();
            Ok(())
        }
        _ => trunk(root, TrunkAction::Serve, args),
    }
}

fn check_web(root: &Path) -> Result<(), String> {
    exec(
        root,
        "cargo",
        &["check", "-p", SITE_PACKAGE, "--features", SITE_FEATURES],
    )?;

    if !wasm_target_installed() {
        eprintln!("warn: {WASM_TARGET} target missing; skipping the wasm check (run `cargo setup-web`)");
        return Ok(());
    }

    exec(
        root,
        "cargo",
        &[
            "check",
            "-p",
            SITE_PACKAGE,
            "--target",
            WASM_TARGET,
            "--features",
            SITE_FEATURES,
        ],
    )
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum TrunkAction {
    Serve,
    Build { release: bool },
}

impl TrunkAction {
    fn argv(self, user_args: &[String]) -> Vec<String> {
        match self {
            Self::Serve => {
                let mut argv = vec!["serve".to_string(), "index.html".to_string()];
                if !user_args.iter().any(|arg| arg == "--no-open") {
                    argv.push("--open".to_string());
                }
                argv.extend(
                    user_args
                        .iter()
                        .filter(|arg| *arg != "--no-open" && *arg != "--open")
                        .cloned(),
                );
                argv
            }
            Self::Build { release } => {
                let mut argv = vec!["build".to_string(), "index.html".to_string()];
                if release {
                    argv.push("--release".to_string());
                }
                let dist_given = user_args
                    .iter()
                    .any(|arg| arg == "--dist" || arg.starts_with("--dist="));
                if !dist_given {
                    argv.push("--dist".to_string());
                    argv.push(default_dist(release).to_string());
                }
                argv.extend(user_args.iter().cloned());
                argv
            }
        }
    }
}

fn default_dist(release: bool) -> &'static str {
    if release {
        "target/trunk-dist"
    } else {
        "target/trunk-dev-dist"
    }
}

fn trunk(root: &Path, action: TrunkAction, user_args: Vec<String>) -> Result<(), String> {
    if !tool_installed("trunk") {
        return Err(
            "`trunk` is not installed. Run `cargo setup-web` (or `cargo install trunk`)"
                .to_string(),
        );
    }

    let argv = action.argv(&user_args);
    announce("trunk", &argv);

    let mut command = Command::new("trunk");
    command.current_dir(root.join("crates/site")).args(&argv);
    // trunk rejects NO_COLOR=1; it wants "true"/"false".
    if env::var("NO_COLOR").as_deref() == Ok("1") {
        command.env("NO_COLOR", "true");
    }

    let status = command
        .status()
        .map_err(|err| format!("failed to start `trunk`: {err}"))?;
    status_to_result("trunk", status)
}

fn exec(root: &Path, program: &str, args: &[&str]) -> Result<(), String> {
    let argv: Vec<String> = args.iter().map(ToString::to_string).collect();
    announce(program, &argv);

    let status = Command::new(program)
        .current_dir(root)
        .args(&argv)
        .status()
        .map_err(|err| format!("failed to start `{program}`: {err}"))?;
    status_to_result(program, status)
}

fn status_to_result(program: &str, status: ExitStatus) -> Result<(), String> {
    if status.success() {
        Ok(())
    } else {
        Err(format!("`{program}` exited with status {status}"))
    }
}

fn announce(program: &str, args: &[String]) {
    println!("+ {program} {}", args.join(" "));
}

fn tool_installed(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_or(false, |status| status.success())
}

fn wasm_target_installed() -> bool {
    Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map_or(false, |output| {
            String::from_utf8_lossy(&output.stdout)
                .lines()
                .any(|line| line.trim() == WASM_TARGET)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn serve_argv_opens_by_default() {
        let argv = TrunkAction::Serve.argv(&[]);
        assert_eq!(argv, strings(&["serve", "index.html", "--open"]));
    }

    #[test]
    fn serve_argv_honors_no_open_and_forwards_extra_flags() {
        let argv = TrunkAction::Serve.argv(&strings(&["--no-open", "--port", "9001"]));
        assert_eq!(argv, strings(&["serve", "index.html", "--port", "9001"]));
    }

    #[test]
    fn build_argv_adds_default_dist_unless_overridden() {
        let release = TrunkAction::Build { release: true }.argv(&[]);
        assert_eq!(
            release,
            strings(&["build", "index.html", "--release", "--dist", "target/trunk-dist"])
        );

        let custom =
            TrunkAction::Build { release: false }.argv(&strings(&["--dist=target/custom"]));
        assert_eq!(
            custom,
            strings(&["build", "index.html", "--dist=target/custom"])
        );
    }
}
